//! Triplet sampling of a point cloud.
//!
//! A triplet is three points `(a, b, c)` treated as one local sample of a
//! track: `b` is the anchor, `a` and `c` are neighbors on either side. Each
//! retained triplet carries the fitted local center (the centroid), the unit
//! track direction, and the fit error — the angular deviation between the
//! two legs, `1 − cos ∠(b−a, c−b)`. Straight, evenly spaced samples score
//! zero; kinks grow the error quickly, so a small `max_error` keeps only
//! locally linear configurations.

use log::debug;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::cloud::{NeighborIndex, PointCloud};

const DEGENERATE_EPS: f32 = 1e-6;

/// Local track sample: three point indices plus the fitted line.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Triplet {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    /// Centroid of the three points.
    pub center: Vector3<f32>,
    /// Unit vector from `a` towards `c`.
    pub direction: Vector3<f32>,
    /// Angular fit residual, `0` for perfectly collinear legs.
    pub error: f32,
}

/// Triplet generation parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TripletParams {
    /// Nearest-neighbor candidates queried per anchor point.
    pub nn_candidates: usize,
    /// Lowest-error triplets retained per anchor point.
    pub n_best: usize,
    /// Largest admissible fit error.
    pub max_error: f32,
}

impl Default for TripletParams {
    fn default() -> Self {
        Self {
            nn_candidates: 12,
            n_best: 2,
            max_error: 0.015,
        }
    }
}

/// Samples `cloud` with locally linear triplets.
///
/// For each anchor, every unordered pair drawn from its nearest neighbors is
/// fitted; at most `n_best` triplets with `error <= max_error` survive per
/// anchor. Anchors with too few usable neighbors contribute nothing, as do
/// clouds with fewer than three points.
pub fn generate_triplets(cloud: &PointCloud, params: &TripletParams) -> Vec<Triplet> {
    if cloud.len() < 3 {
        debug!("triplets: cloud of {} point(s) is too small", cloud.len());
        return Vec::new();
    }

    let index = NeighborIndex::build(cloud);
    let mut triplets = Vec::new();
    let mut candidates = Vec::new();
    for b in 0..cloud.len() {
        let neighbors: Vec<usize> = index
            .nearest(&cloud.position(b), params.nn_candidates + 1)
            .into_iter()
            .filter(|&i| i != b)
            .take(params.nn_candidates)
            .collect();

        candidates.clear();
        for (i, &a) in neighbors.iter().enumerate() {
            for &c in &neighbors[i + 1..] {
                if let Some(triplet) = fit_triplet(cloud, a, b, c, params.max_error) {
                    candidates.push(triplet);
                }
            }
        }

        candidates.sort_by(|lhs, rhs| {
            lhs.error.partial_cmp(&rhs.error).unwrap_or(Ordering::Equal)
        });
        triplets.extend(candidates.iter().take(params.n_best));
    }

    debug!(
        "triplets: {} point(s) -> {} triplet(s)",
        cloud.len(),
        triplets.len()
    );
    triplets
}

/// Fits one candidate triplet, rejecting degenerate or bent configurations.
fn fit_triplet(
    cloud: &PointCloud,
    a: usize,
    b: usize,
    c: usize,
    max_error: f32,
) -> Option<Triplet> {
    let pa = cloud.position(a);
    let pb = cloud.position(b);
    let pc = cloud.position(c);

    let ab = pb - pa;
    let bc = pc - pb;
    let ac = pc - pa;
    let (norm_ab, norm_bc, norm_ac) = (ab.norm(), bc.norm(), ac.norm());
    if norm_ab <= DEGENERATE_EPS || norm_bc <= DEGENERATE_EPS || norm_ac <= DEGENERATE_EPS {
        return None;
    }

    let error = 1.0 - ab.dot(&bc) / (norm_ab * norm_bc);
    if error > max_error {
        return None;
    }

    Some(Triplet {
        a,
        b,
        c,
        center: (pa + pb + pc) / 3.0,
        direction: ac / norm_ac,
        error,
    })
}
