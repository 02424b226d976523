//! Triplet and cluster-linkage distance metrics.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use super::Cluster;
use crate::cloud::PointCloud;
use crate::triplet::Triplet;

/// Cluster-to-cluster linkage over a precomputed triplet-distance matrix.
pub type ClusterMetricFn = fn(&Cluster, &Cluster, &DMatrix<f32>) -> f32;

/// Fused positional/angular triplet distance.
///
/// Combines the squared perpendicular distance from each triplet's fitted
/// line to the other's center (both directions, taking the max as a
/// conservative separation measure) with an exponential penalty on
/// direction misalignment, `2^(1 + 12·(1 − |d̂_l · d̂_r|))`. Near-parallel,
/// spatially close triplets score close to the floor of 2; any angular
/// mismatch is penalized super-linearly.
pub fn default_triplet_metric(lhs: &Triplet, rhs: &Triplet, _cloud: &PointCloud) -> f32 {
    let perpendicular_a = (rhs.center
        - (lhs.center + lhs.direction * lhs.direction.dot(&(rhs.center - lhs.center))))
    .norm_squared();
    let perpendicular_b = (lhs.center
        - (rhs.center + rhs.direction * rhs.direction.dot(&(lhs.center - rhs.center))))
    .norm_squared();

    let misalignment = 1.0 - lhs.direction.dot(&rhs.direction).abs();

    perpendicular_a.max(perpendicular_b) + (1.0 + 12.0 * misalignment).exp2()
}

/// Minimum pairwise triplet distance between two clusters.
pub fn single_link_metric(lhs: &Cluster, rhs: &Cluster, d: &DMatrix<f32>) -> f32 {
    let mut result = f32::INFINITY;
    for &a in lhs {
        for &b in rhs {
            let distance = d[(a, b)];
            if distance < result {
                result = distance;
            }
        }
    }
    result
}

/// Maximum pairwise triplet distance between two clusters.
pub fn complete_link_metric(lhs: &Cluster, rhs: &Cluster, d: &DMatrix<f32>) -> f32 {
    let mut result = 0.0f32;
    for &a in lhs {
        for &b in rhs {
            let distance = d[(a, b)];
            if distance > result {
                result = distance;
            }
        }
    }
    result
}

/// Linkage rule selector for the configuration surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Linkage {
    Single,
    Complete,
}

impl Linkage {
    pub fn metric(self) -> ClusterMetricFn {
        match self {
            Linkage::Single => single_link_metric,
            Linkage::Complete => complete_link_metric,
        }
    }
}
