//! Agglomerative merge loop with full history recording.

use log::debug;
use nalgebra::DMatrix;

use super::{Cluster, ClusterGroup, ClusterHistory};
use crate::cloud::PointCloud;
use crate::distance::calculate_distance_matrix;
use crate::triplet::Triplet;

/// Runs hierarchical agglomerative clustering over `triplets`.
///
/// Builds the pairwise triplet-distance matrix with `triplet_metric`, then
/// repeatedly merges the two closest clusters under `cluster_metric`,
/// recording every partition together with the distance of its next merge.
/// Equal closest-pair distances resolve to the lowest pair of cluster
/// indices.
///
/// The returned log runs from the all-singleton partition down to a final
/// empty sentinel, so `history[k]` always holds `triplets.len() - k`
/// clusters; the single-cluster partition and the sentinel both carry the
/// last merge distance.
pub fn calculate_hc<L, M>(
    cloud: &PointCloud,
    triplets: &[Triplet],
    cluster_metric: L,
    triplet_metric: M,
) -> ClusterHistory
where
    L: Fn(&Cluster, &Cluster, &DMatrix<f32>) -> f32,
    M: Fn(&Triplet, &Triplet, &PointCloud) -> f32 + Sync,
{
    let d = calculate_distance_matrix(triplets, |lhs, rhs| triplet_metric(lhs, rhs, cloud));

    let mut current = ClusterGroup {
        clusters: (0..triplets.len()).map(|i| vec![i]).collect(),
        best_cluster_distance: 0.0,
    };
    let mut result = ClusterHistory {
        triplets: triplets.to_vec(),
        history: Vec::with_capacity(triplets.len() + 1),
    };

    while current.clusters.len() > 1 {
        let (i, j, distance) = closest_pair(&current.clusters, &d, &cluster_metric);
        current.best_cluster_distance = distance;
        result.history.push(current.clone());

        let merged = current.clusters.remove(j);
        current.clusters[i].extend(merged);
    }
    result.history.push(current.clone());

    // Empty sentinel keeping `history[k].clusters.len() == n - k` for all k.
    if !current.clusters.is_empty() {
        current.clusters.clear();
        result.history.push(current);
    }

    debug!(
        "hc: {} triplet(s), {} history entries",
        triplets.len(),
        result.history.len()
    );
    result
}

/// Globally closest cluster pair; ties resolve to the lowest `(i, j)`.
fn closest_pair<L>(clusters: &[Cluster], d: &DMatrix<f32>, cluster_metric: &L) -> (usize, usize, f32)
where
    L: Fn(&Cluster, &Cluster, &DMatrix<f32>) -> f32,
{
    let mut best = (0, 1);
    let mut best_distance = f32::INFINITY;
    for i in 0..clusters.len() {
        for j in (i + 1)..clusters.len() {
            let distance = cluster_metric(&clusters[i], &clusters[j], d);
            if distance < best_distance {
                best_distance = distance;
                best = (i, j);
            }
        }
    }
    (best.0, best.1, best_distance)
}
