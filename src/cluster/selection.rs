//! Best-partition selection, cleanup, and point-index expansion.

use log::debug;

use super::{ClusterGroup, ClusterHistory, PointClusters};
use crate::triplet::Triplet;

/// Picks the most stable partition from a merge history.
///
/// Scans the recorded partitions in order; whenever the merge distance
/// exceeds the last *retained* distance by at least
/// `best_cluster_distance_delta`, that partition becomes the new candidate.
/// The final candidate is the partition just before clusters that are
/// clearly geometrically distinct start being force-merged. The delta is an
/// absolute threshold with no normalization against data scale.
pub fn get_best_cluster_group(
    history: &ClusterHistory,
    best_cluster_distance_delta: f32,
) -> ClusterGroup {
    let Some(first) = history.history.first() else {
        return ClusterGroup::default();
    };

    let mut best = first;
    let mut last_retained = first.best_cluster_distance;
    for group in &history.history {
        if group.best_cluster_distance - last_retained >= best_cluster_distance_delta {
            best = group;
            last_retained = group.best_cluster_distance;
        }
    }
    best.clone()
}

/// Drops every cluster with fewer than `min_triplets` members.
///
/// Undersized clusters are treated as noise or spurious fits. The cluster
/// count never increases and the recorded merge distance is kept.
pub fn cleanup_cluster_group(group: &ClusterGroup, min_triplets: usize) -> ClusterGroup {
    let clusters: Vec<_> = group
        .clusters
        .iter()
        .filter(|cluster| cluster.len() >= min_triplets)
        .cloned()
        .collect();
    debug!(
        "cleanup: {} -> {} cluster(s) with at least {} triplet(s)",
        group.clusters.len(),
        clusters.len(),
        min_triplets
    );
    ClusterGroup {
        clusters,
        best_cluster_distance: group.best_cluster_distance,
    }
}

/// Expands triplet clusters into point-index clusters.
///
/// Each triplet contributes its three point indices; duplicates collapse
/// because the output is point-index-addressed. Per-cluster indices come
/// out ascending and within `[0, point_count)`.
pub fn to_point_clusters(
    triplets: &[Triplet],
    group: &ClusterGroup,
    point_count: usize,
) -> PointClusters {
    let mut clusters = Vec::with_capacity(group.clusters.len());
    for cluster in &group.clusters {
        let mut member = vec![false; point_count];
        for &triplet_index in cluster {
            let triplet = &triplets[triplet_index];
            for point_index in [triplet.a, triplet.b, triplet.c] {
                debug_assert!(point_index < point_count, "point index out of range");
                member[point_index] = true;
            }
        }
        clusters.push(
            member
                .iter()
                .enumerate()
                .filter_map(|(index, &m)| m.then_some(index))
                .collect(),
        );
    }
    PointClusters {
        point_count,
        clusters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn group_with(counts: &[usize], distance: f32) -> ClusterGroup {
        let mut next = 0;
        let clusters = counts
            .iter()
            .map(|&count| {
                let cluster: Vec<usize> = (next..next + count).collect();
                next += count;
                cluster
            })
            .collect();
        ClusterGroup {
            clusters,
            best_cluster_distance: distance,
        }
    }

    fn history_with(distances: &[f32]) -> ClusterHistory {
        let n = distances.len();
        ClusterHistory {
            triplets: Vec::new(),
            history: distances
                .iter()
                .enumerate()
                .map(|(k, &distance)| group_with(&vec![1; n - k], distance))
                .collect(),
        }
    }

    #[test]
    fn best_group_sits_at_the_last_big_jump() {
        let history = history_with(&[1.0, 1.0, 2.0, 30.0, 30.0]);
        let best = get_best_cluster_group(&history, 19.0);
        assert_eq!(best.clusters.len(), 2);
        assert_eq!(best.best_cluster_distance, 30.0);
    }

    #[test]
    fn no_jump_keeps_the_initial_partition() {
        let history = history_with(&[1.0, 2.0, 3.0, 4.0]);
        let best = get_best_cluster_group(&history, 19.0);
        assert_eq!(best.clusters.len(), 4);
    }

    #[test]
    fn successive_jumps_retain_the_latest() {
        let history = history_with(&[1.0, 25.0, 26.0, 60.0]);
        let best = get_best_cluster_group(&history, 19.0);
        // 25 triggers against 1; 60 triggers against 25.
        assert_eq!(best.clusters.len(), 1);
        assert_eq!(best.best_cluster_distance, 60.0);
    }

    #[test]
    fn empty_history_yields_empty_group() {
        let history = ClusterHistory::default();
        let best = get_best_cluster_group(&history, 19.0);
        assert!(best.clusters.is_empty());
    }

    #[test]
    fn cleanup_drops_small_clusters_only() {
        let group = ClusterGroup {
            clusters: vec![(0..8).collect(), (8..11).collect(), (11..20).collect()],
            best_cluster_distance: 7.5,
        };
        let cleaned = cleanup_cluster_group(&group, 7);
        assert_eq!(cleaned.clusters.len(), 2);
        assert!(cleaned.clusters.iter().all(|c| c.len() >= 7));
        assert_eq!(cleaned.best_cluster_distance, 7.5);
    }

    #[test]
    fn cleanup_never_increases_cluster_count() {
        let group = group_with(&[1, 2, 3], 0.0);
        for min_triplets in 0..5 {
            let cleaned = cleanup_cluster_group(&group, min_triplets);
            assert!(cleaned.clusters.len() <= group.clusters.len());
        }
    }

    fn triplet(a: usize, b: usize, c: usize) -> Triplet {
        Triplet {
            a,
            b,
            c,
            center: Vector3::zeros(),
            direction: Vector3::x(),
            error: 0.0,
        }
    }

    #[test]
    fn point_expansion_deduplicates_shared_indices() {
        let triplets = vec![triplet(0, 1, 2), triplet(1, 2, 3), triplet(4, 5, 6)];
        let group = ClusterGroup {
            clusters: vec![vec![0, 1], vec![2]],
            best_cluster_distance: 0.0,
        };
        let points = to_point_clusters(&triplets, &group, 10);

        assert_eq!(points.point_count, 10);
        assert_eq!(points.clusters.len(), 2);
        assert_eq!(points.clusters[0], vec![0, 1, 2, 3]);
        assert_eq!(points.clusters[1], vec![4, 5, 6]);
        for cluster in &points.clusters {
            assert!(cluster.iter().all(|&i| i < points.point_count));
        }
    }
}
