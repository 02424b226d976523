//! Hierarchical agglomerative clustering of triplets into tracks.
//!
//! Pipeline
//! - Distance matrix: every triplet pair is scored once by a pluggable
//!   triplet metric (default: fused positional/angular distance, see
//!   [`default_triplet_metric`]).
//! - Merge loop: starting from one singleton cluster per triplet, the two
//!   closest clusters under a pluggable linkage metric merge repeatedly;
//!   every partition is recorded together with the distance of the merge
//!   that changes it next ([`ClusterHistory`]).
//! - Selection: [`get_best_cluster_group`] picks the most stable partition
//!   before a large jump in merge cost, [`cleanup_cluster_group`] discards
//!   undersized clusters, and [`to_point_clusters`] expands the survivors
//!   back into deduplicated point-index clusters.
//!
//! Notes
//! - Single-link favors the chains of locally consistent triplets typical
//!   of curving tracks and is the default; complete-link ships alongside.
//! - The history is an append-only log of immutable partition snapshots;
//!   clusters never reference each other.
//! - Equal closest-pair distances resolve to the lowest pair of cluster
//!   indices, making the merge order deterministic.

mod hierarchical;
mod metrics;
mod selection;

use serde::{Deserialize, Serialize};

use crate::triplet::Triplet;

pub use hierarchical::calculate_hc;
pub use metrics::{
    complete_link_metric, default_triplet_metric, single_link_metric, ClusterMetricFn, Linkage,
};
pub use selection::{cleanup_cluster_group, get_best_cluster_group, to_point_clusters};

/// Ordered set of triplet indices; insertion order is preserved.
pub type Cluster = Vec<usize>;

/// One partition snapshot from the merge history.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ClusterGroup {
    pub clusters: Vec<Cluster>,
    /// Linkage distance of the next merge that changes this partition.
    pub best_cluster_distance: f32,
}

/// Full merge history, from all-singletons down to the empty sentinel.
///
/// Invariant: `history[k]` holds exactly `triplets.len() - k` clusters, so
/// the log has `triplets.len() + 1` entries and ends with an empty
/// partition carrying the final merge distance.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ClusterHistory {
    pub triplets: Vec<Triplet>,
    pub history: Vec<ClusterGroup>,
}

/// Final point-level segmentation.
#[derive(Clone, Debug, Serialize)]
pub struct PointClusters {
    /// Total number of points in the source cloud.
    pub point_count: usize,
    /// Per-track point indices, deduplicated and ascending.
    pub clusters: Vec<Vec<usize>>,
}

/// Clustering configuration surface.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterParams {
    /// Cluster-to-cluster linkage rule.
    pub linkage: Linkage,
    /// Merge-distance jump that marks the best partition.
    ///
    /// A fixed heuristic with no normalization against data scale; treat it
    /// as tuning-sensitive.
    pub best_distance_delta: f32,
    /// Smallest cluster kept by the cleanup pass.
    pub min_triplets: usize,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            linkage: Linkage::Single,
            best_distance_delta: 19.0,
            min_triplets: 7,
        }
    }
}
