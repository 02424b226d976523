#![doc = include_str!("../README.md")]

// Core algorithm modules.
pub mod cluster;
pub mod hough;
pub mod triplet;

// Shared building blocks.
pub mod cloud;
pub mod config;
pub mod distance;
pub mod peaks;

// --- High-level re-exports -------------------------------------------------

pub use crate::cloud::{NeighborIndex, Point3, PointCloud};
pub use crate::cluster::{
    calculate_hc, cleanup_cluster_group, get_best_cluster_group, to_point_clusters, Cluster,
    ClusterGroup, ClusterHistory, ClusterParams, Linkage, PointClusters,
};
pub use crate::config::{load_config, ConfigError, TrackFinderConfig};
pub use crate::hough::{CircularHoughTransform, HoughParams, HoughSpace};
pub use crate::triplet::{generate_triplets, Triplet, TripletParams};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use track_finder::prelude::*;
/// use nalgebra::Vector2;
///
/// # fn main() {
/// let points: Vec<Vector2<f32>> = (0..100)
///     .map(|i| {
///         let phi = i as f32 * std::f32::consts::TAU / 100.0;
///         Vector2::new(4.0 * phi.cos() + 1.0, 4.0 * phi.sin() + 2.0)
///     })
///     .collect();
///
/// let hough = CircularHoughTransform::new(HoughParams {
///     num_bins: 500,
///     max_radius: 20.0,
///     ..Default::default()
/// });
/// if let Some(center) = hough.find_center(&points) {
///     println!("center of curvature: ({:.2}, {:.2})", center.x, center.y);
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::cloud::{Point3, PointCloud};
    pub use crate::cluster::{
        calculate_hc, cleanup_cluster_group, get_best_cluster_group, to_point_clusters,
        ClusterParams, Linkage,
    };
    pub use crate::hough::{CircularHoughTransform, HoughParams};
    pub use crate::triplet::{generate_triplets, TripletParams};
}
