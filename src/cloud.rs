//! Point-cloud storage and spatial nearest-neighbor queries.
//!
//! The cloud is an ordered, read-only sequence of 3-D hits with an optional
//! per-hit intensity. Every algorithm in this crate borrows the cloud; none
//! of them mutates it or keeps references past the call.
//!
//! Neighbor queries run on a [`kiddo`] immutable k-d tree built once per
//! cloud. Queries return point indices ordered by distance, which keeps the
//! downstream triplet generation deterministic.

use kiddo::{ImmutableKdTree, SquaredEuclidean};
use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// A single detector hit: 3-D position plus an optional scalar attribute.
///
/// Generators without an intensity channel leave it at zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub position: Vector3<f32>,
    pub intensity: f32,
}

impl Point3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vector3::new(x, y, z),
            intensity: 0.0,
        }
    }

    pub fn with_intensity(x: f32, y: f32, z: f32, intensity: f32) -> Self {
        Self {
            position: Vector3::new(x, y, z),
            intensity,
        }
    }
}

/// Ordered, immutable collection of hits owned by the caller.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PointCloud {
    points: Vec<Point3>,
}

impl PointCloud {
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, index: usize) -> &Point3 {
        &self.points[index]
    }

    pub fn position(&self, index: usize) -> Vector3<f32> {
        self.points[index].position
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point3> {
        self.points.iter()
    }

    /// Projects the cloud onto the x-y plane for the 2-D Hough path.
    pub fn xy(&self) -> Vec<Vector2<f32>> {
        self.points
            .iter()
            .map(|p| Vector2::new(p.position.x, p.position.y))
            .collect()
    }
}

impl std::ops::Index<usize> for PointCloud {
    type Output = Point3;

    fn index(&self, index: usize) -> &Point3 {
        &self.points[index]
    }
}

impl FromIterator<Point3> for PointCloud {
    fn from_iter<I: IntoIterator<Item = Point3>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// k-d tree over a cloud answering k-nearest-neighbor queries by index.
pub struct NeighborIndex {
    tree: ImmutableKdTree<f32, 3>,
}

impl NeighborIndex {
    /// Builds the index. The cloud must be non-empty.
    pub fn build(cloud: &PointCloud) -> Self {
        assert!(!cloud.is_empty(), "neighbor index requires a non-empty cloud");
        let coords: Vec<[f32; 3]> = cloud
            .iter()
            .map(|p| [p.position.x, p.position.y, p.position.z])
            .collect();
        Self {
            tree: ImmutableKdTree::new_from_slice(&coords),
        }
    }

    /// Returns up to `k` point indices closest to `query`, nearest first.
    ///
    /// The query position itself is returned when it is part of the cloud;
    /// callers that want strict neighbors must filter it out.
    pub fn nearest(&self, query: &Vector3<f32>, k: usize) -> Vec<usize> {
        self.tree
            .nearest_n::<SquaredEuclidean>(&[query.x, query.y, query.z], k)
            .into_iter()
            .map(|nn| nn.item as usize)
            .collect()
    }
}
