//! Circular-arc specialization of the Hough engine.

use log::debug;
use nalgebra::Vector2;

use super::space::HoughSpace;
use super::transform::{HoughParams, HoughTransform, RadiusModel};

/// Perpendicular-bisector radius model for circular arcs.
///
/// For a candidate direction `(cos θ, sin θ)` and the point pair
/// `(p0, p1) = (points[reference], points[row])`, the returned radius is the
/// distance from the origin, along that direction, to the point on the
/// perpendicular bisector of the segment `p0 p1` — the standard two-point
/// parametrization of a circle center. Collinear degenerate pairs make the
/// denominator vanish and yield a non-finite radius, which the engine's bin
/// admission drops.
#[derive(Clone, Copy, Debug, Default)]
pub struct CircularModel;

impl RadiusModel for CircularModel {
    fn radius(
        &self,
        points: &[Vector2<f32>],
        row: usize,
        reference: usize,
        cos_th: f32,
        sin_th: f32,
    ) -> f32 {
        let p1 = points[row];
        let p0 = points[reference];
        let numer = (p1.x * p1.x - p0.x * p0.x) + (p1.y * p1.y - p0.y * p0.y);
        let denom = 2.0 * ((p1.x - p0.x) * cos_th + (p1.y - p0.y) * sin_th);
        numer / denom
    }
}

/// Hough engine fixed to the circular radius model.
pub type CircularHoughTransform = HoughTransform<CircularModel>;

impl CircularHoughTransform {
    pub fn new(params: HoughParams) -> Self {
        Self::with_model(params, CircularModel)
    }

    /// Locates the center of curvature of the dominant arc in `points`.
    ///
    /// The maximum Hough bin converts back to Cartesian coordinates. Returns
    /// `None` when no votes were cast (too few points, or every candidate
    /// radius failed bin admission).
    pub fn find_center(&self, points: &[Vector2<f32>]) -> Option<Vector2<f32>> {
        let space = self.find_hough_space(points);
        if space.max_count() == 0 {
            debug!("hough: all-zero space for {} point(s), no center", points.len());
            return None;
        }

        let (angle_bin, radius_bin) = space.find_maximum();
        Some(center_from_bins(&space, angle_bin, radius_bin))
    }
}

/// Converts a winning (angle, radius) bin back to a Cartesian center.
fn center_from_bins(space: &HoughSpace, angle_bin: usize, radius_bin: usize) -> Vector2<f32> {
    let angle = space.angle_from_bin(angle_bin);
    let radius = space.radius_from_bin(radius_bin);
    Vector2::new(radius * angle.cos(), radius * angle.sin())
}
