//! Histogram-accumulation engine shared by all radius models.

use log::debug;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::space::{validate_geometry, HoughSpace};

/// Strategy mapping a point pair and a probe direction to a radius.
///
/// `row` is the current point, `reference` the point `row_offset` rows
/// earlier; `cos_th`/`sin_th` describe the probe angle. Returning a
/// non-finite value is legal and simply casts no vote.
pub trait RadiusModel {
    fn radius(
        &self,
        points: &[Vector2<f32>],
        row: usize,
        reference: usize,
        cos_th: f32,
        sin_th: f32,
    ) -> f32;
}

/// Accumulation parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Number of angle bins over `[0, π)`; radius bins reuse the same count.
    pub num_bins: usize,
    /// Upper end of the radius range; votes at or beyond it are dropped.
    pub max_radius: f32,
    /// Minimum index gap between a point and its reference point.
    pub row_offset: usize,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            num_bins: 500,
            max_radius: 2000.0,
            row_offset: 5,
        }
    }
}

/// Hough engine combining [`HoughParams`] with a [`RadiusModel`].
#[derive(Clone, Debug)]
pub struct HoughTransform<M> {
    params: HoughParams,
    model: M,
}

impl<M: RadiusModel> HoughTransform<M> {
    /// Builds the engine, validating the parameters.
    pub fn with_model(params: HoughParams, model: M) -> Self {
        validate_geometry(params.num_bins, params.max_radius);
        Self { params, model }
    }

    pub fn params(&self) -> &HoughParams {
        &self.params
    }

    /// Accumulates the full Hough space for `points`.
    ///
    /// Fewer than `row_offset + 1` points produce an all-zero space rather
    /// than an error; callers inspecting the maximum must handle that case.
    pub fn find_hough_space(&self, points: &[Vector2<f32>]) -> HoughSpace {
        let mut space = HoughSpace::new(self.params.num_bins, self.params.max_radius);
        if points.len() <= self.params.row_offset {
            debug!(
                "hough: {} point(s) with row offset {}, casting no votes",
                points.len(),
                self.params.row_offset
            );
            return space;
        }

        let directions: Vec<(f32, f32)> = (0..self.params.num_bins)
            .map(|bin| {
                let (sin_th, cos_th) = space.angle_from_bin(bin).sin_cos();
                (cos_th, sin_th)
            })
            .collect();

        for row in self.params.row_offset..points.len() {
            let reference = row - self.params.row_offset;
            for (bin, &(cos_th, sin_th)) in directions.iter().enumerate() {
                let radius = self.model.radius(points, row, reference, cos_th, sin_th);
                space.cast_vote(bin, radius);
            }
        }
        space
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Votes a fixed radius regardless of the input geometry.
    struct ConstantModel(f32);

    impl RadiusModel for ConstantModel {
        fn radius(
            &self,
            _points: &[Vector2<f32>],
            _row: usize,
            _reference: usize,
            _cos_th: f32,
            _sin_th: f32,
        ) -> f32 {
            self.0
        }
    }

    fn params(num_bins: usize, max_radius: f32, row_offset: usize) -> HoughParams {
        HoughParams {
            num_bins,
            max_radius,
            row_offset,
        }
    }

    #[test]
    fn every_row_votes_in_every_angle_bin() {
        let transform = HoughTransform::with_model(params(8, 10.0, 2), ConstantModel(5.0));
        let points = vec![Vector2::new(0.0, 0.0); 6];
        let space = transform.find_hough_space(&points);

        // 4 voting rows x 8 angle bins, all in the radius bin holding 5.0.
        let radius_bin = space.bin_from_radius(5.0);
        for angle_bin in 0..8 {
            assert_eq!(space.count_at(angle_bin, radius_bin), 4);
        }
        assert_eq!(space.max_count(), 4);
    }

    #[test]
    fn short_cloud_casts_no_votes() {
        let transform = HoughTransform::with_model(params(8, 10.0, 10), ConstantModel(5.0));
        let points = vec![Vector2::new(0.0, 0.0); 5];
        let space = transform.find_hough_space(&points);
        assert_eq!(space.max_count(), 0);
    }

    #[test]
    fn out_of_range_model_output_is_dropped() {
        let transform = HoughTransform::with_model(params(8, 10.0, 1), ConstantModel(42.0));
        let points = vec![Vector2::new(0.0, 0.0); 4];
        assert_eq!(transform.find_hough_space(&points).max_count(), 0);
    }

    #[test]
    #[should_panic(expected = "at least one bin")]
    fn zero_bins_rejected_at_construction() {
        HoughTransform::with_model(params(0, 10.0, 5), ConstantModel(1.0));
    }
}
