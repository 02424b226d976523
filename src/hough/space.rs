//! Dense (angle × radius) vote accumulator.

use nalgebra::DMatrix;

/// 2-D histogram of Hough votes.
///
/// Rows index angle bins over `[0, π)`, columns index radius bins over
/// `[0, max_radius)`. Both conversions use the lower bin edge; a radius that
/// truncates to the upper boundary bin is clamped into the last bin so the
/// edge vote is not lost.
#[derive(Clone, Debug)]
pub struct HoughSpace {
    counts: DMatrix<u64>,
    num_bins: usize,
    max_radius: f32,
}

/// Construction-time parameter validation shared with the transform, so
/// malformed bin geometry fails before any accumulation starts.
pub(crate) fn validate_geometry(num_bins: usize, max_radius: f32) {
    assert!(num_bins > 0, "hough space requires at least one bin");
    assert!(
        max_radius.is_finite() && max_radius > 0.0,
        "hough space requires a positive, finite max radius"
    );
}

impl HoughSpace {
    pub fn new(num_bins: usize, max_radius: f32) -> Self {
        validate_geometry(num_bins, max_radius);
        Self {
            counts: DMatrix::zeros(num_bins, num_bins),
            num_bins,
            max_radius,
        }
    }

    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    pub fn count_at(&self, angle_bin: usize, radius_bin: usize) -> u64 {
        self.counts[(angle_bin, radius_bin)]
    }

    /// Accumulates one vote when `radius` passes bin admission.
    ///
    /// The range test deliberately rejects NaN and infinities along with
    /// ordinary out-of-range values.
    pub(crate) fn cast_vote(&mut self, angle_bin: usize, radius: f32) {
        if (0.0..self.max_radius).contains(&radius) {
            let radius_bin = self.bin_from_radius(radius);
            self.counts[(angle_bin, radius_bin)] += 1;
        }
    }

    /// Lower edge of an angle bin, in radians.
    pub fn angle_from_bin(&self, bin: usize) -> f32 {
        bin as f32 * std::f32::consts::PI / self.num_bins as f32
    }

    /// Lower edge of a radius bin.
    pub fn radius_from_bin(&self, bin: usize) -> f32 {
        bin as f32 * self.max_radius / self.num_bins as f32
    }

    /// Truncating radius-to-bin conversion, clamped into the last bin.
    pub fn bin_from_radius(&self, radius: f32) -> usize {
        let bin = (radius / self.max_radius * self.num_bins as f32) as usize;
        bin.min(self.num_bins - 1)
    }

    /// Location of the maximum bin as `(angle_bin, radius_bin)`.
    ///
    /// Ties resolve to the lowest angle bin, then the lowest radius bin.
    pub fn find_maximum(&self) -> (usize, usize) {
        let mut best = (0, 0);
        let mut best_count = 0u64;
        for angle_bin in 0..self.num_bins {
            for radius_bin in 0..self.num_bins {
                let count = self.counts[(angle_bin, radius_bin)];
                if count > best_count {
                    best_count = count;
                    best = (angle_bin, radius_bin);
                }
            }
        }
        best
    }

    /// Largest vote count anywhere in the space.
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
