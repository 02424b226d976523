//! Hough-transform engine for curvature estimation from 2-D projections.
//!
//! The engine votes over an (angle, radius) parameter space: for every
//! point row and every probe angle in `[0, π)`, a pluggable [`RadiusModel`]
//! maps the point (together with an earlier reference point) to a candidate
//! radius, and the vote lands in the matching [`HoughSpace`] bin.
//!
//! Pipeline
//! - Accumulation: `find_hough_space` walks rows from `row_offset` upward
//!   so each vote pairs a point with a reference `row_offset` rows earlier,
//!   which decorrelates votes from nearly coincident neighbors.
//! - Bin admission: only finite radii inside `[0, max_radius)` are
//!   accumulated; non-finite values from degenerate geometry are dropped by
//!   the same range test.
//! - Peak extraction: the maximum bin converts back to polar coordinates.
//!   For the circular model this recovers the track's center of curvature.
//!
//! Notes
//! - A cloud with fewer rows than `row_offset + 1` yields an all-zero
//!   space; `find_center` reports that case as `None`.
//! - Equal maxima resolve to the lowest angle bin, then the lowest radius
//!   bin.

mod circular;
mod space;
mod transform;

pub use circular::{CircularHoughTransform, CircularModel};
pub use space::HoughSpace;
pub use transform::{HoughParams, HoughTransform, RadiusModel};
