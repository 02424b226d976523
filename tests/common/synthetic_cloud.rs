use nalgebra::Vector2;
use track_finder::{Point3, PointCloud};

/// Samples `n` points on a circle in the x-y plane, endpoint inclusive.
pub fn circle_points(center: Vector2<f32>, radius: f32, n: usize) -> Vec<Vector2<f32>> {
    assert!(n > 1, "need at least two samples");
    (0..n)
        .map(|i| {
            let phi = i as f32 * std::f32::consts::TAU / (n - 1) as f32;
            Vector2::new(
                radius * phi.cos() + center.x,
                radius * phi.sin() + center.y,
            )
        })
        .collect()
}

/// Parallel straight tracks along x, stacked `separation` apart in y.
///
/// Track `t` occupies point indices `[t * points_per_track,
/// (t + 1) * points_per_track)`; all tracks use unit spacing.
///
/// With three or more tracks, vertically aligned points on consecutive
/// tracks are collinear, so keep `separation` above the neighbor reach at
/// the track ends (the `nn_candidates` nearest points span that many units
/// of a lone track) or the triplet generator sees zero-error triplets that
/// bridge the tracks.
pub fn parallel_tracks(num_tracks: usize, points_per_track: usize, separation: f32) -> PointCloud {
    let mut points = Vec::with_capacity(num_tracks * points_per_track);
    for t in 0..num_tracks {
        for i in 0..points_per_track {
            points.push(Point3::new(i as f32, t as f32 * separation, 0.0));
        }
    }
    PointCloud::new(points)
}
