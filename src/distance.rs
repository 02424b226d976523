//! Generic pairwise distance-matrix construction.
//!
//! Used by the clustering path to precompute all triplet-to-triplet
//! distances before the merge loop. Rows are evaluated in parallel; the
//! output is identical to the sequential evaluation because each entry is a
//! pure function of its pair.

use nalgebra::DMatrix;
use rayon::prelude::*;

/// Evaluates `metric` for every ordered pair of items.
///
/// The diagonal is forced to zero. For any symmetric metric the result
/// satisfies `d == d.transpose()` exactly, since both orders of each pair
/// are evaluated with the same arithmetic.
pub fn calculate_distance_matrix<T, M>(items: &[T], metric: M) -> DMatrix<f32>
where
    T: Sync,
    M: Fn(&T, &T) -> f32 + Sync,
{
    let n = items.len();
    let rows: Vec<Vec<f32>> = (0..n)
        .into_par_iter()
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        0.0
                    } else {
                        metric(&items[i], &items[j])
                    }
                })
                .collect()
        })
        .collect();

    let mut d = DMatrix::zeros(n, n);
    for (i, row) in rows.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            d[(i, j)] = value;
        }
    }
    d
}
