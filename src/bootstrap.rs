use ndarray::Array2;
use rand::Rng;

use crate::{PointSet, TypedPoints};

/// Draw `points.n_points()` entries from `points`, uniformly and with
/// replacement.
///
/// Every drawn entry keeps the logical id of the entry it was drawn from.
/// Consequently, an observation that gets drawn several times never pairs
/// with its own copies.
pub fn resample_with_replacement<R: Rng>(points: &TypedPoints, rng: &mut R) -> PointSet {
    let n_points = points.n_points();
    let mut positions = Array2::zeros([2, n_points]);
    let mut types = Vec::with_capacity(n_points);
    let mut logical_ids = Vec::with_capacity(n_points);

    for i in 0..n_points {
        let src = rng.random_range(0..n_points);
        positions[[0, i]] = points.x(src);
        positions[[1, i]] = points.y(src);
        types.push(points.types()[src]);
        logical_ids.push(points.logical_ids()[src]);
    }
    PointSet::from_parts(positions, types, logical_ids)
}
