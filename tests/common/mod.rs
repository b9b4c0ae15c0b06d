// do we have to use this to silence warnings?
#![allow(dead_code)]

// the reason this is named mod.rs has to do with some complexities of how
// testing is handled
//
// we are following the advice of the rust book
// https://doc.rust-lang.org/book/ch11-03-test-organization.html#submodules-in-integration-tests

use rand::distr::{Distribution, Uniform};
use rand_xoshiro::Xoshiro256PlusPlus;
use rand_xoshiro::rand_core::SeedableRng;
use spatialtau::PointSet;

// based on numpy!
// https://numpy.org/doc/stable/reference/generated/numpy.isclose.html
pub fn isclose(actual: f64, ref_val: f64, rtol: f64, atol: f64) -> bool {
    let actual_nan = actual.is_nan();
    let ref_nan = ref_val.is_nan();
    if actual_nan || ref_nan {
        actual_nan && ref_nan
    } else if actual.is_infinite() || ref_val.is_infinite() {
        actual == ref_val
    } else {
        (actual - ref_val).abs() <= (atol + rtol * ref_val.abs())
    }
}

// I think this should really be a macro
pub fn assert_allclose(actual: &[f64], expected: &[f64], rtol: f64, atol: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "the lengths of actual and expected are unequal",
    );
    for i in 0..expected.len() {
        let actual_val = actual[i];
        let ref_val = expected[i];
        assert!(
            isclose(actual_val, ref_val, rtol, atol),
            "values at index {i} aren't to within rtol={rtol}, atol={atol}\
            \n  actual   = {actual_val}\
            \n  expected = {ref_val}",
        );
    }
}

/// generates `n_points` points scattered uniformly over a `width` x `width`
/// square. Types are drawn uniformly from `0..n_types`. The logical ids are
/// the array indices.
pub fn random_points(seed: u64, n_points: usize, width: f64, n_types: i32) -> PointSet {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let coord_dist = Uniform::new(0.0, width).unwrap();
    let type_dist = Uniform::try_from(0..n_types).unwrap();

    let x: Vec<f64> = (0..n_points).map(|_| coord_dist.sample(&mut rng)).collect();
    let y: Vec<f64> = (0..n_points).map(|_| coord_dist.sample(&mut rng)).collect();
    let types: Vec<i32> = (0..n_points).map(|_| type_dist.sample(&mut rng)).collect();
    PointSet::with_index_ids(&x, &y, &types).unwrap()
}

/// A deliberately naive reference implementation that works with owned
/// tuples of `(x, y, type, logical_id)`. It returns `(matched, mismatched)`
pub fn naive_counts(
    points: &[(f64, f64, i32, i64)],
    low: f64,
    high: f64,
    type_a: i32,
    type_b: i32,
) -> (u64, u64) {
    let mut matched = 0;
    let mut mismatched = 0;
    for a in points.iter().filter(|p| p.2 == type_a) {
        for b in points.iter().filter(|p| p.3 != a.3) {
            let (dx, dy) = (a.0 - b.0, a.1 - b.1);
            let dist = (dx * dx + dy * dy).sqrt();
            if low <= dist && dist <= high {
                if b.2 == type_b {
                    matched += 1;
                } else {
                    mismatched += 1;
                }
            }
        }
    }
    (matched, mismatched)
}

/// unpacks a [`PointSet`] into a vector of tuples for [`naive_counts`]
pub fn as_tuples(points: &PointSet) -> Vec<(f64, f64, i32, i64)> {
    let view = points.view();
    (0..view.n_points())
        .map(|i| {
            (
                view.x(i),
                view.y(i),
                view.types()[i],
                view.logical_ids()[i],
            )
        })
        .collect()
}
