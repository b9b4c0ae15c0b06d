//! The brute-force neighbor scan that every estimator is built upon.
//!
//! For a reference type `A` and a target type `B`, every point `j` of type
//! `A` acts as the "from" point and every other point `k` is a candidate
//! neighbor. The reference type only filters the outer point, so unordered
//! pairs are **not** deduplicated: when both points have type `A`, `(j, k)`
//! and `(k, j)` contribute independently.
//!
//! Pairs of entries that share a logical id are always skipped (this
//! includes `j == k`).

use crate::{DistanceBand, Error, TypedPoints};

/// The reserved reference-type value that requests the calculation for any
/// reference type. That calculation is not implemented.
pub const ANY_TYPE: i32 = -1;

/// The counts produced by a single scan over one distance band.
///
/// Every in-range pair lands in exactly one of the two buckets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PairCounts {
    /// in-range pairs where the neighbor has the target type
    pub matched: u64,
    /// in-range pairs where the neighbor has any other type
    pub mismatched: u64,
}

impl PairCounts {
    /// number of in-range pairs whose "from" point has the reference type
    pub fn in_range_total(&self) -> u64 {
        self.matched + self.mismatched
    }

    /// subset of [`Self::in_range_total`] where the neighbor has the target
    /// type
    pub fn in_range_target(&self) -> u64 {
        self.matched
    }
}

/// Returns an error if `type_a` requests the untyped calculation
pub(crate) fn check_reference_type(type_a: i32) -> Result<(), Error> {
    if type_a == ANY_TYPE {
        Err(Error::unsupported_reference_type(type_a))
    } else {
        Ok(())
    }
}

/// Count the pairs in `band` that have a "from" point of type `type_a`,
/// split by whether the neighbor has type `type_b`.
pub fn count_pairs(
    points: &TypedPoints,
    band: &DistanceBand,
    type_a: i32,
    type_b: i32,
) -> Result<PairCounts, Error> {
    check_reference_type(type_a)?;
    Ok(scan_band(points, band, type_a, type_b))
}

/// the actual scan. `type_a` must already have been checked.
pub(crate) fn scan_band(
    points: &TypedPoints,
    band: &DistanceBand,
    type_a: i32,
    type_b: i32,
) -> PairCounts {
    let types = points.types();
    let ids = points.logical_ids();
    let mut counts = PairCounts::default();

    for j in 0..points.n_points() {
        if types[j] != type_a {
            continue;
        }
        for k in 0..points.n_points() {
            if ids[k] == ids[j] {
                continue;
            }
            if band.contains(points.distance(j, k)) {
                if types[k] == type_b {
                    counts.matched += 1;
                } else {
                    counts.mismatched += 1;
                }
            }
        }
    }
    counts
}
