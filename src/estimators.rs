use std::str::FromStr;

use log::debug;

use crate::pair_counter::{PairCounts, check_reference_type, scan_band};
use crate::{BandSet, Error, TypedPoints};

/// Selects how the counts from a band are combined into an estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EstimatorKind {
    /// `matched / (matched + mismatched)`: the fraction of in-range
    /// neighbors that have the target type
    Pi,
    /// `matched / mismatched`: the odds that an in-range neighbor has the
    /// target type
    Theta,
}

impl EstimatorKind {
    /// every name accepted when parsing an [`EstimatorKind`]
    pub const NAMES: [&'static str; 2] = ["pi", "theta"];

    /// the name that parses back into this kind
    pub fn name(&self) -> &'static str {
        match self {
            EstimatorKind::Pi => "pi",
            EstimatorKind::Theta => "theta",
        }
    }

    /// Combine the counts. We deliberately rely upon IEEE-754 division:
    /// `0/0` gives `NaN` and `x/0` gives `+Infinity`.
    #[inline(always)]
    pub fn ratio(&self, counts: &PairCounts) -> f64 {
        let denominator = match self {
            EstimatorKind::Pi => counts.in_range_total(),
            EstimatorKind::Theta => counts.mismatched,
        };
        (counts.matched as f64) / (denominator as f64)
    }
}

impl FromStr for EstimatorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pi" => Ok(EstimatorKind::Pi),
            "theta" => Ok(EstimatorKind::Theta),
            _ => Err(Error::calc_kind_name(s, &Self::NAMES)),
        }
    }
}

/// Returns an error if `out` can't hold 1 value per band
pub(crate) fn check_output_len(bands: &BandSet, out: &[f64]) -> Result<(), Error> {
    if out.len() != bands.len() {
        Err(Error::output_length(bands.len(), out.len()))
    } else {
        Ok(())
    }
}

/// Evaluate the estimator selected by `kind` for every band, storing the
/// result for `bands[i]` in `out[i]`.
///
/// Nothing is written to `out` when an error is returned.
pub fn estimate(
    kind: EstimatorKind,
    points: &TypedPoints,
    bands: &BandSet,
    type_a: i32,
    type_b: i32,
    out: &mut [f64],
) -> Result<(), Error> {
    check_reference_type(type_a)?;
    check_output_len(bands, out)?;
    estimate_unchecked(kind, points, bands, type_a, type_b, out);
    Ok(())
}

/// the checks must already have been performed
pub(crate) fn estimate_unchecked(
    kind: EstimatorKind,
    points: &TypedPoints,
    bands: &BandSet,
    type_a: i32,
    type_b: i32,
    out: &mut [f64],
) {
    for (band, rslt) in bands.iter().zip(out.iter_mut()) {
        let counts = scan_band(points, band, type_a, type_b);
        *rslt = kind.ratio(&counts);
        debug!(
            "{} for [{}, {}]: matched = {}, mismatched = {}, estimate = {}",
            kind.name(),
            band.low(),
            band.high(),
            counts.matched,
            counts.mismatched,
            *rslt
        );
    }
}

/// For each band, computes the fraction of the neighbors of type-`type_a`
/// points that have type `type_b`.
pub fn pi_typed(
    points: &TypedPoints,
    bands: &BandSet,
    type_a: i32,
    type_b: i32,
    out: &mut [f64],
) -> Result<(), Error> {
    estimate(EstimatorKind::Pi, points, bands, type_a, type_b, out)
}

/// For each band, computes the ratio between the neighbors of type-`type_a`
/// points that have type `type_b` and the neighbors that don't.
pub fn theta_typed(
    points: &TypedPoints,
    bands: &BandSet,
    type_a: i32,
    type_b: i32,
    out: &mut [f64],
) -> Result<(), Error> {
    estimate(EstimatorKind::Theta, points, bands, type_a, type_b, out)
}
