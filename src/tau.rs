use log::debug;

use crate::estimators::{check_output_len, estimate_unchecked};
use crate::pair_counter::{check_reference_type, scan_band};
use crate::{BandSet, DistanceBand, Error, EstimatorKind, TypedPoints};

/// For each band, computes the estimator selected by `kind` and normalizes
/// it by the same estimator evaluated over every separation (the band
/// `[0, +Infinity]`).
///
/// A value of 1 means that the type-`type_b` neighbors of type-`type_a`
/// points are no more (or less) common within the band than they are
/// overall. See [`normalize_by_global`] for the treatment of degenerate
/// ratios.
pub fn tau_typed(
    points: &TypedPoints,
    bands: &BandSet,
    type_a: i32,
    type_b: i32,
    kind: EstimatorKind,
    out: &mut [f64],
) -> Result<(), Error> {
    check_reference_type(type_a)?;
    check_output_len(bands, out)?;

    let global_counts = scan_band(points, &DistanceBand::full_domain(), type_a, type_b);
    let divisor = kind.ratio(&global_counts);
    debug!(
        "tau divisor ({}): matched = {}, mismatched = {}, divisor = {divisor}",
        kind.name(),
        global_counts.matched,
        global_counts.mismatched
    );

    estimate_unchecked(kind, points, bands, type_a, type_b, out);
    normalize_by_global(out, divisor);
    Ok(())
}

/// Divide each banded estimate by `divisor` (the estimate over the whole
/// domain), in place.
///
/// When a banded estimate equals the divisor, the result is `1` unless both
/// are `0` (in which case it's `NaN`). Plain division would turn
/// `Infinity / Infinity` into `NaN`. Any other pair of values follows
/// IEEE-754 division.
pub fn normalize_by_global(raw: &mut [f64], divisor: f64) {
    for val in raw.iter_mut() {
        *val = if *val == divisor {
            if divisor != 0.0 { 1.0 } else { f64::NAN }
        } else {
            *val / divisor
        };
    }
}
