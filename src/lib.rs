/*!
Computes spatial cross-type association statistics for marked point
patterns.

Each observation is a 2D point tagged with a categorical type. For a chosen
reference type `A` and target type `B`, these statistics characterize how
likely it is for the neighbors of a type-`A` point, at separations within a
distance band, to have type `B`.

# The Statistics

All of the statistics are built from a single brute-force scan (see
[`count_pairs`]). For each band, the scan partitions the in-range neighbors
of every type-`A` point into `matched` (type `B`) and `mismatched` (any
other type).

- **pi** ([`pi_typed`]): `matched / (matched + mismatched)`
- **theta** ([`theta_typed`]): `matched / mismatched`
- **tau** ([`tau_typed`]): pi or theta for the band, divided by the same
  estimator evaluated over the entire domain.

Degenerate ratios are valid outputs rather than errors. A band without any
qualifying pairs produces `NaN`, and theta saturates to `+Infinity` when
every neighbor has type `B`.

# Logical Ids

Every point carries a logical id that identifies the original observation.
Two entries with the same logical id never form a pair, even if they sit at
different coordinates. This is what makes the statistics meaningful for
bootstrap resamples (see [`resample_with_replacement`]).

# Quick Example

```
use spatialtau::{PointSet, StatisticBuilder};

let points = PointSet::with_index_ids(
    &[0.0, 1.0, 0.0, 5.0],
    &[0.0, 0.0, 1.0, 5.0],
    &[1, 2, 2, 1],
)?;
let statistic = StatisticBuilder::new()
    .calc_kind("pi")
    .type_pair(1, 2)
    .band_edges(&[0.0], &[1.5])
    .build()?;
assert_eq!(statistic.compute(&points.view())?, vec![1.0]);
# Ok::<(), spatialtau::Error>(())
```
*/

#![deny(rustdoc::broken_intra_doc_links)]

// inform build-system of the crates in this package
mod bands;
mod bootstrap;
mod error;
mod estimators;
mod pair_counter;
mod points;
mod statistic;
mod tau;

// pull in symbols that visible outside of the package
pub use bands::{BandSet, DistanceBand};
pub use bootstrap::resample_with_replacement;
pub use error::Error;
pub use estimators::{EstimatorKind, estimate, pi_typed, theta_typed};
pub use pair_counter::{ANY_TYPE, PairCounts, count_pairs};
pub use points::{PointSet, TypedPoints};
pub use statistic::{Statistic, StatisticBuilder};
pub use tau::{normalize_by_global, tau_typed};
