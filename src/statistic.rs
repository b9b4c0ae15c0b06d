//! Runtime configuration of a calculation.
//!
//! A [`Statistic`] bundles everything about a calculation that isn't the
//! point data itself: which estimator to use, whether it gets normalized
//! by the global estimate, the type pair, and the distance bands. It is
//! immutable and cheap to reuse across many point sets (e.g. bootstrap
//! resamples).

use crate::estimators::estimate;
use crate::{BandSet, Error, EstimatorKind, TypedPoints, tau_typed};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Calculation {
    Banded(EstimatorKind),
    Normalized(EstimatorKind),
}

/// maps each calculation name to the calculation it configures
const REGISTRY: [(&str, Calculation); 4] = [
    ("pi", Calculation::Banded(EstimatorKind::Pi)),
    ("theta", Calculation::Banded(EstimatorKind::Theta)),
    ("tau_pi", Calculation::Normalized(EstimatorKind::Pi)),
    ("tau_theta", Calculation::Normalized(EstimatorKind::Theta)),
];

fn lookup_calc_kind(name: &str) -> Result<Calculation, Error> {
    REGISTRY
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, calc)| *calc)
        .ok_or_else(|| Error::calc_kind_name(name, &REGISTRY.map(|(n, _)| n)))
}

/// Validated description of a calculation. Construct it with
/// [`StatisticBuilder`].
#[derive(Clone, Debug, PartialEq)]
pub struct Statistic {
    calc: Calculation,
    type_a: i32,
    type_b: i32,
    bands: BandSet,
}

impl Statistic {
    pub fn bands(&self) -> &BandSet {
        &self.bands
    }

    pub fn type_pair(&self) -> (i32, i32) {
        (self.type_a, self.type_b)
    }

    /// Compute the statistic for `points` and store 1 value per band in
    /// `out`
    pub fn compute_into(&self, points: &TypedPoints, out: &mut [f64]) -> Result<(), Error> {
        match self.calc {
            Calculation::Banded(kind) => {
                estimate(kind, points, &self.bands, self.type_a, self.type_b, out)
            }
            Calculation::Normalized(kind) => {
                tau_typed(points, &self.bands, self.type_a, self.type_b, kind, out)
            }
        }
    }

    /// Compute the statistic for `points`, returning 1 value per band
    pub fn compute(&self, points: &TypedPoints) -> Result<Vec<f64>, Error> {
        let mut out = vec![0.0; self.bands.len()];
        self.compute_into(points, &mut out)?;
        Ok(out)
    }
}

enum BandSpec {
    Edges { low: Vec<f64>, high: Vec<f64> },
    UpperEdges(Vec<f64>),
    Prebuilt(BandSet),
}

/// Builds a [`Statistic`]. All validation is deferred until
/// [`StatisticBuilder::build`].
#[derive(Default)]
pub struct StatisticBuilder {
    calc_kind: Option<String>,
    type_pair: Option<(i32, i32)>,
    bands: Option<BandSpec>,
}

impl StatisticBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// one of `"pi"`, `"theta"`, `"tau_pi"` or `"tau_theta"`
    pub fn calc_kind(mut self, name: &str) -> Self {
        self.calc_kind = Some(name.to_owned());
        self
    }

    /// the reference ("from") type and the target ("to") type
    pub fn type_pair(mut self, type_a: i32, type_b: i32) -> Self {
        self.type_pair = Some((type_a, type_b));
        self
    }

    pub fn band_edges(mut self, low: &[f64], high: &[f64]) -> Self {
        self.bands = Some(BandSpec::Edges {
            low: low.to_vec(),
            high: high.to_vec(),
        });
        self
    }

    /// every band starts at a separation of 0
    pub fn upper_band_edges(mut self, high: &[f64]) -> Self {
        self.bands = Some(BandSpec::UpperEdges(high.to_vec()));
        self
    }

    pub fn bands(mut self, bands: BandSet) -> Self {
        self.bands = Some(BandSpec::Prebuilt(bands));
        self
    }

    pub fn build(self) -> Result<Statistic, Error> {
        let Some(name) = self.calc_kind else {
            return Err(Error::missing_config("the calculation kind"));
        };
        let calc = lookup_calc_kind(&name)?;

        let Some((type_a, type_b)) = self.type_pair else {
            return Err(Error::missing_config("the type pair"));
        };

        let bands = match self.bands {
            None => return Err(Error::missing_config("the distance bands")),
            Some(BandSpec::Edges { low, high }) => BandSet::from_edges(&low, &high)?,
            Some(BandSpec::UpperEdges(high)) => BandSet::from_upper_edges(&high),
            Some(BandSpec::Prebuilt(bands)) => bands,
        };

        Ok(Statistic {
            calc,
            type_a,
            type_b,
            bands,
        })
    }
}
