use crate::Error;

/// An inclusive interval of separation distances, `[low, high]`.
///
/// A distance `d` falls inside the band when `low <= d <= high`. The upper
/// edge may be `f64::INFINITY`. Any pair of edges is accepted: a band with
/// `low > high` or a `NaN` edge contains no distances, so every estimate
/// computed for it is `NaN`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceBand {
    low: f64,
    high: f64,
}

impl DistanceBand {
    /// create a new instance
    pub const fn new(low: f64, high: f64) -> DistanceBand {
        DistanceBand { low, high }
    }

    /// The band covering every possible separation, `[0, +Infinity]`
    pub const fn full_domain() -> DistanceBand {
        DistanceBand {
            low: 0.0,
            high: f64::INFINITY,
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    #[inline(always)]
    pub fn contains(&self, distance: f64) -> bool {
        distance >= self.low && distance <= self.high
    }
}

/// An ordered collection of [`DistanceBand`]s.
///
/// Every calculation produces 1 value per band, in the order that the bands
/// are stored here.
#[derive(Clone, Debug, PartialEq)]
pub struct BandSet {
    bands: Vec<DistanceBand>,
}

impl BandSet {
    pub fn from_bands(bands: Vec<DistanceBand>) -> BandSet {
        BandSet { bands }
    }

    /// Build the bands from parallel sequences of lower and upper edges
    pub fn from_edges(low: &[f64], high: &[f64]) -> Result<BandSet, Error> {
        if low.len() != high.len() {
            return Err(Error::band_edge_length(low.len(), high.len()));
        }
        let bands = low
            .iter()
            .zip(high.iter())
            .map(|(&l, &h)| DistanceBand::new(l, h))
            .collect();
        Ok(BandSet { bands })
    }

    /// Build the bands from upper edges alone. Every band starts at a
    /// separation of 0.
    pub fn from_upper_edges(high: &[f64]) -> BandSet {
        let bands = high.iter().map(|&h| DistanceBand::new(0.0, h)).collect();
        BandSet { bands }
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, DistanceBand> {
        self.bands.iter()
    }

    pub fn as_slice(&self) -> &[DistanceBand] {
        &self.bands
    }
}

impl<'a> IntoIterator for &'a BandSet {
    type Item = &'a DistanceBand;
    type IntoIter = core::slice::Iter<'a, DistanceBand>;

    fn into_iter(self) -> Self::IntoIter {
        self.bands.iter()
    }
}
