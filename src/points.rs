use crate::Error;
use ndarray::{Array2, ArrayView2};

/// Collection of typed point properties.
///
/// We place the following constraints on the positions array:
/// - axis 0 is the slow axis and it corresponds to the x & y components.
///   It must have a length of 2.
/// - axis 1 is the fast axis. The length along this axis coincides with
///   the number of points. We require that it is contiguous (i.e. the stride
///   is unity).
///
/// Each point also carries a type (the categorical mark) and a logical id.
/// The logical id identifies the original observation that a point was
/// drawn from. It is **not** inferred from the array position: a resampled
/// point set may hold several entries that share a logical id, and such
/// entries never form a pair.
#[derive(Clone, Debug)]
pub struct TypedPoints<'a> {
    positions: ArrayView2<'a, f64>,
    types: &'a [i32],
    logical_ids: &'a [i64],
    n_points: usize,
}

impl<'a> TypedPoints<'a> {
    /// create a new instance
    pub fn new(
        positions: ArrayView2<'a, f64>,
        types: &'a [i32],
        logical_ids: &'a [i64],
    ) -> Result<TypedPoints<'a>, Error> {
        let n_points = positions.shape()[1];
        if positions.shape()[0] != 2 {
            Err(Error::positions_shape(
                "positions must have exactly 2 components (x & y) along axis 0",
            ))
        } else if n_points > 1 && positions.strides()[1] != 1 {
            Err(Error::positions_shape(
                "positions must be contiguous along the fast axis",
            ))
        } else if types.len() != n_points {
            Err(Error::point_length("types", n_points, types.len()))
        } else if logical_ids.len() != n_points {
            Err(Error::point_length(
                "logical_ids",
                n_points,
                logical_ids.len(),
            ))
        } else {
            Ok(Self {
                positions,
                types,
                logical_ids,
                n_points,
            })
        }
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    pub fn types(&self) -> &'a [i32] {
        self.types
    }

    pub fn logical_ids(&self) -> &'a [i64] {
        self.logical_ids
    }

    #[inline(always)]
    pub fn x(&self, idx: usize) -> f64 {
        self.positions[[0, idx]]
    }

    #[inline(always)]
    pub fn y(&self, idx: usize) -> f64 {
        self.positions[[1, idx]]
    }

    /// the euclidean distance between the points at `i` and `j`
    #[inline(always)]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        let dx = self.x(i) - self.x(j);
        let dy = self.y(i) - self.y(j);
        (dx * dx + dy * dy).sqrt()
    }
}

/// An owned set of typed points.
///
/// This exists for callers that hold the x & y coordinates in separate
/// sequences (they can't be viewed as a single `(2, n)` array without a
/// copy) and to hold the output of [`crate::resample_with_replacement`].
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    positions: Array2<f64>,
    types: Vec<i32>,
    logical_ids: Vec<i64>,
}

impl PointSet {
    /// Build a point set from parallel sequences
    pub fn from_xy(
        x: &[f64],
        y: &[f64],
        types: &[i32],
        logical_ids: &[i64],
    ) -> Result<PointSet, Error> {
        let n_points = x.len();
        if y.len() != n_points {
            return Err(Error::point_length("y", n_points, y.len()));
        } else if types.len() != n_points {
            return Err(Error::point_length("types", n_points, types.len()));
        } else if logical_ids.len() != n_points {
            return Err(Error::point_length(
                "logical_ids",
                n_points,
                logical_ids.len(),
            ));
        }

        let mut positions = Array2::zeros([2, n_points]);
        for i in 0..n_points {
            positions[[0, i]] = x[i];
            positions[[1, i]] = y[i];
        }
        Ok(PointSet {
            positions,
            types: types.to_vec(),
            logical_ids: logical_ids.to_vec(),
        })
    }

    /// Build a point set where every entry is its own observation (the
    /// logical ids are `0..n`)
    pub fn with_index_ids(x: &[f64], y: &[f64], types: &[i32]) -> Result<PointSet, Error> {
        let logical_ids: Vec<i64> = (0..x.len() as i64).collect();
        PointSet::from_xy(x, y, types, &logical_ids)
    }

    /// Assemble a point set from parts that the caller has already checked
    /// for consistency
    pub(crate) fn from_parts(
        positions: Array2<f64>,
        types: Vec<i32>,
        logical_ids: Vec<i64>,
    ) -> PointSet {
        debug_assert_eq!(positions.shape(), &[2, types.len()]);
        debug_assert_eq!(types.len(), logical_ids.len());
        PointSet {
            positions,
            types,
            logical_ids,
        }
    }

    pub fn n_points(&self) -> usize {
        self.types.len()
    }

    pub fn view(&self) -> TypedPoints<'_> {
        TypedPoints {
            positions: self.positions.view(),
            types: &self.types,
            logical_ids: &self.logical_ids,
            n_points: self.types.len(),
        }
    }
}
