// We follow the same basic approach for all errors: a public `Error` type
// wraps a private `ErrorKind` enum, and each kind carries a small struct
// that knows how to describe itself. Callers shouldn't match on the details
// (they can change), but they can ask the handful of questions we commit to
// answering (e.g. `Error::is_unsupported`).

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

/// The underlying internal error type
#[non_exhaustive]
#[derive(Clone, Debug)]
enum ErrorKind {
    /// An error that occurs when the lower & upper band edges are specified
    /// with a different number of entries
    BandEdgeLength(BandEdgeLengthError),
    /// An error that occurs when an unknown calculation name is specified
    CalcKindName(CalcKindNameError),
    /// An error that occurs when a required configuration value is missing
    MissingConfig(MissingConfigError),
    /// An error that occurs when the output buffer doesn't have 1 entry per
    /// band
    OutputLength(OutputLengthError),
    /// An error that occurs when a per-point sequence has the wrong length
    PointLength(PointLengthError),
    /// An error that occurs when the positions array has the wrong layout
    PositionsShape(PositionsShapeError),
    /// An error that occurs when the reference type is the "any type"
    /// sentinel. The untyped calculation has not been implemented.
    UnsupportedReferenceType(UnsupportedReferenceTypeError),
}

// define constructor methods for Error
impl Error {
    /// produce an error indicating that the lower and upper edge sequences
    /// have different lengths
    pub(crate) fn band_edge_length(n_low: usize, n_high: usize) -> Self {
        Error {
            kind: ErrorKind::BandEdgeLength(BandEdgeLengthError { n_low, n_high }),
        }
    }

    /// produce an error indicating that an unknown calculation name was
    /// specified
    pub(crate) fn calc_kind_name(actual: &str, choices: &[&'static str]) -> Self {
        Error {
            kind: ErrorKind::CalcKindName(CalcKindNameError {
                actual: actual.to_owned(),
                choices: choices.to_vec(),
            }),
        }
    }

    /// produce an error indicating that a required configuration value was
    /// never provided
    pub(crate) fn missing_config(what: &'static str) -> Self {
        Error {
            kind: ErrorKind::MissingConfig(MissingConfigError(what)),
        }
    }

    /// produce an error indicating that the output buffer has the wrong
    /// length
    pub(crate) fn output_length(expected: usize, actual: usize) -> Self {
        Error {
            kind: ErrorKind::OutputLength(OutputLengthError { expected, actual }),
        }
    }

    /// produce an error indicating that a per-point sequence has the wrong
    /// length
    pub(crate) fn point_length(description: &'static str, expected: usize, actual: usize) -> Self {
        Error {
            kind: ErrorKind::PointLength(PointLengthError {
                description,
                expected,
                actual,
            }),
        }
    }

    /// produce an error indicating that the positions array has the wrong
    /// layout
    pub(crate) fn positions_shape(what: &'static str) -> Self {
        Error {
            kind: ErrorKind::PositionsShape(PositionsShapeError(what)),
        }
    }

    /// produce an error indicating that the untyped (`type_a == ANY_TYPE`)
    /// calculation was requested
    pub(crate) fn unsupported_reference_type(type_a: i32) -> Self {
        Error {
            kind: ErrorKind::UnsupportedReferenceType(UnsupportedReferenceTypeError { type_a }),
        }
    }

    /// Returns `true` when the error reports a calculation that hasn't been
    /// implemented (as opposed to a problem with the arguments)
    pub fn is_unsupported(&self) -> bool {
        matches!(self.kind, ErrorKind::UnsupportedReferenceType(_))
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for ErrorKind {}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            ErrorKind::BandEdgeLength(ref err) => err.fmt(f),
            ErrorKind::CalcKindName(ref err) => err.fmt(f),
            ErrorKind::MissingConfig(ref err) => err.fmt(f),
            ErrorKind::OutputLength(ref err) => err.fmt(f),
            ErrorKind::PointLength(ref err) => err.fmt(f),
            ErrorKind::PositionsShape(ref err) => err.fmt(f),
            ErrorKind::UnsupportedReferenceType(ref err) => err.fmt(f),
        }
    }
}

/// An error that occurs when the lower & upper band edges are specified
/// with a different number of entries
#[derive(Clone, Debug)]
struct BandEdgeLengthError {
    n_low: usize,
    n_high: usize,
}

impl std::error::Error for BandEdgeLengthError {}

impl core::fmt::Display for BandEdgeLengthError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{} lower band edges were provided, but there are {} upper band \
             edges. Both must have the same length",
            self.n_low, self.n_high
        )
    }
}

/// An error that occurs when an unknown calculation name is specified
#[derive(Clone, Debug)]
struct CalcKindNameError {
    actual: String,
    choices: Vec<&'static str>,
}

impl std::error::Error for CalcKindNameError {}

impl core::fmt::Display for CalcKindNameError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "\"{}\" is not a known calculation. Choices include: {:?}",
            self.actual, self.choices
        )
    }
}

/// An error that occurs when a required configuration value is missing
#[derive(Clone, Debug)]
struct MissingConfigError(&'static str);

impl std::error::Error for MissingConfigError {}

impl core::fmt::Display for MissingConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} was not specified", self.0)
    }
}

/// An error that occurs when the output buffer doesn't have 1 entry per
/// band
#[derive(Clone, Debug)]
struct OutputLengthError {
    expected: usize,
    actual: usize,
}

impl std::error::Error for OutputLengthError {}

impl core::fmt::Display for OutputLengthError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "the output buffer holds {} values. It should hold exactly {} \
             values (1 per distance band)",
            self.actual, self.expected
        )
    }
}

/// An error that occurs when a per-point sequence has the wrong length
#[derive(Clone, Debug)]
struct PointLengthError {
    description: &'static str,
    expected: usize,
    actual: usize,
}

impl std::error::Error for PointLengthError {}

impl core::fmt::Display for PointLengthError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{} has {} entries, but there are {} points",
            self.description, self.actual, self.expected
        )
    }
}

/// An error that occurs when the positions array has the wrong layout
#[derive(Clone, Debug)]
struct PositionsShapeError(&'static str);

impl std::error::Error for PositionsShapeError {}

impl core::fmt::Display for PositionsShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// An error that occurs when the untyped calculation is requested
#[derive(Clone, Debug)]
struct UnsupportedReferenceTypeError {
    type_a: i32,
}

impl std::error::Error for UnsupportedReferenceTypeError {}

impl core::fmt::Display for UnsupportedReferenceTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "a reference type of {} requests the calculation for an \
             unrestricted reference type, which is not implemented",
            self.type_a
        )
    }
}
