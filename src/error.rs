use std::error::Error as StdError;
use std::fmt;

/// Errors raised by matrix and network operations.
///
/// Every variant is a precondition violation on caller-supplied data;
/// none of them are recoverable inside the library, so operations fail
/// before touching any state rather than producing a partial result.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Operand shapes are incompatible for the attempted operation.
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// An element buffer does not hold exactly `rows * cols` values.
    BufferLength { rows: usize, cols: usize, len: usize },
    /// A row, column, or flat index is outside the matrix bounds.
    OutOfBounds {
        axis: &'static str,
        index: usize,
        bound: usize,
    },
    /// A zero dimension where a positive one is required.
    EmptyDimension { rows: usize, cols: usize },
    /// A network architecture with fewer than two layer widths.
    BadArchitecture { layers: usize },
    /// A gradient accumulator shaped from a different architecture.
    ArchitectureMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ShapeMismatch { left, right } => write!(
                f,
                "matrix shapes {}x{} and {}x{} are incompatible",
                left.0, left.1, right.0, right.1
            ),
            Error::BufferLength { rows, cols, len } => write!(
                f,
                "buffer of length {} cannot fill a {}x{} matrix",
                len, rows, cols
            ),
            Error::OutOfBounds { axis, index, bound } => {
                write!(f, "{} index {} out of bounds for size {}", axis, index, bound)
            }
            Error::EmptyDimension { rows, cols } => write!(
                f,
                "matrix dimensions must be positive, got {}x{}",
                rows, cols
            ),
            Error::BadArchitecture { layers } => write!(
                f,
                "a network needs at least two layer widths, got {}",
                layers
            ),
            Error::ArchitectureMismatch { expected, found } => write!(
                f,
                "gradient architecture {:?} does not match network architecture {:?}",
                found, expected
            ),
        }
    }
}

impl StdError for Error {}

pub type Result<T> = std::result::Result<T, Error>;
