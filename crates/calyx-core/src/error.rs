//! Error types for the Calyx core containers.
//!
//! Every fallible core operation returns [`CoreError`]. The FFI layer maps
//! each variant onto a C status code; the core itself never swallows an
//! error into a default value.

use std::error::Error;
use std::fmt;

/// Errors from core container, matrix, and numeric operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// A linear index fell outside `[0, len)`.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Length of the container at the time of access.
        len: usize,
    },
    /// A matrix cell fell outside the matrix shape.
    CellOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Row count of the matrix.
        rows: usize,
        /// Column count of the matrix.
        cols: usize,
    },
    /// Two matrices have incompatible shapes for the requested operation.
    DimensionMismatch {
        /// Shape of the left operand as `(rows, cols)`.
        left: (usize, usize),
        /// Shape of the right operand as `(rows, cols)`.
        right: (usize, usize),
    },
    /// An argument was rejected before any work was done.
    InvalidArgument {
        /// Human-readable description of the rejected argument.
        reason: String,
    },
    /// Backing storage could not be reserved.
    AllocationFailed {
        /// Number of elements requested.
        requested: usize,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::CellOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "cell ({row}, {col}) out of bounds for {rows}x{cols} matrix"
                )
            }
            Self::DimensionMismatch { left, right } => {
                write!(
                    f,
                    "matrix dimensions don't match for multiplication: {}x{} * {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::AllocationFailed { requested } => {
                write!(f, "allocation of {requested} elements failed")
            }
        }
    }
}

impl Error for CoreError {}

/// Reserve a zero-filled buffer of `len` elements without aborting on OOM.
pub(crate) fn zeroed<T: Clone + Default>(len: usize) -> Result<Vec<T>, CoreError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| CoreError::AllocationFailed { requested: len })?;
    data.resize(len, T::default());
    Ok(data)
}
