//! C-compatible status codes.
//!
//! Two independent families exist at the boundary. [`CalyxStatus`] is
//! returned by the container and matrix functions; [`CalyxScalarStatus`]
//! by the buffer-copy and statistics functions. Both are `repr(i32)`,
//! `Success` = 0, errors negative. Values are ABI-stable.

use calyx_core::CoreError;

/// Status code for container and matrix operations (Family A).
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalyxStatus {
    /// Success.
    Success = 0,
    /// Handle is invalid, stale, or an out-pointer is null.
    NullPointer = -1,
    /// Index or cell outside the object's bounds.
    OutOfBounds = -2,
    /// Operands are incompatible (e.g. matrix shape mismatch).
    InvalidOperation = -3,
    /// Backing storage could not be allocated.
    MemoryError = -4,
    /// Internal failure: caught panic or poisoned lock.
    UnknownError = -5,
}

/// Status code for buffer and scalar operations (Family B).
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalyxScalarStatus {
    /// Success.
    Success = 0,
    /// A required pointer or handle is null or invalid.
    NullPointer = -1,
    /// A numeric argument is out of its accepted range.
    InvalidParameter = -2,
    /// Caller-provided buffer is too small.
    BufferTooSmall = -3,
}

impl From<&CoreError> for CalyxStatus {
    fn from(e: &CoreError) -> Self {
        match e {
            CoreError::IndexOutOfBounds { .. } | CoreError::CellOutOfBounds { .. } => {
                CalyxStatus::OutOfBounds
            }
            CoreError::DimensionMismatch { .. } | CoreError::InvalidArgument { .. } => {
                CalyxStatus::InvalidOperation
            }
            CoreError::AllocationFailed { .. } => CalyxStatus::MemoryError,
        }
    }
}

impl From<CalyxStatus> for CalyxScalarStatus {
    fn from(s: CalyxStatus) -> Self {
        match s {
            CalyxStatus::Success => CalyxScalarStatus::Success,
            CalyxStatus::NullPointer | CalyxStatus::UnknownError => CalyxScalarStatus::NullPointer,
            CalyxStatus::OutOfBounds
            | CalyxStatus::InvalidOperation
            | CalyxStatus::MemoryError => CalyxScalarStatus::InvalidParameter,
        }
    }
}

/// Convert a caller-supplied `i32` index or dimension into `usize`.
///
/// Negative values record an error and yield `status`.
pub(crate) fn non_negative(value: i32, what: &str, status: CalyxStatus) -> Result<usize, CalyxStatus> {
    usize::try_from(value).map_err(|_| {
        crate::last_error::set_last_error(format!("{what} {value} is negative"));
        status
    })
}

/// Clamp a `usize` count into the `i32` range used by the C signatures.
pub(crate) fn saturating_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_values_are_stable() {
        assert_eq!(CalyxStatus::Success as i32, 0);
        assert_eq!(CalyxStatus::NullPointer as i32, -1);
        assert_eq!(CalyxStatus::OutOfBounds as i32, -2);
        assert_eq!(CalyxStatus::InvalidOperation as i32, -3);
        assert_eq!(CalyxStatus::MemoryError as i32, -4);
        assert_eq!(CalyxStatus::UnknownError as i32, -5);
    }

    #[test]
    fn scalar_status_code_values_are_stable() {
        assert_eq!(CalyxScalarStatus::Success as i32, 0);
        assert_eq!(CalyxScalarStatus::NullPointer as i32, -1);
        assert_eq!(CalyxScalarStatus::InvalidParameter as i32, -2);
        assert_eq!(CalyxScalarStatus::BufferTooSmall as i32, -3);
    }

    #[test]
    fn core_error_to_status() {
        assert_eq!(
            CalyxStatus::from(&CoreError::IndexOutOfBounds { index: 1, len: 0 }),
            CalyxStatus::OutOfBounds
        );
        assert_eq!(
            CalyxStatus::from(&CoreError::CellOutOfBounds {
                row: 0,
                col: 9,
                rows: 1,
                cols: 1
            }),
            CalyxStatus::OutOfBounds
        );
        assert_eq!(
            CalyxStatus::from(&CoreError::DimensionMismatch {
                left: (2, 3),
                right: (2, 2)
            }),
            CalyxStatus::InvalidOperation
        );
        assert_eq!(
            CalyxStatus::from(&CoreError::InvalidArgument { reason: "x".into() }),
            CalyxStatus::InvalidOperation
        );
        assert_eq!(
            CalyxStatus::from(&CoreError::AllocationFailed { requested: 1 }),
            CalyxStatus::MemoryError
        );
    }

    #[test]
    fn negative_values_are_rejected() {
        assert_eq!(non_negative(3, "index", CalyxStatus::OutOfBounds), Ok(3));
        assert_eq!(
            non_negative(-1, "index", CalyxStatus::OutOfBounds),
            Err(CalyxStatus::OutOfBounds)
        );
        assert_eq!(
            crate::last_error::last_error().as_deref(),
            Some("index -1 is negative")
        );
    }

    #[test]
    fn saturating_i32_clamps() {
        assert_eq!(saturating_i32(5), 5);
        assert_eq!(saturating_i32(usize::MAX), i32::MAX);
    }
}
