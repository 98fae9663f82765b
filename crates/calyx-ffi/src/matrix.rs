//! Matrix FFI: create, cell access, multiply, transpose, destroy.
//!
//! `calyx_matrix_multiply` and `calyx_matrix_transpose` allocate a new
//! matrix and return a new handle owned by the caller; their inputs are
//! never modified. Each sentinel-returning call has a `safe_` sibling that
//! reports the failure as a [`CalyxStatus`].

use calyx_core::Matrix;

use crate::handle::CALYX_INVALID_HANDLE;
use crate::last_error::{record, set_last_error};
use crate::registry::Registry;
use crate::status::{non_negative, saturating_i32, CalyxStatus};

static MATRICES: Registry<Matrix> = Registry::new("matrix");

fn cell(row: i32, col: i32) -> Result<(usize, usize), CalyxStatus> {
    Ok((
        non_negative(row, "row", CalyxStatus::OutOfBounds)?,
        non_negative(col, "column", CalyxStatus::OutOfBounds)?,
    ))
}

fn create(rows: i32, cols: i32) -> Result<u64, CalyxStatus> {
    let rows = non_negative(rows, "row count", CalyxStatus::InvalidOperation)?;
    let cols = non_negative(cols, "column count", CalyxStatus::InvalidOperation)?;
    let m = Matrix::new(rows, cols).map_err(|e| record(&e))?;
    MATRICES.insert(m)
}

fn read_cell(handle: u64, row: i32, col: i32) -> Result<f64, CalyxStatus> {
    MATRICES
        .with(handle, |m| {
            let (r, c) = cell(row, col)?;
            m.get(r, c).map_err(|e| record(&e))
        })
        .and_then(|r| r)
}

fn write_cell(handle: u64, row: i32, col: i32, value: f64) -> Result<(), CalyxStatus> {
    MATRICES
        .with_mut(handle, |m| {
            let (r, c) = cell(row, col)?;
            m.set(r, c, value).map_err(|e| record(&e))
        })
        .and_then(|r| r)
}

fn product(a: u64, b: u64) -> Result<u64, CalyxStatus> {
    let m = MATRICES
        .with_pair(a, b, |x, y| x.multiply(y).map_err(|e| record(&e)))
        .and_then(|r| r)?;
    tracing::trace!(target: "calyx_ffi", rows = m.rows(), cols = m.cols(), "matrix product");
    MATRICES.insert(m)
}

/// Create a zero-filled `rows × cols` matrix.
///
/// Returns 0 (and records an error) for negative dimensions or when the
/// storage cannot be allocated.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_matrix_create(rows: i32, cols: i32) -> u64 {
    ffi_guard_or!(CALYX_INVALID_HANDLE, {
        create(rows, cols).unwrap_or(CALYX_INVALID_HANDLE)
    })
}

/// Destroy a matrix.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_matrix_destroy(handle: u64) -> i32 {
    ffi_guard!({ MATRICES.destroy(handle) as i32 })
}

/// Write a cell. Out-of-range writes are dropped and recorded.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_matrix_set(handle: u64, row: i32, col: i32, value: f64) {
    ffi_guard_or!((), {
        let _ = write_cell(handle, row, col, value);
    })
}

/// Read a cell.
///
/// **Ambiguity warning:** returns 0.0 both for a stored zero and for an
/// out-of-range cell or invalid handle. Prefer [`calyx_matrix_safe_get`].
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_matrix_get(handle: u64, row: i32, col: i32) -> f64 {
    ffi_guard_or!(0.0, { read_cell(handle, row, col).unwrap_or(0.0) })
}

/// Read a cell with explicit error reporting.
///
/// Writes the value to `*out` and returns `Success`. Returns
/// `OutOfBounds` or `NullPointer` without writing to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_matrix_safe_get(handle: u64, row: i32, col: i32, out: *mut f64) -> i32 {
    ffi_guard!({
        if out.is_null() {
            set_last_error("calyx_matrix_safe_get: out is null");
            return CalyxStatus::NullPointer as i32;
        }
        match read_cell(handle, row, col) {
            Ok(value) => {
                // SAFETY: out is valid per caller contract.
                unsafe { *out = value };
                CalyxStatus::Success as i32
            }
            Err(status) => status as i32,
        }
    })
}

/// Write a cell with explicit error reporting.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_matrix_safe_set(handle: u64, row: i32, col: i32, value: f64) -> i32 {
    ffi_guard!({
        match write_cell(handle, row, col, value) {
            Ok(()) => CalyxStatus::Success as i32,
            Err(status) => status as i32,
        }
    })
}

/// Row count, or 0 for an invalid handle.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_matrix_rows(handle: u64) -> i32 {
    ffi_guard_or!(0, {
        MATRICES
            .with(handle, |m| saturating_i32(m.rows()))
            .unwrap_or(0)
    })
}

/// Column count, or 0 for an invalid handle.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_matrix_cols(handle: u64) -> i32 {
    ffi_guard_or!(0, {
        MATRICES
            .with(handle, |m| saturating_i32(m.cols()))
            .unwrap_or(0)
    })
}

/// Product `a × b` as a new matrix.
///
/// Returns 0 (and records an error) when `a.cols != b.rows`, when either
/// handle is invalid, or when the result cannot be allocated. Prefer
/// [`calyx_matrix_safe_multiply`] to learn which.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_matrix_multiply(a: u64, b: u64) -> u64 {
    ffi_guard_or!(CALYX_INVALID_HANDLE, {
        product(a, b).unwrap_or(CALYX_INVALID_HANDLE)
    })
}

/// Product `a × b` with explicit error reporting.
///
/// Writes the new handle to `*out` and returns `Success`. Returns
/// `InvalidOperation` on a shape mismatch, `NullPointer` for an invalid
/// handle or null `out`, `MemoryError` if the result cannot be allocated.
/// Nothing is written to `out` on failure.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_matrix_safe_multiply(a: u64, b: u64, out: *mut u64) -> i32 {
    ffi_guard!({
        if out.is_null() {
            set_last_error("calyx_matrix_safe_multiply: out is null");
            return CalyxStatus::NullPointer as i32;
        }
        match product(a, b) {
            Ok(handle) => {
                // SAFETY: out is valid per caller contract.
                unsafe { *out = handle };
                CalyxStatus::Success as i32
            }
            Err(status) => status as i32,
        }
    })
}

/// Transpose as a new matrix. Returns 0 on failure.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_matrix_transpose(handle: u64) -> u64 {
    ffi_guard_or!(CALYX_INVALID_HANDLE, {
        MATRICES
            .with(handle, |m| m.transpose().map_err(|e| record(&e)))
            .and_then(|r| r)
            .and_then(|t| MATRICES.insert(t))
            .unwrap_or(CALYX_INVALID_HANDLE)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::last_error::last_error;

    fn matrix_from(rows: &[&[f64]]) -> u64 {
        let h = calyx_matrix_create(rows.len() as i32, rows[0].len() as i32);
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                calyx_matrix_set(h, r as i32, c as i32, v);
            }
        }
        h
    }

    #[test]
    fn create_is_zero_filled() {
        let h = calyx_matrix_create(2, 3);
        assert_eq!(calyx_matrix_rows(h), 2);
        assert_eq!(calyx_matrix_cols(h), 3);
        assert_eq!(calyx_matrix_get(h, 1, 2), 0.0);
        calyx_matrix_destroy(h);
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        assert_eq!(calyx_matrix_create(-1, 3), CALYX_INVALID_HANDLE);
        assert_eq!(last_error().as_deref(), Some("row count -1 is negative"));
        assert_eq!(calyx_matrix_create(2, -5), CALYX_INVALID_HANDLE);
        assert_eq!(last_error().as_deref(), Some("column count -5 is negative"));
    }

    #[test]
    fn multiply_known_product() {
        let a = matrix_from(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let b = matrix_from(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        let c = calyx_matrix_multiply(a, b);
        assert_ne!(c, CALYX_INVALID_HANDLE);
        assert_eq!(calyx_matrix_rows(c), 2);
        assert_eq!(calyx_matrix_cols(c), 2);
        assert_eq!(calyx_matrix_get(c, 0, 0), 22.0);
        assert_eq!(calyx_matrix_get(c, 0, 1), 28.0);
        assert_eq!(calyx_matrix_get(c, 1, 0), 49.0);
        assert_eq!(calyx_matrix_get(c, 1, 1), 64.0);
        // Inputs untouched.
        assert_eq!(calyx_matrix_get(a, 1, 2), 6.0);
        assert_eq!(calyx_matrix_rows(b), 3);
        for h in [a, b, c] {
            calyx_matrix_destroy(h);
        }
    }

    #[test]
    fn multiply_shape_mismatch() {
        let a = calyx_matrix_create(2, 3);
        let b = calyx_matrix_create(2, 2);
        assert_eq!(calyx_matrix_multiply(a, b), CALYX_INVALID_HANDLE);
        assert!(last_error()
            .unwrap()
            .starts_with("matrix dimensions don't match"));

        let mut out = 77u64;
        assert_eq!(
            calyx_matrix_safe_multiply(a, b, &mut out),
            CalyxStatus::InvalidOperation as i32
        );
        assert_eq!(out, 77, "out must not be written on failure");
        calyx_matrix_destroy(a);
        calyx_matrix_destroy(b);
    }

    #[test]
    fn safe_multiply_success_and_null_checks() {
        let a = calyx_matrix_create(2, 2);
        let mut out = 0u64;
        assert_eq!(
            calyx_matrix_safe_multiply(a, a, &mut out),
            CalyxStatus::Success as i32
        );
        assert_ne!(out, CALYX_INVALID_HANDLE);
        assert_ne!(out, a);
        assert_eq!(
            calyx_matrix_safe_multiply(a, CALYX_INVALID_HANDLE, &mut out),
            CalyxStatus::NullPointer as i32
        );
        assert_eq!(
            calyx_matrix_safe_multiply(a, a, std::ptr::null_mut()),
            CalyxStatus::NullPointer as i32
        );
        calyx_matrix_destroy(out);
        calyx_matrix_destroy(a);
    }

    #[test]
    fn out_of_range_cells() {
        let h = calyx_matrix_create(2, 2);
        calyx_matrix_set(h, 2, 0, 9.0);
        assert_eq!(
            last_error().as_deref(),
            Some("cell (2, 0) out of bounds for 2x2 matrix")
        );
        assert_eq!(calyx_matrix_get(h, 0, 2), 0.0);

        let mut out = 1.5;
        assert_eq!(
            calyx_matrix_safe_get(h, -1, 0, &mut out),
            CalyxStatus::OutOfBounds as i32
        );
        assert_eq!(out, 1.5);
        assert_eq!(
            calyx_matrix_safe_set(h, 0, 5, 1.0),
            CalyxStatus::OutOfBounds as i32
        );
        assert_eq!(
            calyx_matrix_safe_set(h, 1, 1, 4.0),
            CalyxStatus::Success as i32
        );
        assert_eq!(
            calyx_matrix_safe_get(h, 1, 1, &mut out),
            CalyxStatus::Success as i32
        );
        assert_eq!(out, 4.0);
        calyx_matrix_destroy(h);
    }

    #[test]
    fn transpose_twice_round_trips() {
        let a = matrix_from(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let t = calyx_matrix_transpose(a);
        assert_eq!(calyx_matrix_rows(t), 3);
        assert_eq!(calyx_matrix_cols(t), 2);
        assert_eq!(calyx_matrix_get(t, 2, 0), 3.0);
        let tt = calyx_matrix_transpose(t);
        for r in 0..2 {
            for c in 0..3 {
                assert_eq!(calyx_matrix_get(tt, r, c), calyx_matrix_get(a, r, c));
            }
        }
        for h in [a, t, tt] {
            calyx_matrix_destroy(h);
        }
    }

    #[test]
    fn destroyed_inputs_are_rejected() {
        let a = calyx_matrix_create(1, 1);
        calyx_matrix_destroy(a);
        assert_eq!(calyx_matrix_transpose(a), CALYX_INVALID_HANDLE);
        assert_eq!(calyx_matrix_multiply(a, a), CALYX_INVALID_HANDLE);
        assert!(last_error().unwrap().starts_with("invalid matrix handle"));
    }
}
