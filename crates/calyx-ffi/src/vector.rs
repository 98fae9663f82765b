//! Integer vector FFI: create, append, indexed read, fold, sort, destroy.
//!
//! `calyx_vector_get` keeps the lenient contract (out-of-range reads return
//! 0 and leave a message in the last-error slot);
//! `calyx_vector_safe_get` reports the same failure as a status code.

use calyx_core::IntVector;

use crate::handle::CALYX_INVALID_HANDLE;
use crate::last_error::{record, set_last_error};
use crate::registry::Registry;
use crate::status::{non_negative, saturating_i32, CalyxStatus};

static VECTORS: Registry<IntVector> = Registry::new("vector");

fn lookup(handle: u64, index: i32) -> Result<i32, CalyxStatus> {
    VECTORS
        .with(handle, |v| {
            let idx = non_negative(index, "index", CalyxStatus::OutOfBounds)?;
            v.get(idx).map_err(|e| record(&e))
        })
        .and_then(|r| r)
}

/// Create an empty vector. Returns 0 on failure.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_vector_create() -> u64 {
    ffi_guard_or!(CALYX_INVALID_HANDLE, {
        VECTORS
            .insert(IntVector::new())
            .unwrap_or(CALYX_INVALID_HANDLE)
    })
}

/// Destroy a vector. Returns `NullPointer` for a stale or unknown handle.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_vector_destroy(handle: u64) -> i32 {
    ffi_guard!({ VECTORS.destroy(handle) as i32 })
}

/// Append `value`. No-op on an invalid handle.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_vector_add(handle: u64, value: i32) {
    ffi_guard_or!((), {
        let _ = VECTORS.with_mut(handle, |v| v.push(value));
    })
}

/// Element at `index`.
///
/// **Ambiguity warning:** returns 0 both for a stored zero and for an
/// out-of-range index or invalid handle (the failure is recorded in the
/// last-error slot). Prefer [`calyx_vector_safe_get`].
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_vector_get(handle: u64, index: i32) -> i32 {
    ffi_guard_or!(0, { lookup(handle, index).unwrap_or(0) })
}

/// Element at `index` with explicit error reporting.
///
/// Writes the element to `*out` and returns `Success`. Returns
/// `OutOfBounds` or `NullPointer` without writing to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_vector_safe_get(handle: u64, index: i32, out: *mut i32) -> i32 {
    ffi_guard!({
        if out.is_null() {
            set_last_error("calyx_vector_safe_get: out is null");
            return CalyxStatus::NullPointer as i32;
        }
        match lookup(handle, index) {
            Ok(value) => {
                // SAFETY: out is valid per caller contract.
                unsafe { *out = value };
                CalyxStatus::Success as i32
            }
            Err(status) => status as i32,
        }
    })
}

/// Number of elements, or 0 for an invalid handle.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_vector_size(handle: u64) -> i32 {
    ffi_guard_or!(0, {
        VECTORS
            .with(handle, |v| saturating_i32(v.len()))
            .unwrap_or(0)
    })
}

/// Remove every element.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_vector_clear(handle: u64) {
    ffi_guard_or!((), {
        let _ = VECTORS.with_mut(handle, IntVector::clear);
    })
}

/// Sum of the elements (wrapping on overflow), or 0 for an invalid handle.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_vector_sum(handle: u64) -> i32 {
    ffi_guard_or!(0, { VECTORS.with(handle, IntVector::sum).unwrap_or(0) })
}

/// Sort ascending in place.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_vector_sort(handle: u64) {
    ffi_guard_or!((), {
        let _ = VECTORS.with_mut(handle, IntVector::sort);
    })
}
