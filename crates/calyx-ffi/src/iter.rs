//! Sequence iterator FFI.
//!
//! `calyx_iter_create` copies the caller's array, so the caller may free or
//! mutate it immediately afterwards.

use calyx_core::SeqCursor;

use crate::handle::CALYX_INVALID_HANDLE;
use crate::last_error::set_last_error;
use crate::registry::Registry;
use crate::status::{non_negative, CalyxStatus};

static ITERATORS: Registry<SeqCursor> = Registry::new("iterator");

/// Create an iterator over a copy of `values[0..len]`.
///
/// `values` may be null when `len == 0`. Returns 0 (and records an error)
/// for a negative `len` or a null `values` with `len > 0`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_iter_create(values: *const i32, len: i32) -> u64 {
    ffi_guard_or!(CALYX_INVALID_HANDLE, {
        let len = match non_negative(len, "sequence length", CalyxStatus::InvalidOperation) {
            Ok(n) => n,
            Err(_) => return CALYX_INVALID_HANDLE,
        };
        let slice: &[i32] = if len == 0 {
            &[]
        } else if values.is_null() {
            set_last_error("calyx_iter_create: values is null");
            return CALYX_INVALID_HANDLE;
        } else {
            // SAFETY: values points to len valid i32 per caller contract.
            unsafe { std::slice::from_raw_parts(values, len) }
        };
        ITERATORS
            .insert(SeqCursor::new(slice))
            .unwrap_or(CALYX_INVALID_HANDLE)
    })
}

/// Destroy an iterator.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_iter_destroy(handle: u64) -> i32 {
    ffi_guard!({ ITERATORS.destroy(handle) as i32 })
}

/// 1 if an element remains at the cursor, else 0 (also for an invalid handle).
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_iter_has_next(handle: u64) -> i32 {
    ffi_guard_or!(0, {
        ITERATORS
            .with(handle, |c| i32::from(c.has_next()))
            .unwrap_or(0)
    })
}

/// Element at the cursor, advancing past it.
///
/// At the end of the sequence returns 0 without moving and without
/// recording an error.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_iter_next(handle: u64) -> i32 {
    ffi_guard_or!(0, {
        ITERATORS
            .with_mut(handle, |c| c.advance().unwrap_or(0))
            .unwrap_or(0)
    })
}

/// Move the cursor back to the start.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_iter_reset(handle: u64) {
    ffi_guard_or!((), {
        let _ = ITERATORS.with_mut(handle, SeqCursor::reset);
    })
}

/// Scan from the start for `value`; on a match move the cursor onto it and
/// return 1, otherwise leave the cursor and return 0.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_iter_find(handle: u64, value: i32) -> i32 {
    ffi_guard_or!(0, {
        ITERATORS
            .with_mut(handle, |c| i32::from(c.find(value)))
            .unwrap_or(0)
    })
}
