//! Text buffer FFI.
//!
//! Input strings are NUL-terminated. Contents are read back by copying into
//! a caller-allocated buffer with [`calyx_text_value`]; no pointer into
//! library-owned memory is ever handed out.

use std::ffi::c_char;

use calyx_core::TextBuffer;

use crate::cstr::{borrow_bytes, copy_into};
use crate::handle::CALYX_INVALID_HANDLE;
use crate::last_error::set_last_error;
use crate::registry::Registry;
use crate::status::{saturating_i32, CalyxScalarStatus};

static TEXTS: Registry<TextBuffer> = Registry::new("text");

/// Create a text buffer holding a copy of `initial` (null means empty).
/// Returns 0 on failure.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_text_create(initial: *const c_char) -> u64 {
    ffi_guard_or!(CALYX_INVALID_HANDLE, {
        // SAFETY: initial is null or NUL-terminated per caller contract.
        let bytes = unsafe { borrow_bytes(initial) }.unwrap_or_default();
        TEXTS
            .insert(TextBuffer::new(bytes))
            .unwrap_or(CALYX_INVALID_HANDLE)
    })
}

/// Destroy a text buffer.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_text_destroy(handle: u64) -> i32 {
    ffi_guard!({ TEXTS.destroy(handle) as i32 })
}

/// Copy the contents into `buf` (capacity `cap` bytes, NUL-terminated).
///
/// The content length in bytes is written to `*len_out` when `len_out` is
/// non-null, on success and on `BufferTooSmall`, so callers can size a
/// retry. Returns `BufferTooSmall` when `cap <= len` (nothing is copied),
/// `NullPointer` for an invalid handle or a null `buf` with non-zero `cap`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_text_value(
    handle: u64,
    buf: *mut c_char,
    cap: usize,
    len_out: *mut usize,
) -> i32 {
    ffi_guard_or!(CalyxScalarStatus::NullPointer as i32, {
        if buf.is_null() && cap > 0 {
            set_last_error("calyx_text_value: buf is null");
            return CalyxScalarStatus::NullPointer as i32;
        }
        let result = TEXTS.with(handle, |t| {
            let bytes = t.as_bytes();
            if !len_out.is_null() {
                // SAFETY: len_out is valid per caller contract.
                unsafe { *len_out = bytes.len() };
            }
            if cap <= bytes.len() {
                set_last_error(format!(
                    "buffer of {cap} bytes too small for {} bytes of text",
                    bytes.len()
                ));
                return CalyxScalarStatus::BufferTooSmall;
            }
            // SAFETY: buf points to cap writable bytes per caller contract.
            unsafe { copy_into(bytes, buf, cap) };
            CalyxScalarStatus::Success
        });
        match result {
            Ok(status) => status as i32,
            Err(status) => CalyxScalarStatus::from(status) as i32,
        }
    })
}

/// Append `text`. A null `text` or invalid handle is a no-op.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_text_append(handle: u64, text: *const c_char) {
    ffi_guard_or!((), {
        // SAFETY: text is null or NUL-terminated per caller contract.
        if let Some(bytes) = unsafe { borrow_bytes(text) } {
            let _ = TEXTS.with_mut(handle, |t| t.append(bytes));
        }
    })
}

/// Prepend `text`. A null `text` or invalid handle is a no-op.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_text_prepend(handle: u64, text: *const c_char) {
    ffi_guard_or!((), {
        // SAFETY: text is null or NUL-terminated per caller contract.
        if let Some(bytes) = unsafe { borrow_bytes(text) } {
            let _ = TEXTS.with_mut(handle, |t| t.prepend(bytes));
        }
    })
}

/// Length in bytes, or 0 for an invalid handle.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_text_length(handle: u64) -> i32 {
    ffi_guard_or!(0, {
        TEXTS.with(handle, |t| saturating_i32(t.len())).unwrap_or(0)
    })
}

/// Reverse byte order in place.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_text_reverse(handle: u64) {
    ffi_guard_or!((), {
        let _ = TEXTS.with_mut(handle, TextBuffer::reverse);
    })
}

/// Upper-case ASCII letters in place.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_text_to_upper(handle: u64) {
    ffi_guard_or!((), {
        let _ = TEXTS.with_mut(handle, TextBuffer::to_upper);
    })
}

/// Lower-case ASCII letters in place.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_text_to_lower(handle: u64) {
    ffi_guard_or!((), {
        let _ = TEXTS.with_mut(handle, TextBuffer::to_lower);
    })
}
