//! Helpers for NUL-terminated strings crossing the boundary.

use std::ffi::{c_char, CStr};

/// Borrow the bytes of a NUL-terminated C string, without the terminator.
///
/// Returns `None` for a null pointer.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays
/// valid and unmodified for `'a`.
#[allow(unsafe_code)]
pub(crate) unsafe fn borrow_bytes<'a>(ptr: *const c_char) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: non-null and NUL-terminated per caller contract.
    Some(unsafe { CStr::from_ptr(ptr) }.to_bytes())
}

/// Copy `bytes` into `buf` (capacity `cap` bytes) and NUL-terminate.
///
/// At most `cap - 1` bytes are copied. Returns the number of bytes copied,
/// excluding the terminator. A null `buf` or zero `cap` copies nothing.
///
/// # Safety
///
/// `buf` must be null or point to `cap` writable bytes.
#[allow(unsafe_code)]
pub(crate) unsafe fn copy_into(bytes: &[u8], buf: *mut c_char, cap: usize) -> usize {
    if buf.is_null() || cap == 0 {
        return 0;
    }
    let copy_len = bytes.len().min(cap - 1);
    // SAFETY: buf points to cap valid bytes and copy_len < cap.
    unsafe {
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf as *mut u8, copy_len);
        *buf.add(copy_len) = 0;
    }
    copy_len
}
