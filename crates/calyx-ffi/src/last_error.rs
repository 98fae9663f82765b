//! Thread-scoped last-error slot.
//!
//! Every failure recorded by an FFI function overwrites the calling
//! thread's slot. The slot is never cleared implicitly: a successful call
//! leaves the previous message in place, so callers should only consult it
//! after a call has reported failure. Each thread sees only its own errors.

use std::any::Any;
use std::cell::RefCell;
use std::ffi::c_char;

use calyx_core::CoreError;

use crate::status::CalyxStatus;

thread_local! {
    static LAST_ERROR: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Overwrite this thread's last-error message.
pub(crate) fn set_last_error(message: impl Into<String>) {
    let message = message.into();
    tracing::debug!(target: "calyx_ffi", error = %message, "recorded last error");
    LAST_ERROR.with(|cell| *cell.borrow_mut() = message);
}

/// Record a core error and return the matching status.
pub(crate) fn record(e: &CoreError) -> CalyxStatus {
    set_last_error(e.to_string());
    CalyxStatus::from(e)
}

/// Record a panic payload caught at the boundary.
pub(crate) fn record_panic(payload: &(dyn Any + Send)) {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned());
    tracing::error!(target: "calyx_ffi", panic = %detail, "panic caught at FFI boundary");
    set_last_error(format!("internal panic: {detail}"));
}

/// This thread's last-error message, or `None` if nothing was recorded.
#[cfg(test)]
pub(crate) fn last_error() -> Option<String> {
    LAST_ERROR.with(|cell| {
        let msg = cell.borrow();
        (!msg.is_empty()).then(|| msg.clone())
    })
}

/// Copy this thread's last-error message into `buf`.
///
/// Writes at most `cap - 1` bytes followed by a NUL terminator and returns
/// the full message length in bytes (excluding the terminator), so a return
/// value `>= cap` means the copy was truncated. Pass a null `buf` or
/// `cap == 0` to query the length only. Returns 0 when no error has been
/// recorded on this thread.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_last_error_message(buf: *mut c_char, cap: usize) -> usize {
    ffi_guard_or!(0, {
        LAST_ERROR.with(|cell| {
            let msg = cell.borrow();
            // SAFETY: buf points to cap writable bytes per caller contract.
            unsafe { crate::cstr::copy_into(msg.as_bytes(), buf, cap) };
            msg.len()
        })
    })
}

/// Length in bytes of this thread's last-error message.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_last_error_length() -> usize {
    ffi_guard_or!(0, { LAST_ERROR.with(|cell| cell.borrow().len()) })
}

/// Clear this thread's last-error message.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_clear_last_error() {
    ffi_guard_or!((), {
        LAST_ERROR.with(|cell| cell.borrow_mut().clear());
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_read() {
        set_last_error("boom");
        assert_eq!(last_error().as_deref(), Some("boom"));
        assert_eq!(calyx_last_error_length(), 4);
    }

    #[test]
    fn last_write_wins() {
        set_last_error("first");
        set_last_error("second");
        assert_eq!(last_error().as_deref(), Some("second"));
    }

    #[test]
    fn clear_empties_slot() {
        set_last_error("x");
        calyx_clear_last_error();
        assert_eq!(last_error(), None);
        assert_eq!(calyx_last_error_length(), 0);
    }

    #[test]
    fn record_maps_status() {
        let status = record(&CoreError::IndexOutOfBounds { index: 4, len: 2 });
        assert_eq!(status, CalyxStatus::OutOfBounds);
        assert_eq!(
            last_error().as_deref(),
            Some("index 4 out of bounds for length 2")
        );
    }

    #[test]
    fn message_copy_reports_full_length() {
        set_last_error("matrix mismatch");
        let mut buf = [0 as c_char; 7];
        let n = calyx_last_error_message(buf.as_mut_ptr(), buf.len());
        assert_eq!(n, 15);
        let out: Vec<u8> = buf.iter().map(|&c| c as u8).collect();
        assert_eq!(out, b"matrix\0");
    }

    #[test]
    fn length_query_with_null_buffer() {
        set_last_error("abc");
        assert_eq!(calyx_last_error_message(std::ptr::null_mut(), 0), 3);
    }

    #[test]
    fn slot_is_thread_scoped() {
        set_last_error("main thread");
        std::thread::spawn(|| {
            assert_eq!(last_error(), None);
            set_last_error("worker");
        })
        .join()
        .unwrap();
        assert_eq!(last_error().as_deref(), Some("main thread"));
    }

    #[test]
    fn panic_payload_is_recorded() {
        let fail = true;
        let status = ffi_guard!({
            if fail {
                panic!("kaboom");
            }
            CalyxStatus::Success as i32
        });
        assert_eq!(status, CalyxStatus::UnknownError as i32);
        assert_eq!(last_error().as_deref(), Some("internal panic: kaboom"));
    }
}
