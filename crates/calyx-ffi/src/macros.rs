//! Boundary guards shared by every exported function.
//!
//! A panic must never unwind into the C caller. `ffi_guard!` wraps a body
//! returning a Family A status in `catch_unwind`; `ffi_guard_or!` does the
//! same for functions that return a sentinel value instead. Early `return`
//! inside the body returns from the guarded closure, not the outer function.

/// Run `$body` under `catch_unwind`, mapping a panic to `UnknownError`.
macro_rules! ffi_guard {
    ($body:block) => {
        ffi_guard_or!($crate::status::CalyxStatus::UnknownError as i32, $body)
    };
}

/// Run `$body` under `catch_unwind`, mapping a panic to `$default`.
macro_rules! ffi_guard_or {
    ($default:expr, $body:block) => {{
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(payload) => {
                $crate::last_error::record_panic(&*payload);
                $default
            }
        }
    }};
}
