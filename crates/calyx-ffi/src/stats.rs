//! Descriptive statistics over caller-owned arrays.
//!
//! The plain calls return 0 for `count <= 0` (no error) and for a null
//! array with `count > 0` (error recorded). [`calyx_stats_summary`] reports
//! the same conditions as a [`CalyxScalarStatus`].

use calyx_core::stats;

use crate::last_error::set_last_error;
use crate::status::CalyxScalarStatus;

/// Mean, variance, and standard deviation of one array.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CalyxStatsSummary {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population variance.
    pub variance: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Number of samples. Fixed-width `u64` for ABI portability.
    pub count: u64,
}

// 3×f64 + 1×u64 = 32 bytes, align 8.
const _: () = assert!(std::mem::size_of::<CalyxStatsSummary>() == 32);
const _: () = assert!(std::mem::align_of::<CalyxStatsSummary>() == 8);

/// Borrow `values[0..count]`, or `None` when there is nothing to read.
///
/// # Safety
///
/// `values` must be null or point to `count` readable elements.
#[allow(unsafe_code)]
unsafe fn samples<'a, T>(values: *const T, count: i32, caller: &str) -> Option<&'a [T]> {
    let n = usize::try_from(count).ok().filter(|&n| n > 0)?;
    if values.is_null() {
        set_last_error(format!("{caller}: values is null"));
        return None;
    }
    // SAFETY: values points to n readable elements per caller contract.
    Some(unsafe { std::slice::from_raw_parts(values, n) })
}

/// Arithmetic mean of `values[0..count]`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_stats_mean(values: *const f64, count: i32) -> f64 {
    ffi_guard_or!(0.0, {
        // SAFETY: forwarded caller contract.
        unsafe { samples(values, count, "calyx_stats_mean") }
            .and_then(stats::mean)
            .unwrap_or(0.0)
    })
}

/// Arithmetic mean of `values[0..count]`, computed in single precision.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_stats_mean_f32(values: *const f32, count: i32) -> f32 {
    ffi_guard_or!(0.0, {
        // SAFETY: forwarded caller contract.
        unsafe { samples(values, count, "calyx_stats_mean_f32") }
            .and_then(stats::mean)
            .unwrap_or(0.0)
    })
}

/// Population variance of `values[0..count]`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_stats_variance(values: *const f64, count: i32) -> f64 {
    ffi_guard_or!(0.0, {
        // SAFETY: forwarded caller contract.
        unsafe { samples(values, count, "calyx_stats_variance") }
            .and_then(stats::variance)
            .unwrap_or(0.0)
    })
}

/// Population standard deviation of `values[0..count]`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_stats_std_dev(values: *const f64, count: i32) -> f64 {
    ffi_guard_or!(0.0, {
        // SAFETY: forwarded caller contract.
        unsafe { samples(values, count, "calyx_stats_std_dev") }
            .and_then(stats::std_dev)
            .unwrap_or(0.0)
    })
}

/// Summarise `values[0..count]` into `*out`.
///
/// Returns `NullPointer` for a null `values` or `out`, `InvalidParameter`
/// for `count <= 0`. Nothing is written to `out` on failure.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_stats_summary(
    values: *const f64,
    count: i32,
    out: *mut CalyxStatsSummary,
) -> i32 {
    ffi_guard_or!(CalyxScalarStatus::NullPointer as i32, {
        if values.is_null() || out.is_null() {
            set_last_error("calyx_stats_summary: null pointer argument");
            return CalyxScalarStatus::NullPointer as i32;
        }
        if count <= 0 {
            set_last_error(format!("calyx_stats_summary: count {count} must be positive"));
            return CalyxScalarStatus::InvalidParameter as i32;
        }
        // SAFETY: values is non-null and points to count elements.
        let slice = unsafe { std::slice::from_raw_parts(values, count as usize) };
        match stats::summarize(slice) {
            Some(s) => {
                let summary = CalyxStatsSummary {
                    mean: s.mean,
                    variance: s.variance,
                    std_dev: s.std_dev,
                    count: s.count as u64,
                };
                // SAFETY: out is valid per caller contract.
                unsafe { *out = summary };
                CalyxScalarStatus::Success as i32
            }
            None => CalyxScalarStatus::InvalidParameter as i32,
        }
    })
}
