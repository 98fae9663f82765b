//! Binary operation FFI.

use calyx_core::BinaryOp;

use crate::handle::CALYX_INVALID_HANDLE;
use crate::registry::Registry;

static OPS: Registry<BinaryOp> = Registry::new("operation");

fn create(op: BinaryOp) -> u64 {
    let handle = OPS.insert(op).unwrap_or(CALYX_INVALID_HANDLE);
    tracing::trace!(target: "calyx_ffi", op = op.name(), handle, "operation bound");
    handle
}

/// Create an operation computing `a + b`. Returns 0 on failure.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_op_create_add() -> u64 {
    ffi_guard_or!(CALYX_INVALID_HANDLE, { create(BinaryOp::Add) })
}

/// Create an operation computing `a * b`. Returns 0 on failure.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_op_create_multiply() -> u64 {
    ffi_guard_or!(CALYX_INVALID_HANDLE, { create(BinaryOp::Multiply) })
}

/// Create an operation computing `a` to the power `b`. Returns 0 on failure.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_op_create_power() -> u64 {
    ffi_guard_or!(CALYX_INVALID_HANDLE, { create(BinaryOp::Power) })
}

/// Invoke the bound operation. An invalid handle yields 0.0 and records
/// an error.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_op_call(handle: u64, a: f64, b: f64) -> f64 {
    ffi_guard_or!(0.0, {
        OPS.with(handle, |op| op.apply(a, b)).unwrap_or(0.0)
    })
}

/// Destroy an operation.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_op_destroy(handle: u64) -> i32 {
    ffi_guard!({ OPS.destroy(handle) as i32 })
}
