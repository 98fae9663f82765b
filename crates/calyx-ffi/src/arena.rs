//! Fixed-size arena FFI.
//!
//! Out-of-range accesses are lenient and, unlike the vector and matrix
//! calls, record nothing: `calyx_arena_set` drops the write and
//! `calyx_arena_get` reads 0.0.

use calyx_core::ResourceArena;

use crate::handle::CALYX_INVALID_HANDLE;
use crate::last_error::record;
use crate::registry::Registry;
use crate::status::{non_negative, saturating_i32, CalyxStatus};

static ARENAS: Registry<ResourceArena> = Registry::new("arena");

fn create(size: i32) -> Result<u64, CalyxStatus> {
    let size = non_negative(size, "arena size", CalyxStatus::InvalidOperation)?;
    let arena = ResourceArena::new(size).map_err(|e| record(&e))?;
    ARENAS.insert(arena)
}

/// Create a zero-initialised arena of `size` cells. Returns 0 on failure.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_arena_create(size: i32) -> u64 {
    ffi_guard_or!(CALYX_INVALID_HANDLE, {
        create(size).unwrap_or(CALYX_INVALID_HANDLE)
    })
}

/// Destroy an arena.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_arena_destroy(handle: u64) -> i32 {
    ffi_guard!({ ARENAS.destroy(handle) as i32 })
}

/// Write `value` at `index`; out-of-range writes are silently dropped.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_arena_set(handle: u64, index: i32, value: f64) {
    ffi_guard_or!((), {
        let _ = ARENAS.with_mut(handle, |a| {
            if let Ok(i) = usize::try_from(index) {
                a.set(i, value);
            }
        });
    })
}

/// Value at `index`, or 0.0 when out of range or the handle is invalid.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_arena_get(handle: u64, index: i32) -> f64 {
    ffi_guard_or!(0.0, {
        ARENAS
            .with(handle, |a| usize::try_from(index).map_or(0.0, |i| a.get(i)))
            .unwrap_or(0.0)
    })
}

/// Number of cells, or 0 for an invalid handle.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn calyx_arena_size(handle: u64) -> i32 {
    ffi_guard_or!(0, {
        ARENAS.with(handle, |a| saturating_i32(a.len())).unwrap_or(0)
    })
}
