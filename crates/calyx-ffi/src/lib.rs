//! C FFI bindings for the Calyx native computation library.
//!
//! Exposes the `calyx-core` objects to a managed caller through a flat
//! C-compatible API. Objects live in per-kind handle tables and are named
//! by opaque `u64` handles; `0` is never a valid handle. Destroyed handles
//! are detected rather than dereferenced.
//!
//! Failures surface in one of three ways, depending on the call:
//! a sentinel return value (`0`, `0.0`, invalid handle) plus a message in
//! the thread's last-error slot, a [`CalyxStatus`] / [`CalyxScalarStatus`]
//! return code from the `safe_` variants, or a silent no-op where the
//! contract says so (arena writes). No call unwinds a panic into the caller.
//!
//! This crate is the only one in the workspace that contains `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

#[macro_use]
mod macros;

pub mod arena;
mod cstr;
mod handle;
pub mod iter;
pub mod last_error;
pub mod matrix;
pub mod op;
mod registry;
pub mod stats;
pub mod status;
pub mod text;
pub mod vector;

pub use handle::CALYX_INVALID_HANDLE;
pub use stats::CalyxStatsSummary;
pub use status::{CalyxScalarStatus, CalyxStatus};
