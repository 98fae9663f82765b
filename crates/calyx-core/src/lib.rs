//! Core types for the Calyx native computation library.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! library-owned objects that the C ABI in `calyx-ffi` hands out behind
//! opaque handles: integer vectors, text buffers, matrices, fixed-size
//! arenas, binary operations, and sequence cursors.
//!
//! Every fallible operation here returns a `Result` or `Option`. Mapping
//! failures onto sentinels and status codes is the FFI layer's job.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod cursor;
pub mod error;
pub mod matrix;
pub mod op;
pub mod stats;
pub mod text;
pub mod vector;

pub use arena::ResourceArena;
pub use cursor::SeqCursor;
pub use error::CoreError;
pub use matrix::Matrix;
pub use op::BinaryOp;
pub use text::TextBuffer;
pub use vector::IntVector;
