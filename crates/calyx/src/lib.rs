//! Calyx: a small native computation library.
//!
//! This is the top-level facade crate for Rust users. It re-exports the safe
//! types from `calyx-core`; the C ABI lives in `calyx-ffi` and is built as
//! a separate shared library.
//!
//! # Quick start
//!
//! ```rust
//! use calyx::prelude::*;
//!
//! let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
//! let b = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
//! let c = a.multiply(&b).unwrap();
//! assert_eq!(c.get(1, 1).unwrap(), 64.0);
//!
//! let mut v: IntVector = vec![5, 3, 8, 1].into();
//! v.sort();
//! assert_eq!(v.as_slice(), &[1, 3, 5, 8]);
//! assert_eq!(v.sum(), 17);
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`vector`] | Growable `i32` sequence |
//! | [`text`] | Byte-oriented mutable string |
//! | [`matrix`] | Dense row-major `f64` matrix |
//! | [`arena`] | Fixed-size `f64` buffer with lenient access |
//! | [`op`] | Binary floating-point operations |
//! | [`cursor`] | Cursor over a copied `i32` sequence |
//! | [`stats`] | Mean, variance, standard deviation |
//! | [`error`] | [`error::CoreError`] |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use calyx_core::{arena, cursor, error, matrix, op, stats, text, vector};

/// Common imports for typical Calyx usage.
///
/// ```rust
/// use calyx::prelude::*;
/// ```
pub mod prelude {
    pub use calyx_core::stats::{mean, std_dev, summarize, variance, Summary};
    pub use calyx_core::{
        BinaryOp, CoreError, IntVector, Matrix, ResourceArena, SeqCursor, TextBuffer,
    };
}
