//! Test fixtures and helpers for Calyx development.
//!
//! Provides reference matrices and sequences with known results, plus
//! float comparison helpers. Depends only on `calyx-core` so that FFI
//! integration tests can compare what crosses the boundary against the
//! safe core types.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use calyx_core::Matrix;

/// Absolute-tolerance float comparison.
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Assert that `read(row, col)` matches every cell of `expected`.
///
/// `read` is typically a closure over an FFI getter, so the same fixture
/// can check both the core type and a handle.
pub fn assert_cells_eq(expected: &Matrix, mut read: impl FnMut(usize, usize) -> f64) {
    for r in 0..expected.rows() {
        for c in 0..expected.cols() {
            let want = expected.get(r, c).unwrap();
            let got = read(r, c);
            assert!(
                approx_eq(got, want, 1e-12),
                "cell ({r}, {c}): expected {want}, got {got}"
            );
        }
    }
}
