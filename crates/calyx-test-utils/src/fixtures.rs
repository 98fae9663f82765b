//! Reference inputs with hand-checked results.

use calyx_core::Matrix;

/// Sequence used by the iterator scenarios.
pub const SAMPLE_SEQUENCE: [i32; 3] = [10, 20, 30];

/// Sample whose mean is 5, population variance 4, standard deviation 2.
pub const STATS_SAMPLE: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

/// `[[1, 2, 3], [4, 5, 6]]`.
pub fn sample_lhs() -> Matrix {
    Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap()
}

/// `[[1, 2], [3, 4], [5, 6]]`.
pub fn sample_rhs() -> Matrix {
    Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap()
}

/// `sample_lhs() × sample_rhs()` = `[[22, 28], [49, 64]]`.
pub fn sample_product() -> Matrix {
    Matrix::from_rows(&[[22.0, 28.0], [49.0, 64.0]]).unwrap()
}

/// A 2×2 matrix that cannot right-multiply [`sample_lhs`].
pub fn incompatible_rhs() -> Matrix {
    Matrix::new(2, 2).unwrap()
}
