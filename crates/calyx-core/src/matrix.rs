//! Dense row-major `f64` matrix.
//!
//! Storage is a single contiguous `Vec<f64>` of `rows * cols` elements;
//! cell `(r, c)` lives at `r * cols + c`. The shape is fixed at
//! construction. [`Matrix::multiply`] and [`Matrix::transpose`] never
//! mutate their inputs and always return a freshly allocated matrix.

use std::fmt;

use crate::error::{zeroed, CoreError};

/// A `rows × cols` matrix of `f64`, zero-initialised.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Allocate a zero-filled matrix.
    ///
    /// Fails with [`CoreError::AllocationFailed`] if `rows * cols`
    /// overflows or the buffer cannot be reserved.
    pub fn new(rows: usize, cols: usize) -> Result<Self, CoreError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(CoreError::AllocationFailed {
                requested: usize::MAX,
            })?;
        Ok(Self {
            rows,
            cols,
            data: zeroed(len)?,
        })
    }

    /// Build a matrix from row slices. All rows must have equal length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, CoreError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut m = Self::new(n_rows, n_cols)?;
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(CoreError::InvalidArgument {
                    reason: format!("row {r} has {} columns, expected {n_cols}", row.len()),
                });
            }
            m.data[r * n_cols..(r + 1) * n_cols].copy_from_slice(row);
        }
        Ok(m)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, CoreError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(CoreError::CellOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Bounds-checked read.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, CoreError> {
        self.offset(row, col).map(|i| self.data[i])
    }

    /// Bounds-checked write.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), CoreError> {
        let i = self.offset(row, col)?;
        self.data[i] = value;
        Ok(())
    }

    /// Matrix product `self × other`.
    ///
    /// Requires `self.cols == other.rows`; the result is
    /// `self.rows × other.cols`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, CoreError> {
        if self.cols != other.rows {
            return Err(CoreError::DimensionMismatch {
                left: (self.rows, self.cols),
                right: (other.rows, other.cols),
            });
        }
        let mut out = Matrix::new(self.rows, other.cols)?;
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                out.data[i * out.cols + j] = sum;
            }
        }
        Ok(out)
    }

    /// New matrix with rows and columns swapped.
    pub fn transpose(&self) -> Result<Matrix, CoreError> {
        let mut out = Matrix::new(self.cols, self.rows)?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j * out.cols + i] = self.data[i * self.cols + j];
            }
        }
        Ok(out)
    }

    /// Row-major view of every cell.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// One line per row, cells separated by a single space.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            let row = &self.data[r * self.cols..(r + 1) * self.cols];
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{v}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
