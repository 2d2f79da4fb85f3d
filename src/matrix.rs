//! Dense matrix value type.
//!
//! This module defines the canonical `Matrix` type for all invcache
//! operations: a heap-allocated, row-major `f64` matrix with checked
//! construction and the small arithmetic surface the cache layer and its
//! tests need (multiplication, max-magnitude, approximate comparison).
//!
//! ## Equality Rules
//!
//! - `PartialEq` is exact and element-wise with IEEE-754 semantics
//!   (`NaN != NaN`, `-0.0 == 0.0`).
//! - Numeric comparisons after floating-point work should use
//!   [`Matrix::approx_eq`] with an explicit tolerance instead.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Canonical invcache matrix type.
///
/// Entries are stored row-major in a single buffer; `data.len()` always
/// equals `rows * cols`. The `0x0` matrix is a valid value (it is square,
/// and it is its own inverse).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    /// Number of rows
    rows: usize,
    /// Number of columns
    cols: usize,
    /// Entries in row-major order
    data: Vec<f64>,
}

impl Matrix {
    /// Create a matrix from a row-major buffer.
    ///
    /// Fails with [`Error::InvalidShape`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidShape(format!(
                "buffer of {} entries cannot form a {}x{} matrix",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix from a slice of equal-length rows.
    ///
    /// An empty slice yields the `0x0` matrix. Fails with
    /// [`Error::InvalidShape`] if the rows are ragged.
    ///
    /// # Example
    ///
    /// ```
    /// use invcache::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);

        let mut data = Vec::with_capacity(row_count * col_count);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != col_count {
                return Err(Error::InvalidShape(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    col_count
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: row_count,
            cols: col_count,
            data,
        })
    }

    /// Create a matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if this matrix is square.
    ///
    /// The `0x0` matrix counts as square.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Largest entry magnitude, `0.0` for an empty matrix.
    ///
    /// Used by the solver to scale its pivot tolerance.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }

    /// Matrix multiplication `self * rhs`.
    ///
    /// Fails with [`Error::DimensionMismatch`] when the inner dimensions
    /// disagree.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(Error::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: rhs.rows,
                right_cols: rhs.cols,
            });
        }

        let mut out = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let lhs_ik = self.data[i * self.cols + k];
                if lhs_ik == 0.0 {
                    continue;
                }
                for j in 0..rhs.cols {
                    out.data[i * rhs.cols + j] += lhs_ik * rhs.data[k * rhs.cols + j];
                }
            }
        }
        Ok(out)
    }

    /// Element-wise approximate equality within `tolerance`.
    ///
    /// Returns `false` when shapes differ or any pair of entries is further
    /// apart than `tolerance` (comparisons involving `NaN` are never close).
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({}, {}) out of bounds for {}x{}",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({}, {}) out of bounds for {}x{}",
            row,
            col,
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

// ============================================================================
// Tests
// ============================================================================
