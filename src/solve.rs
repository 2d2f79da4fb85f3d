//! Direct linear solver primitive.
//!
//! The caching layer never computes an inverse itself; it delegates to an
//! [`InverseSolver`]. This module defines that seam, the pass-through
//! [`SolveOptions`] configuration, and the default [`LuSolver`]: LU-style
//! row elimination with partial pivoting over the augmented system
//! `[A | I]`, followed by back substitution.
//!
//! ## Singularity Detection
//!
//! At each elimination column the best available pivot magnitude is compared
//! against `pivot_tolerance * max_abs(A)`. A pivot at or below the threshold
//! raises [`Error::Singular`] naming the column. The threshold is relative,
//! so uniformly scaling a matrix does not change which inputs are rejected;
//! `pivot_tolerance = 0.0` degrades to exact-zero pivot detection.

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use serde::{Deserialize, Serialize};

/// Default relative pivot tolerance for [`SolveOptions`].
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

/// Pass-through solver configuration.
///
/// The memoization layer forwards these options to the solver verbatim and
/// never interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolveOptions {
    /// Relative pivot tolerance for singularity detection.
    ///
    /// A candidate pivot with magnitude at or below
    /// `pivot_tolerance * max_abs(A)` is treated as zero.
    pub pivot_tolerance: f64,
}

impl SolveOptions {
    /// Options with an explicit pivot tolerance.
    pub fn with_pivot_tolerance(pivot_tolerance: f64) -> Self {
        Self { pivot_tolerance }
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }
}

/// The linear-algebra collaborator the cache delegates to.
///
/// Implementations compute the inverse of a square matrix or report why they
/// cannot. The memoization layer treats the solver as a black box: options
/// pass through unmodified, errors propagate unchanged, and nothing is
/// cached on failure.
pub trait InverseSolver {
    /// Compute the inverse of `matrix`.
    ///
    /// Fails with [`Error::NotSquare`] for rectangular input and
    /// [`Error::Singular`] when elimination finds no usable pivot.
    fn inverse(&self, matrix: &Matrix, options: &SolveOptions) -> Result<Matrix>;
}

/// Default dense solver: LU elimination with partial row pivoting.
///
/// Solves `A X = I` by reducing the augmented system to upper-triangular
/// form and back-substituting, which yields `X = A^-1`. The `0x0` matrix is
/// its own inverse.
#[derive(Debug, Clone, Copy, Default)]
pub struct LuSolver;

impl InverseSolver for LuSolver {
    fn inverse(&self, matrix: &Matrix, options: &SolveOptions) -> Result<Matrix> {
        let n = require_square(matrix)?;
        if n == 0 {
            return Ok(Matrix::identity(0));
        }

        let threshold = options.pivot_tolerance * matrix.max_abs();
        let mut a = matrix.as_slice().to_vec();
        let mut rhs = Matrix::identity(n).as_slice().to_vec();

        // Forward elimination: reduce `a` to upper-triangular form, applying
        // every row operation to `rhs` as well.
        for col in 0..n {
            let pivot_row = select_pivot(&a, n, col);
            if a[pivot_row * n + col].abs() <= threshold {
                return Err(Error::Singular { column: col });
            }
            if pivot_row != col {
                swap_rows(&mut a, n, col, pivot_row);
                swap_rows(&mut rhs, n, col, pivot_row);
            }

            let pivot = a[col * n + col];
            for row in (col + 1)..n {
                let factor = a[row * n + col] / pivot;
                if factor == 0.0 {
                    continue;
                }
                for j in col..n {
                    a[row * n + j] -= factor * a[col * n + j];
                }
                for j in 0..n {
                    rhs[row * n + j] -= factor * rhs[col * n + j];
                }
            }
        }

        // Back substitution, in place on `rhs`.
        for row in (0..n).rev() {
            for k in (row + 1)..n {
                let factor = a[row * n + k];
                if factor == 0.0 {
                    continue;
                }
                for j in 0..n {
                    rhs[row * n + j] -= factor * rhs[k * n + j];
                }
            }
            let pivot = a[row * n + row];
            for j in 0..n {
                rhs[row * n + j] /= pivot;
            }
        }

        Matrix::from_vec(n, n, rhs)
    }
}

/// Determinant of a square matrix via forward elimination.
///
/// Returns the signed product of the pivots (`1.0` for the `0x0` matrix,
/// exactly `0.0` when a column has no non-zero pivot at all). Fails only
/// with [`Error::NotSquare`]; unlike inversion, a singular matrix is a
/// legitimate input here.
pub fn determinant(matrix: &Matrix) -> Result<f64> {
    let n = require_square(matrix)?;
    if n == 0 {
        return Ok(1.0);
    }

    let mut a = matrix.as_slice().to_vec();
    let mut det = 1.0;

    for col in 0..n {
        let pivot_row = select_pivot(&a, n, col);
        if a[pivot_row * n + col] == 0.0 {
            return Ok(0.0);
        }
        if pivot_row != col {
            swap_rows(&mut a, n, col, pivot_row);
            det = -det;
        }

        let pivot = a[col * n + col];
        det *= pivot;
        for row in (col + 1)..n {
            let factor = a[row * n + col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in col..n {
                a[row * n + j] -= factor * a[col * n + j];
            }
        }
    }

    Ok(det)
}

fn require_square(matrix: &Matrix) -> Result<usize> {
    if !matrix.is_square() {
        return Err(Error::NotSquare {
            rows: matrix.rows(),
            cols: matrix.cols(),
        });
    }
    Ok(matrix.rows())
}

/// Row index in `col..n` holding the largest-magnitude entry of `col`.
fn select_pivot(a: &[f64], n: usize, col: usize) -> usize {
    let mut pivot_row = col;
    let mut best = a[col * n + col].abs();
    for row in (col + 1)..n {
        let candidate = a[row * n + col].abs();
        if candidate > best {
            best = candidate;
            pivot_row = row;
        }
    }
    pivot_row
}

fn swap_rows(data: &mut [f64], n: usize, r1: usize, r2: usize) {
    for j in 0..n {
        data.swap(r1 * n + j, r2 * n + j);
    }
}

// ============================================================================
// Tests
// ============================================================================
