//! Error types for invcache.
//!
//! This module provides the single error type shared by the matrix value
//! type, the solver primitive, and the memoization layer. Solver failures
//! surface through the memoizer unchanged; the cache itself adds no error
//! conditions of its own.

use thiserror::Error;

/// All invcache errors.
///
/// This is the canonical error type for all operations. Cache accessors
/// never fail; every variant here originates in the solver or in matrix
/// construction/arithmetic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Inversion (or determinant) requested for a non-square matrix
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows in the offending matrix
        rows: usize,
        /// Number of columns in the offending matrix
        cols: usize,
    },

    /// The matrix is singular: elimination found no usable pivot
    #[error("matrix is singular: no usable pivot in column {column}")]
    Singular {
        /// Elimination column at which no pivot survived the tolerance check
        column: usize,
    },

    /// Incompatible shapes for matrix multiplication
    #[error("dimension mismatch: {left_rows}x{left_cols} * {right_rows}x{right_cols}")]
    DimensionMismatch {
        /// Rows of the left operand
        left_rows: usize,
        /// Columns of the left operand
        left_cols: usize,
        /// Rows of the right operand
        right_rows: usize,
        /// Columns of the right operand
        right_cols: usize,
    },

    /// Invalid shape at matrix construction (ragged rows, wrong buffer length)
    #[error("invalid matrix shape: {0}")]
    InvalidShape(String),
}

/// Result type for invcache operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error reports a singular (non-invertible) matrix.
    ///
    /// A singular source is a property of the data, not of the cache: the
    /// cell is left untouched and a later call retries the computation.
    pub fn is_singular(&self) -> bool {
        matches!(self, Error::Singular { .. })
    }

    /// Check if this error reports a non-square matrix.
    pub fn is_not_square(&self) -> bool {
        matches!(self, Error::NotSquare { .. })
    }

    /// Check if this error reports a shape problem (construction or arithmetic).
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Error::NotSquare { .. } | Error::DimensionMismatch { .. } | Error::InvalidShape(_)
        )
    }
}
