//! # Invcache
//!
//! Memoized matrix inversion built on single-slot cache cells.
//!
//! Invcache pairs a source matrix with a lazily computed inverse. The first
//! request for an inverse delegates to a pluggable solver and stores the
//! result; later requests are served from the slot until the source is
//! replaced, which clears it in the same call.
//!
//! ## Quick Start
//!
//! ```
//! use invcache::prelude::*;
//!
//! // A cell holds one source matrix and an empty inverse slot.
//! let mut cell = CacheCell::new(Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]])?);
//!
//! let memo = CachedInverse::new();
//! let inverse = memo.inverse_of(&mut cell)?; // computed and stored
//! let again = memo.inverse_of(&mut cell)?; // served from the cell
//! assert_eq!(inverse, again);
//!
//! // Replacing the source clears the slot atomically.
//! cell.replace_source(Matrix::identity(2));
//! assert!(!cell.is_cached());
//! # Ok::<(), invcache::Error>(())
//! ```
//!
//! ## Components
//!
//! - [`Matrix`] - Dense row-major `f64` matrix
//! - [`CacheCell`] / [`SharedCacheCell`] - Single-slot source-plus-inverse storage
//! - [`CachedInverse`] - Read-through memoization protocol
//! - [`LuSolver`] - Default dense solver behind the [`InverseSolver`] seam

#![warn(missing_docs)]

mod cell;
mod error;
mod matrix;
mod memo;
mod solve;

pub mod prelude;

// Re-export storage and protocol entry points
pub use cell::{CacheCell, SharedCacheCell};
pub use memo::{inverse_of, CachedInverse};

// Re-export error handling
pub use error::{Error, Result};

// Re-export matrix and solver types
pub use matrix::Matrix;
pub use solve::{determinant, InverseSolver, LuSolver, SolveOptions, DEFAULT_PIVOT_TOLERANCE};
