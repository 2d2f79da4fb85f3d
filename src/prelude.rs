//! Convenient imports for Invcache.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use invcache::prelude::*;
//!
//! let mut cell = CacheCell::new(Matrix::identity(2));
//! let inverse = CachedInverse::new().inverse_of(&mut cell)?;
//! assert_eq!(inverse, Matrix::identity(2));
//! # Ok::<(), invcache::Error>(())
//! ```

// Storage and protocol
pub use crate::cell::{CacheCell, SharedCacheCell};
pub use crate::memo::{inverse_of, CachedInverse};

// Error handling
pub use crate::error::{Error, Result};

// Matrix and solver types
pub use crate::matrix::Matrix;
pub use crate::solve::{determinant, InverseSolver, LuSolver, SolveOptions};
