//! Read-through inverse memoization.
//!
//! [`CachedInverse`] is the protocol between a [`CacheCell`] and an
//! [`InverseSolver`]:
//!
//! 1. Consult the cell. On a hit, clone the stored inverse out and return
//!    it; the solver is not consulted.
//! 2. On a miss, delegate to the solver with the cell's current source and
//!    the caller's options.
//! 3. Store the freshly computed inverse in the cell, then return it.
//!
//! Solver errors propagate unchanged and leave the cell untouched, so a
//! failed call does not poison the slot: the next call retries from step 2.
//!
//! ## Caching Granularity
//!
//! The cell keys its slot on source identity alone. Two calls with different
//! [`SolveOptions`] against the same unchanged source both resolve from the
//! slot once it is filled; options only influence the computation that fills
//! it. Callers that need per-option results should use one cell per option
//! set.

use crate::cell::{CacheCell, SharedCacheCell};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::solve::{InverseSolver, LuSolver, SolveOptions};
use tracing::{debug, trace};

/// Memoized inversion over a [`CacheCell`].
///
/// The struct owns only the solver; matrices live in the cell. A single
/// `CachedInverse` can serve any number of cells.
///
/// # Example
///
/// ```
/// use invcache::{CacheCell, CachedInverse, Matrix};
///
/// let mut cell = CacheCell::new(Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]])?);
/// let memo = CachedInverse::new();
///
/// let first = memo.inverse_of(&mut cell)?; // miss: computed and stored
/// let second = memo.inverse_of(&mut cell)?; // hit: served from the cell
/// assert_eq!(first, second);
/// # Ok::<(), invcache::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CachedInverse<S: InverseSolver = LuSolver> {
    solver: S,
}

impl CachedInverse {
    /// Memoizer backed by the default [`LuSolver`].
    pub fn new() -> Self {
        Self { solver: LuSolver }
    }
}

impl Default for CachedInverse {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: InverseSolver> CachedInverse<S> {
    /// Memoizer backed by a caller-supplied solver.
    pub fn with_solver(solver: S) -> Self {
        Self { solver }
    }

    /// Inverse of the cell's source, with default [`SolveOptions`].
    pub fn inverse_of(&self, cell: &mut CacheCell) -> Result<Matrix> {
        self.inverse_of_with(cell, &SolveOptions::default())
    }

    /// Inverse of the cell's source.
    ///
    /// Returns the cached inverse when the slot is filled; otherwise
    /// computes via the solver, stores the result in the cell, and returns
    /// it. `options` pass through to the solver verbatim and are ignored on
    /// a hit.
    pub fn inverse_of_with(&self, cell: &mut CacheCell, options: &SolveOptions) -> Result<Matrix> {
        if let Some(inverse) = cell.cached_inverse() {
            trace!("inverse cache hit ({}x{})", inverse.rows(), inverse.cols());
            return Ok(inverse.clone());
        }

        debug!(
            "inverse cache miss ({}x{}), delegating to solver",
            cell.source().rows(),
            cell.source().cols()
        );
        let inverse = self.solver.inverse(cell.source(), options)?;
        cell.store_inverse(inverse.clone());
        Ok(inverse)
    }

    /// Inverse of a shared cell's source, with default [`SolveOptions`].
    pub fn inverse_of_shared(&self, cell: &SharedCacheCell) -> Result<Matrix> {
        self.inverse_of_shared_with(cell, &SolveOptions::default())
    }

    /// Inverse of a shared cell's source.
    ///
    /// The cell's lock is held across the whole check-compute-store
    /// sequence, so concurrent callers racing on an empty slot perform the
    /// computation exactly once.
    pub fn inverse_of_shared_with(
        &self,
        cell: &SharedCacheCell,
        options: &SolveOptions,
    ) -> Result<Matrix> {
        let mut guard = cell.lock();
        self.inverse_of_with(&mut guard, options)
    }
}

/// Memoized inverse with the default solver and options.
///
/// Convenience for one-off call sites that do not hold a [`CachedInverse`].
pub fn inverse_of(cell: &mut CacheCell) -> Result<Matrix> {
    CachedInverse::new().inverse_of(cell)
}

// ============================================================================
// Tests
// ============================================================================
