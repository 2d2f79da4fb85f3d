//! Single-slot cache cells.
//!
//! A [`CacheCell`] pairs one source matrix with at most one cached inverse.
//! The slot starts empty, is filled by [`CacheCell::store_inverse`], and is
//! cleared whenever the source changes. [`SharedCacheCell`] wraps a cell in
//! `Arc<Mutex<..>>` for use from multiple handles or threads.
//!
//! ## Invalidation
//!
//! [`CacheCell::replace_source`] is the only way to change the source, and
//! it clears the cached inverse in the same call. A cached inverse therefore
//! never outlives the matrix it was stored against. The cell does not verify
//! that a stored inverse actually inverts the current source; callers of
//! [`CacheCell::store_inverse`] are trusted, and storing an unrelated matrix
//! is a contract violation the cell cannot detect.

use crate::matrix::Matrix;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;
use tracing::trace;

/// One source matrix plus an optional cached inverse.
///
/// The cell is pure storage: it never computes an inverse itself and never
/// inspects the matrices it holds. Pair it with
/// [`CachedInverse`](crate::CachedInverse) for read-through memoization.
#[derive(Debug, Clone)]
pub struct CacheCell {
    source: Matrix,
    inverse: Option<Matrix>,
}

impl CacheCell {
    /// Create a cell holding `source` with an empty inverse slot.
    pub fn new(source: Matrix) -> Self {
        Self {
            source,
            inverse: None,
        }
    }

    /// The current source matrix.
    pub fn source(&self) -> &Matrix {
        &self.source
    }

    /// Replace the source matrix, clearing any cached inverse.
    ///
    /// Invalidation and replacement happen in the same call: after this
    /// returns, [`cached_inverse`](Self::cached_inverse) is `None` until the
    /// next [`store_inverse`](Self::store_inverse).
    pub fn replace_source(&mut self, source: Matrix) {
        trace!(
            "cache cell source replaced ({}x{}), inverse cleared",
            source.rows(),
            source.cols()
        );
        self.source = source;
        self.inverse = None;
    }

    /// The cached inverse, if one is stored.
    pub fn cached_inverse(&self) -> Option<&Matrix> {
        self.inverse.as_ref()
    }

    /// Store `inverse` in the slot, replacing any previous value.
    ///
    /// The cell trusts the caller: the value is not checked against the
    /// current source.
    pub fn store_inverse(&mut self, inverse: Matrix) {
        self.inverse = Some(inverse);
    }

    /// Whether the slot currently holds an inverse.
    pub fn is_cached(&self) -> bool {
        self.inverse.is_some()
    }
}

/// A [`CacheCell`] behind `Arc<parking_lot::Mutex<..>>`.
///
/// Cloning the handle shares the underlying slot. Compound sequences that
/// must observe and fill the slot without interleaving (the read-through
/// protocol) take the lock once via [`lock`](Self::lock) and hold it across
/// the whole sequence; the convenience accessors here each take the lock for
/// a single operation and clone values out.
#[derive(Debug, Clone)]
pub struct SharedCacheCell {
    inner: Arc<Mutex<CacheCell>>,
}

impl SharedCacheCell {
    /// Create a shared cell holding `source` with an empty inverse slot.
    pub fn new(source: Matrix) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CacheCell::new(source))),
        }
    }

    /// Lock the cell for a compound read-check-store sequence.
    pub fn lock(&self) -> MutexGuard<'_, CacheCell> {
        self.inner.lock()
    }

    /// A copy of the current source matrix.
    pub fn source(&self) -> Matrix {
        self.inner.lock().source().clone()
    }

    /// Replace the source matrix, clearing any cached inverse.
    pub fn replace_source(&self, source: Matrix) {
        self.inner.lock().replace_source(source);
    }

    /// A copy of the cached inverse, if one is stored.
    pub fn cached_inverse(&self) -> Option<Matrix> {
        self.inner.lock().cached_inverse().cloned()
    }

    /// Store `inverse` in the slot, replacing any previous value.
    pub fn store_inverse(&self, inverse: Matrix) {
        self.inner.lock().store_inverse(inverse);
    }

    /// Whether the slot currently holds an inverse.
    pub fn is_cached(&self) -> bool {
        self.inner.lock().is_cached()
    }
}

// ============================================================================
// Tests
// ============================================================================
