//! Cache Cell Basic Operations Tests
//!
//! Tests for the fundamental cell and protocol operations:
//! - Cell construction, source access, store / read back
//! - replace_source invalidation
//! - The miss-compute-store and hit-serve cycle

use crate::*;
use invcache::{inverse_of, CacheCell, CachedInverse, LuSolver};
use std::sync::atomic::Ordering;

/// Test that a fresh cell exposes its source and an empty slot
#[test]
fn test_new_cell_starts_empty() {
    let cell = CacheCell::new(sample_matrix());

    assert_eq!(cell.source(), &sample_matrix());
    assert!(!cell.is_cached());
    assert!(cell.cached_inverse().is_none());
}

/// Test storing an inverse and reading it back unchanged
#[test]
fn test_store_and_read_back() {
    let mut cell = CacheCell::new(sample_matrix());

    cell.store_inverse(sample_inverse());

    assert!(cell.is_cached());
    assert_eq!(cell.cached_inverse(), Some(&sample_inverse()));
}

/// Test that replacing the source clears the cached inverse in the same call
#[test]
fn test_replace_source_clears_cached_inverse() {
    let mut cell = CacheCell::new(sample_matrix());
    cell.store_inverse(sample_inverse());

    let next = Matrix::from_rows(&[[2.0, 0.0], [0.0, 4.0]]).unwrap();
    cell.replace_source(next.clone());

    assert_eq!(cell.source(), &next);
    assert!(!cell.is_cached(), "invalidation must be atomic with replacement");
}

/// Test that the first call computes through the solver and fills the slot
#[test]
fn test_first_call_computes_and_stores() {
    let (solver, calls) = CountingSolver::new(LuSolver);
    let memo = CachedInverse::with_solver(solver);
    let mut cell = CacheCell::new(sample_matrix());

    let inverse = memo.inverse_of(&mut cell).unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(cell.is_cached());
    assert_approx_identity(&sample_matrix(), &inverse, 1e-9);
}

/// Test that repeated calls on an unchanged source solve exactly once
#[test]
fn test_repeated_calls_solve_exactly_once() {
    let (solver, calls) = CountingSolver::new(LuSolver);
    let memo = CachedInverse::with_solver(solver);
    let mut cell = CacheCell::new(sample_matrix());

    let first = memo.inverse_of(&mut cell).unwrap();
    for _ in 0..5 {
        let again = memo.inverse_of(&mut cell).unwrap();
        assert_eq!(again, first, "every hit returns the stored value");
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

/// Test that a hit never consults the solver
#[test]
fn test_hit_skips_the_solver_entirely() {
    let (solver, calls) = CountingSolver::new(LuSolver);
    let memo = CachedInverse::with_solver(solver);

    let mut cell = CacheCell::new(sample_matrix());
    cell.store_inverse(Matrix::identity(2));

    let result = memo.inverse_of(&mut cell).unwrap();

    assert_eq!(result, Matrix::identity(2), "the seeded value is served verbatim");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

/// Test that a reset source is recomputed from the new matrix
#[test]
fn test_reset_then_recompute_uses_new_source() {
    let (solver, calls) = CountingSolver::new(LuSolver);
    let memo = CachedInverse::with_solver(solver);
    let mut cell = CacheCell::new(sample_matrix());
    memo.inverse_of(&mut cell).unwrap();

    cell.replace_source(Matrix::from_rows(&[[2.0, 0.0], [0.0, 4.0]]).unwrap());
    let inverse = memo.inverse_of(&mut cell).unwrap();

    let expected = Matrix::from_rows(&[[0.5, 0.0], [0.0, 0.25]]).unwrap();
    assert!(inverse.approx_eq(&expected, 1e-12));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

/// Test that interleaved reads and resets solve once per generation
#[test]
fn test_solve_count_tracks_generations() {
    let (solver, calls) = CountingSolver::new(LuSolver);
    let memo = CachedInverse::with_solver(solver);
    let mut cell = CacheCell::new(sample_matrix());

    memo.inverse_of(&mut cell).unwrap(); // miss
    memo.inverse_of(&mut cell).unwrap(); // hit
    cell.replace_source(Matrix::identity(3));
    memo.inverse_of(&mut cell).unwrap(); // miss
    memo.inverse_of(&mut cell).unwrap(); // hit
    memo.inverse_of(&mut cell).unwrap(); // hit

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

/// Test the one-line free function end to end
#[test]
fn test_free_function_end_to_end() {
    let mut cell = CacheCell::new(sample_matrix());

    let inverse = inverse_of(&mut cell).unwrap();

    assert_approx_identity(&sample_matrix(), &inverse, 1e-9);
    assert!(cell.is_cached());
    assert_eq!(cell.cached_inverse(), Some(&inverse));
}
