//! Worker pool: barrier semantics and failure containment.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;

use faultsim_core::pool::WorkerPool;

#[test]
fn drain_waits_for_every_unit() {
    let pool = WorkerPool::new(4);
    let executed = Arc::new(AtomicUsize::new(0));
    for _ in 0..200 {
        let executed = Arc::clone(&executed);
        pool.submit(Box::new(move || {
            executed.fetch_add(1, Ordering::Relaxed);
        }));
    }
    pool.drain();
    assert_eq!(executed.load(Ordering::Relaxed), 200);
    assert_eq!(pool.skipped_units(), 0);
}

#[test]
fn drain_with_nothing_submitted_returns() {
    let pool = WorkerPool::new(2);
    pool.drain();
}

#[test]
fn single_worker_pool_completes() {
    let pool = WorkerPool::new(1);
    let executed = Arc::new(AtomicUsize::new(0));
    for _ in 0..50 {
        let executed = Arc::clone(&executed);
        pool.submit(Box::new(move || {
            executed.fetch_add(1, Ordering::Relaxed);
        }));
    }
    pool.drain();
    assert_eq!(executed.load(Ordering::Relaxed), 50);
}

#[test]
fn zero_width_is_floored_to_one_worker() {
    let pool = WorkerPool::new(0);
    let executed = Arc::new(AtomicUsize::new(0));
    {
        let executed = Arc::clone(&executed);
        pool.submit(Box::new(move || {
            executed.fetch_add(1, Ordering::Relaxed);
        }));
    }
    pool.drain();
    assert_eq!(executed.load(Ordering::Relaxed), 1);
}

#[test]
fn panicking_unit_is_contained_and_counted() {
    let pool = WorkerPool::new(2);
    let executed = Arc::new(AtomicUsize::new(0));
    for i in 0..20 {
        let executed = Arc::clone(&executed);
        pool.submit(Box::new(move || {
            assert!(i != 7, "injected unit failure");
            executed.fetch_add(1, Ordering::Relaxed);
        }));
    }
    pool.drain();
    assert_eq!(executed.load(Ordering::Relaxed), 19);
    assert_eq!(pool.skipped_units(), 1);

    // The pool survives the panic and accepts a following batch.
    let executed_after = Arc::clone(&executed);
    pool.submit(Box::new(move || {
        executed_after.fetch_add(1, Ordering::Relaxed);
    }));
    pool.drain();
    assert_eq!(executed.load(Ordering::Relaxed), 20);
}
