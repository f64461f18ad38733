//! Fixed-width worker pool with a submit/drain barrier.
//!
//! The pool drains a shared queue of simulation units on a fixed set of
//! worker threads. It provides:
//! 1. **Submission:** `submit` enqueues a unit; units never block once dispatched.
//! 2. **Barrier:** `drain` blocks the caller until every submitted unit has finished.
//! 3. **Containment:** a panicking unit is caught and counted, never crashing the batch.
//!
//! The in-flight counter and its condvar are owned by the pool instance, so
//! the barrier's lifetime is exactly one pool — nothing is process-wide.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::JoinHandle;

use tracing::{debug, error};

/// A unit of work: runs to completion synchronously once dispatched.
pub type Unit = Box<dyn FnOnce() + Send + 'static>;

/// Shared pool state: the in-flight unit count, the barrier condvar, and the
/// count of units that panicked.
#[derive(Debug)]
struct PoolState {
    in_flight: Mutex<usize>,
    all_done: Condvar,
    skipped: AtomicU64,
}

/// A fixed set of worker threads draining a shared unit queue.
#[derive(Debug)]
pub struct WorkerPool {
    sender: Option<Sender<Unit>>,
    workers: Vec<JoinHandle<()>>,
    state: Arc<PoolState>,
}

impl WorkerPool {
    /// Spawns `workers` threads (floored at 1) waiting on the unit queue.
    pub fn new(workers: usize) -> Self {
        let workers = workers.max(1);
        let (sender, receiver) = channel::<Unit>();
        let receiver = Arc::new(Mutex::new(receiver));
        let state = Arc::new(PoolState {
            in_flight: Mutex::new(0),
            all_done: Condvar::new(),
            skipped: AtomicU64::new(0),
        });

        debug!(workers, "starting worker pool");
        let handles = (0..workers)
            .map(|index| {
                let receiver = Arc::clone(&receiver);
                let state = Arc::clone(&state);
                std::thread::Builder::new()
                    .name(format!("sim-worker-{index}"))
                    .spawn(move || worker_loop(&receiver, &state))
                    .unwrap_or_else(|e| panic!("failed to spawn worker thread: {e}"))
            })
            .collect();

        Self {
            sender: Some(sender),
            workers: handles,
            state,
        }
    }

    /// Enqueues a unit. Must not be called once `drain` has begun for the
    /// batch the unit belongs to.
    pub fn submit(&self, unit: Unit) {
        {
            let mut in_flight = lock(&self.state.in_flight);
            *in_flight += 1;
        }
        if let Some(sender) = &self.sender {
            // Workers only exit once the sender is dropped, so the queue is
            // always open here.
            sender.send(unit).ok();
        }
    }

    /// Blocks until every previously submitted unit has finished executing.
    ///
    /// This is the only synchronization point between the simulation phase
    /// and any reader of the results.
    pub fn drain(&self) {
        let mut in_flight = lock(&self.state.in_flight);
        while *in_flight > 0 {
            in_flight = self
                .state
                .all_done
                .wait(in_flight)
                .unwrap_or_else(std::sync::PoisonError::into_inner);
        }
    }

    /// Number of units that failed and left their cell at zero.
    pub fn skipped_units(&self) -> u64 {
        self.state.skipped.load(Ordering::Relaxed)
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        // Closing the channel lets each worker's recv() fail and exit.
        drop(self.sender.take());
        for handle in self.workers.drain(..) {
            handle.join().ok();
        }
    }
}

fn worker_loop(receiver: &Mutex<Receiver<Unit>>, state: &PoolState) {
    loop {
        let unit = match lock(receiver).recv() {
            Ok(unit) => unit,
            Err(_) => break, // queue closed
        };
        if catch_unwind(AssertUnwindSafe(unit)).is_err() {
            state.skipped.fetch_add(1, Ordering::Relaxed);
            error!("simulation unit panicked; its result cell is left at zero");
        }
        let mut in_flight = lock(&state.in_flight);
        *in_flight -= 1;
        if *in_flight == 0 {
            state.all_done.notify_all();
        }
    }
}

/// Locks a mutex, recovering the guard if a panicking unit poisoned it.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
