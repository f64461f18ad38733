//! Eviction policies and their replay state machines.
//!
//! Each policy module implements one replacement algorithm as a
//! freshly-constructed state machine per simulation unit: a unit owns its
//! simulator outright, so units never share mutable state and need no
//! locking. The policy semantics are exact:
//! 1. **FIFO:** evicts in first-admission order; a hit never reorders the queue.
//! 2. **LRU:** evicts the least-recently-touched resident page; a hit refreshes recency.
//! 3. **MRU:** evicts the page touched by the *previous* reference, updated after every reference.

/// First-in-first-out replacement.
pub mod fifo;
/// Least-recently-used replacement.
pub mod lru;
/// Most-recently-used replacement.
pub mod mru;

pub use fifo::FifoCache;
pub use lru::LruCache;
pub use mru::MruCache;

use crate::sequence::PageId;

/// The three eviction policies under study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-in-first-out: victim is the earliest-admitted resident page.
    Fifo,
    /// Least-recently-used: victim is the resident page untouched the longest.
    Lru,
    /// Most-recently-used: victim is the page touched by the previous reference.
    Mru,
}

impl Policy {
    /// All policies, in tally/report order.
    pub const ALL: [Self; 3] = [Self::Fifo, Self::Lru, Self::Mru];

    /// Display name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
            Self::Mru => "MRU",
        }
    }

    /// Stable index of this policy into per-policy arrays.
    pub fn index(self) -> usize {
        match self {
            Self::Fifo => 0,
            Self::Lru => 1,
            Self::Mru => 2,
        }
    }

    /// Replays `sequence` against a fresh cache of `capacity` frames and
    /// returns the fault count.
    ///
    /// Deterministic: the count is a pure function of the policy, the
    /// sequence, and the capacity. Page identifiers must lie in
    /// `1..=max_page_id`.
    pub fn count_faults(self, sequence: &[PageId], capacity: usize, max_page_id: PageId) -> u32 {
        debug_assert!(capacity >= 1);
        match self {
            Self::Fifo => replay(FifoCache::new(capacity, max_page_id), sequence),
            Self::Lru => replay(LruCache::new(capacity, max_page_id), sequence),
            Self::Mru => replay(MruCache::new(capacity, max_page_id), sequence),
        }
    }
}

/// A fixed-capacity cache replaying one reference at a time.
///
/// `reference` admits or refreshes `page` and reports whether the reference
/// faulted (the page was not resident when referenced).
pub trait EvictionCache {
    /// Processes one reference; returns `true` on a fault.
    fn reference(&mut self, page: PageId) -> bool;
}

fn replay<C: EvictionCache>(mut cache: C, sequence: &[PageId]) -> u32 {
    let mut faults = 0;
    for &page in sequence {
        if cache.reference(page) {
            faults += 1;
        }
    }
    faults
}
