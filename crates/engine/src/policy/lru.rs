//! Least-recently-used replacement.
//!
//! Recency is tracked by an explicit ordered list rather than timestamps: an
//! arena of per-page `prev`/`next` links indexed by page identifier, giving
//! O(1) membership, O(1) move-to-most-recent on a hit, and O(1) eviction of
//! the least-recent entry. Page identifier 0 serves as the null link, which
//! is why valid identifiers start at 1.

use super::EvictionCache;
use crate::sequence::PageId;

const NIL: PageId = 0;

/// Doubly-linked recency list over a fixed arena of page slots.
///
/// Head is the least-recently-used entry, tail the most-recently-used.
#[derive(Debug)]
struct RecencyList {
    prev: Vec<PageId>,
    next: Vec<PageId>,
    resident: Vec<bool>,
    head: PageId,
    tail: PageId,
    len: usize,
}

impl RecencyList {
    fn new(max_page_id: PageId) -> Self {
        let slots = max_page_id as usize + 1;
        Self {
            prev: vec![NIL; slots],
            next: vec![NIL; slots],
            resident: vec![false; slots],
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    fn contains(&self, page: PageId) -> bool {
        self.resident[page as usize]
    }

    /// Unlinks `page` from the list without clearing residency.
    fn detach(&mut self, page: PageId) {
        let (p, n) = (self.prev[page as usize], self.next[page as usize]);
        if p == NIL {
            self.head = n;
        } else {
            self.next[p as usize] = n;
        }
        if n == NIL {
            self.tail = p;
        } else {
            self.prev[n as usize] = p;
        }
    }

    /// Links `page` at the tail (most-recent position).
    fn attach_tail(&mut self, page: PageId) {
        self.prev[page as usize] = self.tail;
        self.next[page as usize] = NIL;
        if self.tail == NIL {
            self.head = page;
        } else {
            self.next[self.tail as usize] = page;
        }
        self.tail = page;
    }

    /// Inserts a non-resident `page` as most-recent.
    fn insert_mru(&mut self, page: PageId) {
        debug_assert!(!self.contains(page));
        self.attach_tail(page);
        self.resident[page as usize] = true;
        self.len += 1;
    }

    /// Moves a resident `page` to the most-recent position.
    fn touch(&mut self, page: PageId) {
        debug_assert!(self.contains(page));
        if self.tail != page {
            self.detach(page);
            self.attach_tail(page);
        }
    }

    /// Removes and returns the least-recent entry, if any.
    fn evict_lru(&mut self) -> Option<PageId> {
        let victim = self.head;
        if victim == NIL {
            return None;
        }
        self.detach(victim);
        self.resident[victim as usize] = false;
        self.len -= 1;
        Some(victim)
    }
}

/// LRU cache state: a recency list bounded by the frame capacity.
#[derive(Debug)]
pub struct LruCache {
    list: RecencyList,
    capacity: usize,
}

impl LruCache {
    /// Creates an empty cache with `capacity` frames for pages `1..=max_page_id`.
    pub fn new(capacity: usize, max_page_id: PageId) -> Self {
        Self {
            list: RecencyList::new(max_page_id),
            capacity,
        }
    }
}

impl EvictionCache for LruCache {
    fn reference(&mut self, page: PageId) -> bool {
        if self.list.contains(page) {
            // Recency is access order, not insertion order: a hit always
            // becomes most-recent.
            self.list.touch(page);
            return false;
        }
        if self.list.len == self.capacity {
            let _ = self.list.evict_lru();
        }
        self.list.insert_mru(page);
        true
    }
}
