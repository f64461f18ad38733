//! First-in-first-out replacement.

use std::collections::VecDeque;

use super::EvictionCache;
use crate::sequence::PageId;

/// FIFO cache state: a residency flag per page identifier, the number of
/// frames in use, and the resident pages in arrival order.
///
/// FIFO orders strictly by first admission: a hit leaves the arrival queue
/// untouched, so a page's position is fixed until it is evicted.
#[derive(Debug)]
pub struct FifoCache {
    resident: Vec<bool>,
    arrivals: VecDeque<PageId>,
    frames_in_use: usize,
    capacity: usize,
}

impl FifoCache {
    /// Creates an empty cache with `capacity` frames for pages `1..=max_page_id`.
    pub fn new(capacity: usize, max_page_id: PageId) -> Self {
        Self {
            resident: vec![false; max_page_id as usize + 1],
            arrivals: VecDeque::with_capacity(capacity),
            frames_in_use: 0,
            capacity,
        }
    }
}

impl EvictionCache for FifoCache {
    fn reference(&mut self, page: PageId) -> bool {
        if self.resident[page as usize] {
            return false;
        }
        if self.frames_in_use == self.capacity {
            if let Some(victim) = self.arrivals.pop_front() {
                self.resident[victim as usize] = false;
            }
        } else {
            self.frames_in_use += 1;
        }
        self.resident[page as usize] = true;
        self.arrivals.push_back(page);
        true
    }
}
