//! Most-recently-used replacement.

use super::EvictionCache;
use crate::sequence::PageId;

/// MRU cache state: a residency flag per page identifier, the number of
/// frames in use, and the single most-recently-referenced page.
///
/// The victim on a fault at capacity is the page recorded by the *previous*
/// reference, never the page being admitted: `most_recent` is assigned only
/// after the hit/fault decision, on every reference. Evicting the incoming
/// page instead would be a different (degenerate) policy.
#[derive(Debug)]
pub struct MruCache {
    resident: Vec<bool>,
    most_recent: Option<PageId>,
    frames_in_use: usize,
    capacity: usize,
}

impl MruCache {
    /// Creates an empty cache with `capacity` frames for pages `1..=max_page_id`.
    pub fn new(capacity: usize, max_page_id: PageId) -> Self {
        Self {
            resident: vec![false; max_page_id as usize + 1],
            most_recent: None,
            frames_in_use: 0,
            capacity,
        }
    }
}

impl EvictionCache for MruCache {
    fn reference(&mut self, page: PageId) -> bool {
        let fault = !self.resident[page as usize];
        if fault {
            if self.frames_in_use == self.capacity {
                // Full frames imply at least one prior reference, so a
                // victim always exists here.
                if let Some(victim) = self.most_recent {
                    self.resident[victim as usize] = false;
                }
            } else {
                self.frames_in_use += 1;
            }
            self.resident[page as usize] = true;
        }
        self.most_recent = Some(page);
        fault
    }
}
