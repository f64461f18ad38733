//! Page identifiers and reference-sequence generation.
//!
//! A trial's input is a fixed-length sequence of page identifiers drawn
//! independently and uniformly from `1..=max_page_id`. Sequences are
//! immutable once generated and shared read-only by every simulation unit of
//! the trial that owns them.

use std::ops::Deref;

use rand::Rng;

/// A page identifier. Valid identifiers are `1..=max_page_id`; zero is
/// reserved as the null link in the LRU recency list.
pub type PageId = u32;

/// An immutable, fixed-length sequence of page references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSequence(Vec<PageId>);

impl ReferenceSequence {
    /// Generates `length` independent uniform draws from `1..=max_page_id`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, length: usize, max_page_id: PageId) -> Self {
        let pages = (0..length).map(|_| rng.gen_range(1..=max_page_id)).collect();
        Self(pages)
    }

    /// Number of references in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence contains no references.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The references in order.
    pub fn pages(&self) -> &[PageId] {
        &self.0
    }
}

/// Builds a sequence from explicit pages; used by fixtures and tests.
impl From<Vec<PageId>> for ReferenceSequence {
    fn from(pages: Vec<PageId>) -> Self {
        Self(pages)
    }
}

impl Deref for ReferenceSequence {
    type Target = [PageId];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
