use std::collections::VecDeque;

use crate::constants::TLB_SIZE;

/// A single page -> frame mapping held by the TLB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TlbEntry {
    page: u8,
    frame: u8,
}

/// Translation lookaside buffer - a fully-associative 16-entry cache of
/// page -> frame mappings.
///
/// The deque runs from least-recently-touched (front) to most-recently-touched
/// (back). A lookup hit refreshes the entry's position, so the TLB's own
/// eviction order is access recency regardless of which replacement algorithm
/// governs RAM.
pub struct Tlb {
    entries: VecDeque<TlbEntry>,
}

impl Tlb {
    pub fn new() -> Self {
        Tlb {
            entries: VecDeque::with_capacity(TLB_SIZE),
        }
    }

    /// Look up a page. On hit, returns its frame and moves the entry to the
    /// most-recently-touched end.
    pub fn lookup(&mut self, page: u8) -> Option<u8> {
        let pos = self.entries.iter().position(|e| e.page == page)?;
        let entry = self.entries.remove(pos)?;
        self.entries.push_back(entry);
        Some(entry.frame)
    }

    /// Insert a mapping. A no-op if the page is already cached; otherwise the
    /// least-recently-touched entry is evicted when the cache is at capacity.
    pub fn insert(&mut self, page: u8, frame: u8) {
        if self.entries.iter().any(|e| e.page == page) {
            return;
        }
        if self.entries.len() == TLB_SIZE {
            self.entries.pop_front();
        }
        self.entries.push_back(TlbEntry { page, frame });
    }

    /// Remove a page's entry, if cached. Called whenever RAM evicts the frame
    /// backing that page, so the TLB never points at a reused frame.
    pub fn invalidate(&mut self, page: u8) {
        if let Some(pos) = self.entries.iter().position(|e| e.page == page) {
            self.entries.remove(pos);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Tlb {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_miss_then_hit() {
        let mut tlb = Tlb::new();
        assert_eq!(tlb.lookup(5), None);

        tlb.insert(5, 2);
        assert_eq!(tlb.lookup(5), Some(2));
    }

    #[test]
    fn test_insert_is_noop_when_present() {
        let mut tlb = Tlb::new();
        tlb.insert(5, 2);
        // Existing mapping is authoritative
        tlb.insert(5, 9);
        assert_eq!(tlb.lookup(5), Some(2));
        assert_eq!(tlb.len(), 1);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut tlb = Tlb::new();
        for page in 0..TLB_SIZE as u8 {
            tlb.insert(page, page);
        }
        assert_eq!(tlb.len(), TLB_SIZE);

        // Page 0 is the least-recently-touched entry
        tlb.insert(100, 50);
        assert_eq!(tlb.len(), TLB_SIZE);
        assert_eq!(tlb.lookup(0), None);
        assert_eq!(tlb.lookup(100), Some(50));
    }

    #[test]
    fn test_hit_refreshes_recency() {
        let mut tlb = Tlb::new();
        for page in 0..TLB_SIZE as u8 {
            tlb.insert(page, page);
        }

        // Touch page 0 so page 1 becomes the oldest
        assert_eq!(tlb.lookup(0), Some(0));
        tlb.insert(100, 50);

        assert_eq!(tlb.lookup(0), Some(0));
        assert_eq!(tlb.lookup(1), None);
    }

    #[test]
    fn test_invalidate() {
        let mut tlb = Tlb::new();
        tlb.insert(5, 2);
        tlb.insert(6, 3);

        tlb.invalidate(5);
        assert_eq!(tlb.lookup(5), None);
        assert_eq!(tlb.lookup(6), Some(3));

        // Invalidating an absent page is a no-op
        tlb.invalidate(42);
        assert_eq!(tlb.len(), 1);
    }
}
