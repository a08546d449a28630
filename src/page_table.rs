use crate::constants::NUM_PAGES;

/// Page table entry: RAM binding plus the timestamps the replacement
/// algorithms compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEntry {
    pub frame: u8,
    pub active: bool,
    /// Iteration the page was last brought into RAM
    pub load_time: u64,
    /// Iteration of the last access
    pub last_ref: u64,
}

/// Fixed 256-slot table indexed directly by page number.
///
/// Entries are created on first fault and never deleted, only deactivated,
/// so historical timestamps stay available after a page re-faults.
pub struct PageTable {
    entries: [Option<PageEntry>; NUM_PAGES],
}

impl PageTable {
    pub fn new() -> Self {
        PageTable {
            entries: [None; NUM_PAGES],
        }
    }

    #[inline]
    pub fn lookup(&self, page: u8) -> Option<&PageEntry> {
        self.entries[page as usize].as_ref()
    }

    /// Frame number for a page, only while the page is resident
    pub fn active_frame(&self, page: u8) -> Option<u8> {
        self.lookup(page).filter(|e| e.active).map(|e| e.frame)
    }

    /// Record a fault being serviced: the page is now resident in `frame`
    pub fn record_fault(&mut self, page: u8, frame: u8, now: u64) {
        self.entries[page as usize] = Some(PageEntry {
            frame,
            active: true,
            load_time: now,
            last_ref: now,
        });
    }

    /// Record an access to an already-resident page
    pub fn record_hit(&mut self, page: u8, now: u64) {
        if let Some(entry) = self.entries[page as usize].as_mut() {
            entry.last_ref = now;
        }
    }

    /// Tear down the RAM binding, keeping timestamps for later comparison
    pub fn deactivate(&mut self, page: u8) {
        if let Some(entry) = self.entries[page as usize].as_mut() {
            entry.active = false;
        }
    }

    /// Active entries in ascending page-number order. This scan order is the
    /// tie-break for all three replacement algorithms.
    pub fn active_pages(&self) -> impl Iterator<Item = (u8, &PageEntry)> {
        self.entries.iter().enumerate().filter_map(|(page, slot)| {
            slot.as_ref()
                .filter(|e| e.active)
                .map(|e| (page as u8, e))
        })
    }

    pub fn active_count(&self) -> usize {
        self.active_pages().count()
    }
}

impl Default for PageTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        let table = PageTable::new();
        assert!(table.lookup(0).is_none());
        assert!(table.active_frame(255).is_none());
        assert_eq!(table.active_count(), 0);
    }

    #[test]
    fn test_fault_then_hit() {
        let mut table = PageTable::new();
        table.record_fault(7, 3, 10);

        let entry = table.lookup(7).unwrap();
        assert_eq!(entry.frame, 3);
        assert!(entry.active);
        assert_eq!(entry.load_time, 10);
        assert_eq!(entry.last_ref, 10);

        table.record_hit(7, 15);
        let entry = table.lookup(7).unwrap();
        assert_eq!(entry.load_time, 10);
        assert_eq!(entry.last_ref, 15);
        assert_eq!(table.active_frame(7), Some(3));
    }

    #[test]
    fn test_deactivate_keeps_timestamps() {
        let mut table = PageTable::new();
        table.record_fault(7, 3, 10);
        table.record_hit(7, 15);

        table.deactivate(7);
        assert_eq!(table.active_frame(7), None);

        // The entry survives deactivation with its history intact
        let entry = table.lookup(7).unwrap();
        assert!(!entry.active);
        assert_eq!(entry.load_time, 10);
        assert_eq!(entry.last_ref, 15);
    }

    #[test]
    fn test_refault_resets_times() {
        let mut table = PageTable::new();
        table.record_fault(7, 3, 10);
        table.deactivate(7);

        table.record_fault(7, 5, 42);
        let entry = table.lookup(7).unwrap();
        assert!(entry.active);
        assert_eq!(entry.frame, 5);
        assert_eq!(entry.load_time, 42);
        assert_eq!(entry.last_ref, 42);
    }

    #[test]
    fn test_active_pages_scan_order() {
        let mut table = PageTable::new();
        table.record_fault(9, 0, 1);
        table.record_fault(2, 1, 2);
        table.record_fault(200, 2, 3);
        table.deactivate(9);

        let pages: Vec<u8> = table.active_pages().map(|(p, _)| p).collect();
        assert_eq!(pages, vec![2, 200]);
        assert_eq!(table.active_count(), 2);
    }
}
