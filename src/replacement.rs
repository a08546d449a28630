use clap::ValueEnum;

use crate::page_table::{PageEntry, PageTable};

/// Page replacement algorithm governing RAM eviction.
///
/// Unrecognized names never reach victim selection: clap rejects them at the
/// CLI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    #[value(name = "FIFO")]
    Fifo,
    #[value(name = "LRU")]
    Lru,
    #[value(name = "OPT")]
    Opt,
}

impl Algorithm {
    /// Choose the active page to evict.
    ///
    /// `future` holds the page numbers of the references strictly after the
    /// current one; only OPT consults it. Returns None when the table has no
    /// active pages (an allocator invariant violation handled by the caller).
    pub fn select_victim(self, table: &PageTable, future: &[u8]) -> Option<u8> {
        match self {
            Algorithm::Fifo => oldest_by(table, |e| e.load_time),
            Algorithm::Lru => oldest_by(table, |e| e.last_ref),
            Algorithm::Opt => opt_victim(table, future),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Algorithm::Fifo => "FIFO",
            Algorithm::Lru => "LRU",
            Algorithm::Opt => "OPT",
        };
        f.write_str(name)
    }
}

/// Minimum-timestamp victim; ties broken by lowest page number via the
/// (timestamp, page) key and the table's ascending scan order.
fn oldest_by(table: &PageTable, key: impl Fn(&PageEntry) -> u64) -> Option<u8> {
    table
        .active_pages()
        .min_by_key(|&(page, entry)| (key(entry), page))
        .map(|(page, _)| page)
}

/// OPT: evict the first active page (in page-number scan order) that never
/// appears again in the remaining stream; failing that, the page whose next
/// occurrence is farthest in the future.
fn opt_victim(table: &PageTable, future: &[u8]) -> Option<u8> {
    let mut farthest: Option<(usize, u8)> = None;

    for (page, _) in table.active_pages() {
        match future.iter().position(|&p| p == page) {
            None => return Some(page),
            Some(next_use) => {
                if farthest.is_none_or(|(best, _)| next_use > best) {
                    farthest = Some((next_use, page));
                }
            }
        }
    }

    farthest.map(|(_, page)| page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(entries: &[(u8, u64, u64)]) -> PageTable {
        let mut table = PageTable::new();
        for (frame, &(page, load_time, last_ref)) in entries.iter().enumerate() {
            table.record_fault(page, frame as u8, load_time);
            table.record_hit(page, last_ref);
        }
        table
    }

    #[test]
    fn test_fifo_evicts_oldest_load() {
        // Page 4 loaded first even though it was referenced most recently
        let table = table_with(&[(4, 0, 9), (1, 1, 1), (9, 2, 2)]);
        assert_eq!(Algorithm::Fifo.select_victim(&table, &[]), Some(4));
    }

    #[test]
    fn test_fifo_tie_breaks_by_page_number() {
        let table = table_with(&[(9, 5, 5), (3, 5, 5)]);
        assert_eq!(Algorithm::Fifo.select_victim(&table, &[]), Some(3));
    }

    #[test]
    fn test_lru_evicts_least_recently_used() {
        // Page 1 was loaded after page 4 but touched longest ago
        let table = table_with(&[(4, 0, 9), (1, 1, 1), (9, 2, 2)]);
        assert_eq!(Algorithm::Lru.select_victim(&table, &[]), Some(1));
    }

    #[test]
    fn test_opt_prefers_never_referenced_again() {
        // Page 9 never recurs; pages 1 and 4 both do. Page 9 loses even
        // though it was loaded last.
        let table = table_with(&[(4, 0, 0), (1, 1, 1), (9, 2, 2)]);
        let future = [1, 4, 1];
        assert_eq!(Algorithm::Opt.select_victim(&table, &future), Some(9));
    }

    #[test]
    fn test_opt_never_again_takes_first_in_scan_order() {
        // Both 4 and 9 never recur; the lower page number is found first
        let table = table_with(&[(4, 0, 0), (1, 1, 1), (9, 2, 2)]);
        let future = [1, 1];
        assert_eq!(Algorithm::Opt.select_victim(&table, &future), Some(4));
    }

    #[test]
    fn test_opt_evicts_farthest_next_use() {
        let table = table_with(&[(4, 0, 0), (1, 1, 1), (9, 2, 2)]);
        // Next uses: 1 at index 0, 9 at index 1, 4 at index 3
        let future = [1, 9, 1, 4];
        assert_eq!(Algorithm::Opt.select_victim(&table, &future), Some(4));
    }

    #[test]
    fn test_empty_table_has_no_victim() {
        let table = PageTable::new();
        assert_eq!(Algorithm::Fifo.select_victim(&table, &[]), None);
        assert_eq!(Algorithm::Lru.select_victim(&table, &[]), None);
        assert_eq!(Algorithm::Opt.select_victim(&table, &[]), None);
    }
}
