use crate::address::VirtualAddress;
use crate::backing::BackingStore;
use crate::constants::*;
use crate::error::Result;
use crate::memory::PhysicalMemory;
use crate::page_table::PageTable;
use crate::replacement::Algorithm;
use crate::tlb::Tlb;

/// Counters accumulated over a run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub translated: u64,
    pub tlb_hits: u64,
    pub tlb_misses: u64,
    pub page_faults: u64,
}

impl Statistics {
    /// Page faults as a percentage of all translated references
    pub fn fault_rate(&self) -> f64 {
        if self.translated == 0 {
            return 0.0;
        }
        self.page_faults as f64 / self.translated as f64 * 100.0
    }

    /// TLB hits as a percentage of all translated references
    pub fn hit_rate(&self) -> f64 {
        if self.translated == 0 {
            return 0.0;
        }
        self.tlb_hits as f64 / self.translated as f64 * 100.0
    }
}

/// Result of resolving one reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub address: u16,
    pub value: i16,
    pub frame: u8,
    pub data: [u8; PAGE_SIZE],
    pub tlb_hit: bool,
    pub page_fault: bool,
}

/// Everything a finished run produces
pub struct SimulationReport {
    pub translations: Vec<Translation>,
    pub stats: Statistics,
}

/// Signed interpretation of a frame byte. The cutoff is 129, not the
/// two's-complement 127; values 0..=129 pass through unchanged.
pub fn signed_byte(raw: u8) -> i16 {
    if raw > SIGN_CUTOFF {
        raw as i16 - 256
    } else {
        raw as i16
    }
}

/// Drives one reference stream through the TLB, page table, and frame pool.
///
/// Owns the logical clock: it advances by exactly 1 per reference and is the
/// sole timestamp source for load/reference times. The full stream is held up
/// front so OPT can scan the suffix beyond the current reference.
pub struct Simulator {
    algorithm: Algorithm,
    memory: PhysicalMemory,
    table: PageTable,
    tlb: Tlb,
    backing: BackingStore,
    references: Vec<u16>,
    /// Page number of every reference, for the OPT lookahead
    pages: Vec<u8>,
    clock: u64,
    stats: Statistics,
}

impl Simulator {
    pub fn new(
        frame_count: usize,
        algorithm: Algorithm,
        backing: BackingStore,
        references: Vec<u16>,
    ) -> Result<Self> {
        let memory = PhysicalMemory::new(frame_count)?;
        let pages = references
            .iter()
            .map(|&addr| (addr >> PAGE_SHIFT) as u8)
            .collect();

        Ok(Simulator {
            algorithm,
            memory,
            table: PageTable::new(),
            tlb: Tlb::new(),
            backing,
            references,
            pages,
            clock: 0,
            stats: Statistics::default(),
        })
    }

    pub fn stats(&self) -> Statistics {
        self.stats
    }

    /// Process the whole reference stream in order
    pub fn run(mut self) -> Result<SimulationReport> {
        let mut translations = Vec::with_capacity(self.references.len());
        for index in 0..self.references.len() {
            translations.push(self.step(index)?);
        }
        Ok(SimulationReport {
            translations,
            stats: self.stats,
        })
    }

    /// Resolve the reference at `index`: TLB, then page table, then the fault
    /// path (backing-store fetch + allocate-or-evict).
    fn step(&mut self, index: usize) -> Result<Translation> {
        let va = VirtualAddress::from_raw(self.references[index]);
        let mut tlb_hit = false;
        let mut page_fault = false;

        let frame = match self.tlb.lookup(va.page) {
            Some(frame) => {
                tlb_hit = true;
                self.stats.tlb_hits += 1;
                // Translation bypassed the table, but the page was still
                // referenced
                self.table.record_hit(va.page, self.clock);
                frame
            }
            None => {
                self.stats.tlb_misses += 1;
                match self.table.active_frame(va.page) {
                    Some(frame) => {
                        self.table.record_hit(va.page, self.clock);
                        frame
                    }
                    None => {
                        page_fault = true;
                        self.stats.page_faults += 1;
                        let block = *self.backing.read(va.page);
                        let future = &self.pages[index + 1..];
                        let frame = self.memory.allocate_or_evict(
                            self.algorithm,
                            &mut self.table,
                            &mut self.tlb,
                            future,
                        )?;
                        self.memory.load(frame, &block);
                        self.table.record_fault(va.page, frame, self.clock);
                        frame
                    }
                }
            }
        };

        self.tlb.insert(va.page, frame);

        let data = *self.memory.frame_data(frame);
        let value = signed_byte(data[va.offset as usize]);

        self.stats.translated += 1;
        self.clock += 1;

        Ok(Translation {
            address: va.raw,
            value,
            frame,
            data,
            tlb_hit,
            page_fault,
        })
    }
}
