use crate::constants::*;
use crate::error::{Result, SimError};
use crate::page_table::PageTable;
use crate::replacement::Algorithm;
use crate::tlb::Tlb;

/// Physical memory: a fixed pool of 256-byte frames plus the bump pointer
/// tracking how many have ever been handed out.
pub struct PhysicalMemory {
    frames: Vec<[u8; PAGE_SIZE]>,
    next_free: usize,
}

impl PhysicalMemory {
    /// Create a zeroed frame pool. The count is validated again here for
    /// library callers even though the CLI rejects bad values earlier.
    pub fn new(frame_count: usize) -> Result<Self> {
        if frame_count == 0 || frame_count > MAX_FRAMES {
            return Err(SimError::InvalidFrameCount(frame_count));
        }
        Ok(PhysicalMemory {
            frames: vec![[0u8; PAGE_SIZE]; frame_count],
            next_free: 0,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Obtain a frame for a faulting page.
    ///
    /// While unfilled frames remain this bumps `next_free`; afterwards the
    /// replacement algorithm picks a victim, whose page is deactivated in the
    /// page table and purged from the TLB before its frame is recycled. This
    /// is the only path by which frames are reused.
    pub fn allocate_or_evict(
        &mut self,
        algorithm: Algorithm,
        table: &mut PageTable,
        tlb: &mut Tlb,
        future: &[u8],
    ) -> Result<u8> {
        if self.next_free < self.frames.len() {
            let frame = self.next_free as u8;
            self.next_free += 1;
            return Ok(frame);
        }

        let victim = algorithm
            .select_victim(table, future)
            .ok_or(SimError::FrameOverflow(self.frames.len()))?;
        let frame = table
            .active_frame(victim)
            .ok_or(SimError::FrameOverflow(self.frames.len()))?;

        table.deactivate(victim);
        tlb.invalidate(victim);
        Ok(frame)
    }

    /// Overwrite a frame with a fetched backing-store block
    pub fn load(&mut self, frame: u8, block: &[u8; PAGE_SIZE]) {
        self.frames[frame as usize] = *block;
    }

    /// The 256 bytes currently held by a frame
    #[inline]
    pub fn frame_data(&self, frame: u8) -> &[u8; PAGE_SIZE] {
        &self.frames[frame as usize]
    }
}
