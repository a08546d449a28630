pub const PAGE_BITS: u32 = 8;
pub const OFFSET_BITS: u32 = 8;

pub const PAGE_SIZE: usize = 1 << OFFSET_BITS;
pub const NUM_PAGES: usize = 1 << PAGE_BITS;
pub const MAX_FRAMES: usize = NUM_PAGES;

pub const OFFSET_MASK: u16 = (PAGE_SIZE - 1) as u16;
pub const PAGE_SHIFT: u32 = OFFSET_BITS;

pub const TLB_SIZE: usize = 16;

pub const BACKING_STORE_SIZE: usize = NUM_PAGES * PAGE_SIZE;
pub const MAX_ADDRESS: u32 = (BACKING_STORE_SIZE - 1) as u32;

/// Raw bytes above this value are reported as negative (`raw - 256`).
/// The reference output uses 129, not the two's-complement 127.
pub const SIGN_CUTOFF: u8 = 129;
