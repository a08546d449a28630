use std::path::PathBuf;

use thiserror::Error;

use crate::constants::{BACKING_STORE_SIZE, MAX_ADDRESS, MAX_FRAMES};

/// Result type alias for simulator operations
pub type Result<T> = std::result::Result<T, SimError>;

/// Every failure is fatal for the run; nothing is recovered internally and
/// no partial statistics are emitted.
#[derive(Error, Debug)]
pub enum SimError {
    /// Frame count outside [1, 256]. The CLI rejects this before the core
    /// runs; the constructor re-checks for library callers.
    #[error("frame count {0} is outside the valid range 1..={MAX_FRAMES}")]
    InvalidFrameCount(usize),

    /// Reference file could not be read
    #[error("failed to read reference file: {0}")]
    ReferenceFile(#[source] std::io::Error),

    /// A reference token that does not parse as an unsigned integer
    #[error("invalid reference '{0}': not an unsigned integer")]
    MalformedReference(String),

    /// A reference value that cannot be split into an 8+8-bit address
    #[error("reference {0} exceeds the 16-bit address space (max {MAX_ADDRESS})")]
    ReferenceOutOfRange(u32),

    /// The allocator found no victim while the frame pool was full
    #[error("no evictable page while the frame pool is full ({0} frames)")]
    FrameOverflow(usize),

    /// Backing store could not be opened or read
    #[error("failed to read backing store '{path}': {source}")]
    BackingStoreOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Backing store shorter than the full 16-bit address space
    #[error("backing store is {0} bytes, expected at least {BACKING_STORE_SIZE}")]
    BackingStoreTruncated(usize),

    /// Failed to write simulation output
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
