use std::fs;
use std::io::Write;
use std::path::Path;

use crate::constants::MAX_ADDRESS;
use crate::engine::{Statistics, Translation};
use crate::error::{Result, SimError};

/// Read the reference stream: decimal logical addresses, one per record.
///
/// Any token that is not an unsigned integer, or any value outside the 16-bit
/// address space, aborts the run; statistics over a partial stream would be
/// meaningless.
pub fn read_references<P: AsRef<Path>>(path: P) -> Result<Vec<u16>> {
    let content = fs::read_to_string(path.as_ref()).map_err(SimError::ReferenceFile)?;

    let mut references = Vec::new();
    for token in content.split_whitespace() {
        let value: u32 = token
            .parse()
            .map_err(|_| SimError::MalformedReference(token.to_string()))?;
        if value > MAX_ADDRESS {
            return Err(SimError::ReferenceOutOfRange(value));
        }
        references.push(value as u16);
    }
    Ok(references)
}

/// Write one per-reference record: address, signed byte value, frame number,
/// then the frame's 256 bytes as uppercase hex with no separators.
pub fn write_translation<W: Write>(out: &mut W, t: &Translation) -> Result<()> {
    write!(out, "{}, {}, {}, ", t.address, t.value, t.frame)?;
    for byte in t.data {
        write!(out, "{:02X}", byte)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Write the run summary: totals plus fault and hit rates as percentages
pub fn write_summary<W: Write>(out: &mut W, stats: &Statistics) -> Result<()> {
    writeln!(out, "Number of Translated Addresses = {}", stats.translated)?;
    writeln!(out, "Page Faults = {}", stats.page_faults)?;
    writeln!(out, "Page Fault Rate = {:.2}", stats.fault_rate())?;
    writeln!(out, "TLB Hits = {}", stats.tlb_hits)?;
    writeln!(out, "TLB Misses = {}", stats.tlb_misses)?;
    writeln!(out, "TLB Hit Rate = {:.2}", stats.hit_rate())?;
    Ok(())
}
