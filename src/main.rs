//! memsim - Main Entry Point
//!
//! Simulates 16-bit virtual-to-physical address translation over a reference
//! stream: a 16-entry TLB, a 256-entry page table, and a demand-paged frame
//! pool fed from a backing-store image, with FIFO/LRU/OPT eviction.

use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use memsim::io::{read_references, write_summary, write_translation};
use memsim::{Algorithm, BackingStore, Result, SimError, Simulator};

/// Virtual memory mini simulator
#[derive(Parser)]
#[command(name = "memsim", version, about)]
struct Cli {
    /// File containing the list of logical memory addresses
    reference_file: PathBuf,

    /// Number of frames of the physical address space
    #[arg(default_value_t = 256, value_parser = clap::value_parser!(u16).range(1..=256))]
    frames: u16,

    /// Page replacement algorithm
    #[arg(default_value = "FIFO", value_enum)]
    pra: Algorithm,

    /// Backing store image
    #[arg(short, long, default_value = "BACKING_STORE.bin")]
    backing_store: PathBuf,

    /// Print configuration and summary detail to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main logic separated from main() for cleaner error handling
fn run(cli: &Cli) -> Result<()> {
    let references = read_references(&cli.reference_file)?;
    let backing = BackingStore::open(&cli.backing_store)?;

    if cli.verbose {
        eprintln!("=== memsim ===");
        eprintln!("Reference file: {}", cli.reference_file.display());
        eprintln!("Backing store:  {}", cli.backing_store.display());
        eprintln!("Frames:         {}", cli.frames);
        eprintln!("Algorithm:      {}", cli.pra);
        eprintln!("References:     {}", references.len());
        eprintln!();
    }

    let simulator = Simulator::new(cli.frames as usize, cli.pra, backing, references)?;
    let report = simulator.run()?;

    let stdout = std::io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    for translation in &report.translations {
        write_translation(&mut out, translation)?;
    }
    write_summary(&mut out, &report.stats)?;
    out.flush().map_err(SimError::Output)?;

    if cli.verbose {
        eprintln!();
        eprintln!("=== Summary ===");
        eprintln!("Page faults: {}", report.stats.page_faults);
        eprintln!("TLB hits:    {}", report.stats.tlb_hits);
        eprintln!("TLB misses:  {}", report.stats.tlb_misses);
    }

    Ok(())
}
