pub mod address;
pub mod backing;
pub mod constants;
pub mod engine;
pub mod error;
pub mod io;
pub mod memory;
pub mod page_table;
pub mod replacement;
pub mod tlb;

// Re-export commonly used items for convenience
pub use address::VirtualAddress;
pub use backing::BackingStore;
pub use engine::{SimulationReport, Simulator, Statistics, Translation};
pub use error::{Result, SimError};
pub use replacement::Algorithm;
