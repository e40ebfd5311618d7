//! Source file adapters.

mod local;
mod memory;

pub use local::LocalSources;
pub use memory::MemorySources;
