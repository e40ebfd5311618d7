//! Infrastructure adapters for Sassy.
//!
//! This crate implements the ports defined in `sassy-core::application::ports`.
//! It contains all filesystem access and process spawning.

pub mod compiler;
pub mod discovery;
pub mod sources;

// Re-export commonly used adapters
pub use compiler::{SassCompiler, Script, ScriptedCompiler};
pub use discovery::GlobDiscovery;
pub use sources::{LocalSources, MemorySources};
