//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `sassy-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Discovery`: glob resolution
//!   - `SourceFiles`: reading and rewriting SCSS sources
//!   - `Compiler`: running the external compiler, once or in watch mode
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Compiler, Discovery, SourceFiles, WatchProcess};
