//! Application layer for Sassy.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ImportService, CompileService, WatchService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer; the preamble rule
//! and the compiler argument layout live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    BatchItem, BatchReport, BatchSummary, CompileService, ImportService, WatchEnd, WatchService,
    WatchSession,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Compiler, Discovery, SourceFiles, WatchProcess};

pub use error::ApplicationError;
