//! Sassy Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sassy
//! SCSS build helper, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            sassy-cli (CLI)              │
//! │       build / import / watch            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ImportService, CompileService,         │
//! │  WatchService)                          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Discovery, SourceFiles, Compiler)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     sassy-adapters (Infrastructure)     │
//! │  (GlobDiscovery, LocalSources,          │
//! │   SassCompiler, ...)                    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (StyleLayout, Preamble, CompileRequest) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sassy_core::{application::ImportService, domain::StyleLayout};
//!
//! let layout = StyleLayout::builder().root("./site").build().unwrap();
//!
//! // Adapters come from `sassy-adapters`.
//! let service = ImportService::new(discovery, sources);
//! let report = service.import_all(&layout).unwrap();
//! assert!(report.is_success());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BatchReport, BatchSummary, CompileService, ImportService, WatchEnd, WatchService,
        WatchSession,
        ports::{Compiler, Discovery, SourceFiles, WatchProcess},
    };
    pub use crate::domain::{
        CompileMode, CompileOutput, CompileRequest, GlobPattern, PathKind, Preamble,
        PreambleOutcome, StyleLayout, StyleLayoutBuilder,
    };
    pub use crate::error::{SassyError, SassyResult};
}
