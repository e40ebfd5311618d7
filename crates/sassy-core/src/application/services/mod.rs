//! Application services - orchestrate use cases.
//!
//! Each service corresponds to one command: import the preamble, compile
//! once, or watch and recompile. All of them run discovery first and then
//! apply one operation per discovered path, collecting a [`BatchReport`].

pub mod batch;
pub mod compile_service;
pub mod import_service;
pub mod watch_service;

pub use batch::{BatchItem, BatchReport, BatchSummary};
pub use compile_service::CompileService;
pub use import_service::ImportService;
pub use watch_service::{WatchEnd, WatchService, WatchSession};
