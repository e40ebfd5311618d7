//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sassy-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{CompileOutput, CompileRequest, GlobPattern, PathKind};
use crate::error::SassyResult;

/// Port for resolving glob patterns to paths.
///
/// Implemented by:
/// - `sassy_adapters::discovery::GlobDiscovery` (production)
/// - `sassy_adapters::sources::MemorySources` (testing)
pub trait Discovery: Send + Sync {
    /// Resolve `pattern` against `root` at this moment, keeping only
    /// entries of `kind`. Paths come back sorted.
    ///
    /// An error means the pattern itself could not be resolved; an empty
    /// vector means it resolved to nothing.
    fn discover(
        &self,
        root: &Path,
        pattern: &GlobPattern,
        kind: PathKind,
    ) -> SassyResult<Vec<PathBuf>>;
}

/// Port for reading and rewriting style sources.
///
/// Implemented by:
/// - `sassy_adapters::sources::LocalSources` (production)
/// - `sassy_adapters::sources::MemorySources` (testing)
pub trait SourceFiles: Send + Sync {
    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> SassyResult<String>;

    /// Replace a file's content.
    fn write(&self, path: &Path, content: &str) -> SassyResult<()>;
}

/// Port for the external SCSS compiler.
///
/// Implemented by:
/// - `sassy_adapters::compiler::SassCompiler` (subprocess)
/// - `sassy_adapters::compiler::ScriptedCompiler` (testing)
pub trait Compiler: Send + Sync {
    /// Run one compilation to completion and capture its result.
    ///
    /// `Err` means the compiler could not be run at all; a compiler that
    /// ran and failed is an `Ok` output whose `success()` is false.
    fn compile(&self, request: &CompileRequest) -> SassyResult<CompileOutput>;

    /// Start a long-running watch compilation and hand back its handle.
    fn watch(&self, request: &CompileRequest) -> SassyResult<Box<dyn WatchProcess>>;
}

/// Owned handle to a running watch process.
///
/// Dropping the handle must terminate the process.
pub trait WatchProcess: Send {
    /// OS process id, if there is one.
    fn id(&self) -> Option<u32>;

    /// Non-blocking check: `Some` once the process has exited on its own.
    fn try_wait(&mut self) -> SassyResult<Option<CompileOutput>>;

    /// Terminate the process and wait for it to exit.
    fn stop(&mut self) -> SassyResult<CompileOutput>;
}
