//! Watch Service - long-running recompilation of every SCSS directory.
//!
//! [`WatchService::start`] returns immediately with a [`WatchSession`]
//! that owns every spawned process. The caller decides how long to keep
//! it alive; [`WatchSession::stop`] (or dropping the session) terminates
//! all children.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, BatchReport,
        ports::{Compiler, Discovery, WatchProcess},
    },
    domain::{CompileMode, CompileOutput, CompileRequest, PathKind, StyleLayout},
    error::SassyResult,
};

pub struct WatchService {
    discovery: Box<dyn Discovery>,
    compiler: Box<dyn Compiler>,
}

impl WatchService {
    pub fn new(discovery: Box<dyn Discovery>, compiler: Box<dyn Compiler>) -> Self {
        Self {
            discovery,
            compiler,
        }
    }

    pub fn discover(&self, layout: &StyleLayout) -> SassyResult<Vec<PathBuf>> {
        let found = self
            .discovery
            .discover(layout.root(), layout.scss_dirs(), PathKind::Directory)?;
        if found.is_empty() {
            warn!(pattern = %layout.scss_dirs(), "No directories match the pattern");
        }
        Ok(found)
    }

    /// Spawn one watch process per discovered directory.
    ///
    /// Only a discovery failure is returned as `Err`. A directory whose
    /// process cannot be started is recorded in the session and the rest
    /// keep going.
    #[instrument(skip_all, fields(pattern = %layout.scss_dirs()))]
    pub fn start(&self, layout: &StyleLayout) -> SassyResult<WatchSession> {
        let dirs = self.discover(layout)?;
        debug!(count = dirs.len(), "Source directories discovered");

        let mut session = WatchSession::new();
        for dir in dirs {
            let request = CompileRequest::new(layout, &dir, CompileMode::Watch);
            debug!(command = %request.command_line(), "Spawning watcher");

            match self.compiler.watch(&request) {
                Ok(process) => {
                    info!(source = %dir.display(), pid = ?process.id(), "Watching");
                    session.running.push(RunningWatch {
                        source_dir: dir,
                        process,
                    });
                }
                Err(e) => {
                    warn!(source = %dir.display(), error = %e, "Cannot start watcher");
                    session.report.push_failure(dir, e);
                }
            }
        }
        Ok(session)
    }
}

/// How a watch process ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEnd {
    /// Terminated by [`WatchSession::stop`].
    Stopped,
    /// Exited on its own with a zero status.
    Exited(CompileOutput),
}

impl fmt::Display for WatchEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stopped => f.write_str("stopped"),
            Self::Exited(output) => write!(f, "exited ({output})"),
        }
    }
}

struct RunningWatch {
    source_dir: PathBuf,
    process: Box<dyn WatchProcess>,
}

/// Every watch process started by one [`WatchService::start`] call.
pub struct WatchSession {
    running: Vec<RunningWatch>,
    report: BatchReport<WatchEnd>,
}

impl WatchSession {
    fn new() -> Self {
        Self {
            running: Vec::new(),
            report: BatchReport::new("watch"),
        }
    }

    /// Source directories whose process is still running.
    pub fn running(&self) -> Vec<&Path> {
        self.running.iter().map(|w| w.source_dir.as_path()).collect()
    }

    pub fn running_count(&self) -> usize {
        self.running.len()
    }

    /// Results so far: start failures and processes that already ended.
    pub fn report(&self) -> &BatchReport<WatchEnd> {
        &self.report
    }

    /// Reap processes that exited on their own.
    ///
    /// Returns the directories that ended during this call. A non-zero
    /// exit is recorded as a failure.
    pub fn poll(&mut self) -> Vec<PathBuf> {
        self.poll_or_stop(|| false)
    }

    /// Like [`poll`](Self::poll), but a non-zero exit seen while
    /// `stopping()` returns `true` is recorded as [`WatchEnd::Stopped`].
    ///
    /// `stopping` is checked after each exit is observed, so a child killed
    /// by the same interrupt that sets the flag is not reported as failed.
    pub fn poll_or_stop(&mut self, stopping: impl Fn() -> bool) -> Vec<PathBuf> {
        let mut ended = Vec::new();
        let mut index = 0;

        while index < self.running.len() {
            let watch = &mut self.running[index];
            let status = watch.process.try_wait();
            match status {
                Ok(None) => {
                    index += 1;
                    continue;
                }
                Ok(Some(output)) => {
                    let watch = self.running.swap_remove(index);
                    if !output.success() && stopping() {
                        info!(source = %watch.source_dir.display(), "Watcher stopped");
                        self.report
                            .push_success(watch.source_dir.clone(), WatchEnd::Stopped);
                    } else if output.success() {
                        info!(source = %watch.source_dir.display(), "Watcher exited");
                        self.report
                            .push_success(watch.source_dir.clone(), WatchEnd::Exited(output));
                    } else {
                        warn!(source = %watch.source_dir.display(), %output, "Watcher exited");
                        let err = ApplicationError::CompilerFailed {
                            source_dir: watch.source_dir.clone(),
                            code: output.code,
                            stderr: output.stderr,
                        };
                        self.report.push_failure(watch.source_dir.clone(), err.into());
                    }
                    ended.push(watch.source_dir);
                }
                Err(e) => {
                    let watch = self.running.swap_remove(index);
                    warn!(source = %watch.source_dir.display(), error = %e, "Lost watcher");
                    self.report.push_failure(watch.source_dir.clone(), e);
                    ended.push(watch.source_dir);
                }
            }
        }
        ended
    }

    /// Terminate every running process, wait for each, and return the
    /// complete report.
    ///
    /// A process still tracked here counts as stopped even if it ended
    /// just before (e.g. on the same Ctrl+C that triggered the stop).
    pub fn stop(mut self) -> BatchReport<WatchEnd> {
        for mut watch in self.running.drain(..) {
            let result = watch.process.stop().map(|_| WatchEnd::Stopped);
            match &result {
                Ok(_) => info!(source = %watch.source_dir.display(), "Watcher stopped"),
                Err(e) => warn!(source = %watch.source_dir.display(), error = %e, "Stop failed"),
            }
            self.report.record(watch.source_dir, result);
        }
        self.report
    }
}
