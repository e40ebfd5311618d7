//! One compiler invocation: a source directory mapped to its output.
//!
//! The argument layout is the compiler's public CLI and must stay exactly
//! as written:
//!
//! ```text
//! sass [--watch] <src>:<out> --load-path=<path> --style=expanded --no-source-map
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{entities::layout::StyleLayout, value_objects::CompileMode};

pub const WATCH_FLAG: &str = "--watch";
pub const LOAD_PATH_FLAG: &str = "--load-path";
pub const STYLE_FLAG: &str = "--style=expanded";
pub const NO_SOURCE_MAP_FLAG: &str = "--no-source-map";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileRequest {
    program: String,
    mode: CompileMode,
    source_dir: PathBuf,
    output_dir: PathBuf,
    load_path: PathBuf,
}

impl CompileRequest {
    /// Build the request for `source_dir` under `layout`.
    pub fn new(layout: &StyleLayout, source_dir: impl Into<PathBuf>, mode: CompileMode) -> Self {
        let source_dir = source_dir.into();
        Self {
            program: layout.compiler().to_owned(),
            mode,
            output_dir: layout.output_dir_for(&source_dir),
            load_path: layout.resolved_load_path(),
            source_dir,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn mode(&self) -> CompileMode {
        self.mode
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn load_path(&self) -> &Path {
        &self.load_path
    }

    /// Arguments passed to the compiler, program name excluded.
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(5);
        if self.mode == CompileMode::Watch {
            args.push(WATCH_FLAG.to_owned());
        }
        args.push(format!(
            "{}:{}",
            self.source_dir.display(),
            self.output_dir.display()
        ));
        args.push(format!("{}={}", LOAD_PATH_FLAG, self.load_path.display()));
        args.push(STYLE_FLAG.to_owned());
        args.push(NO_SOURCE_MAP_FLAG.to_owned());
        args
    }

    /// Human-readable command line, for logs and dry runs. The process is
    /// always spawned from [`Self::args`], never through a shell.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in self.args() {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }
}

impl fmt::Display for CompileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Captured result of a finished compiler process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompileOutput {
    /// Exit code; `None` when the process was ended by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CompileOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for CompileOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => f.write_str("terminated by signal"),
        }
    }
}
