//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not invalid
//! layout values. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while discovering, reading, writing or compiling.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The discovery pattern could not be resolved.
    #[error("Cannot resolve pattern '{pattern}': {reason}")]
    Discovery { pattern: String, reason: String },

    /// A source file could not be read.
    #[error("Failed to read {}: {reason}", .path.display())]
    ReadFailed { path: PathBuf, reason: String },

    /// A source file could not be written.
    #[error("Failed to write {}: {reason}", .path.display())]
    WriteFailed { path: PathBuf, reason: String },

    /// The compiler executable could not be started.
    #[error("Cannot run compiler '{program}': {reason}")]
    CompilerUnavailable { program: String, reason: String },

    /// The compiler ran and reported failure.
    #[error(
        "Compiler failed for {} ({}){}",
        .source_dir.display(),
        exit_label(.code),
        stderr_suffix(.stderr)
    )]
    CompilerFailed {
        source_dir: PathBuf,
        code: Option<i32>,
        stderr: String,
    },

    /// A watch process could not be polled or stopped.
    #[error("Watch process for {} failed: {reason}", .source_dir.display())]
    WatchFailed { source_dir: PathBuf, reason: String },

    /// Shared adapter state is unusable (lock poisoned).
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

fn exit_label(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_owned(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Discovery { pattern, .. } => vec![
                format!("Check the pattern: {}", pattern),
                "Patterns are resolved against --root (default: current directory)".into(),
            ],
            Self::ReadFailed { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that the file exists, is readable and is UTF-8 text".into(),
            ],
            Self::WriteFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::CompilerUnavailable { program, .. } => vec![
                format!("Ensure '{}' is installed and on your PATH", program),
                "Install Dart Sass: npm install -g sass".into(),
                "Or point 'styles.compiler' at the executable".into(),
            ],
            Self::CompilerFailed { source_dir, .. } => vec![
                format!("Fix the SCSS errors in {}", source_dir.display()),
                "Re-run with -vv to see the full compiler command".into(),
            ],
            Self::WatchFailed { .. } => vec!["Restart 'sassy watch'".into()],
            Self::LockPoisoned => vec!["This is likely a bug; try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Discovery { .. } => ErrorCategory::Configuration,
            Self::ReadFailed { .. } | Self::WriteFailed { .. } => ErrorCategory::Internal,
            Self::CompilerUnavailable { .. } => ErrorCategory::NotFound,
            Self::CompilerFailed { .. } | Self::WatchFailed { .. } => ErrorCategory::External,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
