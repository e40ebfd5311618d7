//! Error handling for the Sassy CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use sassy_core::application::BatchReport;
use sassy_core::error::SassyError;

// Re-export so callers only need `use crate::error::*`.
pub use sassy_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The config file to create already exists.
    #[error("Configuration file already exists at {}", .path.display())]
    ConfigExists { path: PathBuf },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `sassy-core` before any item was processed.
    #[error("{0}")]
    Core(#[from] SassyError),

    /// At least one file or directory in a batch failed.
    #[error("{operation} failed for {} of {total} path(s)", .failed.len())]
    BatchFailed {
        operation: &'static str,
        failed: Vec<(PathBuf, String)>,
        total: usize,
    },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The Ctrl+C handler could not be installed.
    #[error("Failed to install the Ctrl+C handler")]
    SignalHandler {
        #[source]
        source: ctrlc::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Turn a finished batch into `Err(BatchFailed)` if anything failed.
    pub fn check_batch<T>(report: &BatchReport<T>) -> CliResult<()> {
        if report.is_success() {
            return Ok(());
        }
        Err(Self::BatchFailed {
            operation: report.operation(),
            failed: report
                .failed()
                .iter()
                .map(|(path, err)| (path.clone(), err.to_string()))
                .collect(),
            total: report.total(),
        })
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check ./sassy.toml or the file passed with --config".into(),
                "Run 'sassy config path' to see which files are read".into(),
            ],

            Self::ConfigExists { path } => vec![
                format!("'{}' is already present", path.display()),
                "Use --force to overwrite it".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::BatchFailed { failed, .. } => {
                let mut suggestions = vec!["Failed paths:".to_owned()];
                for (path, reason) in failed {
                    suggestions.push(format!("  • {}: {}", path.display(), reason));
                }
                suggestions.push("Every other path was processed normally".into());
                suggestions
            }

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],

            Self::SignalHandler { .. } => vec![
                "Another Ctrl+C handler may already be registered".into(),
                "Stop watchers with 'kill' if they keep running".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::ConfigExists { .. } => ErrorCategory::UserError,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::Configuration,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::External => ErrorCategory::Internal,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::BatchFailed { .. } => ErrorCategory::Internal,
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::SignalHandler { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (invalid arguments, refusing to overwrite).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error, including invalid patterns and preambles.
    Configuration,
    /// Internal/system error, or a failed batch.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
///
/// Two concrete impls are provided:
/// - `Result<T, std::io::Error>` → `CliError::IoError`
/// - `Result<T, toml::ser::Error>` → `CliError::ConfigError`
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, toml::ser::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: format!("{}: {e}", f().into()),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sassy_core::application::ApplicationError;
    use sassy_core::domain::DomainError;
    use std::io;

    fn read_failure(path: &str) -> SassyError {
        ApplicationError::ReadFailed {
            path: path.into(),
            reason: "permission denied".into(),
        }
        .into()
    }

    // ── batches ───────────────────────────────────────────────────────────

    #[test]
    fn successful_batch_passes() {
        let mut report = BatchReport::<()>::new("import");
        report.push_success("a.scss".into(), ());
        assert!(CliError::check_batch(&report).is_ok());
    }

    #[test]
    fn failed_batch_lists_every_path() {
        let mut report = BatchReport::<()>::new("import");
        report.push_success("a.scss".into(), ());
        report.push_failure("b.scss".into(), read_failure("b.scss"));

        let err = CliError::check_batch(&report).unwrap_err();
        assert_eq!(err.to_string(), "import failed for 1 of 2 path(s)");
        assert_eq!(err.exit_code(), 1);
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("b.scss") && s.contains("permission denied"))
        );
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn invalid_layout_is_configuration_error() {
        let err = CliError::from(SassyError::from(DomainError::EmptyField {
            field: "scss_files",
        }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn discovery_failure_is_configuration_error() {
        let err = CliError::from(SassyError::from(ApplicationError::Discovery {
            pattern: "x".into(),
            reason: "bad".into(),
        }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_code_user_error() {
        let err = CliError::ConfigExists {
            path: PathBuf::from("sassy.toml"),
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::ConfigExists {
            path: PathBuf::from("/tmp/x"),
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::IoError {
            message: "writing sassy.toml".into(),
            source: io::Error::other("disk full"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: disk full"));
        assert!(!s.contains("--verbose"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
