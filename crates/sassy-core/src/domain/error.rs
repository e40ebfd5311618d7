// ============================================================================
// domain/error.rs - LAYOUT VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (stored per item in batch reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Required field is empty: {field}")]
    EmptyField { field: &'static str },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid preamble {preamble:?}: {reason}")]
    InvalidPreamble { preamble: String, reason: String },

    #[error("'{field}' must be a relative path, got {path}")]
    AbsolutePathNotAllowed { field: &'static str, path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyField { field } => vec![
                format!("Set 'styles.{}' in sassy.toml", field),
                "Or remove the key to fall back to the built-in default".into(),
            ],
            Self::InvalidPattern { pattern, .. } => vec![
                format!("Pattern: {}", pattern),
                "Use '*' for one path segment, e.g. project/static/*/scss".into(),
                "Check for unbalanced '[' or ']'".into(),
            ],
            Self::InvalidPreamble { .. } => vec![
                "The preamble must be a single, non-empty line".into(),
                "Example: preamble = '@use \"sass\" as *;'".into(),
            ],
            Self::AbsolutePathNotAllowed { field, .. } => vec![
                format!("'styles.{}' is resolved against the project root", field),
                "Use a relative path such as ../styles".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyField { .. }
            | Self::InvalidPattern { .. }
            | Self::InvalidPreamble { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
