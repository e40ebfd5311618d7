//! Unified error handling for Sassy Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Sassy Core operations.
///
/// Cloneable so the same failure can be stored in a [`BatchReport`] and
/// surfaced again in the final summary.
///
/// [`BatchReport`]: crate::application::BatchReport
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SassyError {
    /// Errors from the domain layer (invalid layout values).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (discovery, I/O, compiler).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl SassyError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    External,
    Internal,
}

/// Convenient result type alias.
pub type SassyResult<T> = Result<T, SassyError>;
