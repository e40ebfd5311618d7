//! Domain value objects: Preamble, GlobPattern, CompileMode, PathKind.
//!
//! These are pure value types with equality-by-value and no identity.
//! Constructors validate; once built a value is always usable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── Preamble ─────────────────────────────────────────────────────────────────

/// The literal line placed at the top of every SCSS source file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Preamble(String);

impl Preamble {
    /// Default preamble: pulls the shared `sass` module into scope.
    pub const DEFAULT: &'static str = "@use \"sass\" as *;";

    /// Validate and wrap a preamble line.
    ///
    /// The line must be non-empty and must not contain a line break; the
    /// presence check below relies on the preamble being one whole line.
    pub fn new(line: impl Into<String>) -> Result<Self, DomainError> {
        let line = line.into();
        if line.is_empty() {
            return Err(DomainError::InvalidPreamble {
                preamble: line,
                reason: "must not be empty".into(),
            });
        }
        if line.contains(['\n', '\r']) {
            return Err(DomainError::InvalidPreamble {
                preamble: line,
                reason: "must be a single line".into(),
            });
        }
        Ok(Self(line))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when `content` already opens with the preamble as a complete
    /// first line: the exact text followed by `\n` or by end of input.
    ///
    /// Any other trailing characters (a space, `\r`, more code) do not
    /// count.
    pub fn is_present(&self, content: &str) -> bool {
        match content.strip_prefix(self.0.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('\n'),
            None => false,
        }
    }

    /// New file content with the preamble inserted, or `None` if it is
    /// already there.
    ///
    /// Applying the result again always returns `None`.
    pub fn apply(&self, content: &str) -> Option<String> {
        if self.is_present(content) {
            return None;
        }
        let mut out = String::with_capacity(self.0.len() + 1 + content.len());
        out.push_str(&self.0);
        out.push('\n');
        out.push_str(content);
        Some(out)
    }
}

impl Default for Preamble {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for Preamble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What happened to one file during an import pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreambleOutcome {
    /// The preamble was prepended (or would be, on a dry run).
    Inserted,
    /// The file already started with the preamble; nothing was written.
    AlreadyPresent,
}

impl fmt::Display for PreambleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inserted => f.write_str("inserted"),
            Self::AlreadyPresent => f.write_str("already present"),
        }
    }
}

// ── GlobPattern ──────────────────────────────────────────────────────────────

/// A glob-style path pattern such as `project/static/*/scss`.
///
/// Only emptiness is checked here; syntax is checked by the discovery
/// adapter when the pattern is compiled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlobPattern(pub(crate) String);

impl GlobPattern {
    pub fn new(field: &'static str, pattern: impl Into<String>) -> Result<Self, DomainError> {
        let pattern = pattern.into();
        if pattern.trim().is_empty() {
            return Err(DomainError::EmptyField { field });
        }
        Ok(Self(pattern))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── PathKind ─────────────────────────────────────────────────────────────────

/// Which kind of filesystem entry a discovery pass should keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    Directory,
    File,
    Any,
}

impl PathKind {
    pub fn accepts(self, is_dir: bool, is_file: bool) -> bool {
        match self {
            Self::Directory => is_dir,
            Self::File => is_file,
            Self::Any => is_dir || is_file,
        }
    }
}

// ── CompileMode ──────────────────────────────────────────────────────────────

/// One-shot compilation or continuous recompilation on change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompileMode {
    Once,
    Watch,
}

impl fmt::Display for CompileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Once => f.write_str("once"),
            Self::Watch => f.write_str("watch"),
        }
    }
}
