//! Per-item results of a batch run.
//!
//! Every discovered path gets exactly one entry, success or failure. A
//! failure on one path never stops the others; the caller decides what
//! the aggregate means (the CLI exits non-zero on any failure).

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{SassyError, SassyResult};

/// Results of applying one operation to a set of paths.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport<T> {
    operation: &'static str,
    succeeded: Vec<(PathBuf, T)>,
    failed: Vec<(PathBuf, SassyError)>,
}

impl<T> BatchReport<T> {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            succeeded: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// Record the result for `path`.
    pub fn record(&mut self, path: PathBuf, result: SassyResult<T>) {
        match result {
            Ok(value) => self.succeeded.push((path, value)),
            Err(err) => self.failed.push((path, err)),
        }
    }

    pub fn push_failure(&mut self, path: PathBuf, err: SassyError) {
        self.failed.push((path, err));
    }

    pub fn push_success(&mut self, path: PathBuf, value: T) {
        self.succeeded.push((path, value));
    }

    /// Short name of the operation ("import", "build", "watch").
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn succeeded(&self) -> &[(PathBuf, T)] {
        &self.succeeded
    }

    pub fn failed(&self) -> &[(PathBuf, SassyError)] {
        &self.failed
    }

    pub fn failed_paths(&self) -> Vec<&Path> {
        self.failed.iter().map(|(p, _)| p.as_path()).collect()
    }

    /// The result recorded for `path`, if any.
    pub fn outcome(&self, path: &Path) -> Option<Result<&T, &SassyError>> {
        if let Some((_, value)) = self.succeeded.iter().find(|(p, _)| p == path) {
            return Some(Ok(value));
        }
        self.failed
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, err)| Err(err))
    }

    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// `true` when no path failed (an empty batch is a success).
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Transform every success value, keeping failures as they are.
    pub fn map<U>(self, mut f: impl FnMut(&Path, T) -> U) -> BatchReport<U> {
        BatchReport {
            operation: self.operation,
            succeeded: self
                .succeeded
                .into_iter()
                .map(|(path, value)| {
                    let mapped = f(&path, value);
                    (path, mapped)
                })
                .collect(),
            failed: self.failed,
        }
    }
}

impl<T: fmt::Display> BatchReport<T> {
    /// Flatten into a serialisable summary.
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            operation: self.operation,
            total: self.total(),
            succeeded: self
                .succeeded
                .iter()
                .map(|(path, value)| BatchItem::new(path, value.to_string()))
                .collect(),
            failed: self
                .failed
                .iter()
                .map(|(path, err)| BatchItem::new(path, err.to_string()))
                .collect(),
        }
    }
}

/// Serialisable view of a [`BatchReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub operation: &'static str,
    pub total: usize,
    pub succeeded: Vec<BatchItem>,
    pub failed: Vec<BatchItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchItem {
    pub path: String,
    pub detail: String,
}

impl BatchItem {
    fn new(path: &Path, detail: String) -> Self {
        Self {
            path: path.display().to_string(),
            detail,
        }
    }
}
