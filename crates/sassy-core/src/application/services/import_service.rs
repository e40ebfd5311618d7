//! Import Service - keeps the preamble at the top of every SCSS file.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        BatchReport,
        ports::{Discovery, SourceFiles},
    },
    domain::{PathKind, Preamble, PreambleOutcome, StyleLayout},
    error::SassyResult,
};

/// Service inserting the layout's preamble into discovered source files.
pub struct ImportService {
    discovery: Box<dyn Discovery>,
    sources: Box<dyn SourceFiles>,
}

impl ImportService {
    pub fn new(discovery: Box<dyn Discovery>, sources: Box<dyn SourceFiles>) -> Self {
        Self { discovery, sources }
    }

    /// Every SCSS file matched by the layout's file pattern.
    pub fn discover(&self, layout: &StyleLayout) -> SassyResult<Vec<PathBuf>> {
        let found = self
            .discovery
            .discover(layout.root(), layout.scss_files(), PathKind::File)?;
        if found.is_empty() {
            warn!(pattern = %layout.scss_files(), "No files match the pattern");
        }
        Ok(found)
    }

    /// Ensure a single file starts with `preamble`.
    ///
    /// Nothing is written when the preamble is already present.
    pub fn import_file(&self, preamble: &Preamble, path: &Path) -> SassyResult<PreambleOutcome> {
        let content = self.sources.read_to_string(path)?;
        match preamble.apply(&content) {
            None => Ok(PreambleOutcome::AlreadyPresent),
            Some(updated) => {
                self.sources.write(path, &updated)?;
                Ok(PreambleOutcome::Inserted)
            }
        }
    }

    /// Like [`Self::import_file`] but never writes.
    pub fn preview_file(&self, preamble: &Preamble, path: &Path) -> SassyResult<PreambleOutcome> {
        let content = self.sources.read_to_string(path)?;
        Ok(if preamble.is_present(&content) {
            PreambleOutcome::AlreadyPresent
        } else {
            PreambleOutcome::Inserted
        })
    }

    /// Insert the preamble into every discovered file.
    ///
    /// Only a discovery failure is returned as `Err`; per-file failures
    /// are recorded in the report and the remaining files are still
    /// processed.
    #[instrument(skip_all, fields(pattern = %layout.scss_files()))]
    pub fn import_all(&self, layout: &StyleLayout) -> SassyResult<BatchReport<PreambleOutcome>> {
        self.run(layout, true)
    }

    /// Dry run of [`Self::import_all`].
    #[instrument(skip_all, fields(pattern = %layout.scss_files()))]
    pub fn preview_all(&self, layout: &StyleLayout) -> SassyResult<BatchReport<PreambleOutcome>> {
        self.run(layout, false)
    }

    fn run(&self, layout: &StyleLayout, write: bool) -> SassyResult<BatchReport<PreambleOutcome>> {
        let files = self.discover(layout)?;
        debug!(count = files.len(), "Source files discovered");

        let mut report = BatchReport::new("import");
        for path in files {
            let result = if write {
                self.import_file(layout.preamble(), &path)
            } else {
                self.preview_file(layout.preamble(), &path)
            };
            match &result {
                Ok(outcome) => info!(path = %path.display(), %outcome, "Preamble checked"),
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping file"),
            }
            report.record(path, result);
        }

        info!(
            total = report.total(),
            failed = report.failed().len(),
            "Import finished"
        );
        Ok(report)
    }
}
