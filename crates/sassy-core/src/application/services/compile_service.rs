//! Compile Service - one-shot compilation of every SCSS directory.
//!
//! 1. Discover source directories
//! 2. Build one [`CompileRequest`] per directory
//! 3. Run the compiler and wait for each exit status

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, BatchReport,
        ports::{Compiler, Discovery},
    },
    domain::{CompileMode, CompileOutput, CompileRequest, PathKind, StyleLayout},
    error::SassyResult,
};

pub struct CompileService {
    discovery: Box<dyn Discovery>,
    compiler: Box<dyn Compiler>,
}

impl CompileService {
    pub fn new(discovery: Box<dyn Discovery>, compiler: Box<dyn Compiler>) -> Self {
        Self {
            discovery,
            compiler,
        }
    }

    /// Every SCSS directory matched by the layout's directory pattern.
    pub fn discover(&self, layout: &StyleLayout) -> SassyResult<Vec<PathBuf>> {
        let found = self
            .discovery
            .discover(layout.root(), layout.scss_dirs(), PathKind::Directory)?;
        if found.is_empty() {
            warn!(pattern = %layout.scss_dirs(), "No directories match the pattern");
        }
        Ok(found)
    }

    /// The requests a run in `mode` would issue, without running anything.
    pub fn plan(&self, layout: &StyleLayout, mode: CompileMode) -> SassyResult<Vec<CompileRequest>> {
        Ok(self
            .discover(layout)?
            .into_iter()
            .map(|dir| CompileRequest::new(layout, dir, mode))
            .collect())
    }

    /// Compile one directory and wait for the result.
    ///
    /// A non-zero exit becomes [`ApplicationError::CompilerFailed`].
    pub fn compile_dir(&self, layout: &StyleLayout, source_dir: &Path) -> SassyResult<CompileOutput> {
        let request = CompileRequest::new(layout, source_dir, CompileMode::Once);
        debug!(command = %request.command_line(), "Running compiler");

        let output = self.compiler.compile(&request)?;
        if !output.success() {
            return Err(ApplicationError::CompilerFailed {
                source_dir: source_dir.to_path_buf(),
                code: output.code,
                stderr: output.stderr,
            }
            .into());
        }
        Ok(output)
    }

    /// Compile every discovered directory once.
    ///
    /// Only a discovery failure is returned as `Err`; compiler failures are
    /// recorded per directory.
    #[instrument(skip_all, fields(pattern = %layout.scss_dirs()))]
    pub fn compile_all(&self, layout: &StyleLayout) -> SassyResult<BatchReport<CompileOutput>> {
        let dirs = self.discover(layout)?;
        debug!(count = dirs.len(), "Source directories discovered");

        let mut report = BatchReport::new("build");
        for dir in dirs {
            let result = self.compile_dir(layout, &dir);
            match &result {
                Ok(_) => info!(
                    source = %dir.display(),
                    output = %layout.output_dir_for(&dir).display(),
                    "Compiled"
                ),
                Err(e) => warn!(source = %dir.display(), error = %e, "Compilation failed"),
            }
            report.record(dir, result);
        }

        info!(
            total = report.total(),
            failed = report.failed().len(),
            "Build finished"
        );
        Ok(report)
    }
}
