//! Where style sources live and how they are compiled.
//!
//! [`StyleLayout`] is the validated form of the `[styles]` configuration
//! section. The defaults reproduce the conventional project tree:
//!
//! ```text
//! project/
//! ├── sass/                 <- load path (shared modules)
//! └── static/
//!     └── <app>/
//!         ├── scss/*.scss   <- sources
//!         └── styles/       <- compiled CSS (../styles from scss/)
//! ```

use std::path::{Path, PathBuf};

use crate::domain::{
    common::{is_current_dir, join_normalized},
    error::DomainError,
    value_objects::{GlobPattern, Preamble},
};

/// Glob matching every SCSS source directory.
pub const DEFAULT_SCSS_DIRS: &str = "project/static/*/scss";

/// Glob matching every SCSS source file.
pub const DEFAULT_SCSS_FILES: &str = "project/static/*/scss/*.scss";

/// Output directory, relative to each SCSS directory.
pub const DEFAULT_CSS_DIR: &str = "../styles";

/// Directory holding the shared `sass` module (`--load-path`).
pub const DEFAULT_LOAD_PATH: &str = "project/sass";

/// Compiler executable looked up on `PATH`.
pub const DEFAULT_COMPILER: &str = "sass";

/// Validated style layout of one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleLayout {
    root: PathBuf,
    scss_dirs: GlobPattern,
    scss_files: GlobPattern,
    css_dir: PathBuf,
    load_path: PathBuf,
    preamble: Preamble,
    compiler: String,
}

impl StyleLayout {
    pub fn builder() -> StyleLayoutBuilder {
        StyleLayoutBuilder::new()
    }

    /// Project root that patterns and the load path are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn scss_dirs(&self) -> &GlobPattern {
        &self.scss_dirs
    }

    pub fn scss_files(&self) -> &GlobPattern {
        &self.scss_files
    }

    pub fn css_dir(&self) -> &Path {
        &self.css_dir
    }

    pub fn load_path(&self) -> &Path {
        &self.load_path
    }

    pub fn preamble(&self) -> &Preamble {
        &self.preamble
    }

    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    /// Output directory paired with `source_dir`.
    pub fn output_dir_for(&self, source_dir: &Path) -> PathBuf {
        join_normalized(source_dir, &self.css_dir)
    }

    /// Load path as handed to the compiler.
    pub fn resolved_load_path(&self) -> PathBuf {
        self.resolve(&self.load_path)
    }

    /// Resolve a project-relative path against the root. A root of `.`
    /// leaves the path untouched so command lines stay short.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        if is_current_dir(&self.root) {
            relative.to_path_buf()
        } else {
            self.root.join(relative)
        }
    }
}

impl Default for StyleLayout {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            scss_dirs: GlobPattern(DEFAULT_SCSS_DIRS.into()),
            scss_files: GlobPattern(DEFAULT_SCSS_FILES.into()),
            css_dir: PathBuf::from(DEFAULT_CSS_DIR),
            load_path: PathBuf::from(DEFAULT_LOAD_PATH),
            preamble: Preamble::default(),
            compiler: DEFAULT_COMPILER.into(),
        }
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

/// Builder for [`StyleLayout`]. Unset fields fall back to the defaults.
#[derive(Debug, Default, Clone)]
pub struct StyleLayoutBuilder {
    root: Option<PathBuf>,
    scss_dirs: Option<String>,
    scss_files: Option<String>,
    css_dir: Option<PathBuf>,
    load_path: Option<PathBuf>,
    preamble: Option<String>,
    compiler: Option<String>,
}

impl StyleLayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn scss_dirs(mut self, pattern: impl Into<String>) -> Self {
        self.scss_dirs = Some(pattern.into());
        self
    }

    pub fn scss_files(mut self, pattern: impl Into<String>) -> Self {
        self.scss_files = Some(pattern.into());
        self
    }

    pub fn css_dir(mut self, offset: impl Into<PathBuf>) -> Self {
        self.css_dir = Some(offset.into());
        self
    }

    pub fn load_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.load_path = Some(path.into());
        self
    }

    pub fn preamble(mut self, line: impl Into<String>) -> Self {
        self.preamble = Some(line.into());
        self
    }

    pub fn compiler(mut self, program: impl Into<String>) -> Self {
        self.compiler = Some(program.into());
        self
    }

    /// Validate every field and build the layout.
    pub fn build(self) -> Result<StyleLayout, DomainError> {
        let scss_dirs = GlobPattern::new(
            "scss_dirs",
            self.scss_dirs.unwrap_or_else(|| DEFAULT_SCSS_DIRS.into()),
        )?;
        let scss_files = GlobPattern::new(
            "scss_files",
            self.scss_files.unwrap_or_else(|| DEFAULT_SCSS_FILES.into()),
        )?;

        let css_dir = self.css_dir.unwrap_or_else(|| DEFAULT_CSS_DIR.into());
        if css_dir.as_os_str().is_empty() {
            return Err(DomainError::EmptyField { field: "css_dir" });
        }
        if css_dir.is_absolute() || css_dir.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed {
                field: "css_dir",
                path: css_dir.display().to_string(),
            });
        }

        let load_path = self.load_path.unwrap_or_else(|| DEFAULT_LOAD_PATH.into());
        if load_path.as_os_str().is_empty() {
            return Err(DomainError::EmptyField { field: "load_path" });
        }

        let preamble = match self.preamble {
            Some(line) => Preamble::new(line)?,
            None => Preamble::default(),
        };

        let compiler = self.compiler.unwrap_or_else(|| DEFAULT_COMPILER.into());
        if compiler.trim().is_empty() {
            return Err(DomainError::EmptyField { field: "compiler" });
        }

        Ok(StyleLayout {
            root: self.root.unwrap_or_else(|| PathBuf::from(".")),
            scss_dirs,
            scss_files,
            css_dir,
            load_path,
            preamble,
            compiler,
        })
    }
}
