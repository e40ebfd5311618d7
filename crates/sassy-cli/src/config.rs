//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the validated
//! [`StyleLayout`] built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables: `SASSY_<SECTION>__<KEY>`, e.g.
//!    `SASSY_STYLES__COMPILER=/opt/sass/sass`
//! 2. Project file: `--config FILE` (required), else `<root>/sassy.toml`
//! 3. Global file: `<config dir>/sassy/config.toml`
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use sassy_core::domain::{
    DEFAULT_COMPILER, DEFAULT_CSS_DIR, DEFAULT_LOAD_PATH, DEFAULT_SCSS_DIRS, DEFAULT_SCSS_FILES,
    Preamble, StyleLayout,
};
use sassy_core::error::SassyResult;

/// File name of the per-project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "sassy.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where SCSS lives and how it is compiled.
    pub styles: StylesConfig,
    /// Output settings.
    pub output: OutputConfig,
}

/// The `[styles]` table; mirrors [`StyleLayout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylesConfig {
    pub scss_dirs: String,
    pub scss_files: String,
    pub css_dir: PathBuf,
    pub load_path: PathBuf,
    pub preamble: String,
    pub compiler: String,
}

impl Default for StylesConfig {
    fn default() -> Self {
        Self {
            scss_dirs: DEFAULT_SCSS_DIRS.into(),
            scss_files: DEFAULT_SCSS_FILES.into(),
            css_dir: DEFAULT_CSS_DIR.into(),
            load_path: DEFAULT_LOAD_PATH.into(),
            preamble: Preamble::DEFAULT.into(),
            compiler: DEFAULT_COMPILER.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration for the project at `root`.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it, `<root>/sassy.toml` is read if present.
    pub fn load(config_file: Option<&PathBuf>, root: &Path) -> anyhow::Result<Self> {
        Self::load_with_global(Self::config_path().as_deref(), config_file, root)
    }

    /// [`Self::load`] with an explicit global file; `None` skips that layer.
    pub fn load_with_global(
        global: Option<&Path>,
        config_file: Option<&PathBuf>,
        root: &Path,
    ) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode default config")?;

        let mut builder = Config::builder().add_source(defaults);

        if let Some(global) = global {
            builder = builder.add_source(
                File::from(global)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        builder = match config_file {
            Some(path) => builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(true),
            ),
            None => builder.add_source(
                File::from(Self::project_path(root).as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            ),
        };

        let config = builder
            .add_source(
                Environment::with_prefix("SASSY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Validate the `[styles]` table into a domain layout rooted at `root`.
    pub fn layout(&self, root: &Path) -> SassyResult<StyleLayout> {
        let styles = &self.styles;
        let layout = StyleLayout::builder()
            .root(root)
            .scss_dirs(styles.scss_dirs.as_str())
            .scss_files(styles.scss_files.as_str())
            .css_dir(styles.css_dir.as_path())
            .load_path(styles.load_path.as_path())
            .preamble(styles.preamble.as_str())
            .compiler(styles.compiler.as_str())
            .build()?;
        Ok(layout)
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness;
    /// `None` when no home directory can be determined.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "sassy", "sassy")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Path to the project configuration file under `root`.
    pub fn project_path(root: &Path) -> PathBuf {
        root.join(PROJECT_CONFIG_FILE)
    }

    /// Look up a dotted key such as `styles.css_dir`.
    pub fn get(&self, key: &str) -> Option<String> {
        let styles = &self.styles;
        let value = match key {
            "styles.scss_dirs" => styles.scss_dirs.clone(),
            "styles.scss_files" => styles.scss_files.clone(),
            "styles.css_dir" => styles.css_dir.display().to_string(),
            "styles.load_path" => styles.load_path.display().to_string(),
            "styles.preamble" => styles.preamble.clone(),
            "styles.compiler" => styles.compiler.clone(),
            "output.no_color" => self.output.no_color.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Every key understood by [`Self::get`].
    pub const KEYS: &'static [&'static str] = &[
        "styles.scss_dirs",
        "styles.scss_files",
        "styles.css_dir",
        "styles.load_path",
        "styles.preamble",
        "styles.compiler",
        "output.no_color",
    ];
}
