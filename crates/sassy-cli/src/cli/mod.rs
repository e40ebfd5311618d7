//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sassy",
    bin_name = "sassy",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "SCSS build helper: compile, watch and import",
    long_about = "Sassy discovers SCSS directories and files by glob pattern, \
                  runs the Sass compiler over them once or in watch mode, and \
                  inserts a shared @use preamble into every SCSS file.",
    after_help = "EXAMPLES:\n\
        \x20 sassy build\n\
        \x20 sassy import --dry-run\n\
        \x20 sassy watch -v\n\
        \x20 sassy -C ../site build\n\
        \x20 sassy completions bash > /usr/share/bash-completion/completions/sassy",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compile every SCSS directory once.
    #[command(
        visible_alias = "b",
        about = "Compile every SCSS directory once",
        after_help = "EXAMPLES:\n\
            \x20 sassy build\n\
            \x20 sassy build --dry-run\n\
            \x20 SASSY_STYLES__COMPILER=/opt/dart-sass/sass sassy build"
    )]
    Build(BuildArgs),

    /// Insert the preamble into every SCSS file that lacks it.
    #[command(
        about = "Insert the @use preamble into SCSS files",
        after_help = "EXAMPLES:\n\
            \x20 sassy import\n\
            \x20 sassy import --dry-run"
    )]
    Import(ImportArgs),

    /// Watch every SCSS directory and recompile on change.
    #[command(
        visible_alias = "w",
        about = "Watch and recompile until Ctrl+C",
        after_help = "EXAMPLES:\n\
            \x20 sassy watch\n\
            \x20 sassy -C project watch"
    )]
    Watch(WatchArgs),

    /// Write a default project configuration file.
    #[command(
        about = "Write a default sassy.toml",
        after_help = "EXAMPLES:\n\
            \x20 sassy init            # ./sassy.toml\n\
            \x20 sassy -C site init    # site/sassy.toml\n\
            \x20 sassy init --global   # user configuration"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sassy completions bash > ~/.local/share/bash-completion/completions/sassy\n\
            \x20 sassy completions zsh  > ~/.zfunc/_sassy\n\
            \x20 sassy completions fish > ~/.config/fish/completions/sassy.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sassy config get styles.css_dir\n\
            \x20 sassy config list\n\
            \x20 sassy config path"
    )]
    Config(ConfigCommands),
}

// ── build ─────────────────────────────────────────────────────────────────────

/// Arguments for `sassy build`.
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Print the compiler invocations without running them.
    #[arg(long = "dry-run", help = "Show compiler command lines without running them")]
    pub dry_run: bool,
}

// ── import ────────────────────────────────────────────────────────────────────

/// Arguments for `sassy import`.
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Report which files would change without writing any.
    #[arg(long = "dry-run", help = "Show what would change without writing")]
    pub dry_run: bool,
}

// ── watch ─────────────────────────────────────────────────────────────────────

/// Arguments for `sassy watch`.
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// How often exited watchers are checked for, in milliseconds.
    #[arg(
        long = "poll-interval",
        value_name = "MS",
        default_value_t = 200,
        value_parser = clap::value_parser!(u64).range(10..),
        help = "Watcher status poll interval in milliseconds"
    )]
    pub poll_interval: u64,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `sassy init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location instead of `<root>/sassy.toml`.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sassy completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `sassy config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `styles.load_path`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the paths configuration is read from.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_build_command() {
        let cli = Cli::parse_from(["sassy", "build"]);
        assert!(matches!(cli.command, Commands::Build(BuildArgs { dry_run: false })));
        assert_eq!(cli.global.root, Path::new("."));
    }

    #[test]
    fn no_color_flag_takes_no_value() {
        let cli = Cli::parse_from(["sassy", "--no-color", "build"]);
        assert!(cli.global.no_color);
        assert!(matches!(cli.command, Commands::Build(_)));
    }

    #[test]
    fn parse_import_dry_run() {
        let cli = Cli::parse_from(["sassy", "import", "--dry-run"]);
        assert!(matches!(cli.command, Commands::Import(ImportArgs { dry_run: true })));
    }

    #[test]
    fn root_flag_is_global() {
        let cli = Cli::parse_from(["sassy", "watch", "-C", "site"]);
        assert_eq!(cli.global.root, Path::new("site"));
        if let Commands::Watch(args) = cli.command {
            assert_eq!(args.poll_interval, 200);
        } else {
            panic!("expected Watch command");
        }
    }

    #[test]
    fn tiny_poll_interval_rejected() {
        assert!(Cli::try_parse_from(["sassy", "watch", "--poll-interval", "1"]).is_err());
    }

    #[test]
    fn build_alias() {
        let cli = Cli::parse_from(["sassy", "b", "--dry-run"]);
        assert!(matches!(cli.command, Commands::Build(BuildArgs { dry_run: true })));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["sassy", "--quiet", "--verbose", "build"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_get_requires_key() {
        assert!(Cli::try_parse_from(["sassy", "config", "get"]).is_err());
    }
}
