//! `sassy import`: make every SCSS file start with the preamble.

use sassy_adapters::{GlobDiscovery, LocalSources};
use sassy_core::{application::ImportService, domain::PreambleOutcome};
use tracing::instrument;

use crate::{
    cli::{GlobalArgs, ImportArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(
    args: ImportArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let layout = config.layout(&global.root)?;
    let service = ImportService::new(Box::new(GlobDiscovery::new()), Box::new(LocalSources::new()));

    let report = if args.dry_run {
        service.preview_all(&layout)?
    } else {
        service.import_all(&layout)?
    };

    if report.is_empty() {
        output.nothing_matched(layout.scss_files())?;
        return Ok(());
    }

    let dry_run = args.dry_run;
    let report = report.map(|_, outcome| match outcome {
        PreambleOutcome::Inserted if dry_run => "would insert preamble".to_owned(),
        PreambleOutcome::Inserted => "preamble inserted".to_owned(),
        PreambleOutcome::AlreadyPresent => "already present".to_owned(),
    });
    output.report(&report)?;
    CliError::check_batch(&report)
}
