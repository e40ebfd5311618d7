//! `sassy build`: compile every SCSS directory once.

use sassy_adapters::{GlobDiscovery, SassCompiler};
use sassy_core::{
    application::CompileService,
    domain::{CompileMode, CompileRequest, StyleLayout},
};
use tracing::instrument;

use crate::{
    cli::{BuildArgs, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(
    args: BuildArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let layout = config.layout(&global.root)?;
    let service = CompileService::new(
        Box::new(GlobDiscovery::new()),
        Box::new(SassCompiler::new()),
    );

    if args.dry_run {
        return preview(&service, &layout, &output);
    }

    let report = service.compile_all(&layout)?;
    if report.is_empty() {
        output.nothing_matched(layout.scss_dirs())?;
        return Ok(());
    }

    let report =
        report.map(|dir, _| format!("compiled to {}", layout.output_dir_for(dir).display()));
    output.report(&report)?;
    CliError::check_batch(&report)
}

fn preview(service: &CompileService, layout: &StyleLayout, output: &OutputManager) -> CliResult<()> {
    let plan = service.plan(layout, CompileMode::Once)?;
    if plan.is_empty() {
        output.nothing_matched(layout.scss_dirs())?;
        return Ok(());
    }

    let lines: Vec<String> = plan.iter().map(CompileRequest::command_line).collect();
    if output.format() == OutputFormat::Json {
        output.json(&lines)?;
        return Ok(());
    }

    output.header(&format!("Would run {} compiler invocation(s):", lines.len()))?;
    for line in &lines {
        output.print(&format!("  {line}"))?;
    }
    Ok(())
}
