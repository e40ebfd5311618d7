//! `sassy watch`: keep one `sass --watch` process per SCSS directory
//! running until Ctrl+C, then stop them all.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use sassy_adapters::{GlobDiscovery, SassCompiler};
use sassy_core::application::WatchService;
use tracing::{info, instrument};

use crate::{
    cli::{GlobalArgs, OutputFormat, WatchArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: WatchArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let layout = config.layout(&global.root)?;
    let service = WatchService::new(
        Box::new(GlobDiscovery::new()),
        Box::new(SassCompiler::new()),
    );

    // Installed before spawning so an early Ctrl+C still reaches the loop.
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .map_err(|source| CliError::SignalHandler { source })?;

    let mut session = service.start(&layout)?;
    if session.running_count() == 0 && session.report().is_empty() {
        output.nothing_matched(layout.scss_dirs())?;
        return Ok(());
    }

    // JSON mode writes only the final summary to stdout.
    let human = output.format() != OutputFormat::Json;
    if human {
        for (dir, err) in session.report().failed() {
            output.error(&format!("{}: {err}", dir.display()))?;
        }
    }
    if human && session.running_count() > 0 {
        output.header(&format!(
            "Watching {} director(ies), press Ctrl+C to stop",
            session.running_count()
        ))?;
        for dir in session.running() {
            output.print(&format!("  {}", dir.display()))?;
        }
    }

    let interval = Duration::from_millis(args.poll_interval);
    let stopping = || interrupted.load(Ordering::SeqCst);
    while session.running_count() > 0 && !stopping() {
        thread::sleep(interval);
        for dir in session.poll_or_stop(stopping) {
            if human && !stopping() {
                output.warning(&format!("Watcher for {} exited", dir.display()))?;
            }
        }
    }

    if interrupted.load(Ordering::SeqCst) {
        info!("Interrupted, stopping watchers");
    }
    let report = session.stop();
    output.report(&report)?;
    CliError::check_batch(&report)
}
