//! `sass` subprocess adapter.
//!
//! The compiler is spawned directly from the request's argument list, so
//! paths with spaces or shell metacharacters are passed through intact.

use std::io;
use std::process::{Child, Command, ExitStatus, Stdio};

use tracing::{debug, trace};

use sassy_core::{
    application::{
        ApplicationError,
        ports::{Compiler, WatchProcess},
    },
    domain::{CompileOutput, CompileRequest},
    error::{SassyError, SassyResult},
};

/// Runs the configured compiler program (Dart Sass by default).
#[derive(Debug, Clone, Copy, Default)]
pub struct SassCompiler;

impl SassCompiler {
    pub fn new() -> Self {
        Self
    }

    fn command(request: &CompileRequest) -> Command {
        let mut cmd = Command::new(request.program());
        cmd.args(request.args()).stdin(Stdio::null());
        cmd
    }
}

impl Compiler for SassCompiler {
    fn compile(&self, request: &CompileRequest) -> SassyResult<CompileOutput> {
        let output = Self::command(request)
            .output()
            .map_err(|e| unavailable(request, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !stdout.trim().is_empty() {
            trace!(source = %request.source_dir().display(), %stdout, "Compiler output");
        }

        Ok(CompileOutput {
            code: output.status.code(),
            stdout,
            stderr,
        })
    }

    fn watch(&self, request: &CompileRequest) -> SassyResult<Box<dyn WatchProcess>> {
        // Output goes straight to the terminal so recompiles are visible live.
        let child = Self::command(request)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| unavailable(request, e))?;

        debug!(pid = child.id(), source = %request.source_dir().display(), "Watcher spawned");
        Ok(Box::new(SassWatch {
            child,
            request: request.clone(),
        }))
    }
}

fn unavailable(request: &CompileRequest, e: io::Error) -> SassyError {
    ApplicationError::CompilerUnavailable {
        program: request.program().to_owned(),
        reason: e.to_string(),
    }
    .into()
}

/// Handle to a running `sass --watch` child. Killed on drop.
#[derive(Debug)]
pub struct SassWatch {
    child: Child,
    request: CompileRequest,
}

impl SassWatch {
    fn watch_error(&self, e: io::Error) -> SassyError {
        ApplicationError::WatchFailed {
            source_dir: self.request.source_dir().to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    }
}

fn exit_output(status: ExitStatus) -> CompileOutput {
    CompileOutput {
        code: status.code(),
        ..CompileOutput::default()
    }
}

impl WatchProcess for SassWatch {
    fn id(&self) -> Option<u32> {
        Some(self.child.id())
    }

    fn try_wait(&mut self) -> SassyResult<Option<CompileOutput>> {
        match self.child.try_wait() {
            Ok(status) => Ok(status.map(exit_output)),
            Err(e) => Err(self.watch_error(e)),
        }
    }

    fn stop(&mut self) -> SassyResult<CompileOutput> {
        if let Some(status) = self.child.try_wait().map_err(|e| self.watch_error(e))? {
            return Ok(exit_output(status));
        }
        // `kill` fails with InvalidInput if the child exited in between.
        match self.child.kill() {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::InvalidInput => {}
            Err(e) => return Err(self.watch_error(e)),
        }
        let status = self.child.wait().map_err(|e| self.watch_error(e))?;
        Ok(exit_output(status))
    }
}

impl Drop for SassWatch {
    fn drop(&mut self) {
        if let Ok(None) = self.child.try_wait() {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use sassy_core::domain::{CompileMode, StyleLayout};

    fn request(program: &str, mode: CompileMode) -> CompileRequest {
        let layout = StyleLayout::builder().compiler(program).build().unwrap();
        CompileRequest::new(&layout, "a/scss", mode)
    }

    #[test]
    fn zero_exit_is_success() {
        let out = SassCompiler.compile(&request("true", CompileMode::Once)).unwrap();
        assert!(out.success());
    }

    #[test]
    fn non_zero_exit_is_captured() {
        let out = SassCompiler.compile(&request("false", CompileMode::Once)).unwrap();
        assert_eq!(out.code, Some(1));
    }

    #[test]
    fn arguments_reach_the_process() {
        let out = SassCompiler.compile(&request("echo", CompileMode::Once)).unwrap();
        assert_eq!(
            out.stdout.trim(),
            "a/scss:a/styles --load-path=project/sass --style=expanded --no-source-map"
        );
    }

    #[test]
    fn missing_program_is_unavailable() {
        let err = SassCompiler
            .compile(&request("sassy-no-such-compiler", CompileMode::Once))
            .unwrap_err();
        assert!(matches!(
            err,
            SassyError::Application(ApplicationError::CompilerUnavailable { .. })
        ));
    }

    #[test]
    fn watch_process_can_be_stopped() {
        // `sleep` rejects the sass flags, so wrap it: sh -c 'sleep 30' sh <args...>
        let layout = StyleLayout::builder().compiler("sh").build().unwrap();
        let request = CompileRequest::new(&layout, "a/scss", CompileMode::Watch);
        let child = Command::new("sh")
            .args(["-c", "sleep 30", "sh"])
            .args(request.args())
            .spawn()
            .unwrap();
        let mut watch = SassWatch { child, request };

        assert!(watch.id().is_some());
        assert_eq!(watch.try_wait().unwrap(), None);
        let out = watch.stop().unwrap();
        assert!(!out.success());
        // stopping twice reports the same exit
        assert!(watch.stop().is_ok());
    }
}
