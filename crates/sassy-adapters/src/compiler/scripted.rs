//! Scripted compiler for testing.
//!
//! Each source directory can be given a [`Script`]; every request is
//! recorded so tests can assert on the exact command lines issued.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use sassy_core::{
    application::{
        ApplicationError,
        ports::{Compiler, WatchProcess},
    },
    domain::{CompileOutput, CompileRequest},
    error::SassyResult,
};

/// What the fake compiler does for one source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Script {
    /// Exit 0 (one-shot) or keep running until stopped (watch).
    Succeed,
    /// Exit with `code` and `stderr`; a watcher exits immediately.
    Fail { code: i32, stderr: String },
    /// The program cannot be started.
    Unavailable,
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedCompiler {
    inner: Arc<RwLock<ScriptedInner>>,
}

#[derive(Debug, Default)]
struct ScriptedInner {
    scripts: HashMap<PathBuf, Script>,
    requests: Vec<CompileRequest>,
    stopped: Vec<PathBuf>,
}

impl ScriptedCompiler {
    /// A compiler that succeeds for every directory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(self, source_dir: impl Into<PathBuf>, script: Script) -> Self {
        self.inner
            .write()
            .unwrap()
            .scripts
            .insert(source_dir.into(), script);
        self
    }

    /// Every request received, in order.
    pub fn requests(&self) -> Vec<CompileRequest> {
        self.inner.read().unwrap().requests.clone()
    }

    /// Command lines of every request received, in order.
    pub fn command_lines(&self) -> Vec<String> {
        self.requests().iter().map(CompileRequest::command_line).collect()
    }

    /// Source directories whose watcher was stopped.
    pub fn stopped(&self) -> Vec<PathBuf> {
        self.inner.read().unwrap().stopped.clone()
    }

    fn receive(&self, request: &CompileRequest) -> SassyResult<Script> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.requests.push(request.clone());
        let script = inner
            .scripts
            .get(request.source_dir())
            .cloned()
            .unwrap_or(Script::Succeed);

        if script == Script::Unavailable {
            return Err(ApplicationError::CompilerUnavailable {
                program: request.program().to_owned(),
                reason: "scripted as unavailable".into(),
            }
            .into());
        }
        Ok(script)
    }
}

fn output_for(script: &Script) -> CompileOutput {
    match script {
        Script::Fail { code, stderr } => CompileOutput {
            code: Some(*code),
            stderr: stderr.clone(),
            ..CompileOutput::default()
        },
        _ => CompileOutput {
            code: Some(0),
            ..CompileOutput::default()
        },
    }
}

impl Compiler for ScriptedCompiler {
    fn compile(&self, request: &CompileRequest) -> SassyResult<CompileOutput> {
        let script = self.receive(request)?;
        Ok(output_for(&script))
    }

    fn watch(&self, request: &CompileRequest) -> SassyResult<Box<dyn WatchProcess>> {
        let script = self.receive(request)?;
        let exited = match script {
            Script::Fail { .. } => Some(output_for(&script)),
            _ => None,
        };
        Ok(Box::new(ScriptedWatch {
            inner: Arc::clone(&self.inner),
            source_dir: request.source_dir().to_path_buf(),
            exited,
        }))
    }
}

/// Fake watch handle produced by [`ScriptedCompiler::watch`].
#[derive(Debug)]
pub struct ScriptedWatch {
    inner: Arc<RwLock<ScriptedInner>>,
    source_dir: PathBuf,
    exited: Option<CompileOutput>,
}

impl ScriptedWatch {
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }
}

impl WatchProcess for ScriptedWatch {
    fn id(&self) -> Option<u32> {
        None
    }

    fn try_wait(&mut self) -> SassyResult<Option<CompileOutput>> {
        Ok(self.exited.clone())
    }

    fn stop(&mut self) -> SassyResult<CompileOutput> {
        if let Some(output) = &self.exited {
            return Ok(output.clone());
        }
        self.inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .stopped
            .push(self.source_dir.clone());
        let output = CompileOutput::default();
        self.exited = Some(output.clone());
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sassy_core::domain::{CompileMode, StyleLayout};

    fn request(dir: &str) -> CompileRequest {
        CompileRequest::new(&StyleLayout::default(), dir, CompileMode::Once)
    }

    #[test]
    fn default_script_succeeds() {
        let compiler = ScriptedCompiler::new();
        assert!(compiler.compile(&request("a/scss")).unwrap().success());
        assert_eq!(compiler.requests().len(), 1);
    }

    #[test]
    fn failure_script_returns_output() {
        let compiler = ScriptedCompiler::new().with_script(
            "a/scss",
            Script::Fail {
                code: 65,
                stderr: "boom".into(),
            },
        );
        let out = compiler.compile(&request("a/scss")).unwrap();
        assert_eq!(out.code, Some(65));
        assert_eq!(out.stderr, "boom");
    }

    #[test]
    fn stopped_watchers_are_recorded() {
        let compiler = ScriptedCompiler::new();
        let req = CompileRequest::new(&StyleLayout::default(), "a/scss", CompileMode::Watch);
        let mut watch = compiler.watch(&req).unwrap();
        assert_eq!(watch.try_wait().unwrap(), None);
        watch.stop().unwrap();
        assert_eq!(compiler.stopped(), vec![PathBuf::from("a/scss")]);
    }
}
