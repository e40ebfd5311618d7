//! In-memory source tree for testing.
//!
//! Implements both [`SourceFiles`] and [`Discovery`], so services can run
//! end to end without touching the disk. Individual paths can be made
//! unreadable or read-only to exercise failure handling.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use glob::Pattern;

use sassy_core::{
    application::{
        ApplicationError,
        ports::{Discovery, SourceFiles},
    },
    domain::{DomainError, GlobPattern, PathKind},
    error::SassyResult,
};

use crate::discovery::{full_pattern, match_options};

/// In-memory source tree for testing.
#[derive(Debug, Clone, Default)]
pub struct MemorySources {
    inner: Arc<RwLock<MemorySourcesInner>>,
}

#[derive(Debug, Default)]
struct MemorySourcesInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
    writes: HashMap<PathBuf, usize>,
}

impl MemorySources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, registering every ancestor as a directory.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        {
            let mut inner = self.inner.write().unwrap();
            if let Some(parent) = path.parent() {
                register_dirs(&mut inner.directories, parent);
            }
            inner.files.insert(path, content.into());
        }
        self
    }

    /// Add an (empty) directory and its ancestors.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        register_dirs(&mut self.inner.write().unwrap().directories, path.as_ref());
        self
    }

    /// Make reads of `path` fail.
    pub fn deny_read(self, path: impl Into<PathBuf>) -> Self {
        self.inner.write().unwrap().unreadable.insert(path.into());
        self
    }

    /// Make writes to `path` fail.
    pub fn deny_write(self, path: impl Into<PathBuf>) -> Self {
        self.inner.write().unwrap().read_only.insert(path.into());
        self
    }

    /// Current content of a file (testing helper).
    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// How many times `path` has been written.
    pub fn write_count(&self, path: impl AsRef<Path>) -> usize {
        let inner = self.inner.read().unwrap();
        inner.writes.get(path.as_ref()).copied().unwrap_or(0)
    }
}

fn register_dirs(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

impl SourceFiles for MemorySources {
    fn read_to_string(&self, path: &Path) -> SassyResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if inner.unreadable.contains(path) {
            return Err(ApplicationError::ReadFailed {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into());
        }
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::ReadFailed {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            }
            .into()
        })
    }

    fn write(&self, path: &Path, content: &str) -> SassyResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if inner.read_only.contains(path) {
            return Err(ApplicationError::WriteFailed {
                path: path.to_path_buf(),
                reason: "read-only file".into(),
            }
            .into());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::WriteFailed {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_owned());
        *inner.writes.entry(path.to_path_buf()).or_default() += 1;
        Ok(())
    }
}

impl Discovery for MemorySources {
    fn discover(
        &self,
        root: &Path,
        pattern: &GlobPattern,
        kind: PathKind,
    ) -> SassyResult<Vec<PathBuf>> {
        let compiled = Pattern::new(&full_pattern(root, pattern.as_str())).map_err(|e| {
            DomainError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let options = match_options();
        let dirs = inner.directories.iter().filter(|_| kind != PathKind::File);
        let files = inner.files.keys().filter(|_| kind != PathKind::Directory);

        let mut found: Vec<PathBuf> = dirs
            .chain(files)
            .filter(|p| compiled.matches_path_with(p, options))
            .cloned()
            .collect();
        found.sort();
        Ok(found)
    }
}
