//! Local source file adapter using std::fs.

use std::io;
use std::path::Path;

use sassy_core::{
    application::{ApplicationError, ports::SourceFiles},
    error::{SassyError, SassyResult},
};

/// Production source file access using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalSources;

impl LocalSources {
    /// Create a new local source adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalSources {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceFiles for LocalSources {
    fn read_to_string(&self, path: &Path) -> SassyResult<String> {
        std::fs::read_to_string(path).map_err(|e| read_error(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> SassyResult<()> {
        std::fs::write(path, content).map_err(|e| write_error(path, e))
    }
}

fn read_error(path: &Path, e: io::Error) -> SassyError {
    let reason = match e.kind() {
        io::ErrorKind::InvalidData => "file is not valid UTF-8 text".to_owned(),
        _ => e.to_string(),
    };
    ApplicationError::ReadFailed {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}

fn write_error(path: &Path, e: io::Error) -> SassyError {
    ApplicationError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn round_trips_text() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a.scss");
        LocalSources.write(&path, "body{}").unwrap();
        assert_eq!(LocalSources.read_to_string(&path).unwrap(), "body{}");
    }

    #[test]
    fn missing_file_is_read_failure() {
        let tmp = TempDir::new().unwrap();
        let err = LocalSources
            .read_to_string(&tmp.path().join("missing.scss"))
            .unwrap_err();
        assert!(matches!(
            err,
            SassyError::Application(ApplicationError::ReadFailed { .. })
        ));
    }

    #[test]
    fn binary_file_is_read_failure() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("logo.scss");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let err = LocalSources.read_to_string(&path).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn writing_into_missing_dir_is_write_failure() {
        let tmp = TempDir::new().unwrap();
        let err = LocalSources
            .write(&tmp.path().join("nope/a.scss"), "x")
            .unwrap_err();
        assert!(matches!(
            err,
            SassyError::Application(ApplicationError::WriteFailed { .. })
        ));
    }
}
