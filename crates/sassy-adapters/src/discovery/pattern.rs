//! Glob discovery on the local filesystem using the `glob` crate.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, trace};

use sassy_core::{
    application::{ApplicationError, ports::Discovery},
    domain::{DomainError, GlobPattern, PathKind},
    error::SassyResult,
};

/// Production discovery: resolves patterns against the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobDiscovery;

impl GlobDiscovery {
    pub fn new() -> Self {
        Self
    }
}

impl Discovery for GlobDiscovery {
    fn discover(
        &self,
        root: &Path,
        pattern: &GlobPattern,
        kind: PathKind,
    ) -> SassyResult<Vec<PathBuf>> {
        let full = full_pattern(root, pattern.as_str());
        debug!(pattern = %full, ?kind, "Resolving pattern");

        let entries = glob::glob_with(&full, match_options()).map_err(|e| {
            DomainError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;

        let mut found = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| ApplicationError::Discovery {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
            if kind.accepts(path.is_dir(), path.is_file()) {
                trace!(path = %path.display(), "Matched");
                found.push(path);
            }
        }

        found.sort();
        Ok(found)
    }
}

/// `*` never crosses a separator and never matches a leading dot.
pub(crate) fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    }
}

/// Prefix `pattern` with `root`, escaping the root so it only matches
/// itself. An absolute pattern or a `.` root is used as is.
pub(crate) fn full_pattern(root: &Path, pattern: &str) -> String {
    let root_is_cwd = root.as_os_str().is_empty() || root == Path::new(".");
    if root_is_cwd || Path::new(pattern).is_absolute() {
        return pattern.to_owned();
    }
    let root = Pattern::escape(&root.to_string_lossy());
    let root = root.trim_end_matches('/');
    format!("{root}/{pattern}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pattern(p: &str) -> GlobPattern {
        GlobPattern::new("test", p).unwrap()
    }

    /// Three matching scss dirs and several near misses.
    fn tree() -> TempDir {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        for dir in [
            "project/static/blog/scss",
            "project/static/shop/scss",
            "project/static/admin/scss",
            "project/static/admin/scss/partials",
            "project/static/docs/sass",
            "project/static/.cache/scss",
            "project/other/scss",
        ] {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
        // a file named like a source dir
        fs::create_dir_all(root.join("project/static/legacy")).unwrap();
        fs::write(root.join("project/static/legacy/scss"), "").unwrap();

        fs::write(root.join("project/static/blog/scss/main.scss"), "body{}").unwrap();
        fs::write(root.join("project/static/blog/scss/print.scss"), "").unwrap();
        fs::write(root.join("project/static/blog/scss/notes.txt"), "").unwrap();
        fs::write(root.join("project/static/admin/scss/partials/_x.scss"), "").unwrap();
        fs::write(root.join("project/other/scss/a.scss"), "").unwrap();
        tmp
    }

    fn relative(root: &Path, paths: Vec<PathBuf>) -> Vec<String> {
        paths
            .into_iter()
            .map(|p| p.strip_prefix(root).unwrap().display().to_string())
            .collect()
    }

    #[test]
    fn directories_match_exactly() {
        let tmp = tree();
        let found = GlobDiscovery
            .discover(tmp.path(), &pattern("project/static/*/scss"), PathKind::Directory)
            .unwrap();
        assert_eq!(
            relative(tmp.path(), found),
            vec![
                "project/static/admin/scss",
                "project/static/blog/scss",
                "project/static/shop/scss",
            ]
        );
    }

    #[test]
    fn files_match_exactly() {
        let tmp = tree();
        let found = GlobDiscovery
            .discover(
                tmp.path(),
                &pattern("project/static/*/scss/*.scss"),
                PathKind::File,
            )
            .unwrap();
        assert_eq!(
            relative(tmp.path(), found),
            vec![
                "project/static/blog/scss/main.scss",
                "project/static/blog/scss/print.scss",
            ]
        );
    }

    #[test]
    fn any_kind_keeps_files_named_like_dirs() {
        let tmp = tree();
        let found = GlobDiscovery
            .discover(tmp.path(), &pattern("project/static/*/scss"), PathKind::Any)
            .unwrap();
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let tmp = tree();
        let found = GlobDiscovery
            .discover(tmp.path(), &pattern("nowhere/*/scss"), PathKind::Directory)
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn malformed_pattern_is_rejected() {
        let tmp = tree();
        let err = GlobDiscovery
            .discover(tmp.path(), &pattern("project/[static"), PathKind::Any)
            .unwrap_err();
        assert!(err.to_string().contains("project/[static"));
    }

    #[test]
    fn root_is_escaped() {
        assert_eq!(full_pattern(Path::new("site[1]"), "a/*"), "site[[]1[]]/a/*");
        assert_eq!(full_pattern(Path::new("."), "a/*"), "a/*");
        assert_eq!(full_pattern(Path::new(""), "a/*"), "a/*");
        assert_eq!(full_pattern(Path::new("site/"), "a/*"), "site/a/*");
    }
}
