use std::path::{Component, Path, PathBuf};

/// Join `offset` onto `base` and collapse `.` and `..` lexically.
///
/// `a/scss` + `../styles` gives `a/styles`. Nothing touches the
/// filesystem, so symlinks are not resolved. A `..` that would climb
/// above the start of a relative path is kept; one that would climb above
/// the filesystem root is dropped.
pub fn join_normalized(base: &Path, offset: &Path) -> PathBuf {
    let joined = base.join(offset);
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// `true` for `""` and `"."`, the two spellings of "current directory"
/// that should not be prefixed onto relative paths.
pub(crate) fn is_current_dir(path: &Path) -> bool {
    path.as_os_str().is_empty() || path == Path::new(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_offset_replaces_last_segment() {
        assert_eq!(
            join_normalized(Path::new("project/static/app/scss"), Path::new("../styles")),
            PathBuf::from("project/static/app/styles")
        );
    }

    #[test]
    fn plain_offset_appends() {
        assert_eq!(
            join_normalized(Path::new("a/scss"), Path::new("css")),
            PathBuf::from("a/scss/css")
        );
    }

    #[test]
    fn cur_dir_segments_vanish() {
        assert_eq!(
            join_normalized(Path::new("./a/./scss"), Path::new("./out")),
            PathBuf::from("a/scss/out")
        );
    }

    #[test]
    fn leading_parent_is_kept_for_relative_paths() {
        assert_eq!(
            join_normalized(Path::new("scss"), Path::new("../../styles")),
            PathBuf::from("../styles")
        );
    }

    #[cfg(unix)]
    #[test]
    fn cannot_climb_above_root() {
        assert_eq!(
            join_normalized(Path::new("/scss"), Path::new("../../styles")),
            PathBuf::from("/styles")
        );
    }

    #[test]
    fn collapsing_everything_yields_dot() {
        assert_eq!(
            join_normalized(Path::new("scss"), Path::new("..")),
            PathBuf::from(".")
        );
    }

    #[test]
    fn current_dir_spellings() {
        assert!(is_current_dir(Path::new("")));
        assert!(is_current_dir(Path::new(".")));
        assert!(!is_current_dir(Path::new("site")));
    }
}
