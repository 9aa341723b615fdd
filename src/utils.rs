use std::fs::create_dir_all;
use std::path::{Component, Path, PathBuf, is_separator};

use directories::ProjectDirs;
use shellexpand::tilde;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, file_operation_error, generic_error};

/// Expands a leading `~` to the user's home directory
pub fn expand_path(path: &str) -> String {
    tilde(path).to_string()
}

/// Returns the directory part of a textual path
///
/// Everything after the last separator is dropped and trailing separators are
/// removed. A path without separators yields `.` and a path directly below the
/// filesystem root yields the root itself.
pub fn directory_of(path: &str) -> PathBuf {
    let Some(last) = path.rfind(is_separator) else {
        return PathBuf::from(".");
    };

    let parent = path[..last].trim_end_matches(is_separator);
    if parent.is_empty() {
        // Only separators before the last segment, so the parent is the root
        return PathBuf::from(&path[..1]);
    }

    PathBuf::from(parent)
}

/// Finds the deepest directory shared by the parents of every path
///
/// Returns an empty path when `paths` is empty or the paths share nothing.
pub fn common_root<P: AsRef<Path>>(paths: &[P]) -> PathBuf {
    let mut iter = paths.iter();
    let Some(first) = iter.next() else {
        return PathBuf::new();
    };

    let mut root: Vec<Component> = first
        .as_ref()
        .parent()
        .map(|parent| parent.components().collect())
        .unwrap_or_default();

    for path in iter {
        let shared = root
            .iter()
            .zip(path.as_ref().components())
            .take_while(|(a, b)| *a == b)
            .count();
        root.truncate(shared);
    }

    root.iter().collect()
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.data_dir().exists() {
        create_dir_all(folder.data_dir()).map_err(|e| {
            file_operation_error(e, folder.data_dir().to_path_buf(), "create directory for")
        })?;
    }
    Ok(folder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_of() {
        assert_eq!(directory_of("media/ShowA/"), PathBuf::from("media/ShowA"));
        assert_eq!(directory_of("media/ShowA/Show"), PathBuf::from("media/ShowA"));
        assert_eq!(directory_of("media//ShowA"), PathBuf::from("media"));
        assert_eq!(directory_of("ShowA"), PathBuf::from("."));
        assert_eq!(directory_of(""), PathBuf::from("."));
        assert_eq!(directory_of("/media"), PathBuf::from("/"));
        assert_eq!(directory_of("/"), PathBuf::from("/"));
    }

    #[test]
    fn test_common_root() {
        let paths = [
            PathBuf::from("/media/shows/a/1.mkv"),
            PathBuf::from("/media/shows/b/2.mkv"),
            PathBuf::from("/media/shows/b/c/3.mkv"),
        ];
        assert_eq!(common_root(&paths), PathBuf::from("/media/shows"));

        let single = [PathBuf::from("out/Season 01/ep.mkv")];
        assert_eq!(common_root(&single), PathBuf::from("out/Season 01"));

        let unrelated = [PathBuf::from("a/1"), PathBuf::from("b/2")];
        assert_eq!(common_root(&unrelated), PathBuf::new());

        let empty: [PathBuf; 0] = [];
        assert_eq!(common_root(&empty), PathBuf::new());
    }

    #[test]
    fn test_expand_path_leaves_plain_paths() {
        assert_eq!(expand_path("media/.*\\.mkv"), "media/.*\\.mkv");
        assert_eq!(expand_path("out/~backup"), "out/~backup");
    }
}
