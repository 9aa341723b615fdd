//! Directory walking and path matching
//!
//! This module walks the tree below a root directory and reports every path
//! that the compiled source pattern matches, together with its capture groups.

use std::path::{Path, PathBuf};

use log::{debug, trace, warn};
use regex::Regex;
use walkdir::WalkDir;

use crate::errors::{Result, invalid_pattern_error, traversal_error};

use super::root::anchor_pattern;

/// A path matched by the source pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// The matched path, as seen by the pattern
    pub path: PathBuf,
    /// The explicit capture groups in declaration order
    ///
    /// A group that did not take part in the match is an empty string.
    pub groups: Vec<String>,
}

/// Anchors and compiles a source pattern
///
/// # Errors
/// Returns an error if the pattern is not a valid regular expression
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    let anchored = anchor_pattern(pattern);
    Regex::new(&anchored).map_err(|e| invalid_pattern_error(e, &anchored))
}

/// Walks `root` and calls `on_match` for every matching path
///
/// Entries are visited parent first, with siblings in file name order, so the
/// order of the callbacks is stable between runs. The root itself is visited
/// too and symlinks are not followed, not even when the root is one. Paths that are not valid UTF-8 are
/// skipped with a warning.
///
/// # Errors
/// * Returns an error as soon as any entry cannot be read
/// * Returns the first error produced by `on_match`
pub fn walk<F>(root: &Path, pattern: &Regex, mut on_match: F) -> Result<()>
where
    F: FnMut(MatchRecord) -> Result<()>,
{
    debug!("Walking {} with pattern {}", root.display(), pattern.as_str());

    let mut visited = 0usize;
    let walker = WalkDir::new(root)
        .follow_links(false)
        .follow_root_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| traversal_error(e, root.to_path_buf()))?;
        visited += 1;

        let path = path_as_matched(root, entry.path());
        let Some(text) = path.to_str() else {
            warn!("Skipping path that is not valid UTF-8: {}", path.display());
            continue;
        };

        let Some(captures) = pattern.captures(text) else {
            continue;
        };

        let groups = captures
            .iter()
            .skip(1)
            .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
            .collect();

        trace!("Matched {text}");
        on_match(MatchRecord { path, groups })?;
    }

    debug!("Visited {visited} entries below {}", root.display());

    Ok(())
}

/// Collects every match below `root`
///
/// # Errors
/// Returns an error if the walk fails
pub fn collect_matches(root: &Path, pattern: &Regex) -> Result<Vec<MatchRecord>> {
    let mut matches = Vec::new();
    walk(root, pattern, |record| {
        matches.push(record);
        Ok(())
    })?;
    Ok(matches)
}

/// Strips the `./` a walk from the current directory adds to every entry
fn path_as_matched(root: &Path, path: &Path) -> PathBuf {
    if root != Path::new(".") {
        return path.to_path_buf();
    }

    match path.strip_prefix(".") {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.to_path_buf(),
        _ => path.to_path_buf(),
    }
}
