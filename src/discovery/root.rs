//! Traversal root inference
//!
//! This module works out where a filesystem walk has to start so that every
//! path a source pattern could match is visited, without walking from `/`.

use std::path::PathBuf;

use log::debug;

use crate::constants::{END_ANCHOR, REGEX_METACHARACTERS};
use crate::utils::directory_of;

/// Infers the directory to walk for a source pattern
///
/// The literal text before the first regex metacharacter is read as a path and
/// its directory part is returned. The last segment of that prefix is dropped
/// because it may continue into the dynamic part of the pattern. A pattern
/// without metacharacters is read as a path in full.
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use supalink::discovery::infer_root;
///
/// assert_eq!(infer_root(r"media/ShowA/.*\.mkv"), PathBuf::from("media/ShowA"));
/// assert_eq!(infer_root("media/Show(A|B)/x"), PathBuf::from("media"));
/// ```
pub fn infer_root(pattern: &str) -> PathBuf {
    let literal = match pattern.find(|c| REGEX_METACHARACTERS.contains(c)) {
        Some(index) => &pattern[..index],
        None => pattern,
    };

    let root = directory_of(literal);
    debug!("Inferred walk root {} for pattern {pattern}", root.display());
    root
}

/// Appends an end-of-string anchor unless the pattern already ends with one
///
/// A trailing `\$` is an escaped literal dollar sign, not an anchor.
pub fn anchor_pattern(pattern: &str) -> String {
    let Some(body) = pattern.strip_suffix(END_ANCHOR) else {
        return format!("{pattern}{END_ANCHOR}");
    };

    let escapes = body.chars().rev().take_while(|c| *c == '\\').count();
    if escapes % 2 == 0 {
        pattern.to_string()
    } else {
        format!("{pattern}{END_ANCHOR}")
    }
}
