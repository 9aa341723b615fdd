//! Helpers shared by the table and tree renderers

use std::path::Path;

use crate::constants::{DISPLAY_ELLIPSIS, DISPLAY_KEEP_WIDTH, DISPLAY_MAX_WIDTH};

/// Shortens long names to their start plus the extension
///
/// Names of `limit` characters or more are cut to the first
/// `DISPLAY_KEEP_WIDTH` characters, followed by `(...)` and the original
/// extension, if any.
pub fn shorten(name: &str, limit: usize) -> String {
    if name.chars().count() < limit {
        return name.to_string();
    }

    let head: String = name.chars().take(DISPLAY_KEEP_WIDTH).collect();
    let extension = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();

    format!("{head}{DISPLAY_ELLIPSIS}{extension}")
}

/// Shortens a table cell that is longer than the display width
pub fn shorten_cell(text: &str) -> String {
    shorten(text, DISPLAY_MAX_WIDTH + 1)
}

/// Shortens a tree node label that reaches the display width
pub fn shorten_label(text: &str) -> String {
    shorten(text, DISPLAY_MAX_WIDTH)
}

/// Displays `path` relative to `root` when it lies below it
pub fn relative_display(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) if !root.as_os_str().is_empty() && !relative.as_os_str().is_empty() => {
            relative.display().to_string()
        }
        _ => path.display().to_string(),
    }
}
