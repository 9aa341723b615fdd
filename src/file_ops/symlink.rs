//! Symlink creation
//!
//! This module creates a symlink at every destination of a mapping, pointing
//! back at its source.

use std::fs::create_dir_all;
use std::io;
use std::path::{Path, PathBuf, absolute};

use log::{debug, error};

use crate::errors::{Error, Result, symlink_creation_error};
use crate::workflow::Mapping;

/// Result of creating the symlinks of a mapping
#[derive(Debug, Default)]
pub struct LinkReport {
    /// `(source, destination)` pairs that were linked
    pub created: Vec<(PathBuf, PathBuf)>,
    /// One error per pair that could not be linked
    pub failed: Vec<Error>,
}

/// Creates a symlink for every pair of the mapping
///
/// A failing pair is logged and recorded in the report; the remaining pairs
/// are still processed.
pub fn create_symlinks(mapping: &Mapping) -> LinkReport {
    let mut report = LinkReport::default();

    for (source, destination) in mapping {
        match create_symlink(source, destination) {
            Ok(()) => report
                .created
                .push((source.to_path_buf(), destination.to_path_buf())),
            Err(e) => {
                error!("{e}: {}", io_cause(&e));
                report.failed.push(e);
            }
        }
    }

    report
}

/// Creates a symlink at `destination` pointing to `source`
///
/// Missing parent directories of the destination are created first. The link
/// stores the absolute source path, so it does not depend on where the
/// destination lives.
///
/// # Errors
/// * Returns an error if the parent directory cannot be created
/// * Returns an error if the symlink cannot be created, e.g. because the destination exists
pub fn create_symlink(source: &Path, destination: &Path) -> Result<()> {
    let fail = |e: io::Error| symlink_creation_error(e, source.to_path_buf(), destination.to_path_buf());

    if let Some(parent) = destination.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent).map_err(fail)?;
    }

    let target = absolute(source).map_err(fail)?;
    debug!("Linking {} -> {}", destination.display(), target.display());

    link(&target, destination).map_err(fail)
}

#[cfg(unix)]
fn link(target: &Path, destination: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, destination)
}

#[cfg(windows)]
fn link(target: &Path, destination: &Path) -> io::Result<()> {
    if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, destination)
    } else {
        std::os::windows::fs::symlink_file(target, destination)
    }
}

fn io_cause(error: &Error) -> String {
    match error {
        Error::SymlinkCreation { source, .. } => source.to_string(),
        _ => String::new(),
    }
}
