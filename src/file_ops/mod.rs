//! File operations module
//!
//! This module contains the filesystem changes a run makes.

mod symlink;

pub use symlink::{LinkReport, create_symlink, create_symlinks};
