//! File discovery module
//!
//! This module contains components for choosing where to look and finding the
//! paths a source pattern matches.

mod root;
mod walker;

pub use root::{anchor_pattern, infer_root};
pub use walker::{MatchRecord, collect_matches, compile_pattern, walk};
