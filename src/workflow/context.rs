//! Workflow context
//!
//! This module defines what a run ended with.

use crate::file_ops::LinkReport;

/// How a run ended
#[derive(Debug)]
pub enum RunOutcome {
    /// The pattern matched nothing
    NoMatches,
    /// The mapping was displayed and nothing was created
    DryRun { planned: usize },
    /// The user declined the confirmation prompt
    Cancelled { planned: usize },
    /// Symlinks were created; individual failures are in the report
    Linked(LinkReport),
}

impl RunOutcome {
    /// Number of symlinks that could not be created
    pub fn failures(&self) -> usize {
        match self {
            RunOutcome::Linked(report) => report.failed.len(),
            _ => 0,
        }
    }
}
