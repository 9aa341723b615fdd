//! Workflow module
//!
//! This module contains components for orchestrating a run.

mod context;
mod engine;
mod mapping;

pub use context::RunOutcome;
pub use engine::{ProcessingOptions, build_mapping, run, run_with_input};
pub use mapping::Mapping;
