//! Path generation module
//!
//! This module contains components for turning a match into its destination path.

mod step;
mod template;

pub use step::{Step, StepSequencer};
pub use template::{expand_template, uses_steps};
