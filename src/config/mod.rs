//! Configuration module
//!
//! This module contains components for loading and resolving the settings of a run.

mod loader;
mod model;

pub use loader::load_settings_file;
pub use model::{OutputFormat, Settings, SettingsFile, SettingsOverrides, parse_step};
