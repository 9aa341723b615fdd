//! Settings file loading
//!
//! This module reads the optional YAML file that provides default settings.

use std::fs;
use std::path::Path;

use log::debug;
use serde_yaml::from_str;

use crate::errors::{Result, config_parsing_error, file_operation_error};

use super::model::SettingsFile;

/// Loads default settings from a YAML file
///
/// # Arguments
/// * `file` - Path to the settings file
///
/// # Returns
/// * `Result<SettingsFile>` - The parsed settings or an error
///
/// # Errors
/// * Returns an error if the file cannot be read
/// * Returns an error if the YAML is invalid or contains unknown fields
pub fn load_settings_file(file: &Path) -> Result<SettingsFile> {
    let content = fs::read_to_string(file)
        .map_err(|e| file_operation_error(e, file.to_path_buf(), "read settings"))?;

    // An empty document is a valid file with no overrides
    if content.trim().is_empty() {
        return Ok(SettingsFile::default());
    }

    let settings: SettingsFile = from_str(&content).map_err(|e| {
        config_parsing_error(
            e,
            &format!(
                "Failed to parse settings file {}. Please check the YAML syntax.",
                file.display()
            ),
        )
    })?;

    debug!("Loaded settings file {}: {settings:?}", file.display());

    Ok(settings)
}
