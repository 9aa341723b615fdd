//! Settings data structures
//!
//! This module contains the settings of a run and the optional YAML file that
//! provides their defaults.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::{Result, invalid_step_error};

/// How the planned symlinks are displayed
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Source and destination trees side by side
    #[default]
    Tree,
    /// One row per source/destination pair
    Table,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tree" => Ok(OutputFormat::Tree),
            "table" => Ok(OutputFormat::Table),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Tree => write!(f, "tree"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

/// Defaults read from a settings file
///
/// Every field is optional; anything left out falls back to the built-in default.
///
/// ```yaml
/// steps: [12, 12, 10]
/// confirm: true
/// format: table
/// ```
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    /// Capacity of each step bucket
    #[serde(default)]
    pub steps: Vec<usize>,
    /// Skip creating symlinks
    pub dry_run: Option<bool>,
    /// Ask before creating symlinks
    pub confirm: Option<bool>,
    /// How to display the planned symlinks
    pub format: Option<OutputFormat>,
}

/// Values given on the command line
///
/// Flags can only switch a setting on, so `false` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub steps: Vec<usize>,
    pub dry_run: bool,
    pub confirm: bool,
    pub format: Option<OutputFormat>,
}

/// Settings of a single run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Capacity of each step bucket; empty disables `$STEP` substitution
    pub steps: Vec<usize>,
    /// Compute and display the mapping without creating anything
    pub dry_run: bool,
    /// Ask for confirmation before creating symlinks
    pub confirm: bool,
    /// How to display the planned symlinks
    pub format: OutputFormat,
}

impl Settings {
    /// Combines the settings file with the command-line values
    ///
    /// Command-line values win. Steps given on the command line replace the
    /// steps of the file as a whole rather than being appended to them.
    ///
    /// # Errors
    /// Returns an error if any step capacity is zero
    pub fn resolve(file: Option<SettingsFile>, overrides: SettingsOverrides) -> Result<Self> {
        let file = file.unwrap_or_default();

        let steps = if overrides.steps.is_empty() {
            file.steps
        } else {
            overrides.steps
        };
        validate_steps(&steps)?;

        Ok(Settings {
            steps,
            dry_run: overrides.dry_run || file.dry_run.unwrap_or(false),
            confirm: overrides.confirm || file.confirm.unwrap_or(false),
            format: overrides.format.or(file.format).unwrap_or_default(),
        })
    }
}

/// Parses a step capacity given as text
///
/// # Errors
/// Returns an error unless the value is a positive integer
pub fn parse_step(value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(step) if step > 0 => Ok(step),
        _ => Err(invalid_step_error(value)),
    }
}

fn validate_steps(steps: &[usize]) -> Result<()> {
    match steps.iter().find(|step| **step == 0) {
        Some(step) => Err(invalid_step_error(&step.to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("tree").unwrap(), OutputFormat::Tree);
        assert_eq!(OutputFormat::from_str("TABLE").unwrap(), OutputFormat::Table);
        assert!(OutputFormat::from_str("list").is_err());
        assert_eq!(OutputFormat::Table.to_string(), "table");
    }

    #[test]
    fn test_parse_step() {
        assert_eq!(parse_step("12").unwrap(), 12);
        assert_eq!(parse_step(" 3 ").unwrap(), 3);
        assert!(parse_step("0").is_err());
        assert!(parse_step("-1").is_err());
        assert!(parse_step("ten").is_err());
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = Settings::resolve(None, SettingsOverrides::default()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.format, OutputFormat::Tree);
    }

    #[test]
    fn test_resolve_command_line_wins() {
        let file = SettingsFile {
            steps: vec![10, 10],
            dry_run: Some(false),
            confirm: Some(true),
            format: Some(OutputFormat::Table),
        };
        let overrides = SettingsOverrides {
            steps: vec![2],
            dry_run: true,
            confirm: false,
            format: Some(OutputFormat::Tree),
        };

        let settings = Settings::resolve(Some(file), overrides).unwrap();
        assert_eq!(settings.steps, vec![2]);
        assert!(settings.dry_run);
        assert!(settings.confirm, "File value applies when the flag is absent");
        assert_eq!(settings.format, OutputFormat::Tree);
    }

    #[test]
    fn test_resolve_rejects_zero_capacity() {
        let file = SettingsFile {
            steps: vec![3, 0],
            ..SettingsFile::default()
        };
        assert!(Settings::resolve(Some(file), SettingsOverrides::default()).is_err());
    }
}
