//! Workflow engine
//!
//! This module contains the engine that turns a source pattern and a destination
//! template into a mapping, and the run that displays and applies it.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use log::{debug, info, warn};

use crate::config::Settings;
use crate::discovery::{compile_pattern, infer_root, walk};
use crate::errors;
use crate::file_ops::create_symlinks;
use crate::output::print_mapping;
use crate::path_gen::{StepSequencer, expand_template, uses_steps};

use super::context::RunOutcome;
use super::mapping::Mapping;

/// Options for a single run
#[derive(Debug, Clone)]
pub struct ProcessingOptions {
    /// Regular expression matched against source paths
    pub source_pattern: String,
    /// Template the destination paths are built from
    pub destination_template: String,
    /// Resolved settings
    pub settings: Settings,
}

/// Builds the mapping from matched source paths to destination paths
///
/// The pattern is end-anchored and compiled before anything is read from disk.
/// The walk starts at the directory inferred from the literal start of the
/// pattern, and every match is expanded with one step sequencer shared by the
/// whole call. Matches are numbered in the order the walk finds them.
///
/// # Arguments
/// * `source_pattern` - Regular expression matched against source paths
/// * `destination_template` - Template with `$N`, `$STEP` and `$STEP_COUNT` placeholders
/// * `steps` - Capacity of each step bucket, empty to disable step substitution
///
/// # Errors
/// * Returns an error if the pattern does not compile
/// * Returns an error if the walk fails
/// * Returns an error if a match cannot be expanded; no partial mapping is returned
pub fn build_mapping(
    source_pattern: &str,
    destination_template: &str,
    steps: &[usize],
) -> errors::Result<Mapping> {
    let pattern = compile_pattern(source_pattern)?;
    let root = infer_root(source_pattern);

    if steps.is_empty() && uses_steps(destination_template) {
        warn!("The destination uses $STEP but no steps are configured; it is kept as written");
    }

    let mut sequencer = StepSequencer::new();
    let mut mapping = Mapping::new();

    walk(&root, &pattern, |record| {
        let destination =
            expand_template(destination_template, &record.groups, steps, &mut sequencer)?;
        debug!("{} -> {destination}", record.path.display());
        mapping.insert(record.path, PathBuf::from(destination));
        Ok(())
    })?;

    debug!("Built mapping with {} entries", mapping.len());

    Ok(mapping)
}

/// Runs the whole program for one set of options
///
/// Confirmation answers are read from standard input.
pub fn run(options: &ProcessingOptions) -> Result<RunOutcome> {
    let stdin = io::stdin();
    run_with_input(options, &mut stdin.lock())
}

/// Runs the whole program, reading any confirmation answer from `input`
///
/// 1. Build the mapping
/// 2. Display it
/// 3. Stop here for a dry run or a declined confirmation
/// 4. Create the symlinks, reporting failures one by one
pub fn run_with_input<R: BufRead>(options: &ProcessingOptions, input: &mut R) -> Result<RunOutcome> {
    let settings = &options.settings;

    let mapping = build_mapping(
        &options.source_pattern,
        &options.destination_template,
        &settings.steps,
    )?;

    if mapping.is_empty() {
        info!("No matching paths found.");
        return Ok(RunOutcome::NoMatches);
    }

    print_mapping(&mapping, settings.format);

    if settings.dry_run {
        info!("Dry run enabled, no symlinks will be created.");
        return Ok(RunOutcome::DryRun {
            planned: mapping.len(),
        });
    }

    if settings.confirm && !ask_for_confirmation(input)? {
        info!("Operation cancelled by user.");
        return Ok(RunOutcome::Cancelled {
            planned: mapping.len(),
        });
    }

    let report = create_symlinks(&mapping);
    info!(
        "Created {} symlink(s), {} failed",
        report.created.len(),
        report.failed.len()
    );

    Ok(RunOutcome::Linked(report))
}

fn ask_for_confirmation<R: BufRead>(input: &mut R) -> Result<bool> {
    print!("Are you sure you want to create these symlinks? (y/n): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
