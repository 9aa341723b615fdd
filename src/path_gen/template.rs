//! Destination template expansion
//!
//! This module fills the placeholders of a destination template with the
//! capture groups of a match and, when step buckets are configured, with the
//! current step.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{STEP_COUNT_PLACEHOLDER, STEP_PLACEHOLDER};
use crate::errors::{Result, template_parameter_error};

use super::step::{Step, StepSequencer};

// $STEP is a prefix of $STEP_COUNT, so the longer token has to come first
static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"{}|{}|\$[0-9]+",
        regex::escape(STEP_COUNT_PLACEHOLDER),
        regex::escape(STEP_PLACEHOLDER)
    ))
    .expect("Failed to compile regex pattern for template placeholders")
});

/// A piece of a template after positional placeholders were resolved
#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece<'a> {
    Text(&'a str),
    StepCount,
    Step,
}

/// Expands a destination template for one match
///
/// The template is scanned once. Positional placeholders (`$1`, `$2`, ...) are
/// resolved first, so an out-of-range index fails before any step is used.
/// When `steps` is empty the step tokens stay as written and the sequencer is
/// left alone; otherwise the sequencer advances exactly once and `$STEP_COUNT`
/// and `$STEP` are replaced by the position and the bucket. Text coming from a
/// capture group is never scanned for placeholders.
///
/// # Arguments
/// * `template` - The destination template
/// * `groups` - The capture groups of the match, without the whole match
/// * `steps` - The capacity of each step bucket
/// * `sequencer` - The step cursor shared by every match of the run
///
/// # Errors
/// * Returns an error if a `$N` placeholder has no matching capture group
/// * Returns an error if every step bucket is already full
pub fn expand_template(
    template: &str,
    groups: &[String],
    steps: &[usize],
    sequencer: &mut StepSequencer,
) -> Result<String> {
    let pieces = split_template(template, groups)?;

    let step = if steps.is_empty() {
        None
    } else {
        Some(sequencer.next_step(steps)?)
    };

    let result = assemble(&pieces, step);
    trace!("Expanded template: {template} -> {result}");

    Ok(result)
}

/// Returns true if the template refers to the step placeholders
pub fn uses_steps(template: &str) -> bool {
    template.contains(STEP_PLACEHOLDER)
}

fn split_template<'a>(template: &'a str, groups: &'a [String]) -> Result<Vec<Piece<'a>>> {
    let mut pieces = Vec::new();
    let mut last = 0;

    for token in PLACEHOLDER_RE.find_iter(template) {
        pieces.push(Piece::Text(&template[last..token.start()]));
        last = token.end();

        let piece = match token.as_str() {
            STEP_COUNT_PLACEHOLDER => Piece::StepCount,
            STEP_PLACEHOLDER => Piece::Step,
            parameter => {
                // An index too large for usize can never be in range either
                let value = parameter[1..]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| index.checked_sub(1))
                    .and_then(|index| groups.get(index))
                    .ok_or_else(|| template_parameter_error(parameter, groups.len()))?;
                Piece::Text(value.as_str())
            }
        };
        pieces.push(piece);
    }
    pieces.push(Piece::Text(&template[last..]));

    Ok(pieces)
}

fn assemble(pieces: &[Piece<'_>], step: Option<Step>) -> String {
    let mut result = String::new();

    for piece in pieces {
        match (piece, step) {
            (Piece::Text(text), _) => result.push_str(text),
            (Piece::StepCount, Some(step)) => result.push_str(&step.position.to_string()),
            (Piece::Step, Some(step)) => result.push_str(&step.bucket.to_string()),
            (Piece::StepCount, None) => result.push_str(STEP_COUNT_PLACEHOLDER),
            (Piece::Step, None) => result.push_str(STEP_PLACEHOLDER),
        }
    }

    result
}
