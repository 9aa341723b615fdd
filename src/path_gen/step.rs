//! Step sequencing
//!
//! Packs successive matches into numbered buckets of fixed capacity, so a long
//! run of files can be split into `Season 1`, `Season 2`, ... style folders.

use log::trace;

use crate::errors::{Result, no_steps_error, step_exhausted_error};

/// A bucket number and the position inside that bucket, both starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The bucket the match falls into
    pub bucket: usize,
    /// The position of the match inside its bucket
    pub position: usize,
}

/// Cursor over the configured step buckets
///
/// A fresh sequencer has not handed out any step yet. Each call to
/// [`StepSequencer::next_step`] moves it forward by one; it never moves back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepSequencer {
    bucket: usize,
    position: usize,
}

impl StepSequencer {
    /// Creates a sequencer that has not started yet
    pub fn new() -> Self {
        Self::default()
    }

    /// The last step handed out, if any
    pub fn current(&self) -> Option<Step> {
        if self.bucket == 0 {
            None
        } else {
            Some(Step {
                bucket: self.bucket,
                position: self.position,
            })
        }
    }

    /// Advances to the next step
    ///
    /// `capacities` holds the size of each bucket in order. The cursor fills the
    /// current bucket, then moves to position 1 of the following one.
    ///
    /// # Errors
    /// * Returns an error if `capacities` is empty
    /// * Returns an error if the last bucket is already full; the cursor is left as it was
    pub fn next_step(&mut self, capacities: &[usize]) -> Result<Step> {
        if capacities.is_empty() {
            return Err(no_steps_error());
        }

        if self.bucket == 0 {
            self.bucket = 1;
            self.position = 1;
        } else if self.position >= capacities[self.bucket - 1] {
            if self.bucket >= capacities.len() {
                return Err(step_exhausted_error(capacities.iter().sum()));
            }
            self.bucket += 1;
            self.position = 1;
        } else {
            self.position += 1;
        }

        trace!("Next step: bucket {} position {}", self.bucket, self.position);

        Ok(Step {
            bucket: self.bucket,
            position: self.position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn step(bucket: usize, position: usize) -> Step {
        Step { bucket, position }
    }

    #[test]
    fn test_fills_buckets_in_order() {
        let mut sequencer = StepSequencer::new();
        let capacities = [2, 3];

        let steps: Vec<Step> = (0..5)
            .map(|_| sequencer.next_step(&capacities).unwrap())
            .collect();

        assert_eq!(
            steps,
            vec![step(1, 1), step(1, 2), step(2, 1), step(2, 2), step(2, 3)]
        );

        let result = sequencer.next_step(&capacities);
        assert!(
            matches!(result, Err(Error::StepExhausted { capacity: 5 })),
            "Sixth step should exhaust the buckets: {result:?}"
        );
    }

    #[test]
    fn test_exhaustion_leaves_cursor_in_place() {
        let mut sequencer = StepSequencer::new();
        sequencer.next_step(&[1]).unwrap();

        assert!(sequencer.next_step(&[1]).is_err());
        assert!(sequencer.next_step(&[1]).is_err());
        assert_eq!(sequencer.current(), Some(step(1, 1)));
    }

    #[test]
    fn test_no_steps_configured() {
        let mut sequencer = StepSequencer::new();

        let result = sequencer.next_step(&[]);
        assert!(matches!(result, Err(Error::NoStepsConfigured)));
        assert_eq!(sequencer.current(), None, "Failed call must not start the cursor");
    }

    #[test]
    fn test_single_item_buckets() {
        let mut sequencer = StepSequencer::new();
        let capacities = [1, 1, 1];

        assert_eq!(sequencer.next_step(&capacities).unwrap(), step(1, 1));
        assert_eq!(sequencer.next_step(&capacities).unwrap(), step(2, 1));
        assert_eq!(sequencer.next_step(&capacities).unwrap(), step(3, 1));
        assert!(sequencer.next_step(&capacities).is_err());
    }
}
