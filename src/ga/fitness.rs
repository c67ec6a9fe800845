//! Fitness evaluation.
//!
//! Fitness is the total audience rating of a schedule: for slot `i` holding
//! program `p`, add `ratings[p][i mod len(ratings[p])]`. Larger is better.

use crate::error::{Result, ScheduleError};
use crate::models::{RatingsTable, Schedule};

/// Scores schedules against a borrowed ratings table.
///
/// Stateless; repeated evaluation of the same schedule yields the same score.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    ratings: &'a RatingsTable,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator over `ratings`.
    pub fn new(ratings: &'a RatingsTable) -> Self {
        Self { ratings }
    }

    /// Total rating of `schedule`.
    ///
    /// # Errors
    /// [`ScheduleError::UnknownProgram`] if a gene is not in the table.
    pub fn evaluate(&self, schedule: &Schedule) -> Result<f64> {
        schedule.iter().try_fold(0.0, |total, (slot, program)| {
            self.ratings
                .rating(program, slot)
                .map(|r| total + r)
                .ok_or_else(|| ScheduleError::UnknownProgram {
                    program: program.to_string(),
                    slot,
                })
        })
    }
}
