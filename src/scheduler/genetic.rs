//! GA-driven broadcast scheduler.
//!
//! Entry point for callers that hold a ratings table and a slot sequence
//! and want back a best schedule with its score and a per-slot report.

use tracing::warn;

use super::report::ScheduleReport;
use crate::error::Result;
use crate::ga::trials::{run_trials, TrialOutcome};
use crate::ga::{BroadcastProblem, GaRunner, RunParameters};
use crate::models::{RatingsTable, Schedule, TimeSlotSequence};

/// Result of a scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    /// Best schedule found, aligned to the slot sequence.
    pub schedule: Schedule,
    /// Its total rating.
    pub fitness: f64,
    /// Per-slot breakdown.
    pub report: ScheduleReport,
}

/// Genetic broadcast scheduler over a shared ratings table.
///
/// # Example
/// ```
/// use u_broadcast::ga::RunParameters;
/// use u_broadcast::models::{RatingsTable, TimeSlotSequence};
/// use u_broadcast::scheduler::GeneticScheduler;
///
/// let ratings = RatingsTable::from_entries([
///     ("news", vec![0.4, 0.1]),
///     ("movie", vec![0.2, 0.7]),
/// ]).unwrap();
/// let slots = TimeSlotSequence::broadcast_day();
/// let scheduler = GeneticScheduler::new(&ratings, &slots);
///
/// let outcome = scheduler
///     .schedule(&RunParameters::default().with_generations(10).with_seed(1))
///     .unwrap();
/// assert_eq!(outcome.schedule.len(), 18);
/// assert_eq!(outcome.report.entries[0].slot, "06:00");
/// ```
#[derive(Debug, Clone)]
pub struct GeneticScheduler<'a> {
    problem: BroadcastProblem<'a>,
}

impl<'a> GeneticScheduler<'a> {
    /// Creates a scheduler.
    pub fn new(ratings: &'a RatingsTable, slots: &'a TimeSlotSequence) -> Self {
        Self {
            problem: BroadcastProblem::new(ratings, slots),
        }
    }

    /// Runs the GA once and reports the best schedule.
    pub fn schedule(&self, params: &RunParameters) -> Result<ScheduleOutcome> {
        if self.problem.time_slots().is_empty() {
            warn!("scheduling against an empty slot sequence");
        }
        let result = GaRunner::run(&self.problem, params)?;
        self.outcome(result.best, result.best_fitness)
    }

    /// Runs one independent trial per parameter set, in parallel.
    pub fn trials(&self, trials: &[RunParameters]) -> Vec<TrialOutcome<Schedule>> {
        run_trials(&self.problem, trials)
    }

    /// Builds the outcome for a schedule already scored.
    pub fn outcome(&self, schedule: Schedule, fitness: f64) -> Result<ScheduleOutcome> {
        let report = ScheduleReport::calculate(
            &schedule,
            self.problem.ratings(),
            self.problem.time_slots(),
        )?;
        Ok(ScheduleOutcome {
            schedule,
            fitness,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratings() -> RatingsTable {
        RatingsTable::from_entries([
            ("news", vec![0.3, 0.1, 0.2]),
            ("drama", vec![0.1, 0.5]),
            ("sports", vec![0.4, 0.2, 0.1, 0.6]),
        ])
        .unwrap()
    }

    #[test]
    fn test_schedule_report_matches_fitness() {
        let ratings = ratings();
        let slots = TimeSlotSequence::broadcast_day();
        let scheduler = GeneticScheduler::new(&ratings, &slots);
        let outcome = scheduler
            .schedule(&RunParameters::default().with_generations(20).with_seed(42))
            .unwrap();

        assert_eq!(outcome.schedule.len(), slots.len());
        assert!((outcome.report.total_rating - outcome.fitness).abs() < 1e-9);
        assert_eq!(outcome.report.entries.last().unwrap().slot, "23:00");
    }

    #[test]
    fn test_empty_ratings_rejected() {
        let ratings = RatingsTable::new();
        let slots = TimeSlotSequence::broadcast_day();
        let err = GeneticScheduler::new(&ratings, &slots)
            .schedule(&RunParameters::default())
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_empty_slots_scores_zero() {
        let ratings = ratings();
        let slots = TimeSlotSequence::default();
        let outcome = GeneticScheduler::new(&ratings, &slots)
            .schedule(&RunParameters::default().with_generations(2).with_seed(1))
            .unwrap();
        assert!(outcome.schedule.is_empty());
        assert_eq!(outcome.fitness, 0.0);
    }

    #[test]
    fn test_trials_through_scheduler() {
        let ratings = ratings();
        let slots = TimeSlotSequence::broadcast_day();
        let scheduler = GeneticScheduler::new(&ratings, &slots);
        let params: Vec<_> = (0..3)
            .map(|i| RunParameters::default().with_generations(5).with_seed(i))
            .collect();

        let outcomes = scheduler.trials(&params);
        assert_eq!(outcomes.len(), 3);
        for outcome in outcomes {
            let result = outcome.result.unwrap();
            let built = scheduler.outcome(result.best, result.best_fitness).unwrap();
            assert_eq!(built.report.entries.len(), 18);
        }
    }
}
