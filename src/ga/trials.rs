//! Parallel parameter trials.
//!
//! Runs several independent GA runs over one shared, read-only problem,
//! e.g. to compare crossover and mutation rates. Each trial owns its own
//! population and RNG; results come back in input order.

use rayon::prelude::*;
use tracing::info;

use super::config::RunParameters;
use super::problem::GaProblem;
use super::runner::{GaResult, GaRunner};
use crate::error::Result;

/// Outcome of one trial.
#[derive(Debug)]
pub struct TrialOutcome<T> {
    /// Trial index (0-based, matches input order).
    pub trial: usize,
    /// Parameters the trial ran with.
    pub params: RunParameters,
    /// Run result, or the error that rejected it.
    pub result: Result<GaResult<T>>,
}

/// Runs every parameter set as an independent trial, in parallel.
///
/// A rejected trial does not affect the others.
pub fn run_trials<P>(problem: &P, trials: &[RunParameters]) -> Vec<TrialOutcome<P::Individual>>
where
    P: GaProblem + Sync,
    P::Individual: Send,
{
    info!(trials = trials.len(), "running parameter trials");
    trials
        .par_iter()
        .enumerate()
        .map(|(trial, params)| TrialOutcome {
            trial,
            params: params.clone(),
            result: GaRunner::run(problem, params),
        })
        .collect()
}

/// Index of the best successful trial. Ties go to the earliest trial.
pub fn best_trial<T>(outcomes: &[TrialOutcome<T>]) -> Option<usize> {
    outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().ok().map(|r| (o.trial, r.best_fitness)))
        .fold(None, |best: Option<(usize, f64)>, (trial, fitness)| match best {
            Some((_, b)) if b >= fitness => best,
            _ => Some((trial, fitness)),
        })
        .map(|(trial, _)| trial)
}

/// Runs trials and returns the first failure as an error.
pub fn run_trials_strict<P>(
    problem: &P,
    trials: &[RunParameters],
) -> Result<Vec<GaResult<P::Individual>>>
where
    P: GaProblem + Sync,
    P::Individual: Send,
{
    trials
        .par_iter()
        .map(|params| GaRunner::run(problem, params))
        .collect()
}
