//! GA problem definition for broadcast scheduling.
//!
//! [`GaProblem`] is the seam between the generic generational loop in
//! [`GaRunner`](super::GaRunner) and a concrete encoding. [`BroadcastProblem`]
//! implements it for program-per-slot schedules scored by audience rating.

use rand::Rng;

use super::fitness::FitnessEvaluator;
use super::operators::GeneticOperators;
use super::population::{initialize_population, random_schedule};
use crate::error::Result;
use crate::models::{RatingsTable, Schedule, TimeSlotSequence};
use crate::validation::{validate_catalogue, ValidationResult};

/// A problem the generational GA can optimize.
///
/// Fitness follows the maximization convention: larger is better.
pub trait GaProblem {
    /// Candidate solution type.
    type Individual: Clone;

    /// Checks that the problem can seed a run. Called before any random draw.
    fn validate(&self) -> ValidationResult {
        Ok(())
    }

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Creates generation 0.
    fn initial_population<R: Rng>(
        &self,
        population_size: usize,
        rng: &mut R,
    ) -> Result<Vec<Self::Individual>> {
        Ok((0..population_size)
            .map(|_| self.create_individual(rng))
            .collect())
    }

    /// Scores an individual.
    fn evaluate(&self, individual: &Self::Individual) -> Result<f64>;

    /// Recombines two parents into two new children.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> (Self::Individual, Self::Individual);

    /// Mutates an owned individual in place.
    fn mutate<R: Rng>(&self, individual: &mut Self::Individual, rng: &mut R);
}

/// Broadcast scheduling: assign one program per slot to maximize total rating.
///
/// Borrows the ratings table and slot sequence; both stay read-only for the
/// lifetime of the problem, so one table can back many concurrent runs.
///
/// # Example
/// ```
/// use u_broadcast::ga::{BroadcastProblem, GaRunner, RunParameters};
/// use u_broadcast::models::{RatingsTable, TimeSlotSequence};
///
/// let ratings = RatingsTable::from_entries([
///     ("news", vec![0.3, 0.2]),
///     ("drama", vec![0.1, 0.6]),
/// ]).unwrap();
/// let slots = TimeSlotSequence::hourly(6, 10);
/// let problem = BroadcastProblem::new(&ratings, &slots);
/// let params = RunParameters::default().with_generations(5).with_seed(1);
/// let result = GaRunner::run(&problem, &params).unwrap();
/// assert_eq!(result.best.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct BroadcastProblem<'a> {
    ratings: &'a RatingsTable,
    time_slots: &'a TimeSlotSequence,
    operators: GeneticOperators,
}

impl<'a> BroadcastProblem<'a> {
    /// Creates a problem over `ratings` and `time_slots`.
    ///
    /// The program catalogue is the table's programs in insertion order.
    pub fn new(ratings: &'a RatingsTable, time_slots: &'a TimeSlotSequence) -> Self {
        Self {
            ratings,
            time_slots,
            operators: GeneticOperators::new(ratings.programs()),
        }
    }

    /// The ratings table.
    pub fn ratings(&self) -> &'a RatingsTable {
        self.ratings
    }

    /// The slot sequence.
    pub fn time_slots(&self) -> &'a TimeSlotSequence {
        self.time_slots
    }

    /// The program catalogue genes are drawn from.
    pub fn programs(&self) -> &[String] {
        &self.operators.programs
    }

    /// Crossover and mutation bound to the catalogue.
    pub fn operators(&self) -> &GeneticOperators {
        &self.operators
    }

    /// A fitness evaluator over this problem's ratings.
    pub fn evaluator(&self) -> FitnessEvaluator<'a> {
        FitnessEvaluator::new(self.ratings)
    }
}

impl GaProblem for BroadcastProblem<'_> {
    type Individual = Schedule;

    fn validate(&self) -> ValidationResult {
        validate_catalogue(self.ratings)
    }

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Schedule {
        random_schedule(self.programs(), self.time_slots.len(), rng)
    }

    fn initial_population<R: Rng>(
        &self,
        population_size: usize,
        rng: &mut R,
    ) -> Result<Vec<Schedule>> {
        initialize_population(population_size, self.programs(), self.time_slots, rng)
    }

    fn evaluate(&self, individual: &Schedule) -> Result<f64> {
        self.evaluator().evaluate(individual)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Schedule,
        parent2: &Schedule,
        rng: &mut R,
    ) -> (Schedule, Schedule) {
        self.operators.crossover(parent1, parent2, rng)
    }

    fn mutate<R: Rng>(&self, individual: &mut Schedule, rng: &mut R) {
        self.operators.mutate(individual, rng);
    }
}
