//! Generational GA loop with elitism.
//!
//! # Phases
//!
//! `Initializing → Evaluating → SelectingAndBreeding → … → Terminated`
//!
//! Each generation:
//! 1. Evaluate and rank the population (descending, stable).
//! 2. Copy the top `elitism_size` individuals into the next generation.
//! 3. Until the next generation is full: draw two parents from the breeding
//!    pool; cross them with probability `crossover_rate` (else copy them);
//!    mutate each child independently with probability `mutation_rate`;
//!    append both children.
//! 4. Truncate to `population_size`. When the last pair overshoots, the
//!    second child (and any mutation applied to it) is discarded.
//!
//! The loop runs exactly `generations` cycles; there is no convergence stop.
//! The result is the first highest-scoring individual of the final population.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::config::RunParameters;
use super::problem::GaProblem;
use super::selection::{best_of, Ranked, SelectionPolicy};
use crate::error::{Result, ScheduleError};
use crate::validation::{into_schedule_error, validate_parameters};

/// Fitness summary of one ranked generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Generation index (0-based).
    pub generation: usize,
    /// Highest fitness in the generation.
    pub best_fitness: f64,
    /// Mean fitness of the generation.
    pub mean_fitness: f64,
}

impl GenerationStats {
    fn from_ranked<T>(generation: usize, ranked: &[Ranked<T>]) -> Self {
        let best_fitness = ranked.first().map_or(f64::NEG_INFINITY, |r| r.fitness);
        let mean_fitness = if ranked.is_empty() {
            0.0
        } else {
            ranked.iter().map(|r| r.fitness).sum::<f64>() / ranked.len() as f64
        };
        Self {
            generation,
            best_fitness,
            mean_fitness,
        }
    }
}

/// Outcome of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<T> {
    /// Best individual of the final population.
    pub best: T,
    /// Its fitness.
    pub best_fitness: f64,
    /// Generations executed.
    pub generations: usize,
    /// Per-generation statistics, one entry per executed generation.
    pub history: Vec<GenerationStats>,
}

/// Runs the generational GA.
pub struct GaRunner;

impl GaRunner {
    /// Runs with an RNG seeded from `params.seed`, or from the OS if unset.
    ///
    /// Input is validated before the RNG is created.
    pub fn run<P: GaProblem>(
        problem: &P,
        params: &RunParameters,
    ) -> Result<GaResult<P::Individual>> {
        Self::validate(problem, params)?;
        let mut rng = match params.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::evolve(problem, params, &mut rng)
    }

    /// Runs with a caller-supplied RNG.
    ///
    /// Parameters and the problem are validated before the first draw from
    /// `rng`; invalid input yields [`ScheduleError::InvalidArgument`].
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        params: &RunParameters,
        rng: &mut R,
    ) -> Result<GaResult<P::Individual>> {
        Self::validate(problem, params)?;
        Self::evolve(problem, params, rng)
    }

    fn validate<P: GaProblem>(problem: &P, params: &RunParameters) -> Result<()> {
        validate_parameters(params).map_err(into_schedule_error)?;
        problem.validate().map_err(into_schedule_error)
    }

    fn evolve<P: GaProblem, R: Rng>(
        problem: &P,
        params: &RunParameters,
        rng: &mut R,
    ) -> Result<GaResult<P::Individual>> {
        info!(
            generations = params.generations,
            population_size = params.population_size,
            crossover_rate = params.crossover_rate,
            mutation_rate = params.mutation_rate,
            elitism_size = params.elitism_size,
            breeding_pool_size = params.breeding_pool_size,
            "starting GA run"
        );

        let policy = SelectionPolicy::new(params.elitism_size, params.breeding_pool_size);
        let mut population = problem.initial_population(params.population_size, rng)?;
        let mut history = Vec::with_capacity(params.generations);

        for generation in 0..params.generations {
            let scores = Self::evaluate_all(problem, &population)?;
            let ranked = policy.rank(population, scores);

            let stats = GenerationStats::from_ranked(generation, &ranked);
            debug!(
                generation,
                best_fitness = stats.best_fitness,
                mean_fitness = stats.mean_fitness,
                "generation ranked"
            );
            history.push(stats);

            population = Self::breed(problem, params, &policy, &ranked, rng);
        }

        let scores = Self::evaluate_all(problem, &population)?;
        let final_population: Vec<Ranked<P::Individual>> = population
            .into_iter()
            .zip(scores)
            .map(|(individual, fitness)| Ranked {
                individual,
                fitness,
            })
            .collect();
        let best = best_of(&final_population)
            .ok_or_else(|| ScheduleError::invalid("final population is empty"))?;

        info!(best_fitness = best.fitness, "GA run finished");

        Ok(GaResult {
            best: best.individual.clone(),
            best_fitness: best.fitness,
            generations: params.generations,
            history,
        })
    }

    fn evaluate_all<P: GaProblem>(problem: &P, population: &[P::Individual]) -> Result<Vec<f64>> {
        population.iter().map(|i| problem.evaluate(i)).collect()
    }

    /// Builds the next generation from a ranked one.
    fn breed<P: GaProblem, R: Rng>(
        problem: &P,
        params: &RunParameters,
        policy: &SelectionPolicy,
        ranked: &[Ranked<P::Individual>],
        rng: &mut R,
    ) -> Vec<P::Individual> {
        let mut next = Vec::with_capacity(params.population_size + 1);
        next.extend(policy.elites(ranked));
        let pool = policy.breeding_pool(ranked);

        while next.len() < params.population_size {
            let Some((parent1, parent2)) = policy.select_parents(pool, rng) else {
                break;
            };

            let (mut child1, mut child2) = if rng.random_bool(params.crossover_rate) {
                problem.crossover(parent1, parent2, rng)
            } else {
                (parent1.clone(), parent2.clone())
            };

            if rng.random_bool(params.mutation_rate) {
                problem.mutate(&mut child1, rng);
            }
            if rng.random_bool(params.mutation_rate) {
                problem.mutate(&mut child2, rng);
            }

            next.push(child1);
            next.push(child2);
        }

        next.truncate(params.population_size);
        next
    }
}
