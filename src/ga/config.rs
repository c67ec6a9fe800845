//! Run parameters for the genetic algorithm.
//!
//! Passed explicitly into every run; there is no ambient configuration.

use serde::{Deserialize, Serialize};

/// Parameters of a single GA run.
///
/// Immutable for the duration of a run. Deserializes with defaults for
/// any missing field.
///
/// # Example
/// ```
/// use u_broadcast::ga::RunParameters;
///
/// let params = RunParameters::default()
///     .with_generations(50)
///     .with_crossover_rate(0.9)
///     .with_seed(7);
/// assert_eq!(params.population_size, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunParameters {
    /// Number of generational cycles (fixed budget, no early stop).
    pub generations: usize,
    /// Individuals per generation.
    pub population_size: usize,
    /// Probability of recombining a selected parent pair.
    pub crossover_rate: f64,
    /// Probability of mutating each child, applied independently.
    pub mutation_rate: f64,
    /// Top-ranked individuals copied unchanged into the next generation.
    pub elitism_size: usize,
    /// Top-ranked individuals eligible as parents.
    pub breeding_pool_size: usize,
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for RunParameters {
    fn default() -> Self {
        Self {
            generations: 100,
            population_size: 50,
            crossover_rate: 0.8,
            mutation_rate: 0.02,
            elitism_size: 2,
            breeding_pool_size: 10,
            seed: None,
        }
    }
}

impl RunParameters {
    /// Sets the generation count.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-child mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of elites carried over each generation.
    pub fn with_elitism_size(mut self, elitism_size: usize) -> Self {
        self.elitism_size = elitism_size;
        self
    }

    /// Sets the breeding pool size.
    pub fn with_breeding_pool_size(mut self, size: usize) -> Self {
        self.breeding_pool_size = size;
        self
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = RunParameters::default();
        assert_eq!(p.generations, 100);
        assert_eq!(p.population_size, 50);
        assert_eq!(p.elitism_size, 2);
        assert_eq!(p.breeding_pool_size, 10);
        assert!((p.crossover_rate - 0.8).abs() < f64::EPSILON);
        assert!((p.mutation_rate - 0.02).abs() < f64::EPSILON);
        assert_eq!(p.seed, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let p: RunParameters =
            serde_json::from_str(r#"{"crossover_rate": 0.6, "seed": 3}"#).unwrap();
        assert!((p.crossover_rate - 0.6).abs() < f64::EPSILON);
        assert_eq!(p.seed, Some(3));
        assert_eq!(p.generations, 100);
    }
}
