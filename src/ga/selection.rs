//! Ranking, elitism, and truncated breeding-pool selection.
//!
//! # Algorithm
//!
//! 1. Rank individuals by fitness, descending. The sort is stable: equal
//!    scores keep their population order.
//! 2. The top `elitism_size` ranked individuals survive unchanged.
//! 3. The top `breeding_pool_size` ranked individuals (or all of them, if
//!    the population is smaller) form the mating pool. Parents are drawn
//!    from it uniformly and with replacement.

use std::cmp::Ordering;

use rand::prelude::IndexedRandom;
use rand::Rng;

/// An individual paired with its fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    /// The individual.
    pub individual: T,
    /// Its fitness (larger is better).
    pub fitness: f64,
}

/// Elitism and breeding-pool sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// Individuals copied verbatim into the next generation.
    pub elitism_size: usize,
    /// Top-ranked individuals eligible as parents.
    pub breeding_pool_size: usize,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            elitism_size: 2,
            breeding_pool_size: 10,
        }
    }
}

impl SelectionPolicy {
    /// Creates a policy.
    pub fn new(elitism_size: usize, breeding_pool_size: usize) -> Self {
        Self {
            elitism_size,
            breeding_pool_size,
        }
    }

    /// Pairs individuals with scores and sorts them best-first (stable).
    ///
    /// # Panics
    /// If `population` and `scores` differ in length.
    pub fn rank<T>(&self, population: Vec<T>, scores: Vec<f64>) -> Vec<Ranked<T>> {
        assert_eq!(population.len(), scores.len(), "one score per individual");
        let mut ranked: Vec<Ranked<T>> = population
            .into_iter()
            .zip(scores)
            .map(|(individual, fitness)| Ranked {
                individual,
                fitness,
            })
            .collect();
        ranked.sort_by(|a, b| b.fitness.partial_cmp(&a.fitness).unwrap_or(Ordering::Equal));
        ranked
    }

    /// Copies of the top `elitism_size` individuals.
    pub fn elites<T: Clone>(&self, ranked: &[Ranked<T>]) -> Vec<T> {
        ranked
            .iter()
            .take(self.elitism_size)
            .map(|r| r.individual.clone())
            .collect()
    }

    /// The restricted mating pool.
    pub fn breeding_pool<'a, T>(&self, ranked: &'a [Ranked<T>]) -> &'a [Ranked<T>] {
        &ranked[..self.breeding_pool_size.min(ranked.len())]
    }

    /// Draws two parents independently, with replacement.
    ///
    /// Returns `None` only if `pool` is empty.
    pub fn select_parents<'a, T, R: Rng>(
        &self,
        pool: &'a [Ranked<T>],
        rng: &mut R,
    ) -> Option<(&'a T, &'a T)> {
        let first = pool.choose(rng)?;
        let second = pool.choose(rng)?;
        Some((&first.individual, &second.individual))
    }
}

/// The first individual with the highest fitness.
///
/// Ties resolve to the earliest position.
pub fn best_of<T>(ranked: &[Ranked<T>]) -> Option<&Ranked<T>> {
    ranked.iter().fold(None, |best, r| match best {
        Some(b) if b.fitness >= r.fitness => Some(b),
        _ => Some(r),
    })
}
