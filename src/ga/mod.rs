//! GA-based broadcast schedule optimization.
//!
//! A generational genetic algorithm with elitism and a truncated breeding
//! pool, specialized for program-per-slot schedules.
//!
//! # Encoding
//!
//! One gene per time slot; each gene is a program identifier drawn from the
//! ratings table. Programs may repeat.
//!
//! # Submodules
//!
//! - [`operators`]: single-point crossover and point mutation
//! - [`selection`]: ranking, elitism, breeding pool
//! - [`trials`]: independent parameter trials in parallel
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"

mod config;
mod fitness;
pub mod operators;
mod population;
mod problem;
mod runner;
pub mod selection;
pub mod trials;

pub use config::RunParameters;
pub use fitness::FitnessEvaluator;
pub use population::{initialize_population, random_schedule};
pub use problem::{BroadcastProblem, GaProblem};
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::SelectionPolicy;
