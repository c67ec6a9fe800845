//! Broadcast program scheduling for the U-Engine ecosystem.
//!
//! Assigns a catalogue of programs to a fixed sequence of hourly slots so as
//! to maximize total audience rating, using a generational genetic algorithm
//! with elitism.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `RatingsTable`, `TimeSlotSequence`, `Schedule`
//! - **`ga`**: Fitness, initialization, crossover/mutation, selection, GA loop
//! - **`scheduler`**: `GeneticScheduler` facade and per-slot reports
//! - **`loader`**: CSV ratings import
//! - **`validation`**: Run parameter and catalogue checks
//!
//! # Determinism
//!
//! All randomness flows through an injected `rand::Rng`. Setting
//! `RunParameters::seed` makes a run reproducible.
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"
//! - Holland (1975), "Adaptation in Natural and Artificial Systems"

pub mod error;
pub mod ga;
pub mod loader;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, ScheduleError};
