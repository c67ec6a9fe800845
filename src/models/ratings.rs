//! Audience ratings table.
//!
//! Maps each program to an ordered sequence of per-slot ratings. The
//! sequence may be shorter than the slot sequence it is scored against:
//! lookups wrap modulo its length, so rating samples are reused cyclically.
//!
//! # Invariants
//! - Program identifiers are unique and non-empty.
//! - Every rating sequence is non-empty.
//! - Every rating is finite and non-negative.
//!
//! Insertion order is preserved and defines the program catalogue order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, ScheduleError};

/// One program's rating samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRatings {
    /// Program identifier.
    pub program: String,
    /// Ratings per representative slot index.
    pub ratings: Vec<f64>,
}

/// Program → per-slot ratings.
///
/// Read-only once loaded; share it by reference across concurrent runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<ProgramRatings>", into = "Vec<ProgramRatings>")]
pub struct RatingsTable {
    entries: Vec<ProgramRatings>,
    index: HashMap<String, usize>,
}

impl RatingsTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(program, ratings)` pairs.
    ///
    /// Fails on the first invalid entry.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (program, ratings) in entries {
            table.insert(program, ratings)?;
        }
        Ok(table)
    }

    /// Adds a program.
    ///
    /// Rejects empty names, duplicates, empty rating sequences, and
    /// negative or non-finite ratings.
    pub fn insert(&mut self, program: impl Into<String>, ratings: Vec<f64>) -> Result<()> {
        let program = program.into();
        if program.trim().is_empty() {
            return Err(ScheduleError::invalid("program name must not be empty"));
        }
        if self.index.contains_key(&program) {
            return Err(ScheduleError::invalid(format!(
                "duplicate program '{program}'"
            )));
        }
        if ratings.is_empty() {
            return Err(ScheduleError::invalid(format!(
                "program '{program}' has no ratings"
            )));
        }
        if let Some(bad) = ratings.iter().find(|r| !r.is_finite() || **r < 0.0) {
            return Err(ScheduleError::invalid(format!(
                "program '{program}' has invalid rating {bad}"
            )));
        }

        self.index.insert(program.clone(), self.entries.len());
        self.entries.push(ProgramRatings { program, ratings });
        Ok(())
    }

    /// Number of programs.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no programs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `program` is present.
    pub fn contains(&self, program: &str) -> bool {
        self.index.contains_key(program)
    }

    /// Raw rating samples for a program.
    pub fn ratings(&self, program: &str) -> Option<&[f64]> {
        self.index
            .get(program)
            .map(|&idx| self.entries[idx].ratings.as_slice())
    }

    /// Rating of `program` at `slot`, wrapping modulo the sample count.
    pub fn rating(&self, program: &str, slot: usize) -> Option<f64> {
        self.ratings(program)
            .map(|samples| samples[slot % samples.len()])
    }

    /// Program identifiers in insertion order.
    pub fn programs(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.program.clone()).collect()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ProgramRatings> {
        self.entries.iter()
    }
}

impl TryFrom<Vec<ProgramRatings>> for RatingsTable {
    type Error = ScheduleError;

    fn try_from(entries: Vec<ProgramRatings>) -> Result<Self> {
        Self::from_entries(entries.into_iter().map(|e| (e.program, e.ratings)))
    }
}

impl From<RatingsTable> for Vec<ProgramRatings> {
    fn from(table: RatingsTable) -> Self {
        table.entries
    }
}
