//! Schedule (individual) model.
//!
//! A schedule assigns one program to each time slot. Position `i` holds the
//! program broadcast in slot `i`. Programs may repeat across slots.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered program-per-slot assignment.
///
/// Length always equals the slot sequence it was built for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    programs: Vec<String>,
}

impl Schedule {
    /// Creates a schedule from program identifiers in slot order.
    pub fn new(programs: Vec<String>) -> Self {
        Self { programs }
    }

    /// Number of slots (genes).
    #[inline]
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// Whether the schedule has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Program in `slot`.
    pub fn get(&self, slot: usize) -> Option<&str> {
        self.programs.get(slot).map(|s| s.as_str())
    }

    /// Replaces the program in `slot`, returning the previous one.
    ///
    /// # Panics
    /// If `slot` is out of range.
    pub fn set(&mut self, slot: usize, program: impl Into<String>) -> String {
        std::mem::replace(&mut self.programs[slot], program.into())
    }

    /// Genes in slot order.
    pub fn genes(&self) -> &[String] {
        &self.programs
    }

    /// `(slot, program)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.programs.iter().map(|p| p.as_str()).enumerate()
    }
}

impl Index<usize> for Schedule {
    type Output = str;

    fn index(&self, slot: usize) -> &str {
        &self.programs[slot]
    }
}

impl From<Vec<String>> for Schedule {
    fn from(programs: Vec<String>) -> Self {
        Self::new(programs)
    }
}

impl<'a> From<Vec<&'a str>> for Schedule {
    fn from(programs: Vec<&'a str>) -> Self {
        Self::new(programs.into_iter().map(String::from).collect())
    }
}
