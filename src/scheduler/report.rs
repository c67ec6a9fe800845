//! Schedule rating report.
//!
//! Pairs every slot label with its program and rating for presentation.
//!
//! | Field | Definition |
//! |-------|-----------|
//! | Total rating | Sum of per-slot ratings (the fitness) |
//! | Average rating | Total / slot count |
//! | Peak slot | Slot with the highest rating |

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::{RatingsTable, Schedule, TimeSlotSequence};

/// One slot of a schedule report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotEntry {
    /// Slot label, e.g. `"06:00"`.
    pub slot: String,
    /// Program broadcast in the slot.
    pub program: String,
    /// Rating earned in the slot.
    pub rating: f64,
}

/// Per-slot breakdown of a schedule's rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Entries in slot order.
    pub entries: Vec<SlotEntry>,
    /// Sum of ratings.
    pub total_rating: f64,
    /// Mean rating per slot (0 for an empty schedule).
    pub avg_rating: f64,
}

impl ScheduleReport {
    /// Builds a report for `schedule`.
    ///
    /// Slots beyond the end of `slots` are labelled by their index.
    ///
    /// # Errors
    /// [`ScheduleError::UnknownProgram`] if a gene is not in `ratings`.
    pub fn calculate(
        schedule: &Schedule,
        ratings: &RatingsTable,
        slots: &TimeSlotSequence,
    ) -> Result<Self> {
        let entries = schedule
            .iter()
            .map(|(i, program)| {
                let rating =
                    ratings
                        .rating(program, i)
                        .ok_or_else(|| ScheduleError::UnknownProgram {
                            program: program.to_string(),
                            slot: i,
                        })?;
                let slot = slots
                    .get(i)
                    .map_or_else(|| format!("#{i}"), |s| s.label.clone());
                Ok(SlotEntry {
                    slot,
                    program: program.to_string(),
                    rating,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let total_rating: f64 = entries.iter().map(|e| e.rating).sum();
        let avg_rating = if entries.is_empty() {
            0.0
        } else {
            total_rating / entries.len() as f64
        };

        Ok(Self {
            entries,
            total_rating,
            avg_rating,
        })
    }

    /// Slot with the highest rating (first on tie).
    pub fn peak_slot(&self) -> Option<&SlotEntry> {
        self.entries.iter().fold(None, |best, e| match best {
            Some(b) if b.rating >= e.rating => Some(b),
            _ => Some(e),
        })
    }
}
