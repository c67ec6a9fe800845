//! Broadcast schedulers.
//!
//! - [`GeneticScheduler`]: runs the GA over a ratings table and slot sequence
//!   and returns the best schedule with a per-slot [`ScheduleReport`].

mod genetic;
mod report;

pub use genetic::{GeneticScheduler, ScheduleOutcome};
pub use report::{ScheduleReport, SlotEntry};
