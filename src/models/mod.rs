//! Broadcast scheduling domain models.
//!
//! | Type | Role |
//! |------|------|
//! | `RatingsTable` | Program → per-slot audience ratings |
//! | `TimeSlotSequence` | Fixed hourly slots for one broadcast day |
//! | `Schedule` | One program per slot (a GA individual) |

mod ratings;
mod schedule;
mod time_slot;

pub use ratings::{ProgramRatings, RatingsTable};
pub use schedule::Schedule;
pub use time_slot::{TimeSlot, TimeSlotSequence};
