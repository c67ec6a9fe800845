//! Time slot models.
//!
//! A broadcast day is divided into fixed-width slots. Each slot carries its
//! start hour and a display label; the slot's position in the sequence is
//! the gene index used for rating lookups.

use serde::{Deserialize, Serialize};

/// A single fixed-width slot (one hour).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Start hour (0..24).
    pub hour: u32,
    /// Display label, e.g. `"06:00"`.
    pub label: String,
}

impl TimeSlot {
    /// Creates an hourly slot labelled `HH:00`.
    pub fn hourly(hour: u32) -> Self {
        Self {
            hour,
            label: format!("{hour:02}:00"),
        }
    }

    /// Overrides the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Ordered, immutable sequence of slots for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlotSequence {
    slots: Vec<TimeSlot>,
}

impl TimeSlotSequence {
    /// First hour of the default broadcast day.
    pub const DEFAULT_START_HOUR: u32 = 6;
    /// Exclusive end hour of the default broadcast day.
    pub const DEFAULT_END_HOUR: u32 = 24;

    /// Creates a sequence from explicit slots.
    pub fn new(slots: Vec<TimeSlot>) -> Self {
        Self { slots }
    }

    /// Hourly slots for `start..end`.
    pub fn hourly(start: u32, end: u32) -> Self {
        Self::new((start..end).map(TimeSlot::hourly).collect())
    }

    /// The 06:00–23:00 broadcast day (18 slots).
    pub fn broadcast_day() -> Self {
        Self::hourly(Self::DEFAULT_START_HOUR, Self::DEFAULT_END_HOUR)
    }

    /// Number of slots (genes per schedule).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the sequence has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot at `index`.
    pub fn get(&self, index: usize) -> Option<&TimeSlot> {
        self.slots.get(index)
    }

    /// Iterates over slots in order.
    pub fn iter(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter()
    }

    /// Slot labels in order.
    pub fn labels(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.label.as_str()).collect()
    }
}
