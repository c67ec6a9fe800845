//! Error types for broadcast scheduling.
//!
//! Two classes matter to callers:
//! - [`ScheduleError::InvalidArgument`]: rejected input, raised before a run
//!   performs any work.
//! - [`ScheduleError::UnknownProgram`]: a schedule references a program the
//!   ratings table does not know. This is a contract violation inside the
//!   optimizer, not a user-facing condition.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Input rejected before optimization starts.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A gene references a program missing from the ratings table.
    #[error("Unknown program '{program}' at slot {slot}")]
    UnknownProgram {
        /// Offending program identifier.
        program: String,
        /// Slot index (0-based) where it was found.
        slot: usize,
    },

    /// A ratings row could not be interpreted.
    #[error("Ratings parse error at line {line}: {message}")]
    RatingsParse {
        /// 1-based line number in the source.
        line: u64,
        /// Human-readable description.
        message: String,
    },

    /// CSV reader failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO failure while opening a ratings source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScheduleError {
    /// Shorthand for [`ScheduleError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Whether this error belongs to the invalid-argument class.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ScheduleError::invalid("population_size must be at least 2");
        assert_eq!(
            err.to_string(),
            "Invalid argument: population_size must be at least 2"
        );
        assert!(err.is_invalid_argument());

        let err = ScheduleError::UnknownProgram {
            program: "news".into(),
            slot: 3,
        };
        assert_eq!(err.to_string(), "Unknown program 'news' at slot 3");
        assert!(!err.is_invalid_argument());
    }
}
