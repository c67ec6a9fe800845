//! Ratings table import from CSV.
//!
//! Format: one header row, then one row per program. The first column is
//! the program name; every following column is that program's rating for
//! the corresponding representative slot.
//!
//! ```text
//! Type of Program,Hour 6,Hour 7,Hour 8
//! news,0.1,0.1,0.2
//! live_soccer,0.0,0.0,0.0
//! ```
//!
//! Blank trailing cells are ignored, so rows may carry fewer samples than
//! the header announces. Lookups wrap cyclically over whatever is present.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ScheduleError};
use crate::models::RatingsTable;

/// Reads a ratings table from CSV data.
///
/// # Errors
/// - [`ScheduleError::Csv`] for malformed CSV.
/// - [`ScheduleError::RatingsParse`] for non-numeric ratings or rows that
///   the table rejects (empty name, duplicate, no ratings, negative value).
pub fn read_ratings_csv<R: Read>(reader: R) -> Result<RatingsTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(reader));

    let mut table = RatingsTable::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        let mut fields = record.iter();
        let program = fields.next().unwrap_or_default();
        let ratings = fields
            .filter(|cell| !cell.is_empty())
            .map(|cell| {
                cell.parse::<f64>().map_err(|e| ScheduleError::RatingsParse {
                    line,
                    message: format!("invalid rating '{cell}' for '{program}': {e}"),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        table
            .insert(program, ratings)
            .map_err(|e| ScheduleError::RatingsParse {
                line,
                message: e.to_string(),
            })?;
    }

    debug!(programs = table.len(), "ratings table loaded");
    Ok(table)
}

/// Reads a ratings table from a CSV file.
pub fn load_ratings_csv(path: impl AsRef<Path>) -> Result<RatingsTable> {
    let file = File::open(path.as_ref())?;
    read_ratings_csv(file)
}
