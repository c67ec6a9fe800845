//! Input validation for broadcast scheduling runs.
//!
//! Checks run parameters and the program catalogue before any generation
//! executes. Detects:
//! - Empty program catalogue
//! - Non-positive generation count or undersized population
//! - Elitism larger than the population
//! - Rates outside [0, 1]
//! - Empty breeding pool

use crate::error::ScheduleError;
use crate::ga::RunParameters;
use crate::models::RatingsTable;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No programs to schedule.
    EmptyCatalogue,
    /// A count parameter is zero or too small.
    InvalidCount,
    /// A probability is outside [0, 1] or not finite.
    InvalidRate,
    /// Elitism keeps more individuals than the population holds.
    ElitismExceedsPopulation,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates run parameters.
///
/// Checks:
/// 1. `generations >= 1`
/// 2. `population_size >= 2`
/// 3. `crossover_rate` and `mutation_rate` in [0, 1]
/// 4. `elitism_size <= population_size`
/// 5. `breeding_pool_size >= 1`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_parameters(params: &RunParameters) -> ValidationResult {
    let mut errors = Vec::new();

    if params.generations == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCount,
            "generations must be at least 1",
        ));
    }

    if params.population_size < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCount,
            format!(
                "population_size must be at least 2, got {}",
                params.population_size
            ),
        ));
    }

    for (name, rate) in [
        ("crossover_rate", params.crossover_rate),
        ("mutation_rate", params.mutation_rate),
    ] {
        if !(0.0..=1.0).contains(&rate) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidRate,
                format!("{name} must be within [0, 1], got {rate}"),
            ));
        }
    }

    if params.elitism_size > params.population_size {
        errors.push(ValidationError::new(
            ValidationErrorKind::ElitismExceedsPopulation,
            format!(
                "elitism_size {} exceeds population_size {}",
                params.elitism_size, params.population_size
            ),
        ));
    }

    if params.breeding_pool_size == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCount,
            "breeding_pool_size must be at least 1",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates that a ratings table can seed a run.
pub fn validate_catalogue(ratings: &RatingsTable) -> ValidationResult {
    if ratings.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyCatalogue,
            "ratings table has no programs",
        )]);
    }
    Ok(())
}

/// Collapses validation errors into a single [`ScheduleError::InvalidArgument`].
pub fn into_schedule_error(errors: Vec<ValidationError>) -> ScheduleError {
    let joined = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    ScheduleError::InvalidArgument(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_valid() {
        assert!(validate_parameters(&RunParameters::default()).is_ok());
    }

    #[test]
    fn test_zero_generations() {
        let params = RunParameters::default().with_generations(0);
        let errors = validate_parameters(&params).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidCount);
    }

    #[test]
    fn test_small_population() {
        let params = RunParameters::default()
            .with_population_size(1)
            .with_elitism_size(0);
        let errors = validate_parameters(&params).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidCount);
    }

    #[test]
    fn test_rates_out_of_range() {
        let params = RunParameters::default()
            .with_crossover_rate(1.5)
            .with_mutation_rate(f64::NAN);
        let errors = validate_parameters(&params).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidRate));
    }

    #[test]
    fn test_elitism_exceeds_population() {
        let params = RunParameters::default()
            .with_population_size(4)
            .with_elitism_size(5);
        let errors = validate_parameters(&params).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::ElitismExceedsPopulation);
    }

    #[test]
    fn test_elitism_equal_to_population_allowed() {
        let params = RunParameters::default()
            .with_population_size(4)
            .with_elitism_size(4);
        assert!(validate_parameters(&params).is_ok());
    }

    #[test]
    fn test_empty_breeding_pool() {
        let params = RunParameters::default().with_breeding_pool_size(0);
        let errors = validate_parameters(&params).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidCount);
    }

    #[test]
    fn test_empty_catalogue() {
        let errors = validate_catalogue(&RatingsTable::new()).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyCatalogue);
    }

    #[test]
    fn test_errors_collapse_into_invalid_argument() {
        let params = RunParameters::default()
            .with_generations(0)
            .with_breeding_pool_size(0);
        let err = into_schedule_error(validate_parameters(&params).unwrap_err());
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("generations"));
        assert!(err.to_string().contains("breeding_pool_size"));
    }
}
