//! Random initial population.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::error::{Result, ScheduleError};
use crate::models::{Schedule, TimeSlotSequence};

/// Creates one schedule with every gene drawn uniformly, with replacement,
/// from `programs`.
///
/// Returns an empty schedule if `programs` is empty; callers validate the
/// catalogue beforehand.
pub fn random_schedule<R: Rng>(programs: &[String], slot_count: usize, rng: &mut R) -> Schedule {
    let genes = (0..slot_count)
        .filter_map(|_| programs.choose(rng).cloned())
        .collect();
    Schedule::new(genes)
}

/// Produces `population_size` independent random schedules, each one gene
/// per slot in `time_slots`.
///
/// Individuals are not required to be distinct.
///
/// # Errors
/// [`ScheduleError::InvalidArgument`] if `programs` is empty.
pub fn initialize_population<R: Rng>(
    population_size: usize,
    programs: &[String],
    time_slots: &TimeSlotSequence,
    rng: &mut R,
) -> Result<Vec<Schedule>> {
    if programs.is_empty() {
        return Err(ScheduleError::invalid(
            "cannot initialize a population from an empty program catalogue",
        ));
    }
    Ok((0..population_size)
        .map(|_| random_schedule(programs, time_slots.len(), rng))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn programs() -> Vec<String> {
        vec!["news".into(), "drama".into(), "sports".into()]
    }

    #[test]
    fn test_population_shape() {
        let mut rng = SmallRng::seed_from_u64(42);
        let slots = TimeSlotSequence::broadcast_day();
        let population = initialize_population(20, &programs(), &slots, &mut rng).unwrap();

        assert_eq!(population.len(), 20);
        for schedule in &population {
            assert_eq!(schedule.len(), 18);
            assert!(schedule.genes().iter().all(|g| programs().contains(g)));
        }
    }

    #[test]
    fn test_empty_catalogue_rejected() {
        let mut rng = SmallRng::seed_from_u64(42);
        let slots = TimeSlotSequence::broadcast_day();
        let err = initialize_population(5, &[], &slots, &mut rng).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_same_seed_same_population() {
        let slots = TimeSlotSequence::hourly(6, 12);
        let a = initialize_population(5, &programs(), &slots, &mut SmallRng::seed_from_u64(7))
            .unwrap();
        let b = initialize_population(5, &programs(), &slots, &mut SmallRng::seed_from_u64(7))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_slots_give_empty_schedules() {
        let mut rng = SmallRng::seed_from_u64(42);
        let population =
            initialize_population(3, &programs(), &TimeSlotSequence::default(), &mut rng).unwrap();
        assert!(population.iter().all(Schedule::is_empty));
    }
}
