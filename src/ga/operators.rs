//! Genetic operators for broadcast schedules.
//!
//! - **Crossover**: single-point. Parents are borrowed and children are new
//!   values, so a selected parent (or elite) is never modified.
//! - **Mutation**: single-gene reassignment, applied in place to a schedule
//!   the caller owns.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_broadcast::ga::operators::GeneticOperators;
//! use u_broadcast::models::Schedule;
//!
//! let ops = GeneticOperators::new(vec!["A".into(), "B".into()]);
//! let mut rng = SmallRng::seed_from_u64(1);
//! let p1 = Schedule::from(vec!["A", "A", "A", "A"]);
//! let p2 = Schedule::from(vec!["B", "B", "B", "B"]);
//! let (c1, c2) = ops.crossover(&p1, &p2, &mut rng);
//! assert_eq!(c1.len(), 4);
//! assert_eq!(c2.len(), 4);
//! ```

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::models::Schedule;

/// Minimum parent length for which a crossover point exists in `[1, len-2]`.
pub const MIN_CROSSOVER_LEN: usize = 3;

/// Single-point crossover.
///
/// If either parent has fewer than [`MIN_CROSSOVER_LEN`] genes, returns
/// copies of the parents. Otherwise picks `point` uniformly in
/// `[1, len-2]` and returns `p1[..point] + p2[point..]` and
/// `p2[..point] + p1[point..]`.
///
/// Parents are expected to have equal length; if they differ, the shorter
/// length bounds the crossover point and each child keeps its tail donor's
/// remaining genes.
pub fn single_point_crossover<R: Rng>(
    p1: &Schedule,
    p2: &Schedule,
    rng: &mut R,
) -> (Schedule, Schedule) {
    let len = p1.len().min(p2.len());
    if len < MIN_CROSSOVER_LEN {
        return (p1.clone(), p2.clone());
    }
    let point = rng.random_range(1..=len - 2);
    (splice(p1, p2, point), splice(p2, p1, point))
}

fn splice(head: &Schedule, tail: &Schedule, point: usize) -> Schedule {
    let genes = head.genes()[..point]
        .iter()
        .chain(&tail.genes()[point..])
        .cloned()
        .collect();
    Schedule::new(genes)
}

/// Point mutation: reassigns one random slot to a random catalogue program.
///
/// The new program is drawn independently of the old one, so the mutation
/// may leave the schedule unchanged. No-op on an empty schedule or empty
/// catalogue. Returns the mutated slot index, if any.
pub fn point_mutation<R: Rng>(
    schedule: &mut Schedule,
    programs: &[String],
    rng: &mut R,
) -> Option<usize> {
    if schedule.is_empty() || programs.is_empty() {
        return None;
    }
    let slot = rng.random_range(0..schedule.len());
    let program = programs.choose(rng)?;
    schedule.set(slot, program.clone());
    Some(slot)
}

/// Crossover and mutation bound to a program catalogue.
///
/// [`BroadcastProblem`](super::BroadcastProblem) holds one and routes its
/// `crossover` and `mutate` through it.
#[derive(Debug, Clone)]
pub struct GeneticOperators {
    /// Programs that mutation may draw from.
    pub programs: Vec<String>,
}

impl GeneticOperators {
    /// Creates operators over `programs`.
    pub fn new(programs: Vec<String>) -> Self {
        Self { programs }
    }

    /// Performs single-point crossover.
    pub fn crossover<R: Rng>(
        &self,
        p1: &Schedule,
        p2: &Schedule,
        rng: &mut R,
    ) -> (Schedule, Schedule) {
        single_point_crossover(p1, p2, rng)
    }

    /// Mutates `schedule` in place.
    pub fn mutate<R: Rng>(&self, schedule: &mut Schedule, rng: &mut R) {
        point_mutation(schedule, &self.programs, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn catalogue() -> Vec<String> {
        vec!["A".into(), "B".into(), "C".into()]
    }

    #[test]
    fn test_crossover_splices_at_one_point() {
        let mut rng = SmallRng::seed_from_u64(42);
        let p1 = Schedule::from(vec!["A", "A", "A", "A", "A"]);
        let p2 = Schedule::from(vec!["B", "B", "B", "B", "B"]);

        for _ in 0..50 {
            let (c1, c2) = single_point_crossover(&p1, &p2, &mut rng);
            assert_eq!(c1.len(), 5);
            assert_eq!(c2.len(), 5);

            let point = c1.genes().iter().take_while(|g| *g == "A").count();
            assert!((1..=3).contains(&point));
            assert!(c1.genes()[point..].iter().all(|g| g == "B"));
            assert!(c2.genes()[..point].iter().all(|g| g == "B"));
            assert!(c2.genes()[point..].iter().all(|g| g == "A"));
        }
    }

    #[test]
    fn test_crossover_leaves_parents_untouched() {
        let mut rng = SmallRng::seed_from_u64(42);
        let p1 = Schedule::from(vec!["A", "B", "C", "A"]);
        let p2 = Schedule::from(vec!["C", "C", "B", "B"]);
        let _ = single_point_crossover(&p1, &p2, &mut rng);
        assert_eq!(p1, Schedule::from(vec!["A", "B", "C", "A"]));
        assert_eq!(p2, Schedule::from(vec!["C", "C", "B", "B"]));
    }

    #[test]
    fn test_crossover_short_parents_copied() {
        let mut rng = SmallRng::seed_from_u64(42);
        let p1 = Schedule::from(vec!["A", "B"]);
        let p2 = Schedule::from(vec!["C", "C"]);
        let (c1, c2) = single_point_crossover(&p1, &p2, &mut rng);
        assert_eq!(c1, p1);
        assert_eq!(c2, p2);
    }

    #[test]
    fn test_crossover_minimum_length_uses_middle_point() {
        let mut rng = SmallRng::seed_from_u64(42);
        let p1 = Schedule::from(vec!["A", "A", "A"]);
        let p2 = Schedule::from(vec!["B", "B", "B"]);
        let (c1, c2) = single_point_crossover(&p1, &p2, &mut rng);
        assert_eq!(c1, Schedule::from(vec!["A", "B", "B"]));
        assert_eq!(c2, Schedule::from(vec!["B", "A", "A"]));
    }

    #[test]
    fn test_mutation_changes_at_most_one_gene() {
        let mut rng = SmallRng::seed_from_u64(42);
        let original = Schedule::from(vec!["A", "A", "A", "A", "A", "A"]);

        for _ in 0..50 {
            let mut schedule = original.clone();
            let slot = point_mutation(&mut schedule, &catalogue(), &mut rng).unwrap();
            assert_eq!(schedule.len(), original.len());
            let diffs = schedule
                .genes()
                .iter()
                .zip(original.genes())
                .filter(|(a, b)| a != b)
                .count();
            assert!(diffs <= 1);
            assert!(catalogue().contains(&schedule.genes()[slot]));
        }
    }

    #[test]
    fn test_mutation_eventually_changes_gene() {
        let mut rng = SmallRng::seed_from_u64(42);
        let original = Schedule::from(vec!["A", "A", "A"]);
        let changed = (0..50).any(|_| {
            let mut schedule = original.clone();
            point_mutation(&mut schedule, &catalogue(), &mut rng);
            schedule != original
        });
        assert!(changed);
    }

    #[test]
    fn test_mutation_empty_schedule_noop() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut schedule = Schedule::default();
        assert_eq!(point_mutation(&mut schedule, &catalogue(), &mut rng), None);
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_operators_struct_delegates() {
        let ops = GeneticOperators::new(vec!["X".into()]);
        let mut rng = SmallRng::seed_from_u64(42);
        let mut schedule = Schedule::from(vec!["A", "A"]);
        ops.mutate(&mut schedule, &mut rng);
        assert_eq!(schedule.genes().iter().filter(|g| *g == "X").count(), 1);
    }
}
