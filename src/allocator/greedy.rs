//! Greedy first-fit seat allocator.
//!
//! # Algorithm
//!
//! 1. Available seats = universe − disabled − pinned.
//! 2. Drop pinned names from the people pool and from the distanced list.
//! 3. Seed the result with the pinned seats.
//! 4. If any distanced names remain: shuffle the available seats, then for
//!    each distanced name (in order) take the first seat not too close to
//!    any seat already given to a distanced name. No fit → deferred.
//! 5. Deferred names join the regular pool.
//! 6. Shuffle the pool and zip it onto the remaining seats.
//!
//! # Complexity
//! O(s × d²) where s = available seats, d = distanced names.

use std::collections::HashSet;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{AllocationOutcome, AllocationRequest};
use crate::geometry::conflicts_with_any;
use crate::models::{Assignment, SeatLayout};

/// Greedy, non-backtracking seat allocator.
///
/// Holds no state between runs; each call works on private copies of the
/// request's collections.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_seating::allocator::{AllocationRequest, SeatAllocator};
/// use u_seating::models::SeatLayout;
///
/// let people = vec!["A".to_string(), "B".to_string(), "C".to_string()];
/// let request = AllocationRequest::new(people, SeatLayout::grid(2, 2))
///     .with_pre_assigned(0, "A")
///     .with_disabled(1);
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let outcome = SeatAllocator::new().allocate(&request, &mut rng);
///
/// assert_eq!(outcome.assignment.get(0), Some("A"));
/// assert_eq!(outcome.assignment.get(1), None);
/// assert_eq!(outcome.assignment.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SeatAllocator;

impl SeatAllocator {
    /// Creates an allocator.
    pub fn new() -> Self {
        Self
    }

    /// Allocates seats using `rng` for every shuffle.
    pub fn allocate<R: Rng + ?Sized>(
        &self,
        request: &AllocationRequest,
        rng: &mut R,
    ) -> AllocationOutcome {
        let layout = &request.layout;
        let mut available = request.available_seats();

        let pinned_names: HashSet<&str> =
            request.pre_assigned.values().map(|s| s.as_str()).collect();
        let distanced: Vec<&str> = request
            .distanced
            .iter()
            .map(|s| s.as_str())
            .filter(|p| !pinned_names.contains(p))
            .collect();
        let mut pool: Vec<String> = request
            .people
            .iter()
            .filter(|p| !pinned_names.contains(p.as_str()))
            .cloned()
            .collect();

        debug!(
            "allocating {} people over {} seats ({} available, {} pinned, {} distanced)",
            request.people.len(),
            layout.total_seats(),
            available.len(),
            request.pre_assigned.len(),
            distanced.len()
        );

        let mut assignment: Assignment = request
            .pre_assigned
            .iter()
            .map(|(&seat, name)| (seat, name.clone()))
            .collect();

        let mut deferred = Vec::new();
        if !distanced.is_empty() {
            available.shuffle(rng);
            deferred = place_distanced(&distanced, &mut available, layout, &mut assignment);
            if !deferred.is_empty() {
                debug!("deferred distanced names to regular pool: {deferred:?}");
            }
        }

        pool.extend(deferred.iter().cloned());
        pool.shuffle(rng);

        let seated = pool.len().min(available.len());
        let unseated = pool.split_off(seated);
        for (seat, name) in available.into_iter().zip(pool) {
            assignment.assign(seat, name);
        }

        if !unseated.is_empty() {
            debug!("{} people left unseated: {unseated:?}", unseated.len());
        }

        AllocationOutcome {
            assignment,
            deferred,
            unseated,
        }
    }

    /// Allocates seats with a fresh thread-local entropy source.
    pub fn allocate_with_entropy(&self, request: &AllocationRequest) -> AllocationOutcome {
        self.allocate(request, &mut rand::rng())
    }
}

/// Allocates seats and returns only the assignment.
pub fn allocate<R: Rng + ?Sized>(request: &AllocationRequest, rng: &mut R) -> Assignment {
    SeatAllocator::new().allocate(request, rng).assignment
}

/// First-fit placement of distanced names over `seats` (already shuffled).
///
/// Placed seats are removed from `seats`. Returns the names that found no
/// conflict-free seat, in input order.
fn place_distanced(
    names: &[&str],
    seats: &mut Vec<usize>,
    layout: &SeatLayout,
    assignment: &mut Assignment,
) -> Vec<String> {
    let mut placed: Vec<usize> = Vec::with_capacity(names.len());
    let mut deferred = Vec::new();

    for &name in names {
        let fit = seats
            .iter()
            .position(|&seat| !conflicts_with_any(seat, &placed, layout));

        match fit {
            Some(pos) => {
                let seat = seats.remove(pos);
                assignment.assign(seat, name);
                placed.push(seat);
            }
            None => deferred.push(name.to_string()),
        }
    }

    deferred
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::too_close;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_grid_is_bijection() {
        let request = AllocationRequest::new(names(&["A", "B", "C", "D"]), SeatLayout::grid(2, 2));
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let a = allocate(&request, &mut rng);
            let seats: Vec<usize> = a.seats().collect();
            assert_eq!(seats, vec![0, 1, 2, 3]);
            let mut occupants: Vec<&str> = a.iter().map(|(_, n)| n).collect();
            occupants.sort();
            assert_eq!(occupants, vec!["A", "B", "C", "D"]);
        }
    }

    #[test]
    fn test_pinned_and_disabled() {
        let request = AllocationRequest::new(names(&["A", "B", "C"]), SeatLayout::grid(2, 2))
            .with_pre_assigned(0, "A")
            .with_disabled(1);

        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let a = allocate(&request, &mut rng);
            assert_eq!(a.get(0), Some("A"));
            assert!(!a.contains_seat(1));
            let mut rest = vec![a.get(2).unwrap(), a.get(3).unwrap()];
            rest.sort();
            assert_eq!(rest, vec!["B", "C"]);
        }
    }

    #[test]
    fn test_surplus_people_dropped() {
        let request = AllocationRequest::new(names(&["A", "B"]), SeatLayout::grid(1, 1));
        let mut rng = SmallRng::seed_from_u64(3);
        let outcome = SeatAllocator::new().allocate(&request, &mut rng);

        assert_eq!(outcome.assignment.len(), 1);
        let seated = outcome.assignment.get(0).unwrap();
        assert!(seated == "A" || seated == "B");
        assert_eq!(outcome.unseated.len(), 1);
        assert_ne!(outcome.unseated[0], seated);
        assert!(!outcome.is_complete());
    }

    #[test]
    fn test_surplus_seats_stay_empty() {
        let request = AllocationRequest::new(names(&["A"]), SeatLayout::grid(2, 3));
        let mut rng = SmallRng::seed_from_u64(1);
        let outcome = SeatAllocator::new().allocate(&request, &mut rng);
        assert_eq!(outcome.assignment.len(), 1);
        assert!(outcome.is_complete());
    }

    #[test]
    fn test_empty_people() {
        let request = AllocationRequest::new(vec![], SeatLayout::grid(3, 3)).with_distanced("X");
        let mut rng = SmallRng::seed_from_u64(0);
        let outcome = SeatAllocator::new().allocate(&request, &mut rng);
        // Distanced names are seated even when absent from people
        assert_eq!(outcome.assignment.len(), 1);
        assert!(outcome.assignment.seat_of("X").is_some());
    }

    #[test]
    fn test_distanced_are_separated() {
        // Distanced names kept off the roster so each appears exactly once
        let people = names(&["D", "E", "F", "G", "H"]);
        let layout = SeatLayout::grid(5, 6);
        let request = AllocationRequest::new(people, layout)
            .with_distanced("A")
            .with_distanced("B")
            .with_distanced("C");

        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let outcome = SeatAllocator::new().allocate(&request, &mut rng);
            if !outcome.all_distanced_placed() {
                continue;
            }
            let seats: Vec<usize> = ["A", "B", "C"]
                .iter()
                .map(|n| outcome.assignment.seat_of(n).unwrap())
                .collect();
            for i in 0..seats.len() {
                for j in (i + 1)..seats.len() {
                    assert!(!too_close(seats[i], seats[j], &layout));
                }
            }
        }
    }

    #[test]
    fn test_unplaceable_distanced_is_deferred() {
        // 1×3 grid: every seat is within two columns of every other seat,
        // so the second distanced name can never be placed.
        let request = AllocationRequest::new(names(&["C"]), SeatLayout::grid(1, 3))
            .with_distanced("A")
            .with_distanced("B");

        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let outcome = SeatAllocator::new().allocate(&request, &mut rng);
            assert_eq!(outcome.deferred, vec!["B".to_string()]);
            // Deferred name still lands in the regular pool
            assert!(outcome.assignment.seat_of("B").is_some());
            assert_eq!(outcome.assignment.len(), 3);
        }
    }

    #[test]
    fn test_deferred_dropped_when_seats_exhausted() {
        // Two seats, both adjacent: A takes one, B is deferred, then the
        // regular pool [A, B, C] plus deferred B competes for the last seat.
        let request = AllocationRequest::new(names(&["A", "B", "C"]), SeatLayout::grid(1, 2))
            .with_distanced("A")
            .with_distanced("B");
        let mut rng = SmallRng::seed_from_u64(11);
        let outcome = SeatAllocator::new().allocate(&request, &mut rng);

        assert_eq!(outcome.deferred, vec!["B".to_string()]);
        assert!(outcome.assignment.seat_of("A").is_some());
        assert_eq!(outcome.assignment.len(), 2);
        assert_eq!(outcome.unseated.len(), 3);
    }

    #[test]
    fn test_pinned_name_leaves_distancing() {
        let request = AllocationRequest::new(names(&["A", "B"]), SeatLayout::grid(1, 2))
            .with_pre_assigned(0, "A")
            .with_distanced("A")
            .with_distanced("B");
        let mut rng = SmallRng::seed_from_u64(5);
        let outcome = SeatAllocator::new().allocate(&request, &mut rng);

        // A is pinned, so B is the first distanced name and fits seat 1
        assert!(outcome.all_distanced_placed());
        assert_eq!(outcome.assignment.get(0), Some("A"));
        assert_eq!(outcome.assignment.get(1), Some("B"));
    }

    #[test]
    fn test_pinned_seat_not_reassigned() {
        // Pinned name not in people: still kept, and the seat is not reused
        let request = AllocationRequest::new(names(&["B", "C"]), SeatLayout::grid(1, 2))
            .with_pre_assigned(1, "Z");
        let mut rng = SmallRng::seed_from_u64(9);
        let outcome = SeatAllocator::new().allocate(&request, &mut rng);

        assert_eq!(outcome.assignment.get(1), Some("Z"));
        assert_eq!(outcome.assignment.len(), 2);
        assert_eq!(outcome.unseated.len(), 3);
    }

    #[test]
    fn test_disabled_never_used() {
        let disabled: BTreeSet<usize> = [0, 5, 7, 11].into_iter().collect();
        let mut request = AllocationRequest::new(
            (0..20).map(|i| format!("P{i}")).collect(),
            SeatLayout::paired(2, 3),
        )
        .with_distanced("P0")
        .with_distanced("P1");
        request.disabled = disabled.clone();

        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let a = allocate(&request, &mut rng);
            assert!(a.seats().all(|s| !disabled.contains(&s) && s < 12));
            assert_eq!(a.len(), 12 - disabled.len());
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let request = AllocationRequest::new(
            names(&["A", "B", "C", "D", "E"]),
            SeatLayout::grid(3, 3),
        )
        .with_distanced("A")
        .with_distanced("B");

        let a1 = allocate(&request, &mut SmallRng::seed_from_u64(42));
        let a2 = allocate(&request, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a1, a2);
    }

    #[test]
    fn test_request_not_mutated() {
        let request = AllocationRequest::new(names(&["A", "B", "C"]), SeatLayout::grid(2, 2))
            .with_pre_assigned(0, "A")
            .with_distanced("B");
        let before = format!("{request:?}");
        let _ = allocate(&request, &mut SmallRng::seed_from_u64(1));
        assert_eq!(format!("{request:?}"), before);
    }

    #[test]
    fn test_place_distanced_first_fit() {
        // Unshuffled seats on a 1×7 row: first fits are 0, 3, 6
        let layout = SeatLayout::grid(1, 7);
        let mut seats: Vec<usize> = (0..7).collect();
        let mut assignment = Assignment::new();
        let deferred = place_distanced(
            &["A", "B", "C", "D"],
            &mut seats,
            &layout,
            &mut assignment,
        );

        assert_eq!(deferred, vec!["D".to_string()]);
        assert_eq!(assignment.get(0), Some("A"));
        assert_eq!(assignment.get(3), Some("B"));
        assert_eq!(assignment.get(6), Some("C"));
        assert_eq!(seats, vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_regular_pool_keeps_distanced_names() {
        // Pool = people minus pinned (A, B, C, D) plus deferred names, on
        // top of the distanced placements: always 6 entries over 9 seats.
        let request = AllocationRequest::new(names(&["A", "B", "C", "D"]), SeatLayout::grid(3, 3))
            .with_distanced("A")
            .with_distanced("B");
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let outcome = SeatAllocator::new().allocate(&request, &mut rng);
            let a = &outcome.assignment;
            assert_eq!(a.len(), 6);
            assert_eq!(a.iter().filter(|(_, n)| *n == "A").count(), 2);
            assert_eq!(a.iter().filter(|(_, n)| *n == "B").count(), 2);
            assert!(a.seat_of("C").is_some());
            assert!(a.seat_of("D").is_some());
            assert!(outcome.is_complete());
        }
    }

    #[test]
    fn test_pinned_distanced_has_no_effect() {
        // Distanced list that empties after pin filtering matches a run
        // with no distanced list at all.
        let people = names(&["A", "B", "C", "D", "E"]);
        let plain = AllocationRequest::new(people.clone(), SeatLayout::grid(2, 3))
            .with_pre_assigned(0, "E");
        let pinned_distanced = AllocationRequest::new(people, SeatLayout::grid(2, 3))
            .with_pre_assigned(0, "E")
            .with_distanced("E");

        for seed in 0..20 {
            let a1 = SeatAllocator::new().allocate(&plain, &mut SmallRng::seed_from_u64(seed));
            let a2 = SeatAllocator::new()
                .allocate(&pinned_distanced, &mut SmallRng::seed_from_u64(seed));
            assert_eq!(a1, a2);
            assert!(a2.deferred.is_empty());
        }
    }

    #[test]
    fn test_entropy_allocation() {
        let request = AllocationRequest::new(names(&["A", "B"]), SeatLayout::grid(1, 2));
        let outcome = SeatAllocator::new().allocate_with_entropy(&request);
        assert_eq!(outcome.assignment.len(), 2);
    }
}
