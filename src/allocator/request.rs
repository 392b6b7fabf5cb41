//! Allocation input container.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{SeatLayout, SeatingConfig};

/// Input container for an allocation run.
///
/// Owned by the caller and never mutated by the allocator.
#[derive(Debug, Clone, Default)]
pub struct AllocationRequest {
    /// Names to seat. Order only affects tie-breaking of the shuffle.
    pub people: Vec<String>,
    /// Layout the seats belong to.
    pub layout: SeatLayout,
    /// Pinned seats (seat → name). Always present unchanged in the result.
    pub pre_assigned: BTreeMap<usize, String>,
    /// Seats that never receive an occupant.
    pub disabled: BTreeSet<usize>,
    /// Names to keep apart, placed in this order.
    pub distanced: Vec<String>,
}

impl AllocationRequest {
    /// Creates a request with no constraints.
    pub fn new(people: Vec<String>, layout: SeatLayout) -> Self {
        Self {
            people,
            layout,
            pre_assigned: BTreeMap::new(),
            disabled: BTreeSet::new(),
            distanced: Vec::new(),
        }
    }

    /// Pins `name` to `seat`.
    pub fn with_pre_assigned(mut self, seat: usize, name: impl Into<String>) -> Self {
        self.pre_assigned.insert(seat, name.into());
        self
    }

    /// Disables a seat.
    pub fn with_disabled(mut self, seat: usize) -> Self {
        self.disabled.insert(seat);
        self
    }

    /// Adds a name to the distanced list.
    pub fn with_distanced(mut self, name: impl Into<String>) -> Self {
        self.distanced.push(name.into());
        self
    }

    /// Seats that can receive a new occupant, in ascending order.
    pub fn available_seats(&self) -> Vec<usize> {
        (0..self.layout.total_seats())
            .filter(|i| !self.disabled.contains(i) && !self.pre_assigned.contains_key(i))
            .collect()
    }
}

impl From<&SeatingConfig> for AllocationRequest {
    fn from(config: &SeatingConfig) -> Self {
        Self {
            people: config.people.clone(),
            layout: config.seat_layout(),
            pre_assigned: config.pre_assigned.clone(),
            disabled: config.disabled_seats.clone(),
            distanced: config.distanced_names.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let r = AllocationRequest::new(vec!["A".into(), "B".into()], SeatLayout::grid(2, 2))
            .with_pre_assigned(0, "A")
            .with_disabled(1)
            .with_distanced("B");

        assert_eq!(r.pre_assigned.get(&0).map(String::as_str), Some("A"));
        assert!(r.disabled.contains(&1));
        assert_eq!(r.distanced, vec!["B".to_string()]);
    }

    #[test]
    fn test_available_seats() {
        let r = AllocationRequest::new(vec![], SeatLayout::grid(2, 2))
            .with_pre_assigned(0, "A")
            .with_disabled(1);
        assert_eq!(r.available_seats(), vec![2, 3]);
    }

    #[test]
    fn test_available_seats_paired() {
        let r = AllocationRequest::new(vec![], SeatLayout::paired(1, 2)).with_disabled(3);
        assert_eq!(r.available_seats(), vec![0, 1, 2]);
    }
}
