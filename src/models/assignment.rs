//! Assignment (solution) model.
//!
//! An assignment maps seat indices to occupant names. At most one entry
//! exists per seat; seats without an entry are empty. Ordered by seat
//! index so iteration and serialization are deterministic.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::SeatLayout;

/// Seat index → occupant name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    seats: BTreeMap<usize, String>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `name` on `seat`, returning any previous occupant.
    pub fn assign(&mut self, seat: usize, name: impl Into<String>) -> Option<String> {
        self.seats.insert(seat, name.into())
    }

    /// Occupant of `seat`, if any.
    pub fn get(&self, seat: usize) -> Option<&str> {
        self.seats.get(&seat).map(|s| s.as_str())
    }

    /// Occupant of `seat`, or `""` for an empty seat.
    pub fn name_or_empty(&self, seat: usize) -> &str {
        self.get(seat).unwrap_or("")
    }

    /// Whether `seat` is occupied.
    pub fn contains_seat(&self, seat: usize) -> bool {
        self.seats.contains_key(&seat)
    }

    /// First seat occupied by `name` (lowest index).
    pub fn seat_of(&self, name: &str) -> Option<usize> {
        self.seats
            .iter()
            .find(|(_, n)| n.as_str() == name)
            .map(|(&seat, _)| seat)
    }

    /// Iterates `(seat, name)` in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.seats.iter().map(|(&seat, name)| (seat, name.as_str()))
    }

    /// Occupied seat indices in ascending order.
    pub fn seats(&self) -> impl Iterator<Item = usize> + '_ {
        self.seats.keys().copied()
    }

    /// Number of occupied seats.
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Whether no seat is occupied.
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// People from `people` who hold no seat, in roster order.
    ///
    /// Matching is by name, so duplicate names count as seated once any
    /// one of them is.
    pub fn unseated<'a>(&self, people: &'a [String]) -> Vec<&'a str> {
        let seated: HashSet<&str> = self.seats.values().map(|s| s.as_str()).collect();
        people
            .iter()
            .map(|p| p.as_str())
            .filter(|p| !seated.contains(p))
            .collect()
    }

    /// Seats of `layout` that are neither occupied nor disabled.
    pub fn empty_seats(&self, layout: &SeatLayout, disabled: &BTreeSet<usize>) -> Vec<usize> {
        (0..layout.total_seats())
            .filter(|i| !disabled.contains(i) && !self.seats.contains_key(i))
            .collect()
    }

    /// Borrows the underlying map.
    pub fn as_map(&self) -> &BTreeMap<usize, String> {
        &self.seats
    }

    /// Consumes the assignment, returning the underlying map.
    pub fn into_map(self) -> BTreeMap<usize, String> {
        self.seats
    }
}

impl From<BTreeMap<usize, String>> for Assignment {
    fn from(seats: BTreeMap<usize, String>) -> Self {
        Self { seats }
    }
}

impl FromIterator<(usize, String)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (usize, String)>>(iter: I) -> Self {
        Self {
            seats: iter.into_iter().collect(),
        }
    }
}
