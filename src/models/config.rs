//! Seating configuration (caller-owned state).
//!
//! Holds everything an allocation run needs: the roster, the layout
//! parameters and the three constraint sets. The crate never keeps one of
//! these between calls; callers own it and pass it in.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;

use super::{LayoutKind, SeatLayout};
use crate::allocator::{AllocationOutcome, AllocationRequest, SeatAllocator};

/// Roster, layout and placement constraints for one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingConfig {
    /// Display name of the group (e.g. a class).
    pub group_name: String,
    /// Names to seat, in roster order.
    pub people: Vec<String>,
    /// Layout topology.
    pub layout: LayoutKind,
    /// Rows (`Grid`) or sections (`PairedColumns`).
    pub rows: usize,
    /// Columns (`Grid`) or rows per section (`PairedColumns`).
    pub cols: usize,
    /// Pinned seats (seat → name).
    pub pre_assigned: BTreeMap<usize, String>,
    /// Seats excluded from the universe.
    pub disabled_seats: BTreeSet<usize>,
    /// Names to keep apart, in placement order.
    pub distanced_names: Vec<String>,
}

impl SeatingConfig {
    /// Creates an empty configuration for the given layout.
    pub fn new(layout: SeatLayout) -> Self {
        Self {
            group_name: String::new(),
            people: Vec::new(),
            layout: layout.kind,
            rows: layout.rows,
            cols: layout.cols,
            pre_assigned: BTreeMap::new(),
            disabled_seats: BTreeSet::new(),
            distanced_names: Vec::new(),
        }
    }

    /// Splits newline-separated roster text into names.
    ///
    /// Lines are trimmed; blank lines are dropped; order is kept.
    ///
    /// ```
    /// use u_seating::models::SeatingConfig;
    ///
    /// let names = SeatingConfig::parse_roster("  Ann \n\nBo\r\n  \nCy");
    /// assert_eq!(names, vec!["Ann", "Bo", "Cy"]);
    /// ```
    pub fn parse_roster(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    }

    /// Sets the group name.
    pub fn with_group_name(mut self, name: impl Into<String>) -> Self {
        self.group_name = name.into();
        self
    }

    /// Replaces the roster with the names parsed from `text`.
    pub fn with_roster(mut self, text: &str) -> Self {
        self.people = Self::parse_roster(text);
        self
    }

    /// Replaces the roster.
    pub fn with_people<I, S>(mut self, people: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.people = people.into_iter().map(Into::into).collect();
        self
    }

    /// Current layout.
    pub fn seat_layout(&self) -> SeatLayout {
        SeatLayout::new(self.layout, self.rows, self.cols)
    }

    /// Changes the layout. Constraints are kept as they are.
    pub fn set_layout(&mut self, layout: SeatLayout) {
        self.layout = layout.kind;
        self.rows = layout.rows;
        self.cols = layout.cols;
    }

    /// Size of the seat universe for the current layout.
    pub fn total_seats(&self) -> usize {
        self.seat_layout().total_seats()
    }

    /// Seats that may be pinned: every seat that is not disabled.
    pub fn selectable_seats(&self) -> Vec<usize> {
        (0..self.total_seats())
            .filter(|i| !self.disabled_seats.contains(i))
            .collect()
    }

    /// Pins `name` to `seat`, returning the name previously pinned there.
    pub fn pin(&mut self, seat: usize, name: impl Into<String>) -> Option<String> {
        self.pre_assigned.insert(seat, name.into())
    }

    /// Removes the pin on `seat`.
    pub fn unpin(&mut self, seat: usize) -> Option<String> {
        self.pre_assigned.remove(&seat)
    }

    /// Disables `seat`. Returns `false` if it was already disabled.
    pub fn disable(&mut self, seat: usize) -> bool {
        self.disabled_seats.insert(seat)
    }

    /// Re-enables `seat`. Returns `false` if it was not disabled.
    pub fn enable(&mut self, seat: usize) -> bool {
        self.disabled_seats.remove(&seat)
    }

    /// Replaces the distanced list.
    pub fn set_distanced<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.distanced_names = names.into_iter().map(Into::into).collect();
    }

    /// Clears pins, disabled seats and the distanced list.
    ///
    /// Roster, group name and layout are kept.
    pub fn clear_constraints(&mut self) {
        self.pre_assigned.clear();
        self.disabled_seats.clear();
        self.distanced_names.clear();
    }

    /// Builds an allocation request from this configuration.
    pub fn to_request(&self) -> AllocationRequest {
        AllocationRequest::from(self)
    }

    /// Runs the allocator on this configuration.
    pub fn allocate<R: Rng + ?Sized>(&self, rng: &mut R) -> AllocationOutcome {
        SeatAllocator::new().allocate(&self.to_request(), rng)
    }
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self::new(SeatLayout::default())
    }
}
