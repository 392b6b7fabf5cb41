//! Reading order shared by the view and the table.

use serde::{Deserialize, Serialize};

use crate::models::SeatLayout;

/// Direction in which a layout is read for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingOrder {
    /// Seat 0 at the top left, as seen from the seats.
    #[default]
    Standard,
    /// Rotated 180°, as seen from the front of the room.
    Reversed,
}

impl ReadingOrder {
    /// `Reversed` when `reversed` is set.
    pub fn from_reversed(reversed: bool) -> Self {
        if reversed {
            Self::Reversed
        } else {
            Self::Standard
        }
    }

    /// Whether the order is reversed.
    #[inline]
    pub fn is_reversed(self) -> bool {
        self == Self::Reversed
    }

    /// Underlying position shown at display slot `i` of `n`.
    ///
    /// Requires `i < n`.
    #[inline]
    pub(crate) fn pick(self, i: usize, n: usize) -> usize {
        debug_assert!(i < n, "display slot {i} out of range for {n}");
        if self.is_reversed() {
            n - 1 - i
        } else {
            i
        }
    }

    /// 1-based label for display slot `i` of `n`.
    ///
    /// Requires `i < n`.
    #[inline]
    pub(crate) fn label(self, i: usize, n: usize) -> usize {
        debug_assert!(i < n, "display slot {i} out of range for {n}");
        if self.is_reversed() {
            n - i
        } else {
            i + 1
        }
    }

    /// Seat shown at display cell (`row`, `col`) of a grid layout.
    pub fn grid_seat(self, layout: &SeatLayout, row: usize, col: usize) -> usize {
        self.pick(row, layout.rows) * layout.cols + self.pick(col, layout.cols)
    }

    /// Seats shown as (left, right) at display slot (`section`, `row`) of
    /// a paired layout.
    pub fn pair_seats(self, layout: &SeatLayout, section: usize, row: usize) -> (usize, usize) {
        let left = layout.pair_index(
            self.pick(section, layout.sections()),
            self.pick(row, layout.rows_per_section()),
        );
        let right = left + 1;
        if self.is_reversed() {
            (right, left)
        } else {
            (left, right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_and_label() {
        let o = ReadingOrder::Standard;
        assert_eq!(o.pick(0, 4), 0);
        assert_eq!(o.label(0, 4), 1);

        let r = ReadingOrder::Reversed;
        assert_eq!(r.pick(0, 4), 3);
        assert_eq!(r.label(0, 4), 4);
        assert_eq!(r.label(3, 4), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn test_pick_slot_past_end_panics() {
        ReadingOrder::Reversed.pick(4, 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn test_label_on_empty_axis_panics() {
        ReadingOrder::Reversed.label(0, 0);
    }

    #[test]
    fn test_grid_seat_reversed() {
        let layout = SeatLayout::grid(2, 3);
        assert_eq!(ReadingOrder::Standard.grid_seat(&layout, 0, 0), 0);
        assert_eq!(ReadingOrder::Reversed.grid_seat(&layout, 0, 0), 5);
        assert_eq!(ReadingOrder::Reversed.grid_seat(&layout, 1, 2), 0);
    }

    #[test]
    fn test_pair_seats() {
        // 2 sections × 2 rows
        let layout = SeatLayout::paired(2, 2);
        assert_eq!(ReadingOrder::Standard.pair_seats(&layout, 0, 0), (0, 1));
        assert_eq!(ReadingOrder::Standard.pair_seats(&layout, 1, 1), (6, 7));
        // Reversed: last section, last row, right seat first
        assert_eq!(ReadingOrder::Reversed.pair_seats(&layout, 0, 0), (7, 6));
        assert_eq!(ReadingOrder::Reversed.pair_seats(&layout, 1, 1), (1, 0));
    }

    #[test]
    fn test_from_reversed() {
        assert_eq!(ReadingOrder::from_reversed(true), ReadingOrder::Reversed);
        assert_eq!(ReadingOrder::from_reversed(false), ReadingOrder::Standard);
        assert_eq!(ReadingOrder::default(), ReadingOrder::Standard);
    }
}
