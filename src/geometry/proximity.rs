//! "Too close" predicate between two seats.
//!
//! Two seats conflict when any of the following holds on their grid
//! coordinates `(r1, c1)`, `(r2, c2)`:
//!
//! 1. Chebyshev distance ≤ 1 (the eight surrounding cells).
//! 2. Same row, column distance ≤ 2.
//! 3. Same column, row distance ≤ 2.
//!
//! Reach is therefore longer along straight lines than diagonally.

use super::coordinates_of;
use crate::models::SeatLayout;

/// Whether seats `a` and `b` are too close to each other.
///
/// Symmetric in `a` and `b`. A seat is always too close to itself.
///
/// # Example
///
/// ```
/// use u_seating::geometry::too_close;
/// use u_seating::models::SeatLayout;
///
/// let layout = SeatLayout::grid(3, 5);
/// assert!(too_close(0, 2, &layout));   // same row, two apart
/// assert!(!too_close(0, 3, &layout));  // same row, three apart
/// assert!(too_close(0, 6, &layout));   // diagonal neighbour
/// assert!(!too_close(0, 12, &layout)); // two rows down, two across
/// ```
pub fn too_close(a: usize, b: usize, layout: &SeatLayout) -> bool {
    let p1 = coordinates_of(a, layout);
    let p2 = coordinates_of(b, layout);
    let dr = p1.row.abs_diff(p2.row);
    let dc = p1.col.abs_diff(p2.col);

    (dr <= 1 && dc <= 1) || (dr == 0 && dc <= 2) || (dc == 0 && dr <= 2)
}

/// Whether `seat` is too close to any seat in `placed`.
pub fn conflicts_with_any(seat: usize, placed: &[usize], layout: &SeatLayout) -> bool {
    placed.iter().any(|&other| too_close(seat, other, layout))
}
