//! Seat index → grid coordinate mapping.

use crate::models::{LayoutKind, SeatLayout, SeatPosition};

/// Returns the grid position of seat `index` in `layout`.
///
/// `index` must be below `layout.total_seats()`; callers construct
/// indices from the seat universe, so this is checked only in debug builds.
///
/// # Example
///
/// ```
/// use u_seating::geometry::coordinates_of;
/// use u_seating::models::{SeatLayout, SeatPosition};
///
/// let layout = SeatLayout::paired(2, 3);
/// // Second section starts at index 6, in output columns 2 and 3.
/// assert_eq!(coordinates_of(6, &layout), SeatPosition::new(0, 2));
/// assert_eq!(coordinates_of(9, &layout), SeatPosition::new(1, 3));
/// ```
pub fn coordinates_of(index: usize, layout: &SeatLayout) -> SeatPosition {
    debug_assert!(
        layout.contains(index),
        "seat index {index} outside layout of {} seats",
        layout.total_seats()
    );

    match layout.kind {
        LayoutKind::Grid => SeatPosition::new(index / layout.cols, index % layout.cols),
        LayoutKind::PairedColumns => {
            let seats_per_section = layout.cols * 2;
            let section = index / seats_per_section;
            let offset = index % seats_per_section;
            SeatPosition::new(offset / 2, section * 2 + offset % 2)
        }
    }
}
