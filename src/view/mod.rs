//! Presentation of an assignment.
//!
//! Re-derives the seat coordinate scheme to lay seats out for display.
//! Two consumers share one reading-order rule:
//!
//! - [`SeatingView`]: labelled blocks of cells (rows for grids, sections
//!   for paired layouts) with a plain-text `Display`.
//! - [`SeatingTable`]: a 2D array of strings with header rows and
//!   auto-sized column widths, ready for a spreadsheet writer.
//!
//! [`ReadingOrder::Reversed`] rotates the reading order by 180°: rows,
//! columns and sections run backwards and each left/right pair swaps.
//! The assignment itself is never changed.

mod order;
mod render;
mod table;

pub use order::ReadingOrder;
pub use render::{SeatingView, ViewBlock, ViewCell};
pub use table::SeatingTable;

/// Placeholder shown for an unoccupied seat in a [`SeatingView`].
pub const EMPTY_SEAT_LABEL: &str = "(empty)";
