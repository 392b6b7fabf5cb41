//! Seat geometry.
//!
//! Maps seat indices onto a 2D grid and decides whether two seats are
//! close enough to count as neighbours. Both are pure functions of the
//! index and the layout; seats carry no other identity.
//!
//! # Coordinate mapping
//!
//! - **Grid**: row-major, `(index / cols, index % cols)`.
//! - **PairedColumns**: each section occupies two adjacent output columns
//!   (left, right); consecutive indices alternate left/right then advance
//!   a row within the section.

mod coordinates;
mod proximity;

pub use coordinates::coordinates_of;
pub use proximity::{conflicts_with_any, too_close};
