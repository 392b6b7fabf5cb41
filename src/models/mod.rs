//! Seating domain models.
//!
//! Provides the data types shared by the geometry, allocation, view and
//! persistence layers. All of them are plain values: constructed per call,
//! owned by the caller, never retained by the crate.
//!
//! | Type | Role |
//! |------|------|
//! | `SeatLayout` | Topology + dimensions; defines the seat universe |
//! | `SeatPosition` | 2D grid coordinate of a seat |
//! | `Assignment` | Seat index → occupant name |
//! | `SeatingConfig` | Caller-owned state: roster, layout, constraints |

mod assignment;
mod config;
mod layout;

pub use assignment::Assignment;
pub use config::SeatingConfig;
pub use layout::{LayoutKind, SeatLayout, SeatPosition};
