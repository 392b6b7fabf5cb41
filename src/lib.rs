//! Seat allocation under placement constraints.
//!
//! Assigns people to the seats of a layout while honouring three kinds of
//! constraint: disabled seats, people pinned to fixed seats, and people who
//! must be kept apart from each other.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `SeatLayout`, `LayoutKind`, `SeatPosition`,
//!   `Assignment`, `SeatingConfig`
//! - **`geometry`**: Seat index → grid coordinate mapping and the
//!   "too close" proximity rule
//! - **`allocator`**: Greedy first-fit allocator with an injectable RNG
//! - **`validation`**: Advisory configuration checks
//! - **`view`**: Labelled seat view and tabular export, with reversed
//!   reading order
//! - **`persistence`**: JSON configuration packages
//!
//! # Determinism
//!
//! The only randomness is the shuffle inside the allocator. Every entry
//! point takes the random source from the caller, so a seeded generator
//! reproduces an allocation exactly.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_seating::models::{SeatLayout, SeatingConfig};
//! use u_seating::view::{ReadingOrder, SeatingTable};
//!
//! let mut config = SeatingConfig::new(SeatLayout::paired(2, 2))
//!     .with_roster("Ann\nBo\nCy\nDee\nEd");
//! config.pin(0, "Ann");
//! config.set_distanced(["Bo", "Cy"]);
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let outcome = config.allocate(&mut rng);
//! assert_eq!(outcome.assignment.get(0), Some("Ann"));
//! assert_eq!(outcome.assignment.len(), 7);
//!
//! let layout = config.seat_layout();
//! let table = SeatingTable::build(&outcome.assignment, &layout, ReadingOrder::Standard);
//! assert_eq!(table.rows().len(), 4);
//! ```

pub mod allocator;
pub mod error;
pub mod geometry;
pub mod models;
pub mod persistence;
pub mod validation;
pub mod view;

pub use error::{PersistenceError, Result};
