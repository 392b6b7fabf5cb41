//! Seat allocation.
//!
//! # Algorithm
//!
//! `SeatAllocator` is a greedy, single-pass, first-fit heuristic:
//!
//! 1. Seat universe minus disabled and pinned seats.
//! 2. Pinned people leave the pool (matched by name).
//! 3. Distanced people take the first shuffled seat that is not too close
//!    to any previously placed distanced seat; failures are deferred.
//! 4. Deferred and regular people are shuffled and zipped onto the
//!    remaining seats. Surplus seats stay empty, surplus people are dropped.
//!
//! It never backtracks and never fails; the outcome depends on shuffle order.
//! The random source is always supplied by the caller.

mod greedy;
mod outcome;
mod request;

pub use greedy::{allocate, SeatAllocator};
pub use outcome::AllocationOutcome;
pub use request::AllocationRequest;
