//! Allocation result with diagnostics.

use crate::models::Assignment;

/// Result of an allocation run.
///
/// Neither list signals an error; both record what the best-effort policy
/// left out so callers can report it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationOutcome {
    /// Final seat → name mapping, pinned seats included.
    pub assignment: Assignment,
    /// Distanced names that found no conflict-free seat and were seated
    /// (or dropped) with the regular pool instead.
    pub deferred: Vec<String>,
    /// People left without a seat because the seats ran out.
    pub unseated: Vec<String>,
}

impl AllocationOutcome {
    /// Every person in the pool received a seat.
    pub fn is_complete(&self) -> bool {
        self.unseated.is_empty()
    }

    /// Every distanced person kept their separation.
    pub fn all_distanced_placed(&self) -> bool {
        self.deferred.is_empty()
    }
}

impl From<AllocationOutcome> for Assignment {
    fn from(outcome: AllocationOutcome) -> Self {
        outcome.assignment
    }
}
