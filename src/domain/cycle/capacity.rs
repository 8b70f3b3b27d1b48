//! Scholarship capacity counters.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Available/assigned scholarship counters, tracked at both cycle and
/// location granularity.
///
/// The ledger is deliberately advisory: `increment_assigned` never checks
/// the `available` ceiling, so over-assignment is representable. Callers
/// (the out-of-scope selection confirmation flow) check
/// `has_available_slots` before incrementing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityLedger {
    available: u32,
    assigned: u32,
}

impl CapacityLedger {
    /// Creates a ledger with the given capacity and zero assignments.
    pub fn new(available: u32) -> Result<Self, ValidationError> {
        if available == 0 {
            return Err(ValidationError::not_positive(
                "scholarships_available",
                available as i64,
            ));
        }
        Ok(Self {
            available,
            assigned: 0,
        })
    }

    /// Rebuilds a ledger from persisted counters, bypassing validation.
    pub fn reconstitute(available: u32, assigned: u32) -> Self {
        Self {
            available,
            assigned,
        }
    }

    /// Returns the capacity ceiling.
    pub fn available(&self) -> u32 {
        self.available
    }

    /// Returns the number of scholarships assigned so far.
    pub fn assigned(&self) -> u32 {
        self.assigned
    }

    /// Returns true if at least one slot remains below the ceiling.
    pub fn has_available_slots(&self) -> bool {
        self.assigned < self.available
    }

    /// Returns the number of unassigned slots, never negative.
    pub fn remaining_slots(&self) -> u32 {
        self.available.saturating_sub(self.assigned)
    }

    /// Raises or lowers the capacity ceiling. Must stay positive.
    pub(crate) fn set_available(&mut self, available: u32) -> Result<(), ValidationError> {
        if available == 0 {
            return Err(ValidationError::not_positive(
                "scholarships_available",
                available as i64,
            ));
        }
        self.available = available;
        Ok(())
    }

    /// Records `count` additional assignments. Monotonic: the assigned
    /// counter only ever grows, and no ceiling is enforced.
    pub(crate) fn increment_assigned(&mut self, count: u32) {
        self.assigned += count;
    }
}
