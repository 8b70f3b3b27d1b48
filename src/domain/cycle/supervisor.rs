//! Cycle-scoped supervisor assignments.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CycleLocationId, SupervisorId, Timestamp};

/// Binds a supervisor identity to one cycle location.
///
/// The referenced location always belongs to the same cycle; `configure`
/// enforces that when it rebuilds the set. Assignments are replaced
/// wholesale on every configuration update, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupervisorAssignment {
    supervisor_id: SupervisorId,
    cycle_location_id: CycleLocationId,
    assigned_at: Timestamp,
}

impl SupervisorAssignment {
    pub(crate) fn new(supervisor_id: SupervisorId, cycle_location_id: CycleLocationId) -> Self {
        Self {
            supervisor_id,
            cycle_location_id,
            assigned_at: Timestamp::now(),
        }
    }

    /// Rebuilds an assignment from persisted data.
    pub fn reconstitute(
        supervisor_id: SupervisorId,
        cycle_location_id: CycleLocationId,
        assigned_at: Timestamp,
    ) -> Self {
        Self {
            supervisor_id,
            cycle_location_id,
            assigned_at,
        }
    }

    pub fn supervisor_id(&self) -> SupervisorId {
        self.supervisor_id
    }

    pub fn cycle_location_id(&self) -> CycleLocationId {
        self.cycle_location_id
    }

    pub fn assigned_at(&self) -> Timestamp {
        self.assigned_at
    }
}
