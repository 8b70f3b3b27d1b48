//! Cycle domain events.
//!
//! Operations return the event they emit instead of buffering it on the
//! aggregate; the application layer envelopes and publishes it.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ActorId, CycleId, DomainEvent, Timestamp};

/// Events emitted by the cycle lifecycle, each carrying the cycle id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CycleEvent {
    /// A new cycle was created in Configuration.
    Created {
        cycle_id: CycleId,
        created_at: Timestamp,
    },

    /// The application intake was opened.
    ApplicationsOpened { cycle_id: CycleId },

    /// The application intake was closed for interviews.
    ApplicationsClosed { cycle_id: CycleId },

    /// The application intake was reopened after having been closed.
    ApplicationsReopened { cycle_id: CycleId },

    /// The cycle entered its operational phase.
    Activated { cycle_id: CycleId },

    /// The cycle was closed out and became a read-only record.
    Closed {
        cycle_id: CycleId,
        closed_at: Timestamp,
        closed_by: ActorId,
    },

    /// One or more milestone dates were extended.
    DatesExtended { cycle_id: CycleId },
}

impl CycleEvent {
    /// Returns the id of the cycle this event belongs to.
    pub fn cycle_id(&self) -> CycleId {
        match self {
            CycleEvent::Created { cycle_id, .. }
            | CycleEvent::ApplicationsOpened { cycle_id }
            | CycleEvent::ApplicationsClosed { cycle_id }
            | CycleEvent::ApplicationsReopened { cycle_id }
            | CycleEvent::Activated { cycle_id }
            | CycleEvent::Closed { cycle_id, .. }
            | CycleEvent::DatesExtended { cycle_id } => *cycle_id,
        }
    }
}

impl DomainEvent for CycleEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CycleEvent::Created { .. } => "cycle.created",
            CycleEvent::ApplicationsOpened { .. } => "cycle.applications_opened",
            CycleEvent::ApplicationsClosed { .. } => "cycle.applications_closed",
            CycleEvent::ApplicationsReopened { .. } => "cycle.applications_reopened",
            CycleEvent::Activated { .. } => "cycle.activated",
            CycleEvent::Closed { .. } => "cycle.closed",
            CycleEvent::DatesExtended { .. } => "cycle.dates_extended",
        }
    }

    fn aggregate_id(&self) -> String {
        self.cycle_id().to_string()
    }

    fn aggregate_type(&self) -> &'static str {
        "Cycle"
    }
}
