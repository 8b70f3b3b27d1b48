//! The cycle bounded context: aggregate root, owned child entities,
//! value objects, per-operation errors, and domain events.

mod aggregate;
mod capacity;
mod config;
mod dates;
mod errors;
mod events;
mod location;
mod schedule;
mod supervisor;

pub use aggregate::{CreateCycle, Cycle};
pub use capacity::CapacityLedger;
pub use config::{LocationConfig, SlotConfig, SupervisorConfig};
pub use dates::{CycleDates, DateExtension, Milestone};
pub use errors::{
    CloseCycleError, ConfigureError, CycleClosedError, ExtendDatesError, LocationUpdateError,
    OpenApplicationsError, TransitionError,
};
pub use events::CycleEvent;
pub use location::CycleLocation;
pub use schedule::{DayOfWeek, ScheduleSlot};
pub use supervisor::SupervisorAssignment;
