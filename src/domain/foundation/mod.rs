//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the scholarship-cycle domain.

mod command;
mod cycle_status;
mod errors;
mod events;
mod ids;
mod timestamp;

pub use command::CommandMetadata;
pub use cycle_status::CycleStatus;
pub use errors::{ErrorCode, ValidationError};
pub use events::{DomainEvent, EventEnvelope, EventId, EventMetadata};
pub use ids::{ActorId, CycleId, CycleLocationId, LocationId, ScheduleSlotId, SupervisorId};
pub use timestamp::Timestamp;
