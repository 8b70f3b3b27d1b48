//! Per-operation error enums for the cycle state machine.
//!
//! Every enum is a closed sum type, so callers handle each failure mode
//! exhaustively; `code()` maps into the boundary-level [`ErrorCode`]
//! taxonomy for transport status mapping. All of these are expected
//! domain-rule violations reported as values, never panics.

use thiserror::Error;

use crate::domain::foundation::{
    CycleLocationId, CycleStatus, ErrorCode, LocationId, ScheduleSlotId, Timestamp,
    ValidationError,
};

use super::dates::Milestone;

/// An operation was invoked from a state that does not permit it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot {operation} while cycle is {status}")]
pub struct TransitionError {
    pub operation: &'static str,
    pub status: CycleStatus,
}

impl TransitionError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidTransition
    }
}

/// A mutation was attempted on a closed, terminal cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cycle is closed and can no longer be modified")]
pub struct CycleClosedError;

impl CycleClosedError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::CycleClosed
    }
}

/// Failures of `OpenApplications`. Checks run in declaration order:
/// locations, scholarships, renewals, then state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpenApplicationsError {
    #[error("cannot open applications: no active locations are configured")]
    NoLocations,

    #[error("cannot open applications: no scholarships are available")]
    NoScholarships,

    #[error("cannot open applications: the renewal process has not been completed")]
    RenewalsPending,

    #[error("cannot open applications while cycle is {status}")]
    InvalidTransition { status: CycleStatus },
}

impl OpenApplicationsError {
    pub fn code(&self) -> ErrorCode {
        match self {
            OpenApplicationsError::NoLocations => ErrorCode::NoLocations,
            OpenApplicationsError::NoScholarships => ErrorCode::NoScholarships,
            OpenApplicationsError::RenewalsPending => ErrorCode::RenewalsPending,
            OpenApplicationsError::InvalidTransition { .. } => ErrorCode::InvalidTransition,
        }
    }
}

/// Failures of `Close`. Checks run in declaration order: state, end date,
/// pending shifts, missing logbooks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CloseCycleError {
    #[error("cannot close cycle while it is {status}")]
    InvalidTransition { status: CycleStatus },

    #[error("cannot close cycle before its end date {end_date}")]
    CycleNotEnded { end_date: Timestamp },

    #[error("cannot close cycle with {count} pending shift approvals")]
    PendingShifts { count: u32 },

    #[error("cannot close cycle with {count} scholars missing required logbooks")]
    MissingLogbooks { count: u32 },
}

impl CloseCycleError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CloseCycleError::InvalidTransition { .. } => ErrorCode::InvalidTransition,
            CloseCycleError::CycleNotEnded { .. } => ErrorCode::CycleNotEnded,
            CloseCycleError::PendingShifts { .. } => ErrorCode::PendingShifts,
            CloseCycleError::MissingLogbooks { .. } => ErrorCode::MissingLogbooks,
        }
    }
}

/// Failures of `ExtendDates`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtendDatesError {
    #[error("cycle is closed and its dates can no longer change")]
    CycleClosed,

    #[error("cycle dates are frozen while applications are closed for interviews")]
    Frozen,

    #[error("{milestone} must move strictly forward: current {current}, requested {requested}")]
    NotMovedForward {
        milestone: Milestone,
        current: Timestamp,
        requested: Timestamp,
    },

    #[error("extended dates violate milestone ordering: {reason}")]
    OrderingViolation { reason: String },
}

impl ExtendDatesError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ExtendDatesError::CycleClosed => ErrorCode::CycleClosed,
            ExtendDatesError::Frozen => ErrorCode::InvalidTransition,
            ExtendDatesError::NotMovedForward { .. } => ErrorCode::InvalidDate,
            ExtendDatesError::OrderingViolation { .. } => ErrorCode::InvalidDate,
        }
    }
}

/// Failures of the whole-cycle `Configure` operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigureError {
    #[error("cycle is closed and can no longer be configured")]
    CycleClosed,

    #[error("location {location_id} appears more than once in the configuration input")]
    DuplicateLocation { location_id: LocationId },

    #[error("supervisor assignment references location {location_id}, which is not part of this cycle")]
    LocationNotInCycle { location_id: LocationId },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ConfigureError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ConfigureError::CycleClosed => ErrorCode::CycleClosed,
            ConfigureError::Validation(_) => ErrorCode::ValidationFailed,
            ConfigureError::DuplicateLocation { .. }
            | ConfigureError::LocationNotInCycle { .. } => ErrorCode::ValidationFailed,
        }
    }
}

/// Failures of the per-location operations routed through the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationUpdateError {
    #[error("cycle is closed and its locations can no longer be modified")]
    CycleClosed,

    #[error("cycle location {id} does not belong to this cycle")]
    LocationNotFound { id: CycleLocationId },

    #[error("schedule slot {id} does not belong to this location")]
    SlotNotFound { id: ScheduleSlotId },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl LocationUpdateError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LocationUpdateError::CycleClosed => ErrorCode::CycleClosed,
            LocationUpdateError::LocationNotFound { .. }
            | LocationUpdateError::SlotNotFound { .. } => ErrorCode::ValidationFailed,
            LocationUpdateError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_error_messages_carry_counts() {
        let err = CloseCycleError::PendingShifts { count: 5 };
        assert!(format!("{}", err).contains('5'));

        let err = CloseCycleError::MissingLogbooks { count: 3 };
        assert!(format!("{}", err).contains('3'));
    }

    #[test]
    fn open_applications_errors_map_to_codes() {
        assert_eq!(OpenApplicationsError::NoLocations.code(), ErrorCode::NoLocations);
        assert_eq!(
            OpenApplicationsError::NoScholarships.code(),
            ErrorCode::NoScholarships
        );
        assert_eq!(
            OpenApplicationsError::RenewalsPending.code(),
            ErrorCode::RenewalsPending
        );
        assert_eq!(
            OpenApplicationsError::InvalidTransition {
                status: CycleStatus::Active
            }
            .code(),
            ErrorCode::InvalidTransition
        );
    }

    #[test]
    fn extend_dates_errors_map_to_codes() {
        assert_eq!(ExtendDatesError::CycleClosed.code(), ErrorCode::CycleClosed);
        assert_eq!(ExtendDatesError::Frozen.code(), ErrorCode::InvalidTransition);
        assert_eq!(
            ExtendDatesError::OrderingViolation {
                reason: "x".to_string()
            }
            .code(),
            ErrorCode::InvalidDate
        );
    }

    #[test]
    fn transition_error_names_operation_and_status() {
        let err = TransitionError {
            operation: "activate cycle",
            status: CycleStatus::Configuration,
        };
        assert_eq!(
            format!("{}", err),
            "cannot activate cycle while cycle is Configuration"
        );
        assert_eq!(err.code(), ErrorCode::InvalidTransition);
    }
}
