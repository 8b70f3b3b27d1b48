//! Error vocabulary shared across the domain layer.
//!
//! Two distinct families live here:
//!
//! - [`ValidationError`] - hard construction-time argument failures (blank
//!   text, non-positive counts, inverted time ranges). These signal caller
//!   error and are never used for state-machine flow control.
//! - [`ErrorCode`] - the stable code vocabulary the application layer maps
//!   to transport status codes. Each per-operation error enum in the cycle
//!   module maps into it via a `code()` method, so the domain keeps closed
//!   sum types while the boundary keeps one taxonomy.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be positive, got {actual}")]
    NotPositive { field: String, actual: i64 },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' {reason}")]
    InvalidOrder { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates a non-positive value validation error.
    pub fn not_positive(field: impl Into<String>, actual: i64) -> Self {
        ValidationError::NotPositive {
            field: field.into(),
            actual,
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an ordering validation error.
    pub fn invalid_order(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidOrder {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::ValidationFailed
    }
}

/// Stable error codes for the application boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation
    ValidationFailed,

    // Not found
    CycleNotFound,

    // Cycle state machine
    InvalidTransition,
    NoLocations,
    NoScholarships,
    RenewalsPending,
    CycleNotEnded,
    PendingShifts,
    MissingLogbooks,
    CycleClosed,
    InvalidDate,

    // Infrastructure
    ConcurrencyConflict,
    StorageError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::CycleNotFound => "CYCLE_NOT_FOUND",
            ErrorCode::InvalidTransition => "INVALID_TRANSITION",
            ErrorCode::NoLocations => "NO_LOCATIONS",
            ErrorCode::NoScholarships => "NO_SCHOLARSHIPS",
            ErrorCode::RenewalsPending => "RENEWALS_PENDING",
            ErrorCode::CycleNotEnded => "CYCLE_NOT_ENDED",
            ErrorCode::PendingShifts => "PENDING_SHIFTS",
            ErrorCode::MissingLogbooks => "MISSING_LOGBOOKS",
            ErrorCode::CycleClosed => "CYCLE_CLOSED",
            ErrorCode::InvalidDate => "INVALID_DATE",
            ErrorCode::ConcurrencyConflict => "CONCURRENCY_CONFLICT",
            ErrorCode::StorageError => "STORAGE_ERROR",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("name");
        assert_eq!(format!("{}", err), "Field 'name' cannot be empty");
    }

    #[test]
    fn validation_error_not_positive_displays_correctly() {
        let err = ValidationError::not_positive("total_scholarships", 0);
        assert_eq!(
            format!("{}", err),
            "Field 'total_scholarships' must be positive, got 0"
        );
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("day_of_week", 1, 7, 9);
        assert_eq!(
            format!("{}", err),
            "Field 'day_of_week' must be between 1 and 7, got 9"
        );
    }

    #[test]
    fn validation_error_invalid_order_displays_correctly() {
        let err =
            ValidationError::invalid_order("interview_date", "must be after application_deadline");
        assert_eq!(
            format!("{}", err),
            "Field 'interview_date' must be after application_deadline"
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::InvalidTransition), "INVALID_TRANSITION");
        assert_eq!(format!("{}", ErrorCode::PendingShifts), "PENDING_SHIFTS");
        assert_eq!(format!("{}", ErrorCode::CycleClosed), "CYCLE_CLOSED");
    }
}
