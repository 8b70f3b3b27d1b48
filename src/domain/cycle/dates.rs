//! Cycle milestone dates and the forward-only extension policy.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Timestamp, ValidationError};

use super::errors::ExtendDatesError;

/// The four extendable milestone dates, named for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Milestone {
    ApplicationDeadline,
    InterviewDate,
    SelectionDate,
    EndDate,
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Milestone::ApplicationDeadline => "application_deadline",
            Milestone::InterviewDate => "interview_date",
            Milestone::SelectionDate => "selection_date",
            Milestone::EndDate => "end_date",
        };
        write!(f, "{}", s)
    }
}

/// The five milestone dates of a cycle.
///
/// Invariant, validated at construction and after every extension:
/// `start_date < application_deadline < interview_date < selection_date <
/// end_date`. The start date never moves after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleDates {
    start_date: Timestamp,
    application_deadline: Timestamp,
    interview_date: Timestamp,
    selection_date: Timestamp,
    end_date: Timestamp,
}

impl CycleDates {
    /// Creates a validated set of milestone dates.
    pub fn new(
        start_date: Timestamp,
        application_deadline: Timestamp,
        interview_date: Timestamp,
        selection_date: Timestamp,
        end_date: Timestamp,
    ) -> Result<Self, ValidationError> {
        let dates = Self {
            start_date,
            application_deadline,
            interview_date,
            selection_date,
            end_date,
        };
        dates.validate()?;
        Ok(dates)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if !self.start_date.is_before(&self.application_deadline) {
            return Err(ValidationError::invalid_order(
                "application_deadline",
                "must be strictly after start_date",
            ));
        }
        self.validate_milestone_chain()
    }

    fn validate_milestone_chain(&self) -> Result<(), ValidationError> {
        if !self.application_deadline.is_before(&self.interview_date) {
            return Err(ValidationError::invalid_order(
                "interview_date",
                "must be strictly after application_deadline",
            ));
        }
        if !self.interview_date.is_before(&self.selection_date) {
            return Err(ValidationError::invalid_order(
                "selection_date",
                "must be strictly after interview_date",
            ));
        }
        if !self.selection_date.is_before(&self.end_date) {
            return Err(ValidationError::invalid_order(
                "end_date",
                "must be strictly after selection_date",
            ));
        }
        Ok(())
    }

    pub fn start_date(&self) -> Timestamp {
        self.start_date
    }

    pub fn application_deadline(&self) -> Timestamp {
        self.application_deadline
    }

    pub fn interview_date(&self) -> Timestamp {
        self.interview_date
    }

    pub fn selection_date(&self) -> Timestamp {
        self.selection_date
    }

    pub fn end_date(&self) -> Timestamp {
        self.end_date
    }

    /// Applies a forward-only extension, returning the new date set.
    ///
    /// Each provided date must be strictly later than the current value of
    /// the same milestone; unprovided milestones keep their current values.
    /// The four-milestone ordering is then re-validated as a whole, so the
    /// extension applies atomically or not at all.
    pub fn extended(&self, extension: &DateExtension) -> Result<CycleDates, ExtendDatesError> {
        let mut next = *self;

        if let Some(requested) = extension.application_deadline {
            Self::check_forward(Milestone::ApplicationDeadline, self.application_deadline, requested)?;
            next.application_deadline = requested;
        }
        if let Some(requested) = extension.interview_date {
            Self::check_forward(Milestone::InterviewDate, self.interview_date, requested)?;
            next.interview_date = requested;
        }
        if let Some(requested) = extension.selection_date {
            Self::check_forward(Milestone::SelectionDate, self.selection_date, requested)?;
            next.selection_date = requested;
        }
        if let Some(requested) = extension.end_date {
            Self::check_forward(Milestone::EndDate, self.end_date, requested)?;
            next.end_date = requested;
        }

        next.validate_milestone_chain()
            .map_err(|source| ExtendDatesError::OrderingViolation {
                reason: source.to_string(),
            })?;

        Ok(next)
    }

    fn check_forward(
        milestone: Milestone,
        current: Timestamp,
        requested: Timestamp,
    ) -> Result<(), ExtendDatesError> {
        if !requested.is_after(&current) {
            return Err(ExtendDatesError::NotMovedForward {
                milestone,
                current,
                requested,
            });
        }
        Ok(())
    }
}

/// Requested milestone changes. `None` means "leave unchanged".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateExtension {
    pub application_deadline: Option<Timestamp>,
    pub interview_date: Option<Timestamp>,
    pub selection_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}
