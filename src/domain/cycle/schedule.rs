//! Weekly schedule slots owned by a cycle location.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ScheduleSlotId, ValidationError};

/// ISO day of week, 1 = Monday through 7 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub fn new(day: u8) -> Result<Self, ValidationError> {
        if !(1..=7).contains(&day) {
            return Err(ValidationError::out_of_range("day_of_week", 1, 7, day as i32));
        }
        Ok(Self(day))
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.0 {
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            6 => "Saturday",
            _ => "Sunday",
        };
        write!(f, "{}", name)
    }
}

/// A weekly recurring time window and staffing requirement.
///
/// Invariants: `start_time` strictly before `end_time`,
/// `required_scholars > 0`. Mutation only happens through the owning cycle
/// while it is modifiable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    id: ScheduleSlotId,
    day_of_week: DayOfWeek,
    start_time: NaiveTime,
    end_time: NaiveTime,
    required_scholars: u32,
}

impl ScheduleSlot {
    /// Creates a validated schedule slot.
    pub fn new(
        day_of_week: DayOfWeek,
        start_time: NaiveTime,
        end_time: NaiveTime,
        required_scholars: u32,
    ) -> Result<Self, ValidationError> {
        Self::validate_window(start_time, end_time, required_scholars)?;
        Ok(Self {
            id: ScheduleSlotId::new(),
            day_of_week,
            start_time,
            end_time,
            required_scholars,
        })
    }

    /// Rebuilds a slot from persisted data, bypassing validation.
    pub fn reconstitute(
        id: ScheduleSlotId,
        day_of_week: DayOfWeek,
        start_time: NaiveTime,
        end_time: NaiveTime,
        required_scholars: u32,
    ) -> Self {
        Self {
            id,
            day_of_week,
            start_time,
            end_time,
            required_scholars,
        }
    }

    fn validate_window(
        start_time: NaiveTime,
        end_time: NaiveTime,
        required_scholars: u32,
    ) -> Result<(), ValidationError> {
        if start_time >= end_time {
            return Err(ValidationError::invalid_order(
                "end_time",
                "must be strictly after start_time",
            ));
        }
        if required_scholars == 0 {
            return Err(ValidationError::not_positive(
                "required_scholars",
                required_scholars as i64,
            ));
        }
        Ok(())
    }

    pub fn id(&self) -> ScheduleSlotId {
        self.id
    }

    pub fn day_of_week(&self) -> DayOfWeek {
        self.day_of_week
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn required_scholars(&self) -> u32 {
        self.required_scholars
    }

    /// Replaces the time window and staffing requirement, re-validating.
    pub(crate) fn update(
        &mut self,
        start_time: NaiveTime,
        end_time: NaiveTime,
        required_scholars: u32,
    ) -> Result<(), ValidationError> {
        Self::validate_window(start_time, end_time, required_scholars)?;
        self.start_time = start_time;
        self.end_time = end_time;
        self.required_scholars = required_scholars;
        Ok(())
    }
}
