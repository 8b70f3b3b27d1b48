//! Input types for the whole-cycle configuration operation.
//!
//! These describe the desired configuration snapshot; `Cycle::configure`
//! validates them and reconciles the owned collections against them.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LocationId, SupervisorId};

/// Desired participation of one master location in the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub location_id: LocationId,
    pub scholarships_available: u32,
    pub is_active: bool,
    pub slots: Vec<SlotConfig>,
}

/// Desired weekly schedule requirement for a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    /// ISO day of week, 1 = Monday through 7 = Sunday.
    pub day_of_week: u8,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub required_scholars: u32,
}

/// Desired supervisor assignment, naming the master location it covers.
///
/// The full assignment set is replaced wholesale on every configure call,
/// so a shorter list genuinely shrinks the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupervisorConfig {
    pub supervisor_id: SupervisorId,
    pub location_id: LocationId,
}
