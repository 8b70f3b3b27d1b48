//! Cycle-scoped location participation records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CycleLocationId, LocationId, ScheduleSlotId, ValidationError};

use super::capacity::CapacityLedger;
use super::config::LocationConfig;
use super::schedule::{DayOfWeek, ScheduleSlot};

/// A master location's participation in one cycle, with cycle-specific
/// capacity and weekly schedule requirements.
///
/// Owned exclusively by a [`Cycle`](super::Cycle); all mutators are
/// crate-private so state changes flow through the aggregate, which
/// re-checks its own status first. The record outlives the cycle's close
/// as part of the historical snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleLocation {
    id: CycleLocationId,
    location_id: LocationId,
    capacity: CapacityLedger,
    is_active: bool,
    slots: Vec<ScheduleSlot>,
}

impl CycleLocation {
    /// Creates a participation record from a configuration input.
    pub(crate) fn from_config(config: &LocationConfig) -> Result<Self, ValidationError> {
        Ok(Self {
            id: CycleLocationId::new(),
            location_id: config.location_id,
            capacity: CapacityLedger::new(config.scholarships_available)?,
            is_active: config.is_active,
            slots: Self::build_slots(&config.slots)?,
        })
    }

    /// Rebuilds a record from persisted data, bypassing validation.
    pub fn reconstitute(
        id: CycleLocationId,
        location_id: LocationId,
        capacity: CapacityLedger,
        is_active: bool,
        slots: Vec<ScheduleSlot>,
    ) -> Self {
        Self {
            id,
            location_id,
            capacity,
            is_active,
            slots,
        }
    }

    fn build_slots(configs: &[super::config::SlotConfig]) -> Result<Vec<ScheduleSlot>, ValidationError> {
        configs
            .iter()
            .map(|slot| {
                ScheduleSlot::new(
                    DayOfWeek::new(slot.day_of_week)?,
                    slot.start_time,
                    slot.end_time,
                    slot.required_scholars,
                )
            })
            .collect()
    }

    /// Applies a configuration update in place: capacity ceiling, active
    /// flag, and a wholesale replacement of the slot set. The assigned
    /// counter is preserved.
    pub(crate) fn apply_config(&mut self, config: &LocationConfig) -> Result<(), ValidationError> {
        let slots = Self::build_slots(&config.slots)?;
        self.capacity.set_available(config.scholarships_available)?;
        self.is_active = config.is_active;
        self.slots = slots;
        Ok(())
    }

    pub fn id(&self) -> CycleLocationId {
        self.id
    }

    pub fn location_id(&self) -> LocationId {
        self.location_id
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn scholarships_available(&self) -> u32 {
        self.capacity.available()
    }

    pub fn scholarships_assigned(&self) -> u32 {
        self.capacity.assigned()
    }

    /// Returns true if at least one scholarship slot remains.
    pub fn has_available_slots(&self) -> bool {
        self.capacity.has_available_slots()
    }

    /// Returns the number of unassigned scholarship slots.
    pub fn remaining_slots(&self) -> u32 {
        self.capacity.remaining_slots()
    }

    /// Iterates the owned schedule slots. No mutation handle is exposed.
    pub fn slots(&self) -> impl Iterator<Item = &ScheduleSlot> {
        self.slots.iter()
    }

    pub(crate) fn set_scholarships_available(&mut self, value: u32) -> Result<(), ValidationError> {
        self.capacity.set_available(value)
    }

    pub(crate) fn increment_assigned(&mut self, count: u32) {
        self.capacity.increment_assigned(count);
    }

    /// Idempotent: deactivating an inactive location is a no-op.
    pub(crate) fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Idempotent: activating an active location is a no-op.
    pub(crate) fn activate(&mut self) {
        self.is_active = true;
    }

    pub(crate) fn slot_mut(&mut self, slot_id: ScheduleSlotId) -> Option<&mut ScheduleSlot> {
        self.slots.iter_mut().find(|slot| slot.id() == slot_id)
    }
}
