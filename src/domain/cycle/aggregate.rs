//! Cycle aggregate - the root entity for work-scholarship cycles.
//!
//! A Cycle owns its per-cycle configuration snapshot (locations, schedule
//! slots, supervisor assignments) and governs the five-stage lifecycle from
//! Configuration through Closed. All child mutation flows through the
//! aggregate so the owning cycle's status is re-checked at call time.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ActorId, CycleId, CycleLocationId, CycleStatus, ScheduleSlotId, Timestamp, ValidationError,
};

use super::capacity::CapacityLedger;
use super::config::{LocationConfig, SupervisorConfig};
use super::dates::{CycleDates, DateExtension};
use super::errors::{
    CloseCycleError, ConfigureError, CycleClosedError, ExtendDatesError, LocationUpdateError,
    OpenApplicationsError, TransitionError,
};
use super::events::CycleEvent;
use super::location::CycleLocation;
use super::supervisor::SupervisorAssignment;

/// Inputs for creating a cycle.
#[derive(Debug, Clone)]
pub struct CreateCycle {
    pub name: String,
    pub department: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub application_deadline: Timestamp,
    pub interview_date: Timestamp,
    pub selection_date: Timestamp,
    pub total_scholarships: u32,
    pub created_by: ActorId,
    /// Provenance link when this cycle was cloned from a previous term.
    pub cloned_from: Option<CycleId>,
}

/// The Cycle aggregate root.
///
/// Constructed only through [`Cycle::create`] (which validates every
/// invariant before a value exists) or [`Cycle::reconstitute`] (repository
/// rehydration). Operations return the single domain event they emit;
/// nothing is buffered on the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    id: CycleId,
    name: String,
    department: String,
    status: CycleStatus,
    dates: CycleDates,
    capacity: CapacityLedger,
    renewal_process_completed: bool,
    closed_at: Option<Timestamp>,
    closed_by: Option<ActorId>,
    cloned_from: Option<CycleId>,
    created_by: ActorId,
    created_at: Timestamp,
    updated_at: Timestamp,
    locations: Vec<CycleLocation>,
    supervisors: Vec<SupervisorAssignment>,
}

impl Cycle {
    /// Creates a cycle in Configuration, validating all invariants first.
    ///
    /// Emits `CycleEvent::Created`.
    pub fn create(input: CreateCycle) -> Result<(Self, CycleEvent), ValidationError> {
        if input.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if input.department.trim().is_empty() {
            return Err(ValidationError::empty_field("department"));
        }

        let capacity = CapacityLedger::new(input.total_scholarships)
            .map_err(|_| ValidationError::not_positive(
                "total_scholarships",
                input.total_scholarships as i64,
            ))?;

        let dates = CycleDates::new(
            input.start_date,
            input.application_deadline,
            input.interview_date,
            input.selection_date,
            input.end_date,
        )?;

        let id = CycleId::new();
        let now = Timestamp::now();

        let cycle = Self {
            id,
            name: input.name,
            department: input.department,
            status: CycleStatus::Configuration,
            dates,
            capacity,
            renewal_process_completed: false,
            closed_at: None,
            closed_by: None,
            cloned_from: input.cloned_from,
            created_by: input.created_by,
            created_at: now,
            updated_at: now,
            locations: Vec::new(),
            supervisors: Vec::new(),
        };

        let event = CycleEvent::Created {
            cycle_id: id,
            created_at: now,
        };

        Ok((cycle, event))
    }

    /// Reconstitutes a cycle from persisted data.
    ///
    /// Used by repository implementations; bypasses invariant validation
    /// and emits no event.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: CycleId,
        name: String,
        department: String,
        status: CycleStatus,
        dates: CycleDates,
        capacity: CapacityLedger,
        renewal_process_completed: bool,
        closed_at: Option<Timestamp>,
        closed_by: Option<ActorId>,
        cloned_from: Option<CycleId>,
        created_by: ActorId,
        created_at: Timestamp,
        updated_at: Timestamp,
        locations: Vec<CycleLocation>,
        supervisors: Vec<SupervisorAssignment>,
    ) -> Self {
        Self {
            id,
            name,
            department,
            status,
            dates,
            capacity,
            renewal_process_completed,
            closed_at,
            closed_by,
            cloned_from,
            created_by,
            created_at,
            updated_at,
            locations,
            supervisors,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> CycleId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn status(&self) -> CycleStatus {
        self.status
    }

    pub fn dates(&self) -> &CycleDates {
        &self.dates
    }

    pub fn total_scholarships_available(&self) -> u32 {
        self.capacity.available()
    }

    pub fn total_scholarships_assigned(&self) -> u32 {
        self.capacity.assigned()
    }

    /// Returns true if at least one cycle-level scholarship slot remains.
    pub fn has_available_slots(&self) -> bool {
        self.capacity.has_available_slots()
    }

    /// Returns the number of unassigned cycle-level scholarship slots.
    pub fn remaining_slots(&self) -> u32 {
        self.capacity.remaining_slots()
    }

    pub fn renewal_process_completed(&self) -> bool {
        self.renewal_process_completed
    }

    pub fn closed_at(&self) -> Option<Timestamp> {
        self.closed_at
    }

    pub fn closed_by(&self) -> Option<&ActorId> {
        self.closed_by.as_ref()
    }

    pub fn cloned_from(&self) -> Option<CycleId> {
        self.cloned_from
    }

    pub fn created_by(&self) -> &ActorId {
        &self.created_by
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Iterates the owned location records. No mutation handle is exposed.
    pub fn locations(&self) -> impl Iterator<Item = &CycleLocation> {
        self.locations.iter()
    }

    /// Iterates the current supervisor assignment set.
    pub fn supervisors(&self) -> impl Iterator<Item = &SupervisorAssignment> {
        self.supervisors.iter()
    }

    /// Looks up an owned location by its cycle-scoped id.
    pub fn location(&self, id: CycleLocationId) -> Option<&CycleLocation> {
        self.locations.iter().find(|l| l.id() == id)
    }

    /// Counts locations currently participating in the cycle.
    pub fn active_location_count(&self) -> u32 {
        self.locations.iter().filter(|l| l.is_active()).count() as u32
    }

    // ───────────────────────────────────────────────────────────────
    // Computed predicates
    // ───────────────────────────────────────────────────────────────

    pub fn is_modifiable(&self) -> bool {
        self.status.is_modifiable()
    }

    pub fn accepts_applications(&self) -> bool {
        self.status.accepts_applications()
    }

    pub fn is_operational(&self) -> bool {
        self.status.is_operational()
    }

    pub fn is_closed(&self) -> bool {
        self.status.is_closed()
    }

    // ───────────────────────────────────────────────────────────────
    // Lifecycle transitions
    // ───────────────────────────────────────────────────────────────

    /// Opens the application intake.
    ///
    /// Preconditions checked in order: at least one active location, a
    /// positive scholarship allotment, renewal process completed, and
    /// the cycle still in Configuration. Emits `ApplicationsOpened`.
    pub fn open_applications(
        &mut self,
        active_location_count: u32,
    ) -> Result<CycleEvent, OpenApplicationsError> {
        if active_location_count == 0 {
            return Err(OpenApplicationsError::NoLocations);
        }
        if self.capacity.available() == 0 {
            return Err(OpenApplicationsError::NoScholarships);
        }
        if !self.renewal_process_completed {
            return Err(OpenApplicationsError::RenewalsPending);
        }
        if self.status != CycleStatus::Configuration {
            return Err(OpenApplicationsError::InvalidTransition {
                status: self.status,
            });
        }

        self.status = CycleStatus::ApplicationsOpen;
        self.touch();
        Ok(CycleEvent::ApplicationsOpened { cycle_id: self.id })
    }

    /// Closes the application intake for the interview phase.
    ///
    /// Emits `ApplicationsClosed`.
    pub fn close_applications(&mut self) -> Result<CycleEvent, TransitionError> {
        if self.status != CycleStatus::ApplicationsOpen {
            return Err(TransitionError {
                operation: "close applications",
                status: self.status,
            });
        }

        self.status = CycleStatus::ApplicationsClosed;
        self.touch();
        Ok(CycleEvent::ApplicationsClosed { cycle_id: self.id })
    }

    /// Reopens the application intake after it was closed.
    ///
    /// Escape valve: only the state is checked. The original open-time
    /// preconditions (active locations, renewals) are deliberately not
    /// re-verified, so reopening after the configuration has since been
    /// invalidated is permitted. Emits `ApplicationsReopened`.
    pub fn reopen_applications(&mut self) -> Result<CycleEvent, TransitionError> {
        if self.status != CycleStatus::ApplicationsClosed {
            return Err(TransitionError {
                operation: "reopen applications",
                status: self.status,
            });
        }

        self.status = CycleStatus::ApplicationsOpen;
        self.touch();
        Ok(CycleEvent::ApplicationsReopened { cycle_id: self.id })
    }

    /// Starts the operational phase of the cycle.
    ///
    /// Emits `Activated`.
    pub fn activate(&mut self) -> Result<CycleEvent, TransitionError> {
        if self.status != CycleStatus::ApplicationsClosed {
            return Err(TransitionError {
                operation: "activate cycle",
                status: self.status,
            });
        }

        self.status = CycleStatus::Active;
        self.touch();
        Ok(CycleEvent::Activated { cycle_id: self.id })
    }

    /// Closes the cycle out, making it a read-only historical record.
    ///
    /// `now` is injected rather than read from the wall clock so the check
    /// against the end date stays deterministic. Preconditions in order:
    /// Active status, end date reached, no pending shift approvals, no
    /// scholars missing logbooks. Emits `Closed`.
    pub fn close(
        &mut self,
        pending_shifts_count: u32,
        missing_logbooks_count: u32,
        closed_by: ActorId,
        now: Timestamp,
    ) -> Result<CycleEvent, CloseCycleError> {
        if self.status != CycleStatus::Active {
            return Err(CloseCycleError::InvalidTransition {
                status: self.status,
            });
        }
        if now.is_before(&self.dates.end_date()) {
            return Err(CloseCycleError::CycleNotEnded {
                end_date: self.dates.end_date(),
            });
        }
        if pending_shifts_count > 0 {
            return Err(CloseCycleError::PendingShifts {
                count: pending_shifts_count,
            });
        }
        if missing_logbooks_count > 0 {
            return Err(CloseCycleError::MissingLogbooks {
                count: missing_logbooks_count,
            });
        }

        self.status = CycleStatus::Closed;
        self.closed_at = Some(now);
        self.closed_by = Some(closed_by.clone());
        self.updated_at = now;
        Ok(CycleEvent::Closed {
            cycle_id: self.id,
            closed_at: now,
            closed_by,
        })
    }

    // ───────────────────────────────────────────────────────────────
    // Progress flags and capacity
    // ───────────────────────────────────────────────────────────────

    /// Marks the external renewal workflow as completed.
    ///
    /// Idempotent; legal in any non-closed state. A precondition for
    /// `open_applications`, with no transition effect of its own.
    pub fn mark_renewal_process_completed(&mut self) -> Result<(), CycleClosedError> {
        if self.status.is_closed() {
            return Err(CycleClosedError);
        }
        self.renewal_process_completed = true;
        self.touch();
        Ok(())
    }

    /// Records `count` additional cycle-level scholarship assignments.
    ///
    /// Monotonic, and deliberately unchecked against the available
    /// ceiling; callers consult `has_available_slots` first.
    pub fn increment_assigned_scholarships(&mut self, count: u32) -> Result<(), CycleClosedError> {
        if self.status.is_closed() {
            return Err(CycleClosedError);
        }
        self.capacity.increment_assigned(count);
        self.touch();
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Date extension
    // ───────────────────────────────────────────────────────────────

    /// Extends milestone dates, forward only.
    ///
    /// Rejected outright while Closed, and while ApplicationsClosed (the
    /// interview phase freezes the calendar). Each provided date must move
    /// strictly forward and the milestone ordering is re-validated as a
    /// whole; all provided fields apply atomically. Emits `DatesExtended`.
    pub fn extend_dates(
        &mut self,
        extension: &DateExtension,
    ) -> Result<CycleEvent, ExtendDatesError> {
        if self.status.is_closed() {
            return Err(ExtendDatesError::CycleClosed);
        }
        if self.status == CycleStatus::ApplicationsClosed {
            return Err(ExtendDatesError::Frozen);
        }

        self.dates = self.dates.extended(extension)?;
        self.touch();
        Ok(CycleEvent::DatesExtended { cycle_id: self.id })
    }

    // ───────────────────────────────────────────────────────────────
    // Configuration snapshot
    // ───────────────────────────────────────────────────────────────

    /// Replaces the cycle's configuration snapshot in one atomic operation.
    ///
    /// Location inputs are upserted per (cycle, location) pair: absent ones
    /// are created with their schedule slots, existing ones are updated in
    /// place. Locations omitted from the input are left untouched;
    /// deactivation is only ever explicit via the `is_active` flag.
    /// Supervisor assignments are replaced wholesale: the prior set is
    /// removed and the input list inserted fresh. Any validation failure
    /// leaves the cycle unchanged.
    pub fn configure(
        &mut self,
        locations: Vec<LocationConfig>,
        supervisors: Vec<SupervisorConfig>,
    ) -> Result<(), ConfigureError> {
        if !self.status.is_modifiable() {
            return Err(ConfigureError::CycleClosed);
        }

        for (i, config) in locations.iter().enumerate() {
            if locations[..i]
                .iter()
                .any(|other| other.location_id == config.location_id)
            {
                return Err(ConfigureError::DuplicateLocation {
                    location_id: config.location_id,
                });
            }
        }

        // Stage the new state on copies so a failure midway cannot leave a
        // half-applied snapshot.
        let mut next_locations = self.locations.clone();
        for config in &locations {
            match next_locations
                .iter_mut()
                .find(|l| l.location_id() == config.location_id)
            {
                Some(existing) => existing.apply_config(config)?,
                None => next_locations.push(CycleLocation::from_config(config)?),
            }
        }

        let mut next_supervisors = Vec::with_capacity(supervisors.len());
        for assignment in &supervisors {
            let location = next_locations
                .iter()
                .find(|l| l.location_id() == assignment.location_id)
                .ok_or(ConfigureError::LocationNotInCycle {
                    location_id: assignment.location_id,
                })?;
            next_supervisors.push(SupervisorAssignment::new(
                assignment.supervisor_id,
                location.id(),
            ));
        }

        self.locations = next_locations;
        self.supervisors = next_supervisors;
        self.touch();
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Location operations (routed through the aggregate)
    // ───────────────────────────────────────────────────────────────

    /// Updates a location's scholarship capacity ceiling.
    pub fn update_location_capacity(
        &mut self,
        id: CycleLocationId,
        scholarships_available: u32,
    ) -> Result<(), LocationUpdateError> {
        let location = self.location_for_update(id)?;
        location.set_scholarships_available(scholarships_available)?;
        self.touch();
        Ok(())
    }

    /// Withdraws a location from the cycle. Idempotent.
    pub fn deactivate_location(&mut self, id: CycleLocationId) -> Result<(), LocationUpdateError> {
        self.location_for_update(id)?.deactivate();
        self.touch();
        Ok(())
    }

    /// Restores a location's participation in the cycle. Idempotent.
    pub fn activate_location(&mut self, id: CycleLocationId) -> Result<(), LocationUpdateError> {
        self.location_for_update(id)?.activate();
        self.touch();
        Ok(())
    }

    /// Records `count` additional assignments against a location's ledger.
    /// Unchecked against the location ceiling, like the cycle-level counter.
    pub fn increment_location_assigned(
        &mut self,
        id: CycleLocationId,
        count: u32,
    ) -> Result<(), LocationUpdateError> {
        self.location_for_update(id)?.increment_assigned(count);
        self.touch();
        Ok(())
    }

    /// Rewrites one schedule slot's time window and staffing requirement.
    pub fn update_schedule_slot(
        &mut self,
        location_id: CycleLocationId,
        slot_id: ScheduleSlotId,
        start_time: NaiveTime,
        end_time: NaiveTime,
        required_scholars: u32,
    ) -> Result<(), LocationUpdateError> {
        let location = self.location_for_update(location_id)?;
        let slot = location
            .slot_mut(slot_id)
            .ok_or(LocationUpdateError::SlotNotFound { id: slot_id })?;
        slot.update(start_time, end_time, required_scholars)?;
        self.touch();
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Internal helpers
    // ───────────────────────────────────────────────────────────────

    fn location_for_update(
        &mut self,
        id: CycleLocationId,
    ) -> Result<&mut CycleLocation, LocationUpdateError> {
        if !self.status.is_modifiable() {
            return Err(LocationUpdateError::CycleClosed);
        }
        self.locations
            .iter_mut()
            .find(|l| l.id() == id)
            .ok_or(LocationUpdateError::LocationNotFound { id })
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
