//! Shared mock ports and fixtures for cycle handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::cycle::{CreateCycle, Cycle, LocationConfig, SlotConfig};
use crate::domain::foundation::{
    ActorId, CommandMetadata, CycleId, CycleStatus, EventEnvelope, Timestamp,
};
use crate::ports::{
    CloseoutReader, CycleRepository, EventPublisher, PublishError, RepositoryError,
};

// ─────────────────────────────────────────────────────────────────────
// Mock ports
// ─────────────────────────────────────────────────────────────────────

pub struct MockCycleRepository {
    cycles: Mutex<Vec<Cycle>>,
    saved: Mutex<Vec<Cycle>>,
    updated: Mutex<Vec<Cycle>>,
    fail_writes: bool,
}

impl MockCycleRepository {
    pub fn empty() -> Self {
        Self {
            cycles: Mutex::new(Vec::new()),
            saved: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
            fail_writes: false,
        }
    }

    pub fn with_cycle(cycle: Cycle) -> Self {
        Self {
            cycles: Mutex::new(vec![cycle]),
            ..Self::empty()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::empty()
        }
    }

    pub fn failing_with_cycle(cycle: Cycle) -> Self {
        Self {
            cycles: Mutex::new(vec![cycle]),
            fail_writes: true,
            ..Self::empty()
        }
    }

    pub fn saved_cycles(&self) -> Vec<Cycle> {
        self.saved.lock().unwrap().clone()
    }

    pub fn updated_cycles(&self) -> Vec<Cycle> {
        self.updated.lock().unwrap().clone()
    }
}

#[async_trait]
impl CycleRepository for MockCycleRepository {
    async fn save(&self, cycle: &Cycle) -> Result<(), RepositoryError> {
        if self.fail_writes {
            return Err(RepositoryError::storage("simulated save failure"));
        }
        self.saved.lock().unwrap().push(cycle.clone());
        self.cycles.lock().unwrap().push(cycle.clone());
        Ok(())
    }

    async fn update(&self, cycle: &Cycle) -> Result<(), RepositoryError> {
        if self.fail_writes {
            return Err(RepositoryError::storage("simulated update failure"));
        }
        self.updated.lock().unwrap().push(cycle.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: CycleId) -> Result<Option<Cycle>, RepositoryError> {
        Ok(self
            .cycles
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id() == id)
            .cloned())
    }

    async fn exists(&self, id: CycleId) -> Result<bool, RepositoryError> {
        Ok(self.cycles.lock().unwrap().iter().any(|c| c.id() == id))
    }
}

pub struct MockEventPublisher {
    published: Mutex<Vec<EventEnvelope>>,
}

impl MockEventPublisher {
    pub fn new() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
        }
    }

    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for MockEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), PublishError> {
        self.published.lock().unwrap().push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), PublishError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

pub struct MockCloseoutReader {
    pub pending_shifts: u32,
    pub missing_logbooks: u32,
}

impl MockCloseoutReader {
    pub fn clean() -> Arc<Self> {
        Arc::new(Self {
            pending_shifts: 0,
            missing_logbooks: 0,
        })
    }
}

#[async_trait]
impl CloseoutReader for MockCloseoutReader {
    async fn pending_shift_count(&self, _cycle_id: CycleId) -> Result<u32, RepositoryError> {
        Ok(self.pending_shifts)
    }

    async fn missing_logbook_count(&self, _cycle_id: CycleId) -> Result<u32, RepositoryError> {
        Ok(self.missing_logbooks)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Fixtures
// ─────────────────────────────────────────────────────────────────────

pub fn metadata() -> CommandMetadata {
    CommandMetadata::new(ActorId::new("admin").unwrap())
}

pub fn location_config() -> LocationConfig {
    LocationConfig {
        location_id: crate::domain::foundation::LocationId::new(),
        scholarships_available: 3,
        is_active: true,
        slots: vec![SlotConfig {
            day_of_week: 2,
            start_time: chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: chrono::NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            required_scholars: 1,
        }],
    }
}

fn create_input(dates_in_past: bool) -> CreateCycle {
    let t = Timestamp::now();
    let shift = if dates_in_past { -210 } else { 0 };
    CreateCycle {
        name: "Spring term".to_string(),
        department: "Athletics".to_string(),
        start_date: t.plus_days(shift + 10),
        application_deadline: t.plus_days(shift + 20),
        interview_date: t.plus_days(shift + 30),
        selection_date: t.plus_days(shift + 40),
        end_date: t.plus_days(shift + 170),
        total_scholarships: 8,
        created_by: ActorId::new("admin").unwrap(),
        cloned_from: None,
    }
}

/// Builds a cycle walked to `status`. With `ended` the milestone calendar
/// sits entirely in the past, so close-out is reachable.
pub fn cycle_in(status: CycleStatus, ended: bool) -> Cycle {
    let (mut cycle, _) = Cycle::create(create_input(ended)).unwrap();
    if status == CycleStatus::Configuration {
        return cycle;
    }
    cycle.configure(vec![location_config()], vec![]).unwrap();
    cycle.mark_renewal_process_completed().unwrap();
    cycle
        .open_applications(cycle.active_location_count())
        .unwrap();
    if status == CycleStatus::ApplicationsOpen {
        return cycle;
    }
    cycle.close_applications().unwrap();
    if status == CycleStatus::ApplicationsClosed {
        return cycle;
    }
    cycle.activate().unwrap();
    if status == CycleStatus::Active {
        return cycle;
    }
    cycle
        .close(
            0,
            0,
            ActorId::new("admin").unwrap(),
            cycle.dates().end_date().plus_secs(1),
        )
        .unwrap();
    cycle
}
