//! CreateCycleHandler - Command handler for creating a new cycle.
//!
//! A new cycle starts in Configuration with an empty location snapshot.
//! Cloning an existing cycle is expressed through `cloned_from`; the
//! caller supplies the copied inputs, the new cycle only records the
//! provenance link.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::cycle::{CreateCycle, Cycle, CycleEvent};
use crate::domain::foundation::{
    CommandMetadata, CycleId, ErrorCode, EventEnvelope, Timestamp, ValidationError,
};
use crate::ports::{CycleRepository, EventPublisher, PublishError, RepositoryError};

/// Command to create a cycle.
#[derive(Debug, Clone)]
pub struct CreateCycleCommand {
    pub name: String,
    pub department: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub application_deadline: Timestamp,
    pub interview_date: Timestamp,
    pub selection_date: Timestamp,
    pub total_scholarships: u32,
    pub cloned_from: Option<CycleId>,
}

/// Result of successfully creating a cycle.
#[derive(Debug, Clone)]
pub struct CreateCycleResult {
    pub cycle: Cycle,
    pub event: CycleEvent,
}

/// Error type for creating a cycle.
#[derive(Debug, Error)]
pub enum CreateCycleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl CreateCycleError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(e) => e.code(),
            Self::Repository(e) => e.code(),
            Self::Publish(_) => ErrorCode::StorageError,
        }
    }
}

/// Handler for creating cycles.
pub struct CreateCycleHandler {
    cycle_repository: Arc<dyn CycleRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateCycleHandler {
    pub fn new(
        cycle_repository: Arc<dyn CycleRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            cycle_repository,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateCycleCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateCycleResult, CreateCycleError> {
        let (cycle, event) = Cycle::create(CreateCycle {
            name: cmd.name,
            department: cmd.department,
            start_date: cmd.start_date,
            end_date: cmd.end_date,
            application_deadline: cmd.application_deadline,
            interview_date: cmd.interview_date,
            selection_date: cmd.selection_date,
            total_scholarships: cmd.total_scholarships,
            created_by: metadata.actor.clone(),
            cloned_from: cmd.cloned_from,
        })?;

        self.cycle_repository.save(&cycle).await?;

        let envelope = EventEnvelope::from_event(&event)
            .with_correlation_id(metadata.correlation_id())
            .with_actor(metadata.actor.to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(CreateCycleResult { cycle, event })
    }
}
