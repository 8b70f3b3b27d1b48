//! ReopenCycleApplicationsHandler - Command handler for reopening a
//! closed application intake.
//!
//! Only the state transition is validated; the original open-time
//! preconditions are not re-checked.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::cycle::{Cycle, CycleEvent, TransitionError};
use crate::domain::foundation::{CommandMetadata, CycleId, ErrorCode, EventEnvelope};
use crate::ports::{CycleRepository, EventPublisher, PublishError, RepositoryError};

/// Command to reopen a cycle's application intake.
#[derive(Debug, Clone)]
pub struct ReopenCycleApplicationsCommand {
    pub cycle_id: CycleId,
}

/// Result of successfully reopening applications.
#[derive(Debug, Clone)]
pub struct ReopenCycleApplicationsResult {
    pub cycle: Cycle,
    pub event: CycleEvent,
}

/// Error type for reopening applications.
#[derive(Debug, Error)]
pub enum ReopenCycleApplicationsError {
    #[error("cycle not found: {0}")]
    CycleNotFound(CycleId),
    #[error(transparent)]
    Domain(#[from] TransitionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl ReopenCycleApplicationsError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::CycleNotFound(_) => ErrorCode::CycleNotFound,
            Self::Domain(e) => e.code(),
            Self::Repository(e) => e.code(),
            Self::Publish(_) => ErrorCode::StorageError,
        }
    }
}

/// Handler for reopening cycle applications.
pub struct ReopenCycleApplicationsHandler {
    cycle_repository: Arc<dyn CycleRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ReopenCycleApplicationsHandler {
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
        cmd: ReopenCycleApplicationsCommand,
        metadata: CommandMetadata,
    ) -> Result<ReopenCycleApplicationsResult, ReopenCycleApplicationsError> {
        let mut cycle = self
            .cycle_repository
            .find_by_id(cmd.cycle_id)
            .await?
            .ok_or(ReopenCycleApplicationsError::CycleNotFound(cmd.cycle_id))?;

        let event = cycle.reopen_applications()?;

        self.cycle_repository.update(&cycle).await?;

        let envelope = EventEnvelope::from_event(&event)
            .with_correlation_id(metadata.correlation_id())
            .with_actor(metadata.actor.to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(ReopenCycleApplicationsResult { cycle, event })
    }
}
