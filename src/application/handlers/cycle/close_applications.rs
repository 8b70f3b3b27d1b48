//! CloseCycleApplicationsHandler - Command handler for closing the
//! application intake ahead of the interview phase.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::cycle::{Cycle, CycleEvent, TransitionError};
use crate::domain::foundation::{CommandMetadata, CycleId, ErrorCode, EventEnvelope};
use crate::ports::{CycleRepository, EventPublisher, PublishError, RepositoryError};

/// Command to close a cycle's application intake.
#[derive(Debug, Clone)]
pub struct CloseCycleApplicationsCommand {
    pub cycle_id: CycleId,
}

/// Result of successfully closing applications.
#[derive(Debug, Clone)]
pub struct CloseCycleApplicationsResult {
    pub cycle: Cycle,
    pub event: CycleEvent,
}

/// Error type for closing applications.
#[derive(Debug, Error)]
pub enum CloseCycleApplicationsError {
    #[error("cycle not found: {0}")]
    CycleNotFound(CycleId),
    #[error(transparent)]
    Domain(#[from] TransitionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl CloseCycleApplicationsError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::CycleNotFound(_) => ErrorCode::CycleNotFound,
            Self::Domain(e) => e.code(),
            Self::Repository(e) => e.code(),
            Self::Publish(_) => ErrorCode::StorageError,
        }
    }
}

/// Handler for closing cycle applications.
pub struct CloseCycleApplicationsHandler {
    cycle_repository: Arc<dyn CycleRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CloseCycleApplicationsHandler {
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
        cmd: CloseCycleApplicationsCommand,
        metadata: CommandMetadata,
    ) -> Result<CloseCycleApplicationsResult, CloseCycleApplicationsError> {
        let mut cycle = self
            .cycle_repository
            .find_by_id(cmd.cycle_id)
            .await?
            .ok_or(CloseCycleApplicationsError::CycleNotFound(cmd.cycle_id))?;

        let event = cycle.close_applications()?;

        self.cycle_repository.update(&cycle).await?;

        let envelope = EventEnvelope::from_event(&event)
            .with_correlation_id(metadata.correlation_id())
            .with_actor(metadata.actor.to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(CloseCycleApplicationsResult { cycle, event })
    }
}
