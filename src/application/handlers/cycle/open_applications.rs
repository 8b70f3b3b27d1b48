//! OpenCycleApplicationsHandler - Command handler for opening the
//! application intake.
//!
//! The active-location count is computed from the loaded aggregate rather
//! than taken from the caller, so a stale client cannot bypass the
//! precondition.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::cycle::{Cycle, CycleEvent, OpenApplicationsError};
use crate::domain::foundation::{CommandMetadata, CycleId, ErrorCode, EventEnvelope};
use crate::ports::{CycleRepository, EventPublisher, PublishError, RepositoryError};

/// Command to open a cycle's application intake.
#[derive(Debug, Clone)]
pub struct OpenCycleApplicationsCommand {
    pub cycle_id: CycleId,
}

/// Result of successfully opening applications.
#[derive(Debug, Clone)]
pub struct OpenCycleApplicationsResult {
    pub cycle: Cycle,
    pub event: CycleEvent,
}

/// Error type for opening applications.
#[derive(Debug, Error)]
pub enum OpenCycleApplicationsError {
    #[error("cycle not found: {0}")]
    CycleNotFound(CycleId),
    #[error(transparent)]
    Domain(#[from] OpenApplicationsError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl OpenCycleApplicationsError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::CycleNotFound(_) => ErrorCode::CycleNotFound,
            Self::Domain(e) => e.code(),
            Self::Repository(e) => e.code(),
            Self::Publish(_) => ErrorCode::StorageError,
        }
    }
}

/// Handler for opening cycle applications.
pub struct OpenCycleApplicationsHandler {
    cycle_repository: Arc<dyn CycleRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl OpenCycleApplicationsHandler {
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
        cmd: OpenCycleApplicationsCommand,
        metadata: CommandMetadata,
    ) -> Result<OpenCycleApplicationsResult, OpenCycleApplicationsError> {
        let mut cycle = self
            .cycle_repository
            .find_by_id(cmd.cycle_id)
            .await?
            .ok_or(OpenCycleApplicationsError::CycleNotFound(cmd.cycle_id))?;

        let active_locations = cycle.active_location_count();
        debug!(
            cycle_id = %cmd.cycle_id,
            active_locations,
            "opening cycle applications"
        );

        let event = cycle.open_applications(active_locations)?;

        self.cycle_repository.update(&cycle).await?;

        let envelope = EventEnvelope::from_event(&event)
            .with_correlation_id(metadata.correlation_id())
            .with_actor(metadata.actor.to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(OpenCycleApplicationsResult { cycle, event })
    }
}
