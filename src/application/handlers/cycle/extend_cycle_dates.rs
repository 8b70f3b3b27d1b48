//! ExtendCycleDatesHandler - Command handler for pushing milestone
//! dates later.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::cycle::{Cycle, CycleEvent, DateExtension, ExtendDatesError};
use crate::domain::foundation::{CommandMetadata, CycleId, ErrorCode, EventEnvelope, Timestamp};
use crate::ports::{CycleRepository, EventPublisher, PublishError, RepositoryError};

/// Command to extend a cycle's milestone dates.
///
/// Omitted fields leave the corresponding milestone unchanged.
#[derive(Debug, Clone, Default)]
pub struct ExtendCycleDatesCommand {
    pub cycle_id: CycleId,
    pub application_deadline: Option<Timestamp>,
    pub interview_date: Option<Timestamp>,
    pub selection_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

/// Result of successfully extending dates.
#[derive(Debug, Clone)]
pub struct ExtendCycleDatesResult {
    pub cycle: Cycle,
    pub event: CycleEvent,
}

/// Error type for extending dates.
#[derive(Debug, Error)]
pub enum ExtendCycleDatesError {
    #[error("cycle not found: {0}")]
    CycleNotFound(CycleId),
    #[error(transparent)]
    Domain(#[from] ExtendDatesError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl ExtendCycleDatesError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::CycleNotFound(_) => ErrorCode::CycleNotFound,
            Self::Domain(e) => e.code(),
            Self::Repository(e) => e.code(),
            Self::Publish(_) => ErrorCode::StorageError,
        }
    }
}

/// Handler for extending cycle dates.
pub struct ExtendCycleDatesHandler {
    cycle_repository: Arc<dyn CycleRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ExtendCycleDatesHandler {
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
        cmd: ExtendCycleDatesCommand,
        metadata: CommandMetadata,
    ) -> Result<ExtendCycleDatesResult, ExtendCycleDatesError> {
        let mut cycle = self
            .cycle_repository
            .find_by_id(cmd.cycle_id)
            .await?
            .ok_or(ExtendCycleDatesError::CycleNotFound(cmd.cycle_id))?;

        let extension = DateExtension {
            application_deadline: cmd.application_deadline,
            interview_date: cmd.interview_date,
            selection_date: cmd.selection_date,
            end_date: cmd.end_date,
        };
        let event = cycle.extend_dates(&extension)?;

        self.cycle_repository.update(&cycle).await?;

        let envelope = EventEnvelope::from_event(&event)
            .with_correlation_id(metadata.correlation_id())
            .with_actor(metadata.actor.to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(ExtendCycleDatesResult { cycle, event })
    }
}
