//! ActivateCycleHandler - Command handler for starting the operational
//! phase of a cycle.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::cycle::{Cycle, CycleEvent, TransitionError};
use crate::domain::foundation::{CommandMetadata, CycleId, ErrorCode, EventEnvelope};
use crate::ports::{CycleRepository, EventPublisher, PublishError, RepositoryError};

/// Command to activate a cycle.
#[derive(Debug, Clone)]
pub struct ActivateCycleCommand {
    pub cycle_id: CycleId,
}

/// Result of successfully activating a cycle.
#[derive(Debug, Clone)]
pub struct ActivateCycleResult {
    pub cycle: Cycle,
    pub event: CycleEvent,
}

/// Error type for activating a cycle.
#[derive(Debug, Error)]
pub enum ActivateCycleError {
    #[error("cycle not found: {0}")]
    CycleNotFound(CycleId),
    #[error(transparent)]
    Domain(#[from] TransitionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl ActivateCycleError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::CycleNotFound(_) => ErrorCode::CycleNotFound,
            Self::Domain(e) => e.code(),
            Self::Repository(e) => e.code(),
            Self::Publish(_) => ErrorCode::StorageError,
        }
    }
}

/// Handler for activating cycles.
pub struct ActivateCycleHandler {
    cycle_repository: Arc<dyn CycleRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ActivateCycleHandler {
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
        cmd: ActivateCycleCommand,
        metadata: CommandMetadata,
    ) -> Result<ActivateCycleResult, ActivateCycleError> {
        let mut cycle = self
            .cycle_repository
            .find_by_id(cmd.cycle_id)
            .await?
            .ok_or(ActivateCycleError::CycleNotFound(cmd.cycle_id))?;

        let event = cycle.activate()?;

        self.cycle_repository.update(&cycle).await?;

        let envelope = EventEnvelope::from_event(&event)
            .with_correlation_id(metadata.correlation_id())
            .with_actor(metadata.actor.to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(ActivateCycleResult { cycle, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::cycle::test_support::{
        cycle_in, metadata, MockCycleRepository, MockEventPublisher,
    };
    use crate::domain::foundation::CycleStatus;

    #[tokio::test]
    async fn activates_cycle() {
        let cycle = cycle_in(CycleStatus::ApplicationsClosed, false);
        let cycle_id = cycle.id();
        let repository = Arc::new(MockCycleRepository::with_cycle(cycle));
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = ActivateCycleHandler::new(repository.clone(), publisher.clone());

        let result = handler
            .handle(ActivateCycleCommand { cycle_id }, metadata())
            .await
            .unwrap();

        assert_eq!(result.cycle.status(), CycleStatus::Active);
        assert!(result.cycle.is_operational());
        assert_eq!(publisher.published_events()[0].event_type, "cycle.activated");
    }

    #[tokio::test]
    async fn cannot_activate_straight_from_open() {
        let cycle = cycle_in(CycleStatus::ApplicationsOpen, false);
        let cycle_id = cycle.id();
        let repository = Arc::new(MockCycleRepository::with_cycle(cycle));
        let handler = ActivateCycleHandler::new(repository, Arc::new(MockEventPublisher::new()));

        let err = handler
            .handle(ActivateCycleCommand { cycle_id }, metadata())
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidTransition);
    }
}
