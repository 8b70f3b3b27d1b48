//! CloseOutCycleHandler - Command handler for closing out a cycle.
//!
//! Close-out preconditions span aggregates: the pending-shift and
//! missing-logbook counts come from the operational records read through
//! [`CloseoutReader`], while the end-date and state checks live in the
//! domain. The handler gathers the counts and the clock reading, then
//! hands everything to the aggregate in one call.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::cycle::{CloseCycleError, Cycle, CycleEvent};
use crate::domain::foundation::{CommandMetadata, CycleId, ErrorCode, EventEnvelope, Timestamp};
use crate::ports::{
    CloseoutReader, CycleRepository, EventPublisher, PublishError, RepositoryError,
};

/// Command to close out a cycle.
#[derive(Debug, Clone)]
pub struct CloseOutCycleCommand {
    pub cycle_id: CycleId,
}

/// Result of successfully closing out a cycle.
#[derive(Debug, Clone)]
pub struct CloseOutCycleResult {
    pub cycle: Cycle,
    pub event: CycleEvent,
}

/// Error type for closing out a cycle.
#[derive(Debug, Error)]
pub enum CloseOutCycleError {
    #[error("cycle not found: {0}")]
    CycleNotFound(CycleId),
    #[error(transparent)]
    Domain(#[from] CloseCycleError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl CloseOutCycleError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::CycleNotFound(_) => ErrorCode::CycleNotFound,
            Self::Domain(e) => e.code(),
            Self::Repository(e) => e.code(),
            Self::Publish(_) => ErrorCode::StorageError,
        }
    }
}

/// Handler for closing out cycles.
pub struct CloseOutCycleHandler {
    cycle_repository: Arc<dyn CycleRepository>,
    closeout_reader: Arc<dyn CloseoutReader>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CloseOutCycleHandler {
    pub fn new(
        cycle_repository: Arc<dyn CycleRepository>,
        closeout_reader: Arc<dyn CloseoutReader>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            cycle_repository,
            closeout_reader,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CloseOutCycleCommand,
        metadata: CommandMetadata,
    ) -> Result<CloseOutCycleResult, CloseOutCycleError> {
        let mut cycle = self
            .cycle_repository
            .find_by_id(cmd.cycle_id)
            .await?
            .ok_or(CloseOutCycleError::CycleNotFound(cmd.cycle_id))?;

        let pending_shifts = self.closeout_reader.pending_shift_count(cmd.cycle_id).await?;
        let missing_logbooks = self
            .closeout_reader
            .missing_logbook_count(cmd.cycle_id)
            .await?;
        debug!(
            cycle_id = %cmd.cycle_id,
            pending_shifts,
            missing_logbooks,
            "attempting cycle close-out"
        );

        let event = cycle.close(
            pending_shifts,
            missing_logbooks,
            metadata.actor.clone(),
            Timestamp::now(),
        )?;

        self.cycle_repository.update(&cycle).await?;

        let envelope = EventEnvelope::from_event(&event)
            .with_correlation_id(metadata.correlation_id())
            .with_actor(metadata.actor.to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(CloseOutCycleResult { cycle, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::cycle::test_support::{
        cycle_in, metadata, MockCloseoutReader, MockCycleRepository, MockEventPublisher,
    };
    use crate::domain::foundation::CycleStatus;

    #[tokio::test]
    async fn closes_out_when_records_are_clean() {
        let cycle = cycle_in(CycleStatus::Active, true);
        let cycle_id = cycle.id();
        let repository = Arc::new(MockCycleRepository::with_cycle(cycle));
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = CloseOutCycleHandler::new(
            repository.clone(),
            MockCloseoutReader::clean(),
            publisher.clone(),
        );

        let result = handler
            .handle(CloseOutCycleCommand { cycle_id }, metadata())
            .await
            .unwrap();

        assert_eq!(result.cycle.status(), CycleStatus::Closed);
        assert_eq!(result.cycle.closed_by().unwrap().as_str(), "admin");
        assert_eq!(repository.updated_cycles().len(), 1);
        assert_eq!(publisher.published_events()[0].event_type, "cycle.closed");
    }

    #[tokio::test]
    async fn pending_shifts_block_close_out() {
        let cycle = cycle_in(CycleStatus::Active, true);
        let cycle_id = cycle.id();
        let repository = Arc::new(MockCycleRepository::with_cycle(cycle));
        let publisher = Arc::new(MockEventPublisher::new());
        let reader = Arc::new(MockCloseoutReader {
            pending_shifts: 4,
            missing_logbooks: 2,
        });
        let handler = CloseOutCycleHandler::new(repository.clone(), reader, publisher.clone());

        let err = handler
            .handle(CloseOutCycleCommand { cycle_id }, metadata())
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::PendingShifts);
        assert!(err.to_string().contains('4'));
        assert!(repository.updated_cycles().is_empty());
        assert!(publisher.published_events().is_empty());
    }

    #[tokio::test]
    async fn missing_logbooks_block_close_out() {
        let cycle = cycle_in(CycleStatus::Active, true);
        let cycle_id = cycle.id();
        let repository = Arc::new(MockCycleRepository::with_cycle(cycle));
        let reader = Arc::new(MockCloseoutReader {
            pending_shifts: 0,
            missing_logbooks: 2,
        });
        let handler =
            CloseOutCycleHandler::new(repository, reader, Arc::new(MockEventPublisher::new()));

        let err = handler
            .handle(CloseOutCycleCommand { cycle_id }, metadata())
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::MissingLogbooks);
    }

    #[tokio::test]
    async fn close_out_before_end_date_fails() {
        let cycle = cycle_in(CycleStatus::Active, false);
        let cycle_id = cycle.id();
        let repository = Arc::new(MockCycleRepository::with_cycle(cycle));
        let handler = CloseOutCycleHandler::new(
            repository,
            MockCloseoutReader::clean(),
            Arc::new(MockEventPublisher::new()),
        );

        let err = handler
            .handle(CloseOutCycleCommand { cycle_id }, metadata())
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::CycleNotEnded);
    }
}
