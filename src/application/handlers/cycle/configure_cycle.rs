//! ConfigureCycleHandler - Command handler for replacing a cycle's
//! configuration snapshot.
//!
//! Accepts the full desired set of location and supervisor inputs and
//! applies them in one call. No domain event is emitted; configuration
//! churn is not part of the published lifecycle stream.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::cycle::{ConfigureError, Cycle, LocationConfig, SupervisorConfig};
use crate::domain::foundation::{CommandMetadata, CycleId, ErrorCode};
use crate::ports::{CycleRepository, RepositoryError};

/// Command to configure a cycle's locations and supervisors.
#[derive(Debug, Clone)]
pub struct ConfigureCycleCommand {
    pub cycle_id: CycleId,
    pub locations: Vec<LocationConfig>,
    pub supervisors: Vec<SupervisorConfig>,
}

/// Result of successfully configuring a cycle.
#[derive(Debug, Clone)]
pub struct ConfigureCycleResult {
    pub cycle: Cycle,
}

/// Error type for configuring a cycle.
#[derive(Debug, Error)]
pub enum ConfigureCycleError {
    #[error("cycle not found: {0}")]
    CycleNotFound(CycleId),
    #[error(transparent)]
    Domain(#[from] ConfigureError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ConfigureCycleError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::CycleNotFound(_) => ErrorCode::CycleNotFound,
            Self::Domain(e) => e.code(),
            Self::Repository(e) => e.code(),
        }
    }
}

/// Handler for configuring cycles.
pub struct ConfigureCycleHandler {
    cycle_repository: Arc<dyn CycleRepository>,
}

impl ConfigureCycleHandler {
    pub fn new(cycle_repository: Arc<dyn CycleRepository>) -> Self {
        Self { cycle_repository }
    }

    pub async fn handle(
        &self,
        cmd: ConfigureCycleCommand,
        _metadata: CommandMetadata,
    ) -> Result<ConfigureCycleResult, ConfigureCycleError> {
        let mut cycle = self
            .cycle_repository
            .find_by_id(cmd.cycle_id)
            .await?
            .ok_or(ConfigureCycleError::CycleNotFound(cmd.cycle_id))?;

        cycle.configure(cmd.locations, cmd.supervisors)?;

        self.cycle_repository.update(&cycle).await?;

        Ok(ConfigureCycleResult { cycle })
    }
}
