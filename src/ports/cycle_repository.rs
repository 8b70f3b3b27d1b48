//! Cycle repository port (write side).
//!
//! Defines the contract for persisting and retrieving Cycle aggregates.
//! Implementations handle the actual storage operations.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::cycle::Cycle;
use crate::domain::foundation::{CycleId, ErrorCode};

/// Failures a repository adapter can surface to the application layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A concurrent writer updated the aggregate between load and store.
    #[error("concurrent modification of cycle {cycle_id}")]
    Conflict { cycle_id: CycleId },

    #[error("storage failure: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Conflict { .. } => ErrorCode::ConcurrencyConflict,
            Self::Storage { .. } => ErrorCode::StorageError,
        }
    }
}

/// Repository port for Cycle aggregate persistence.
///
/// Implementations must detect concurrent modification on `update` and
/// report it as `RepositoryError::Conflict`.
#[async_trait]
pub trait CycleRepository: Send + Sync {
    /// Save a new cycle.
    async fn save(&self, cycle: &Cycle) -> Result<(), RepositoryError>;

    /// Update an existing cycle.
    async fn update(&self, cycle: &Cycle) -> Result<(), RepositoryError>;

    /// Find a cycle by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: CycleId) -> Result<Option<Cycle>, RepositoryError>;

    /// Check if a cycle exists.
    async fn exists(&self, id: CycleId) -> Result<bool, RepositoryError>;
}
