//! Closeout reader port (read side).
//!
//! Close-out preconditions depend on operational data that lives outside
//! this aggregate (shift approvals, scholar logbooks). The close handler
//! queries them through this port and feeds the counts into the domain.

use async_trait::async_trait;

use crate::domain::foundation::CycleId;

use super::cycle_repository::RepositoryError;

/// Read-only view over the operational records blocking a cycle close-out.
#[async_trait]
pub trait CloseoutReader: Send + Sync {
    /// Number of shifts in the cycle still awaiting approval or rejection.
    async fn pending_shift_count(&self, cycle_id: CycleId) -> Result<u32, RepositoryError>;

    /// Number of scholars in the cycle with an unsubmitted final logbook.
    async fn missing_logbook_count(&self, cycle_id: CycleId) -> Result<u32, RepositoryError>;
}
