//! EventPublisher port - Interface for publishing domain events.
//!
//! This port defines how the application publishes events without knowing
//! about the underlying transport mechanism.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::EventEnvelope;

#[derive(Debug, Error)]
#[error("event publish failed: {message}")]
pub struct PublishError {
    pub message: String,
}

impl PublishError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Port for publishing domain events.
///
/// Implementations must deliver at-least-once; handlers may receive
/// duplicates and deduplicate on the envelope's event ID.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), PublishError>;

    /// Publish multiple events.
    ///
    /// Adapters without atomic multi-publish deliver sequentially with
    /// best-effort semantics.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), PublishError>;
}
