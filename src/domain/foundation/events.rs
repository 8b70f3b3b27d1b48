//! Event infrastructure for domain event publishing.
//!
//! The aggregate returns plain domain events from its operations; the
//! application layer wraps them in an [`EventEnvelope`] before handing them
//! to the publisher port. The envelope carries transport concerns (event id
//! for deduplication, type string for routing, correlation metadata) that
//! the domain event itself stays free of.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::Timestamp;

/// Trait implemented by domain events so they can be enveloped for transport.
pub trait DomainEvent: Send + Sync {
    /// Returns the event type string (e.g., "cycle.applications_opened").
    fn event_type(&self) -> &'static str;

    /// Returns the ID of the aggregate that emitted this event.
    fn aggregate_id(&self) -> String;

    /// Returns the type of aggregate (e.g., "Cycle").
    fn aggregate_type(&self) -> &'static str;
}

/// Unique identifier for events, used for deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates a new random EventId using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Correlation and audit context attached to an envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Links related operations across a single request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,

    /// The actor whose command produced this event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    /// Source of the originating command (e.g., "api", "scheduler").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Transport wrapper around a serialized domain event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub event_id: EventId,
    pub event_type: String,
    pub aggregate_id: String,
    pub aggregate_type: String,
    pub occurred_at: Timestamp,
    pub payload: JsonValue,
    pub metadata: EventMetadata,
}

impl EventEnvelope {
    /// Wraps a domain event for transport, stamping it with the current time.
    pub fn from_event<E: DomainEvent + Serialize>(event: &E) -> Self {
        Self {
            event_id: EventId::new(),
            event_type: event.event_type().to_string(),
            aggregate_id: event.aggregate_id(),
            aggregate_type: event.aggregate_type().to_string(),
            occurred_at: Timestamp::now(),
            payload: serde_json::to_value(event)
                .expect("domain event serialization should never fail"),
            metadata: EventMetadata::default(),
        }
    }

    /// Builder: attach a correlation ID.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.metadata.correlation_id = Some(id.into());
        self
    }

    /// Builder: attach the acting user.
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.metadata.actor = Some(actor.into());
        self
    }

    /// Builder: attach the command source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.metadata.source = Some(source.into());
        self
    }
}
