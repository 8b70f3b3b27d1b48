//! Command infrastructure for CQRS handlers.
//!
//! Handlers accept a single `CommandMetadata` instead of loose
//! `actor`/`correlation_id`/`trace_id` parameters, keeping signatures stable
//! as context fields grow.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ActorId;

/// Metadata context for command handlers.
///
/// Carries the acting user plus tracing and correlation context through the
/// command pipeline, and is propagated onto emitted event envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The actor executing this command.
    pub actor: ActorId,

    /// Links related operations across a single request.
    /// Generated lazily if not provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Distributed tracing span/trace ID, propagated from incoming requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,

    /// Source of this command (e.g., "api", "scheduler").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates new command metadata for an actor.
    pub fn new(actor: ActorId) -> Self {
        Self {
            actor,
            correlation_id: None,
            trace_id: None,
            source: None,
        }
    }

    /// Builder: add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: add trace ID for distributed tracing.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Builder: add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if none was supplied.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the trace ID if present.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Returns the command source if present.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}
