//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application layer and the outside world. Adapters implement them.
//!
//! - `CycleRepository` - Cycle aggregate persistence
//! - `CloseoutReader` - Operational counts blocking close-out
//! - `EventPublisher` - Domain event transport

mod closeout_reader;
mod cycle_repository;
mod event_publisher;

pub use closeout_reader::CloseoutReader;
pub use cycle_repository::{CycleRepository, RepositoryError};
pub use event_publisher::{EventPublisher, PublishError};
