//! Domain layer. Pure business logic with no I/O; adapters depend on this
//! layer, never the reverse.

pub mod cycle;
pub mod foundation;
