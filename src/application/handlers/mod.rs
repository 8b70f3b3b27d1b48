//! Command handlers, grouped by aggregate.

pub mod cycle;
