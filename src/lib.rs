//! ScholarWorks - Work-Scholarship Cycle Management
//!
//! This crate implements the cycle lifecycle and capacity allocation core
//! of a university work-scholarship program: a five-stage cycle state
//! machine, per-cycle configuration snapshots, and advisory capacity
//! ledgers.

pub mod application;
pub mod domain;
pub mod ports;
