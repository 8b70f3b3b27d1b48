//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between
//! ports. Handlers load the aggregate, invoke one domain operation,
//! persist the result, and publish the emitted event.

pub mod handlers;

pub use handlers::cycle::{
    ActivateCycleCommand, ActivateCycleHandler, ActivateCycleResult,
    CloseCycleApplicationsCommand, CloseCycleApplicationsHandler, CloseCycleApplicationsResult,
    CloseOutCycleCommand, CloseOutCycleHandler, CloseOutCycleResult, ConfigureCycleCommand,
    ConfigureCycleHandler, ConfigureCycleResult, CreateCycleCommand, CreateCycleHandler,
    CreateCycleResult, ExtendCycleDatesCommand, ExtendCycleDatesHandler, ExtendCycleDatesResult,
    OpenCycleApplicationsCommand, OpenCycleApplicationsHandler, OpenCycleApplicationsResult,
    ReopenCycleApplicationsCommand, ReopenCycleApplicationsHandler,
    ReopenCycleApplicationsResult,
};
