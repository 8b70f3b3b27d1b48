//! Cycle command handlers.
//!
//! One file per command, each carrying its Command, Result, Error, and
//! Handler plus mock-backed tests.

mod activate_cycle;
mod close_applications;
mod close_cycle;
mod configure_cycle;
mod create_cycle;
mod extend_cycle_dates;
mod open_applications;
mod reopen_applications;

#[cfg(test)]
pub(crate) mod test_support;

pub use activate_cycle::{
    ActivateCycleCommand, ActivateCycleError, ActivateCycleHandler, ActivateCycleResult,
};
pub use close_applications::{
    CloseCycleApplicationsCommand, CloseCycleApplicationsError, CloseCycleApplicationsHandler,
    CloseCycleApplicationsResult,
};
pub use close_cycle::{
    CloseOutCycleCommand, CloseOutCycleError, CloseOutCycleHandler, CloseOutCycleResult,
};
pub use configure_cycle::{
    ConfigureCycleCommand, ConfigureCycleError, ConfigureCycleHandler, ConfigureCycleResult,
};
pub use create_cycle::{
    CreateCycleCommand, CreateCycleError, CreateCycleHandler, CreateCycleResult,
};
pub use extend_cycle_dates::{
    ExtendCycleDatesCommand, ExtendCycleDatesError, ExtendCycleDatesHandler,
    ExtendCycleDatesResult,
};
pub use open_applications::{
    OpenCycleApplicationsCommand, OpenCycleApplicationsError, OpenCycleApplicationsHandler,
    OpenCycleApplicationsResult,
};
pub use reopen_applications::{
    ReopenCycleApplicationsCommand, ReopenCycleApplicationsError, ReopenCycleApplicationsHandler,
    ReopenCycleApplicationsResult,
};
