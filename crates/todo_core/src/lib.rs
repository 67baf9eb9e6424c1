//! Core domain logic for the todo list.
//! This crate is the single source of truth for task invariants.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{
    FilterParseError, TaskFilter, TaskId, TaskRecord, TaskState, TaskValidationError,
};
pub use store::todo_store::TodoStore;
pub use store::view::TodoView;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
