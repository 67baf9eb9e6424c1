//! Domain model for the todo list.
//!
//! # Responsibility
//! - Define canonical data structures used by the store and UI layers.
//!
//! # Invariants
//! - Every record is identified by a `TaskId` that is never reused.
//! - Filters are a closed set; no other value is representable.

pub mod task;
