//! In-memory task state ownership.
//!
//! # Responsibility
//! - Own the task collection and active filter for one UI session.
//! - Apply add/toggle/remove/filter operations as total functions.
//!
//! # Invariants
//! - The store is the sole mutator of its records.
//! - Rejected input is absorbed as a no-op, never surfaced as an error.

pub mod todo_store;
pub mod view;
