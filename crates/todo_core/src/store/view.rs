//! Read-only render snapshot derived from store state.

use crate::model::task::{TaskFilter, TaskRecord};
use serde::Serialize;

/// Freshly computed snapshot for one re-render.
///
/// Owns its records; mutating a view never reaches back into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoView {
    /// Filter the items were derived under.
    pub filter: TaskFilter,
    /// Visible records, newest first.
    pub items: Vec<TaskRecord>,
    /// Number of records in the store regardless of filter.
    pub total: usize,
    /// Number of completed records in the store regardless of filter.
    pub completed: usize,
}

impl TodoView {
    /// Returns whether nothing is visible under the active filter.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of records still open.
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }
}
