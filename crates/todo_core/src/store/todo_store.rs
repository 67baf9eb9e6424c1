//! Todo list state manager.
//!
//! # Responsibility
//! - Hold the ordered task collection (newest first) and the active filter.
//! - Allocate task ids from a per-store monotonic counter.
//! - Derive the visible list on demand without touching stored records.
//!
//! # Invariants
//! - Task ids are unique for the lifetime of the store and never reused.
//! - Relative order only changes by insertion at the front.
//! - Deriving a view never mutates `items`.
//! - Log events carry ids and counts only, never task text.

use crate::model::task::{TaskFilter, TaskId, TaskRecord, TaskValidationError};
use crate::store::view::TodoView;
use log::debug;
use uuid::Uuid;

/// Session-scoped owner of task records and the active filter.
#[derive(Debug)]
pub struct TodoStore {
    session_id: Uuid,
    items: Vec<TaskRecord>,
    filter: TaskFilter,
    next_id: u64,
}

impl TodoStore {
    /// Creates an empty store with `TaskFilter::All` active.
    pub fn new() -> Self {
        let store = Self {
            session_id: Uuid::new_v4(),
            items: Vec::new(),
            filter: TaskFilter::default(),
            next_id: 1,
        };
        debug!(
            "event=session_start module=store status=ok session={}",
            store.session_id
        );
        store
    }

    /// Identifier correlating log events of this store instance.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Adds a task built from `text` at the front of the list.
    ///
    /// Returns the new task id, or `None` when `text` is blank after
    /// trimming (no record is created in that case).
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let id = TaskId::new(self.next_id);
        let record = match TaskRecord::new(id, text) {
            Ok(record) => record,
            Err(err) => {
                debug!(
                    "event=task_add module=store status=noop reason={} session={}",
                    noop_reason(&err),
                    self.session_id
                );
                return None;
            }
        };
        self.advance_next_id();
        debug_assert!(
            self.position(id).is_none(),
            "task id {id} allocated twice"
        );
        self.items.insert(0, record);

        debug!(
            "event=task_add module=store status=ok session={} task_id={} total={}",
            self.session_id,
            id,
            self.items.len()
        );
        Some(id)
    }

    /// Flips completion on the record with `id`.
    ///
    /// Unknown ids are a no-op. Returns whether a record matched.
    pub fn toggle_completed(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            debug!(
                "event=task_toggle module=store status=noop reason=unknown_id session={} task_id={}",
                self.session_id, id
            );
            return false;
        };

        let state = self.items[index].toggle();
        debug!(
            "event=task_toggle module=store status=ok session={} task_id={} state={:?}",
            self.session_id, id, state
        );
        true
    }

    /// Removes the record with `id`, keeping the order of the rest.
    ///
    /// Unknown ids are a no-op. Returns whether a record matched.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            debug!(
                "event=task_remove module=store status=noop reason=unknown_id session={} task_id={}",
                self.session_id, id
            );
            return false;
        };

        self.items.remove(index);
        debug!(
            "event=task_remove module=store status=ok session={} task_id={} total={}",
            self.session_id,
            id,
            self.items.len()
        );
        true
    }

    /// Replaces the active filter. Stored records are untouched.
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
        debug!(
            "event=filter_set module=store status=ok session={} filter={}",
            self.session_id, filter
        );
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Derives the records visible under the active filter.
    ///
    /// Always returns a fresh owned sequence in store order.
    pub fn visible_items(&self) -> Vec<TaskRecord> {
        let filter = self.filter;
        self.items
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect()
    }

    /// Derives a full render snapshot: visible records plus summary counts.
    pub fn view(&self) -> TodoView {
        TodoView {
            filter: self.filter,
            items: self.visible_items(),
            total: self.items.len(),
            completed: self.completed_count(),
        }
    }

    pub fn get(&self, id: TaskId) -> Option<&TaskRecord> {
        self.items.iter().find(|record| record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items
            .iter()
            .filter(|record| record.is_completed())
            .count()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.items.iter().position(|record| record.id() == id)
    }

    fn advance_next_id(&mut self) {
        // Exhausting u64 ids means a construction bug, not bad input.
        self.next_id = self
            .next_id
            .checked_add(1)
            .expect("task id counter exhausted");
    }
}

fn noop_reason(err: &TaskValidationError) -> &'static str {
    match err {
        TaskValidationError::EmptyText => "empty_text",
        TaskValidationError::UntrimmedText => "untrimmed_text",
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TodoStore {
    fn drop(&mut self) {
        debug!(
            "event=session_end module=store status=ok session={} total={}",
            self.session_id,
            self.items.len()
        );
    }
}
