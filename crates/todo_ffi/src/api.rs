//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one opaque `TodoSession` per UI session to Dart via FRB.
//! - Convert ids and filters to and from plain strings at the boundary.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - No store is global; every session owns its own `TodoStore`.
//! - Rejected input is reported with `ok=false`, never as a Dart exception.

use log::warn;
use todo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    TaskFilter, TaskId, TaskRecord, TodoStore,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One row of the rendered todo list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    /// Stable task ID in string form.
    pub task_id: String,
    pub text: String,
    pub completed: bool,
}

/// Render envelope for the todo list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListResponse {
    /// Visible items, newest first.
    pub items: Vec<TodoItem>,
    /// Active filter id (`all|completed`).
    pub filter: String,
    /// Record count regardless of filter.
    pub total: u32,
    /// Completed record count regardless of filter.
    pub completed: u32,
    /// Empty-state text when nothing is visible.
    pub empty_message: Option<String>,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoActionResponse {
    /// Whether the action changed session state.
    pub ok: bool,
    /// Affected task ID, when one applies.
    pub task_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TodoActionResponse {
    fn success(message: impl Into<String>, task_id: Option<TaskId>) -> Self {
        Self {
            ok: true,
            task_id: task_id.map(|id| id.to_string()),
            message: message.into(),
        }
    }

    fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

/// Todo list state owned by one UI session.
///
/// Dart holds this as an opaque handle and drops it when the screen goes away.
#[flutter_rust_bridge::frb(opaque)]
pub struct TodoSession {
    store: TodoStore,
}

impl TodoSession {
    /// Starts a session with an empty list and the `all` filter.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self {
            store: TodoStore::new(),
        }
    }

    /// Adds a task from submitted form text.
    #[flutter_rust_bridge::frb(sync)]
    pub fn add_task(&mut self, text: String) -> TodoActionResponse {
        match self.store.add(text.as_str()) {
            Some(id) => TodoActionResponse::success("Task added.", Some(id)),
            None => TodoActionResponse::rejected("Task text is empty."),
        }
    }

    /// Flips completion of one task.
    #[flutter_rust_bridge::frb(sync)]
    pub fn toggle_task(&mut self, task_id: String) -> TodoActionResponse {
        let Some(id) = parse_task_id(task_id.as_str()) else {
            return TodoActionResponse::rejected(format!("invalid task id: `{task_id}`"));
        };
        if self.store.toggle_completed(id) {
            TodoActionResponse::success("Task toggled.", Some(id))
        } else {
            TodoActionResponse::rejected(format!("task not found: {id}"))
        }
    }

    /// Deletes one task.
    #[flutter_rust_bridge::frb(sync)]
    pub fn remove_task(&mut self, task_id: String) -> TodoActionResponse {
        let Some(id) = parse_task_id(task_id.as_str()) else {
            return TodoActionResponse::rejected(format!("invalid task id: `{task_id}`"));
        };
        if self.store.remove(id) {
            TodoActionResponse::success("Task deleted.", Some(id))
        } else {
            TodoActionResponse::rejected(format!("task not found: {id}"))
        }
    }

    /// Switches the list filter (`all|completed`).
    ///
    /// Unknown values keep the current filter.
    #[flutter_rust_bridge::frb(sync)]
    pub fn set_filter(&mut self, filter: String) -> TodoActionResponse {
        match filter.parse::<TaskFilter>() {
            Ok(parsed) => {
                self.store.set_filter(parsed);
                TodoActionResponse::success(format!("Showing {}.", parsed.as_str()), None)
            }
            Err(err) => {
                warn!("event=filter_set module=ffi status=rejected reason=unknown_filter");
                TodoActionResponse::rejected(err.to_string())
            }
        }
    }

    /// Derives the current render envelope.
    #[flutter_rust_bridge::frb(sync)]
    pub fn list_tasks(&self) -> TodoListResponse {
        let view = self.store.view();
        let empty_message = view
            .is_empty()
            .then(|| view.filter.empty_message().to_string());
        TodoListResponse {
            items: view.items.iter().map(to_todo_item).collect(),
            filter: view.filter.as_str().to_string(),
            total: saturating_u32(view.total),
            completed: saturating_u32(view.completed),
            empty_message,
        }
    }
}

impl Default for TodoSession {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_task_id(raw: &str) -> Option<TaskId> {
    raw.parse::<TaskId>().ok()
}

fn to_todo_item(record: &TaskRecord) -> TodoItem {
    TodoItem {
        task_id: record.id().to_string(),
        text: record.text().to_string(),
        completed: record.is_completed(),
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{core_version, init_logging, ping, TodoSession};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/todo-logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn new_session_lists_empty_state() {
        let session = TodoSession::new();
        let list = session.list_tasks();

        assert!(list.items.is_empty());
        assert_eq!(list.filter, "all");
        assert_eq!(list.empty_message.as_deref(), Some("No todos yet!"));
    }

    #[test]
    fn add_task_trims_and_returns_id() {
        let mut session = TodoSession::new();
        let added = session.add_task("  Buy milk ".to_string());
        assert!(added.ok, "{}", added.message);
        let task_id = added.task_id.expect("add should return task_id");

        let list = session.list_tasks();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].task_id, task_id);
        assert_eq!(list.items[0].text, "Buy milk");
        assert!(!list.items[0].completed);
        assert_eq!(list.empty_message, None);
    }

    #[test]
    fn add_task_rejects_blank_text() {
        let mut session = TodoSession::new();
        let response = session.add_task("   ".to_string());

        assert!(!response.ok);
        assert_eq!(response.task_id, None);
        assert_eq!(session.list_tasks().total, 0);
    }

    #[test]
    fn toggle_and_filter_show_completed_items() {
        let mut session = TodoSession::new();
        let milk = session.add_task("Buy milk".to_string()).task_id.unwrap();
        session.add_task("Walk dog".to_string());

        assert!(session.toggle_task(milk.clone()).ok);
        assert!(session.set_filter("completed".to_string()).ok);

        let list = session.list_tasks();
        assert_eq!(list.filter, "completed");
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].task_id, milk);
        assert!(list.items[0].completed);
        assert_eq!(list.total, 2);
        assert_eq!(list.completed, 1);
    }

    #[test]
    fn completed_filter_has_its_own_empty_message() {
        let mut session = TodoSession::new();
        session.add_task("Walk dog".to_string());
        session.set_filter("completed".to_string());

        let list = session.list_tasks();
        assert_eq!(
            list.empty_message.as_deref(),
            Some("No todos completed yet!")
        );
    }

    #[test]
    fn unknown_filter_keeps_current_filter() {
        let mut session = TodoSession::new();
        session.set_filter("completed".to_string());

        let response = session.set_filter("active".to_string());
        assert!(!response.ok);
        assert_eq!(session.list_tasks().filter, "completed");
    }

    #[test]
    fn bad_or_unknown_ids_are_reported_without_changes() {
        let mut session = TodoSession::new();
        session.add_task("Buy milk".to_string());
        let before = session.list_tasks();

        assert!(!session.toggle_task("not-a-number".to_string()).ok);
        assert!(!session.toggle_task("999".to_string()).ok);
        assert!(!session.remove_task("999".to_string()).ok);
        assert!(!session.remove_task(String::new()).ok);

        assert_eq!(session.list_tasks(), before);
    }

    #[test]
    fn remove_task_deletes_exactly_one() {
        let mut session = TodoSession::new();
        let milk = session.add_task("Buy milk".to_string()).task_id.unwrap();
        let dog = session.add_task("Walk dog".to_string()).task_id.unwrap();

        let response = session.remove_task(dog.clone());
        assert!(response.ok);
        assert_eq!(response.task_id.as_deref(), Some(dog.as_str()));

        let list = session.list_tasks();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].task_id, milk);
    }

    #[test]
    fn sessions_do_not_share_state() {
        let mut first = TodoSession::new();
        let second = TodoSession::default();
        first.add_task("only here".to_string());

        assert_eq!(first.list_tasks().total, 1);
        assert_eq!(second.list_tasks().total, 0);
    }
}
