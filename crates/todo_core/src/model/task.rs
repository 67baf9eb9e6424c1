//! Task record domain model.
//!
//! # Responsibility
//! - Define the canonical record rendered by the todo list.
//! - Define the view filter and its stable string ids.
//!
//! # Invariants
//! - `id` is assigned once by the owning store and never reused.
//! - `text` is non-empty and already trimmed.
//! - `text` never changes after creation; only `completed` is mutable.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stable identifier of one task record within a store.
///
/// Displays as a plain decimal number so UI layers can pass it around as a
/// string and parse it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw id value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

/// Validation errors for task record invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text is empty after trimming.
    EmptyText,
    /// Text carries leading or trailing whitespace.
    UntrimmedText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text must not be empty"),
            Self::UntrimmedText => {
                write!(f, "task text must not start or end with whitespace")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// Completion state of one task record.
///
/// `Incomplete` is the initial state. Toggling flips between the two states
/// indefinitely; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Incomplete,
    Completed,
}

/// One to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRecord {
    id: TaskId,
    text: String,
    completed: bool,
}

impl TaskRecord {
    /// Creates an incomplete record from raw user input.
    ///
    /// Leading and trailing whitespace is stripped before storing.
    ///
    /// # Errors
    /// - Returns `EmptyText` when nothing is left after trimming.
    pub fn new(id: TaskId, text: impl AsRef<str>) -> Result<Self, TaskValidationError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyText);
        }

        Ok(Self {
            id,
            text: trimmed.to_string(),
            completed: false,
        })
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Projects the completion flag onto the record state machine.
    pub fn state(&self) -> TaskState {
        if self.completed {
            TaskState::Completed
        } else {
            TaskState::Incomplete
        }
    }

    /// Flips the completion flag and returns the new state.
    pub(crate) fn toggle(&mut self) -> TaskState {
        self.completed = !self.completed;
        self.state()
    }

    /// Re-checks record invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        if self.text.trim().len() != self.text.len() {
            return Err(TaskValidationError::UntrimmedText);
        }
        Ok(())
    }
}

/// Stable string id for the "show everything" filter.
pub const TASK_FILTER_ALL: &str = "all";
/// Stable string id for the "completed only" filter.
pub const TASK_FILTER_COMPLETED: &str = "completed";

/// View selector deciding which records are exposed for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "completed")]
    CompletedOnly,
}

impl TaskFilter {
    /// Stable string id used across UI boundaries.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => TASK_FILTER_ALL,
            Self::CompletedOnly => TASK_FILTER_COMPLETED,
        }
    }

    /// User-facing control label.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::CompletedOnly => "Completed",
        }
    }

    /// Empty-state text shown when nothing is visible under this filter.
    pub fn empty_message(self) -> &'static str {
        match self {
            Self::All => "No todos yet!",
            Self::CompletedOnly => "No todos completed yet!",
        }
    }

    /// Returns whether `record` is visible under this filter.
    pub fn matches(self, record: &TaskRecord) -> bool {
        match self {
            Self::All => true,
            Self::CompletedOnly => record.is_completed(),
        }
    }

    /// Every filter in control display order.
    pub fn all() -> [TaskFilter; 2] {
        [Self::All, Self::CompletedOnly]
    }
}

impl Display for TaskFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unknown filter strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParseError {
    value: String,
}

impl FilterParseError {
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

impl Display for FilterParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported filter `{}`; expected {}|{}",
            self.value, TASK_FILTER_ALL, TASK_FILTER_COMPLETED
        )
    }
}

impl Error for FilterParseError {}

impl FromStr for TaskFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            TASK_FILTER_ALL => Ok(Self::All),
            TASK_FILTER_COMPLETED => Ok(Self::CompletedOnly),
            other => Err(FilterParseError {
                value: other.to_string(),
            }),
        }
    }
}
