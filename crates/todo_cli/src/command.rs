//! Console command parsing.

use std::fmt::{Display, Formatter};
use todo_core::{FilterParseError, TaskFilter, TaskId};

pub const USAGE: &str =
    "commands: add <text> | toggle <id> | rm <id> | filter all|completed | list | help | quit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(TaskId),
    Remove(TaskId),
    Filter(TaskFilter),
    List,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument(&'static str),
    InvalidId(String),
    InvalidFilter(FilterParseError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(verb) => write!(f, "unknown command `{verb}`"),
            Self::MissingArgument(verb) => write!(f, "`{verb}` needs an argument"),
            Self::InvalidId(raw) => write!(f, "invalid task id `{raw}`"),
            Self::InvalidFilter(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CommandError {}

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// `add` keeps the rest of the line verbatim; trimming and blank rejection
/// belong to the store.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim_end(), ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" => Command::Add(rest.to_string()),
        "toggle" => Command::Toggle(parse_id("toggle", rest)?),
        "rm" | "delete" => Command::Remove(parse_id("rm", rest)?),
        "filter" => {
            if rest.trim().is_empty() {
                return Err(CommandError::MissingArgument("filter"));
            }
            Command::Filter(rest.parse().map_err(CommandError::InvalidFilter)?)
        }
        "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_id(verb: &'static str, raw: &str) -> Result<TaskId, CommandError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CommandError::MissingArgument(verb));
    }
    raw.parse()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}
