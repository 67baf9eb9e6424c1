//! Console front end for the todo core.
//!
//! # Responsibility
//! - Read one command per stdin line and forward it to a `TodoStore`.
//! - Re-render the derived view after every state change.
//!
//! # Configuration
//! - `TODO_LOG_DIR`: absolute log directory; logging stays off when unset.
//! - `TODO_LOG_LEVEL`: log level, defaults to the build-mode default.

mod command;
mod render;

use command::{parse_line, Command, USAGE};
use log::info;
use render::render_view;
use std::io::{self, BufRead, Write};
use todo_core::TodoStore;

const LOG_DIR_ENV: &str = "TODO_LOG_DIR";
const LOG_LEVEL_ENV: &str = "TODO_LOG_LEVEL";

fn main() {
    if let Err(err) = init_logging_from_env() {
        eprintln!("logging disabled: {err}");
    }
    println!("todo_core version={}", todo_core::core_version());

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = run(stdin.lock(), stdout.lock()) {
        eprintln!("console error: {err}");
        std::process::exit(1);
    }
}

fn init_logging_from_env() -> Result<(), String> {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return Ok(());
    };
    let level = std::env::var(LOG_LEVEL_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| todo_core::default_log_level().to_string());
    todo_core::init_logging(level.as_str(), log_dir.as_str())
}

/// Drives one session until `quit` or end of input.
fn run(input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let mut store = TodoStore::new();
    info!(
        "event=console_start module=cli status=ok session={}",
        store.session_id()
    );
    write!(output, "{}", render_view(&store.view()))?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_line(line.as_str()) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(output, "{err}\n{USAGE}")?;
                continue;
            }
        };

        match command {
            Command::Add(text) => {
                if store.add(text.as_str()).is_none() {
                    writeln!(output, "nothing to add")?;
                    continue;
                }
            }
            Command::Toggle(id) => {
                if !store.toggle_completed(id) {
                    writeln!(output, "task not found: {id}")?;
                    continue;
                }
            }
            Command::Remove(id) => {
                if !store.remove(id) {
                    writeln!(output, "task not found: {id}")?;
                    continue;
                }
            }
            Command::Filter(filter) => store.set_filter(filter),
            Command::List => {}
            Command::Help => {
                writeln!(output, "{USAGE}")?;
                continue;
            }
            Command::Quit => break,
        }
        write!(output, "{}", render_view(&store.view()))?;
    }

    output.flush()
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::command::USAGE;

    fn run_script(script: &str) -> String {
        let mut output = Vec::new();
        run(script.as_bytes(), &mut output).expect("script should run");
        String::from_utf8(output).expect("output should be UTF-8")
    }

    #[test]
    fn script_walks_through_the_screen_flow() {
        let output = run_script(
            "add Buy milk\nadd Walk dog\ntoggle 1\nfilter completed\nrm 2\nfilter all\nquit\nadd ignored\n",
        );

        assert!(output.ends_with("[All] Completed\n  1. [x] Buy milk\n"));
        assert!(output.contains("All [Completed]\n  1. [x] Buy milk\n"));
        assert!(!output.contains("ignored"));
    }

    #[test]
    fn rejected_input_is_reported_without_rendering() {
        let output = run_script("add    \ntoggle 9\nbogus\n");

        assert!(output.contains("nothing to add"));
        assert!(output.contains("task not found: 9"));
        assert!(output.contains("unknown command `bogus`"));
        assert_eq!(output.matches("No todos yet!").count(), 1);
    }

    #[test]
    fn help_list_and_exit_behave_like_the_screen_controls() {
        let output = run_script("help\nadd Walk dog\nlist\nLS\nexit\nadd ignored\n");

        let expected_list = "[All] Completed\n  1. [ ] Walk dog\n";
        let expected = format!(
            "[All] Completed\n  No todos yet!\n{USAGE}\n{expected_list}{expected_list}{expected_list}"
        );
        assert_eq!(output, expected);
    }
}
