//! Plain-text rendering of a todo view.

use std::fmt::Write;
use todo_core::{TaskFilter, TodoView};

/// Renders the filter bar followed by the visible list or its empty state.
pub fn render_view(view: &TodoView) -> String {
    let mut out = String::new();

    let bar = TaskFilter::all()
        .iter()
        .map(|filter| {
            if *filter == view.filter {
                format!("[{}]", filter.label())
            } else {
                filter.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "{bar}");

    if view.is_empty() {
        let _ = writeln!(out, "  {}", view.filter.empty_message());
        return out;
    }

    for record in &view.items {
        let mark = if record.is_completed() { 'x' } else { ' ' };
        let _ = writeln!(out, "  {}. [{}] {}", record.id(), mark, record.text());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::render_view;
    use todo_core::{TaskFilter, TodoStore};

    #[test]
    fn renders_empty_states_per_filter() {
        let mut store = TodoStore::new();
        assert_eq!(render_view(&store.view()), "[All] Completed\n  No todos yet!\n");

        store.add("Walk dog");
        store.set_filter(TaskFilter::CompletedOnly);
        assert_eq!(
            render_view(&store.view()),
            "All [Completed]\n  No todos completed yet!\n"
        );
    }

    #[test]
    fn renders_items_newest_first_with_marks() {
        let mut store = TodoStore::new();
        let milk = store.add("Buy milk").expect("add milk");
        store.add("Walk dog");
        store.toggle_completed(milk);

        assert_eq!(
            render_view(&store.view()),
            "[All] Completed\n  2. [ ] Walk dog\n  1. [x] Buy milk\n"
        );
    }
}
