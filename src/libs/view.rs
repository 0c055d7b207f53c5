use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints `(position, task)` pairs as a table.
    pub fn tasks<'a>(tasks: impl IntoIterator<Item = (usize, &'a Task)>) {
        let mut table = Table::new();

        table.add_row(row!["#", "DONE", "TITLE", "DESCRIPTION", "CATEGORY", "PRIORITY", "DUE"]);
        for (position, task) in tasks {
            let status = if task.completed { "✅" } else { "❌" };
            let due = task.due_date.map(|date| date.format("%Y-%m-%d").to_string()).unwrap_or_default();
            table.add_row(row![position, status, task.title, task.description, task.category, task.priority, due]);
        }
        table.printstd();
    }
}
