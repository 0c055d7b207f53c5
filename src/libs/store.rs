//! In-memory task collection and the queries run against it.
//!
//! Tasks have no identifier besides their place in the list. Every operation
//! that targets a single task takes a 1-based position, resolved against the
//! view the user was just shown:
//!
//! | Operation             | View                  |
//! |-----------------------|-----------------------|
//! | `mark_completed_at`   | pending tasks only    |
//! | `edit_at`             | all tasks             |
//! | `delete_at`           | all tasks             |
//!
//! Keeping positional addressing inside this module means a stable-ID scheme
//! would only touch [`TaskStore`].

use crate::libs::error::{TaskError, TaskResult};
use crate::libs::task::{Task, TaskEdit};
use chrono::{Days, Local, NaiveDate};
use clap::ValueEnum;
use std::fmt;
use tracing::debug;

pub const DEFAULT_DUE_SOON_DAYS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Pending,
    /// Due today or within the next few days, completed or not.
    DueSoon,
}

impl TaskFilter {
    fn matches(self, task: &Task, today: NaiveDate, until: NaiveDate) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::Pending => !task.completed,
            TaskFilter::DueSoon => task.is_due_between(today, until),
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskFilter::All => write!(f, "all"),
            TaskFilter::Completed => write!(f, "completed"),
            TaskFilter::Pending => write!(f, "pending"),
            TaskFilter::DueSoon => write!(f, "due-soon"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    due_soon_days: u32,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::from_tasks(Vec::new())
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        TaskStore {
            tasks,
            due_soon_days: DEFAULT_DUE_SOON_DAYS,
        }
    }

    /// Sets the length of the due-soon window in days.
    pub fn with_due_soon_days(mut self, days: u32) -> Self {
        self.due_soon_days = days;
        self
    }

    pub fn due_soon_days(&self) -> u32 {
        self.due_soon_days
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    pub fn add(&mut self, task: Task) {
        debug!(title = %task.title, "adding task");
        self.tasks.push(task);
    }

    /// Lists the tasks matching `filter` as `(position, task)` pairs.
    ///
    /// Positions are 1-based and count within the filtered view. The
    /// iterator is `Clone`, so a view can be walked more than once.
    pub fn list(&self, filter: TaskFilter, today: NaiveDate) -> impl Iterator<Item = (usize, &Task)> + Clone + '_ {
        let until = today.checked_add_days(Days::new(self.due_soon_days.into())).unwrap_or(NaiveDate::MAX);
        self.tasks
            .iter()
            .filter(move |task| filter.matches(task, today, until))
            .enumerate()
            .map(|(index, task)| (index + 1, task))
    }

    /// [`TaskStore::list`] against the current local date.
    pub fn list_today(&self, filter: TaskFilter) -> impl Iterator<Item = (usize, &Task)> + Clone + '_ {
        self.list(filter, Local::now().date_naive())
    }

    pub fn view(&self, filter: TaskFilter, today: NaiveDate) -> Vec<&Task> {
        self.list(filter, today).map(|(_, task)| task).collect()
    }

    pub fn mark_completed_at(&mut self, position: usize) -> TaskResult<&Task> {
        let pending: Vec<usize> = (0..self.tasks.len()).filter(|&i| !self.tasks[i].completed).collect();
        if pending.is_empty() {
            return Err(TaskError::NoPendingTasks);
        }

        let index = *get_by_position(&pending, position)?;
        let task = &mut self.tasks[index];
        task.mark_completed();
        debug!(position, title = %task.title, "task marked as completed");
        Ok(&*task)
    }

    pub fn edit_at(&mut self, position: usize, edit: TaskEdit) -> TaskResult<&Task> {
        let index = self.full_view_index(position)?;
        let task = &mut self.tasks[index];
        task.edit(edit);
        debug!(position, title = %task.title, "task edited");
        Ok(&*task)
    }

    pub fn delete_at(&mut self, position: usize) -> TaskResult<Task> {
        let index = self.full_view_index(position)?;
        let task = self.tasks.remove(index);
        debug!(position, title = %task.title, "task deleted");
        Ok(task)
    }

    fn full_view_index(&self, position: usize) -> TaskResult<usize> {
        if self.tasks.is_empty() {
            return Err(TaskError::EmptyStore);
        }
        resolve_position(position, self.tasks.len())
    }
}

/// Returns the item at a 1-based `position` of `view`.
pub fn get_by_position<T>(view: &[T], position: usize) -> TaskResult<&T> {
    let index = resolve_position(position, view.len())?;
    Ok(&view[index])
}

fn resolve_position(position: usize, len: usize) -> TaskResult<usize> {
    if position < 1 || position > len {
        return Err(TaskError::OutOfRange { position, len });
    }
    Ok(position - 1)
}
