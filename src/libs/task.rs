//! The task entity and its record form.
//!
//! A [`Task`] is one to-do item. It is edited in place through [`Task::edit`],
//! which applies a partial update: a field is only overwritten when the
//! supplied value is present and not blank. There is no way to clear a field
//! through an edit.
//!
//! On disk a task is a [`TaskRecord`], a flat key-value object:
//!
//! ```json
//! {
//!   "title": "Write report",
//!   "description": "Quarterly numbers",
//!   "category": "Work",
//!   "priority": "High",
//!   "due_date": "2024-06-03",
//!   "completed": false
//! }
//! ```
//!
//! `priority` and `completed` fall back to `Medium` and `false` when missing.
//! `title`, `description` and `category` have no default and their absence
//! makes the record malformed.

use crate::libs::error::{TaskError, TaskResult};
use crate::libs::validation::parse_due_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_PRIORITY: Priority = Priority::Medium;

/// Task priority.
///
/// The three known levels match exactly on their capitalized names. Any other
/// text is kept verbatim in [`Priority::Other`] so it survives a save/load
/// round trip instead of being coerced to a default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Other(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Other(value) => value,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Low" => Priority::Low,
            "Medium" => Priority::Medium,
            "High" => Priority::High,
            _ => Priority::Other(value),
        }
    }
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        Priority::from(value.to_string())
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        match value {
            Priority::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
}

/// Partial update applied by [`Task::edit`].
///
/// `None` and blank strings both mean "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
}

impl TaskEdit {
    pub fn is_empty(&self) -> bool {
        present(&self.title).is_none()
            && present(&self.description).is_none()
            && present(&self.category).is_none()
            && self.priority.as_ref().map_or(true, Priority::is_blank)
            && self.due_date.is_none()
    }
}

/// Serialized form of a [`Task`].
///
/// Every field is optional so that missing keys can be reported precisely
/// instead of failing the whole document. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<String>,
    pub completed: Option<bool>,
}

impl Task {
    pub fn new(title: &str, description: &str, category: &str) -> Self {
        Task {
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            priority: DEFAULT_PRIORITY,
            due_date: None,
            completed: false,
        }
    }

    pub fn with_priority(mut self, priority: impl Into<Priority>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Marks the task as done. Calling it again changes nothing.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub fn edit(&mut self, edit: TaskEdit) {
        if let Some(title) = present(&edit.title) {
            self.title = title.to_string();
        }
        if let Some(description) = present(&edit.description) {
            self.description = description.to_string();
        }
        if let Some(category) = present(&edit.category) {
            self.category = category.to_string();
        }
        if let Some(priority) = edit.priority.filter(|priority| !priority.is_blank()) {
            self.priority = priority;
        }
        if let Some(due_date) = edit.due_date {
            self.due_date = Some(due_date);
        }
    }

    pub fn is_due_between(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.due_date.is_some_and(|due| from <= due && due <= to)
    }

    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            category: Some(self.category.clone()),
            priority: Some(self.priority.to_string()),
            due_date: self.due_date.map(|date| date.format("%Y-%m-%d").to_string()),
            completed: Some(self.completed),
        }
    }

    /// Builds a task from its record.
    ///
    /// `position` is the 1-based index of the record in its document and is
    /// only used for error reporting.
    pub fn from_record(record: TaskRecord, position: usize) -> TaskResult<Self> {
        let missing = |field: &str| TaskError::MalformedRecord {
            position,
            field: format!("missing '{}'", field),
        };

        let title = record.title.ok_or_else(|| missing("title"))?;
        let description = record.description.ok_or_else(|| missing("description"))?;
        let category = record.category.ok_or_else(|| missing("category"))?;

        let due_date = match record.due_date {
            Some(text) => parse_due_date(&text).map_err(|_| TaskError::MalformedRecord {
                position,
                field: format!("invalid 'due_date' {:?}", text),
            })?,
            None => None,
        };

        Ok(Task {
            title,
            description,
            category,
            priority: record.priority.map(Priority::from).unwrap_or(DEFAULT_PRIORITY),
            due_date,
            completed: record.completed.unwrap_or(false),
        })
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.completed { "✅" } else { "❌" };
        write!(
            f,
            "[{}] {} - {} (Category: {}, Priority: {}",
            status, self.title, self.description, self.category, self.priority
        )?;
        if let Some(due) = self.due_date {
            write!(f, ", Due: {}", due.format("%Y-%m-%d"))?;
        }
        f.write_str(")")
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.trim().is_empty())
}
