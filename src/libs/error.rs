//! Error kinds produced by the task core.
//!
//! Every variant is recoverable at the menu level: the operation that raised
//! it is aborted and the task store keeps its previous state. Startup is the
//! one place where [`TaskError::CorruptStore`] is treated as fatal, see
//! [`crate::libs::session::Session::open`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// A persisted record lacks a field that has no default.
    #[error("Record #{position} is malformed: {field}")]
    MalformedRecord { position: usize, field: String },

    /// The persisted document exists but is not a list of task records.
    #[error("Task file {} is corrupt: {reason}", .path.display())]
    CorruptStore { path: PathBuf, reason: String },

    #[error("Invalid date format '{0}', expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    /// 1-based position outside the view it was resolved against.
    #[error("Invalid task number {position}, expected 1..={len}")]
    OutOfRange { position: usize, len: usize },

    #[error("No pending tasks to mark as completed")]
    NoPendingTasks,

    #[error("No tasks available")]
    EmptyStore,

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type TaskResult<T> = Result<T, TaskError>;
