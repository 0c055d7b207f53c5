//! Persistence layer for the tdl application.
//!
//! Tasks live in a single JSON document. See [`tasks`] for the file format
//! and the load/save guarantees.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tdl::db::tasks::{load_all, save_all};
//! use tdl::libs::task::Task;
//! use std::path::Path;
//!
//! let path = Path::new("tasks.json");
//! let mut tasks = load_all(path)?;
//! tasks.push(Task::new("Review code", "Check PR #123", "Work"));
//! save_all(&tasks, path)?;
//! # Ok::<(), tdl::libs::error::TaskError>(())
//! ```

pub mod tasks;
