//! Core library modules for the tdl application.
//!
//! ## Features
//!
//! - **Task Entity**: the to-do record and its partial-update edit
//! - **Task Store**: ordered collection with filtered views and positional access
//! - **Validation**: due-date parsing and priority normalization
//! - **Core Infrastructure**: configuration, data storage, sessions, messaging
//! - **User Interface**: console table rendering
//!
//! ## Usage
//!
//! ```rust
//! use tdl::libs::store::{TaskFilter, TaskStore};
//! use tdl::libs::task::Task;
//!
//! let mut store = TaskStore::new();
//! store.add(Task::new("Implement feature", "Add user authentication", "Work"));
//! assert_eq!(store.list_today(TaskFilter::Pending).count(), 1);
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod session;
pub mod store;
pub mod task;
pub mod validation;
pub mod view;
