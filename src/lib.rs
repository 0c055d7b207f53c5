//! # tdl - To-Do List
//!
//! A command-line utility for keeping a personal list of tasks with
//! categories, priorities and due dates.
//!
//! ## Features
//!
//! - **Task Management**: Add, edit, complete and delete tasks
//! - **Filtered Views**: All, completed, pending and due-soon tasks
//! - **Local Storage**: Tasks are kept in a single JSON file
//! - **Configuration**: Task file location, due-soon window, invalid date policy
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tdl::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::run()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
