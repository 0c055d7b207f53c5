//! JSON task file.
//!
//! The whole task list is stored as one pretty-printed JSON array of
//! [`TaskRecord`]s. Loading reads the file in one go; saving rewrites it in
//! full through a temporary sibling file that is renamed into place, so a
//! failed save never leaves a half-written task file behind.
//!
//! ## Load Semantics
//!
//! - **Missing file**: no tasks yet, returns an empty list
//! - **Not a JSON array of records**: [`TaskError::CorruptStore`]
//! - **Record without title/description/category**: [`TaskError::MalformedRecord`]
//! - **Unknown keys**: ignored

use crate::libs::data_storage::DataStorage;
use crate::libs::error::{TaskError, TaskResult};
use crate::libs::task::{Task, TaskRecord};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const TASKS_FILE_NAME: &str = "tasks.json";

/// Reads every task stored at `source`, in file order.
pub fn load_all(source: &Path) -> TaskResult<Vec<Task>> {
    let content = match fs::read_to_string(source) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %source.display(), "task file not found, starting empty");
            return Ok(Vec::new());
        }
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            return Err(TaskError::CorruptStore {
                path: source.to_path_buf(),
                reason: e.to_string(),
            })
        }
        Err(e) => {
            return Err(TaskError::Io {
                path: source.to_path_buf(),
                source: e,
            })
        }
    };

    let records: Vec<TaskRecord> = serde_json::from_str(&content).map_err(|e| TaskError::CorruptStore {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;

    let tasks = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| Task::from_record(record, index + 1))
        .collect::<TaskResult<Vec<_>>>()?;

    debug!(path = %source.display(), count = tasks.len(), "tasks loaded");
    Ok(tasks)
}

/// Replaces the contents of `destination` with `tasks`.
///
/// The previous file stays untouched if anything fails before the final
/// rename.
pub fn save_all(tasks: &[Task], destination: &Path) -> TaskResult<()> {
    if let Some(parent) = destination.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }

    let records: Vec<TaskRecord> = tasks.iter().map(Task::to_record).collect();
    let tmp_path = temp_path(destination);

    let result = write_records(&tmp_path, &records).and_then(|_| fs::rename(&tmp_path, destination));
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error(destination)(e));
    }

    debug!(path = %destination.display(), count = tasks.len(), "tasks saved");
    Ok(())
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> TaskError {
    let path = path.to_path_buf();
    move |source| TaskError::Io { path, source }
}

fn write_records(path: &Path, records: &[TaskRecord]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    writer.get_ref().sync_all()
}

fn temp_path(destination: &Path) -> PathBuf {
    let file_name = destination
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| TASKS_FILE_NAME.to_string());
    destination.with_file_name(format!(".{}.tmp", file_name))
}

/// Handle to the task file used by a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TaskFile { path: path.into() }
    }

    /// The task file in the application data directory.
    pub fn default_location() -> anyhow::Result<Self> {
        let path = DataStorage::new().get_path(TASKS_FILE_NAME)?;
        Ok(TaskFile { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> TaskResult<Vec<Task>> {
        load_all(&self.path)
    }

    pub fn save(&self, tasks: &[Task]) -> TaskResult<()> {
        save_all(tasks, &self.path)
    }
}
