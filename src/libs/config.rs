//! Configuration management for the tdl application.
//!
//! Settings are stored as JSON in the platform application data directory
//! next to the default task file. Every key is optional, so a partial or
//! hand-edited file keeps working:
//!
//! ```json
//! {
//!   "tasks_file": "/home/me/Dropbox/tasks.json",
//!   "due_soon_days": 3,
//!   "date_policy": "ignore"
//! }
//! ```
//!
//! ## Storage Locations
//!
//! - **Windows**: `%LOCALAPPDATA%\tdl\tdl\config.json`
//! - **macOS**: `~/Library/Application Support/tdl/tdl/config.json`
//! - **Linux**: `~/.local/share/tdl/tdl/config.json`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use tdl::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.due_soon_days = 7;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::tasks::TaskFile;
use crate::libs::messages::Message;
use crate::libs::store::DEFAULT_DUE_SOON_DAYS;
use crate::libs::validation::DatePolicy;
use crate::msg_print;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Task file location. Falls back to `tasks.json` in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_file: Option<PathBuf>,

    /// Length of the due-soon window in days, counted from today.
    #[serde(default = "default_due_soon_days")]
    pub due_soon_days: u32,

    /// How the add and edit flows treat an unparsable due date.
    #[serde(default)]
    pub date_policy: DatePolicy,
}

fn default_due_soon_days() -> u32 {
    DEFAULT_DUE_SOON_DAYS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tasks_file: None,
            due_soon_days: DEFAULT_DUE_SOON_DAYS,
            date_policy: DatePolicy::default(),
        }
    }
}

impl Config {
    /// Reads the configuration from the data directory.
    ///
    /// A missing file yields the default configuration. A file that exists
    /// but cannot be parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path).with_context(|| Message::ConfigReadFailed(path.display().to_string()))?;
        let config: Config = serde_json::from_str(&config_str).with_context(|| Message::ConfigParseError(path.display().to_string()))?;
        Ok(config)
    }

    /// Writes the configuration to the data directory and returns its path.
    pub fn save(&self) -> Result<PathBuf> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)?;
        Ok(config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path).with_context(|| Message::ConfigSaveError(path.display().to_string()))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves the task file: an explicit override wins over the configured
    /// location, which wins over the default one.
    pub fn task_file(&self, file_override: Option<&Path>) -> Result<TaskFile> {
        match file_override.or(self.tasks_file.as_deref()) {
            Some(path) => Ok(TaskFile::new(path)),
            None => TaskFile::default_location(),
        }
    }

    /// Runs the interactive configuration wizard, starting from the current
    /// settings.
    pub fn init() -> Result<Self> {
        let config = Self::read().unwrap_or_default();
        let default_file = config.task_file(None)?;

        msg_print!(Message::ConfigModuleTasks, true);

        let tasks_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTasksFile.to_string())
            .default(default_file.path().display().to_string())
            .interact_text()?;

        let due_soon_days: u32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDueSoonDays.to_string())
            .default(config.due_soon_days)
            .interact_text()?;

        let policies = DatePolicy::ALL;
        let selected_policy = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatePolicy.to_string())
            .items(&policies)
            .default(policies.iter().position(|policy| *policy == config.date_policy).unwrap_or(0))
            .interact()?;

        Ok(Config {
            tasks_file: Some(PathBuf::from(tasks_file.trim())),
            due_soon_days,
            date_policy: policies[selected_policy],
        })
    }
}
