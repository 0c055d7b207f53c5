//! One run of the application: the task file plus the store loaded from it.
//!
//! The session is the only owner of the task list. It is loaded once at
//! startup and written back in full when the user exits.

use crate::db::tasks::TaskFile;
use crate::libs::config::Config;
use crate::libs::error::TaskResult;
use crate::libs::store::TaskStore;
use crate::libs::validation::DatePolicy;
use tracing::info;

#[derive(Debug)]
pub struct Session {
    file: TaskFile,
    store: TaskStore,
    date_policy: DatePolicy,
}

impl Session {
    /// Loads the store from `file`.
    ///
    /// A missing file starts an empty session. A corrupt or malformed file is
    /// returned as an error and the file is left alone; the caller must not
    /// fall back to an empty store, as saving it would wipe the user's tasks.
    pub fn open(file: TaskFile, config: &Config) -> TaskResult<Self> {
        let tasks = file.load()?;
        info!(path = %file.path().display(), count = tasks.len(), "session opened");

        Ok(Session {
            store: TaskStore::from_tasks(tasks).with_due_soon_days(config.due_soon_days),
            file,
            date_policy: config.date_policy,
        })
    }

    pub fn file(&self) -> &TaskFile {
        &self.file
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    pub fn date_policy(&self) -> DatePolicy {
        self.date_policy
    }

    /// Writes the whole store back to the task file.
    pub fn save(&self) -> TaskResult<()> {
        self.file.save(self.store.tasks())?;
        info!(path = %self.file.path().display(), count = self.store.len(), "session saved");
        Ok(())
    }
}
