#[cfg(test)]
mod tests {
    use chrono::{Days, Local};
    use std::fs;
    use tdl::db::tasks::{save_all, TaskFile};
    use tdl::libs::config::Config;
    use tdl::libs::error::TaskError;
    use tdl::libs::session::Session;
    use tdl::libs::store::TaskFilter;
    use tdl::libs::task::Task;
    use tdl::libs::validation::DatePolicy;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SessionTestContext {
        _temp_dir: TempDir,
        file: TaskFile,
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let file = TaskFile::new(temp_dir.path().join("tasks.json"));
            SessionTestContext { _temp_dir: temp_dir, file }
        }
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_open_without_file_starts_empty(ctx: &mut SessionTestContext) {
        let session = Session::open(ctx.file.clone(), &Config::default()).unwrap();
        assert!(session.store().is_empty());
        assert!(!ctx.file.path().exists());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_corrupt_file_aborts_startup(ctx: &mut SessionTestContext) {
        fs::write(ctx.file.path(), "not valid json").unwrap();

        let result = Session::open(ctx.file.clone(), &Config::default());
        assert!(matches!(result, Err(TaskError::CorruptStore { .. })));
        assert_eq!(fs::read_to_string(ctx.file.path()).unwrap(), "not valid json");
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_changes_are_saved(ctx: &mut SessionTestContext) {
        let mut session = Session::open(ctx.file.clone(), &Config::default()).unwrap();
        session.store_mut().add(Task::new("A", "", "Work"));
        session.store_mut().add(Task::new("B", "", "Work"));
        session.store_mut().mark_completed_at(2).unwrap();
        session.save().unwrap();

        let reopened = Session::open(ctx.file.clone(), &Config::default()).unwrap();
        assert_eq!(reopened.store().tasks(), session.store().tasks());
        assert!(reopened.store().tasks()[1].completed);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_config_is_applied(ctx: &mut SessionTestContext) {
        let in_five_days = Local::now().date_naive().checked_add_days(Days::new(5)).unwrap();
        save_all(&[Task::new("Later", "", "Work").with_due_date(Some(in_five_days))], ctx.file.path()).unwrap();

        let config = Config {
            due_soon_days: 7,
            date_policy: DatePolicy::Reject,
            ..Config::default()
        };
        let session = Session::open(ctx.file.clone(), &config).unwrap();
        assert_eq!(session.date_policy(), DatePolicy::Reject);
        assert_eq!(session.store().list_today(TaskFilter::DueSoon).count(), 1);

        let session = Session::open(ctx.file.clone(), &Config::default()).unwrap();
        assert_eq!(session.store().list_today(TaskFilter::DueSoon).count(), 0);
    }
}
