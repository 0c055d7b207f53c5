#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::fs;
    use std::path::PathBuf;
    use tdl::db::tasks::{load_all, save_all, TaskFile};
    use tdl::libs::error::TaskError;
    use tdl::libs::task::{Priority, Task};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StorageTestContext {
        temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("tasks.json");
            StorageTestContext { temp_dir, path }
        }
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("Write report", "Quarterly numbers", "Work")
                .with_priority("High")
                .with_due_date(NaiveDate::from_ymd_opt(2024, 6, 3)),
            Task::new("Buy milk", "", "Personal").with_completed(true),
            Task::new("Learn Rust", "Ownership chapter", "").with_priority("Someday"),
        ]
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_and_load_round_trip(ctx: &mut StorageTestContext) {
        let tasks = sample_tasks();
        save_all(&tasks, &ctx.path).unwrap();
        assert_eq!(load_all(&ctx.path).unwrap(), tasks);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_round_trip_empty_list(ctx: &mut StorageTestContext) {
        save_all(&[], &ctx.path).unwrap();
        assert!(ctx.path.exists());
        assert!(load_all(&ctx.path).unwrap().is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_load_missing_file_is_empty(ctx: &mut StorageTestContext) {
        assert!(load_all(&ctx.path).unwrap().is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_load_corrupt_file(ctx: &mut StorageTestContext) {
        for content in ["not valid json", r#"{"foo": 1}"#, "", r#"[{"title": 5, "description": "", "category": ""}]"#, "[1, 2]"] {
            fs::write(&ctx.path, content).unwrap();
            match load_all(&ctx.path) {
                Err(TaskError::CorruptStore { path, .. }) => assert_eq!(path, ctx.path),
                other => panic!("{content:?} should be corrupt, got {:?}", other),
            }
        }
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_load_record_missing_required_key(ctx: &mut StorageTestContext) {
        fs::write(
            &ctx.path,
            r#"[
                {"title": "ok", "description": "", "category": "Work"},
                {"title": "no category", "description": ""}
            ]"#,
        )
        .unwrap();

        match load_all(&ctx.path) {
            Err(TaskError::MalformedRecord { position, field }) => {
                assert_eq!(position, 2);
                assert!(field.contains("category"));
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_load_applies_defaults_and_ignores_unknown_keys(ctx: &mut StorageTestContext) {
        fs::write(
            &ctx.path,
            r#"[{"title": "Read", "description": "", "category": "Leisure", "tags": ["x"], "due_date": null}]"#,
        )
        .unwrap();

        let tasks = load_all(&ctx.path).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].priority, Priority::Medium);
        assert!(!tasks[0].completed);
        assert_eq!(tasks[0].due_date, None);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_saved_document_shape(ctx: &mut StorageTestContext) {
        save_all(&sample_tasks(), &ctx.path).unwrap();

        let document: serde_json::Value = serde_json::from_str(&fs::read_to_string(&ctx.path).unwrap()).unwrap();
        let records = document.as_array().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["title"], "Write report");
        assert_eq!(records[0]["priority"], "High");
        assert_eq!(records[0]["due_date"], "2024-06-03");
        assert_eq!(records[0]["completed"], false);
        assert!(records[1]["due_date"].is_null());
        assert_eq!(records[1]["completed"], true);
        assert_eq!(records[2]["priority"], "Someday");
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_overwrites_previous_contents(ctx: &mut StorageTestContext) {
        save_all(&sample_tasks(), &ctx.path).unwrap();
        let fewer = vec![Task::new("Only one", "", "Misc")];
        save_all(&fewer, &ctx.path).unwrap();

        assert_eq!(load_all(&ctx.path).unwrap(), fewer);
        let leftovers: Vec<_> = fs::read_dir(ctx.temp_dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1, "temporary file should not be left behind");
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_failed_save_keeps_destination(ctx: &mut StorageTestContext) {
        let destination = ctx.temp_dir.path().join("occupied");
        fs::create_dir(&destination).unwrap();
        fs::write(destination.join("keep.txt"), "data").unwrap();

        match save_all(&sample_tasks(), &destination) {
            Err(TaskError::Io { path, .. }) => assert_eq!(path, destination),
            other => panic!("expected Io error, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(destination.join("keep.txt")).unwrap(), "data");
        assert!(!ctx.temp_dir.path().join(".occupied.tmp").exists());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_creates_parent_directories(ctx: &mut StorageTestContext) {
        let nested = ctx.temp_dir.path().join("a").join("b").join("tasks.json");
        let file = TaskFile::new(&nested);
        file.save(&sample_tasks()).unwrap();
        assert_eq!(file.load().unwrap(), sample_tasks());
        assert_eq!(file.path(), nested.as_path());
    }
}
