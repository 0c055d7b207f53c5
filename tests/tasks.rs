#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tdl::libs::error::TaskError;
    use tdl::libs::task::{Priority, Task, TaskEdit, TaskRecord};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Task {
        Task::new("Write report", "Quarterly numbers", "Work")
            .with_priority("High")
            .with_due_date(Some(date(2024, 6, 3)))
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Buy milk", "", "Personal");
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "");
        assert_eq!(task.category, "Personal");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.due_date, None);
        assert!(!task.completed);
    }

    #[test]
    fn test_mark_completed_is_idempotent() {
        let mut task = sample();
        task.mark_completed();
        let once = task.clone();
        assert!(task.completed);

        task.mark_completed();
        assert!(task.completed);
        assert_eq!(task, once);
    }

    #[test]
    fn test_edit_without_title_keeps_title() {
        let mut task = sample();
        task.edit(TaskEdit {
            title: None,
            description: Some("Annual numbers".to_string()),
            ..Default::default()
        });
        assert_eq!(task.title, "Write report");
        assert_eq!(task.description, "Annual numbers");
    }

    #[test]
    fn test_edit_sets_title() {
        let mut task = sample();
        task.edit(TaskEdit {
            title: Some("X".to_string()),
            ..Default::default()
        });
        assert_eq!(task.title, "X");
        assert_eq!(task.category, "Work");
    }

    #[test]
    fn test_edit_blank_values_leave_fields_unchanged() {
        let mut task = sample();
        let before = task.clone();
        task.edit(TaskEdit {
            title: Some("   ".to_string()),
            description: Some(String::new()),
            category: Some(String::new()),
            priority: Some(Priority::from("")),
            due_date: None,
        });
        assert_eq!(task, before);
    }

    #[test]
    fn test_edit_all_fields() {
        let mut task = sample();
        task.edit(TaskEdit {
            title: Some("Plan trip".to_string()),
            description: Some("Book flights".to_string()),
            category: Some("Personal".to_string()),
            priority: Some(Priority::Low),
            due_date: Some(date(2024, 7, 1)),
        });
        assert_eq!(task.title, "Plan trip");
        assert_eq!(task.description, "Book flights");
        assert_eq!(task.category, "Personal");
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.due_date, Some(date(2024, 7, 1)));
        assert!(!task.completed);
    }

    #[test]
    fn test_task_edit_is_empty() {
        assert!(TaskEdit::default().is_empty());
        assert!(TaskEdit {
            title: Some(" ".to_string()),
            priority: Some(Priority::from("")),
            ..Default::default()
        }
        .is_empty());
        assert!(!TaskEdit {
            due_date: Some(date(2024, 1, 1)),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn test_priority_keeps_unknown_values() {
        assert_eq!(Priority::from("Low"), Priority::Low);
        assert_eq!(Priority::from("High"), Priority::High);
        assert_eq!(Priority::from("high"), Priority::Other("high".to_string()));
        assert_eq!(Priority::from("Urgent").to_string(), "Urgent");
        assert_eq!(String::from(Priority::Medium), "Medium");
    }

    #[test]
    fn test_display_shows_every_field() {
        let line = sample().to_string();
        assert_eq!(
            line,
            "[❌] Write report - Quarterly numbers (Category: Work, Priority: High, Due: 2024-06-03)"
        );

        let done = Task::new("Call mom", "", "Personal").with_completed(true).to_string();
        assert!(done.starts_with("[✅] Call mom"));
        assert!(!done.contains("Due:"));
    }

    #[test]
    fn test_record_round_trip() {
        let task = sample().with_completed(true);
        let record = task.to_record();
        assert_eq!(record.due_date.as_deref(), Some("2024-06-03"));
        assert_eq!(Task::from_record(record, 1).unwrap(), task);
    }

    #[test]
    fn test_record_defaults() {
        let record = TaskRecord {
            title: Some("Read".to_string()),
            description: Some(String::new()),
            category: Some("Leisure".to_string()),
            ..Default::default()
        };
        let task = Task::from_record(record, 1).unwrap();
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.completed);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_record_missing_required_field() {
        for missing in ["title", "description", "category"] {
            let mut record = sample().to_record();
            match missing {
                "title" => record.title = None,
                "description" => record.description = None,
                _ => record.category = None,
            }

            match Task::from_record(record, 4) {
                Err(TaskError::MalformedRecord { position, field }) => {
                    assert_eq!(position, 4);
                    assert!(field.contains(missing), "{field} should name {missing}");
                }
                other => panic!("expected MalformedRecord, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_record_with_invalid_due_date_is_malformed() {
        let mut record = sample().to_record();
        record.due_date = Some("next week".to_string());
        assert!(matches!(Task::from_record(record, 1), Err(TaskError::MalformedRecord { .. })));
    }
}
