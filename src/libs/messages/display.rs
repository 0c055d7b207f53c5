//! Display implementation for tdl application messages.
//!
//! All user-facing text lives here so the menu, the views and the error
//! reporting stay consistent.

use super::types::Message;
use crate::libs::store::TaskFilter;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === MENU MESSAGES ===
            Message::MenuTitle => "=== Personal To-Do List Manager ===".to_string(),
            Message::MenuAddTask => "1. Add Task".to_string(),
            Message::MenuViewAll => "2. View All Tasks".to_string(),
            Message::MenuViewCompleted => "3. View Completed Tasks".to_string(),
            Message::MenuViewPending => "4. View Pending Tasks".to_string(),
            Message::MenuViewDueSoon => "5. View Tasks Due Soon".to_string(),
            Message::MenuMarkCompleted => "6. Mark Task as Completed".to_string(),
            Message::MenuEditTask => "7. Edit Task".to_string(),
            Message::MenuDeleteTask => "8. Delete Task".to_string(),
            Message::MenuExit => "9. Exit".to_string(),
            Message::PromptMenuChoice => "Choose an option".to_string(),
            Message::Goodbye => "Goodbye!".to_string(),

            // === TASK MESSAGES ===
            Message::TaskAdded(title) => format!("Task '{}' added successfully!", title),
            Message::TaskMarkedCompleted(title) => format!("Task '{}' marked as completed.", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated successfully.", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted successfully.", title),
            Message::TaskTitleRequired => "Task title cannot be empty".to_string(),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::EditKeepBlank => "Leave a field blank to keep it unchanged.".to_string(),
            Message::ConfirmDeleteTask(summary) => format!("Delete {}?", summary),
            Message::OperationCancelled => "Operation cancelled.".to_string(),
            Message::InvalidNumber => "Please enter a valid number.".to_string(),

            // === VIEW MESSAGES ===
            Message::TasksHeader(filter, days) => match filter {
                TaskFilter::All => "--- All Tasks ---".to_string(),
                TaskFilter::Completed => "--- Completed Tasks ---".to_string(),
                TaskFilter::Pending => "--- Pending Tasks ---".to_string(),
                TaskFilter::DueSoon => format!("--- Tasks Due Soon (within {} days) ---", days),
            },
            Message::NoTasksAvailable => "No tasks available.".to_string(),
            Message::NoTasksForFilter(filter) => format!("No tasks found for the filter: {}", filter),
            Message::NoTasksToEdit => "No tasks available to edit.".to_string(),
            Message::NoTasksToDelete => "No tasks available to delete.".to_string(),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Enter task title".to_string(),
            Message::PromptTaskDescription => "Enter task description".to_string(),
            Message::PromptTaskCategory => "Enter task category (e.g., Work, Personal, Urgent)".to_string(),
            Message::PromptTaskPriority => "Enter task priority (Low, Medium, High) [Default: Medium]".to_string(),
            Message::PromptTaskDueDate => "Enter due date (YYYY-MM-DD) or leave blank".to_string(),
            Message::PromptTaskTitleEdit(current) => format!("Enter new title [{}]", current),
            Message::PromptTaskDescriptionEdit(current) => format!("Enter new description [{}]", current),
            Message::PromptTaskCategoryEdit(current) => format!("Enter new category [{}]", current),
            Message::PromptTaskPriorityEdit(current) => format!("Enter new priority (Low, Medium, High) [{}]", current),
            Message::PromptTaskDueDateEdit(current) => format!("Enter new due date (YYYY-MM-DD) [{}]", current),
            Message::PromptTaskNumberComplete => "Enter the task number to mark as completed".to_string(),
            Message::PromptTaskNumberEdit => "Enter the task number to edit".to_string(),
            Message::PromptTaskNumberDelete => "Enter the task number to delete".to_string(),

            // === DUE DATE MESSAGES ===
            Message::InvalidDateSetToNone => "Invalid date format. Due date will be set to None.".to_string(),
            Message::InvalidDateUnchanged => "Invalid date format. Due date will not be changed.".to_string(),

            // === STORAGE MESSAGES ===
            Message::TasksSaved(count, path) => format!("Saved {} task(s) to {}", count, path),
            Message::TasksSaveFailed(error) => format!("Failed to save tasks: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigReadFailed(path) => format!("Failed to read configuration file {}", path),
            Message::ConfigParseError(path) => format!("Failed to parse configuration file {}", path),
            Message::ConfigSaveError(path) => format!("Failed to save configuration file {}", path),
            Message::ConfigModuleTasks => "Tasks settings".to_string(),
            Message::PromptTasksFile => "Task file location".to_string(),
            Message::PromptDueSoonDays => "Due-soon window (days)".to_string(),
            Message::PromptDatePolicy => "When a due date is invalid".to_string(),
        };

        write!(f, "{}", text)
    }
}
