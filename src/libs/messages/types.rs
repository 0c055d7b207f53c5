use crate::libs::store::TaskFilter;

#[derive(Debug, Clone)]
pub enum Message {
    // === MENU MESSAGES ===
    MenuTitle,
    MenuAddTask,
    MenuViewAll,
    MenuViewCompleted,
    MenuViewPending,
    MenuViewDueSoon,
    MenuMarkCompleted,
    MenuEditTask,
    MenuDeleteTask,
    MenuExit,
    PromptMenuChoice,
    Goodbye,

    // === TASK MESSAGES ===
    TaskAdded(String), // title
    TaskMarkedCompleted(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskTitleRequired,
    NoChangesDetected,
    EditKeepBlank,
    ConfirmDeleteTask(String), // task summary
    OperationCancelled,
    InvalidNumber,

    // === VIEW MESSAGES ===
    TasksHeader(TaskFilter, u32), // filter, due-soon window
    NoTasksAvailable,
    NoTasksForFilter(TaskFilter),
    NoTasksToEdit,
    NoTasksToDelete,

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskCategory,
    PromptTaskPriority,
    PromptTaskDueDate,
    PromptTaskTitleEdit(String), // current value
    PromptTaskDescriptionEdit(String),
    PromptTaskCategoryEdit(String),
    PromptTaskPriorityEdit(String),
    PromptTaskDueDateEdit(String),
    PromptTaskNumberComplete,
    PromptTaskNumberEdit,
    PromptTaskNumberDelete,

    // === DUE DATE MESSAGES ===
    InvalidDateSetToNone,
    InvalidDateUnchanged,

    // === STORAGE MESSAGES ===
    TasksSaved(usize, String), // count, path
    TasksSaveFailed(String),   // error

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String), // path
    ConfigReadFailed(String),
    ConfigParseError(String),
    ConfigSaveError(String),
    ConfigModuleTasks,
    PromptTasksFile,
    PromptDueSoonDays,
    PromptDatePolicy,
}
