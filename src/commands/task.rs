//! Interactive handlers behind the menu entries.
//!
//! Each handler reads its input through `dialoguer`, calls one store
//! operation and reports the outcome. Errors from the store are shown to the
//! user and never abort the session; only terminal I/O failures propagate.

use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::store::{get_by_position, TaskFilter};
use crate::libs::task::{Priority, Task, TaskEdit};
use crate::libs::validation::{normalize_priority, DatePolicy};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

pub fn add(session: &mut Session) -> Result<()> {
    let theme = ColorfulTheme::default();

    let title: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            if input.trim().is_empty() {
                Err(Message::TaskTitleRequired.to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    let description = prompt_optional(&theme, &Message::PromptTaskDescription)?;
    let category = prompt_optional(&theme, &Message::PromptTaskCategory)?;
    let priority = normalize_priority(&prompt_optional(&theme, &Message::PromptTaskPriority)?);
    let due_date = prompt_due_date(&theme, session.date_policy(), &Message::PromptTaskDueDate, &Message::InvalidDateSetToNone)?;

    let mut task = Task::new(title.trim(), &description, &category).with_due_date(due_date);
    if !priority.is_empty() {
        task = task.with_priority(priority);
    }

    msg_success!(Message::TaskAdded(task.title.clone()));
    session.store_mut().add(task);

    Ok(())
}

/// Prints the tasks matching `filter`, numbered within the filtered view.
pub fn view(session: &Session, filter: TaskFilter) {
    let store = session.store();
    if store.is_empty() {
        msg_info!(Message::NoTasksAvailable);
        return;
    }

    let tasks = store.list_today(filter);
    if tasks.clone().next().is_none() {
        msg_info!(Message::NoTasksForFilter(filter));
        return;
    }

    msg_print!(Message::TasksHeader(filter, store.due_soon_days()), true);
    View::tasks(tasks);
}

pub fn mark_completed(session: &mut Session) -> Result<()> {
    let pending: Vec<_> = session.store().list_today(TaskFilter::Pending).collect();
    if pending.is_empty() {
        msg_info!(TaskError::NoPendingTasks);
        return Ok(());
    }
    View::tasks(pending);

    let Some(position) = prompt_position(&Message::PromptTaskNumberComplete)? else {
        return Ok(());
    };

    match session.store_mut().mark_completed_at(position) {
        Ok(task) => msg_success!(Message::TaskMarkedCompleted(task.title.clone())),
        Err(e) => msg_error!(e),
    }

    Ok(())
}

pub fn edit(session: &mut Session) -> Result<()> {
    if session.store().is_empty() {
        msg_info!(Message::NoTasksToEdit);
        return Ok(());
    }
    View::tasks(session.store().list_today(TaskFilter::All));

    let Some(position) = prompt_position(&Message::PromptTaskNumberEdit)? else {
        return Ok(());
    };
    let current = match get_by_position(session.store().tasks(), position) {
        Ok(task) => task.clone(),
        Err(e) => {
            msg_error!(e);
            return Ok(());
        }
    };

    let theme = ColorfulTheme::default();
    msg_info!(Message::EditKeepBlank);

    let title = prompt_optional(&theme, &Message::PromptTaskTitleEdit(current.title))?;
    let description = prompt_optional(&theme, &Message::PromptTaskDescriptionEdit(current.description))?;
    let category = prompt_optional(&theme, &Message::PromptTaskCategoryEdit(current.category))?;
    let priority = normalize_priority(&prompt_optional(&theme, &Message::PromptTaskPriorityEdit(current.priority.to_string()))?);
    let current_due = current.due_date.map(|date| date.to_string()).unwrap_or_else(|| "None".to_string());
    let due_date = prompt_due_date(
        &theme,
        session.date_policy(),
        &Message::PromptTaskDueDateEdit(current_due),
        &Message::InvalidDateUnchanged,
    )?;

    let edit = TaskEdit {
        title: Some(title),
        description: Some(description),
        category: Some(category),
        priority: Some(Priority::from(priority)),
        due_date,
    };
    if edit.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    match session.store_mut().edit_at(position, edit) {
        Ok(task) => msg_success!(Message::TaskUpdated(task.title.clone())),
        Err(e) => msg_error!(e),
    }

    Ok(())
}

pub fn delete(session: &mut Session) -> Result<()> {
    if session.store().is_empty() {
        msg_info!(Message::NoTasksToDelete);
        return Ok(());
    }
    View::tasks(session.store().list_today(TaskFilter::All));

    let Some(position) = prompt_position(&Message::PromptTaskNumberDelete)? else {
        return Ok(());
    };
    let summary = match get_by_position(session.store().tasks(), position) {
        Ok(task) => task.to_string(),
        Err(e) => {
            msg_error!(e);
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(summary).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    match session.store_mut().delete_at(position) {
        Ok(task) => msg_success!(Message::TaskDeleted(task.title)),
        Err(e) => msg_error!(e),
    }

    Ok(())
}

/// Reads a 1-based task number. Returns `None` after telling the user when
/// the input is not a number.
fn prompt_position(prompt: &Message) -> Result<Option<usize>> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .interact_text()?;

    match input.trim().parse::<usize>() {
        Ok(position) => Ok(Some(position)),
        Err(_) => {
            msg_error!(Message::InvalidNumber);
            Ok(None)
        }
    }
}

fn prompt_optional(theme: &ColorfulTheme, prompt: &Message) -> Result<String> {
    let input: String = Input::with_theme(theme)
        .with_prompt(prompt.to_string())
        .allow_empty(true)
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Asks for a due date until the configured policy accepts the answer.
fn prompt_due_date(theme: &ColorfulTheme, policy: DatePolicy, prompt: &Message, on_ignored: &Message) -> Result<Option<NaiveDate>> {
    loop {
        let text = prompt_optional(theme, prompt)?;
        match policy.resolve(&text) {
            Ok(None) if !text.is_empty() => {
                msg_warning!(on_ignored);
                return Ok(None);
            }
            Ok(due_date) => return Ok(due_date),
            Err(e) => msg_error!(e),
        }
    }
}
