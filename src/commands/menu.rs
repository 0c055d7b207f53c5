use super::{open_session, task};
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::store::TaskFilter;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Add,
    View(TaskFilter),
    MarkCompleted,
    Edit,
    Delete,
    Exit,
}

impl MenuAction {
    const ALL: [MenuAction; 9] = [
        MenuAction::Add,
        MenuAction::View(TaskFilter::All),
        MenuAction::View(TaskFilter::Completed),
        MenuAction::View(TaskFilter::Pending),
        MenuAction::View(TaskFilter::DueSoon),
        MenuAction::MarkCompleted,
        MenuAction::Edit,
        MenuAction::Delete,
        MenuAction::Exit,
    ];

    fn label(self) -> Message {
        match self {
            MenuAction::Add => Message::MenuAddTask,
            MenuAction::View(TaskFilter::All) => Message::MenuViewAll,
            MenuAction::View(TaskFilter::Completed) => Message::MenuViewCompleted,
            MenuAction::View(TaskFilter::Pending) => Message::MenuViewPending,
            MenuAction::View(TaskFilter::DueSoon) => Message::MenuViewDueSoon,
            MenuAction::MarkCompleted => Message::MenuMarkCompleted,
            MenuAction::Edit => Message::MenuEditTask,
            MenuAction::Delete => Message::MenuDeleteTask,
            MenuAction::Exit => Message::MenuExit,
        }
    }
}

/// Runs the interactive menu until the user picks Exit.
///
/// The task file is written only on Exit. If the terminal fails mid-session
/// the tasks are saved before the error is returned.
pub fn cmd(file_override: Option<&Path>) -> Result<()> {
    let mut session = open_session(file_override)?;
    let labels: Vec<String> = MenuAction::ALL.iter().map(|action| action.label().to_string()).collect();

    loop {
        match step(&mut session, &labels) {
            Ok(true) => return Ok(()),
            Ok(false) => {}
            Err(e) => {
                if let Err(save_error) = session.save() {
                    msg_error!(Message::TasksSaveFailed(save_error.to_string()));
                }
                return Err(e);
            }
        }
    }
}

/// Handles one menu choice. Returns `true` once the session is saved and the
/// loop should end.
fn step(session: &mut Session, labels: &[String]) -> Result<bool> {
    msg_print!(Message::MenuTitle, true);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptMenuChoice.to_string())
        .items(labels)
        .default(0)
        .interact()?;

    let action = MenuAction::ALL[selection];
    debug!(?action, "menu action selected");

    match action {
        MenuAction::Add => task::add(session)?,
        MenuAction::View(filter) => task::view(session, filter),
        MenuAction::MarkCompleted => task::mark_completed(session)?,
        MenuAction::Edit => task::edit(session)?,
        MenuAction::Delete => task::delete(session)?,
        MenuAction::Exit => return exit(session),
    }

    Ok(false)
}

// A failed save keeps the menu open so the user can retry.
fn exit(session: &Session) -> Result<bool> {
    match session.save() {
        Ok(()) => {
            msg_success!(Message::TasksSaved(session.store().len(), session.file().path().display().to_string()));
            msg_print!(Message::Goodbye);
            Ok(true)
        }
        Err(e) => {
            msg_error!(Message::TasksSaveFailed(e.to_string()));
            Ok(false)
        }
    }
}
