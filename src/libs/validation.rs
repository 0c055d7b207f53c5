//! Input parsing shared by the add and edit flows.
//!
//! Due dates must be written as `YYYY-MM-DD` and name a real calendar day.
//! Priorities are only normalized, never validated: the store keeps whatever
//! level the user typed.

use crate::libs::error::{TaskError, TaskResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a due date typed by the user.
///
/// Blank input means "no due date" and is not an error.
///
/// # Examples
///
/// ```rust
/// use tdl::libs::validation::parse_due_date;
///
/// assert_eq!(parse_due_date("").unwrap(), None);
/// assert!(parse_due_date("2024-06-01").unwrap().is_some());
/// assert!(parse_due_date("13/25/2024").is_err());
/// ```
pub fn parse_due_date(text: &str) -> TaskResult<Option<NaiveDate>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    if !has_iso_date_shape(text) {
        return Err(TaskError::InvalidDateFormat(text.to_string()));
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map(Some)
        .map_err(|_| TaskError::InvalidDateFormat(text.to_string()))
}

// chrono accepts single-digit months and days; the file format does not.
fn has_iso_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Trims the input and capitalizes it: first letter upper case, the rest
/// lower case. Unknown levels pass through unchanged otherwise.
pub fn normalize_priority(text: &str) -> String {
    let mut chars = text.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// What to do when a typed due date does not parse.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatePolicy {
    /// Warn and carry on without a date.
    #[default]
    Ignore,
    /// Report the error so the caller can ask again.
    Reject,
}

impl DatePolicy {
    pub const ALL: [DatePolicy; 2] = [DatePolicy::Ignore, DatePolicy::Reject];

    /// Parses `text` under this policy.
    ///
    /// With [`DatePolicy::Ignore`] an invalid date resolves to `Ok(None)`;
    /// the caller decides what "no date" means for its operation.
    pub fn resolve(self, text: &str) -> TaskResult<Option<NaiveDate>> {
        match (self, parse_due_date(text)) {
            (DatePolicy::Ignore, Err(error)) => {
                warn!(%error, "ignoring invalid due date");
                Ok(None)
            }
            (_, result) => result,
        }
    }
}

impl fmt::Display for DatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatePolicy::Ignore => write!(f, "ignore"),
            DatePolicy::Reject => write!(f, "reject"),
        }
    }
}
