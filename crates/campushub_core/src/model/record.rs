//! Record types for announcements, events and students.
//!
//! # Responsibility
//! - Define the persisted record shapes and their draft (input) forms.
//! - Enforce non-empty-text validation at record construction.
//!
//! # Invariants
//! - `id` is stable and never reused within a collection.
//! - `archived` is monotonic: no operation in this core clears it.
//! - Dates are calendar dates; time of day is never stored.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every console record.
pub type RecordId = Uuid;

/// Returns the current calendar date in local time.
///
/// Draft records with an unset date fall back to this value.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Validation error for draft record input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordValidationError {
    /// A required text field was empty or whitespace-only.
    EmptyField(&'static str),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "required field `{field}` is empty"),
        }
    }
}

impl Error for RecordValidationError {}

fn require_text(field: &'static str, value: &str) -> Result<String, RecordValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RecordValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// Posted notice shown on the announcements board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: RecordId,
    pub title: String,
    pub date: NaiveDate,
    pub content: String,
    #[serde(default)]
    pub archived: bool,
}

/// Scheduled campus event with a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: RecordId,
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    #[serde(default)]
    pub archived: bool,
}

/// Enrolled student. Students have no archive lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub program: String,
}

/// Draft input for a new announcement, as submitted by a form.
#[derive(Debug, Clone, Default)]
pub struct NewAnnouncement {
    pub title: String,
    /// Unset dates default to the current calendar date.
    pub date: Option<NaiveDate>,
    pub content: String,
}

/// Draft input for a new event.
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub name: String,
    /// Unset dates default to the current calendar date.
    pub date: Option<NaiveDate>,
    pub location: String,
}

/// Draft input for a new student record.
#[derive(Debug, Clone, Default)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub program: String,
}

impl Announcement {
    /// Builds a validated announcement with a fresh stable id.
    ///
    /// # Contract
    /// - `title` and `content` must be non-empty after trimming.
    /// - `archived` starts as `false`.
    pub fn from_draft(draft: NewAnnouncement) -> Result<Self, RecordValidationError> {
        Ok(Self {
            id: Uuid::new_v4(),
            title: require_text("title", &draft.title)?,
            date: draft.date.unwrap_or_else(today),
            content: require_text("content", &draft.content)?,
            archived: false,
        })
    }

    /// Marks the record as archived. Never cleared by this core.
    pub fn archive(&mut self) {
        self.archived = true;
    }
}

impl Event {
    /// Builds a validated event with a fresh stable id.
    ///
    /// # Contract
    /// - `name` and `location` must be non-empty after trimming.
    /// - `archived` starts as `false`.
    pub fn from_draft(draft: NewEvent) -> Result<Self, RecordValidationError> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: require_text("name", &draft.name)?,
            date: draft.date.unwrap_or_else(today),
            location: require_text("location", &draft.location)?,
            archived: false,
        })
    }

    /// Marks the record as archived. Never cleared by this core.
    pub fn archive(&mut self) {
        self.archived = true;
    }
}

impl Student {
    /// Builds a validated student record with a fresh stable id.
    pub fn from_draft(draft: NewStudent) -> Result<Self, RecordValidationError> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: require_text("name", &draft.name)?,
            email: require_text("email", &draft.email)?,
            program: require_text("program", &draft.program)?,
        })
    }
}
