//! Boundary of the external text search filter.
//!
//! # Responsibility
//! - Provide the pure, non-mutating row predicate the render layer applies
//!   when filtering visible rows.
//!
//! # Invariants
//! - Filtering never touches collection state; counters reflect the data
//!   model, not the filtered view.

use crate::model::record::{Announcement, Event, Student};

/// Case-insensitive substring match; an empty query matches every row.
pub fn matches_query(row_text: &str, query: &str) -> bool {
    row_text.to_lowercase().contains(&query.to_lowercase())
}

/// Concatenated searchable text of a rendered row.
pub trait SearchableRow {
    fn row_text(&self) -> String;
}

impl SearchableRow for Announcement {
    fn row_text(&self) -> String {
        format!("{} {} {}", self.title, self.date, self.content)
    }
}

impl SearchableRow for Event {
    fn row_text(&self) -> String {
        format!("{} {} {}", self.name, self.date, self.location)
    }
}

impl SearchableRow for Student {
    fn row_text(&self) -> String {
        format!("{} {} {}", self.name, self.email, self.program)
    }
}
