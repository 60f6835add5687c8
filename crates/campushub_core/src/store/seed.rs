//! First-run sample data seeding.
//!
//! # Responsibility
//! - Write fixed sample records for each collection key that has never been
//!   persisted, before any other component reads state.
//!
//! # Invariants
//! - Seeding never overwrites an existing value, including an empty array.
//! - Runs once per key; a purged-to-empty collection stays empty.

use super::{keys, KeyValueStore, StoreResult};
use crate::model::record::{Announcement, Event, Student};
use chrono::NaiveDate;
use log::info;
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn sample_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: Uuid::new_v4(),
            title: "Welcome to the new semester!".to_string(),
            date: date(2025, 8, 15),
            content: "Orientation and classes start next week.".to_string(),
            archived: false,
        },
        Announcement {
            id: Uuid::new_v4(),
            title: "Tech Seminar coming soon".to_string(),
            date: date(2025, 9, 10),
            content: "Join the Dept. seminar on Cloud & AI.".to_string(),
            archived: false,
        },
    ]
}

fn sample_events() -> Vec<Event> {
    vec![Event {
        id: Uuid::new_v4(),
        name: "Orientation Day".to_string(),
        date: date(2025, 9, 1),
        location: "Main Hall".to_string(),
        archived: false,
    }]
}

fn sample_students() -> Vec<Student> {
    vec![
        Student {
            id: Uuid::new_v4(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            program: "Computer Science (3rd Year)".to_string(),
        },
        Student {
            id: Uuid::new_v4(),
            name: "John Okafor".to_string(),
            email: "john.okafor@example.com".to_string(),
            program: "Electrical Engineering (2nd Year)".to_string(),
        },
    ]
}

/// Seeds sample records for each collection key with no prior value.
///
/// # Side effects
/// - Emits a `seed` logging event per written key.
pub fn seed_if_empty<S: KeyValueStore>(store: &S) -> StoreResult<()> {
    if !store.contains(keys::ANNOUNCEMENTS)? {
        store.save(keys::ANNOUNCEMENTS, &sample_announcements())?;
        info!("event=seed module=store status=ok key={}", keys::ANNOUNCEMENTS);
    }
    if !store.contains(keys::EVENTS)? {
        store.save(keys::EVENTS, &sample_events())?;
        info!("event=seed module=store status=ok key={}", keys::EVENTS);
    }
    if !store.contains(keys::STUDENTS)? {
        store.save(keys::STUDENTS, &sample_students())?;
        info!("event=seed module=store status=ok key={}", keys::STUDENTS);
    }
    Ok(())
}
