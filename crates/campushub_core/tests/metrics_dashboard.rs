use campushub_core::db::open_db_in_memory;
use campushub_core::store::keys;
use campushub_core::{
    AdminConsole, Announcement, Event, KeyValueStore, NewAnnouncement, NewEvent, NewStudent,
    SqliteKeyValueStore, Student,
};
use chrono::{Duration, NaiveDate};

fn empty_console() -> AdminConsole<SqliteKeyValueStore> {
    let store = SqliteKeyValueStore::new(open_db_in_memory().unwrap());
    store.save(keys::ANNOUNCEMENTS, &Vec::<Announcement>::new()).unwrap();
    store.save(keys::EVENTS, &Vec::<Event>::new()).unwrap();
    store.save(keys::STUDENTS, &Vec::<Student>::new()).unwrap();
    AdminConsole::open(store).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
}

fn event_on(name: &str, date: NaiveDate) -> NewEvent {
    NewEvent {
        name: name.to_string(),
        date: Some(date),
        location: "Hall".to_string(),
    }
}

#[test]
fn counters_reflect_the_data_model() {
    let mut console = empty_console();
    console
        .add_student(NewStudent {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            program: "CS".to_string(),
        })
        .unwrap();
    let archived = console
        .add_announcement(NewAnnouncement {
            title: "old".to_string(),
            date: None,
            content: "body".to_string(),
        })
        .unwrap();
    console
        .add_announcement(NewAnnouncement {
            title: "current".to_string(),
            date: None,
            content: "body".to_string(),
        })
        .unwrap();
    console.archive_announcement(archived).unwrap();

    let metrics = console.metrics(today());
    assert_eq!(metrics.total_students, 1);
    assert_eq!(metrics.announcements_count, 1);
}

#[test]
fn upcoming_event_within_three_days_appears_in_alerts() {
    let mut console = empty_console();
    let before = console.metrics(today());

    let id = console.add_event(event_on("Fair", today() + Duration::days(3))).unwrap();

    let after = console.metrics(today());
    assert_eq!(after.upcoming_events, before.upcoming_events + 1);
    assert!(after.alerts.iter().any(|e| e.id == id));
    assert_eq!(after.alerts_count(), before.alerts_count() + 1);
}

#[test]
fn seven_day_boundary_is_inclusive_and_eight_is_not() {
    let mut console = empty_console();
    let at_seven = console.add_event(event_on("week out", today() + Duration::days(7))).unwrap();
    let at_eight = console.add_event(event_on("too far", today() + Duration::days(8))).unwrap();

    let metrics = console.metrics(today());
    assert!(metrics.alerts.iter().any(|e| e.id == at_seven));
    assert!(metrics.alerts.iter().all(|e| e.id != at_eight));
    // Both still count as upcoming.
    assert_eq!(metrics.upcoming_events, 2);
}

#[test]
fn past_and_archived_events_never_alert() {
    let mut console = empty_console();
    console.add_event(event_on("yesterday", today() - Duration::days(1))).unwrap();
    let archived = console.add_event(event_on("soon", today() + Duration::days(2))).unwrap();
    console.archive_event(archived).unwrap();

    let metrics = console.metrics(today());
    assert_eq!(metrics.upcoming_events, 0);
    assert_eq!(metrics.alerts_count(), 0);
}

#[test]
fn alerts_preserve_collection_order() {
    let mut console = empty_console();
    let first = console.add_event(event_on("first", today() + Duration::days(5))).unwrap();
    let second = console.add_event(event_on("second", today() + Duration::days(1))).unwrap();

    // Newest-first collection order carries into the alert list.
    let metrics = console.metrics(today());
    let ids: Vec<_> = metrics.alerts.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![second, first]);
}

#[test]
fn metrics_are_recomputed_from_current_state_not_cached() {
    let mut console = empty_console();
    let id = console.add_event(event_on("fleeting", today() + Duration::days(2))).unwrap();
    assert_eq!(console.metrics(today()).alerts_count(), 1);

    console.remove_event(id).unwrap();
    let metrics = console.metrics(today());
    assert_eq!(metrics.alerts_count(), 0);
    assert_eq!(metrics.upcoming_events, 0);
}
