use campushub_core::db::{open_db, open_db_in_memory};
use campushub_core::store::keys;
use campushub_core::{
    AdminConsole, Announcement, ConsoleError, Event, KeyValueStore, NewAnnouncement, NewEvent,
    NewStudent, RecordId, SqliteKeyValueStore, Student, StoreError, StoreResult,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

/// Opens a console over empty (but existing) collections, so first-run
/// seeding does not kick in.
fn empty_console() -> AdminConsole<SqliteKeyValueStore> {
    let store = SqliteKeyValueStore::new(open_db_in_memory().unwrap());
    store.save(keys::ANNOUNCEMENTS, &Vec::<Announcement>::new()).unwrap();
    store.save(keys::EVENTS, &Vec::<Event>::new()).unwrap();
    store.save(keys::STUDENTS, &Vec::<Student>::new()).unwrap();
    AdminConsole::open(store).unwrap()
}

fn draft_announcement(title: &str) -> NewAnnouncement {
    NewAnnouncement {
        title: title.to_string(),
        date: None,
        content: "content".to_string(),
    }
}

fn draft_event(name: &str) -> NewEvent {
    NewEvent {
        name: name.to_string(),
        date: None,
        location: "Main Hall".to_string(),
    }
}

fn partition_counts(console: &AdminConsole<SqliteKeyValueStore>) -> (usize, usize, usize) {
    (
        console.active_announcements().count(),
        console.archived_announcements().count(),
        console.announcements().len(),
    )
}

#[test]
fn insert_assigns_unique_ids_and_grows_by_one() {
    let mut console = empty_console();
    let mut ids = HashSet::new();

    for i in 0..5 {
        let before = console.announcements().len();
        let id = console.add_announcement(draft_announcement(&format!("notice {i}"))).unwrap();
        assert_eq!(console.announcements().len(), before + 1);
        assert!(ids.insert(id), "id {id} was reused");
    }
}

#[test]
fn insert_prepends_newest_first() {
    let mut console = empty_console();
    let first = console.add_announcement(draft_announcement("older")).unwrap();
    let second = console.add_announcement(draft_announcement("newer")).unwrap();

    assert_eq!(console.announcements()[0].id, second);
    assert_eq!(console.announcements()[1].id, first);
}

#[test]
fn archive_moves_record_between_partitions() {
    let mut console = empty_console();
    let id = console.add_announcement(draft_announcement("to archive")).unwrap();

    console.archive_announcement(id).unwrap();

    assert!(console.active_announcements().all(|a| a.id != id));
    assert!(console.archived_announcements().any(|a| a.id == id));
    let (active, archived, total) = partition_counts(&console);
    assert_eq!(active + archived, total);
}

#[test]
fn archive_is_idempotent() {
    let mut console = empty_console();
    let id = console.add_announcement(draft_announcement("twice")).unwrap();

    console.archive_announcement(id).unwrap();
    let once: Vec<Announcement> = console.announcements().to_vec();

    console.archive_announcement(id).unwrap();
    assert_eq!(console.announcements(), &once[..]);
}

#[test]
fn remove_deletes_from_active_and_purges_from_archive() {
    let mut console = empty_console();
    let active_id = console.add_event(draft_event("delete me")).unwrap();
    let archived_id = console.add_event(draft_event("purge me")).unwrap();
    console.archive_event(archived_id).unwrap();

    console.remove_event(active_id).unwrap();
    assert!(console.events().iter().all(|e| e.id != active_id));

    console.remove_event(archived_id).unwrap();
    assert!(console.events().is_empty());
}

#[test]
fn stale_id_operations_are_noops() {
    let mut console = empty_console();
    console.add_event(draft_event("survivor")).unwrap();
    let before: Vec<Event> = console.events().to_vec();
    let stale = RecordId::new_v4();

    console.archive_event(stale).unwrap();
    console.remove_event(stale).unwrap();
    console.archive_announcement(stale).unwrap();
    console.remove_announcement(stale).unwrap();

    assert_eq!(console.events(), &before[..]);
    assert!(console.announcements().is_empty());
}

#[test]
fn partition_invariant_holds_after_every_mutation() {
    let mut console = empty_console();
    let a = console.add_announcement(draft_announcement("a")).unwrap();
    let b = console.add_announcement(draft_announcement("b")).unwrap();
    let c = console.add_announcement(draft_announcement("c")).unwrap();

    for step in [
        ("archive", a),
        ("archive", b),
        ("remove", c),
        ("remove", a),
    ] {
        match step.0 {
            "archive" => console.archive_announcement(step.1).unwrap(),
            _ => console.remove_announcement(step.1).unwrap(),
        }
        let (active, archived, total) = partition_counts(&console);
        assert_eq!(active + archived, total);
    }
}

#[test]
fn empty_required_fields_reject_the_insert() {
    let mut console = empty_console();

    let err = console
        .add_announcement(NewAnnouncement {
            title: " ".to_string(),
            date: None,
            content: "body".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ConsoleError::Validation(_)));
    assert!(console.announcements().is_empty());

    let err = console
        .add_student(NewStudent {
            name: "Jane".to_string(),
            email: "".to_string(),
            program: "CS".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ConsoleError::Validation(_)));
    assert!(console.students().is_empty());
}

#[test]
fn mutations_survive_reopen_from_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("console.db");

    let (kept_id, archived_id) = {
        let store = SqliteKeyValueStore::new(open_db(&db_path).unwrap());
        let mut console = AdminConsole::open(store).unwrap();
        let kept = console.add_announcement(draft_announcement("kept")).unwrap();
        let archived = console.add_announcement(draft_announcement("archived")).unwrap();
        console.archive_announcement(archived).unwrap();
        (kept, archived)
    };

    let store = SqliteKeyValueStore::new(open_db(&db_path).unwrap());
    let console = AdminConsole::open(store).unwrap();

    assert!(console.active_announcements().any(|a| a.id == kept_id));
    assert!(console.archived_announcements().any(|a| a.id == archived_id));
}

/// Store double whose saves can be switched to fail, standing in for a
/// quota-exhausted or disabled medium.
struct FlakyStore {
    inner: SqliteKeyValueStore,
    fail_saves: Rc<Cell<bool>>,
}

impl KeyValueStore for FlakyStore {
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> StoreResult<T> {
        self.inner.load(key, default)
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        if self.fail_saves.get() {
            return Err(StoreError::Db(campushub_core::db::DbError::Sqlite(
                rusqlite::Error::InvalidQuery,
            )));
        }
        self.inner.save(key, value)
    }

    fn contains(&self, key: &str) -> StoreResult<bool> {
        self.inner.contains(key)
    }
}

#[test]
fn failed_save_surfaces_but_memory_state_stays_authoritative() {
    let fail_saves = Rc::new(Cell::new(false));
    let store = FlakyStore {
        inner: SqliteKeyValueStore::new(open_db_in_memory().unwrap()),
        fail_saves: Rc::clone(&fail_saves),
    };
    let mut console = AdminConsole::open(store).unwrap();
    let seeded = console.announcements().len();

    // Flip the medium into a failing state, then mutate.
    fail_saves.set(true);
    let err = console.add_announcement(draft_announcement("unsynced")).unwrap_err();
    assert!(matches!(err, ConsoleError::Store(_)));

    // The in-memory collection applied the insert even though the write
    // failed; the divergence was reported through the error above.
    assert_eq!(console.announcements().len(), seeded + 1);
}
