//! Admin console state container and mutation dispatcher.
//!
//! # Responsibility
//! - Own the three in-memory collections and the single pending-action slot.
//! - Gate every destructive or archival mutation behind explicit confirmation.
//! - Re-persist the whole collection after every mutation.
//!
//! # Invariants
//! - Insertion order is meaningful: new records are prepended (newest-first).
//! - Archive state is monotonic; no operation here clears `archived`.
//! - Stale record ids are no-ops, never errors.
//! - At most one action is pending; a new request replaces the old one.
//! - In-memory state stays authoritative when a save fails; the divergence
//!   is reported through the returned error, not swallowed.

use crate::dispatch::{ActionId, ConfirmPrompt, PendingAction};
use crate::metrics::{self, DashboardMetrics};
use crate::model::record::{
    today, Announcement, Event, NewAnnouncement, NewEvent, NewStudent, RecordId,
    RecordValidationError, Student,
};
use crate::store::seed::seed_if_empty;
use crate::store::{keys, KeyValueStore, StoreError, StoreResult};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Service-level error for console operations.
#[derive(Debug)]
pub enum ConsoleError {
    /// Draft input failed non-empty-text validation.
    Validation(RecordValidationError),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for ConsoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConsoleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<RecordValidationError> for ConsoleError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for ConsoleError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Explicitly owned state container for the admin console core.
///
/// The render layer reads collections and metrics through the accessors and
/// triggers mutations through the form entry points and the
/// `request_action` / `confirm` pair; it never touches the collections
/// directly.
pub struct AdminConsole<S: KeyValueStore> {
    store: S,
    announcements: Vec<Announcement>,
    events: Vec<Event>,
    students: Vec<Student>,
    pending: Option<PendingAction>,
}

impl<S: KeyValueStore> AdminConsole<S> {
    /// Seeds first-run sample data, then loads all three collections.
    ///
    /// # Contract
    /// - Seeding runs before any collection read and never overwrites an
    ///   existing (even empty) snapshot.
    pub fn open(store: S) -> StoreResult<Self> {
        seed_if_empty(&store)?;

        let announcements = store.load(keys::ANNOUNCEMENTS, Vec::new())?;
        let events = store.load(keys::EVENTS, Vec::new())?;
        let students = store.load(keys::STUDENTS, Vec::new())?;

        info!(
            "event=console_open module=console status=ok announcements={} events={} students={}",
            announcements.len(),
            events.len(),
            students.len()
        );

        Ok(Self {
            store,
            announcements,
            events,
            students,
            pending: None,
        })
    }

    // ----- collection accessors -----

    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Active announcements, in collection (newest-first) order.
    pub fn active_announcements(&self) -> impl Iterator<Item = &Announcement> {
        self.announcements.iter().filter(|a| !a.archived)
    }

    /// Archived announcements, in collection order.
    pub fn archived_announcements(&self) -> impl Iterator<Item = &Announcement> {
        self.announcements.iter().filter(|a| a.archived)
    }

    /// Active events, in collection (newest-first) order.
    pub fn active_events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| !e.archived)
    }

    /// Archived events, in collection order.
    pub fn archived_events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| e.archived)
    }

    // ----- form entry points -----

    /// Validates a draft announcement, prepends it and persists.
    ///
    /// Returns the fresh record id.
    pub fn add_announcement(&mut self, draft: NewAnnouncement) -> ConsoleResult<RecordId> {
        let record = Announcement::from_draft(draft)?;
        let id = record.id;
        self.announcements.insert(0, record);
        self.persist_announcements()?;
        info!("event=record_insert module=console status=ok collection=announcements id={id}");
        Ok(id)
    }

    /// Validates a draft event, prepends it and persists.
    pub fn add_event(&mut self, draft: NewEvent) -> ConsoleResult<RecordId> {
        let record = Event::from_draft(draft)?;
        let id = record.id;
        self.events.insert(0, record);
        self.persist_events()?;
        info!("event=record_insert module=console status=ok collection=events id={id}");
        Ok(id)
    }

    /// Validates a draft student record, prepends it and persists.
    ///
    /// Students have no archive lifecycle and no dispatcher actions.
    pub fn add_student(&mut self, draft: NewStudent) -> ConsoleResult<RecordId> {
        let record = Student::from_draft(draft)?;
        let id = record.id;
        self.students.insert(0, record);
        self.persist_students()?;
        info!("event=record_insert module=console status=ok collection=students id={id}");
        Ok(id)
    }

    // ----- direct lifecycle operations -----

    /// Archives the announcement with `id`. Stale id is a no-op; archiving
    /// twice is the same as archiving once.
    pub fn archive_announcement(&mut self, id: RecordId) -> StoreResult<()> {
        let Some(record) = self.announcements.iter_mut().find(|a| a.id == id) else {
            return Ok(());
        };
        record.archive();
        self.persist_announcements()
    }

    /// Removes the announcement with `id` from either partition (delete for
    /// active records, purge for archived ones). Stale id is a no-op.
    pub fn remove_announcement(&mut self, id: RecordId) -> StoreResult<()> {
        let before = self.announcements.len();
        self.announcements.retain(|a| a.id != id);
        if self.announcements.len() == before {
            return Ok(());
        }
        self.persist_announcements()
    }

    /// Archives the event with `id`. Stale id is a no-op; idempotent.
    pub fn archive_event(&mut self, id: RecordId) -> StoreResult<()> {
        let Some(record) = self.events.iter_mut().find(|e| e.id == id) else {
            return Ok(());
        };
        record.archive();
        self.persist_events()
    }

    /// Removes the event with `id` from either partition. Stale id is a
    /// no-op.
    pub fn remove_event(&mut self, id: RecordId) -> StoreResult<()> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        if self.events.len() == before {
            return Ok(());
        }
        self.persist_events()
    }

    // ----- confirmation-gated dispatch -----

    /// Stages `action_id` against `record_id` as the single pending action
    /// and returns the prompt text to present.
    ///
    /// # Contract
    /// - A previously pending, unconfirmed action is silently replaced
    ///   (last-request-wins; there is only one confirmation surface).
    /// - Unknown identifiers stage an inert pending action behind the
    ///   generic prompt instead of failing.
    pub fn request_action(&mut self, action_id: &str, record_id: RecordId) -> ConfirmPrompt {
        let action = ActionId::parse(action_id);
        if action.is_none() {
            warn!(
                "event=action_request module=console status=unknown action={} id={}",
                action_id, record_id
            );
        }
        self.pending = Some(PendingAction { action, record_id });
        ConfirmPrompt::for_action(action)
    }

    /// Applies and clears the pending action, if any.
    ///
    /// # Contract
    /// - No pending action: no-op, collections and metrics unchanged.
    /// - Pending action with an unknown identifier: clears the slot without
    ///   mutating.
    /// - Stale record id: clears the slot, collection unchanged.
    pub fn confirm(&mut self) -> StoreResult<()> {
        let Some(PendingAction { action, record_id }) = self.pending.take() else {
            return Ok(());
        };
        let Some(action) = action else {
            return Ok(());
        };

        let result = match action {
            ActionId::DeleteAnnouncement | ActionId::PurgeAnnouncement => {
                self.remove_announcement(record_id)
            }
            ActionId::ArchiveAnnouncement => self.archive_announcement(record_id),
            ActionId::DeleteEvent | ActionId::PurgeEvent => self.remove_event(record_id),
            ActionId::ArchiveEvent => self.archive_event(record_id),
        };

        match &result {
            Ok(()) => info!(
                "event=action_confirm module=console status=ok action={} id={}",
                action.as_str(),
                record_id
            ),
            Err(err) => warn!(
                "event=action_confirm module=console status=error action={} id={} error={}",
                action.as_str(),
                record_id,
                err
            ),
        }

        result
    }

    /// Discards the pending action without side effects.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns the currently staged action, if any.
    pub fn pending_action(&self) -> Option<PendingAction> {
        self.pending
    }

    // ----- derived view -----

    /// Recomputes dashboard metrics from current collection state.
    ///
    /// Pure with respect to `today`; nothing is cached between calls.
    pub fn metrics(&self, today: chrono::NaiveDate) -> DashboardMetrics {
        metrics::compute(&self.announcements, &self.events, &self.students, today)
    }

    /// Recomputes dashboard metrics against the current calendar date.
    pub fn metrics_now(&self) -> DashboardMetrics {
        self.metrics(today())
    }

    // ----- persistence -----

    fn persist_announcements(&self) -> StoreResult<()> {
        self.store.save(keys::ANNOUNCEMENTS, &self.announcements)
    }

    fn persist_events(&self) -> StoreResult<()> {
        self.store.save(keys::EVENTS, &self.events)
    }

    fn persist_students(&self) -> StoreResult<()> {
        self.store.save(keys::STUDENTS, &self.students)
    }
}
