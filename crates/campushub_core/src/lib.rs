//! Core state-mutation and derived-view logic for the CampusHub admin
//! console.
//!
//! This crate owns the three record collections (announcements, events,
//! students), their archive/purge lifecycle, the confirmation-gated mutation
//! dispatcher, and the derived dashboard metrics. The render layer is an
//! external collaborator: it reads collections and metrics through
//! [`AdminConsole`] and triggers mutations through its entry points, never
//! mutating state directly.

pub mod db;
pub mod dispatch;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod search;
pub mod service;
pub mod store;

pub use dispatch::{ActionId, ConfirmPrompt, PendingAction};
pub use logging::{default_log_level, init_logging, logging_status};
pub use metrics::{DashboardMetrics, ALERT_WINDOW_DAYS};
pub use model::record::{
    today, Announcement, Event, NewAnnouncement, NewEvent, NewStudent, RecordId,
    RecordValidationError, Student,
};
pub use search::{matches_query, SearchableRow};
pub use service::console::{AdminConsole, ConsoleError, ConsoleResult};
pub use store::{KeyValueStore, SqliteKeyValueStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
