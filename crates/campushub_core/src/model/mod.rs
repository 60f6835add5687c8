//! Domain model for the three console collections.
//!
//! # Responsibility
//! - Define canonical record shapes for announcements, events and students.
//! - Keep the wire shape identical to the persisted JSON arrays.
//!
//! # Invariants
//! - Every record is identified by a stable `RecordId`.
//! - Archive state is a strict bipartition: a record is active or archived,
//!   never both; absence from the collection means purged.

pub mod record;
