//! Confirmation-gated action vocabulary.
//!
//! # Responsibility
//! - Map action identifiers to confirmation prompt text.
//! - Represent a staged, unconfirmed mutation as plain data.
//!
//! # Invariants
//! - Unknown action identifiers resolve to the generic prompt instead of
//!   failing; confirming such a request mutates nothing.
//! - A pending action carries `{action, record_id}` only; the effect is
//!   resolved at confirm time, so the slot stays inspectable.

use crate::model::record::RecordId;

/// The defined destructive and archival actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    /// Remove an active announcement.
    DeleteAnnouncement,
    /// Move an active announcement to the archive.
    ArchiveAnnouncement,
    /// Permanently remove an archived announcement.
    PurgeAnnouncement,
    /// Remove an active event.
    DeleteEvent,
    /// Move an active event to the archive.
    ArchiveEvent,
    /// Permanently remove an archived event.
    PurgeEvent,
}

impl ActionId {
    /// Parses the wire identifier used by the render layer's row buttons.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "delete-ann" => Some(Self::DeleteAnnouncement),
            "archive-ann" => Some(Self::ArchiveAnnouncement),
            "purge-ann" => Some(Self::PurgeAnnouncement),
            "delete-evt" => Some(Self::DeleteEvent),
            "archive-evt" => Some(Self::ArchiveEvent),
            "purge-evt" => Some(Self::PurgeEvent),
            _ => None,
        }
    }

    /// Returns the wire identifier for this action.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DeleteAnnouncement => "delete-ann",
            Self::ArchiveAnnouncement => "archive-ann",
            Self::PurgeAnnouncement => "purge-ann",
            Self::DeleteEvent => "delete-evt",
            Self::ArchiveEvent => "archive-evt",
            Self::PurgeEvent => "purge-evt",
        }
    }
}

/// Title and body text for the confirmation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: &'static str,
    pub body: &'static str,
}

const GENERIC_PROMPT: ConfirmPrompt = ConfirmPrompt {
    title: "Confirm",
    body: "Are you sure?",
};

impl ConfirmPrompt {
    /// Resolves prompt text for an action; `None` yields the generic prompt.
    pub fn for_action(action: Option<ActionId>) -> Self {
        let Some(action) = action else {
            return GENERIC_PROMPT;
        };
        match action {
            ActionId::DeleteAnnouncement => ConfirmPrompt {
                title: "Delete Announcement",
                body: "Are you sure you want to permanently delete this announcement?",
            },
            ActionId::ArchiveAnnouncement => ConfirmPrompt {
                title: "Archive Announcement",
                body: "Move this announcement to Archive?",
            },
            ActionId::PurgeAnnouncement => ConfirmPrompt {
                title: "Delete Archived Announcement",
                body: "Permanently delete from Archive?",
            },
            ActionId::DeleteEvent => ConfirmPrompt {
                title: "Delete Event",
                body: "Are you sure you want to permanently delete this event?",
            },
            ActionId::ArchiveEvent => ConfirmPrompt {
                title: "Archive Event",
                body: "Move this event to Archive?",
            },
            ActionId::PurgeEvent => ConfirmPrompt {
                title: "Delete Archived Event",
                body: "Permanently delete from Archive?",
            },
        }
    }
}

/// A staged mutation awaiting explicit confirmation.
///
/// `action` is `None` when the request carried an unknown identifier; the
/// prompt still shows, but confirming it applies nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAction {
    pub action: Option<ActionId>,
    pub record_id: RecordId,
}
