//! Side effects requested by the transition function.
//!
//! # Responsibility
//! - Describe the work the driver must perform after an event is applied.
//!
//! # Invariants
//! - Effects are descriptions only; nothing here performs I/O.
//! - Each repository effect has exactly one completion event that the
//!   driver feeds back once the call resolves.

use crate::model::{Contact, ContactDraft, ContactId};

/// One side effect to execute outside the pure controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the full collection; resolves as `Event::FetchCompleted`.
    FetchContacts,
    /// Store a new contact; resolves as `Event::CreateCompleted`.
    CreateContact { draft: ContactDraft },
    /// Replace the record at `id`; resolves as `Event::UpdateCompleted`.
    UpdateContact { id: ContactId, contact: Contact },
    /// Delete the record at `id`; resolves as `Event::RemoveCompleted`.
    RemoveContact { id: ContactId, name: String },
    /// Ask the user whether to replace the number of the named contact.
    ConfirmOverwrite { name: String },
    /// After the clear delay, feed back `Event::NotificationExpired` so a
    /// still-current banner is erased.
    ScheduleClear { generation: u64 },
}
