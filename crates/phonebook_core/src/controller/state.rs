//! Controller-owned application state.
//!
//! # Responsibility
//! - Hold the contact list, the draft, the visible notification and any
//!   outstanding overwrite confirmation.
//! - Expose read-only snapshots to frontends.
//!
//! # Invariants
//! - Mutation happens only through `AppState::apply`; frontends see
//!   accessors, never fields.
//! - `generation` increases by one for every posted notification and never
//!   resets, so stale clear timers can be told apart from current ones.
//! - At most one overwrite confirmation is outstanding at a time.

use crate::model::{Contact, Notification};

/// Overwrite captured at submit time, held while the user's confirmation is
/// outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOverwrite {
    /// The existing record with the drafted number already substituted.
    pub(crate) replacement: Contact,
}

impl PendingOverwrite {
    pub(crate) fn new(replacement: Contact) -> Self {
        Self { replacement }
    }

    /// Name of the contact the confirmation is about.
    pub fn name(&self) -> &str {
        &self.replacement.name
    }

    pub(crate) fn into_replacement(self) -> Contact {
        self.replacement
    }
}

/// All state of the running application.
#[derive(Debug, Default)]
pub struct AppState {
    pub(crate) contacts: Vec<Contact>,
    pub(crate) draft_name: String,
    pub(crate) draft_number: String,
    pub(crate) filter: String,
    pub(crate) notification: Option<Notification>,
    pub(crate) pending_overwrite: Option<PendingOverwrite>,
    pub(crate) generation: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full contact list in store order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Contacts whose name matches the filter as a case-insensitive
    /// substring. An empty filter shows everything.
    pub fn visible_contacts(&self) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|contact| contact.name_matches(&self.filter))
            .collect()
    }

    pub fn draft_name(&self) -> &str {
        &self.draft_name
    }

    pub fn draft_number(&self) -> &str {
        &self.draft_number
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// The currently visible banner, if any.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// The overwrite confirmation awaiting an answer, if any.
    pub fn pending_overwrite(&self) -> Option<&PendingOverwrite> {
        self.pending_overwrite.as_ref()
    }
}
