//! Pure transition function of the application controller.
//!
//! # Responsibility
//! - Encode every state change as `(state, event) -> effects`.
//! - Decide between create and overwrite on submit, reconcile the local
//!   list against resolved remote calls, and manage the banner lifecycle.
//!
//! # Invariants
//! - No I/O here; all side effects are returned as `Effect` values.
//! - The list changes only on resolved remote operations, never ahead of
//!   them.
//! - Every posted banner schedules exactly one clear carrying its
//!   generation; an expiry for an older generation is a no-op.

use crate::controller::effect::Effect;
use crate::controller::event::{Event, RemoteFailure};
use crate::controller::state::{AppState, PendingOverwrite};
use crate::model::{Contact, ContactDraft, ContactId, Notification, NotificationKind};

impl AppState {
    /// Applies one event and returns the side effects to execute.
    ///
    /// # Contract
    /// - Events must be applied in arrival order.
    /// - A completion whose target id has meanwhile left the list leaves
    ///   the list unchanged; the remote store is the source of truth and a
    ///   refresh reconciles.
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::RefreshRequested => vec![Effect::FetchContacts],
            Event::FetchCompleted { result } => self.on_fetch_completed(result),
            Event::NameChanged(value) => {
                self.draft_name = value;
                Vec::new()
            }
            Event::NumberChanged(value) => {
                self.draft_number = value;
                Vec::new()
            }
            Event::FilterChanged(value) => {
                self.filter = value;
                Vec::new()
            }
            Event::SubmitRequested => self.on_submit(),
            Event::OverwriteResolved { accepted } => self.on_overwrite_resolved(accepted),
            Event::CreateCompleted { name, result } => self.on_create_completed(name, result),
            Event::UpdateCompleted { id, name, result } => {
                self.on_update_completed(id, name, result)
            }
            Event::DeleteRequested(contact) => self.on_delete_requested(contact),
            Event::RemoveCompleted { id, name, result } => {
                self.on_remove_completed(id, name, result)
            }
            Event::NotificationExpired { generation } => {
                self.on_notification_expired(generation);
                Vec::new()
            }
        }
    }

    fn on_fetch_completed(&mut self, result: Result<Vec<Contact>, RemoteFailure>) -> Vec<Effect> {
        match result {
            Ok(contacts) => {
                self.contacts = contacts;
                Vec::new()
            }
            Err(_) => vec![self.post_notification(
                "Failed to load phonebook from server".to_string(),
                NotificationKind::Error,
            )],
        }
    }

    /// Add-or-overwrite decision. The duplicate lookup is an exact,
    /// case-sensitive name match against the full list, not the filtered
    /// view.
    fn on_submit(&mut self) -> Vec<Effect> {
        if self.pending_overwrite.is_some() {
            return Vec::new();
        }
        if self.draft_name.trim().is_empty() {
            return Vec::new();
        }

        match self
            .contacts
            .iter()
            .find(|contact| contact.name == self.draft_name)
        {
            Some(existing) => {
                let replacement = existing.with_number(self.draft_number.clone());
                let name = replacement.name.clone();
                self.pending_overwrite = Some(PendingOverwrite::new(replacement));
                vec![Effect::ConfirmOverwrite { name }]
            }
            None => vec![Effect::CreateContact {
                draft: ContactDraft::new(self.draft_name.clone(), self.draft_number.clone()),
            }],
        }
    }

    fn on_overwrite_resolved(&mut self, accepted: bool) -> Vec<Effect> {
        let Some(pending) = self.pending_overwrite.take() else {
            return Vec::new();
        };
        if !accepted {
            return Vec::new();
        }

        let contact = pending.into_replacement();
        vec![Effect::UpdateContact {
            id: contact.id.clone(),
            contact,
        }]
    }

    fn on_create_completed(
        &mut self,
        name: String,
        result: Result<Contact, RemoteFailure>,
    ) -> Vec<Effect> {
        match result {
            Ok(contact) => {
                self.contacts.push(contact);
                self.clear_draft();
                vec![self.post_notification(format!("Added {name}"), NotificationKind::Success)]
            }
            Err(_) => vec![self.post_notification(
                format!("Failed to add {name} to server"),
                NotificationKind::Error,
            )],
        }
    }

    fn on_update_completed(
        &mut self,
        id: ContactId,
        name: String,
        result: Result<Contact, RemoteFailure>,
    ) -> Vec<Effect> {
        match result {
            Ok(contact) => {
                if let Some(slot) = self.contacts.iter_mut().find(|existing| existing.id == id) {
                    *slot = contact;
                }
                self.clear_draft();
                vec![self.post_notification(
                    format!("Updated the number of {name}"),
                    NotificationKind::Success,
                )]
            }
            Err(_) => vec![self.post_notification(
                format!("Information of {name} has already been removed from server"),
                NotificationKind::Error,
            )],
        }
    }

    /// The removal banner is posted at request time; a failed remote call
    /// supersedes it with an error.
    fn on_delete_requested(&mut self, contact: Contact) -> Vec<Effect> {
        let name = contact.name;
        let mut effects = vec![Effect::RemoveContact {
            id: contact.id,
            name: name.clone(),
        }];
        effects.push(self.post_notification(format!("Deleted {name}"), NotificationKind::Success));
        effects
    }

    fn on_remove_completed(
        &mut self,
        id: ContactId,
        name: String,
        result: Result<(), RemoteFailure>,
    ) -> Vec<Effect> {
        match result {
            Ok(()) => {
                self.contacts.retain(|contact| contact.id != id);
                Vec::new()
            }
            Err(_) => vec![self.post_notification(
                format!("Failed to delete {name} from server"),
                NotificationKind::Error,
            )],
        }
    }

    fn on_notification_expired(&mut self, generation: u64) {
        if self
            .notification
            .as_ref()
            .is_some_and(|current| current.generation == generation)
        {
            self.notification = None;
        }
    }

    fn clear_draft(&mut self) {
        self.draft_name.clear();
        self.draft_number.clear();
    }

    /// Posts a banner under a fresh generation and returns the clear effect
    /// to schedule for it.
    fn post_notification(&mut self, message: String, kind: NotificationKind) -> Effect {
        self.generation += 1;
        self.notification = Some(match kind {
            NotificationKind::Success => Notification::success(message, self.generation),
            NotificationKind::Error => Notification::error(message, self.generation),
        });
        Effect::ScheduleClear {
            generation: self.generation,
        }
    }
}
