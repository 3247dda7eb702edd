//! In-process contact repository.
//!
//! # Responsibility
//! - Back the same CRUD contract with a plain in-memory collection, for
//!   offline runs and deterministic tests.
//!
//! # Invariants
//! - Assigned ids are unique for the lifetime of the repository.
//! - Insertion order is preserved; `update` replaces in place.

use crate::model::{Contact, ContactDraft, ContactId};
use crate::repo::contact_repo::{ContactRepository, RepoError, RepoResult};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// Contact repository holding records in process memory.
#[derive(Default)]
pub struct MemoryContactRepository {
    contacts: Mutex<Vec<Contact>>,
}

impl MemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository pre-populated with `contacts`.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Mutex::new(contacts),
        }
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Contact>> {
        self.contacts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ContactRepository for MemoryContactRepository {
    async fn fetch_all(&self) -> RepoResult<Vec<Contact>> {
        Ok(self.guard().clone())
    }

    async fn create(&self, draft: &ContactDraft) -> RepoResult<Contact> {
        let contact = Contact::new(
            Uuid::new_v4().to_string(),
            draft.name.clone(),
            draft.number.clone(),
        );
        self.guard().push(contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: &ContactId, contact: &Contact) -> RepoResult<Contact> {
        let mut contacts = self.guard();
        let slot = contacts
            .iter_mut()
            .find(|existing| existing.id == *id)
            .ok_or_else(|| RepoError::NotFound(id.clone()))?;
        *slot = contact.clone();
        Ok(contact.clone())
    }

    async fn remove(&self, id: &ContactId) -> RepoResult<()> {
        let mut contacts = self.guard();
        let position = contacts
            .iter()
            .position(|existing| existing.id == *id)
            .ok_or_else(|| RepoError::NotFound(id.clone()))?;
        contacts.remove(position);
        Ok(())
    }
}
