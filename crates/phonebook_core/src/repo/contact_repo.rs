//! Contact repository contracts and HTTP implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the remote contact collection.
//! - Keep URL layout and status-code handling inside the persistence boundary.
//!
//! # Invariants
//! - `update` and `remove` report a missing record as `RepoError::NotFound`
//!   instead of a generic status error, so callers can react to stale ids.
//! - Response bodies are decoded strictly; malformed payloads surface as
//!   `RepoError::InvalidData` rather than being silently dropped.

use crate::model::{Contact, ContactDraft, ContactId};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for contact persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Transport(reqwest::Error),
    NotFound(ContactId),
    Api { status: u16 },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
            Self::Api { status } => write!(f, "server responded with status {status}"),
            Self::InvalidData(message) => write!(f, "invalid contact data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Api { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<reqwest::Error> for RepoError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            return Self::InvalidData(value.to_string());
        }
        Self::Transport(value)
    }
}

/// Repository interface for contact CRUD operations.
#[async_trait]
pub trait ContactRepository {
    /// Fetches every contact in the collection.
    async fn fetch_all(&self) -> RepoResult<Vec<Contact>>;

    /// Stores a new contact and returns the record with its assigned id.
    async fn create(&self, draft: &ContactDraft) -> RepoResult<Contact>;

    /// Replaces the record at `id` with `contact` and returns the stored form.
    async fn update(&self, id: &ContactId, contact: &Contact) -> RepoResult<Contact>;

    /// Removes the record at `id`.
    async fn remove(&self, id: &ContactId) -> RepoResult<()>;
}

/// HTTP-backed contact repository speaking the flat JSON collection protocol:
/// `GET`/`POST` on `/{collection}`, `PUT`/`DELETE` on `/{collection}/{id}`.
pub struct HttpContactRepository {
    client: reqwest::Client,
    base_url: String,
    collection: String,
}

impl HttpContactRepository {
    pub fn new(base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
            collection: collection.into(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.collection)
    }

    fn record_url(&self, id: &ContactId) -> String {
        format!("{}/{}/{}", self.base_url, self.collection, id)
    }
}

#[async_trait]
impl ContactRepository for HttpContactRepository {
    async fn fetch_all(&self) -> RepoResult<Vec<Contact>> {
        let response = self.client.get(self.collection_url()).send().await?;
        let response = ensure_success(response, None)?;
        Ok(response.json::<Vec<Contact>>().await?)
    }

    async fn create(&self, draft: &ContactDraft) -> RepoResult<Contact> {
        let response = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;
        let response = ensure_success(response, None)?;
        Ok(response.json::<Contact>().await?)
    }

    async fn update(&self, id: &ContactId, contact: &Contact) -> RepoResult<Contact> {
        let response = self
            .client
            .put(self.record_url(id))
            .json(contact)
            .send()
            .await?;
        let response = ensure_success(response, Some(id))?;
        Ok(response.json::<Contact>().await?)
    }

    async fn remove(&self, id: &ContactId) -> RepoResult<()> {
        let response = self.client.delete(self.record_url(id)).send().await?;
        ensure_success(response, Some(id))?;
        Ok(())
    }
}

/// Maps non-success statuses to repository errors. A 404 on a record URL
/// becomes `NotFound` so callers can tell stale ids from server trouble.
fn ensure_success(response: Response, id: Option<&ContactId>) -> RepoResult<Response> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            return Err(RepoError::NotFound(id.clone()));
        }
    }
    if !status.is_success() {
        return Err(RepoError::Api {
            status: status.as_u16(),
        });
    }
    Ok(response)
}
