//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record shared by controller and repository.
//! - Keep the wire shape (`{id, name, number}`) in one place.
//!
//! # Invariants
//! - `id` is assigned by the remote store and never minted locally.
//! - A draft carries no `id`; the created record returned by the store does.
//! - `name` is expected to be non-empty; at most one visible contact should
//!   carry a given name (enforced by the controller's duplicate check).

use serde::de::{Deserializer, Error as DeError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque identifier assigned by the remote store.
///
/// Remote stores disagree on the JSON type of ids (older ones hand out
/// numbers, newer ones short strings), so decoding accepts both and keeps
/// the text form. The value is never interpreted locally beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ContactId(String);

impl ContactId {
    /// Wraps an identifier received from the remote store.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier in text form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContactId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ContactId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(value) => Ok(Self(value.to_string())),
            RawId::Text(value) if !value.is_empty() => Ok(Self(value)),
            RawId::Text(_) => Err(D::Error::custom("contact id must not be empty")),
        }
    }
}

/// Canonical contact record as held locally and exchanged with the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Stable store-assigned identifier.
    pub id: ContactId,
    /// Display name; the controller treats it as the uniqueness key.
    pub name: String,
    /// Phone number in free text form.
    pub number: String,
}

impl Contact {
    /// Creates a record from store-provided parts.
    pub fn new(id: impl Into<ContactId>, name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number: number.into(),
        }
    }

    /// Returns a copy of this record with the number replaced.
    ///
    /// Used by the overwrite flow: the update payload is the existing record
    /// with only the drafted number substituted.
    pub fn with_number(&self, number: impl Into<String>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            number: number.into(),
        }
    }

    /// Returns whether `filter` matches this contact's name as a
    /// case-insensitive substring. An empty filter matches everything.
    pub fn name_matches(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}

/// Creation payload: a contact before the store has assigned an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub number: String,
}

impl ContactDraft {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }
}
