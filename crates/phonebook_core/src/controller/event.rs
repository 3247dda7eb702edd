//! Controller input vocabulary.
//!
//! # Responsibility
//! - Name every input the transition function reacts to: user intents,
//!   resolved remote calls, and timer expiries.
//!
//! # Invariants
//! - Events are cloneable values; remote errors are carried as
//!   `RemoteFailure` summaries, never as live error objects.

use crate::model::{Contact, ContactId};
use crate::repo::RepoError;
use std::fmt::{Display, Formatter};

/// Cloneable summary of a failed remote call.
///
/// Completion events must be plain values, so the repository error is
/// flattened to its display form at the driver boundary. The detail feeds
/// logs; user-facing wording is chosen by the transition function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFailure {
    detail: String,
}

impl RemoteFailure {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl Display for RemoteFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.detail)
    }
}

impl From<RepoError> for RemoteFailure {
    fn from(value: RepoError) -> Self {
        Self::new(value.to_string())
    }
}

/// One input to the transition function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Load (or reload) the full contact list.
    RefreshRequested,
    /// A fetch issued by `RefreshRequested` resolved.
    FetchCompleted {
        result: Result<Vec<Contact>, RemoteFailure>,
    },
    /// Draft name edited.
    NameChanged(String),
    /// Draft number edited.
    NumberChanged(String),
    /// Filter text edited.
    FilterChanged(String),
    /// Submit the current draft (add or overwrite decision).
    SubmitRequested,
    /// The user answered an outstanding overwrite confirmation.
    OverwriteResolved { accepted: bool },
    /// A create issued by `SubmitRequested` resolved. `name` is the drafted
    /// name captured at request time, used for notification wording.
    CreateCompleted {
        name: String,
        result: Result<Contact, RemoteFailure>,
    },
    /// A confirmed overwrite update resolved.
    UpdateCompleted {
        id: ContactId,
        name: String,
        result: Result<Contact, RemoteFailure>,
    },
    /// Remove `contact` from the phonebook.
    DeleteRequested(Contact),
    /// A removal issued by `DeleteRequested` resolved.
    RemoveCompleted {
        id: ContactId,
        name: String,
        result: Result<(), RemoteFailure>,
    },
    /// A notification-clear timer fired for the given generation.
    NotificationExpired { generation: u64 },
}

impl Event {
    /// Whether this event reports a spawned repository call resolving.
    pub fn is_remote_completion(&self) -> bool {
        matches!(
            self,
            Self::FetchCompleted { .. }
                | Self::CreateCompleted { .. }
                | Self::UpdateCompleted { .. }
                | Self::RemoveCompleted { .. }
        )
    }
}
