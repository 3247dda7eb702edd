//! Core domain logic for the phonebook.
//! This crate is the single source of truth for state transitions and
//! remote-store reconciliation; frontends stay presentational.

pub mod controller;
pub mod driver;
pub mod logging;
pub mod model;
pub mod repo;

pub use controller::{AppState, Effect, Event, PendingOverwrite, RemoteFailure};
pub use driver::{Driver, UiRequest};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{
    Contact, ContactDraft, ContactId, Notification, NotificationKind, NOTIFICATION_CLEAR_DELAY,
};
pub use repo::{
    ContactRepository, HttpContactRepository, MemoryContactRepository, RepoError, RepoResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
