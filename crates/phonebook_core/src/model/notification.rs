//! Transient status banner shown after each completed action.
//!
//! # Responsibility
//! - Represent the single visible banner and its severity.
//! - Carry the generation counter that makes delayed clears safe.
//!
//! # Invariants
//! - At most one banner is visible at a time; posting replaces the previous
//!   one and bumps the generation.
//! - A scheduled clear only takes effect if its generation still matches the
//!   visible banner, so an expiry for a superseded banner is a no-op.

use std::time::Duration;

/// How long a banner stays visible before its scheduled clear fires.
pub const NOTIFICATION_CLEAR_DELAY: Duration = Duration::from_millis(3000);

/// Severity of a status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Action completed as requested.
    Success,
    /// Action failed or acted on stale data.
    Error,
}

/// A status banner with the generation it was posted under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    /// Monotonic counter value at the time of posting. Clears scheduled for
    /// an older generation must be ignored.
    pub generation: u64,
}

impl Notification {
    pub fn success(message: impl Into<String>, generation: u64) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
            generation,
        }
    }

    pub fn error(message: impl Into<String>, generation: u64) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
            generation,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}
