//! Domain model types.
//!
//! # Responsibility
//! - Define the contact record and its wire shape.
//! - Define the transient status banner posted by the controller.

pub mod contact;
pub mod notification;

pub use contact::{Contact, ContactDraft, ContactId};
pub use notification::{Notification, NotificationKind, NOTIFICATION_CLEAR_DELAY};
