//! Application controller: pure state machine over events and effects.
//!
//! # Responsibility
//! - Own all application state and encode every transition without I/O.
//! - Hand side effects to the driver as values.

pub mod effect;
pub mod event;
pub mod state;
mod transition;

pub use effect::Effect;
pub use event::{Event, RemoteFailure};
pub use state::{AppState, PendingOverwrite};
