//! Stateless rendering of controller state snapshots.
//!
//! # Responsibility
//! - Turn `AppState` views into terminal text: contact rows, the status
//!   banner, the draft line and the help screen.
//!
//! # Invariants
//! - Rendering never mutates state and issues no events.
//! - Banner colors follow severity: green for success, red for error.

use colored::Colorize;
use phonebook_core::{AppState, Contact, Notification, NotificationKind};

/// Name/number rows of the given contacts, names padded to one column.
pub fn contact_table(contacts: &[&Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts to show.".to_string();
    }

    let width = contacts
        .iter()
        .map(|contact| contact.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for contact in contacts {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            contact.name,
            contact.number,
            width = width
        ));
    }
    out.pop();
    out
}

/// The status banner, tinted by severity.
pub fn banner_line(notification: &Notification) -> String {
    match notification.kind {
        NotificationKind::Success => notification.message.green().to_string(),
        NotificationKind::Error => notification.message.red().to_string(),
    }
}

/// One-line echo of the current draft fields.
pub fn draft_line(state: &AppState) -> String {
    format!(
        "Draft: name=\"{}\" number=\"{}\"",
        state.draft_name(),
        state.draft_number()
    )
}

pub fn help_text() -> &'static str {
    "Commands:\n\
     \x20 list | ls             print the visible contact list\n\
     \x20 filter [text]         set or clear the name filter\n\
     \x20 name <text>           set the draft name\n\
     \x20 number <text>         set the draft number\n\
     \x20 add <name> <number>   set both draft fields and submit\n\
     \x20 submit                submit the current draft\n\
     \x20 delete <name>         delete the visible contact with that exact name\n\
     \x20 y | n                 answer a pending overwrite confirmation\n\
     \x20 reload                re-fetch the phonebook from the server\n\
     \x20 help                  show this help\n\
     \x20 quit | exit           leave"
}
