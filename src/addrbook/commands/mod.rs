//! # Command Layer
//!
//! The business logic of the address book. Each operation lives in its own
//! submodule as a plain function over Rust values and returns a [`CmdResult`].
//!
//! Commands never print, never touch the activity log and never commit state:
//! mutating commands work on a staged copy of the collection handed to them by
//! the [`AddressBook`](crate::api::AddressBook) facade, and report the
//! [`Action`] that should be logged. The facade appends the log entry, then
//! commits the staged copy, then forwards the result to the UI.
//!
//! ## Testing Strategy
//!
//! Most tests live here, run against plain vectors and `InMemoryStore`.
//!
//! ## Command Modules
//!
//! - [`add`]: Append a contact
//! - [`search`]: Case-insensitive substring search on one text field
//! - [`edit`]: Replace one field of the first exact-name match
//! - [`remove`]: Remove the first name substring match
//! - [`list`]: Show every contact
//! - [`congratulate`]: Birthdays in the current week
//! - [`save`] / [`load`]: Persistence through a `BookStore`
//! - [`history`]: Read back the activity log

use crate::activity::Action;
use crate::model::Contact;
use serde::Serialize;

pub mod add;
pub mod congratulate;
pub mod edit;
pub mod history;
pub mod list;
pub mod load;
pub mod remove;
pub mod save;
pub mod search;

pub const MSG_NO_CONTACTS_FOUND: &str = "No contacts found.";
pub const MSG_CONTACT_NOT_FOUND: &str = "Contact not found.";
pub const MSG_FILE_NOT_FOUND: &str = "File not found.";
pub const MSG_NO_BIRTHDAYS: &str = "No birthdays this week.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Contacts to render, in collection order.
    pub listed_contacts: Vec<Contact>,
    pub messages: Vec<CmdMessage>,
    /// Set when the command changed something worth an activity log line.
    pub action: Option<Action>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn message_texts(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.content.as_str()).collect()
    }
}
