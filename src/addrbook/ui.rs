//! # UI Port
//!
//! The library never prints. Every result the address book produces is handed
//! to an implementation of [`Ui`]: the CLI's console renderer in production, a
//! recording double in tests. `get_input` is part of the port so that a command
//! loop can be written against it, but the address book itself never asks the
//! user anything.

use crate::commands::CmdMessage;
use crate::error::Result;
use crate::model::Contact;

pub trait Ui {
    /// Render a listing of contacts.
    fn display_contacts(&mut self, contacts: &[Contact]);

    /// Render a single informational line.
    fn display_message(&mut self, message: &CmdMessage);

    /// Block until the user supplies a line. `Ok(None)` means input is closed.
    fn get_input(&mut self, prompt: &str) -> Result<Option<String>>;
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq)]
    pub enum UiEvent {
        Contacts(Vec<Contact>),
        Message(CmdMessage),
        Prompt(String),
    }

    /// Records everything shown and replays scripted input.
    #[derive(Debug, Default)]
    pub struct RecordingUi {
        pub events: Vec<UiEvent>,
        inputs: VecDeque<String>,
    }

    impl RecordingUi {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_inputs<I, S>(inputs: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                events: Vec::new(),
                inputs: inputs.into_iter().map(Into::into).collect(),
            }
        }

        pub fn messages(&self) -> Vec<String> {
            self.events
                .iter()
                .filter_map(|event| match event {
                    UiEvent::Message(message) => Some(message.content.clone()),
                    _ => None,
                })
                .collect()
        }

        pub fn last_message(&self) -> Option<String> {
            self.messages().pop()
        }

        pub fn listings(&self) -> Vec<Vec<Contact>> {
            self.events
                .iter()
                .filter_map(|event| match event {
                    UiEvent::Contacts(contacts) => Some(contacts.clone()),
                    _ => None,
                })
                .collect()
        }

        pub fn listed_names(&self) -> Vec<Vec<String>> {
            self.listings()
                .into_iter()
                .map(|listing| listing.into_iter().map(|c| c.name).collect())
                .collect()
        }

        pub fn clear(&mut self) {
            self.events.clear();
        }
    }

    impl Ui for RecordingUi {
        fn display_contacts(&mut self, contacts: &[Contact]) {
            self.events.push(UiEvent::Contacts(contacts.to_vec()));
        }

        fn display_message(&mut self, message: &CmdMessage) {
            self.events.push(UiEvent::Message(message.clone()));
        }

        fn get_input(&mut self, prompt: &str) -> Result<Option<String>> {
            self.events.push(UiEvent::Prompt(prompt.to_string()));
            Ok(self.inputs.pop_front())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{RecordingUi, UiEvent};
    use super::*;

    #[test]
    fn test_recording_ui_replays_inputs_then_reports_closed() {
        let mut ui = RecordingUi::with_inputs(["add", "Ann"]);
        assert_eq!(ui.get_input("Enter a command: ").unwrap().as_deref(), Some("add"));
        assert_eq!(ui.get_input("Enter name: ").unwrap().as_deref(), Some("Ann"));
        assert_eq!(ui.get_input("Enter phones: ").unwrap(), None);

        assert_eq!(ui.events[0], UiEvent::Prompt("Enter a command: ".to_string()));
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn test_recording_ui_separates_listings_from_messages() {
        let mut ui = RecordingUi::new();
        ui.display_contacts(&[Contact::new("Ann")]);
        ui.display_message(&CmdMessage::info("Loaded 1 contacts."));

        assert_eq!(ui.listed_names(), vec![vec!["Ann".to_string()]]);
        assert_eq!(ui.last_message().as_deref(), Some("Loaded 1 contacts."));

        ui.clear();
        assert!(ui.events.is_empty());
    }
}
