use crate::activity::Action;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;

/// Appends the contact. No duplicate check: names are not unique.
pub fn run(contacts: &mut Vec<Contact>, contact: Contact) -> Result<CmdResult> {
    let message = CmdMessage::success(format!("Contact added: {}", contact.name));
    contacts.push(contact);
    Ok(CmdResult::default()
        .with_message(message)
        .with_action(Action::AddedContact))
}
