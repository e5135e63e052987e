use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;

pub fn run(contacts: &[Contact]) -> Result<CmdResult> {
    if contacts.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Address book is empty.")));
    }
    Ok(CmdResult::default().with_listed_contacts(contacts.to_vec()))
}
