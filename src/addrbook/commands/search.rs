use crate::commands::{CmdMessage, CmdResult, MSG_NO_CONTACTS_FOUND};
use crate::error::Result;
use crate::model::{Contact, SearchField};

/// Every contact whose `field` contains `pattern`, ignoring case, in collection order.
pub fn run(contacts: &[Contact], pattern: &str, field: SearchField) -> Result<CmdResult> {
    let pattern = pattern.to_lowercase();
    let matches: Vec<Contact> = contacts
        .iter()
        .filter(|contact| field.value(contact).to_lowercase().contains(&pattern))
        .cloned()
        .collect();

    if matches.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(MSG_NO_CONTACTS_FOUND)));
    }
    Ok(CmdResult::default().with_listed_contacts(matches))
}
