use crate::activity::Action;
use crate::commands::{CmdMessage, CmdResult, MSG_CONTACT_NOT_FOUND};
use crate::error::Result;
use crate::model::Contact;

/// Removes the first contact whose name contains `pattern`, ignoring case.
pub fn run(contacts: &mut Vec<Contact>, pattern: &str) -> Result<CmdResult> {
    let pattern = pattern.to_lowercase();
    let Some(position) = contacts
        .iter()
        .position(|c| c.name.to_lowercase().contains(&pattern))
    else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(MSG_CONTACT_NOT_FOUND)));
    };

    let removed = contacts.remove(position);
    log::debug!("removed contact at position {}: {}", position, removed.name);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Contact removed."))
        .with_action(Action::RemovedContact))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(names: &[&str]) -> Vec<Contact> {
        names.iter().map(|n| Contact::new(*n)).collect()
    }

    #[test]
    fn test_removes_only_the_first_match() {
        let mut contacts = named(&["Ann", "Anna"]);
        let result = run(&mut contacts, "ann").unwrap();

        assert_eq!(contacts, named(&["Anna"]));
        assert_eq!(result.action, Some(Action::RemovedContact));
        assert_eq!(result.message_texts(), vec!["Contact removed."]);
    }

    #[test]
    fn test_matches_substrings() {
        let mut contacts = named(&["Bob", "Joanna Smith", "Ann"]);
        run(&mut contacts, "SMITH").unwrap();
        assert_eq!(contacts, named(&["Bob", "Ann"]));
    }

    #[test]
    fn test_missing_contact_is_a_no_op() {
        let mut contacts = named(&["Bob"]);
        let result = run(&mut contacts, "zed").unwrap();

        assert_eq!(contacts, named(&["Bob"]));
        assert_eq!(result.action, None);
        assert_eq!(result.message_texts(), vec![MSG_CONTACT_NOT_FOUND]);
    }
}
