use crate::activity::Action;
use crate::commands::{CmdMessage, CmdResult, MSG_CONTACT_NOT_FOUND};
use crate::error::Result;
use crate::model::{Contact, FieldEdit};

/// Applies `edit` to the first contact whose name equals `name`, ignoring case.
pub fn run(contacts: &mut [Contact], name: &str, edit: FieldEdit) -> Result<CmdResult> {
    let Some(contact) = contacts.iter_mut().find(|c| c.name_matches(name)) else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(MSG_CONTACT_NOT_FOUND)));
    };

    let field = edit.field();
    edit.apply(contact);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Contact updated ({}): {}",
            field, contact.name
        )))
        .with_action(Action::EditedContact))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactField;
    use crate::store::memory::fixtures::{date, sample_contacts};

    #[test]
    fn test_edits_only_the_first_exact_match() {
        let mut contacts = sample_contacts();
        let edit = FieldEdit::Email("new@x.com".into());

        let result = run(&mut contacts, "BOB", edit).unwrap();

        assert_eq!(result.action, Some(Action::EditedContact));
        assert_eq!(contacts[1].email, "new@x.com");
        assert_eq!(contacts[2].email, "other.bob@example.com");
    }

    #[test]
    fn test_requires_full_name_match() {
        let mut contacts = sample_contacts();
        let result = run(&mut contacts, "alice", FieldEdit::Note("x".into())).unwrap();

        assert_eq!(result.action, None);
        assert_eq!(result.message_texts(), vec![MSG_CONTACT_NOT_FOUND]);
        assert_eq!(contacts, sample_contacts());
    }

    #[test]
    fn test_stores_typed_values() {
        let mut contacts = sample_contacts();
        let birthday = FieldEdit::parse(ContactField::Birthday, "1991-07-04").unwrap();
        run(&mut contacts, "alice smith", birthday).unwrap();
        assert_eq!(contacts[0].birthday, Some(date(1991, 7, 4)));

        let phones = FieldEdit::parse(ContactField::Phones, "1, 2,3").unwrap();
        run(&mut contacts, "Alice Smith", phones).unwrap();
        assert_eq!(contacts[0].phones, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_renaming_changes_future_lookups() {
        let mut contacts = sample_contacts();
        run(&mut contacts, "Bob", FieldEdit::Name("Robert".into())).unwrap();
        assert_eq!(contacts[1].name, "Robert");

        // the second "bob" is now the first match
        run(&mut contacts, "bob", FieldEdit::Status("cousin".into())).unwrap();
        assert_eq!(contacts[2].status, "cousin");
    }
}
