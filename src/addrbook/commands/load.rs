use crate::activity::Action;
use crate::commands::{CmdMessage, CmdResult, MSG_FILE_NOT_FOUND};
use crate::error::Result;
use crate::model::Contact;
use crate::store::BookStore;
use std::path::Path;

/// Replaces `contacts` with the collection stored at `path`.
///
/// A missing file leaves `contacts` untouched and is reported, not raised.
pub fn run<S: BookStore>(store: &S, path: &Path, contacts: &mut Vec<Contact>) -> Result<CmdResult> {
    let Some(loaded) = store.load(path)? else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(MSG_FILE_NOT_FOUND)));
    };

    *contacts = loaded;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Loaded {} contacts.",
            contacts.len()
        )))
        .with_action(Action::LoadedAddressBook))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{sample_contacts, StoreFixture};

    #[test]
    fn test_replaces_instead_of_merging() {
        let fixture = StoreFixture::new().with_book("book.json", sample_contacts());
        let mut contacts = vec![Contact::new("Unsaved")];

        let result = run(&fixture.store, Path::new("book.json"), &mut contacts).unwrap();

        assert_eq!(contacts, sample_contacts());
        assert_eq!(result.action, Some(Action::LoadedAddressBook));
        assert_eq!(result.message_texts(), vec!["Loaded 3 contacts."]);
    }

    #[test]
    fn test_missing_file_is_a_no_op() {
        let fixture = StoreFixture::new();
        let mut contacts = Vec::new();

        let result = run(&fixture.store, Path::new("missing.json"), &mut contacts).unwrap();

        assert!(contacts.is_empty());
        assert_eq!(result.action, None);
        assert_eq!(result.message_texts(), vec![MSG_FILE_NOT_FOUND]);
    }
}
