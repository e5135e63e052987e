//! # API Facade
//!
//! [`AddressBook`] is the single entry point for every operation, whatever the UI.
//! It owns the in-memory collection, the [`BookStore`] used by save/load, the
//! [`ActivityLog`], and the [`Ui`] port results are reported through.
//!
//! ## Commit Discipline
//!
//! Mutating operations run their command against a staged copy of the
//! collection. If the command reports an [`Action`](crate::activity::Action),
//! the log entry is appended first and the staged copy is committed only once
//! that succeeded. A validation error, a failed log write or a store error
//! therefore leaves the committed collection exactly as it was.
//!
//! ## Generic Over Collaborators
//!
//! - Production: `AddressBook<JsonFileStore, FileActivityLog, ConsoleUi>`
//! - Testing: `AddressBook<InMemoryStore, MemoryActivityLog, RecordingUi>`

use crate::activity::{ActivityLog, LogEntry};
use crate::calendar::BirthdayMatch;
use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::{Contact, ContactField, FieldEdit, SearchField};
use crate::store::BookStore;
use crate::ui::Ui;
use chrono::{Local, NaiveDate};
use std::path::Path;

pub struct AddressBook<S: BookStore, L: ActivityLog, U: Ui> {
    contacts: Vec<Contact>,
    store: S,
    log: L,
    ui: U,
    birthday_match: BirthdayMatch,
}

impl<S: BookStore, L: ActivityLog, U: Ui> AddressBook<S, L, U> {
    pub fn new(store: S, log: L, ui: U) -> Self {
        Self {
            contacts: Vec::new(),
            store,
            log,
            ui,
            birthday_match: BirthdayMatch::default(),
        }
    }

    pub fn with_birthday_match(mut self, mode: BirthdayMatch) -> Self {
        self.birthday_match = mode;
        self
    }

    /// Seed the collection without logging, e.g. from a file read at startup.
    pub fn with_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn add(&mut self, contact: Contact) -> Result<()> {
        let mut staged = self.contacts.clone();
        let result = commands::add::run(&mut staged, contact)?;
        self.commit(staged, result)
    }

    pub fn search(&mut self, pattern: &str, field: SearchField) -> Result<()> {
        let result = commands::search::run(&self.contacts, pattern, field)?;
        self.report(result);
        Ok(())
    }

    /// Parses `raw` for `field`, then edits the first contact named `name`.
    pub fn edit(&mut self, name: &str, field: ContactField, raw: &str) -> Result<()> {
        let edit = FieldEdit::parse(field, raw)?;
        self.edit_field(name, edit)
    }

    pub fn edit_field(&mut self, name: &str, edit: FieldEdit) -> Result<()> {
        let mut staged = self.contacts.clone();
        let result = commands::edit::run(&mut staged, name, edit)?;
        self.commit(staged, result)
    }

    pub fn remove(&mut self, pattern: &str) -> Result<()> {
        let mut staged = self.contacts.clone();
        let result = commands::remove::run(&mut staged, pattern)?;
        self.commit(staged, result)
    }

    pub fn list(&mut self) -> Result<()> {
        let result = commands::list::run(&self.contacts)?;
        self.report(result);
        Ok(())
    }

    /// Birthdays in the current week, by the local clock.
    pub fn congratulate(&mut self) -> Result<()> {
        self.congratulate_on(Local::now().date_naive())
    }

    pub fn congratulate_on(&mut self, today: NaiveDate) -> Result<()> {
        let result = commands::congratulate::run(&self.contacts, today, self.birthday_match)?;
        self.report(result);
        Ok(())
    }

    pub fn save(&mut self, path: &Path) -> Result<()> {
        let result = commands::save::run(&mut self.store, path, &self.contacts)?;
        self.record(&result)?;
        self.report(result);
        Ok(())
    }

    /// Replaces the whole collection with the one stored at `path`.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let mut staged = Vec::new();
        let result = commands::load::run(&self.store, path, &mut staged)?;
        self.commit(staged, result)
    }

    pub fn history(&mut self, limit: Option<usize>) -> Result<()> {
        let result = commands::history::run(&self.log, limit)?;
        self.report(result);
        Ok(())
    }

    fn record(&mut self, result: &CmdResult) -> Result<()> {
        if let Some(action) = result.action {
            self.log.append(&LogEntry::now(action))?;
        }
        Ok(())
    }

    fn commit(&mut self, staged: Vec<Contact>, result: CmdResult) -> Result<()> {
        self.record(&result)?;
        if result.action.is_some() {
            self.contacts = staged;
        }
        self.report(result);
        Ok(())
    }

    fn report(&mut self, result: CmdResult) {
        if !result.listed_contacts.is_empty() {
            self.ui.display_contacts(&result.listed_contacts);
        }
        for message in &result.messages {
            self.ui.display_message(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{Action, MemoryActivityLog};
    use crate::commands::{MSG_CONTACT_NOT_FOUND, MSG_FILE_NOT_FOUND, MSG_NO_CONTACTS_FOUND};
    use crate::error::AddressBookError;
    use crate::store::memory::fixtures::{date, sample_contacts};
    use crate::store::memory::InMemoryStore;
    use crate::ui::fixtures::RecordingUi;

    type TestBook = AddressBook<InMemoryStore, MemoryActivityLog, RecordingUi>;

    fn book() -> TestBook {
        AddressBook::new(
            InMemoryStore::new(),
            MemoryActivityLog::new(),
            RecordingUi::new(),
        )
    }

    fn sample_book() -> TestBook {
        let mut book = book();
        for contact in sample_contacts() {
            book.add(contact).unwrap();
        }
        book.ui_mut().clear();
        book
    }

    #[test]
    fn test_add_logs_and_reports() {
        let mut book = book();
        book.add(Contact::new("Ann")).unwrap();

        assert_eq!(book.len(), 1);
        assert_eq!(book.log().actions(), vec![Action::AddedContact]);
        assert_eq!(book.ui().last_message().unwrap(), "Contact added: Ann");
    }

    #[test]
    fn test_search_renders_matches_without_logging() {
        let mut book = sample_book();
        book.search("alice", SearchField::Name).unwrap();
        assert_eq!(book.ui().listed_names(), vec![vec!["Alice Smith".to_string()]]);

        book.search("xyz", SearchField::Name).unwrap();
        assert_eq!(book.ui().last_message().unwrap(), MSG_NO_CONTACTS_FOUND);

        assert_eq!(book.log().actions().len(), 3);
    }

    #[test]
    fn test_edit_validates_before_touching_anything() {
        let mut book = sample_book();
        let err = book
            .edit("Alice Smith", ContactField::Birthday, "31/12/1990")
            .unwrap_err();

        assert!(matches!(err, AddressBookError::InvalidDate(_)));
        assert_eq!(book.contacts(), sample_contacts().as_slice());
        assert_eq!(book.log().actions().len(), 3);
    }

    #[test]
    fn test_edit_first_exact_match() {
        let mut book = sample_book();
        book.edit("BOB", ContactField::Email, "new@x.com").unwrap();

        assert_eq!(book.contacts()[1].email, "new@x.com");
        assert_eq!(book.contacts()[2].email, "other.bob@example.com");
        assert_eq!(book.log().actions().last(), Some(&Action::EditedContact));
    }

    #[test]
    fn test_edit_missing_contact_is_not_logged() {
        let mut book = sample_book();
        book.edit("Nobody", ContactField::Note, "x").unwrap();
        assert_eq!(book.ui().last_message().unwrap(), MSG_CONTACT_NOT_FOUND);
        assert_eq!(book.log().actions().len(), 3);
    }

    #[test]
    fn test_remove_first_substring_match() {
        let mut book = book();
        book.add(Contact::new("Ann")).unwrap();
        book.add(Contact::new("Anna")).unwrap();

        book.remove("ann").unwrap();

        assert_eq!(book.contacts(), &[Contact::new("Anna")]);
        assert_eq!(book.ui().last_message().unwrap(), "Contact removed.");
        assert_eq!(book.log().actions().last(), Some(&Action::RemovedContact));
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut book = sample_book();
        let path = Path::new("book.json");
        book.save(path).unwrap();

        book.add(Contact::new("Unsaved")).unwrap();
        book.load(path).unwrap();

        assert_eq!(book.contacts(), sample_contacts().as_slice());
        let actions = book.log().actions();
        assert_eq!(
            &actions[actions.len() - 3..],
            &[
                Action::SavedAddressBook,
                Action::AddedContact,
                Action::LoadedAddressBook
            ]
        );
    }

    #[test]
    fn test_load_missing_file_keeps_collection() {
        let mut book = book();
        book.load(Path::new("missing.json")).unwrap();

        assert!(book.is_empty());
        assert_eq!(book.ui().last_message().unwrap(), MSG_FILE_NOT_FOUND);
        assert!(book.log().actions().is_empty());
    }

    #[test]
    fn test_failed_log_write_leaves_collection_untouched() {
        let mut book = AddressBook::new(
            InMemoryStore::new(),
            MemoryActivityLog::failing(),
            RecordingUi::new(),
        )
        .with_contacts(sample_contacts());

        assert!(book.add(Contact::new("Zoe")).is_err());
        assert!(book.remove("alice").is_err());
        assert!(book.edit("bob", ContactField::Note, "x").is_err());

        assert_eq!(book.contacts(), sample_contacts().as_slice());
        assert!(book.ui().messages().is_empty());
    }

    #[test]
    fn test_failed_save_is_propagated() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let mut book = AddressBook::new(store, MemoryActivityLog::new(), RecordingUi::new())
            .with_contacts(sample_contacts());

        let err = book.save(Path::new("book.json")).unwrap_err();
        assert!(matches!(err, AddressBookError::Io(_)));
        assert!(book.log().actions().is_empty());
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn test_congratulate_uses_configured_mode() {
        // week of 2024-03-18 .. 2024-03-24
        let contacts = vec![
            Contact::new("Old friend").with_birthday(Some(date(1990, 3, 18))),
            Contact::new("Newborn").with_birthday(Some(date(2024, 3, 19))),
        ];

        let mut book = book().with_contacts(contacts.clone());
        book.congratulate_on(date(2024, 3, 20)).unwrap();
        assert_eq!(book.ui().listings(), vec![contacts.clone()]);

        let mut exact = self::book()
            .with_contacts(contacts)
            .with_birthday_match(BirthdayMatch::Exact);
        exact.congratulate_on(date(2024, 3, 20)).unwrap();
        assert_eq!(exact.ui().listed_names(), vec![vec!["Newborn".to_string()]]);
        assert!(exact.log().actions().is_empty());
    }

    #[test]
    fn test_history_reads_the_log() {
        let mut book = sample_book();
        book.history(Some(1)).unwrap();
        let last = book.ui().last_message().unwrap();
        assert!(last.ends_with(" - Added contact"), "{}", last);
    }
}
