use super::BookStore;
use crate::error::{AddressBookError, Result};
use crate::model::Contact;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    books: HashMap<PathBuf, Vec<Contact>>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `save` fail, for testing error handling.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    pub fn stored(&self, path: &Path) -> Option<&[Contact]> {
        self.books.get(path).map(Vec::as_slice)
    }
}

impl BookStore for InMemoryStore {
    fn save(&mut self, path: &Path, contacts: &[Contact]) -> Result<()> {
        if self.simulate_write_error {
            return Err(AddressBookError::Io(std::io::Error::other(
                "simulated write error",
            )));
        }
        self.books.insert(path.to_path_buf(), contacts.to_vec());
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Option<Vec<Contact>>> {
        Ok(self.books.get(path).cloned())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::NaiveDate;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
    }

    /// A small, varied address book: shared names, blank phones, missing birthdays.
    pub fn sample_contacts() -> Vec<Contact> {
        vec![
            Contact::new("Alice Smith")
                .with_phones(["555-0100", "", "555-0101"])
                .with_birthday(Some(date(1990, 3, 18)))
                .with_email("alice@example.com")
                .with_status("friend")
                .with_note("Met at the climbing gym"),
            Contact::new("Bob")
                .with_phones(["555-0200"])
                .with_email("bob@work.example")
                .with_status("colleague"),
            Contact::new("bob")
                .with_birthday(Some(date(1985, 12, 31)))
                .with_email("other.bob@example.com"),
        ]
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_book(mut self, path: &str, contacts: Vec<Contact>) -> Self {
            self.store.books.insert(PathBuf::from(path), contacts);
            self
        }
    }
}
