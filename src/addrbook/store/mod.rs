//! # Storage Layer
//!
//! The address book lives in memory; a [`BookStore`] is only consulted by the
//! explicit `save` and `load` operations. The store is chosen when the
//! [`AddressBook`](crate::api::AddressBook) is built, which keeps the on-disk
//! format a piece of configuration instead of global state.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production store, one pretty-printed JSON array per file.
//! - [`memory::InMemoryStore`]: keeps "files" in a map, for tests.
//!
//! ## File Format
//!
//! ```json
//! [
//!   {
//!     "name": "Ann Lee",
//!     "phones": ["555-1234", "555-9876"],
//!     "birthday": "1990-04-12",
//!     "email": "ann@example.com",
//!     "status": "friend",
//!     "note": ""
//!   }
//! ]
//! ```
//!
//! Contacts are written in collection order and read back in the same order.
//! A missing `birthday` is written as `null`.

use crate::error::Result;
use crate::model::Contact;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for persisting a whole contact collection.
pub trait BookStore {
    /// Write every contact to `path`, replacing whatever was there.
    fn save(&mut self, path: &Path, contacts: &[Contact]) -> Result<()>;

    /// Read the collection stored at `path`.
    ///
    /// Returns `Ok(None)` when nothing is stored there, and `Err` for I/O
    /// failures or unreadable content.
    fn load(&self, path: &Path) -> Result<Option<Vec<Contact>>>;
}
