//! # Activity Log
//!
//! Append-only audit trail of the operations that change the address book.
//! Each entry is a single line:
//!
//! ```text
//! 2024-03-18 09:12:44 - Added contact
//! ```
//!
//! Only mutating operations (add, edit, remove, save, load) are recorded; reads
//! never touch the log. The log is written through the [`ActivityLog`] trait so
//! that the API layer can be tested with [`MemoryActivityLog`].

use crate::error::{AddressBookError, Result};
use chrono::{Local, NaiveDateTime, Timelike};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    AddedContact,
    EditedContact,
    RemovedContact,
    SavedAddressBook,
    LoadedAddressBook,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::AddedContact,
        Action::EditedContact,
        Action::RemovedContact,
        Action::SavedAddressBook,
        Action::LoadedAddressBook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::AddedContact => "Added contact",
            Action::EditedContact => "Edited contact",
            Action::RemovedContact => "Removed contact",
            Action::SavedAddressBook => "Saved address book",
            Action::LoadedAddressBook => "Loaded address book",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = AddressBookError;

    fn from_str(s: &str) -> Result<Self> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| AddressBookError::Validation(format!("Unknown action: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub action: Action,
}

impl LogEntry {
    pub fn new(timestamp: NaiveDateTime, action: Action) -> Self {
        Self { timestamp, action }
    }

    /// Entry stamped with the local wall clock, truncated to whole seconds.
    pub fn now(action: Action) -> Self {
        let now = Local::now().naive_local();
        let timestamp = now.with_nanosecond(0).unwrap_or(now);
        Self::new(timestamp, action)
    }

    pub fn parse_line(line: &str) -> Option<Self> {
        let (stamp, action) = line.split_once(" - ")?;
        let timestamp = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()?;
        let action = action.trim_end().parse().ok()?;
        Some(Self::new(timestamp, action))
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.action
        )
    }
}

pub trait ActivityLog {
    /// Append one entry. Failures are propagated, never swallowed.
    fn append(&mut self, entry: &LogEntry) -> Result<()>;

    /// All entries, oldest first.
    fn entries(&self) -> Result<Vec<LogEntry>>;
}

/// Text file log. The file is opened for every access and closed when the
/// handle goes out of scope.
#[derive(Debug, Clone)]
pub struct FileActivityLog {
    path: PathBuf,
}

impl FileActivityLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ActivityLog for FileActivityLog {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", entry)?;
        log::debug!("activity: {} -> {}", entry, self.path.display());
        Ok(())
    }

    fn entries(&self) -> Result<Vec<LogEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let mut entries = Vec::new();
        for (lineno, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match LogEntry::parse_line(line) {
                Some(entry) => entries.push(entry),
                None => log::warn!(
                    "skipping malformed activity line {} in {}",
                    lineno + 1,
                    self.path.display()
                ),
            }
        }
        Ok(entries)
    }
}

/// In-memory log for tests. Can be told to fail every write.
#[derive(Debug, Default)]
pub struct MemoryActivityLog {
    entries: Vec<LogEntry>,
    fail_writes: bool,
}

impl MemoryActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn failing() -> Self {
        Self {
            entries: Vec::new(),
            fail_writes: true,
        }
    }

    pub fn actions(&self) -> Vec<Action> {
        self.entries.iter().map(|entry| entry.action).collect()
    }
}

impl ActivityLog for MemoryActivityLog {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        if self.fail_writes {
            return Err(AddressBookError::Io(std::io::Error::other(
                "activity log is not writable",
            )));
        }
        self.entries.push(entry.clone());
        Ok(())
    }

    fn entries(&self) -> Result<Vec<LogEntry>> {
        Ok(self.entries.clone())
    }
}
