use crate::error::{AddressBookError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Input format for birthdays.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
/// Display format for birthdays.
pub const DATE_DISPLAY_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub note: String,
}

impl Contact {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
            email: String::new(),
            status: String::new(),
            note: String::new(),
        }
    }

    pub fn with_phones<I, P>(mut self, phones: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.phones = phones.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_birthday(mut self, birthday: Option<NaiveDate>) -> Self {
        self.birthday = birthday;
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Phones worth showing: blank entries left over from input splitting are skipped.
    pub fn visible_phones(&self) -> impl Iterator<Item = &str> + '_ {
        self.phones
            .iter()
            .map(String::as_str)
            .filter(|phone| !phone.trim().is_empty())
    }

    /// Birthday as `DD/MM/YYYY`, or an empty string when unknown.
    pub fn birthday_display(&self) -> String {
        self.birthday
            .map(|date| date.format(DATE_DISPLAY_FORMAT).to_string())
            .unwrap_or_default()
    }

    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Parses `YYYY-MM-DD`. Blank input means "no birthday".
pub fn parse_birthday(raw: &str) -> Result<Option<NaiveDate>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_INPUT_FORMAT)
        .map(Some)
        .map_err(|_| AddressBookError::InvalidDate(trimmed.to_string()))
}

/// Splits a comma separated phone list. Blank tokens are dropped.
pub fn parse_phones(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|phone| !phone.is_empty())
        .map(String::from)
        .collect()
}

/// Every attribute of a [`Contact`] that can be edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Phones,
    Birthday,
    Email,
    Status,
    Note,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Phones,
        ContactField::Birthday,
        ContactField::Email,
        ContactField::Status,
        ContactField::Note,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Phones => "phones",
            ContactField::Birthday => "birthday",
            ContactField::Email => "email",
            ContactField::Status => "status",
            ContactField::Note => "note",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = AddressBookError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        ContactField::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| AddressBookError::UnsupportedField(s.trim().to_string()))
    }
}

/// The plain-text attributes a search can run against.
///
/// `phones` and `birthday` are structured and are rejected when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchField {
    #[default]
    Name,
    Email,
    Status,
    Note,
}

impl SearchField {
    pub const ALL: [SearchField; 4] = [
        SearchField::Name,
        SearchField::Email,
        SearchField::Status,
        SearchField::Note,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Email => "email",
            SearchField::Status => "status",
            SearchField::Note => "note",
        }
    }

    pub fn value<'a>(&self, contact: &'a Contact) -> &'a str {
        match self {
            SearchField::Name => &contact.name,
            SearchField::Email => &contact.email,
            SearchField::Status => &contact.status,
            SearchField::Note => &contact.note,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = AddressBookError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        SearchField::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| {
                AddressBookError::UnsupportedField(format!(
                    "{} (search supports name, email, status, note)",
                    s.trim()
                ))
            })
    }
}

/// A validated new value for one field of a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    Phones(Vec<String>),
    Birthday(Option<NaiveDate>),
    Email(String),
    Status(String),
    Note(String),
}

impl FieldEdit {
    /// Converts raw user text into the field's type.
    pub fn parse(field: ContactField, raw: &str) -> Result<Self> {
        let edit = match field {
            ContactField::Name => {
                if raw.trim().is_empty() {
                    return Err(AddressBookError::Validation(
                        "Name cannot be empty".to_string(),
                    ));
                }
                FieldEdit::Name(raw.to_string())
            }
            ContactField::Phones => FieldEdit::Phones(parse_phones(raw)),
            ContactField::Birthday => FieldEdit::Birthday(parse_birthday(raw)?),
            ContactField::Email => FieldEdit::Email(raw.to_string()),
            ContactField::Status => FieldEdit::Status(raw.to_string()),
            ContactField::Note => FieldEdit::Note(raw.to_string()),
        };
        Ok(edit)
    }

    pub fn field(&self) -> ContactField {
        match self {
            FieldEdit::Name(_) => ContactField::Name,
            FieldEdit::Phones(_) => ContactField::Phones,
            FieldEdit::Birthday(_) => ContactField::Birthday,
            FieldEdit::Email(_) => ContactField::Email,
            FieldEdit::Status(_) => ContactField::Status,
            FieldEdit::Note(_) => ContactField::Note,
        }
    }

    pub fn apply(self, contact: &mut Contact) {
        match self {
            FieldEdit::Name(name) => contact.name = name,
            FieldEdit::Phones(phones) => contact.phones = phones,
            FieldEdit::Birthday(birthday) => contact.birthday = birthday,
            FieldEdit::Email(email) => contact.email = email,
            FieldEdit::Status(status) => contact.status = status,
            FieldEdit::Note(note) => contact.note = note,
        }
    }
}
