use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressBookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unsupported field '{0}'")]
    UnsupportedField(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl AddressBookError {
    /// True for errors caused by bad user input rather than by storage.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AddressBookError::InvalidDate(_)
                | AddressBookError::UnsupportedField(_)
                | AddressBookError::Validation(_)
                | AddressBookError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AddressBookError>;
