use crate::calendar::BirthdayMatch;
use crate::error::{AddressBookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BOOK_FILE: &str = "addressbook.json";
const DEFAULT_LOG_FILE: &str = "log.txt";

/// Keys accepted by [`AddressBookConfig::get`] and [`AddressBookConfig::set`].
pub const CONFIG_KEYS: [&str; 3] = ["book-file", "log-file", "birthday-match"];

/// Configuration for addrbook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressBookConfig {
    /// Address book file used by one-shot commands and as the shell's default
    #[serde(default = "default_book_file")]
    pub book_file: PathBuf,

    /// Activity log file
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// How birthdays are matched against the current week
    #[serde(default)]
    pub birthday_match: BirthdayMatch,
}

fn default_book_file() -> PathBuf {
    PathBuf::from(DEFAULT_BOOK_FILE)
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl Default for AddressBookConfig {
    fn default() -> Self {
        Self {
            book_file: default_book_file(),
            log_file: default_log_file(),
            birthday_match: BirthdayMatch::default(),
        }
    }
}

impl AddressBookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AddressBookError::Io)?;
        let config: AddressBookConfig =
            serde_json::from_str(&content).map_err(AddressBookError::Serialization)?;
        log::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AddressBookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AddressBookError::Serialization)?;
        fs::write(config_path, content).map_err(AddressBookError::Io)?;
        Ok(())
    }

    /// Book file, resolved against `data_dir` when relative.
    pub fn book_path(&self, data_dir: &Path) -> PathBuf {
        resolve(data_dir, &self.book_file)
    }

    /// Log file, resolved against `data_dir` when relative.
    pub fn log_path(&self, data_dir: &Path) -> PathBuf {
        resolve(data_dir, &self.log_file)
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "book-file" => Ok(self.book_file.display().to_string()),
            "log-file" => Ok(self.log_file.display().to_string()),
            "birthday-match" => Ok(self.birthday_match.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "book-file" => self.book_file = non_empty_path(key, value)?,
            "log-file" => self.log_file = non_empty_path(key, value)?,
            "birthday-match" => self.birthday_match = value.parse()?,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

/// Resolves a user supplied file name: absolute paths are kept, relative
/// ones are placed under `base`.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn non_empty_path(key: &str, value: &str) -> Result<PathBuf> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AddressBookError::Config(format!("{} cannot be empty", key)));
    }
    Ok(PathBuf::from(value))
}

fn unknown_key(key: &str) -> AddressBookError {
    AddressBookError::Config(format!(
        "Unknown config key: {} (expected one of {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AddressBookConfig::default();
        assert_eq!(config.book_file, PathBuf::from("addressbook.json"));
        assert_eq!(config.log_file, PathBuf::from("log.txt"));
        assert_eq!(config.birthday_match, BirthdayMatch::Anniversary);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = AddressBookConfig::load(dir.path().join("missing")).unwrap();
        assert_eq!(config, AddressBookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");

        let mut config = AddressBookConfig::default();
        config.set("birthday-match", "exact").unwrap();
        config.set("book-file", "family.json").unwrap();
        config.save(&data_dir).unwrap();

        let loaded = AddressBookConfig::load(&data_dir).unwrap();
        assert_eq!(loaded.birthday_match, BirthdayMatch::Exact);
        assert_eq!(loaded.book_file, PathBuf::from("family.json"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"log_file": "audit.log"}"#).unwrap();

        let config = AddressBookConfig::load(dir.path()).unwrap();
        assert_eq!(config.log_file, PathBuf::from("audit.log"));
        assert_eq!(config.book_file, PathBuf::from("addressbook.json"));
        assert_eq!(config.birthday_match, BirthdayMatch::Anniversary);
    }

    #[test]
    fn test_paths_resolve_against_data_dir() {
        let data_dir = Path::new("/data/addrbook");
        let mut config = AddressBookConfig::default();
        assert_eq!(config.book_path(data_dir), data_dir.join("addressbook.json"));

        config.set("log-file", "/var/log/addrbook.log").unwrap();
        assert_eq!(
            config.log_path(data_dir),
            PathBuf::from("/var/log/addrbook.log")
        );
    }

    #[test]
    fn test_get_and_set_reject_unknown_keys() {
        let mut config = AddressBookConfig::default();
        assert_eq!(config.get("birthday-match").unwrap(), "anniversary");
        assert!(matches!(
            config.get("colour"),
            Err(AddressBookError::Config(_))
        ));
        assert!(config.set("colour", "red").is_err());
        assert!(config.set("book-file", "  ").is_err());
        assert!(config.set("birthday-match", "monthly").is_err());
    }
}
