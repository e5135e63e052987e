use super::BookStore;
use crate::error::{AddressBookError, Result};
use crate::model::Contact;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores each address book as a JSON array.
#[derive(Debug, Default, Clone)]
pub struct JsonFileStore;

impl JsonFileStore {
    pub fn new() -> Self {
        Self
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AddressBookError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self, path: &Path) -> PathBuf {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "addressbook".to_string());
        path.with_file_name(format!(".{}-{}.tmp", name, std::process::id()))
    }
}

impl BookStore for JsonFileStore {
    fn save(&mut self, path: &Path, contacts: &[Contact]) -> Result<()> {
        self.ensure_parent(path)?;
        let content =
            serde_json::to_string_pretty(contacts).map_err(AddressBookError::Serialization)?;

        // Atomic write: a crash mid-save leaves the previous file intact
        let tmp_path = self.tmp_path(path);
        if let Err(e) = fs::write(&tmp_path, content).and_then(|_| fs::rename(&tmp_path, path)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(AddressBookError::Io(e));
        }

        log::info!("saved {} contacts to {}", contacts.len(), path.display());
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Option<Vec<Contact>>> {
        if !path.exists() {
            log::debug!("no address book at {}", path.display());
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(AddressBookError::Io)?;
        let contacts: Vec<Contact> =
            serde_json::from_str(&content).map_err(AddressBookError::Serialization)?;
        log::info!("loaded {} contacts from {}", contacts.len(), path.display());
        Ok(Some(contacts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new();
        assert!(store.load(&dir.path().join("nope.json")).unwrap().is_none());
    }

    #[test]
    fn test_save_creates_parent_dirs_and_leaves_no_tmp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books").join("family.json");
        let mut store = JsonFileStore::new();

        store.save(&path, &[Contact::new("Ann")]).unwrap();
        assert!(path.exists());

        for entry in fs::read_dir(path.parent().unwrap()).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn test_failed_save_removes_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), "x").unwrap();

        let err = JsonFileStore::new()
            .save(&path, &[Contact::new("Ann")])
            .unwrap_err();
        assert!(matches!(err, AddressBookError::Io(_)));

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["book.json".to_string()]);
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        let mut store = JsonFileStore::new();

        store
            .save(&path, &[Contact::new("Ann"), Contact::new("Bob")])
            .unwrap();
        store.save(&path, &[Contact::new("Cid")]).unwrap();

        let loaded = store.load(&path).unwrap().unwrap();
        assert_eq!(loaded, vec![Contact::new("Cid")]);
    }

    #[test]
    fn test_load_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new().load(&path).unwrap_err();
        assert!(matches!(err, AddressBookError::Serialization(_)));
    }

    #[test]
    fn test_reads_records_with_missing_optional_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, r#"[{"name": "Ann", "birthday": "1990-04-12"}]"#).unwrap();

        let loaded = JsonFileStore::new().load(&path).unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].birthday, NaiveDate::from_ymd_opt(1990, 4, 12));
        assert!(loaded[0].phones.is_empty());
        assert_eq!(loaded[0].email, "");
    }
}
