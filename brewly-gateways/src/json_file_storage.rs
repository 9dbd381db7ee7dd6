use brewly_core::gateways::storage::{KeyValueStore, StorageError};
use jfs::Store;
use std::{io, path::Path};

/// Local storage that keeps every item in a JSON file
/// named after its key.
pub struct JsonFileStorage {
    json_store: Store,
}

impl JsonFileStorage {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }
    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

fn not_found_as_none<T>(res: io::Result<T>) -> io::Result<Option<T>> {
    match res {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

impl KeyValueStore for JsonFileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let item = not_found_as_none(self.json_store.get::<String>(key))?;
        Ok(item)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.json_store
            .save_with_id(&value.to_owned(), key)
            .inspect_err(|err| log::warn!("Unable to save item '{key}' in JSON file: {err}"))?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        if not_found_as_none(self.json_store.delete(key))?.is_none() {
            log::debug!("No item '{key}' to remove");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewly_core::{entities::*, saved::*};
    use std::{env, fs, path::PathBuf};

    struct TempDir(PathBuf);

    impl TempDir {
        fn new() -> Self {
            let path = env::temp_dir().join(format!("brewly-storage-{}", Id::new()));
            fs::create_dir_all(&path).unwrap();
            Self(path)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn set_get_and_remove_items() {
        let dir = TempDir::new();
        let storage = JsonFileStorage::try_new(&dir.0).unwrap();
        assert_eq!(dir.0.as_path(), storage.path());
        assert_eq!(None, storage.get_item("k").unwrap());
        storage.set_item("k", r#"[{"id":"a"}]"#).unwrap();
        storage.set_item("k", "[]").unwrap();
        assert_eq!(Some("[]".to_owned()), storage.get_item("k").unwrap());
        storage.remove_item("k").unwrap();
        assert_eq!(None, storage.get_item("k").unwrap());
        storage.remove_item("k").unwrap();
    }

    #[test]
    fn keep_saved_cafes_across_instances() {
        let dir = TempDir::new();
        let review = Review {
            id: "abc123".into(),
            cafe_id: None,
            cafe_name: "Kaffeine Fitzrovia".into(),
            address: "Foley St".into(),
            noise: NoiseLevel::Quiet,
            wifi: true,
            outlets: true,
            laptop_friendly: true,
            rush_hours: RushHours::Morning,
            ambience: Ambience::Cozy,
            overall: RatingValue::clamped(4),
            notes: "Flat white on point".into(),
            image_url: None,
            created_at: Timestamp::from_millis(1_000),
        };
        {
            let saved = SavedCafes::new(JsonFileStorage::try_new(&dir.0).unwrap());
            assert_eq!(Toggled::Added, saved.toggle(&review).unwrap());
        }
        let saved = SavedCafes::new(JsonFileStorage::try_new(&dir.0).unwrap());
        assert!(saved.is_saved("abc123"));
        let cafes = saved.load();
        assert_eq!(1, cafes.len());
        assert_eq!("Kaffeine Fitzrovia", cafes[0].cafe_name);
        assert!(saved.export().unwrap().unwrap().contains("\"abc123\""));
    }
}
