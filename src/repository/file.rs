//! File-based repository implementation
//!
//! The whole collection lives in memory behind one reader/writer lock and is
//! written out as a single pretty-printed JSON array on every mutation.

use super::traits::AttributeTypeRepository;
use crate::app_log;
use crate::error::{VaultError, VaultResult};
use crate::logger::LogLevel;
use crate::models::AttributeType;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// File-based attribute type repository
pub struct FileAttributeTypeRepository {
    store_path: PathBuf,
    data: RwLock<HashMap<String, AttributeType>>,
}

impl FileAttributeTypeRepository {
    /// Open the store at `store_path`, creating its directory if needed
    ///
    /// A missing, blank or `null` file starts an empty collection.
    pub fn new(store_path: impl Into<PathBuf>) -> VaultResult<Self> {
        let repo = Self {
            store_path: store_path.into(),
            data: RwLock::new(HashMap::new()),
        };

        repo.ensure_data_dir()?;
        repo.reload()?;

        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        &self.store_path
    }

    /// Re-read the store file, replacing the in-memory collection
    pub fn reload(&self) -> VaultResult<()> {
        let loaded = self.read_store()?;
        let mut data = self.data.write()?;
        *data = loaded;
        app_log!(
            LogLevel::Info,
            "Loaded {} attribute types from {}",
            data.len(),
            self.store_path.display()
        );
        Ok(())
    }

    fn ensure_data_dir(&self) -> VaultResult<()> {
        if let Some(dir) = self.store_path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).map_err(|e| {
                    VaultError::DirectoryCreationFailed(format!("{}: {}", dir.display(), e))
                })?;
            }
        }
        Ok(())
    }

    fn read_store(&self) -> VaultResult<HashMap<String, AttributeType>> {
        if !self.store_path.exists() {
            return Ok(HashMap::new());
        }

        let contents = fs::read_to_string(&self.store_path).map_err(|e| {
            VaultError::StorageLoadFailed(format!(
                "failed to read attribute types file {}: {}",
                self.store_path.display(),
                e
            ))
        })?;

        if contents.trim().is_empty() {
            return Ok(HashMap::new());
        }

        // A literal `null` is an empty collection
        let types: Option<Vec<AttributeType>> = serde_json::from_str(&contents).map_err(|e| {
            VaultError::StorageLoadFailed(format!("failed to unmarshal attribute types: {}", e))
        })?;

        // Duplicate ids: last record wins
        Ok(types
            .unwrap_or_default()
            .into_iter()
            .map(|at| (at.id.clone(), at))
            .collect())
    }

    /// Serialize the full collection to disk; caller holds the write lock
    fn save(&self, data: &HashMap<String, AttributeType>) -> VaultResult<()> {
        let mut types: Vec<&AttributeType> = data.values().collect();
        types.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

        let json = serde_json::to_string_pretty(&types)?;
        fs::write(&self.store_path, json).map_err(|e| {
            app_log!(
                LogLevel::Error,
                "Failed to write attribute types file {}: {}",
                self.store_path.display(),
                e
            );
            VaultError::StorageSaveFailed(format!(
                "failed to write attribute types file {}: {}",
                self.store_path.display(),
                e
            ))
        })
    }
}

impl AttributeTypeRepository for FileAttributeTypeRepository {
    fn create(&self, attribute_type: AttributeType) -> VaultResult<AttributeType> {
        let mut data = self.data.write()?;

        if data.contains_key(&attribute_type.id) {
            return Err(VaultError::AttributeTypeExists(attribute_type.id));
        }

        let id = attribute_type.id.clone();
        data.insert(id.clone(), attribute_type.clone());

        if let Err(e) = self.save(&data) {
            data.remove(&id);
            return Err(e);
        }

        Ok(attribute_type)
    }

    fn get_by_id(&self, id: &str) -> VaultResult<AttributeType> {
        let data = self.data.read()?;
        data.get(id)
            .cloned()
            .ok_or_else(|| VaultError::AttributeTypeNotFound(id.to_string()))
    }

    fn get_by_name(&self, name: &str) -> VaultResult<AttributeType> {
        let data = self.data.read()?;
        data.values()
            .find(|at| at.name == name)
            .cloned()
            .ok_or_else(|| VaultError::AttributeTypeNameNotFound(name.to_string()))
    }

    fn list(&self) -> VaultResult<Vec<AttributeType>> {
        let data = self.data.read()?;
        let mut types: Vec<AttributeType> = data.values().cloned().collect();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(types)
    }

    fn update(&self, attribute_type: AttributeType) -> VaultResult<AttributeType> {
        let mut data = self.data.write()?;

        if !data.contains_key(&attribute_type.id) {
            return Err(VaultError::AttributeTypeNotFound(attribute_type.id));
        }

        data.insert(attribute_type.id.clone(), attribute_type.clone());
        self.save(&data)?;

        Ok(attribute_type)
    }

    fn delete(&self, id: &str) -> VaultResult<()> {
        let mut data = self.data.write()?;

        if data.remove(id).is_none() {
            return Err(VaultError::AttributeTypeNotFound(id.to_string()));
        }

        self.save(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open(dir: &TempDir) -> FileAttributeTypeRepository {
        FileAttributeTypeRepository::new(dir.path().join("attribute_types.json")).unwrap()
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let repo = open(&dir);
        assert_eq!(repo.count_attribute_types().unwrap(), 0);
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b").join("attribute_types.json");
        let repo = FileAttributeTypeRepository::new(&nested).unwrap();
        assert!(nested.parent().unwrap().is_dir());
        assert_eq!(repo.path(), nested.as_path());
    }

    #[test]
    fn test_blank_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("attribute_types.json");
        fs::write(&path, "  \n").unwrap();
        let repo = FileAttributeTypeRepository::new(&path).unwrap();
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_null_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("attribute_types.json");
        fs::write(&path, "null").unwrap();
        let repo = FileAttributeTypeRepository::new(&path).unwrap();
        assert!(repo.list().unwrap().is_empty());

        repo.create(AttributeType::new("1", "digits", r"^\d+$")).unwrap();
        let reopened = FileAttributeTypeRepository::new(&path).unwrap();
        assert_eq!(reopened.count_attribute_types().unwrap(), 1);
    }

    #[test]
    fn test_record_missing_field_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("attribute_types.json");
        fs::write(&path, r#"[{"id":"1","name":"digits"}]"#).unwrap();
        let result = FileAttributeTypeRepository::new(&path);
        assert!(matches!(result, Err(VaultError::StorageLoadFailed(_))));
    }

    #[test]
    fn test_malformed_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("attribute_types.json");
        fs::write(&path, "{not json").unwrap();
        let result = FileAttributeTypeRepository::new(&path);
        assert!(matches!(result, Err(VaultError::StorageLoadFailed(_))));
    }

    #[test]
    fn test_duplicate_ids_last_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("attribute_types.json");
        fs::write(
            &path,
            r#"[{"id":"1","name":"first","pattern":"a"},{"id":"1","name":"second","pattern":"b"}]"#,
        )
        .unwrap();
        let repo = FileAttributeTypeRepository::new(&path).unwrap();
        assert_eq!(repo.get_by_id("1").unwrap().name, "second");
        assert_eq!(repo.count_attribute_types().unwrap(), 1);
    }

    #[test]
    fn test_create_rejects_existing_id() {
        let dir = TempDir::new().unwrap();
        let repo = open(&dir);
        repo.create(AttributeType::new("1", "digits", r"^\d+$")).unwrap();

        let result = repo.create(AttributeType::new("1", "letters", "^[a-z]+$"));
        assert!(matches!(result, Err(VaultError::AttributeTypeExists(id)) if id == "1"));
    }

    #[test]
    fn test_create_writes_whole_collection() {
        let dir = TempDir::new().unwrap();
        let repo = open(&dir);
        repo.create(AttributeType::new("1", "digits", r"^\d+$")).unwrap();
        repo.create(AttributeType::new("2", "letters", "^[a-z]+$")).unwrap();

        let contents = fs::read_to_string(repo.path()).unwrap();
        let stored: Vec<AttributeType> = serde_json::from_str(&contents).unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].name, "digits");
        assert_eq!(stored[1].name, "letters");
    }

    #[test]
    fn test_failed_write_rolls_back_create() {
        let dir = TempDir::new().unwrap();
        let repo = open(&dir);
        // A directory at the store path makes every write fail
        fs::create_dir(repo.path()).unwrap();

        let result = repo.create(AttributeType::new("1", "digits", r"^\d+$"));
        assert!(matches!(result, Err(VaultError::StorageSaveFailed(_))));
        assert!(!repo.has_attribute_type("1").unwrap());
    }

    #[test]
    fn test_failed_write_keeps_update() {
        let dir = TempDir::new().unwrap();
        let repo = open(&dir);
        repo.create(AttributeType::new("1", "digits", r"^\d+$")).unwrap();
        fs::remove_file(repo.path()).unwrap();
        fs::create_dir(repo.path()).unwrap();

        let result = repo.update(AttributeType::new("1", "numbers", r"^\d+$"));
        assert!(result.is_err());
        assert_eq!(repo.get_by_id("1").unwrap().name, "numbers");
    }

    #[test]
    fn test_get_by_name_scans_values() {
        let dir = TempDir::new().unwrap();
        let repo = open(&dir);
        repo.create(AttributeType::new("1", "digits", r"^\d+$")).unwrap();

        assert_eq!(repo.get_by_name("digits").unwrap().id, "1");
        assert!(matches!(
            repo.get_by_name("nope"),
            Err(VaultError::AttributeTypeNameNotFound(_))
        ));
    }

    #[test]
    fn test_update_and_delete_missing_id() {
        let dir = TempDir::new().unwrap();
        let repo = open(&dir);

        assert!(matches!(
            repo.update(AttributeType::new("x", "n", "p")),
            Err(VaultError::AttributeTypeNotFound(_))
        ));
        assert!(matches!(
            repo.delete("x"),
            Err(VaultError::AttributeTypeNotFound(_))
        ));
    }

    #[test]
    fn test_reload_picks_up_external_changes() {
        let dir = TempDir::new().unwrap();
        let repo = open(&dir);
        repo.create(AttributeType::new("1", "digits", r"^\d+$")).unwrap();

        fs::write(repo.path(), "[]").unwrap();
        repo.reload().unwrap();
        assert_eq!(repo.count_attribute_types().unwrap(), 0);
    }
}
