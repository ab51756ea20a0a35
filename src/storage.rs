//! Durable storage for the animal collection.
//!
//! The document is a single JSON object with one key, `animals`, holding the
//! full ordered collection. Every save rewrites the whole document; there is
//! no incremental persistence.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::animal::Animal;
use crate::error::StoreError;

/// Backing store the [`AnimalStore`](crate::AnimalStore) loads from and
/// saves to.
pub trait Storage: Send + Sync {
    /// Read the full collection.
    fn load(&self) -> Result<Vec<Animal>, StoreError>;

    /// Replace the stored collection with `animals`.
    fn save(&self, animals: &[Animal]) -> Result<(), StoreError>;
}

#[derive(Deserialize)]
struct Envelope {
    animals: Vec<Animal>,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    animals: &'a [Animal],
}

/// Encode `animals` as the durable document (two-space indentation).
pub fn encode_document(animals: &[Animal]) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(&EnvelopeRef { animals })?)
}

/// JSON document on the local filesystem.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Animal>, StoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        let envelope: Envelope =
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(
            path = %self.path.display(),
            count = envelope.animals.len(),
            "loaded animal document"
        );
        Ok(envelope.animals)
    }

    /// Writes to a sibling temporary file and renames it over the target.
    fn save(&self, animals: &[Animal]) -> Result<(), StoreError> {
        let json = encode_document(animals)?;
        let tmp_path = self.path.with_extension("tmp");
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        fs::write(&tmp_path, json).map_err(write_err)?;
        fs::rename(&tmp_path, &self.path).map_err(|source| {
            let _ = fs::remove_file(&tmp_path);
            write_err(source)
        })?;

        tracing::debug!(
            path = %self.path.display(),
            count = animals.len(),
            "rewrote animal document"
        );
        Ok(())
    }
}

/// In-process storage, used by tests and embedders that need no file.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    animals: Mutex<Vec<Animal>>,
}

impl MemoryStorage {
    pub fn new(animals: Vec<Animal>) -> Self {
        Self {
            animals: Mutex::new(animals),
        }
    }

    /// What the last save left behind.
    pub fn snapshot(&self) -> Result<Vec<Animal>, StoreError> {
        self.animals
            .lock()
            .map(|a| a.clone())
            .map_err(|_| StoreError::Poisoned)
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Vec<Animal>, StoreError> {
        self.snapshot()
    }

    fn save(&self, animals: &[Animal]) -> Result<(), StoreError> {
        let mut guard = self.animals.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = animals.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::NewAnimal;

    fn lion() -> Animal {
        NewAnimal::new("Lion", "lion", "carnivore", vec!["fierce".into(), "proud".into()])
            .with_id("0".into())
    }

    #[test]
    fn file_storage_round_trips_document() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("animals.json"));

        storage.save(&[lion()]).unwrap();
        assert_eq!(storage.load().unwrap(), vec![lion()]);
        assert!(!dir.path().join("animals.tmp").exists());
    }

    #[test]
    fn document_uses_animals_envelope_with_two_space_indent() {
        let json = encode_document(&[lion()]).unwrap();
        assert!(json.starts_with("{\n  \"animals\": [\n    {"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["animals"][0]["personalityTraits"][1], "proud");
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("absent.json"));
        assert!(matches!(storage.load(), Err(StoreError::Read { .. })));
    }

    #[test]
    fn malformed_document_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animals.json");
        fs::write(&path, r#"[{"id": "0"}]"#).unwrap();
        let storage = JsonFileStorage::new(path);
        assert!(matches!(storage.load(), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn record_without_traits_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animals.json");
        fs::write(
            &path,
            r#"{"animals": [{"id": "0", "name": "Lion", "species": "lion", "diet": "carnivore"}]}"#,
        )
        .unwrap();
        let storage = JsonFileStorage::new(path);
        assert!(matches!(storage.load(), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn save_into_missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nope").join("animals.json"));
        assert!(matches!(storage.save(&[lion()]), Err(StoreError::Write { .. })));
    }

    #[test]
    fn memory_storage_keeps_last_save() {
        let storage = MemoryStorage::default();
        assert!(storage.load().unwrap().is_empty());
        storage.save(&[lion()]).unwrap();
        assert_eq!(storage.snapshot().unwrap(), vec![lion()]);
    }
}
