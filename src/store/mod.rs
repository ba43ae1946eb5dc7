//! Durable local persistence for accepted submissions.
//!
//! The [`Store`] trait is the second collaborator boundary of the core: one
//! fixed-location blob, read whole and written whole. Loading never fails —
//! an absent or corrupted blob degrades to an empty log — while saving and
//! clearing report typed [`StoreError`]s the caller may absorb or surface.

mod error;

pub use error::StoreError;

use crate::submission::SubmissionLog;
use log::*;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "submissions.json";
const DEFAULT_DIRECTORY_PATH: &str = ".local/share/resume-intake";

/// Append-target for the submission log.
///
/// Read-modify-write is not transactional; concurrent writers can race and
/// lose updates. Last writer wins.
pub trait Store {
    /// Load the full log. Absent or unparsable content yields an empty log.
    fn load(&self) -> SubmissionLog;

    /// Replace the persisted blob with the given log.
    fn save(&mut self, log: &SubmissionLog) -> Result<(), StoreError>;

    /// Remove all persisted submissions.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// In-process store holding the serialized blob in memory.
///
/// Runs the same serde round trip as the file-backed store, which keeps
/// tests honest about the wire format.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    /// Return a new empty instance.
    ///
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    /// Seed the store with a raw blob, parsable or not.
    ///
    pub fn with_blob(blob: impl Into<String>) -> MemoryStore {
        MemoryStore {
            blob: Some(blob.into()),
        }
    }
}

impl Store for MemoryStore {
    fn load(&self) -> SubmissionLog {
        match &self.blob {
            Some(blob) => SubmissionLog::from_json(blob),
            None => SubmissionLog::new(),
        }
    }

    fn save(&mut self, log: &SubmissionLog) -> Result<(), StoreError> {
        let blob = log
            .to_json()
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;
        self.blob = Some(blob);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.blob = None;
        Ok(())
    }
}

/// File-backed store keeping the blob as one JSON file on disk.
///
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Store the blob under the given directory.
    ///
    pub fn new(dir_path: impl AsRef<Path>) -> JsonFileStore {
        JsonFileStore {
            file_path: dir_path.as_ref().join(FILE_NAME),
        }
    }

    /// Store the blob under the default per-user data directory.
    ///
    pub fn default_location() -> Result<JsonFileStore, StoreError> {
        let home = dirs::home_dir().ok_or(StoreError::HomeDirectoryNotFound)?;
        Ok(JsonFileStore::new(home.join(DEFAULT_DIRECTORY_PATH)))
    }

    /// Full path of the persisted blob.
    ///
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> SubmissionLog {
        match fs::read_to_string(&self.file_path) {
            Ok(contents) => SubmissionLog::from_json(&contents),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!(
                        "Could not read submission log at {}: {}",
                        self.file_path.display(),
                        e
                    );
                }
                SubmissionLog::new()
            }
        }
    }

    fn save(&mut self, log: &SubmissionLog) -> Result<(), StoreError> {
        let content = log
            .to_json()
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = self.file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StoreError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(&self.file_path).map_err(|e| StoreError::SaveFailed {
            path: self.file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| StoreError::SaveFailed {
            path: self.file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| StoreError::SaveFailed {
            path: self.file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.file_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::ClearFailed {
                path: self.file_path.clone(),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::SubmissionRecord;
    use fake::{Fake, Faker};

    fn temp_store() -> JsonFileStore {
        let dir = std::env::temp_dir()
            .join("resume-intake-tests")
            .join(uuid::Uuid::new_v4().to_string());
        JsonFileStore::new(dir)
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.load().is_empty());

        let mut log = SubmissionLog::new();
        log.push(Faker.fake::<SubmissionRecord>());
        store.save(&log).unwrap();
        assert_eq!(store.load(), log);

        store.clear().unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_memory_store_corrupted_blob_loads_empty() {
        let store = MemoryStore::with_blob("{{{ not json");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_store_load_missing_file_is_empty() {
        let store = temp_store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_store_round_trip_creates_directories() {
        let mut store = temp_store();
        let mut log = SubmissionLog::new();
        log.push(Faker.fake::<SubmissionRecord>());
        log.push(Faker.fake::<SubmissionRecord>());

        store.save(&log).unwrap();
        assert!(store.file_path().exists());
        assert_eq!(store.load(), log);

        store.clear().unwrap();
        assert!(!store.file_path().exists());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_store_corrupted_file_loads_empty() {
        let mut store = temp_store();
        let mut log = SubmissionLog::new();
        log.push(Faker.fake::<SubmissionRecord>());
        store.save(&log).unwrap();

        fs::write(store.file_path(), "][ corrupted").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_store_clear_is_idempotent() {
        let mut store = temp_store();
        store.clear().unwrap();
        store.clear().unwrap();
    }
}
