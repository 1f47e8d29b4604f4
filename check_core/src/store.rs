//! # Result Store
//!
//! Persistence seam for the single cached snapshot of the most recent
//! check. The engine never touches storage directly: callers inject a
//! [`ResultStore`] implementation (or none).
//!
//! [`JsonFileStore`] keeps the slot in one JSON file with atomic save
//! semantics: write to `.tmp`, sync, rename. There is no schema versioning
//! and absence of the file is not an error; the slot is a best-effort
//! convenience, not durable state.
//!
//! ## Example
//!
//! ```rust,no_run
//! use check_core::store::{JsonFileStore, ResultStore};
//! use std::path::Path;
//!
//! let store = JsonFileStore::new(Path::new("last_check.json"));
//! if let Ok(Some(last)) = store.load() {
//!     println!("Last check: {} -> {}", last.material, last.status);
//! }
//! ```

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::errors::{CheckError, CheckResult};
use crate::evaluate::EvaluationResult;

/// A single-slot store for the most recent check result.
pub trait ResultStore {
    /// Overwrite the slot with this result
    fn save(&self, result: &EvaluationResult) -> CheckResult<()>;

    /// Read the slot; `Ok(None)` when it has never been written
    fn load(&self) -> CheckResult<Option<EvaluationResult>>;
}

/// File-backed slot holding the last result as pretty JSON.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// Path of the slot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl ResultStore for JsonFileStore {
    /// Save with atomic write semantics.
    ///
    /// 1. Serialize to JSON
    /// 2. Write to a temporary file
    /// 3. Sync to disk
    /// 4. Rename over the slot (atomic on most filesystems)
    fn save(&self, result: &EvaluationResult) -> CheckResult<()> {
        let json =
            serde_json::to_string_pretty(result).map_err(|e| CheckError::SerializationError {
                reason: e.to_string(),
            })?;

        let tmp_path = self.tmp_path();

        let mut tmp_file = File::create(&tmp_path).map_err(|e| {
            CheckError::store_error("create temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        tmp_file.write_all(json.as_bytes()).map_err(|e| {
            CheckError::store_error("write temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        tmp_file.sync_all().map_err(|e| {
            CheckError::store_error("sync temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            // Clean up the temp file if rename fails
            let _ = fs::remove_file(&tmp_path);
            CheckError::store_error("rename to slot", self.path.display().to_string(), e.to_string())
        })?;

        Ok(())
    }

    fn load(&self) -> CheckResult<Option<EvaluationResult>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut file = File::open(&self.path).map_err(|e| {
            CheckError::store_error("open", self.path.display().to_string(), e.to_string())
        })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(|e| {
            CheckError::store_error("read", self.path.display().to_string(), e.to_string())
        })?;

        let result: EvaluationResult =
            serde_json::from_str(&contents).map_err(|e| CheckError::SerializationError {
                reason: format!("Invalid JSON in {}: {}", self.path.display(), e),
            })?;

        Ok(Some(result))
    }
}

/// In-memory slot, for headless tests and front ends with their own storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<EvaluationResult>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemoryStore {
    fn save(&self, result: &EvaluationResult) -> CheckResult<()> {
        *self.slot.borrow_mut() = Some(result.clone());
        Ok(())
    }

    fn load(&self) -> CheckResult<Option<EvaluationResult>> {
        Ok(self.slot.borrow().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MaterialCatalog;
    use crate::evaluate::evaluate;
    use crate::limits::{Distribution, SupportType};
    use std::env::temp_dir;

    fn sample_result() -> EvaluationResult {
        let catalog = MaterialCatalog::builtin();
        let gravel = catalog.lookup("Gravel").unwrap();
        evaluate(gravel, 3.0, SupportType::Truck, Distribution::TopHeavy).unwrap()
    }

    fn slot_path(name: &str) -> PathBuf {
        temp_dir().join(format!("loadcheck_test_{}.json", name))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = slot_path("roundtrip");
        let store = JsonFileStore::new(&path);

        let result = sample_result();
        store.save(&result).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, result);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let path = slot_path("atomic");
        let store = JsonFileStore::new(&path);

        store.save(&sample_result()).unwrap();

        assert!(path.exists());
        assert!(!store.tmp_path().exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_slot_is_none() {
        let store = JsonFileStore::new(slot_path("never_written"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_corrupt_slot_is_error_not_panic() {
        let path = slot_path("corrupt");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        let result = store.load();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_overwrites_slot() {
        let path = slot_path("overwrite");
        let store = JsonFileStore::new(&path);

        let first = sample_result();
        store.save(&first).unwrap();

        let catalog = MaterialCatalog::builtin();
        let block = catalog.lookup("Cinder Block").unwrap();
        let second =
            evaluate(block, 2.0, SupportType::Hoist, Distribution::Centered).unwrap();
        store.save(&second).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.material, "Cinder Block");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);

        let result = sample_result();
        store.save(&result).unwrap();
        assert_eq!(store.load().unwrap(), Some(result));
    }
}
