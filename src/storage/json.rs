//! JSON file-based storage backend.
//!
//! This module provides the default persistence implementation for favorites:
//! a single human-readable JSON file under the application's data directory.
//! Writes are atomic (write-to-temp + rename) so a crash mid-write can never
//! leave a corrupt record behind.

use crate::domain::error::{GriyakuError, Result};
use crate::infrastructure::paths;
use crate::storage::backend::FavoritesBackend;
use crate::storage::models::FavoritesRecord;
use std::path::{Path, PathBuf};

/// JSON file storage backend for favorites.
///
/// The whole record is rewritten on every save; favorites lists are tiny, so
/// there is nothing to gain from incremental writes.
#[derive(Debug)]
pub struct JsonFavorites {
    /// Path to the JSON file on disk.
    file_path: PathBuf,
}

impl JsonFavorites {
    /// Creates a JSON backend at an explicit file path.
    ///
    /// Parent directories are created automatically. The file itself is not
    /// created until the first save.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directory creation fails.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON favorites storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self { file_path })
    }

    /// Creates a JSON backend at the default per-user location.
    ///
    /// Resolves to `<data dir>/griyaku/favorites.json`, see
    /// [`paths::favorites_file`].
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn at_default_location() -> Result<Self> {
        Self::new(paths::favorites_file())
    }

    /// Returns the file path this backend reads and writes.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl FavoritesBackend for JsonFavorites {
    fn load(&self) -> Result<FavoritesRecord> {
        let _span = tracing::debug_span!("json_load_favorites", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("no persisted favorites, starting empty");
            return Ok(FavoritesRecord::default());
        }

        let contents = std::fs::read_to_string(&self.file_path)?;
        let record: FavoritesRecord = serde_json::from_str(&contents)
            .map_err(|e| GriyakuError::Storage(format!("failed to parse favorites JSON: {e}")))?;

        tracing::debug!(
            version = record.version,
            count = record.favorites.len(),
            "loaded favorites record"
        );
        Ok(record)
    }

    fn save(&mut self, record: &FavoritesRecord) -> Result<()> {
        let _span = tracing::debug_span!(
            "json_save_favorites",
            path = ?self.file_path,
            count = record.favorites.len()
        )
        .entered();

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| GriyakuError::Storage(format!("failed to serialize favorites: {e}")))?;

        // Atomic write: never leave a half-written file at the real path.
        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("favorites record saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFavorites::new(dir.path().join("favorites.json")).unwrap();

        let record = backend.load().unwrap();
        assert_eq!(record, FavoritesRecord::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = JsonFavorites::new(dir.path().join("favorites.json")).unwrap();

        let record = FavoritesRecord::new(vec!["GP1204".to_string(), "GP0042".to_string()]);
        backend.save(&record).unwrap();

        let loaded = backend.load().unwrap();
        assert_eq!(loaded.favorites, vec!["GP1204", "GP0042"]);
        assert!(loaded.updated_at.is_some());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "not json {").unwrap();

        let backend = JsonFavorites::new(path).unwrap();
        let err = backend.load().unwrap_err();
        assert!(matches!(err, GriyakuError::Storage(_)));
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("favorites.json");

        let mut backend = JsonFavorites::new(nested).unwrap();
        backend.save(&FavoritesRecord::default()).unwrap();
        assert!(backend.file_path().exists());
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        let mut backend = JsonFavorites::new(path.clone()).unwrap();

        backend.save(&FavoritesRecord::new(vec!["GP7".to_string()])).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }
}
