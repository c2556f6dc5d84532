// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed document store adapter.
//!
//! This module provides an adapter that keeps a configuration document in a
//! file on disk, replacing it atomically on save.

use crate::domain::{ConfigError, Result};
use crate::ports::DocumentStore;
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Maximum allowed size for configuration files (10MB)
/// This prevents denial of service via extremely large files
const MAX_DOCUMENT_SIZE: u64 = 10 * 1024 * 1024;

/// Document store adapter for files on disk.
///
/// The backing file does not need to exist: loading a missing file yields
/// `None`, so a fresh installation starts from defaults and the file appears
/// on the first save. Saving writes to a temporary file in the destination
/// directory, syncs it, and renames it over the target, so readers never
/// observe a half-written document. Missing parent directories are created
/// on save.
///
/// # Examples
///
/// ```rust,no_run
/// use config_api::adapters::FileStore;
///
/// // An explicit path
/// let store = FileStore::new("/etc/myapp/config.yaml");
///
/// // The OS-appropriate configuration directory
/// let store = FileStore::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store for `config.yaml` in the OS-appropriate configuration
    /// directory for the application.
    ///
    /// This method uses the `directories` crate to determine the appropriate
    /// configuration directory for the current operating system.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "config.yaml")
    }

    /// Creates a store for a custom file name in the OS-appropriate
    /// configuration directory.
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::StoreError {
                location: filename.to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Ok(Self::new(proj_dirs.config_dir().join(filename)))
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn store_error(
        &self,
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> ConfigError {
        ConfigError::StoreError {
            location: self.path.display().to_string(),
            message: message.into(),
            source,
        }
    }
}

impl DocumentStore for FileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let metadata = fs::metadata(&self.path)
            .map_err(|e| self.store_error("Failed to read file metadata", Some(Box::new(e))))?;

        if metadata.len() > MAX_DOCUMENT_SIZE {
            return Err(self.store_error(
                format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_DOCUMENT_SIZE
                ),
                None,
            ));
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| self.store_error("Failed to read configuration file", Some(Box::new(e))))?;

        Ok(Some(content))
    }

    fn persist(&self, content: &str) -> Result<()> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| self.store_error("Path has no parent directory", None))?;

        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                self.store_error("Failed to create configuration directory", Some(Box::new(e)))
            })?;
        }

        let mut temp = NamedTempFile::new_in(parent)
            .map_err(|e| self.store_error("Failed to create temporary file", Some(Box::new(e))))?;

        temp.write_all(content.as_bytes())
            .map_err(|e| self.store_error("Failed to write configuration", Some(Box::new(e))))?;

        temp.as_file()
            .sync_all()
            .map_err(|e| self.store_error("Failed to sync configuration", Some(Box::new(e))))?;

        temp.persist(&self.path).map_err(|e| {
            self.store_error(
                "Failed to persist configuration file",
                Some(Box::new(e.error)),
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.yaml"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_persist_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("config.yaml"));

        store.persist("key: value\n").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("key: value\n"));
    }

    #[test]
    fn test_persist_replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("config.yaml"));

        store.persist("key: old\n").unwrap();
        store.persist("key: new\n").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("key: new\n"));
    }

    #[test]
    fn test_persist_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("config.yaml"));
        store.persist("key: value\n").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_persist_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested/deeper/config.yaml"));

        store.persist("key: value\n").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("key: value\n"));
    }

    #[test]
    fn test_oversized_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.yaml");
        let file = fs::File::create(&path).unwrap();
        file.set_len(MAX_DOCUMENT_SIZE + 1).unwrap();

        let store = FileStore::new(&path);
        let result = store.load();
        assert!(matches!(result, Err(ConfigError::StoreError { .. })));
    }

    #[test]
    fn test_location_is_path() {
        let store = FileStore::new("/tmp/app/config.yaml");
        assert_eq!(store.location(), "/tmp/app/config.yaml");
        assert_eq!(store.path(), Path::new("/tmp/app/config.yaml"));
    }
}
