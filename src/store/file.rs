// ABOUTME: Directory-backed KeyValueStore writing one JSON file per key
// ABOUTME: Writes go through a temp file and rename so a collection is never half-written
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

use pulse_core::errors::{AppError, AppResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::KeyValueStore;

/// Blob store rooted at a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `root`
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            AppError::storage(format!("Cannot create data directory {}", root.display()))
                .with_source(e)
        })?;
        debug!(root = %root.display(), "File store opened");
        Ok(Self { root })
    }

    /// Directory holding the collection files
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(AppError::invalid_input(format!("Invalid store key '{key}'")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("Cannot read {}", path.display())).with_source(e)),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> AppResult<()> {
        let path = self.path_for(key)?;
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value).map_err(|e| {
            AppError::storage(format!("Cannot write {}", staging.display())).with_source(e)
        })?;
        fs::rename(&staging, &path).map_err(|e| {
            AppError::storage(format!("Cannot replace {}", path.display())).with_source(e)
        })?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
