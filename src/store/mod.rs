// ABOUTME: Keyed blob store abstraction and typed collection channels
// ABOUTME: Loads fall back to defaults on absence or corruption; saves always write the whole collection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

//! # Record Store
//!
//! The core persists five collections, each under its own key (see
//! `pulse_core::constants::channels`). The backend only has to get and set
//! opaque blobs; [`Collection`] adds JSON encoding and the degrade-to-default
//! rules:
//!
//! - a missing or undecodable blob loads as `T::default()` with a warning
//! - a failed save is logged and swallowed by [`Collection::save`]; callers
//!   that want the error use [`Collection::try_save`]

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use pulse_core::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, warn};

/// Keyed get/set blob store
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>>;

    /// Replace the blob stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn set(&self, key: &str, value: &[u8]) -> AppResult<()>;

    /// Backend name for logging
    fn backend_name(&self) -> &'static str;
}

/// Typed channel over one key of a `KeyValueStore`
pub struct Collection<T> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            key: self.key,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("key", &self.key)
            .field("backend", &self.store.backend_name())
            .finish()
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Bind a channel to `key`
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _marker: PhantomData,
        }
    }

    /// Channel key
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Load the collection, defaulting when absent or corrupt
    #[must_use]
    pub fn load(&self) -> T {
        match self.store.get(self.key) {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key = self.key, error = %e, "Discarding undecodable collection");
                    T::default()
                }
            },
            Ok(None) => {
                debug!(key = self.key, "Collection absent, starting empty");
                T::default()
            }
            Err(e) => {
                warn!(key = self.key, error = %e, "Collection read failed, starting empty");
                T::default()
            }
        }
    }

    /// Serialize and write the entire collection
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails
    pub fn try_save(&self, value: &T) -> AppResult<()> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(self.key, &bytes)
    }

    /// Fire-and-forget save; failures lose this save cycle only
    pub fn save(&self, value: &T) {
        if let Err(e) = self.try_save(value) {
            warn!(
                key = self.key,
                backend = self.store.backend_name(),
                error = %e,
                "Collection save failed"
            );
        }
    }
}
