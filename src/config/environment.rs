// ABOUTME: Environment configuration for storage, logging, session timing and game tuning
// ABOUTME: Parses PULSE_* environment variables into a validated AppConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

//! Environment-based configuration

use pulse_core::constants::session;
use pulse_core::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::TapGameConfig;
use crate::logging::LoggingConfig;
use crate::store::{FileStore, KeyValueStore, MemoryStore};

/// Which record store backend to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Volatile, lost on exit
    Memory,
    /// One JSON file per collection under the data directory
    #[default]
    File,
}

impl StorageBackend {
    /// Parse from string
    ///
    /// # Errors
    ///
    /// Returns a configuration error for unknown backend names
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "file" | "files" | "json" => Ok(Self::File),
            other => Err(AppError::config_invalid(format!(
                "PULSE_STORAGE must be 'memory' or 'file', got '{other}'"
            ))),
        }
    }
}

/// Workout session timing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Real time per counted second (shortened only for demos)
    pub tick_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(session::TICK_INTERVAL_MS),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Record store backend
    pub storage: StorageBackend,
    /// Directory for the file backend
    pub data_dir: PathBuf,
    /// Logging setup
    pub logging: LoggingConfig,
    /// Tap game tuning
    pub game: TapGameConfig,
    /// Session timing
    pub session: SessionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageBackend::default(),
            data_dir: default_data_dir(),
            logging: LoggingConfig::default(),
            game: TapGameConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set but unparseable, or the
    /// resulting configuration fails validation
    pub fn from_env() -> AppResult<Self> {
        let storage = match env::var("PULSE_STORAGE") {
            Ok(value) => StorageBackend::parse(&value)?,
            Err(_) => StorageBackend::default(),
        };

        let data_dir = env::var("PULSE_DATA_DIR").map_or_else(|_| default_data_dir(), PathBuf::from);

        let session = match env::var("PULSE_SESSION_TICK_MS") {
            Ok(value) => {
                let millis = value.trim().parse::<u64>().map_err(|e| {
                    AppError::config_invalid(format!("PULSE_SESSION_TICK_MS '{value}'"))
                        .with_source(e)
                })?;
                SessionConfig {
                    tick_interval: Duration::from_millis(millis),
                }
            }
            Err(_) => SessionConfig::default(),
        };

        let config = Self {
            storage,
            data_dir,
            logging: LoggingConfig::from_env(),
            game: TapGameConfig::from_env(),
            session,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns the first validation failure
    pub fn validate(&self) -> AppResult<()> {
        if self.session.tick_interval.is_zero() {
            return Err(AppError::config_invalid("session tick interval must be positive"));
        }
        self.game.validate()
    }

    /// Open the configured record store
    ///
    /// # Errors
    ///
    /// Returns an error if the file backend's directory cannot be created
    pub fn open_store(&self) -> AppResult<Arc<dyn KeyValueStore>> {
        let store: Arc<dyn KeyValueStore> = match self.storage {
            StorageBackend::Memory => Arc::new(MemoryStore::new()),
            StorageBackend::File => Arc::new(FileStore::open(&self.data_dir)?),
        };
        info!(backend = store.backend_name(), data_dir = %self.data_dir.display(), "Record store ready");
        Ok(store)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(".sports-pulse"),
        |dir| dir.join("sports-pulse"),
    )
}
