// ABOUTME: Configuration module for environment-driven application settings
// ABOUTME: Re-exports the top-level AppConfig and the tap game tuning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

/// Environment configuration (storage, session timing)
pub mod environment;

/// Tap game tuning
pub mod game;

pub use environment::{AppConfig, SessionConfig, StorageBackend};
pub use game::TapGameConfig;
