// ABOUTME: Core types and constants for the Sports Pulse fitness tracker
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

#![deny(unsafe_code)]

//! # Pulse Core
//!
//! Foundation crate providing shared types and constants for Sports Pulse.
//! It holds no behavior beyond small derived accessors, so the session,
//! game and progression modules can change without touching it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Game tuning, progression rules, store channel names
//! - **models**: Activity records, templates, challenges, badges and game types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`ActivityRecord`, `Challenge`, `SpawnedIcon`, etc.)
pub mod models;
