// ABOUTME: Error types re-exported from pulse-core for crate-local paths
// ABOUTME: AppError, ErrorCode and AppResult are shared with the CLI and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

//! # Error Handling
//!
//! Infrastructure failures (store I/O, configuration parsing) surface as
//! [`AppError`]. Precondition violations in the controllers and the
//! progression engine are not errors; they come back as `false`, `None` or an
//! [`crate::progression::AwardOutcome`].

pub use pulse_core::errors::{AppError, AppResult, ErrorCode};
