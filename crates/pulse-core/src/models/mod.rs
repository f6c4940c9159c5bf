// ABOUTME: Core data models and types for Sports Pulse
// ABOUTME: Re-exports activity, challenge and game models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

//! # Data Models
//!
//! - `ActivityRecord`: a finished workout in the permanent history
//! - `WorkoutSession`: the in-progress workout owned by the session controller
//! - `Challenge`: a time-boxed goal whose progress is derived from history
//! - `SpawnedIcon`: a tap game entity with a limited lifespan

mod activity;
mod challenge;
mod game;

pub use activity::{
    ActivityKind, ActivityRecord, ActivityRecordBuilder, DifficultyLevel, Exercise,
    WorkoutSession, WorkoutTemplate,
};
pub use challenge::{
    Badge, BadgeRarity, Challenge, ChallengeBuilder, ChallengeKind, ChallengeReward,
};
pub use game::{GameState, IconKind, Position, SpawnedIcon};
