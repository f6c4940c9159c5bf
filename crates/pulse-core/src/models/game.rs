// ABOUTME: Tap game models: game state, icon palette, and spawned icon entities
// ABOUTME: Expiry of a spawned icon is derived from its spawn time and lifespan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tap game lifecycle state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// Not playing, waiting for start
    #[default]
    Menu,
    /// Ticks running
    Playing,
    /// Ticks stopped, state kept
    Paused,
    /// Finished; ledger updated
    GameOver,
}

/// Visual kind of a spawned icon
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    /// Dumbbell
    Dumbbell,
    /// Runner
    Runner,
    /// Heart
    Heart,
    /// Flame
    Flame,
    /// Strength figure
    Strength,
    /// Stopwatch
    Timer,
    /// Flexibility figure
    Flexibility,
    /// Sports court
    Court,
}

impl IconKind {
    /// Fixed spawn palette
    pub const PALETTE: [Self; 8] = [
        Self::Dumbbell,
        Self::Runner,
        Self::Heart,
        Self::Flame,
        Self::Strength,
        Self::Timer,
        Self::Flexibility,
        Self::Court,
    ];
}

/// Normalized screen position (0..1 on both axes)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    /// Horizontal
    pub x: f64,
    /// Vertical
    pub y: f64,
}

/// An icon the player has to tap before it expires
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpawnedIcon {
    /// Identity used by taps
    pub id: Uuid,
    /// Normalized position
    pub position: Position,
    /// Visual kind
    pub kind: IconKind,
    /// Size in points
    pub size: f64,
    /// Spawn time
    pub spawned_at: DateTime<Utc>,
    /// Seconds the icon stays tappable
    pub lifespan_seconds: f64,
}

impl SpawnedIcon {
    /// Whether strictly more than the lifespan has elapsed since spawn
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        // Only a span beyond i64 microseconds has no reading
        match (now - self.spawned_at).num_microseconds() {
            Some(micros) => micros as f64 / 1_000_000.0 > self.lifespan_seconds,
            None => true,
        }
    }
}
