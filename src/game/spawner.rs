// ABOUTME: Random icon factory for the tap game
// ABOUTME: Draws position, visual kind, size and lifespan from an injected random source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

use chrono::{DateTime, Utc};
use pulse_core::models::{IconKind, Position, SpawnedIcon};
use rand::{Rng, RngCore};
use uuid::Uuid;

use crate::config::TapGameConfig;

/// Creates icons with attributes drawn from the configured ranges
pub struct IconSpawner {
    rng: Box<dyn RngCore>,
    lifespan_seconds: (f64, f64),
    icon_size: (f64, f64),
    spawn_x: (f64, f64),
    spawn_y: (f64, f64),
}

impl IconSpawner {
    /// Create a spawner over `config`'s ranges
    #[must_use]
    pub fn new(config: &TapGameConfig, rng: Box<dyn RngCore>) -> Self {
        Self {
            rng,
            lifespan_seconds: config.lifespan_seconds,
            icon_size: config.icon_size,
            spawn_x: config.spawn_x,
            spawn_y: config.spawn_y,
        }
    }

    /// Spawn one icon at `now`
    pub fn spawn(&mut self, now: DateTime<Utc>) -> SpawnedIcon {
        let kind = IconKind::PALETTE[self.rng.gen_range(0..IconKind::PALETTE.len())];
        let position = Position {
            x: self.sample(self.spawn_x),
            y: self.sample(self.spawn_y),
        };
        SpawnedIcon {
            id: Uuid::new_v4(),
            position,
            kind,
            size: self.sample(self.icon_size),
            spawned_at: now,
            lifespan_seconds: self.sample(self.lifespan_seconds),
        }
    }

    fn sample(&mut self, (low, high): (f64, f64)) -> f64 {
        if low >= high {
            low
        } else {
            self.rng.gen_range(low..=high)
        }
    }
}
