// ABOUTME: Tap game tuning configuration with environment overrides
// ABOUTME: Lives, duration, spawn cadence, difficulty ramp and icon attribute ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

use pulse_core::constants::game;
use pulse_core::errors::{AppError, AppResult};
use std::env;
use std::time::Duration;

/// Tap game tuning
///
/// Time and difficulty are kept in integer tenths and milliseconds so the
/// countdown and the ramp land on exact values.
#[derive(Debug, Clone, PartialEq)]
pub struct TapGameConfig {
    /// Lives at game start
    pub initial_lives: u32,
    /// Game length in tenths of a second; each game tick removes one tenth
    pub duration_tenths: u32,
    /// Game tick interval
    pub game_tick: Duration,
    /// Spawn interval at game start
    pub initial_spawn_interval: Duration,
    /// Spawn interval floor
    pub min_spawn_interval: Duration,
    /// Spawn interval reduction per difficulty step
    pub spawn_interval_step: Duration,
    /// Speed at start, in tenths
    pub initial_speed_tenths: u32,
    /// Speed ceiling, in tenths
    pub max_speed_tenths: u32,
    /// Ramp while whole seconds remaining are a multiple of this
    pub ramp_period_seconds: u32,
    /// Icons allowed on screen at once
    pub max_active_icons: usize,
    /// Score per tap
    pub points_per_tap: u32,
    /// Icon lifespan range in seconds (inclusive)
    pub lifespan_seconds: (f64, f64),
    /// Icon size range in points (inclusive)
    pub icon_size: (f64, f64),
    /// Horizontal spawn band
    pub spawn_x: (f64, f64),
    /// Vertical spawn band
    pub spawn_y: (f64, f64),
}

impl Default for TapGameConfig {
    fn default() -> Self {
        Self {
            initial_lives: game::INITIAL_LIVES,
            duration_tenths: game::DURATION_TENTHS,
            game_tick: Duration::from_millis(game::GAME_TICK_MS),
            initial_spawn_interval: Duration::from_millis(game::INITIAL_SPAWN_INTERVAL_MS),
            min_spawn_interval: Duration::from_millis(game::MIN_SPAWN_INTERVAL_MS),
            spawn_interval_step: Duration::from_millis(game::SPAWN_INTERVAL_STEP_MS),
            initial_speed_tenths: game::INITIAL_SPEED_TENTHS,
            max_speed_tenths: game::MAX_SPEED_TENTHS,
            ramp_period_seconds: game::RAMP_PERIOD_SECONDS,
            max_active_icons: game::MAX_ACTIVE_ICONS,
            points_per_tap: game::POINTS_PER_TAP,
            lifespan_seconds: (game::MIN_ICON_LIFESPAN_SECS, game::MAX_ICON_LIFESPAN_SECS),
            icon_size: (game::MIN_ICON_SIZE, game::MAX_ICON_SIZE),
            spawn_x: game::SPAWN_X_RANGE,
            spawn_y: game::SPAWN_Y_RANGE,
        }
    }
}

impl TapGameConfig {
    /// Load tuning from environment, falling back to defaults
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            duration_tenths: env::var("PULSE_GAME_DURATION_SECS")
                .ok()
                .and_then(|s| s.parse::<u32>().ok())
                .map_or(defaults.duration_tenths, |secs| secs.saturating_mul(10)),
            max_active_icons: env::var("PULSE_GAME_MAX_ICONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_active_icons),
            initial_lives: env::var("PULSE_GAME_INITIAL_LIVES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.initial_lives),
            ..defaults
        }
    }

    /// Fixed icon lifespan, handy for deterministic runs
    #[must_use]
    pub const fn with_fixed_lifespan(mut self, seconds: f64) -> Self {
        self.lifespan_seconds = (seconds, seconds);
        self
    }

    /// Check the tuning is playable
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first unusable value
    pub fn validate(&self) -> AppResult<()> {
        if self.initial_lives == 0 {
            return Err(AppError::config_invalid("initial_lives must be positive"));
        }
        if self.duration_tenths == 0 {
            return Err(AppError::config_invalid("game duration must be positive"));
        }
        if self.game_tick.is_zero() || self.min_spawn_interval.is_zero() {
            return Err(AppError::config_invalid("tick intervals must be positive"));
        }
        if self.min_spawn_interval > self.initial_spawn_interval {
            return Err(AppError::config_invalid(
                "min_spawn_interval exceeds initial_spawn_interval",
            ));
        }
        if self.max_active_icons == 0 {
            return Err(AppError::config_invalid("max_active_icons must be positive"));
        }
        if self.ramp_period_seconds == 0 {
            return Err(AppError::config_invalid("ramp_period_seconds must be positive"));
        }
        for (name, (low, high)) in [
            ("lifespan_seconds", self.lifespan_seconds),
            ("icon_size", self.icon_size),
            ("spawn_x", self.spawn_x),
            ("spawn_y", self.spawn_y),
        ] {
            if !(low.is_finite() && high.is_finite() && low <= high) {
                return Err(AppError::config_invalid(format!(
                    "{name} range is invalid ({low}..={high})"
                )));
            }
        }
        if self.lifespan_seconds.0 <= 0.0 {
            return Err(AppError::config_invalid("icon lifespan must be positive"));
        }
        Ok(())
    }
}
