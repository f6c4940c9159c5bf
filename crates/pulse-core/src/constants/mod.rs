// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Game tuning, progression rules, calorie rates and store channel names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Record store channel names (one key per persisted collection)
pub mod channels {
    /// Finished workout history
    pub const WORKOUTS: &str = "workouts";
    /// Challenge list with derived progress
    pub const CHALLENGES: &str = "challenges";
    /// Reward ledger aggregate
    pub const PROGRESS: &str = "progress";
    /// Workout templates
    pub const TEMPLATES: &str = "templates";
    /// Tap game lifetime statistics
    pub const GAME_STATS: &str = "gameStats";
}

/// Workout session timing and calorie heuristics
pub mod session {
    /// Elapsed-time tick interval in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 1_000;
    /// Name used when a session starts without a template
    pub const CUSTOM_WORKOUT_NAME: &str = "Custom Workout";
    /// Suffix appended to a workout name when saved as a template
    pub const TEMPLATE_NAME_SUFFIX: &str = " Template";

    /// Calories per minute for cardio, running and cycling
    pub const CARDIO_CALORIES_PER_MINUTE: u64 = 10;
    /// Calories per minute for HIIT and `CrossFit`
    pub const HIGH_INTENSITY_CALORIES_PER_MINUTE: u64 = 12;
    /// Calories per minute for swimming
    pub const SWIMMING_CALORIES_PER_MINUTE: u64 = 11;
    /// Calories per minute for team/court sports
    pub const SPORTS_CALORIES_PER_MINUTE: u64 = 8;
    /// Calories per minute for strength training
    pub const STRENGTH_CALORIES_PER_MINUTE: u64 = 6;
    /// Calories per minute for yoga and flexibility work
    pub const FLEXIBILITY_CALORIES_PER_MINUTE: u64 = 3;
    /// Calories per minute for anything unclassified
    pub const DEFAULT_CALORIES_PER_MINUTE: u64 = 7;
}

/// Tap game tuning
pub mod game {
    /// Lives at the start of a game
    pub const INITIAL_LIVES: u32 = 3;
    /// Game length in tenths of a second (30.0 s)
    pub const DURATION_TENTHS: u32 = 300;
    /// Game tick interval in milliseconds
    pub const GAME_TICK_MS: u64 = 100;
    /// Spawn interval at game start in milliseconds
    pub const INITIAL_SPAWN_INTERVAL_MS: u64 = 1_500;
    /// Spawn interval floor in milliseconds
    pub const MIN_SPAWN_INTERVAL_MS: u64 = 500;
    /// Spawn interval reduction per difficulty step in milliseconds
    pub const SPAWN_INTERVAL_STEP_MS: u64 = 100;
    /// Game speed at start, in tenths (1.0)
    pub const INITIAL_SPEED_TENTHS: u32 = 10;
    /// Game speed ceiling, in tenths (2.0)
    pub const MAX_SPEED_TENTHS: u32 = 20;
    /// Difficulty ramps while the whole seconds remaining are a multiple of this
    pub const RAMP_PERIOD_SECONDS: u32 = 10;
    /// Maximum icons on screen at once
    pub const MAX_ACTIVE_ICONS: usize = 5;
    /// Points awarded per successful tap
    pub const POINTS_PER_TAP: u32 = 10;
    /// Shortest icon lifespan in seconds
    pub const MIN_ICON_LIFESPAN_SECS: f64 = 1.5;
    /// Longest icon lifespan in seconds
    pub const MAX_ICON_LIFESPAN_SECS: f64 = 3.0;
    /// Smallest icon size in points
    pub const MIN_ICON_SIZE: f64 = 50.0;
    /// Largest icon size in points
    pub const MAX_ICON_SIZE: f64 = 80.0;
    /// Horizontal spawn band (normalized)
    pub const SPAWN_X_RANGE: (f64, f64) = (0.1, 0.9);
    /// Vertical spawn band (normalized)
    pub const SPAWN_Y_RANGE: (f64, f64) = (0.1, 0.8);
    /// Lifetime taps needed per player level
    pub const TAPS_PER_LEVEL: u64 = 100;
}

/// Challenge and reward progression rules
pub mod progression {
    /// Points needed per reward level
    pub const POINTS_PER_LEVEL: u64 = 1_000;
    /// Reward points per unit of target for user-created challenges
    pub const CUSTOM_CHALLENGE_POINTS_PER_UNIT: f64 = 10.0;
    /// Default challenge window in days
    pub const DEFAULT_CHALLENGE_DAYS: i64 = 7;
    /// Badges earned within this many days count as recent
    pub const RECENT_BADGE_DAYS: i64 = 7;
    /// Participant range for seeded global challenges
    pub const GLOBAL_PARTICIPANTS_RANGE: (u32, u32) = (100, 5_000);
}

/// Service identity for structured logging
pub mod service_names {
    /// Service name reported in log output
    pub const SPORTS_PULSE: &str = "sports-pulse";
}
