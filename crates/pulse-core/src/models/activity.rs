// ABOUTME: Workout activity models including ActivityRecord, ActivityRecordBuilder, and templates
// ABOUTME: Activity kinds with calorie rates, exercises, and the transient WorkoutSession
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::session;

/// Kind of workout activity
///
/// The `Other` variant absorbs values written by newer builds so old records
/// keep loading instead of dropping the whole collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// General cardio session
    Cardio,
    /// Strength training
    Strength,
    /// Flexibility and mobility work
    Flexibility,
    /// Team or court sports
    Sports,
    /// Yoga practice
    Yoga,
    /// Running
    Running,
    /// Cycling
    Cycling,
    /// Swimming
    Swimming,
    /// High-intensity interval training
    Hiit,
    /// `CrossFit` style conditioning
    #[serde(rename = "crossfit")]
    CrossFit,
    /// Unclassified activity
    #[serde(other)]
    Other,
}

impl ActivityKind {
    /// All concrete kinds, in display order
    pub const ALL: [Self; 10] = [
        Self::Cardio,
        Self::Strength,
        Self::Flexibility,
        Self::Sports,
        Self::Yoga,
        Self::Running,
        Self::Cycling,
        Self::Swimming,
        Self::Hiit,
        Self::CrossFit,
    ];

    /// Calorie burn heuristic for this kind, per minute of activity
    #[must_use]
    pub const fn calories_per_minute(self) -> u64 {
        match self {
            Self::Cardio | Self::Running | Self::Cycling => session::CARDIO_CALORIES_PER_MINUTE,
            Self::Hiit | Self::CrossFit => session::HIGH_INTENSITY_CALORIES_PER_MINUTE,
            Self::Swimming => session::SWIMMING_CALORIES_PER_MINUTE,
            Self::Sports => session::SPORTS_CALORIES_PER_MINUTE,
            Self::Strength => session::STRENGTH_CALORIES_PER_MINUTE,
            Self::Yoga | Self::Flexibility => session::FLEXIBILITY_CALORIES_PER_MINUTE,
            Self::Other => session::DEFAULT_CALORIES_PER_MINUTE,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cardio => "Cardio",
            Self::Strength => "Strength Training",
            Self::Flexibility => "Flexibility",
            Self::Sports => "Sports",
            Self::Yoga => "Yoga",
            Self::Running => "Running",
            Self::Cycling => "Cycling",
            Self::Swimming => "Swimming",
            Self::Hiit => "HIIT",
            Self::CrossFit => "CrossFit",
            Self::Other => "Other",
        }
    }
}

/// Template difficulty rating
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    /// Suitable for newcomers
    Beginner,
    /// Some training background assumed
    Intermediate,
    /// Demanding
    Advanced,
    /// Very demanding
    Expert,
}

/// One exercise inside a workout or template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Identity used for update/remove matching
    pub id: Uuid,
    /// Exercise name (e.g., "Push-ups")
    pub name: String,
    /// Number of sets
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Load in kilograms (0 for bodyweight)
    pub weight_kg: f64,
    /// Rest between sets in seconds
    pub rest_seconds: u32,
    /// Free-form notes
    pub notes: String,
}

impl Exercise {
    /// Create an exercise with one set of one rep and a 60 second rest
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            sets: 1,
            reps: 1,
            weight_kg: 0.0,
            rest_seconds: 60,
            notes: String::new(),
        }
    }

    /// Set the set/rep scheme
    #[must_use]
    pub const fn with_sets(mut self, sets: u32, reps: u32) -> Self {
        self.sets = sets;
        self.reps = reps;
        self
    }

    /// Set the rest interval
    #[must_use]
    pub const fn with_rest(mut self, rest_seconds: u32) -> Self {
        self.rest_seconds = rest_seconds;
        self
    }

    /// Set the load
    #[must_use]
    pub const fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = weight_kg;
        self
    }
}

/// Reusable workout blueprint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutTemplate {
    /// Template identifier
    pub id: Uuid,
    /// Template name, copied into sessions started from it
    pub name: String,
    /// Activity kind, copied into sessions started from it
    pub kind: ActivityKind,
    /// Exercises copied into sessions started from it
    pub exercises: Vec<Exercise>,
    /// Expected duration in seconds
    pub estimated_duration_seconds: u64,
    /// Difficulty rating
    pub difficulty: DifficultyLevel,
}

impl WorkoutTemplate {
    /// Create a template
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: ActivityKind,
        exercises: Vec<Exercise>,
        estimated_duration_seconds: u64,
        difficulty: DifficultyLevel,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            exercises,
            estimated_duration_seconds,
            difficulty,
        }
    }
}

/// In-progress workout tracked by the session controller
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    /// Session name
    pub name: String,
    /// Activity kind used for calorie estimation
    pub kind: ActivityKind,
    /// Ordered exercise list
    pub exercises: Vec<Exercise>,
    /// When the session started
    pub started_at: DateTime<Utc>,
    /// Whole seconds counted by the session clock
    pub elapsed_seconds: u64,
    /// False while paused
    pub is_active: bool,
}

/// A finished workout in the permanent activity history
///
/// Fields are private so a record cannot drift after creation; use
/// `ActivityRecordBuilder` to create one or to derive an edited copy.
///
/// # Examples
///
/// ```rust
/// use pulse_core::models::{ActivityKind, ActivityRecordBuilder};
/// use chrono::Utc;
///
/// let record = ActivityRecordBuilder::new("Morning HIIT", ActivityKind::Hiit, Utc::now())
///     .duration_seconds(1_200)
///     .calories_burned(240)
///     .build();
///
/// assert_eq!(record.name(), "Morning HIIT");
/// assert_eq!(record.duration_minutes(), 20.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityRecord {
    id: Uuid,
    name: String,
    kind: ActivityKind,
    duration_seconds: u64,
    calories_burned: u64,
    timestamp: DateTime<Utc>,
    #[serde(default)]
    exercises: Vec<Exercise>,
    #[serde(default)]
    notes: String,
}

impl ActivityRecord {
    /// Record identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Workout name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Activity kind
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Duration in whole seconds
    #[must_use]
    pub const fn duration_seconds(&self) -> u64 {
        self.duration_seconds
    }

    /// Duration in (fractional) minutes
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        self.duration_seconds as f64 / 60.0
    }

    /// Calories burned
    #[must_use]
    pub const fn calories_burned(&self) -> u64 {
        self.calories_burned
    }

    /// When the workout took place
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Exercises performed
    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Free-form notes
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }
}

/// Builder for `ActivityRecord`
#[derive(Debug, Clone)]
pub struct ActivityRecordBuilder {
    record: ActivityRecord,
}

impl ActivityRecordBuilder {
    /// Creates a builder with required fields and a fresh identifier
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ActivityKind, timestamp: DateTime<Utc>) -> Self {
        Self {
            record: ActivityRecord {
                id: Uuid::new_v4(),
                name: name.into(),
                kind,
                duration_seconds: 0,
                calories_burned: 0,
                timestamp,
                exercises: Vec::new(),
                notes: String::new(),
            },
        }
    }

    /// Starts from an existing record, keeping its identifier (explicit edit)
    #[must_use]
    pub fn from_record(record: &ActivityRecord) -> Self {
        Self {
            record: record.clone(),
        }
    }

    /// Sets the workout name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.record.name = name.into();
        self
    }

    /// Sets the duration in seconds
    #[must_use]
    pub const fn duration_seconds(mut self, seconds: u64) -> Self {
        self.record.duration_seconds = seconds;
        self
    }

    /// Sets calories burned
    #[must_use]
    pub const fn calories_burned(mut self, calories: u64) -> Self {
        self.record.calories_burned = calories;
        self
    }

    /// Sets the exercise list
    #[must_use]
    pub fn exercises(mut self, exercises: Vec<Exercise>) -> Self {
        self.record.exercises = exercises;
        self
    }

    /// Sets the notes
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.record.notes = notes.into();
        self
    }

    /// Builds the record
    #[must_use]
    pub fn build(self) -> ActivityRecord {
        self.record
    }
}
