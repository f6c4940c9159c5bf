// ABOUTME: Challenge, reward and badge models for the progression system
// ABOUTME: Derived progress percentage, expiry and remaining-day accessors live here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a challenge measures
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeKind {
    /// Number of logged sessions
    SessionCount,
    /// Calories burned
    Calories,
    /// Minutes of exercise
    Duration,
    /// Step count (no real data source yet)
    Steps,
    /// Distance in km (no real data source yet)
    Distance,
    /// Workout streak in days
    Streak,
}

impl ChallengeKind {
    /// Unit label used when a challenge is created for this kind
    #[must_use]
    pub const fn default_unit(self) -> &'static str {
        match self {
            Self::SessionCount => "workouts",
            Self::Calories => "calories",
            Self::Duration => "minutes",
            Self::Steps => "steps",
            Self::Distance => "km",
            Self::Streak => "days",
        }
    }

    /// Whether progress for this kind is simulated rather than measured
    #[must_use]
    pub const fn is_simulated(self) -> bool {
        matches!(self, Self::Steps | Self::Distance)
    }

    /// Parse a kind from a user-supplied string
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "session_count" | "sessions" | "workouts" | "workout" => Some(Self::SessionCount),
            "calories" => Some(Self::Calories),
            "duration" | "minutes" => Some(Self::Duration),
            "steps" => Some(Self::Steps),
            "distance" => Some(Self::Distance),
            "streak" | "consistency" => Some(Self::Streak),
            _ => None,
        }
    }
}

/// Badge rarity tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BadgeRarity {
    /// Common
    Common,
    /// Rare
    Rare,
    /// Epic
    Epic,
    /// Legendary
    Legendary,
}

/// Badge template carried by a reward, or an earned badge once `date_earned` is set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Badge {
    /// Badge identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// What it was earned for
    pub description: String,
    /// Icon symbol name
    pub icon: String,
    /// Hex color
    pub color: String,
    /// Rarity tier
    pub rarity: BadgeRarity,
    /// Set once when the badge is awarded
    pub date_earned: Option<DateTime<Utc>>,
}

impl Badge {
    /// Create an unearned badge template
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
        rarity: BadgeRarity,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            color: color.into(),
            rarity,
            date_earned: None,
        }
    }
}

/// What completing a challenge pays out
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChallengeReward {
    /// Points added to the ledger
    pub points: u64,
    /// Badge template cloned into the ledger on award
    pub badge: Option<Badge>,
    /// Optional title unlocked
    pub title: Option<String>,
}

impl ChallengeReward {
    /// Points-only reward
    #[must_use]
    pub const fn points(points: u64) -> Self {
        Self {
            points,
            badge: None,
            title: None,
        }
    }

    /// Attach a badge template
    #[must_use]
    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }
}

/// A time-boxed goal whose progress is derived from activity history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Challenge {
    /// Challenge identifier
    pub id: Uuid,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// What the challenge measures
    pub kind: ChallengeKind,
    /// Value to reach
    pub target_value: f64,
    /// Derived on every refresh, never authoritative
    pub current_progress: f64,
    /// Unit label
    pub unit: String,
    /// Window start (inclusive)
    pub start_date: DateTime<Utc>,
    /// Window end (inclusive)
    pub end_date: DateTime<Utc>,
    /// Reward paid on completion
    pub reward: ChallengeReward,
    /// Number of participants shown
    pub participant_count: u32,
    /// One-way completion flag
    pub is_completed: bool,
    /// Global vs personal challenge
    pub is_global: bool,
}

impl Challenge {
    /// Progress toward the target, clamped to `[0, 100]`
    ///
    /// A non-positive target counts as already reached.
    #[must_use]
    pub fn progress_percentage(&self) -> f64 {
        if self.target_value <= 0.0 || self.target_value.is_nan() {
            return 100.0;
        }
        let percentage = self.current_progress / self.target_value * 100.0;
        if percentage.is_nan() {
            return 0.0;
        }
        percentage.clamp(0.0, 100.0)
    }

    /// Whether the derived progress has reached the target
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.progress_percentage() >= 100.0
    }

    /// Whether the window has closed
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.end_date
    }

    /// Whole days left in the window, never negative
    #[must_use]
    pub fn remaining_days(&self, now: DateTime<Utc>) -> i64 {
        (self.end_date - now).num_days().max(0)
    }

    /// Whether a timestamp falls inside the challenge window
    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start_date && timestamp <= self.end_date
    }
}

/// Builder for `Challenge`
#[derive(Debug, Clone)]
pub struct ChallengeBuilder {
    challenge: Challenge,
}

impl ChallengeBuilder {
    /// Creates a builder for a personal challenge running `days` from `start`
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        kind: ChallengeKind,
        target_value: f64,
        start: DateTime<Utc>,
        days: i64,
    ) -> Self {
        Self {
            challenge: Challenge {
                id: Uuid::new_v4(),
                title: title.into(),
                description: String::new(),
                kind,
                target_value,
                current_progress: 0.0,
                unit: kind.default_unit().to_owned(),
                start_date: start,
                end_date: start + Duration::days(days),
                reward: ChallengeReward::default(),
                participant_count: 1,
                is_completed: false,
                is_global: false,
            },
        }
    }

    /// Sets the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.challenge.description = description.into();
        self
    }

    /// Overrides the unit label
    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.challenge.unit = unit.into();
        self
    }

    /// Sets the reward
    #[must_use]
    pub fn reward(mut self, reward: ChallengeReward) -> Self {
        self.challenge.reward = reward;
        self
    }

    /// Marks the challenge global with the given participant count
    #[must_use]
    pub const fn global(mut self, participants: u32) -> Self {
        self.challenge.is_global = true;
        self.challenge.participant_count = participants;
        self
    }

    /// Sets an explicit window end
    #[must_use]
    pub const fn ends_at(mut self, end: DateTime<Utc>) -> Self {
        self.challenge.end_date = end;
        self
    }

    /// Builds the challenge
    #[must_use]
    pub fn build(self) -> Challenge {
        self.challenge
    }
}
