// ABOUTME: Reward ledger aggregating points, level, streak, badges and lifetime session totals
// ABOUTME: Mutated only by recording a finished session or awarding a completed challenge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

use chrono::{DateTime, Utc};
use pulse_core::constants::progression;
use pulse_core::models::{ActivityRecord, Badge, Challenge};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AwardOutcome;
use crate::logging::AppLogger;

/// Points, level, streak and badges derived from the activity history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RewardLedger {
    /// Points from completed challenges
    pub total_points: u64,
    /// `floor(total_points / 1000) + 1`, never decreases
    pub level: u64,
    /// Earned badges with their award time
    pub badges: Vec<Badge>,
    /// Snapshots of challenges at the moment they were completed
    pub completed_challenges: Vec<Challenge>,
    /// Current streak in days
    pub current_streak: u32,
    /// Best streak seen
    pub longest_streak: u32,
    /// Finished sessions
    pub total_sessions: u64,
    /// Calories across all sessions
    pub total_calories_burned: u64,
    /// Seconds across all sessions
    pub total_exercise_seconds: u64,
}

impl Default for RewardLedger {
    fn default() -> Self {
        Self {
            total_points: 0,
            level: 1,
            badges: Vec::new(),
            completed_challenges: Vec::new(),
            current_streak: 0,
            longest_streak: 0,
            total_sessions: 0,
            total_calories_burned: 0,
            total_exercise_seconds: 0,
        }
    }
}

impl RewardLedger {
    /// Level reached with `points`
    #[must_use]
    pub const fn level_for_points(points: u64) -> u64 {
        points / progression::POINTS_PER_LEVEL + 1
    }

    /// Percentage of the way through the current level
    #[must_use]
    pub fn level_progress(&self) -> f64 {
        (self.total_points % progression::POINTS_PER_LEVEL) as f64
            / progression::POINTS_PER_LEVEL as f64
            * 100.0
    }

    /// Points still needed for the next level
    #[must_use]
    pub const fn points_to_next_level(&self) -> u64 {
        progression::POINTS_PER_LEVEL - self.total_points % progression::POINTS_PER_LEVEL
    }

    /// Fold a finished session into the totals
    ///
    /// The streak only ever moves from 0 to 1 for a session dated today
    /// (UTC); longer streaks are not derived from history.
    pub fn record_session(&mut self, record: &ActivityRecord, now: DateTime<Utc>) {
        self.total_sessions += 1;
        self.total_calories_burned += record.calories_burned();
        self.total_exercise_seconds += record.duration_seconds();

        if record.timestamp().date_naive() == now.date_naive() && self.current_streak == 0 {
            self.current_streak = 1;
        }
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.refresh_level();

        debug!(
            total_sessions = self.total_sessions,
            current_streak = self.current_streak,
            "Session recorded in ledger"
        );
    }

    /// Transfer a challenge's reward into the ledger
    ///
    /// Rejected when the challenge is already completed. Eligibility is the
    /// caller's concern (see `ProgressionEngine::complete_challenge`).
    pub fn award(&mut self, challenge: &mut Challenge, now: DateTime<Utc>) -> AwardOutcome {
        if challenge.is_completed {
            return AwardOutcome::AlreadyCompleted;
        }

        challenge.is_completed = true;
        self.total_points += challenge.reward.points;
        self.refresh_level();

        let badge = challenge.reward.badge.clone().map(|mut badge| {
            badge.date_earned = Some(now);
            badge
        });
        if let Some(earned) = &badge {
            self.badges.push(earned.clone());
        }
        self.completed_challenges.push(challenge.clone());

        AppLogger::log_award(
            &challenge.id.to_string(),
            challenge.reward.points,
            self.total_points,
            self.level,
        );

        AwardOutcome::Awarded {
            points: challenge.reward.points,
            badge,
            level: self.level,
        }
    }

    fn refresh_level(&mut self) {
        self.level = self.level.max(Self::level_for_points(self.total_points));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(RewardLedger::level_for_points(0), 1);
        assert_eq!(RewardLedger::level_for_points(999), 1);
        assert_eq!(RewardLedger::level_for_points(1000), 2);
        assert_eq!(RewardLedger::level_for_points(2500), 3);
    }

    #[test]
    fn test_level_progress_and_points_to_next() {
        let ledger = RewardLedger {
            total_points: 1250,
            ..RewardLedger::default()
        };
        assert!((ledger.level_progress() - 25.0).abs() < f64::EPSILON);
        assert_eq!(ledger.points_to_next_level(), 750);
    }

    #[test]
    fn test_level_never_decreases() {
        let mut ledger = RewardLedger {
            level: 4,
            ..RewardLedger::default()
        };
        ledger.refresh_level();
        assert_eq!(ledger.level, 4);
    }
}
