// ABOUTME: Progress statistics summarizing challenges and the reward ledger
// ABOUTME: Completion rate, active count and level figures for status displays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

use chrono::{DateTime, Utc};
use pulse_core::models::Challenge;
use serde::Serialize;

use super::RewardLedger;

/// Snapshot of overall progress
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProgressStats {
    /// Challenges known
    pub total_challenges: usize,
    /// Challenges completed
    pub completed_challenges: usize,
    /// Neither completed nor expired
    pub active_challenges: usize,
    /// Completed share of all challenges, in percent
    pub completion_rate: f64,
    /// Ledger points
    pub total_points: u64,
    /// Ledger level
    pub level: u64,
    /// Percent through the current level
    pub level_progress: f64,
    /// Points until the next level
    pub points_to_next_level: u64,
    /// Badges earned
    pub total_badges: usize,
    /// Current streak in days
    pub current_streak: u32,
    /// Best streak in days
    pub longest_streak: u32,
}

impl ProgressStats {
    /// Summarize `challenges` and `ledger` as of `now`
    #[must_use]
    pub fn compute(challenges: &[Challenge], ledger: &RewardLedger, now: DateTime<Utc>) -> Self {
        let total = challenges.len();
        let completed = challenges.iter().filter(|c| c.is_completed).count();
        let active = challenges
            .iter()
            .filter(|c| !c.is_completed && !c.is_expired(now))
            .count();
        let completion_rate = if total > 0 {
            completed as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_challenges: total,
            completed_challenges: completed,
            active_challenges: active,
            completion_rate,
            total_points: ledger.total_points,
            level: ledger.level,
            level_progress: ledger.level_progress(),
            points_to_next_level: ledger.points_to_next_level(),
            total_badges: ledger.badges.len(),
            current_streak: ledger.current_streak,
            longest_streak: ledger.longest_streak,
        }
    }
}
