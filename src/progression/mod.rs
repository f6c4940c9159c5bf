// ABOUTME: Progression engine deriving challenge progress from activity history
// ABOUTME: Flags eligibility on refresh and performs the one-way reward transfer on completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

//! # Progression
//!
//! Challenge progress is never stored authoritatively: [`ProgressionEngine::refresh`]
//! recomputes it from the activity records inside each challenge's window.
//! Refreshing only flags eligibility. Rewards move into the [`RewardLedger`]
//! exclusively through [`ProgressionEngine::complete_challenge`], and a
//! completed challenge is frozen from then on.

mod ledger;
mod stats;

pub use ledger::RewardLedger;
pub use stats::ProgressStats;

use chrono::{DateTime, Utc};
use pulse_core::models::{ActivityRecord, Badge, Challenge, ChallengeKind};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::{debug, info};
use uuid::Uuid;

/// Result of a completion or award attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AwardOutcome {
    /// Reward transferred
    Awarded {
        /// Points added
        points: u64,
        /// Badge earned, stamped with its award time
        badge: Option<Badge>,
        /// Ledger level after the award
        level: u64,
    },
    /// The challenge had already been completed; nothing changed
    AlreadyCompleted,
    /// Progress has not reached the target; nothing changed
    NotEligible,
    /// No challenge with that id
    NotFound,
}

impl AwardOutcome {
    /// Whether the reward was transferred
    #[must_use]
    pub const fn is_awarded(&self) -> bool {
        matches!(self, Self::Awarded { .. })
    }
}

/// What a refresh pass touched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    /// Non-completed challenges recomputed
    pub recomputed: usize,
    /// Challenges now eligible for completion
    pub eligible: Vec<Uuid>,
}

/// Recomputes challenge progress and gates reward transfer
pub struct ProgressionEngine {
    rng: Box<dyn RngCore>,
}

impl ProgressionEngine {
    /// Engine drawing simulated step/distance values from `rng`
    #[must_use]
    pub fn new(rng: Box<dyn RngCore>) -> Self {
        Self { rng }
    }

    /// Engine seeded from the operating system
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(Box::new(StdRng::from_entropy()))
    }

    /// Recompute progress for every non-completed challenge
    pub fn refresh(
        &mut self,
        challenges: &mut [Challenge],
        history: &[ActivityRecord],
        ledger: &RewardLedger,
    ) -> RefreshSummary {
        let mut summary = RefreshSummary::default();

        for challenge in challenges.iter_mut().filter(|c| !c.is_completed) {
            challenge.current_progress = self.measure(challenge, history, ledger);
            summary.recomputed += 1;
            if challenge.is_eligible() {
                summary.eligible.push(challenge.id);
            }
        }

        debug!(
            recomputed = summary.recomputed,
            eligible = summary.eligible.len(),
            "Challenge progress refreshed"
        );
        summary
    }

    /// Complete an eligible challenge, transferring its reward into `ledger`
    pub fn complete_challenge(
        &self,
        challenges: &mut [Challenge],
        ledger: &mut RewardLedger,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> AwardOutcome {
        let Some(challenge) = challenges.iter_mut().find(|c| c.id == id) else {
            return AwardOutcome::NotFound;
        };
        if challenge.is_completed {
            return AwardOutcome::AlreadyCompleted;
        }
        if !challenge.is_eligible() {
            debug!(
                challenge_id = %id,
                progress = challenge.progress_percentage(),
                "Challenge not yet eligible"
            );
            return AwardOutcome::NotEligible;
        }

        let outcome = ledger.award(challenge, now);
        info!(challenge_id = %id, title = %challenge.title, "Challenge completed");
        outcome
    }

    fn measure(
        &mut self,
        challenge: &Challenge,
        history: &[ActivityRecord],
        ledger: &RewardLedger,
    ) -> f64 {
        let in_window = || {
            history
                .iter()
                .filter(|record| challenge.contains(record.timestamp()))
        };

        match challenge.kind {
            ChallengeKind::SessionCount => in_window().count() as f64,
            ChallengeKind::Calories => in_window()
                .map(|record| record.calories_burned() as f64)
                .sum(),
            ChallengeKind::Duration => {
                in_window()
                    .map(ActivityRecord::duration_seconds)
                    .sum::<u64>() as f64
                    / 60.0
            }
            ChallengeKind::Streak => f64::from(ledger.current_streak),
            ChallengeKind::Steps | ChallengeKind::Distance => {
                if challenge.target_value.is_finite() && challenge.target_value > 0.0 {
                    self.rng.gen_range(0.0..=challenge.target_value)
                } else {
                    0.0
                }
            }
        }
    }
}
