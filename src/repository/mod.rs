// ABOUTME: Fitness repository owning workouts, challenges, reward ledger and templates
// ABOUTME: Loads and seeds collections, exposes CRUD and derived statistics, saves whole collections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

//! # Fitness Repository
//!
//! The repository holds the four persistent collections in memory and writes
//! each one back whole after every mutation. It is also the [`ActivityLog`]
//! finished workout sessions are appended to, so recording a session updates
//! both the history and the [`RewardLedger`].

mod seed;

pub use seed::{default_challenges, default_templates};

use chrono::{Duration, Months};
use pulse_core::constants::{channels, progression, session};
use pulse_core::models::{
    ActivityKind, ActivityRecord, Badge, BadgeRarity, Challenge, ChallengeBuilder,
    ChallengeKind, ChallengeReward, DifficultyLevel, WorkoutTemplate,
};
use rand::RngCore;
use serde::Serialize;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::clock::TimeSource;
use crate::progression::{
    AwardOutcome, ProgressStats, ProgressionEngine, RefreshSummary, RewardLedger,
};
use crate::session::ActivityLog;
use crate::store::{Collection, KeyValueStore};

/// Aggregate figures over the workout history
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkoutStats {
    /// Recorded workouts
    pub total_workouts: usize,
    /// Seconds across all workouts
    pub total_duration_seconds: u64,
    /// Calories across all workouts
    pub total_calories: u64,
    /// Mean workout length in seconds (0 when empty)
    pub average_duration_seconds: f64,
    /// Most frequent kind; strength when empty
    pub favorite_kind: ActivityKind,
}

/// Parameters for a user-defined challenge
#[derive(Debug, Clone)]
pub struct CustomChallenge {
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// What it measures
    pub kind: ChallengeKind,
    /// Value to reach
    pub target_value: f64,
    /// Window length from now
    pub days: i64,
}

/// In-memory owner of the persistent collections
pub struct FitnessRepository {
    store: Arc<dyn KeyValueStore>,
    time: Rc<dyn TimeSource>,
    workouts_channel: Collection<Vec<ActivityRecord>>,
    challenges_channel: Collection<Vec<Challenge>>,
    progress_channel: Collection<RewardLedger>,
    templates_channel: Collection<Vec<WorkoutTemplate>>,
    workouts: Vec<ActivityRecord>,
    challenges: Vec<Challenge>,
    ledger: RewardLedger,
    templates: Vec<WorkoutTemplate>,
}

impl FitnessRepository {
    /// Load every collection from `store`, seeding empty templates and challenges
    #[must_use]
    pub fn open(
        store: Arc<dyn KeyValueStore>,
        time: Rc<dyn TimeSource>,
        rng: &mut dyn RngCore,
    ) -> Self {
        let workouts_channel = Collection::new(Arc::clone(&store), channels::WORKOUTS);
        let challenges_channel = Collection::new(Arc::clone(&store), channels::CHALLENGES);
        let progress_channel = Collection::new(Arc::clone(&store), channels::PROGRESS);
        let templates_channel = Collection::new(Arc::clone(&store), channels::TEMPLATES);

        let mut repository = Self {
            workouts: workouts_channel.load(),
            challenges: challenges_channel.load(),
            ledger: progress_channel.load(),
            templates: templates_channel.load(),
            store,
            time,
            workouts_channel,
            challenges_channel,
            progress_channel,
            templates_channel,
        };

        if repository.templates.is_empty() {
            repository.templates = default_templates();
            repository.templates_channel.save(&repository.templates);
            info!(count = repository.templates.len(), "Seeded default workout templates");
        }
        if repository.challenges.is_empty() {
            repository.challenges = default_challenges(repository.time.now(), rng);
            repository.challenges_channel.save(&repository.challenges);
            info!(count = repository.challenges.len(), "Seeded default challenges");
        }

        debug!(
            workouts = repository.workouts.len(),
            challenges = repository.challenges.len(),
            level = repository.ledger.level,
            "Repository opened"
        );
        repository
    }

    /// Backing store, for other components that persist alongside
    #[must_use]
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.store)
    }

    // ================================================================================================
    // Workouts
    // ================================================================================================

    /// Full workout history in insertion order
    #[must_use]
    pub fn workouts(&self) -> &[ActivityRecord] {
        &self.workouts
    }

    /// Append a workout and fold it into the ledger
    pub fn add_workout(&mut self, record: ActivityRecord) {
        self.ledger.record_session(&record, self.time.now());
        self.workouts.push(record);
        self.workouts_channel.save(&self.workouts);
        self.progress_channel.save(&self.ledger);
    }

    /// Replace the workout with the same id
    pub fn update_workout(&mut self, record: ActivityRecord) -> bool {
        let Some(slot) = self.workouts.iter_mut().find(|w| w.id() == record.id()) else {
            return false;
        };
        *slot = record;
        self.workouts_channel.save(&self.workouts);
        true
    }

    /// Remove a workout; ledger totals are not rolled back
    pub fn delete_workout(&mut self, id: Uuid) -> bool {
        let before = self.workouts.len();
        self.workouts.retain(|w| w.id() != id);
        if self.workouts.len() == before {
            return false;
        }
        self.workouts_channel.save(&self.workouts);
        true
    }

    /// Workouts in the last `days` days
    #[must_use]
    pub fn workouts_since(&self, days: i64) -> Vec<&ActivityRecord> {
        let cutoff = self.time.now() - Duration::days(days);
        self.workouts
            .iter()
            .filter(|w| w.timestamp() >= cutoff)
            .collect()
    }

    /// Workouts in the last seven days
    #[must_use]
    pub fn weekly_workouts(&self) -> Vec<&ActivityRecord> {
        self.workouts_since(7)
    }

    /// Workouts in the last calendar month
    #[must_use]
    pub fn monthly_workouts(&self) -> Vec<&ActivityRecord> {
        let now = self.time.now();
        let cutoff = now
            .checked_sub_months(Months::new(1))
            .unwrap_or(now - Duration::days(30));
        self.workouts
            .iter()
            .filter(|w| w.timestamp() >= cutoff)
            .collect()
    }

    /// Totals, average and favorite kind over the whole history
    #[must_use]
    pub fn workout_stats(&self) -> WorkoutStats {
        let total_workouts = self.workouts.len();
        let total_duration_seconds: u64 = self.workouts.iter().map(ActivityRecord::duration_seconds).sum();
        let total_calories: u64 = self.workouts.iter().map(ActivityRecord::calories_burned).sum();
        let average_duration_seconds = if total_workouts > 0 {
            total_duration_seconds as f64 / total_workouts as f64
        } else {
            0.0
        };

        let mut by_kind: BTreeMap<ActivityKind, usize> = BTreeMap::new();
        for workout in &self.workouts {
            *by_kind.entry(workout.kind()).or_default() += 1;
        }
        // Ties go to the kind declared first
        let favorite_kind = by_kind
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
            .map_or(ActivityKind::Strength, |(kind, _)| kind);

        WorkoutStats {
            total_workouts,
            total_duration_seconds,
            total_calories,
            average_duration_seconds,
            favorite_kind,
        }
    }

    // ================================================================================================
    // Challenges
    // ================================================================================================

    /// All challenges
    #[must_use]
    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    /// Challenge by id
    #[must_use]
    pub fn challenge(&self, id: Uuid) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    /// Append a challenge
    pub fn add_challenge(&mut self, challenge: Challenge) {
        self.challenges.push(challenge);
        self.challenges_channel.save(&self.challenges);
    }

    /// Replace the challenge with the same id
    pub fn update_challenge(&mut self, challenge: Challenge) -> bool {
        let Some(slot) = self.challenges.iter_mut().find(|c| c.id == challenge.id) else {
            return false;
        };
        *slot = challenge;
        self.challenges_channel.save(&self.challenges);
        true
    }

    /// Create a personal challenge worth ten points per target unit
    pub fn create_custom_challenge(&mut self, params: CustomChallenge) -> Challenge {
        let points = (params.target_value.max(0.0) * progression::CUSTOM_CHALLENGE_POINTS_PER_UNIT)
            as u64;
        let challenge = ChallengeBuilder::new(
            params.title,
            params.kind,
            params.target_value,
            self.time.now(),
            params.days,
        )
        .description(params.description)
        .reward(ChallengeReward::points(points))
        .build();

        info!(challenge_id = %challenge.id, kind = ?challenge.kind, points, "Custom challenge created");
        self.add_challenge(challenge.clone());
        challenge
    }

    /// Recompute progress for all open challenges
    pub fn refresh_challenges(&mut self, engine: &mut ProgressionEngine) -> RefreshSummary {
        let summary = engine.refresh(&mut self.challenges, &self.workouts, &self.ledger);
        self.challenges_channel.save(&self.challenges);
        summary
    }

    /// Complete an eligible challenge and persist the reward
    pub fn complete_challenge(&mut self, engine: &ProgressionEngine, id: Uuid) -> AwardOutcome {
        let outcome =
            engine.complete_challenge(&mut self.challenges, &mut self.ledger, id, self.time.now());
        if outcome.is_awarded() {
            self.challenges_channel.save(&self.challenges);
            self.progress_channel.save(&self.ledger);
        }
        outcome
    }

    /// Neither completed nor expired
    #[must_use]
    pub fn active_challenges(&self) -> Vec<&Challenge> {
        let now = self.time.now();
        self.challenges
            .iter()
            .filter(|c| !c.is_completed && !c.is_expired(now))
            .collect()
    }

    /// Completed challenges
    #[must_use]
    pub fn completed_challenges(&self) -> Vec<&Challenge> {
        self.challenges.iter().filter(|c| c.is_completed).collect()
    }

    /// Community challenges
    #[must_use]
    pub fn global_challenges(&self) -> Vec<&Challenge> {
        self.challenges.iter().filter(|c| c.is_global).collect()
    }

    /// Challenges owned by this user only
    #[must_use]
    pub fn personal_challenges(&self) -> Vec<&Challenge> {
        self.challenges.iter().filter(|c| !c.is_global).collect()
    }

    // ================================================================================================
    // Progress
    // ================================================================================================

    /// Reward ledger
    #[must_use]
    pub const fn ledger(&self) -> &RewardLedger {
        &self.ledger
    }

    /// Summary of challenges and ledger
    #[must_use]
    pub fn progress_stats(&self) -> ProgressStats {
        ProgressStats::compute(&self.challenges, &self.ledger, self.time.now())
    }

    /// Badges earned within the last week
    #[must_use]
    pub fn recent_badges(&self) -> Vec<&Badge> {
        let cutoff = self.time.now() - Duration::days(progression::RECENT_BADGE_DAYS);
        self.ledger
            .badges
            .iter()
            .filter(|badge| badge.date_earned.is_some_and(|earned| earned >= cutoff))
            .collect()
    }

    /// Earned badges grouped by rarity
    #[must_use]
    pub fn badges_by_rarity(&self) -> BTreeMap<BadgeRarity, Vec<&Badge>> {
        let mut grouped: BTreeMap<BadgeRarity, Vec<&Badge>> = BTreeMap::new();
        for badge in &self.ledger.badges {
            grouped.entry(badge.rarity).or_default().push(badge);
        }
        grouped
    }

    // ================================================================================================
    // Templates
    // ================================================================================================

    /// Saved templates
    #[must_use]
    pub fn templates(&self) -> &[WorkoutTemplate] {
        &self.templates
    }

    /// Template by case-insensitive name
    #[must_use]
    pub fn template_named(&self, name: &str) -> Option<&WorkoutTemplate> {
        self.templates
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Turn a recorded workout into a reusable template
    pub fn create_template_from_workout(&mut self, workout_id: Uuid) -> Option<WorkoutTemplate> {
        let workout = self.workouts.iter().find(|w| w.id() == workout_id)?;
        let template = WorkoutTemplate::new(
            format!("{}{}", workout.name(), session::TEMPLATE_NAME_SUFFIX),
            workout.kind(),
            workout.exercises().to_vec(),
            workout.duration_seconds(),
            DifficultyLevel::Intermediate,
        );
        self.templates.push(template.clone());
        self.templates_channel.save(&self.templates);
        Some(template)
    }

    /// Write every collection back
    pub fn save_all(&self) {
        self.workouts_channel.save(&self.workouts);
        self.challenges_channel.save(&self.challenges);
        self.progress_channel.save(&self.ledger);
        self.templates_channel.save(&self.templates);
    }
}

impl ActivityLog for FitnessRepository {
    fn append(&mut self, record: ActivityRecord) {
        self.add_workout(record);
    }
}
