// ABOUTME: Progress and challenge commands for pulse-cli
// ABOUTME: Handles status, listing, refresh, completion and custom challenge creation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

use chrono::Utc;
use pulse_core::constants::channels;
use pulse_core::models::ChallengeKind;
use sports_pulse::errors::{AppError, AppResult};
use sports_pulse::game::GameLedger;
use sports_pulse::progression::{AwardOutcome, ProgressionEngine};
use sports_pulse::repository::{CustomChallenge, FitnessRepository};
use sports_pulse::store::Collection;
use tracing::{info, warn};
use uuid::Uuid;

use crate::helpers::display::{display_challenges, display_status};

type Result<T> = AppResult<T>;

/// Show overall progress
pub fn status(repository: &FitnessRepository) {
    let game: Collection<GameLedger> = Collection::new(repository.store(), channels::GAME_STATS);
    display_status(
        &repository.progress_stats(),
        &repository.workout_stats(),
        repository.weekly_workouts().len(),
        &game.load().normalized(),
    );
}

/// List all challenges
pub fn challenges(repository: &FitnessRepository) {
    display_challenges(repository.challenges(), Utc::now());
}

/// Recompute progress and report eligible challenges
pub fn refresh(repository: &mut FitnessRepository) {
    let mut engine = ProgressionEngine::from_entropy();
    let summary = repository.refresh_challenges(&mut engine);
    info!(recomputed = summary.recomputed, "Challenges refreshed");

    display_challenges(repository.challenges(), Utc::now());
    if summary.eligible.is_empty() {
        println!("\nNo challenge is ready to complete yet.");
    } else {
        println!("\nReady to complete:");
        for id in summary.eligible {
            println!("   pulse-cli complete {id}");
        }
    }
}

/// Claim the reward of an eligible challenge
pub fn complete(repository: &mut FitnessRepository, id: Uuid) {
    let engine = ProgressionEngine::from_entropy();
    match repository.complete_challenge(&engine, id) {
        AwardOutcome::Awarded {
            points,
            badge,
            level,
        } => {
            println!("Challenge completed: +{points} points, level {level}");
            if let Some(badge) = badge {
                println!("Badge earned: {} ({:?})", badge.name, badge.rarity);
            }
        }
        AwardOutcome::AlreadyCompleted => println!("Challenge {id} is already completed."),
        AwardOutcome::NotEligible => {
            println!("Challenge {id} has not reached its target. Run `pulse-cli refresh` first.");
        }
        AwardOutcome::NotFound => {
            warn!(challenge_id = %id, "Unknown challenge");
            println!("No challenge with id {id}.");
        }
    }
}

/// Create a personal challenge
pub fn create(
    repository: &mut FitnessRepository,
    title: String,
    kind: &str,
    target: f64,
    days: i64,
    description: Option<String>,
) -> Result<()> {
    let kind = ChallengeKind::parse(kind).ok_or_else(|| {
        AppError::invalid_input(format!(
            "unknown challenge kind '{kind}' (expected workouts, calories, duration, steps, distance or streak)"
        ))
    })?;
    if !target.is_finite() || target <= 0.0 {
        return Err(AppError::invalid_input("target must be a positive number"));
    }
    if days <= 0 {
        return Err(AppError::invalid_input("days must be positive"));
    }

    let challenge = repository.create_custom_challenge(CustomChallenge {
        description: description.unwrap_or_else(|| format!("Reach {target} {}", kind.default_unit())),
        title,
        kind,
        target_value: target,
        days,
    });
    println!(
        "Created '{}' ({} {} in {days} days, {} points)",
        challenge.title, challenge.target_value, challenge.unit, challenge.reward.points
    );
    println!("   id: {}", challenge.id);
    if kind.is_simulated() {
        println!("   note: {} progress is estimated, not measured from workouts", kind.default_unit());
    }
    Ok(())
}
