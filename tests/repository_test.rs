// ABOUTME: Integration tests for the fitness repository and record store backends
// ABOUTME: Seeding, workout CRUD and filters, challenge lifecycle, badges, templates and persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use pulse_core::constants::channels;
use pulse_core::errors::ErrorCode;
use pulse_core::models::{
    ActivityKind, ActivityRecordBuilder, BadgeRarity, ChallengeKind, DifficultyLevel,
};
use sports_pulse::clock::VirtualScheduler;
use sports_pulse::progression::{AwardOutcome, ProgressionEngine};
use sports_pulse::repository::{CustomChallenge, FitnessRepository};
use sports_pulse::session::WorkoutSessionController;
use sports_pulse::store::{FileStore, KeyValueStore};
use std::rc::Rc;
use std::sync::Arc;

fn engine() -> ProgressionEngine {
    ProgressionEngine::new(Box::new(common::seeded_rng(21)))
}

fn challenge_id(repository: &FitnessRepository, title: &str) -> uuid::Uuid {
    repository
        .challenges()
        .iter()
        .find(|c| c.title == title)
        .map(|c| c.id)
        .unwrap_or_default()
}

/// Five runs at the epoch burning 500 calories each
fn five_runs(repository: &mut FitnessRepository) {
    for _ in 0..5 {
        repository.add_workout(common::record_at(
            ActivityKind::Running,
            Duration::zero(),
            1_800,
            500,
        ));
    }
}

#[test]
fn test_first_open_seeds_templates_and_challenges() {
    let scheduler = common::scheduler();
    let repository = common::open_repository(&scheduler, common::memory_store());

    let names: Vec<&str> = repository.templates().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Quick Cardio Blast", "Strength Foundation", "HIIT Power"]);
    assert_eq!(repository.challenges().len(), 3);
    assert_eq!(repository.global_challenges().len(), 2);
    assert_eq!(repository.personal_challenges().len(), 1);
    assert_eq!(repository.active_challenges().len(), 3);

    for challenge in repository.global_challenges() {
        assert!((100..=5_000).contains(&challenge.participant_count));
    }
    assert!(repository.workouts().is_empty());
    assert_eq!(repository.ledger().level, 1);
}

#[test]
fn test_reopen_does_not_reseed() {
    let scheduler = common::scheduler();
    let store = common::memory_store();
    let first = common::open_repository(&scheduler, Arc::clone(&store));
    let ids: Vec<_> = first.challenges().iter().map(|c| c.id).collect();

    let second = common::open_repository(&scheduler, store);
    let reopened: Vec<_> = second.challenges().iter().map(|c| c.id).collect();
    assert_eq!(ids, reopened);
    assert_eq!(second.templates().len(), 3);
}

#[test]
fn test_add_workout_updates_ledger_totals() {
    let scheduler = common::scheduler();
    let mut repository = common::open_repository(&scheduler, common::memory_store());

    repository.add_workout(common::record_at(ActivityKind::Cycling, Duration::zero(), 2_400, 320));

    let ledger = repository.ledger();
    assert_eq!(ledger.total_sessions, 1);
    assert_eq!(ledger.total_calories_burned, 320);
    assert_eq!(ledger.total_exercise_seconds, 2_400);
    assert_eq!(ledger.current_streak, 1);
}

#[test]
fn test_update_and_delete_workout() {
    let scheduler = common::scheduler();
    let mut repository = common::open_repository(&scheduler, common::memory_store());
    let record = common::record_at(ActivityKind::Yoga, Duration::zero(), 1_200, 60);
    let id = record.id();
    repository.add_workout(record.clone());

    let renamed = ActivityRecordBuilder::from_record(&record)
        .name("Evening Flow")
        .build();
    assert!(repository.update_workout(renamed));
    assert_eq!(repository.workouts()[0].name(), "Evening Flow");
    assert_eq!(repository.workouts()[0].id(), id);

    let stranger = common::record_at(ActivityKind::Yoga, Duration::zero(), 60, 5);
    assert!(!repository.update_workout(stranger));

    assert!(repository.delete_workout(id));
    assert!(!repository.delete_workout(id));
    assert!(repository.workouts().is_empty());
    // Totals already folded into the ledger stay
    assert_eq!(repository.ledger().total_sessions, 1);
}

#[test]
fn test_weekly_and_monthly_filters() {
    let scheduler = common::scheduler();
    let mut repository = common::open_repository(&scheduler, common::memory_store());

    for days in [-3, -8, -20, -40] {
        repository.add_workout(common::record_at(
            ActivityKind::Cardio,
            Duration::days(days),
            600,
            100,
        ));
    }

    assert_eq!(repository.weekly_workouts().len(), 1);
    assert_eq!(repository.monthly_workouts().len(), 3);
    assert_eq!(repository.workouts_since(60).len(), 4);
}

#[test]
fn test_workout_stats() {
    let scheduler = common::scheduler();
    let mut repository = common::open_repository(&scheduler, common::memory_store());

    let empty = repository.workout_stats();
    assert_eq!(empty.total_workouts, 0);
    assert!(empty.average_duration_seconds.abs() < f64::EPSILON);
    assert_eq!(empty.favorite_kind, ActivityKind::Strength);

    repository.add_workout(common::record_at(ActivityKind::Running, Duration::zero(), 1_200, 200));
    repository.add_workout(common::record_at(ActivityKind::Running, Duration::zero(), 1_800, 300));
    repository.add_workout(common::record_at(ActivityKind::Yoga, Duration::zero(), 600, 40));

    let stats = repository.workout_stats();
    assert_eq!(stats.total_workouts, 3);
    assert_eq!(stats.total_duration_seconds, 3_600);
    assert_eq!(stats.total_calories, 540);
    assert!((stats.average_duration_seconds - 1_200.0).abs() < f64::EPSILON);
    assert_eq!(stats.favorite_kind, ActivityKind::Running);
}

#[test]
fn test_favorite_kind_tie_goes_to_first_declared() {
    let scheduler = common::scheduler();
    let mut repository = common::open_repository(&scheduler, common::memory_store());

    repository.add_workout(common::record_at(ActivityKind::Strength, Duration::zero(), 600, 60));
    repository.add_workout(common::record_at(ActivityKind::Cardio, Duration::zero(), 600, 100));

    assert_eq!(repository.workout_stats().favorite_kind, ActivityKind::Cardio);
}

#[test]
fn test_custom_challenge_awards_ten_points_per_unit() {
    let scheduler = common::scheduler();
    let mut repository = common::open_repository(&scheduler, common::memory_store());

    let challenge = repository.create_custom_challenge(CustomChallenge {
        title: "Burn 300".to_owned(),
        description: "Three hundred calories".to_owned(),
        kind: ChallengeKind::Calories,
        target_value: 300.0,
        days: 3,
    });

    assert_eq!(challenge.reward.points, 3_000);
    assert!(!challenge.is_global);
    assert_eq!(challenge.start_date, common::epoch());
    assert_eq!(challenge.end_date, common::epoch() + Duration::days(3));
    assert_eq!(repository.challenges().len(), 4);
    assert_eq!(repository.personal_challenges().len(), 2);
    assert!(repository.challenge(challenge.id).is_some());
}

#[test]
fn test_refresh_and_complete_through_repository() {
    let scheduler = common::scheduler();
    let store = common::memory_store();
    let mut repository = common::open_repository(&scheduler, Arc::clone(&store));
    let mut engine = engine();
    five_runs(&mut repository);

    let summary = repository.refresh_challenges(&mut engine);
    assert_eq!(summary.recomputed, 3);
    assert_eq!(summary.eligible.len(), 2);

    let warrior = challenge_id(&repository, "Weekly Warrior");
    let crusher = challenge_id(&repository, "Calorie Crusher");
    let king = challenge_id(&repository, "Consistency King");

    assert!(repository.complete_challenge(&engine, warrior).is_awarded());
    assert!(repository.complete_challenge(&engine, crusher).is_awarded());
    assert_eq!(repository.complete_challenge(&engine, king), AwardOutcome::NotEligible);
    assert_eq!(
        repository.complete_challenge(&engine, warrior),
        AwardOutcome::AlreadyCompleted
    );

    assert_eq!(repository.ledger().total_points, 1_250);
    assert_eq!(repository.ledger().level, 2);
    assert_eq!(repository.completed_challenges().len(), 2);
    assert_eq!(repository.active_challenges().len(), 1);

    let stats = repository.progress_stats();
    assert_eq!(stats.completed_challenges, 2);
    assert_eq!(stats.total_badges, 2);
    assert_eq!(stats.points_to_next_level, 750);

    // Everything survives a reopen over the same store
    let reopened = common::open_repository(&scheduler, store);
    assert_eq!(reopened.ledger().total_points, 1_250);
    assert_eq!(reopened.completed_challenges().len(), 2);
    assert_eq!(reopened.workouts().len(), 5);
}

#[test]
fn test_badge_views() {
    let scheduler = common::scheduler();
    let mut repository = common::open_repository(&scheduler, common::memory_store());
    let mut engine = engine();
    five_runs(&mut repository);
    repository.refresh_challenges(&mut engine);
    repository.complete_challenge(&engine, challenge_id(&repository, "Weekly Warrior"));
    repository.complete_challenge(&engine, challenge_id(&repository, "Calorie Crusher"));

    let grouped = repository.badges_by_rarity();
    assert_eq!(grouped.get(&BadgeRarity::Common).map(Vec::len), Some(1));
    assert_eq!(grouped.get(&BadgeRarity::Rare).map(Vec::len), Some(1));
    assert!(!grouped.contains_key(&BadgeRarity::Epic));

    assert_eq!(repository.recent_badges().len(), 2);
    scheduler.advance(std::time::Duration::from_secs(8 * 24 * 3_600));
    assert!(repository.recent_badges().is_empty());
}

#[test]
fn test_template_from_workout() {
    let scheduler = common::scheduler();
    let mut repository = common::open_repository(&scheduler, common::memory_store());
    let record = common::record_at(ActivityKind::Running, Duration::zero(), 2_100, 350);
    let id = record.id();
    repository.add_workout(record);

    let template = repository.create_template_from_workout(id);
    assert_eq!(
        template.as_ref().map(|t| t.name.as_str()),
        Some("Running session Template")
    );
    assert_eq!(template.as_ref().map(|t| t.difficulty), Some(DifficultyLevel::Intermediate));
    assert_eq!(template.map(|t| t.estimated_duration_seconds), Some(2_100));
    assert_eq!(repository.templates().len(), 4);
    assert!(repository.template_named("running session template").is_some());

    assert!(repository.create_template_from_workout(uuid::Uuid::new_v4()).is_none());
}

#[test]
fn test_corrupt_collections_load_as_empty() {
    let scheduler = common::scheduler();
    let store = common::memory_store();
    store.set(channels::WORKOUTS, b"not json").ok();
    store.set(channels::CHALLENGES, b"{\"broken\":").ok();

    let repository = common::open_repository(&scheduler, store);
    assert!(repository.workouts().is_empty());
    // An unreadable challenge list is treated as empty and reseeded
    assert_eq!(repository.challenges().len(), 3);
}

#[test]
fn test_finished_session_lands_in_repository() {
    let scheduler = common::scheduler();
    let mut repository = common::open_repository(&scheduler, common::memory_store());
    let session =
        WorkoutSessionController::new(Box::new(scheduler.clock()), Rc::new(scheduler.clone()));
    let template = repository.template_named("HIIT Power").cloned();

    session.start(template.as_ref());
    scheduler.advance(std::time::Duration::from_secs(300));
    let record = session.finish(&mut repository, None);

    assert_eq!(record.map(|r| r.calories_burned()), Some(60));
    assert_eq!(repository.workouts().len(), 1);
    assert_eq!(repository.workouts()[0].kind(), ActivityKind::Hiit);
    assert_eq!(repository.ledger().total_sessions, 1);
}

#[test]
fn test_file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let scheduler = VirtualScheduler::new(common::epoch());

    {
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(dir.path()).unwrap());
        let mut repository = common::open_repository(&scheduler, store);
        repository.add_workout(common::record_at(ActivityKind::Swimming, Duration::zero(), 900, 165));
    }

    assert!(dir.path().join("workouts.json").exists());
    assert!(dir.path().join("templates.json").exists());

    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(dir.path()).unwrap());
    let repository = common::open_repository(&scheduler, store);
    assert_eq!(repository.workouts().len(), 1);
    assert_eq!(repository.workouts()[0].kind(), ActivityKind::Swimming);
    assert_eq!(repository.ledger().total_calories_burned, 165);
}

#[test]
fn test_file_store_rejects_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();

    let error = store.set("../escape", b"{}").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(store.get("").is_err());
    assert_eq!(store.get(channels::GAME_STATS).unwrap(), None);
}
