// ABOUTME: Integration tests for the workout session controller
// ABOUTME: State transitions, tick counting, calorie resolution and exercise editing on virtual time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors
#![allow(missing_docs)]

mod common;

use pulse_core::models::{
    ActivityKind, ActivityRecord, DifficultyLevel, Exercise, WorkoutTemplate,
};
use sports_pulse::clock::VirtualScheduler;
use sports_pulse::session::{SessionPhase, WorkoutSessionController};
use std::rc::Rc;
use std::time::Duration;

fn controller(scheduler: &VirtualScheduler) -> WorkoutSessionController {
    WorkoutSessionController::new(Box::new(scheduler.clock()), Rc::new(scheduler.clone()))
}

fn circuit_template() -> WorkoutTemplate {
    WorkoutTemplate::new(
        "Morning Circuit",
        ActivityKind::Hiit,
        vec![
            Exercise::new("Burpees").with_sets(3, 10),
            Exercise::new("Lunges").with_sets(3, 12),
        ],
        900,
        DifficultyLevel::Intermediate,
    )
}

#[test]
fn test_five_ticks_then_finish_records_five_seconds() {
    let scheduler = common::scheduler();
    let session = controller(&scheduler);
    let mut history: Vec<ActivityRecord> = Vec::new();

    assert!(session.start(None));
    scheduler.advance(Duration::from_secs(5));
    let record = session.finish(&mut history, None);

    let record = record.as_ref();
    assert_eq!(record.map(ActivityRecord::duration_seconds), Some(5));
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].timestamp(), common::epoch());
    assert_eq!(session.phase(), SessionPhase::Idle);
}

#[test]
fn test_custom_workout_defaults() {
    let scheduler = common::scheduler();
    let session = controller(&scheduler);

    session.start(None);
    let current = session.session();
    assert_eq!(current.as_ref().map(|s| s.name.as_str()), Some("Custom Workout"));
    assert_eq!(current.as_ref().map(|s| s.kind), Some(ActivityKind::Strength));
    assert_eq!(current.map(|s| s.exercises.len()), Some(0));
}

#[test]
fn test_template_is_copied_into_session() {
    let scheduler = common::scheduler();
    let session = controller(&scheduler);
    let template = circuit_template();

    session.start(Some(&template));
    let current = session.session();
    assert_eq!(current.as_ref().map(|s| s.name.clone()), Some(template.name.clone()));
    assert_eq!(current.as_ref().map(|s| s.kind), Some(ActivityKind::Hiit));
    assert_eq!(current.map(|s| s.exercises), Some(template.exercises));
}

#[test]
fn test_start_only_from_idle() {
    let scheduler = common::scheduler();
    let session = controller(&scheduler);

    assert!(session.start(None));
    assert!(!session.start(Some(&circuit_template())));
    assert!(session.pause());
    assert!(!session.start(None));
    assert_eq!(session.session().map(|s| s.name), Some("Custom Workout".to_owned()));
}

#[test]
fn test_pause_freezes_elapsed_time() {
    let scheduler = common::scheduler();
    let session = controller(&scheduler);

    session.start(None);
    scheduler.advance(Duration::from_secs(3));
    assert!(session.pause());
    assert_eq!(session.phase(), SessionPhase::Paused);
    scheduler.advance(Duration::from_secs(10));
    assert_eq!(session.elapsed_seconds(), 3);

    assert!(session.resume());
    scheduler.advance(Duration::from_secs(2));
    assert_eq!(session.elapsed_seconds(), 5);

    assert!(!session.resume());
}

#[test]
fn test_cancel_records_nothing() {
    let scheduler = common::scheduler();
    let session = controller(&scheduler);
    let mut history: Vec<ActivityRecord> = Vec::new();

    session.start(None);
    scheduler.advance(Duration::from_secs(4));
    assert!(session.cancel());
    scheduler.advance(Duration::from_secs(4));

    assert!(history.is_empty());
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert!(session.finish(&mut history, None).is_none());
    assert!(history.is_empty());
    assert!(!session.cancel());
}

#[test]
fn test_calories_estimated_or_overridden() {
    let scheduler = common::scheduler();
    let session = controller(&scheduler);
    let mut history: Vec<ActivityRecord> = Vec::new();

    // Strength at 6 per minute for 10 minutes
    session.start(None);
    scheduler.advance(Duration::from_secs(600));
    let estimated = session.finish(&mut history, None);
    assert_eq!(estimated.map(|r| r.calories_burned()), Some(60));

    // A zero override falls back to the estimate
    session.start(None);
    scheduler.advance(Duration::from_secs(90));
    let zero = session.finish(&mut history, Some(0));
    assert_eq!(zero.map(|r| r.calories_burned()), Some(9));

    session.start(None);
    scheduler.advance(Duration::from_secs(90));
    let manual = session.finish(&mut history, Some(250));
    assert_eq!(manual.map(|r| r.calories_burned()), Some(250));
}

#[test]
fn test_exercise_editing_requires_session() {
    let scheduler = common::scheduler();
    let session = controller(&scheduler);
    let squat = Exercise::new("Squats").with_sets(4, 8);

    assert!(!session.add_exercise(squat.clone()));

    session.start(None);
    assert!(session.add_exercise(squat.clone()));
    assert!(session.update_exercise(squat.clone().with_weight(60.0)));
    assert!(!session.update_exercise(Exercise::new("Unknown")));

    // Paused sessions remain editable
    session.pause();
    let exercises = session.session().map(|s| s.exercises).unwrap_or_default();
    assert_eq!(exercises.len(), 1);
    assert!((exercises[0].weight_kg - 60.0).abs() < f64::EPSILON);

    assert!(session.remove_exercise(squat.id));
    assert!(!session.remove_exercise(squat.id));
}

#[test]
fn test_finished_record_keeps_exercises() {
    let scheduler = common::scheduler();
    let session = controller(&scheduler);
    let mut history: Vec<ActivityRecord> = Vec::new();

    session.start(Some(&circuit_template()));
    session.add_exercise(Exercise::new("Plank"));
    scheduler.advance(Duration::from_secs(60));
    session.finish(&mut history, None);

    assert_eq!(history[0].exercises().len(), 3);
    assert_eq!(history[0].kind(), ActivityKind::Hiit);
    assert_eq!(history[0].calories_burned(), 12);
}
