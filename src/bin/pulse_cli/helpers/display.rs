// ABOUTME: Output formatting helpers for pulse-cli
// ABOUTME: Consistent display of progress, challenges, workouts and game results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

use chrono::{DateTime, Utc};
use pulse_core::models::{ActivityRecord, Challenge};
use sports_pulse::formatting::{format_elapsed, format_progress, format_time_remaining};
use sports_pulse::game::GameLedger;
use sports_pulse::progression::ProgressStats;
use sports_pulse::repository::WorkoutStats;

/// Print level, points and workout totals
pub fn display_status(progress: &ProgressStats, workouts: &WorkoutStats, weekly: usize, game: &GameLedger) {
    println!("\nProgress");
    println!("{}", "=".repeat(50));
    println!(
        "   Level: {} ({:.0}%, {} points to next)",
        progress.level, progress.level_progress, progress.points_to_next_level
    );
    println!("   Points: {}", progress.total_points);
    println!(
        "   Streak: {} (best {})",
        progress.current_streak, progress.longest_streak
    );
    println!("   Badges: {}", progress.total_badges);
    println!(
        "   Challenges: {} active, {}/{} completed ({:.0}%)",
        progress.active_challenges,
        progress.completed_challenges,
        progress.total_challenges,
        progress.completion_rate
    );

    println!("\nWorkouts");
    println!("{}", "=".repeat(50));
    println!("   Total: {} ({weekly} this week)", workouts.total_workouts);
    println!(
        "   Time: {} (average {})",
        format_elapsed(workouts.total_duration_seconds),
        format_elapsed(workouts.average_duration_seconds as u64)
    );
    println!("   Calories: {}", workouts.total_calories);
    println!("   Favorite: {}", workouts.favorite_kind.display_name());

    println!("\nTap Game");
    println!("{}", "=".repeat(50));
    println!("   Best score: {}", game.best_score);
    println!("   Games played: {}", game.games_played);
    println!("   Player level: {}", game.player_level);
}

/// Print one line per challenge
pub fn display_challenges(challenges: &[Challenge], now: DateTime<Utc>) {
    if challenges.is_empty() {
        println!("No challenges.");
        return;
    }
    for challenge in challenges {
        let marker = if challenge.is_completed {
            "done"
        } else if challenge.is_eligible() {
            "ready"
        } else if challenge.is_expired(now) {
            "expired"
        } else {
            "open"
        };
        let scope = if challenge.is_global {
            format!("global, {} participants", challenge.participant_count)
        } else {
            "personal".to_owned()
        };
        println!(
            "[{marker:>7}] {}  {}  ({:.0}%)  {}  [{scope}]  {} pts",
            challenge.title,
            format_progress(challenge),
            challenge.progress_percentage(),
            format_time_remaining(challenge, now),
            challenge.reward.points
        );
        println!("          id: {}", challenge.id);
    }
}

/// Print a finished workout
pub fn display_workout(record: &ActivityRecord) {
    println!("\nWorkout recorded");
    println!("{}", "=".repeat(50));
    println!("   Name: {}", record.name());
    println!("   Kind: {}", record.kind().display_name());
    println!("   Duration: {}", format_elapsed(record.duration_seconds()));
    println!("   Calories: {}", record.calories_burned());
    println!("   Exercises: {}", record.exercises().len());
}

/// Print a finished game
pub fn display_game_result(score: u32, taps: u32, ledger: &GameLedger) {
    println!("\nGame over");
    println!("{}", "=".repeat(50));
    println!("   Score: {score}");
    println!("   Taps: {taps}");
    println!("   Best score: {}", ledger.best_score);
    println!("   Games played: {}", ledger.games_played);
    println!("   Player level: {}", ledger.player_level);
}
