// ABOUTME: Default workout templates and starter challenges seeded on first run
// ABOUTME: Only applied when the corresponding stored collection is empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

use chrono::{DateTime, Utc};
use pulse_core::constants::progression;
use pulse_core::models::{
    ActivityKind, Badge, BadgeRarity, Challenge, ChallengeBuilder, ChallengeKind,
    ChallengeReward, DifficultyLevel, Exercise, WorkoutTemplate,
};
use rand::{Rng, RngCore};

fn exercise(name: &str, sets: u32, reps: u32, rest_seconds: u32) -> Exercise {
    Exercise::new(name).with_sets(sets, reps).with_rest(rest_seconds)
}

/// Starter templates
pub fn default_templates() -> Vec<WorkoutTemplate> {
    vec![
        WorkoutTemplate::new(
            "Quick Cardio Blast",
            ActivityKind::Cardio,
            vec![
                exercise("Jumping Jacks", 3, 30, 30),
                exercise("High Knees", 3, 30, 30),
                exercise("Burpees", 3, 10, 45),
            ],
            15 * 60,
            DifficultyLevel::Beginner,
        ),
        WorkoutTemplate::new(
            "Strength Foundation",
            ActivityKind::Strength,
            vec![
                exercise("Push-ups", 3, 12, 60),
                exercise("Squats", 3, 15, 60),
                exercise("Plank", 3, 1, 60),
            ],
            20 * 60,
            DifficultyLevel::Beginner,
        ),
        WorkoutTemplate::new(
            "HIIT Power",
            ActivityKind::Hiit,
            vec![
                exercise("Mountain Climbers", 4, 20, 30),
                exercise("Jump Squats", 4, 15, 30),
                exercise("Push-up to T", 4, 10, 45),
            ],
            30 * 60,
            DifficultyLevel::Intermediate,
        ),
    ]
}

/// Starter challenges, each running a week from `now`
pub fn default_challenges(now: DateTime<Utc>, rng: &mut dyn RngCore) -> Vec<Challenge> {
    let days = progression::DEFAULT_CHALLENGE_DAYS;
    let (low, high) = progression::GLOBAL_PARTICIPANTS_RANGE;

    vec![
        ChallengeBuilder::new("Weekly Warrior", ChallengeKind::SessionCount, 5.0, now, days)
            .description("Complete 5 workouts this week")
            .reward(ChallengeReward::points(500).with_badge(Badge::new(
                "Weekly Warrior",
                "Completed 5 workouts in a week",
                "star.fill",
                "#F39C12",
                BadgeRarity::Common,
            )))
            .global(rng.gen_range(low..=high))
            .build(),
        ChallengeBuilder::new("Calorie Crusher", ChallengeKind::Calories, 2000.0, now, days)
            .description("Burn 2000 calories through exercise")
            .reward(ChallengeReward::points(750).with_badge(Badge::new(
                "Calorie Crusher",
                "Burned 2000 calories in a week",
                "flame.fill",
                "#E74C3C",
                BadgeRarity::Rare,
            )))
            .global(rng.gen_range(low..=high))
            .build(),
        ChallengeBuilder::new("Consistency King", ChallengeKind::Streak, 7.0, now, days)
            .description("Maintain a 7-day workout streak")
            .reward(ChallengeReward::points(1000).with_badge(Badge::new(
                "Consistency King",
                "Maintained a 7-day workout streak",
                "crown.fill",
                "#9B59B6",
                BadgeRarity::Epic,
            )))
            .build(),
    ]
}
