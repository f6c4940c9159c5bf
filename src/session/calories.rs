// ABOUTME: Calorie burn heuristic for finished workout sessions
// ABOUTME: Fixed per-minute rate by activity kind, floored to whole calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

use pulse_core::models::ActivityKind;

/// Estimate calories for `elapsed_seconds` of `kind`
///
/// `floor(minutes * rate)`, computed in integers so the result is exact.
#[must_use]
pub fn estimate_calories(kind: ActivityKind, elapsed_seconds: u64) -> u64 {
    elapsed_seconds.saturating_mul(kind.calories_per_minute()) / 60
}

/// Use the caller's figure when positive, otherwise the heuristic
#[must_use]
pub fn resolve_calories(kind: ActivityKind, elapsed_seconds: u64, reported: Option<u64>) -> u64 {
    match reported {
        Some(calories) if calories > 0 => calories,
        _ => estimate_calories(kind, elapsed_seconds),
    }
}
