// ABOUTME: Lifetime tap game statistics: best score, games played, taps and player level
// ABOUTME: Updated once per finished game and persisted on the gameStats channel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

use pulse_core::constants::game;
use serde::{Deserialize, Serialize};

/// Lifetime tap game statistics, independent from the reward ledger
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameLedger {
    /// Highest final score
    pub best_score: u32,
    /// Finished games
    pub games_played: u64,
    /// Taps across all games
    pub total_taps: u64,
    /// `floor(total_taps / 100) + 1`
    pub player_level: u64,
}

impl Default for GameLedger {
    fn default() -> Self {
        Self {
            best_score: 0,
            games_played: 0,
            total_taps: 0,
            player_level: 1,
        }
    }
}

impl GameLedger {
    /// Level for a lifetime tap count
    #[must_use]
    pub const fn level_for_taps(total_taps: u64) -> u64 {
        total_taps / game::TAPS_PER_LEVEL + 1
    }

    /// Fold a finished game into the ledger
    pub fn record_game(&mut self, score: u32, taps: u32) {
        self.games_played += 1;
        self.total_taps += u64::from(taps);
        self.best_score = self.best_score.max(score);
        self.player_level = Self::level_for_taps(self.total_taps);
    }

    /// Repair a loaded ledger whose stored level is missing or zero
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.player_level = self.player_level.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_game_updates_all_totals() {
        let mut ledger = GameLedger::default();
        ledger.record_game(120, 12);
        ledger.record_game(80, 95);
        assert_eq!(ledger.games_played, 2);
        assert_eq!(ledger.total_taps, 107);
        assert_eq!(ledger.best_score, 120);
        assert_eq!(ledger.player_level, 2);
    }

    #[test]
    fn test_missing_fields_decode_to_defaults() {
        let ledger: GameLedger = serde_json::from_str(r#"{"best_score": 40}"#).unwrap();
        assert_eq!(ledger.best_score, 40);
        assert_eq!(ledger.player_level, 1);

        let zero: GameLedger = serde_json::from_str(r#"{"player_level": 0}"#).unwrap();
        assert_eq!(zero.normalized().player_level, 1);
    }
}
