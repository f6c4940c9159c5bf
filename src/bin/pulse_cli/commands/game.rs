// ABOUTME: Simulated tap game command for pulse-cli
// ABOUTME: Plays a full game on the virtual scheduler, tapping the oldest icon at a fixed cadence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

use chrono::Utc;
use pulse_core::models::GameState;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sports_pulse::clock::VirtualScheduler;
use sports_pulse::config::AppConfig;
use sports_pulse::errors::AppResult;
use sports_pulse::game::{GameRuntime, TapGameController};
use sports_pulse::repository::FitnessRepository;
use std::rc::Rc;
use std::time::Duration;
use tracing::debug;

type Result<T> = AppResult<T>;

use crate::helpers::display::display_game_result;

/// Play one game, tapping every `tap_every_ms` of virtual time
pub fn simulate(
    repository: &FitnessRepository,
    config: &AppConfig,
    seed: u64,
    tap_every_ms: u64,
) -> Result<()> {
    let scheduler = VirtualScheduler::new(Utc::now());
    let runtime = GameRuntime {
        game_clock: Box::new(scheduler.clock()),
        spawn_clock: Box::new(scheduler.clock()),
        time: Rc::new(scheduler.clone()),
        rng: Box::new(ChaCha8Rng::seed_from_u64(seed)),
    };
    let game = TapGameController::new(config.game.clone(), runtime, repository.store())?;
    game.start();

    let step = Duration::from_millis(tap_every_ms.max(1));
    while game.state() == GameState::Playing {
        scheduler.advance(step);
        if let Some(oldest) = game.icons().iter().min_by_key(|icon| icon.spawned_at) {
            game.tap_icon(oldest.id);
        }
        debug!(
            elapsed_ms = scheduler.elapsed().as_millis(),
            score = game.score(),
            lives = game.lives(),
            "Simulation step"
        );
    }

    display_game_result(game.score(), game.tap_count(), &game.ledger());
    Ok(())
}
