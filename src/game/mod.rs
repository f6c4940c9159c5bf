// ABOUTME: Tap reflex mini-game controller with scoring, lives, countdown and difficulty ramp
// ABOUTME: Two Clocks drive it: a 0.1 s game tick and a spawn tick re-armed when its interval changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

//! # Tap Game
//!
//! State machine `menu -> playing -> {paused, gameOver}`, `paused -> playing`,
//! `gameOver -> {menu, playing}`.
//!
//! Each game tick first expires icons (one life each), then removes a tenth
//! of a second from the countdown, then applies the difficulty ramp. A game
//! ends on whichever of lives or time runs out first, at which point both
//! clocks stop and the [`GameLedger`] is updated and persisted.

mod ledger;
mod spawner;

pub use ledger::GameLedger;
pub use spawner::IconSpawner;

use pulse_core::constants::channels;
use pulse_core::models::{GameState, SpawnedIcon};
use rand::RngCore;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use crate::clock::{Clock, TimeSource};
use crate::config::TapGameConfig;
use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::store::{Collection, KeyValueStore};

/// Clocks, time and randomness a game runs on
pub struct GameRuntime {
    /// Drives the countdown, expiry and ramp
    pub game_clock: Box<dyn Clock>,
    /// Drives icon spawning
    pub spawn_clock: Box<dyn Clock>,
    /// Reading used for spawn and expiry timestamps
    pub time: Rc<dyn TimeSource>,
    /// Source for spawn attributes
    pub rng: Box<dyn RngCore>,
}

struct GameInner {
    this: Weak<RefCell<GameInner>>,
    config: TapGameConfig,
    state: GameState,
    score: u32,
    lives: u32,
    time_remaining_tenths: u32,
    tap_count: u32,
    icons: Vec<SpawnedIcon>,
    speed_tenths: u32,
    spawn_interval: Duration,
    game_clock: Box<dyn Clock>,
    spawn_clock: Box<dyn Clock>,
    time: Rc<dyn TimeSource>,
    spawner: IconSpawner,
    ledger: GameLedger,
    ledger_channel: Collection<GameLedger>,
}

impl GameInner {
    fn reset_round(&mut self) {
        self.score = 0;
        self.lives = self.config.initial_lives;
        self.time_remaining_tenths = self.config.duration_tenths;
        self.tap_count = 0;
        self.icons.clear();
        self.speed_tenths = self.config.initial_speed_tenths;
        self.spawn_interval = self.config.initial_spawn_interval;
    }

    fn arm_game_clock(&mut self) {
        let weak = self.this.clone();
        self.game_clock.start(
            self.config.game_tick,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().on_game_tick();
                }
            }),
        );
    }

    fn arm_spawn_clock(&mut self) {
        let weak = self.this.clone();
        self.spawn_clock.start(
            self.spawn_interval,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().on_spawn_tick();
                }
            }),
        );
    }

    fn stop_clocks(&mut self) {
        self.game_clock.stop();
        self.spawn_clock.stop();
    }

    fn on_game_tick(&mut self) {
        if self.state != GameState::Playing {
            return;
        }

        let now = self.time.now();
        let before = self.icons.len();
        self.icons.retain(|icon| !icon.is_expired(now));
        let expired = u32::try_from(before - self.icons.len()).unwrap_or(u32::MAX);
        if expired > 0 {
            self.lives = self.lives.saturating_sub(expired);
            debug!(expired, lives = self.lives, "Icons expired");
            if self.lives == 0 {
                self.game_over();
                return;
            }
        }

        self.time_remaining_tenths = self.time_remaining_tenths.saturating_sub(1);
        if self.time_remaining_tenths == 0 {
            self.game_over();
            return;
        }

        let whole_seconds = self.time_remaining_tenths / 10;
        if whole_seconds.checked_rem(self.config.ramp_period_seconds) == Some(0)
            && self.speed_tenths < self.config.max_speed_tenths
        {
            self.ramp_difficulty();
        }
    }

    fn ramp_difficulty(&mut self) {
        self.speed_tenths += 1;
        let next = self
            .spawn_interval
            .saturating_sub(self.config.spawn_interval_step)
            .max(self.config.min_spawn_interval);
        debug!(
            speed_tenths = self.speed_tenths,
            spawn_interval_ms = next.as_millis(),
            "Difficulty increased"
        );
        if next != self.spawn_interval {
            self.spawn_interval = next;
            self.arm_spawn_clock();
        }
    }

    fn on_spawn_tick(&mut self) {
        if self.state != GameState::Playing || self.icons.len() >= self.config.max_active_icons {
            return;
        }
        let icon = self.spawner.spawn(self.time.now());
        debug!(icon_id = %icon.id, kind = ?icon.kind, lifespan = icon.lifespan_seconds, "Icon spawned");
        self.icons.push(icon);
    }

    fn game_over(&mut self) {
        self.stop_clocks();
        self.state = GameState::GameOver;
        self.ledger.record_game(self.score, self.tap_count);
        self.ledger_channel.save(&self.ledger);
        AppLogger::log_game_over(
            self.score,
            self.tap_count,
            self.ledger.best_score,
            self.ledger.games_played,
        );
    }
}

/// Controller for the tap reflex game
///
/// Like the workout controller, every operation that does not apply to the
/// current state returns `false` and changes nothing.
pub struct TapGameController {
    inner: Rc<RefCell<GameInner>>,
}

impl TapGameController {
    /// Create a controller in the menu state, loading the ledger from `store`
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when `config` fails [`TapGameConfig::validate`]
    pub fn new(
        config: TapGameConfig,
        runtime: GameRuntime,
        store: Arc<dyn KeyValueStore>,
    ) -> AppResult<Self> {
        config.validate()?;
        let ledger_channel: Collection<GameLedger> = Collection::new(store, channels::GAME_STATS);
        let ledger = ledger_channel.load().normalized();
        let spawner = IconSpawner::new(&config, runtime.rng);

        let inner = Rc::new_cyclic(|this| {
            RefCell::new(GameInner {
                this: this.clone(),
                state: GameState::Menu,
                score: 0,
                lives: config.initial_lives,
                time_remaining_tenths: config.duration_tenths,
                tap_count: 0,
                icons: Vec::new(),
                speed_tenths: config.initial_speed_tenths,
                spawn_interval: config.initial_spawn_interval,
                game_clock: runtime.game_clock,
                spawn_clock: runtime.spawn_clock,
                time: runtime.time,
                spawner,
                ledger,
                ledger_channel,
                config,
            })
        });
        Ok(Self { inner })
    }

    /// Begin a new game from the menu or after a game over
    pub fn start(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        if !matches!(inner.state, GameState::Menu | GameState::GameOver) {
            debug!(state = ?inner.state, "Ignoring start");
            return false;
        }
        inner.reset_round();
        inner.state = GameState::Playing;
        inner.arm_game_clock();
        inner.arm_spawn_clock();
        info!(
            lives = inner.lives,
            duration_tenths = inner.time_remaining_tenths,
            "Tap game started"
        );
        true
    }

    /// Freeze both ticks
    pub fn pause(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.state != GameState::Playing {
            return false;
        }
        inner.stop_clocks();
        inner.state = GameState::Paused;
        true
    }

    /// Restart both ticks where they left off
    pub fn resume(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.state != GameState::Paused {
            return false;
        }
        inner.state = GameState::Playing;
        inner.arm_game_clock();
        inner.arm_spawn_clock();
        true
    }

    /// Tap the icon with `id`; a missing icon is a no-op
    pub fn tap_icon(&self, id: Uuid) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.state != GameState::Playing {
            return false;
        }
        let Some(index) = inner.icons.iter().position(|icon| icon.id == id) else {
            return false;
        };
        inner.icons.swap_remove(index);
        inner.score += inner.config.points_per_tap;
        inner.tap_count += 1;
        true
    }

    /// Leave the current game without touching the ledger
    pub fn back_to_menu(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.state == GameState::Menu {
            return false;
        }
        inner.stop_clocks();
        inner.icons.clear();
        inner.state = GameState::Menu;
        true
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> GameState {
        self.inner.borrow().state
    }

    /// Current score
    #[must_use]
    pub fn score(&self) -> u32 {
        self.inner.borrow().score
    }

    /// Remaining lives
    #[must_use]
    pub fn lives(&self) -> u32 {
        self.inner.borrow().lives
    }

    /// Seconds left on the countdown
    #[must_use]
    pub fn time_remaining(&self) -> f64 {
        f64::from(self.inner.borrow().time_remaining_tenths) / 10.0
    }

    /// Taps this game
    #[must_use]
    pub fn tap_count(&self) -> u32 {
        self.inner.borrow().tap_count
    }

    /// Snapshot of the icons on screen
    #[must_use]
    pub fn icons(&self) -> Vec<SpawnedIcon> {
        self.inner.borrow().icons.clone()
    }

    /// Difficulty multiplier, 1.0 at start
    #[must_use]
    pub fn game_speed(&self) -> f64 {
        f64::from(self.inner.borrow().speed_tenths) / 10.0
    }

    /// Current spawn cadence
    #[must_use]
    pub fn spawn_interval(&self) -> Duration {
        self.inner.borrow().spawn_interval
    }

    /// Lifetime statistics
    #[must_use]
    pub fn ledger(&self) -> GameLedger {
        self.inner.borrow().ledger
    }
}

impl Drop for TapGameController {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.stop_clocks();
        }
    }
}
