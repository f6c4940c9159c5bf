// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides virtual time, seeded randomness, stores and record builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `sports_pulse`

use chrono::{DateTime, Duration, TimeZone, Utc};
use pulse_core::models::{ActivityKind, ActivityRecord, ActivityRecordBuilder};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sports_pulse::clock::VirtualScheduler;
use sports_pulse::config::TapGameConfig;
use sports_pulse::game::{GameRuntime, TapGameController};
use sports_pulse::repository::FitnessRepository;
use sports_pulse::store::{KeyValueStore, MemoryStore};
use std::rc::Rc;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed instant every virtual timeline starts from (a Monday, midday UTC)
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Virtual scheduler starting at `epoch()`
pub fn scheduler() -> VirtualScheduler {
    init_test_logging();
    VirtualScheduler::new(epoch())
}

/// Deterministic random source
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Fresh in-memory store
pub fn memory_store() -> Arc<dyn KeyValueStore> {
    Arc::new(MemoryStore::new())
}

/// Activity record `offset` after the epoch
pub fn record_at(
    kind: ActivityKind,
    offset: Duration,
    duration_seconds: u64,
    calories: u64,
) -> ActivityRecord {
    ActivityRecordBuilder::new(format!("{kind:?} session"), kind, epoch() + offset)
        .duration_seconds(duration_seconds)
        .calories_burned(calories)
        .build()
}

/// Repository over `store` whose clock is `scheduler`
pub fn open_repository(
    scheduler: &VirtualScheduler,
    store: Arc<dyn KeyValueStore>,
) -> FitnessRepository {
    let mut rng = seeded_rng(11);
    FitnessRepository::open(store, Rc::new(scheduler.clone()), &mut rng)
}

/// Tap game on `scheduler`: game clock registered before the spawn clock
pub fn tap_game(
    scheduler: &VirtualScheduler,
    config: TapGameConfig,
    store: Arc<dyn KeyValueStore>,
    seed: u64,
) -> TapGameController {
    let runtime = GameRuntime {
        game_clock: Box::new(scheduler.clock()),
        spawn_clock: Box::new(scheduler.clock()),
        time: Rc::new(scheduler.clone()),
        rng: Box::new(seeded_rng(seed)),
    };
    TapGameController::new(config, runtime, store).unwrap()
}
