// ABOUTME: Main library entry point for the Sports Pulse fitness core
// ABOUTME: Workout sessions, the tap reflex game, challenge progression and persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

#![deny(unsafe_code)]

//! # Sports Pulse
//!
//! The real-time session and progression core of a personal fitness tracker.
//!
//! ## Architecture
//!
//! - **Clock**: the single timer abstraction, with a tokio implementation and
//!   a deterministic virtual scheduler
//! - **Session**: workout session state machine producing activity records
//! - **Game**: tap reflex mini-game with lives, countdown and difficulty ramp
//! - **Progression**: challenge progress, eligibility and reward transfer
//! - **Repository**: persistent collections over a keyed blob store
//!
//! ## Example Usage
//!
//! ```rust
//! use rand::SeedableRng;
//! use sports_pulse::clock::VirtualScheduler;
//! use sports_pulse::repository::FitnessRepository;
//! use sports_pulse::session::WorkoutSessionController;
//! use sports_pulse::store::MemoryStore;
//! use std::rc::Rc;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let scheduler = VirtualScheduler::new(chrono::Utc::now());
//! let time = Rc::new(scheduler.clone());
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//! let mut repository = FitnessRepository::open(Arc::new(MemoryStore::new()), time.clone(), &mut rng);
//!
//! let controller = WorkoutSessionController::new(Box::new(scheduler.clock()), time);
//! controller.start(None);
//! scheduler.advance(Duration::from_secs(90));
//! let record = controller.finish(&mut repository, None);
//!
//! assert_eq!(record.map(|r| r.duration_seconds()), Some(90));
//! assert_eq!(repository.ledger().total_sessions, 1);
//! ```

/// Cancellable periodic ticks and time sources
pub mod clock;

/// Environment-driven configuration
pub mod config;

/// Error types
pub mod errors;

/// Display helpers for durations and challenge progress
pub mod formatting;

/// Tap reflex mini-game
pub mod game;

/// Logging configuration and domain event helpers
pub mod logging;

/// Challenge progress and rewards
pub mod progression;

/// Persistent collections and derived statistics
pub mod repository;

/// Workout session controller
pub mod session;

/// Keyed blob store backends
pub mod store;
