// ABOUTME: Cancellable periodic-tick abstraction shared by the session and game controllers
// ABOUTME: Defines the Clock and TimeSource traits plus the system time source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

//! # Clock
//!
//! Every timer in the crate goes through [`Clock`]. A clock owns at most one
//! timeline: `start` replaces any running timeline, `stop` guarantees no
//! further callback fires (including ticks that were already due). Both are
//! safe to call from inside the clock's own callback.
//!
//! Two implementations are provided:
//!
//! - [`TokioClock`]: real time, driven by `tokio::time::interval` on a
//!   single-threaded `LocalSet`
//! - [`VirtualClock`]: handed out by a [`VirtualScheduler`], which advances a
//!   virtual timeline synchronously for deterministic tests and simulations

mod tokio_clock;
mod virtual_time;

pub use tokio_clock::TokioClock;
pub use virtual_time::{VirtualClock, VirtualScheduler};

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Callback invoked on every tick
///
/// Callbacks run on the scheduling thread and are never `Send`; controllers
/// capture `Weak` handles to their own state.
pub type TickCallback = Box<dyn FnMut()>;

/// A cancellable periodic timer
pub trait Clock {
    /// Begin firing `callback` every `interval`, replacing any running timeline
    fn start(&mut self, interval: Duration, callback: TickCallback);

    /// Cancel the timeline; no further callback fires after this returns
    fn stop(&mut self);

    /// Whether a timeline is currently armed
    fn is_running(&self) -> bool;
}

/// Source of wall-clock readings
pub trait TimeSource {
    /// Current time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
