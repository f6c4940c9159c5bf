// ABOUTME: Real-time Clock implementation on tokio's local task set
// ABOUTME: Cancellation flag plus task abort guarantees no tick fires after stop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use super::{Clock, TickCallback};

/// One armed timeline: the driving task and its cancellation flag
struct Timeline {
    cancelled: Rc<Cell<bool>>,
    handle: JoinHandle<()>,
}

/// Clock driven by `tokio::time::interval`
///
/// Ticks are spawned with `tokio::task::spawn_local`, so `start` must be
/// called from inside a `tokio::task::LocalSet`. Missed ticks are delayed
/// rather than bursted, keeping one logical timeline.
#[derive(Default)]
pub struct TokioClock {
    label: &'static str,
    timeline: Option<Timeline>,
}

impl TokioClock {
    /// Create a stopped clock; `label` only appears in logs
    #[must_use]
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            timeline: None,
        }
    }
}

impl Clock for TokioClock {
    fn start(&mut self, interval: Duration, mut callback: TickCallback) {
        self.stop();
        if interval.is_zero() {
            warn!(clock = self.label, "Refusing to start clock with zero interval");
            return;
        }

        let cancelled = Rc::new(Cell::new(false));
        let flag = Rc::clone(&cancelled);
        let handle = tokio::task::spawn_local(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if flag.get() {
                    break;
                }
                callback();
                // The callback may have stopped this very clock
                if flag.get() {
                    break;
                }
            }
        });

        debug!(clock = self.label, interval_ms = interval.as_millis(), "Clock started");
        self.timeline = Some(Timeline { cancelled, handle });
    }

    fn stop(&mut self) {
        if let Some(timeline) = self.timeline.take() {
            timeline.cancelled.set(true);
            timeline.handle.abort();
            debug!(clock = self.label, "Clock stopped");
        }
    }

    fn is_running(&self) -> bool {
        self.timeline
            .as_ref()
            .is_some_and(|timeline| !timeline.cancelled.get())
    }
}

impl Drop for TokioClock {
    fn drop(&mut self) {
        self.stop();
    }
}
