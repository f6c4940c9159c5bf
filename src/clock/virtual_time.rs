// ABOUTME: Deterministic virtual scheduler and clocks for tests and simulations
// ABOUTME: Advancing the scheduler fires due ticks in time order and moves now() forward
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

use chrono::{DateTime, TimeDelta, Utc};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

use super::{Clock, TickCallback, TimeSource};

/// One clock's timeline inside the scheduler
struct Timeline {
    interval: Duration,
    next_fire: Duration,
    callback: Option<TickCallback>,
    /// Bumped on every start/stop so a callback that re-arms or stops its own
    /// clock is not put back afterwards
    generation: u64,
    running: bool,
}

struct SchedulerState {
    epoch: DateTime<Utc>,
    elapsed: Duration,
    /// Keyed by a creation sequence number; dropped clocks are removed
    timelines: BTreeMap<u64, Timeline>,
    next_id: u64,
}

/// Single virtual timeline shared by any number of clocks
///
/// Cloning yields another handle to the same timeline. Ticks due at the same
/// instant fire in clock creation order.
///
/// ```rust
/// use sports_pulse::clock::{Clock, VirtualScheduler};
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let scheduler = VirtualScheduler::new(chrono::Utc::now());
/// let mut clock = scheduler.clock();
/// let ticks = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&ticks);
/// clock.start(Duration::from_secs(1), Box::new(move || counter.set(counter.get() + 1)));
///
/// scheduler.advance(Duration::from_millis(3_500));
/// assert_eq!(ticks.get(), 3);
/// ```
#[derive(Clone)]
pub struct VirtualScheduler {
    shared: Rc<RefCell<SchedulerState>>,
}

impl VirtualScheduler {
    /// Create a scheduler whose `now()` starts at `epoch`
    #[must_use]
    pub fn new(epoch: DateTime<Utc>) -> Self {
        Self {
            shared: Rc::new(RefCell::new(SchedulerState {
                epoch,
                elapsed: Duration::ZERO,
                timelines: BTreeMap::new(),
                next_id: 0,
            })),
        }
    }

    /// Register a new, stopped clock on this timeline
    #[must_use]
    pub fn clock(&self) -> VirtualClock {
        let mut state = self.shared.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.timelines.insert(
            id,
            Timeline {
                interval: Duration::ZERO,
                next_fire: Duration::ZERO,
                callback: None,
                generation: 0,
                running: false,
            },
        );
        VirtualClock {
            shared: Rc::clone(&self.shared),
            id,
        }
    }

    /// Clocks currently registered (dropped clocks release their slot)
    #[must_use]
    pub fn clock_count(&self) -> usize {
        self.shared.borrow().timelines.len()
    }

    /// Virtual time elapsed since the epoch
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.shared.borrow().elapsed
    }

    /// Move time forward by `by`, firing every tick that falls due
    ///
    /// Returns the number of callbacks invoked.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.shared.borrow().elapsed + by;
        let mut fired = 0;

        while let Some((id, at)) = self.next_due(target) {
            let (mut callback, generation) = {
                let mut state = self.shared.borrow_mut();
                state.elapsed = at;
                let Some(timeline) = state.timelines.get_mut(&id) else {
                    continue;
                };
                timeline.next_fire = at + timeline.interval;
                (timeline.callback.take(), timeline.generation)
            };

            // No borrow is held while the callback runs: it may start or stop
            // any clock on this scheduler, including its own.
            if let Some(tick) = callback.as_mut() {
                tick();
                fired += 1;
            }

            // The clock may have been dropped by its own callback
            let mut state = self.shared.borrow_mut();
            if let Some(timeline) = state.timelines.get_mut(&id) {
                if timeline.generation == generation && timeline.running {
                    timeline.callback = callback;
                }
            }
        }

        self.shared.borrow_mut().elapsed = target;
        fired
    }

    fn next_due(&self, target: Duration) -> Option<(u64, Duration)> {
        let state = self.shared.borrow();
        state
            .timelines
            .iter()
            .filter(|(_, timeline)| timeline.running && timeline.next_fire <= target)
            .min_by_key(|(id, timeline)| (timeline.next_fire, **id))
            .map(|(id, timeline)| (*id, timeline.next_fire))
    }
}

impl TimeSource for VirtualScheduler {
    fn now(&self) -> DateTime<Utc> {
        let state = self.shared.borrow();
        let offset = TimeDelta::from_std(state.elapsed).unwrap_or_else(|_| TimeDelta::zero());
        state.epoch + offset
    }
}

/// Clock bound to a `VirtualScheduler` timeline
pub struct VirtualClock {
    shared: Rc<RefCell<SchedulerState>>,
    id: u64,
}

impl Clock for VirtualClock {
    fn start(&mut self, interval: Duration, callback: TickCallback) {
        let mut state = self.shared.borrow_mut();
        let now = state.elapsed;
        let Some(timeline) = state.timelines.get_mut(&self.id) else {
            return;
        };
        timeline.generation += 1;
        if interval.is_zero() {
            warn!(clock = self.id, "Refusing to start clock with zero interval");
            timeline.running = false;
            timeline.callback = None;
            return;
        }
        timeline.interval = interval;
        timeline.next_fire = now + interval;
        timeline.callback = Some(callback);
        timeline.running = true;
    }

    fn stop(&mut self) {
        let mut state = self.shared.borrow_mut();
        let Some(timeline) = state.timelines.get_mut(&self.id) else {
            return;
        };
        timeline.generation += 1;
        timeline.running = false;
        timeline.callback = None;
    }

    fn is_running(&self) -> bool {
        self.shared
            .borrow()
            .timelines
            .get(&self.id)
            .is_some_and(|timeline| timeline.running)
    }
}

impl Drop for VirtualClock {
    fn drop(&mut self) {
        // The scheduler may be mid-advance holding a borrow; skip cleanup then
        if let Ok(mut state) = self.shared.try_borrow_mut() {
            state.timelines.remove(&self.id);
        }
    }
}
