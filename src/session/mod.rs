// ABOUTME: Workout session controller tracking elapsed time and exercises of one live session
// ABOUTME: Idle/active/paused state machine driven by a one-second Clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

//! # Workout Sessions
//!
//! [`WorkoutSessionController`] owns at most one [`WorkoutSession`]. While
//! active, a one-second [`Clock`] increments its elapsed time. Finishing turns
//! the session into an [`ActivityRecord`] appended to an [`ActivityLog`];
//! cancelling discards it.
//!
//! Operations that do not apply to the current state return `false` / `None`
//! and leave everything untouched.

mod calories;

pub use calories::{estimate_calories, resolve_calories};

use pulse_core::constants::session;
use pulse_core::models::{
    ActivityKind, ActivityRecord, ActivityRecordBuilder, Exercise, WorkoutSession,
    WorkoutTemplate,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use crate::clock::{Clock, TimeSource};

/// Destination for finished sessions
pub trait ActivityLog {
    /// Append a finished session to the permanent history
    fn append(&mut self, record: ActivityRecord);
}

impl ActivityLog for Vec<ActivityRecord> {
    fn append(&mut self, record: ActivityRecord) {
        self.push(record);
    }
}

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No session
    Idle,
    /// Session running, clock ticking
    Active,
    /// Session kept, clock stopped
    Paused,
}

struct SessionInner {
    phase: SessionPhase,
    session: Option<WorkoutSession>,
    clock: Box<dyn Clock>,
    time: Rc<dyn TimeSource>,
    tick_interval: Duration,
}

impl SessionInner {
    fn on_tick(&mut self) {
        if let Some(current) = self.session.as_mut() {
            current.elapsed_seconds += 1;
        }
    }
}

/// State machine for one live workout session
pub struct WorkoutSessionController {
    inner: Rc<RefCell<SessionInner>>,
}

impl WorkoutSessionController {
    /// Create an idle controller ticking once per second
    #[must_use]
    pub fn new(clock: Box<dyn Clock>, time: Rc<dyn TimeSource>) -> Self {
        Self::with_tick_interval(
            clock,
            time,
            Duration::from_millis(session::TICK_INTERVAL_MS),
        )
    }

    /// Create an idle controller with a custom tick interval (one tick = one counted second)
    #[must_use]
    pub fn with_tick_interval(
        clock: Box<dyn Clock>,
        time: Rc<dyn TimeSource>,
        tick_interval: Duration,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SessionInner {
                phase: SessionPhase::Idle,
                session: None,
                clock,
                time,
                tick_interval,
            })),
        }
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.inner.borrow().phase
    }

    /// Snapshot of the live session
    #[must_use]
    pub fn session(&self) -> Option<WorkoutSession> {
        self.inner.borrow().session.clone()
    }

    /// Seconds counted so far (0 when idle)
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.inner
            .borrow()
            .session
            .as_ref()
            .map_or(0, |current| current.elapsed_seconds)
    }

    /// Start a session, copying the template if given; only valid when idle
    pub fn start(&self, template: Option<&WorkoutTemplate>) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.phase != SessionPhase::Idle {
            debug!(phase = ?inner.phase, "Ignoring start: session already exists");
            return false;
        }

        let (name, kind, exercises) = template.map_or_else(
            || {
                (
                    session::CUSTOM_WORKOUT_NAME.to_owned(),
                    ActivityKind::Strength,
                    Vec::new(),
                )
            },
            |t| (t.name.clone(), t.kind, t.exercises.clone()),
        );

        info!(name = %name, kind = ?kind, "Workout session started");
        inner.session = Some(WorkoutSession {
            name,
            kind,
            exercises,
            started_at: inner.time.now(),
            elapsed_seconds: 0,
            is_active: true,
        });
        inner.phase = SessionPhase::Active;
        self.arm_clock(&mut inner);
        true
    }

    /// Stop the clock, keeping session data
    pub fn pause(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.phase != SessionPhase::Active {
            return false;
        }
        inner.clock.stop();
        inner.phase = SessionPhase::Paused;
        if let Some(current) = inner.session.as_mut() {
            current.is_active = false;
        }
        debug!("Workout session paused");
        true
    }

    /// Restart the clock after a pause
    pub fn resume(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.phase != SessionPhase::Paused {
            return false;
        }
        inner.phase = SessionPhase::Active;
        if let Some(current) = inner.session.as_mut() {
            current.is_active = true;
        }
        self.arm_clock(&mut inner);
        debug!("Workout session resumed");
        true
    }

    /// Finish the session and append it to `log`
    ///
    /// A positive `calories_override` is recorded as-is; otherwise calories
    /// are estimated from the kind and elapsed time.
    pub fn finish(
        &self,
        log: &mut dyn ActivityLog,
        calories_override: Option<u64>,
    ) -> Option<ActivityRecord> {
        let finished = {
            let mut inner = self.inner.borrow_mut();
            let finished = inner.session.take()?;
            inner.clock.stop();
            inner.phase = SessionPhase::Idle;
            finished
        };

        let calories = resolve_calories(
            finished.kind,
            finished.elapsed_seconds,
            calories_override,
        );
        let record = ActivityRecordBuilder::new(finished.name, finished.kind, finished.started_at)
            .duration_seconds(finished.elapsed_seconds)
            .calories_burned(calories)
            .exercises(finished.exercises)
            .build();

        info!(
            record_id = %record.id(),
            duration_seconds = record.duration_seconds(),
            calories = record.calories_burned(),
            "Workout session finished"
        );
        log.append(record.clone());
        Some(record)
    }

    /// Discard the session without recording anything
    pub fn cancel(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.session.take().is_none() {
            return false;
        }
        inner.clock.stop();
        inner.phase = SessionPhase::Idle;
        info!("Workout session cancelled");
        true
    }

    /// Append an exercise to the live session
    pub fn add_exercise(&self, exercise: Exercise) -> bool {
        self.with_session(|current| {
            current.exercises.push(exercise);
            true
        })
    }

    /// Replace the exercise with the same id
    pub fn update_exercise(&self, exercise: Exercise) -> bool {
        self.with_session(|current| {
            let id = exercise.id;
            match current.exercises.iter_mut().find(|existing| existing.id == id) {
                Some(slot) => {
                    *slot = exercise;
                    true
                }
                None => false,
            }
        })
    }

    /// Remove the exercise with `id`
    pub fn remove_exercise(&self, id: Uuid) -> bool {
        self.with_session(|current| {
            let before = current.exercises.len();
            current.exercises.retain(|existing| existing.id != id);
            current.exercises.len() != before
        })
    }

    fn with_session(&self, apply: impl FnOnce(&mut WorkoutSession) -> bool) -> bool {
        self.inner.borrow_mut().session.as_mut().is_some_and(apply)
    }

    fn arm_clock(&self, inner: &mut SessionInner) {
        let weak = Rc::downgrade(&self.inner);
        let interval = inner.tick_interval;
        inner.clock.start(
            interval,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().on_tick();
                }
            }),
        );
    }
}

impl Drop for WorkoutSessionController {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.clock.stop();
        }
    }
}
