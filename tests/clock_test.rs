// ABOUTME: Tests for the Clock implementations
// ABOUTME: Virtual scheduler ordering, stop/restart semantics and the tokio clock under paused time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors
#![allow(missing_docs)]

mod common;

use sports_pulse::clock::{Clock, TimeSource, TokioClock, VirtualClock};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use tokio::task::LocalSet;

fn counter() -> (Rc<Cell<u32>>, Box<dyn FnMut()>) {
    let count = Rc::new(Cell::new(0));
    let handle = Rc::clone(&count);
    (count, Box::new(move || handle.set(handle.get() + 1)))
}

#[test]
fn test_virtual_clock_fires_at_interval() {
    let scheduler = common::scheduler();
    let mut clock = scheduler.clock();
    let (count, callback) = counter();

    clock.start(Duration::from_millis(100), callback);
    assert!(clock.is_running());

    assert_eq!(scheduler.advance(Duration::from_millis(99)), 0);
    assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
    scheduler.advance(Duration::from_millis(900));
    assert_eq!(count.get(), 10);
}

#[test]
fn test_now_tracks_virtual_elapsed_time() {
    let scheduler = common::scheduler();
    scheduler.advance(Duration::from_millis(2_500));
    assert_eq!(scheduler.elapsed(), Duration::from_millis(2_500));
    assert_eq!(
        scheduler.now(),
        common::epoch() + chrono::Duration::milliseconds(2_500)
    );
}

#[test]
fn test_stop_cancels_pending_ticks() {
    let scheduler = common::scheduler();
    let mut clock = scheduler.clock();
    let (count, callback) = counter();

    clock.start(Duration::from_secs(1), callback);
    scheduler.advance(Duration::from_secs(2));
    clock.stop();
    scheduler.advance(Duration::from_secs(5));

    assert_eq!(count.get(), 2);
    assert!(!clock.is_running());
}

#[test]
fn test_restart_replaces_timeline() {
    let scheduler = common::scheduler();
    let mut clock = scheduler.clock();
    let (first, first_callback) = counter();
    let (second, second_callback) = counter();

    clock.start(Duration::from_secs(1), first_callback);
    scheduler.advance(Duration::from_millis(1_500));
    clock.start(Duration::from_secs(1), second_callback);
    scheduler.advance(Duration::from_secs(3));

    // The restarted timeline counts from the restart, and the old one is gone
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 3);
}

#[test]
fn test_zero_interval_is_rejected() {
    let scheduler = common::scheduler();
    let mut clock = scheduler.clock();
    let (count, callback) = counter();

    clock.start(Duration::ZERO, callback);
    scheduler.advance(Duration::from_secs(1));

    assert!(!clock.is_running());
    assert_eq!(count.get(), 0);
}

#[test]
fn test_clock_can_stop_itself_from_callback() {
    let scheduler = common::scheduler();
    let clock: Rc<RefCell<Option<VirtualClock>>> = Rc::new(RefCell::new(Some(scheduler.clock())));
    let count = Rc::new(Cell::new(0));

    let handle = Rc::clone(&clock);
    let ticks = Rc::clone(&count);
    let callback = Box::new(move || {
        ticks.set(ticks.get() + 1);
        if ticks.get() == 3 {
            if let Some(clock) = handle.borrow_mut().as_mut() {
                clock.stop();
            }
        }
    });
    if let Some(clock) = clock.borrow_mut().as_mut() {
        clock.start(Duration::from_millis(100), callback);
    }

    scheduler.advance(Duration::from_secs(2));
    assert_eq!(count.get(), 3);
}

#[test]
fn test_dropped_clocks_release_their_slot() {
    let scheduler = common::scheduler();
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut kept = scheduler.clock();
    let log = Rc::clone(&order);
    kept.start(Duration::from_millis(100), Box::new(move || log.borrow_mut().push("kept")));

    for _ in 0..1_000 {
        let mut transient = scheduler.clock();
        let (_, callback) = counter();
        transient.start(Duration::from_millis(100), callback);
    }
    assert_eq!(scheduler.clock_count(), 1);

    // A clock created after the churn still ties after the surviving one
    let mut late = scheduler.clock();
    let log = Rc::clone(&order);
    late.start(Duration::from_millis(100), Box::new(move || log.borrow_mut().push("late")));
    assert_eq!(scheduler.clock_count(), 2);

    scheduler.advance(Duration::from_millis(100));
    assert_eq!(*order.borrow(), vec!["kept", "late"]);

    drop(late);
    assert_eq!(scheduler.clock_count(), 1);
}

#[test]
fn test_simultaneous_ticks_fire_in_registration_order() {
    let scheduler = common::scheduler();
    let mut first = scheduler.clock();
    let mut second = scheduler.clock();
    let order = Rc::new(RefCell::new(Vec::new()));

    // Started in reverse order; creation order still decides ties
    let log = Rc::clone(&order);
    second.start(Duration::from_millis(500), Box::new(move || log.borrow_mut().push("second")));
    let log = Rc::clone(&order);
    first.start(Duration::from_millis(500), Box::new(move || log.borrow_mut().push("first")));

    scheduler.advance(Duration::from_secs(1));
    assert_eq!(*order.borrow(), vec!["first", "second", "first", "second"]);
}

#[tokio::test(start_paused = true)]
async fn test_tokio_clock_ticks_until_stopped() {
    common::init_test_logging();
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut clock = TokioClock::new("test");
            let (count, callback) = counter();

            clock.start(Duration::from_secs(1), callback);
            assert!(clock.is_running());
            tokio::time::sleep(Duration::from_millis(3_500)).await;
            assert_eq!(count.get(), 3);

            clock.stop();
            assert!(!clock.is_running());
            tokio::time::sleep(Duration::from_secs(5)).await;
            assert_eq!(count.get(), 3);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_tokio_clock_restart_keeps_single_timeline() {
    common::init_test_logging();
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut clock = TokioClock::new("test");
            let (first, first_callback) = counter();
            let (second, second_callback) = counter();

            clock.start(Duration::from_secs(1), first_callback);
            tokio::time::sleep(Duration::from_millis(1_500)).await;
            clock.start(Duration::from_secs(1), second_callback);
            tokio::time::sleep(Duration::from_millis(2_200)).await;

            assert_eq!(first.get(), 1);
            assert_eq!(second.get(), 2);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_tokio_clock_can_stop_itself_from_callback() {
    common::init_test_logging();
    let local = LocalSet::new();
    local
        .run_until(async {
            let clock: Rc<RefCell<Option<TokioClock>>> =
                Rc::new(RefCell::new(Some(TokioClock::new("self-stop"))));
            let count = Rc::new(Cell::new(0));

            let handle = Rc::clone(&clock);
            let ticks = Rc::clone(&count);
            let callback = Box::new(move || {
                ticks.set(ticks.get() + 1);
                if ticks.get() == 2 {
                    if let Some(clock) = handle.borrow_mut().as_mut() {
                        clock.stop();
                    }
                }
            });
            if let Some(clock) = clock.borrow_mut().as_mut() {
                clock.start(Duration::from_secs(1), callback);
            }

            tokio::time::sleep(Duration::from_secs(5)).await;
            assert_eq!(count.get(), 2);
            assert!(clock.borrow().as_ref().is_some_and(|clock| !clock.is_running()));
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_tokio_clock_can_restart_itself_from_callback() {
    common::init_test_logging();
    let local = LocalSet::new();
    local
        .run_until(async {
            let clock: Rc<RefCell<Option<TokioClock>>> =
                Rc::new(RefCell::new(Some(TokioClock::new("self-restart"))));
            let first = Rc::new(Cell::new(0));
            let (second, second_callback) = counter();

            let handle = Rc::clone(&clock);
            let ticks = Rc::clone(&first);
            let mut replacement = Some(second_callback);
            let callback = Box::new(move || {
                ticks.set(ticks.get() + 1);
                if ticks.get() == 3 {
                    if let (Some(clock), Some(next)) =
                        (handle.borrow_mut().as_mut(), replacement.take())
                    {
                        clock.start(Duration::from_secs(1), next);
                    }
                }
            });
            if let Some(clock) = clock.borrow_mut().as_mut() {
                clock.start(Duration::from_secs(1), callback);
            }

            // First timeline fires at 1s, 2s, 3s; the replacement at 4s and 5s
            tokio::time::sleep(Duration::from_millis(5_500)).await;
            assert_eq!(first.get(), 3);
            assert_eq!(second.get(), 2);
            assert!(clock.borrow().as_ref().is_some_and(TokioClock::is_running));
        })
        .await;
}
