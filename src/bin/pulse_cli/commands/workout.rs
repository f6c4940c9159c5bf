// ABOUTME: Live workout command for pulse-cli
// ABOUTME: Runs a session on the tokio clock inside a LocalSet and records it on finish
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

use sports_pulse::clock::{SystemTimeSource, TokioClock};
use sports_pulse::config::AppConfig;
use sports_pulse::errors::{AppError, AppResult};
use sports_pulse::formatting::format_elapsed;
use sports_pulse::repository::FitnessRepository;
use sports_pulse::session::WorkoutSessionController;
use std::rc::Rc;
use tokio::task::LocalSet;
use tracing::info;

use crate::helpers::display::display_workout;

type Result<T> = AppResult<T>;

/// Run a session for `seconds` counted seconds, then finish it
///
/// The session clock is `!Send`, so everything runs on a `LocalSet`.
#[allow(clippy::future_not_send)]
pub async fn run(
    repository: &mut FitnessRepository,
    config: &AppConfig,
    template: Option<&str>,
    seconds: u64,
) -> Result<()> {
    let template = match template {
        Some(name) => Some(
            repository
                .template_named(name)
                .cloned()
                .ok_or_else(|| AppError::not_found(format!("workout template '{name}'")))?,
        ),
        None => None,
    };

    let tick = config.session.tick_interval;
    let local = LocalSet::new();
    let record = local
        .run_until(async {
            let controller = WorkoutSessionController::with_tick_interval(
                Box::new(TokioClock::new("workout")),
                Rc::new(SystemTimeSource),
                tick,
            );
            controller.start(template.as_ref());
            info!(seconds, "Workout running");

            let mut shown = 0;
            while controller.elapsed_seconds() < seconds {
                tokio::time::sleep(tick / 2).await;
                let elapsed = controller.elapsed_seconds();
                if elapsed != shown {
                    shown = elapsed;
                    println!("   {}", format_elapsed(elapsed));
                }
            }
            controller.finish(&mut *repository, None)
        })
        .await;

    if let Some(record) = record {
        display_workout(&record);
    }
    Ok(())
}
