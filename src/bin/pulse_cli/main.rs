// ABOUTME: Sports Pulse CLI - drives the fitness core from the terminal
// ABOUTME: Status, challenge management, live workout sessions and simulated tap games
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors
//!
//! Usage:
//! ```bash
//! # Overall progress
//! pulse-cli status
//!
//! # Recompute challenge progress, then claim an eligible one
//! pulse-cli refresh
//! pulse-cli complete 7a1c9a52-0d8e-4a55-9b8f-1d5f3f0c2e11
//!
//! # Create a personal challenge
//! pulse-cli challenge create --title "Burn 500" --kind calories --target 500 --days 3
//!
//! # Run a live 30 second workout from a template
//! pulse-cli workout --template "HIIT Power" --seconds 30
//!
//! # Simulate a tap game tapping every 400 ms
//! pulse-cli game --seed 42 --tap-every 400
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sports_pulse::clock::SystemTimeSource;
use sports_pulse::config::AppConfig;
use sports_pulse::errors::{AppError, AppResult};
use sports_pulse::repository::FitnessRepository;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::info;
use uuid::Uuid;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "pulse-cli",
    about = "Sports Pulse fitness core CLI",
    long_about = "Track workouts, progress challenges, claim rewards and play the tap reflex game."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (file storage backend)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show level, points, streak and workout totals
    Status,

    /// List challenges with their progress
    Challenges,

    /// Recompute challenge progress from the workout history
    Refresh,

    /// Complete an eligible challenge and collect its reward
    Complete {
        /// Challenge ID
        id: Uuid,
    },

    /// Challenge management
    Challenge {
        #[command(subcommand)]
        action: ChallengeCommand,
    },

    /// Run a live workout session
    Workout {
        /// Template name (custom workout if omitted)
        #[arg(long)]
        template: Option<String>,

        /// Counted seconds before finishing
        #[arg(long, default_value = "10")]
        seconds: u64,
    },

    /// Simulate a tap game on virtual time
    Game {
        /// Seed for icon spawning
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Milliseconds between taps
        #[arg(long, default_value = "400")]
        tap_every: u64,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ChallengeCommand {
    /// Create a personal challenge
    Create {
        /// Challenge title
        #[arg(long)]
        title: String,

        /// Challenge kind (workouts, calories, duration, steps, distance, streak)
        #[arg(long)]
        kind: String,

        /// Target value
        #[arg(long)]
        target: f64,

        /// Window length in days
        #[arg(long, default_value = "7")]
        days: i64,

        /// Challenge description
        #[arg(long)]
        description: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if cli.verbose {
        config.logging = config.logging.verbose();
    }
    config
        .logging
        .init()
        .map_err(|e| AppError::internal(format!("logging initialization failed: {e:#}")))?;

    info!("Sports Pulse CLI");

    let store = config.open_store()?;
    let time = Rc::new(SystemTimeSource);
    let mut rng = StdRng::from_entropy();
    let mut repository = FitnessRepository::open(store, time, &mut rng);

    match cli.command {
        Command::Status => commands::progress::status(&repository),
        Command::Challenges => commands::progress::challenges(&repository),
        Command::Refresh => commands::progress::refresh(&mut repository),
        Command::Complete { id } => commands::progress::complete(&mut repository, id),
        Command::Challenge { action } => match action {
            ChallengeCommand::Create {
                title,
                kind,
                target,
                days,
                description,
            } => commands::progress::create(&mut repository, title, &kind, target, days, description)?,
        },
        Command::Workout { template, seconds } => {
            commands::workout::run(&mut repository, &config, template.as_deref(), seconds).await?;
        }
        Command::Game { seed, tap_every } => {
            commands::game::simulate(&repository, &config, seed, tap_every)?;
        }
    }

    Ok(())
}
