// ABOUTME: Re-exports command modules for pulse-cli
// ABOUTME: Progress and challenge commands, live workouts and the simulated tap game
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

pub mod game;
pub mod progress;
pub mod workout;
