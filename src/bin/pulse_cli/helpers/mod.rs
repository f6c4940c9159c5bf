// ABOUTME: Re-exports helper modules for pulse-cli
// ABOUTME: Provides terminal display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

pub mod display;
