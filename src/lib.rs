// ABOUTME: Main library entry point for the fittrack fitness metrics engine
// ABOUTME: Exposes workout calculators, session factory, and report rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

#![deny(unsafe_code)]

//! # Fittrack
//!
//! A fitness metrics engine for sensor-reported workout sessions. Raw
//! `(workout code, values)` packages from running, walking, or swimming
//! sensors are validated into [`Workout`] sessions, which derive distance,
//! mean speed, and calorie metrics and render them as fixed-template report
//! lines.
//!
//! ## Pipeline
//!
//! - **Factory**: validate a raw package against the workout registry
//! - **Workouts**: compute metrics per kind-specific formula
//! - **Report**: render one text line per package, errors included
//!
//! ## Example Usage
//!
//! ```rust
//! use fittrack::{factory, report};
//! use serde_json::json;
//!
//! let outcome = factory::build("SWM", &[json!(720), json!(1), json!(80), json!(25), json!(40)]);
//! let line = report::render(outcome);
//! assert!(line.starts_with("Training type: Swimming;"));
//! ```

/// Formula coefficients and unit conversion constants
pub mod constants;

/// Unified error handling for package validation and session construction
pub mod errors;

/// Session factory turning raw sensor packages into validated workouts
pub mod factory;

/// Structured logging configuration
pub mod logging;

/// Core data models: sensor packages, workout kinds, metrics records
pub mod models;

/// Report driver rendering session outcomes as text lines
pub mod report;

/// Workout calculators for the supported session kinds
pub mod workouts;

pub use errors::{TrackerError, TrackerResult};
pub use models::{MetricsRecord, SensorPackage, WorkoutKind};
pub use workouts::Workout;
