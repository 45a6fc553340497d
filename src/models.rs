// ABOUTME: Core data models for sensor packages, workout kinds, and computed metrics
// ABOUTME: Defines WorkoutKind, MetricsRecord, and SensorPackage data structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! # Data Models
//!
//! The three data carriers of the pipeline:
//!
//! - [`SensorPackage`]: one raw (workout code, values) pair as reported by a
//!   sensor feed, before any validation
//! - [`WorkoutKind`]: the closed set of supported workout kinds, carrying the
//!   registry knowledge (wire codes, display labels, expected value counts)
//! - [`MetricsRecord`]: the immutable computed result of one session and its
//!   fixed-template summary message

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumeration of supported workout kinds.
///
/// This is a closed set: the session factory only constructs calculators for
/// kinds listed here, and each kind fixes the number of raw values its
/// calculator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    /// Running session
    Running,
    /// Sports (race) walking session
    SportsWalking,
    /// Pool swimming session
    Swimming,
}

impl WorkoutKind {
    /// Resolve a sensor wire code to a workout kind.
    ///
    /// Codes are matched exactly; there is no case folding on the wire.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RUN" => Some(Self::Running),
            "WLK" => Some(Self::SportsWalking),
            "SWM" => Some(Self::Swimming),
            _ => None,
        }
    }

    /// Get the sensor wire code for this kind
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Get the label used in formatted summary messages
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of raw values a package of this kind must carry
    #[must_use]
    pub const fn expected_field_count(&self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One raw sensor package: a workout code plus the ordered values reported
/// for that session.
///
/// Values are kept as raw `JSON` scalars (numbers or strings) until the
/// session factory validates them; sensor feeds mix both representations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Wire code selecting the workout kind ("RUN", "WLK", "SWM")
    pub workout_code: String,
    /// Ordered raw values, positional per workout kind
    pub values: Vec<serde_json::Value>,
}

impl SensorPackage {
    /// Create a package from a code and raw values
    #[must_use]
    pub fn new(workout_code: impl Into<String>, values: Vec<serde_json::Value>) -> Self {
        Self {
            workout_code: workout_code.into(),
            values,
        }
    }

    /// Built-in sample package set used by the CLI `demo` subcommand and by
    /// validation tests.
    ///
    /// Three of the six packages are malformed (a short swimming payload, a
    /// non-numeric running value, an unknown code) so the full error surface
    /// is exercised end to end.
    #[must_use]
    pub fn demo_set() -> Vec<Self> {
        use serde_json::json;

        vec![
            Self::new("SWM", vec![json!(720), json!(1), json!(80), json!(25), json!(40)]),
            Self::new("SWM", vec![json!(720), json!(1), json!(80), json!(25)]),
            Self::new("RUN", vec![json!(15000), json!(1), json!(75)]),
            Self::new("RUN", vec![json!(15000), json!("1a"), json!(75)]),
            Self::new("WLK", vec![json!(9000), json!(1), json!(75), json!(180)]),
            Self::new("WLKM", vec![json!(9000), json!(1), json!(75), json!(180)]),
        ]
    }
}

/// Computed metrics of one workout session.
///
/// Built exactly once per session by [`Workout::report`](crate::workouts::Workout::report)
/// and never mutated afterwards; it has no identity beyond its values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    /// Kind of the reported session
    pub workout_kind: WorkoutKind,
    /// Session duration in hours
    pub duration_hours: f64,
    /// Covered distance in kilometers
    pub distance_km: f64,
    /// Mean speed in kilometers per hour
    pub mean_speed_kmh: f64,
    /// Estimated energy expenditure in kilocalories
    pub calories: f64,
}

impl MetricsRecord {
    /// Render the fixed-template summary message.
    ///
    /// All numeric fields are formatted to three decimals; there is no
    /// locale handling.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout_kind.display_name(),
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories,
        )
    }
}

impl fmt::Display for MetricsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
