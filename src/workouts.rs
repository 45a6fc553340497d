// ABOUTME: Workout calculators for running, sports walking, and swimming sessions
// ABOUTME: Computes distance, mean speed, and calories per kind-specific formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! # Workout Calculators
//!
//! One [`Workout`] value holds the validated inputs of a single session and
//! derives its metrics on demand. The three kinds share the distance and
//! duration plumbing and differ in two places only: swimming overrides mean
//! speed with pool geometry, and every kind has its own calorie formula.
//!
//! All derivations are pure `f64` arithmetic over the constants in
//! [`crate::constants`]; nothing here touches I/O or global state.

use serde::{Deserialize, Serialize};

use crate::constants::{running, swimming, units, walking};
use crate::errors::{TrackerError, TrackerResult};
use crate::models::{MetricsRecord, WorkoutKind};

/// A validated workout session, ready to compute its metrics.
///
/// Construct through [`crate::factory::build`]; direct construction is
/// possible for callers that already hold validated numbers, but they must
/// call [`Workout::validate`] before deriving metrics to keep the positive
/// duration invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Workout {
    /// Running session described by step count, duration, and body weight
    Running {
        /// Number of steps taken
        action_count: u32,
        /// Session duration in hours
        duration_hours: f64,
        /// Athlete body weight in kilograms
        weight_kg: f64,
    },
    /// Sports walking session, additionally parameterized by athlete height
    SportsWalking {
        /// Number of steps taken
        action_count: u32,
        /// Session duration in hours
        duration_hours: f64,
        /// Athlete body weight in kilograms
        weight_kg: f64,
        /// Athlete height in centimeters
        height_cm: f64,
    },
    /// Pool swimming session described by strokes plus pool geometry
    Swimming {
        /// Number of strokes taken
        action_count: u32,
        /// Session duration in hours
        duration_hours: f64,
        /// Athlete body weight in kilograms
        weight_kg: f64,
        /// Pool length in meters
        pool_length_m: f64,
        /// Number of completed pool laps
        pool_laps: u32,
    },
}

impl Workout {
    /// Get the kind of this session
    #[must_use]
    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running { .. } => WorkoutKind::Running,
            Self::SportsWalking { .. } => WorkoutKind::SportsWalking,
            Self::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    /// Number of movement units (steps or strokes) in the session
    #[must_use]
    pub const fn action_count(&self) -> u32 {
        match self {
            Self::Running { action_count, .. }
            | Self::SportsWalking { action_count, .. }
            | Self::Swimming { action_count, .. } => *action_count,
        }
    }

    /// Session duration in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        match self {
            Self::Running { duration_hours, .. }
            | Self::SportsWalking { duration_hours, .. }
            | Self::Swimming { duration_hours, .. } => *duration_hours,
        }
    }

    /// Athlete body weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        match self {
            Self::Running { weight_kg, .. }
            | Self::SportsWalking { weight_kg, .. }
            | Self::Swimming { weight_kg, .. } => *weight_kg,
        }
    }

    /// Meters covered by one movement unit: a step on land, a stroke in water.
    const fn action_distance_m(&self) -> f64 {
        match self {
            Self::Running { .. } | Self::SportsWalking { .. } => running::STEP_LENGTH_M,
            Self::Swimming { .. } => swimming::STROKE_LENGTH_M,
        }
    }

    /// Session duration in minutes, for the calorie formulas
    fn duration_minutes(&self) -> f64 {
        self.duration_hours() * units::MINUTES_PER_HOUR
    }

    /// Distance covered in kilometers.
    ///
    /// Derived from movement units for every kind, including swimming, where
    /// speed has its own pool-geometry basis and the two need not agree.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        f64::from(self.action_count()) * self.action_distance_m() / units::METERS_PER_KM
    }

    /// Mean speed in kilometers per hour.
    ///
    /// Land workouts divide distance by duration. Swimming uses pool length
    /// times laps instead, so stroke-derived distance never feeds its speed.
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Running { .. } | Self::SportsWalking { .. } => {
                self.distance_km() / self.duration_hours()
            }
            Self::Swimming {
                duration_hours,
                pool_length_m,
                pool_laps,
                ..
            } => pool_length_m * f64::from(*pool_laps) / units::METERS_PER_KM / duration_hours,
        }
    }

    /// Estimated energy expenditure in kilocalories.
    #[must_use]
    pub fn calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        match self {
            Self::Running { weight_kg, .. } => {
                running::CALORIE_SPEED_FACTOR.mul_add(speed, -running::CALORIE_SPEED_OFFSET)
                    * weight_kg
                    / units::METERS_PER_KM
                    * self.duration_minutes()
            }
            // The squared-speed term is floor-divided by height; the
            // fractional quotient never contributes.
            Self::SportsWalking {
                weight_kg,
                height_cm,
                ..
            } => {
                let height_quotient = (speed.powi(2) / height_cm).floor();
                walking::CALORIE_WEIGHT_FACTOR
                    .mul_add(
                        *weight_kg,
                        height_quotient * walking::CALORIE_SPEED_HEIGHT_FACTOR * weight_kg,
                    )
                    * self.duration_minutes()
            }
            Self::Swimming { weight_kg, .. } => {
                (speed + swimming::CALORIE_SPEED_OFFSET)
                    * swimming::CALORIE_WEIGHT_FACTOR
                    * weight_kg
            }
        }
    }

    /// Check the construction invariants of this session.
    ///
    /// Duration must be strictly positive for every kind (it divides both
    /// speed bases), and sports walking additionally requires a positive
    /// height (it divides the calorie formula).
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidFieldValue`] naming the offending field
    /// when an invariant does not hold.
    pub fn validate(&self) -> TrackerResult<()> {
        let code = self.kind().code();
        if self.duration_hours() <= 0.0 {
            return Err(TrackerError::invalid_field_value(
                code,
                "duration must be positive",
            ));
        }
        if let Self::SportsWalking { height_cm, .. } = self {
            if *height_cm <= 0.0 {
                return Err(TrackerError::invalid_field_value(
                    code,
                    "height must be positive",
                ));
            }
        }
        Ok(())
    }

    /// Compute the full metrics record for this session
    #[must_use]
    pub fn report(&self) -> MetricsRecord {
        MetricsRecord {
            workout_kind: self.kind(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories: self.calories(),
        }
    }
}
