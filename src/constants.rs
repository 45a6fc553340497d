// ABOUTME: Unit-conversion constants and calorie formula coefficients for all workout kinds
// ABOUTME: Provides named constants to eliminate magic numbers in metric calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! Named constants used by the workout calculators.
//!
//! The calorie coefficients are the fixed calibration values of the sensor
//! firmware's reference formulas; they are not configurable at runtime.

/// Unit conversion factors.
pub mod units {
    /// Meters per kilometer conversion factor
    pub const METERS_PER_KM: f64 = 1000.0;

    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Running formula constants. `STEP_LENGTH_M` is shared with sports walking.
pub mod running {
    /// Distance covered by one step, in meters
    pub const STEP_LENGTH_M: f64 = 0.65;

    /// Multiplier applied to mean speed in the running calorie formula
    pub const CALORIE_SPEED_FACTOR: f64 = 18.0;

    /// Offset subtracted from the scaled mean speed in the running calorie formula
    pub const CALORIE_SPEED_OFFSET: f64 = 20.0;
}

/// Sports walking formula constants.
pub mod walking {
    /// Multiplier applied to body weight in the walking calorie formula
    pub const CALORIE_WEIGHT_FACTOR: f64 = 0.035;

    /// Multiplier applied to the floored speed-squared-over-height term
    pub const CALORIE_SPEED_HEIGHT_FACTOR: f64 = 0.029;
}

/// Swimming formula constants.
pub mod swimming {
    /// Distance covered by one stroke, in meters
    pub const STROKE_LENGTH_M: f64 = 1.38;

    /// Offset added to mean speed in the swimming calorie formula
    pub const CALORIE_SPEED_OFFSET: f64 = 1.1;

    /// Multiplier applied to body weight in the swimming calorie formula
    pub const CALORIE_WEIGHT_FACTOR: f64 = 2.0;
}
