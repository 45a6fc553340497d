// ABOUTME: Report driver rendering workout outcomes as fixed-template text lines
// ABOUTME: Maps construction failures to the single-line error report format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! # Report Driver
//!
//! The outer surface of the pipeline: feed raw sensor packages through the
//! session factory and render one text line per package. A package that
//! fails validation never aborts the batch; it renders as a single error
//! line and processing continues with the next package.

use std::io;

use crate::errors::TrackerResult;
use crate::factory;
use crate::models::SensorPackage;
use crate::workouts::Workout;

/// Render one session outcome as its report line.
///
/// Successful sessions render their metrics message; failures render the
/// fixed `error found in provided data:` prefix with the error description.
#[must_use]
pub fn render(outcome: TrackerResult<Workout>) -> String {
    match outcome {
        Ok(workout) => workout.report().message(),
        Err(error) => format!("error found in provided data: {error}"),
    }
}

/// Process a batch of sensor packages into report lines, one line per
/// package, in input order.
#[must_use]
pub fn summarize(packages: &[SensorPackage]) -> Vec<String> {
    packages
        .iter()
        .map(|package| render(factory::build(&package.workout_code, &package.values)))
        .collect()
}

/// Load sensor packages from a reader holding a `JSON` array of packages.
///
/// # Errors
///
/// Returns the underlying deserialization error when the input is not a
/// `JSON` array of sensor packages.
pub fn load_packages<R: io::Read>(reader: R) -> Result<Vec<SensorPackage>, serde_json::Error> {
    serde_json::from_reader(reader)
}
