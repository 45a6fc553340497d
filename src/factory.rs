// ABOUTME: Session factory validating raw sensor packages into workout sessions
// ABOUTME: Resolves workout codes, checks field counts, and parses numeric values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! # Session Factory
//!
//! Turns one raw `(workout code, values)` pair into a validated [`Workout`].
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. the code must resolve in the workout registry
//! 2. the value count must match the kind exactly
//! 3. every value must pass the numeric-text check
//! 4. parsed values must satisfy the kind's construction invariants
//!
//! The numeric-text check accepts unsigned decimal text only: digits with at
//! most one `.`. Signs, exponents, and non-ASCII digits are all rejected, on
//! either a `JSON` number or a `JSON` string.

use serde_json::Value;

use crate::errors::{TrackerError, TrackerResult};
use crate::models::WorkoutKind;
use crate::workouts::Workout;

/// Build a validated workout session from raw sensor values.
///
/// `raw_values` are positional per workout kind; see [`Workout`] for the
/// field order of each kind.
///
/// # Errors
///
/// Returns [`TrackerError::UnknownWorkout`] for an unregistered code,
/// [`TrackerError::FieldCountMismatch`] for a wrong value count,
/// [`TrackerError::NonNumericData`] when a value fails the numeric-text
/// check, and [`TrackerError::InvalidFieldValue`] when a parsed value breaks
/// a construction invariant.
///
/// # Example
///
/// ```
/// use fittrack::factory;
/// use serde_json::json;
///
/// let workout = factory::build("RUN", &[json!(15000), json!(1), json!(75)])?;
/// assert!((workout.distance_km() - 9.75).abs() < 1e-9);
/// # Ok::<(), fittrack::TrackerError>(())
/// ```
pub fn build(workout_code: &str, raw_values: &[Value]) -> TrackerResult<Workout> {
    let result = construct(workout_code, raw_values);
    match &result {
        Ok(workout) => {
            tracing::debug!(code = workout_code, kind = %workout.kind(), "constructed workout session");
        }
        Err(error) => {
            tracing::warn!(code = workout_code, %error, "rejected sensor package");
        }
    }
    result
}

fn construct(workout_code: &str, raw_values: &[Value]) -> TrackerResult<Workout> {
    let kind = WorkoutKind::from_code(workout_code)
        .ok_or_else(|| TrackerError::unknown_workout(workout_code))?;

    let expected = kind.expected_field_count();
    if raw_values.len() != expected {
        return Err(TrackerError::field_count_mismatch(
            workout_code,
            expected,
            raw_values.len(),
        ));
    }

    let mut texts = Vec::with_capacity(raw_values.len());
    for value in raw_values {
        let text = value_text(value).ok_or(TrackerError::NonNumericData)?;
        if !is_numeric_text(&text) {
            return Err(TrackerError::NonNumericData);
        }
        texts.push(text);
    }

    let workout = match kind {
        WorkoutKind::Running => Workout::Running {
            action_count: parse_count(kind, &texts[0])?,
            duration_hours: parse_float(&texts[1])?,
            weight_kg: parse_float(&texts[2])?,
        },
        WorkoutKind::SportsWalking => Workout::SportsWalking {
            action_count: parse_count(kind, &texts[0])?,
            duration_hours: parse_float(&texts[1])?,
            weight_kg: parse_float(&texts[2])?,
            height_cm: parse_float(&texts[3])?,
        },
        WorkoutKind::Swimming => Workout::Swimming {
            action_count: parse_count(kind, &texts[0])?,
            duration_hours: parse_float(&texts[1])?,
            weight_kg: parse_float(&texts[2])?,
            pool_length_m: parse_float(&texts[3])?,
            pool_laps: parse_count(kind, &texts[4])?,
        },
    };

    workout.validate()?;
    Ok(workout)
}

/// Textual form of a raw value, if it has one.
///
/// Numbers render through their canonical `JSON` text; strings pass through
/// unchanged. Booleans, nulls, and containers have no numeric reading.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        _ => None,
    }
}

/// Check that a text is an unsigned decimal number: at least one ASCII
/// digit, with at most one `.` anywhere.
fn is_numeric_text(text: &str) -> bool {
    let digits = text.replacen('.', "", 1);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

fn parse_float(text: &str) -> TrackerResult<f64> {
    text.parse().map_err(|_| TrackerError::NonNumericData)
}

/// Parse a count field (steps, strokes, laps). The numeric check admits
/// decimal text, so whole-number and range constraints are enforced here.
fn parse_count(kind: WorkoutKind, text: &str) -> TrackerResult<u32> {
    let value = parse_float(text)?;
    // The numeric check leaves no sign, so fract() is never negative here.
    if value.fract() > 0.0 {
        return Err(TrackerError::invalid_field_value(
            kind.code(),
            format!("expected a whole number, got {text}"),
        ));
    }
    if !(0.0..=f64::from(u32::MAX)).contains(&value) {
        return Err(TrackerError::invalid_field_value(
            kind.code(),
            format!("count out of range: {text}"),
        ));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = value as u32;
    Ok(count)
}
