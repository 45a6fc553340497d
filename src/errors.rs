// ABOUTME: Error taxonomy for sensor package validation and session construction
// ABOUTME: All variants are recoverable data errors returned as values, never raised
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! # Error Handling
//!
//! Every error in this crate is a data error: something about a raw sensor
//! package prevented a workout calculator from being built. The session
//! factory returns these as values and the report driver turns them into a
//! single diagnostic line. Nothing here is retried or escalated.

use thiserror::Error;

/// Validation errors produced while turning a raw sensor package into a
/// workout calculator.
///
/// The `Display` messages are part of the output contract: the report
/// driver embeds them verbatim in its diagnostic lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// The workout code is not in the registry.
    #[error("unknown workout: {code}")]
    UnknownWorkout {
        /// The unrecognized code as supplied by the caller
        code: String,
    },

    /// The package carries the wrong number of raw values for its code.
    #[error("wrong data for workout {code}")]
    FieldCountMismatch {
        /// The resolved workout code
        code: String,
        /// Number of values the workout kind declares
        expected: usize,
        /// Number of values actually supplied
        actual: usize,
    },

    /// At least one raw value is not numeric-looking text.
    #[error("non-numeric data provided")]
    NonNumericData,

    /// A value passed the numeric check but cannot be bound to its field.
    #[error("invalid value for workout {code}: {detail}")]
    InvalidFieldValue {
        /// The resolved workout code
        code: String,
        /// What made the value unusable
        detail: String,
    },
}

impl TrackerError {
    /// Create an "unknown workout" error
    #[must_use]
    pub fn unknown_workout(code: impl Into<String>) -> Self {
        Self::UnknownWorkout { code: code.into() }
    }

    /// Create a "wrong value count" error
    #[must_use]
    pub fn field_count_mismatch(code: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::FieldCountMismatch {
            code: code.into(),
            expected,
            actual,
        }
    }

    /// Create an "invalid field value" error
    #[must_use]
    pub fn invalid_field_value(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvalidFieldValue {
            code: code.into(),
            detail: detail.into(),
        }
    }
}

/// Result type alias for convenience
pub type TrackerResult<T> = Result<T, TrackerError>;
