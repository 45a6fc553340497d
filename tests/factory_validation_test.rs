// ABOUTME: Integration tests for the session factory validation pipeline
// ABOUTME: Covers code resolution, field counts, numeric checks, and invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::{factory, TrackerError, Workout};
use serde_json::{json, Value};

// === Successful construction ===

#[test]
fn test_build_running_binds_positional_fields() {
    let workout = factory::build("RUN", &[json!(15000), json!(1), json!(75)]).unwrap();

    match workout {
        Workout::Running {
            action_count,
            duration_hours,
            weight_kg,
        } => {
            assert_eq!(action_count, 15000);
            assert!((duration_hours - 1.0).abs() < f64::EPSILON);
            assert!((weight_kg - 75.0).abs() < f64::EPSILON);
        }
        other => panic!("expected a running session, got {other:?}"),
    }
}

#[test]
fn test_build_walking_binds_positional_fields() {
    let workout =
        factory::build("WLK", &[json!(9000), json!(1), json!(75), json!(180)]).unwrap();

    match workout {
        Workout::SportsWalking {
            action_count,
            duration_hours,
            weight_kg,
            height_cm,
        } => {
            assert_eq!(action_count, 9000);
            assert!((duration_hours - 1.0).abs() < f64::EPSILON);
            assert!((weight_kg - 75.0).abs() < f64::EPSILON);
            assert!((height_cm - 180.0).abs() < f64::EPSILON);
        }
        other => panic!("expected a walking session, got {other:?}"),
    }
}

#[test]
fn test_build_swimming_binds_positional_fields() {
    let workout = factory::build(
        "SWM",
        &[json!(720), json!(1), json!(80), json!(25), json!(40)],
    )
    .unwrap();

    match workout {
        Workout::Swimming {
            action_count,
            duration_hours,
            weight_kg,
            pool_length_m,
            pool_laps,
        } => {
            assert_eq!(action_count, 720);
            assert!((duration_hours - 1.0).abs() < f64::EPSILON);
            assert!((weight_kg - 80.0).abs() < f64::EPSILON);
            assert!((pool_length_m - 25.0).abs() < f64::EPSILON);
            assert_eq!(pool_laps, 40);
        }
        other => panic!("expected a swimming session, got {other:?}"),
    }
}

#[test]
fn test_build_accepts_numeric_strings() {
    // Sensor feeds mix number and string representations of the same value.
    let workout = factory::build(
        "SWM",
        &[json!("720"), json!("1"), json!("80"), json!("25"), json!("40")],
    )
    .unwrap();

    assert!((workout.mean_speed_kmh() - 1.0).abs() < 1e-9);
}

#[test]
fn test_build_accepts_decimal_text() {
    // Fractional floats are fine anywhere but count fields, and a count
    // written with a trailing ".0" is still a whole number.
    let workout =
        factory::build("RUN", &[json!("15000.0"), json!("1.5"), json!(75.5)]).unwrap();

    assert_eq!(workout.action_count(), 15000);
    assert!((workout.duration_hours() - 1.5).abs() < f64::EPSILON);
    assert!((workout.weight_kg() - 75.5).abs() < f64::EPSILON);
}

// === Unknown workout codes ===

#[test]
fn test_unknown_code_rejected() {
    let result = factory::build("WLKM", &[json!(9000), json!(1), json!(75), json!(180)]);

    assert_eq!(
        result.unwrap_err(),
        TrackerError::unknown_workout("WLKM")
    );
}

#[test]
fn test_codes_match_case_sensitively() {
    let result = factory::build("run", &[json!(15000), json!(1), json!(75)]);
    assert!(matches!(
        result,
        Err(TrackerError::UnknownWorkout { .. })
    ));
}

// === Field counts ===

#[test]
fn test_short_package_rejected() {
    let result = factory::build("SWM", &[json!(720), json!(1), json!(80), json!(25)]);

    let error = result.unwrap_err();
    assert_eq!(error, TrackerError::field_count_mismatch("SWM", 5, 4));
    assert_eq!(error.to_string(), "wrong data for workout SWM");
}

#[test]
fn test_long_package_rejected() {
    let result = factory::build("RUN", &[json!(15000), json!(1), json!(75), json!(180)]);

    assert!(matches!(
        result,
        Err(TrackerError::FieldCountMismatch {
            expected: 3,
            actual: 4,
            ..
        })
    ));
}

// === Numeric checks ===

#[test]
fn test_letters_in_value_rejected() {
    let result = factory::build("RUN", &[json!(15000), json!("1a"), json!(75)]);
    assert_eq!(result.unwrap_err(), TrackerError::NonNumericData);
}

#[test]
fn test_negative_values_rejected() {
    // Signs fail the numeric-text check whether the value arrives as a JSON
    // number or as a string.
    let as_number = factory::build("RUN", &[json!(-15000), json!(1), json!(75)]);
    assert_eq!(as_number.unwrap_err(), TrackerError::NonNumericData);

    let as_string = factory::build("RUN", &[json!("-15000"), json!(1), json!(75)]);
    assert_eq!(as_string.unwrap_err(), TrackerError::NonNumericData);
}

#[test]
fn test_exponent_notation_rejected() {
    let result = factory::build("RUN", &[json!("1e5"), json!(1), json!(75)]);
    assert_eq!(result.unwrap_err(), TrackerError::NonNumericData);
}

#[test]
fn test_malformed_decimal_text_rejected() {
    for bad in ["1.2.3", "", ".", " 1"] {
        let result = factory::build("RUN", &[json!(bad), json!(1), json!(75)]);
        assert_eq!(
            result.unwrap_err(),
            TrackerError::NonNumericData,
            "{bad:?} should fail the numeric check"
        );
    }
}

#[test]
fn test_non_scalar_values_rejected() {
    for bad in [json!(true), json!(null), json!([720]), json!({"v": 720})] {
        let result = factory::build("RUN", &[bad.clone(), json!(1), json!(75)]);
        assert_eq!(
            result.unwrap_err(),
            TrackerError::NonNumericData,
            "{bad} should have no numeric reading"
        );
    }
}

// === Construction invariants ===

#[test]
fn test_zero_duration_rejected() {
    for (code, values) in [
        ("RUN", vec![json!(15000), json!(0), json!(75)]),
        ("WLK", vec![json!(9000), json!(0), json!(75), json!(180)]),
        ("SWM", vec![json!(720), json!(0), json!(80), json!(25), json!(40)]),
    ] {
        let result = factory::build(code, &values);
        assert!(
            matches!(result, Err(TrackerError::InvalidFieldValue { .. })),
            "zero duration should be rejected for {code}"
        );
    }
}

#[test]
fn test_zero_height_rejected_for_walking() {
    let result = factory::build("WLK", &[json!(9000), json!(1), json!(75), json!(0)]);
    assert!(matches!(
        result,
        Err(TrackerError::InvalidFieldValue { .. })
    ));
}

#[test]
fn test_fractional_count_rejected() {
    let result = factory::build(
        "SWM",
        &[json!("720.5"), json!(1), json!(80), json!(25), json!(40)],
    );

    let error = result.unwrap_err();
    assert!(matches!(error, TrackerError::InvalidFieldValue { .. }));
    assert!(error.to_string().contains("whole number"));
}

// === Check ordering ===

#[test]
fn test_unknown_code_wins_over_later_checks() {
    // The registry lookup runs first, so a bad code masks a bad payload.
    let result = factory::build("WLKM", &[json!("nonsense")]);
    assert!(matches!(
        result,
        Err(TrackerError::UnknownWorkout { .. })
    ));
}

#[test]
fn test_field_count_wins_over_numeric_check() {
    let result = factory::build("RUN", &[json!("1a"), json!(1)]);
    assert!(matches!(
        result,
        Err(TrackerError::FieldCountMismatch { .. })
    ));
}

#[test]
fn test_empty_payload_is_a_count_mismatch() {
    let empty: Vec<Value> = Vec::new();
    let result = factory::build("RUN", &empty);
    assert!(matches!(
        result,
        Err(TrackerError::FieldCountMismatch {
            expected: 3,
            actual: 0,
            ..
        })
    ));
}
