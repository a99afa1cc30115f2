// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{ROTATION_START, create_test_matrix};
use crate::{DomainError, Matrix, MatrixId, ShiftCode, days_between, rotation_shift};
use time::Duration;
use time::macros::date;

fn code_at(matrix: &Matrix, target: time::Date) -> Option<String> {
    rotation_shift(matrix, ROTATION_START, target).map(|code| code.value().to_string())
}

#[test]
fn test_anchor_day_uses_first_code() {
    let matrix: Matrix = create_test_matrix();
    assert_eq!(code_at(&matrix, ROTATION_START).as_deref(), Some("M8"));
}

#[test]
fn test_rotation_is_periodic() {
    let matrix: Matrix = create_test_matrix();
    let length: i64 = i64::try_from(matrix.cycle_length()).unwrap();

    for offset in 0..length {
        let day: time::Date = ROTATION_START + Duration::days(offset);
        let next_cycle: time::Date = day + Duration::days(length);
        assert_eq!(code_at(&matrix, day), code_at(&matrix, next_cycle));
    }
}

#[test]
fn test_rotation_offsets() {
    let matrix: Matrix = create_test_matrix();

    assert_eq!(code_at(&matrix, date!(2025 - 01 - 05)).as_deref(), Some("R"));
    assert_eq!(code_at(&matrix, date!(2025 - 01 - 07)).as_deref(), Some("M8"));
    assert_eq!(code_at(&matrix, date!(2025 - 01 - 03)).as_deref(), Some("P"));
}

#[test]
fn test_rotation_crosses_leap_day() {
    let matrix: Matrix = create_test_matrix();
    let anchor: time::Date = date!(2024 - 02 - 28);

    // 2024-02-28 +2 days is 2024-03-01 because of the leap day.
    assert_eq!(
        rotation_shift(&matrix, anchor, date!(2024 - 03 - 01)),
        Some(&ShiftCode::new("P"))
    );
}

#[test]
fn test_date_before_anchor_has_no_shift() {
    let matrix: Matrix = create_test_matrix();
    assert!(code_at(&matrix, date!(2024 - 12 - 31)).is_none());
}

#[test]
fn test_empty_sequence_has_no_shift() {
    let matrix: Matrix = Matrix {
        id: MatrixId::new("EMPTY"),
        name: String::new(),
        sequence: Vec::new(),
    };
    assert!(code_at(&matrix, date!(2025 - 02 - 01)).is_none());
}

#[test]
fn test_matrix_new_rejects_empty_sequence() {
    let result: Result<Matrix, DomainError> = Matrix::new("EMPTY", "Empty", &[]);
    assert!(matches!(result, Err(DomainError::EmptyMatrix { .. })));
}

#[test]
fn test_days_between_counts_calendar_days() {
    assert_eq!(days_between(date!(2025 - 01 - 01), date!(2025 - 01 - 07)), 6);
    assert_eq!(days_between(date!(2025 - 03 - 29), date!(2025 - 03 - 31)), 2);
    assert_eq!(days_between(date!(2025 - 01 - 07), date!(2025 - 01 - 01)), -6);
}
