// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_roster, operator_id, set_entry};
use crate::{
    DEFAULT_MAX_CONSECUTIVE_DAYS, DEFAULT_MIN_REST_HOURS, Roster, ShiftCode, ShiftWindow,
};
use time::macros::{date, time};

#[test]
fn test_empty_object_deserializes_to_default_roster() {
    let roster: Roster = serde_json::from_str("{}").unwrap();

    assert!(roster.operators.is_empty());
    assert!(roster.entries.is_empty());
    assert_eq!(roster.rules.min_rest_hours, DEFAULT_MIN_REST_HOURS);
    assert_eq!(
        roster.rules.max_consecutive_days,
        DEFAULT_MAX_CONSECUTIVE_DAYS
    );
}

#[test]
fn test_partial_operator_gets_defaults() {
    let json: &str = r#"{
        "operators": [{ "id": "op-9" }],
        "rules": { "min_rest_hours": 12 }
    }"#;

    let roster: Roster = serde_json::from_str(json).unwrap();

    let operator = &roster.operators[0];
    assert!(operator.is_active);
    assert!(operator.contracts.is_empty());
    assert!(operator.matrix_history.is_empty());
    assert!(operator.legacy_assignment.is_none());
    assert_eq!(roster.rules.min_rest_hours, 12);
    assert_eq!(
        roster.rules.max_consecutive_days,
        DEFAULT_MAX_CONSECUTIVE_DAYS
    );
}

#[test]
fn test_dates_and_entries_use_plain_strings() {
    let mut roster: Roster = create_test_roster();
    set_entry(&mut roster, date!(2025 - 01 - 09), "p");

    let value: serde_json::Value = serde_json::to_value(&roster).unwrap();

    assert_eq!(
        value["operators"][0]["contracts"][0]["start_date"],
        "2024-01-01"
    );
    assert_eq!(value["entries"][0]["date"], "2025-01-09");
    assert_eq!(value["entries"][0]["code"], "P");
    assert_eq!(value["entries"][0]["operator_id"], "op-1");
}

#[test]
fn test_shift_codes_are_normalized_on_load() {
    let json: &str = r#"{
        "entries": [{ "operator_id": "op-1", "date": "2025-01-09", "code": " m8 " }]
    }"#;

    let roster: Roster = serde_json::from_str(json).unwrap();

    assert_eq!(
        roster.entry(&operator_id(), date!(2025 - 01 - 09)).map(|e| &e.code),
        Some(&ShiftCode::new("M8"))
    );
}

#[test]
fn test_shift_window_uses_clock_strings() {
    let window: ShiftWindow = serde_json::from_str(r#"{ "start": "21:30", "end": "06:15" }"#).unwrap();

    assert_eq!(window.start, time!(21:30));
    assert_eq!(window.end, time!(06:15));
    assert!(window.wraps_midnight());
}
