// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_operator, create_test_roster, set_entry};
use crate::{
    Contract, OperatorSummary, PlannerEntry, Roster, ShiftCode, SpecialEvent, SpecialEventMode,
    coverage, operator_summary,
};
use std::collections::BTreeMap;
use time::macros::date;

#[test]
fn test_summary_over_one_cycle() {
    let roster: Roster = create_test_roster();

    // 2025-01-01 (Wednesday) to 2025-01-06: M8 M8 P P R R.
    let summary: OperatorSummary = operator_summary(
        &roster,
        &roster.operators[0],
        date!(2025 - 01 - 01),
        date!(2025 - 01 - 06),
    );

    assert_eq!(summary.total_hours, 30.0);
    assert_eq!(summary.working_days, 4);
    assert_eq!(summary.absence_days, 2);
    assert_eq!(summary.weekend_shifts, 1);
    assert_eq!(summary.night_shifts, 0);
}

#[test]
fn test_summary_counts_inherited_and_special_hours() {
    let mut roster: Roster = create_test_roster();
    set_entry(&mut roster, date!(2025 - 01 - 01), "FE");
    let mut entry: PlannerEntry = PlannerEntry::new(
        &crate::OperatorId::new("op-1"),
        date!(2025 - 01 - 02),
        "N",
    );
    entry.special_events = vec![SpecialEvent::new(SpecialEventMode::Additive, 1.0, "handover")];
    roster.entries.insert(entry);
    set_entry(&mut roster, date!(2025 - 01 - 03), "XX");

    let summary: OperatorSummary = operator_summary(
        &roster,
        &roster.operators[0],
        date!(2025 - 01 - 01),
        date!(2025 - 01 - 03),
    );

    // FE inherits 8h from M8, N is 9h + 1h, XX is unknown.
    assert_eq!(summary.total_hours, 18.0);
    assert_eq!(summary.working_days, 1);
    assert_eq!(summary.night_shifts, 1);
    assert_eq!(summary.absence_days, 1);
    assert_eq!(summary.unknown_code_days, 1);
}

#[test]
fn test_summary_counts_not_employed_days() {
    let roster: Roster = create_test_roster();

    let summary: OperatorSummary = operator_summary(
        &roster,
        &roster.operators[0],
        date!(2023 - 12 - 30),
        date!(2024 - 01 - 01),
    );

    assert_eq!(summary.not_employed_days, 2);
    assert_eq!(summary.total_hours, 0.0);
}

#[test]
fn test_summary_of_inverted_range_is_empty() {
    let roster: Roster = create_test_roster();

    let summary: OperatorSummary = operator_summary(
        &roster,
        &roster.operators[0],
        date!(2025 - 01 - 06),
        date!(2025 - 01 - 01),
    );

    assert_eq!(summary, OperatorSummary::default());
}

#[test]
fn test_coverage_excludes_unemployed_and_inactive_operators() {
    let mut roster: Roster = create_test_roster();

    let mut second = create_test_operator();
    second.id = crate::OperatorId::new("op-2");
    roster.operators.push(second);

    let mut departed = create_test_operator();
    departed.id = crate::OperatorId::new("op-3");
    departed.contracts = vec![Contract::new(
        "c-1",
        date!(2024 - 01 - 01),
        Some(date!(2024 - 12 - 31)),
    )];
    roster.operators.push(departed);

    let mut hidden = create_test_operator();
    hidden.id = crate::OperatorId::new("op-4");
    hidden.is_active = false;
    roster.operators.push(hidden);

    set_entry(&mut roster, date!(2025 - 01 - 01), "P");

    let counts: BTreeMap<ShiftCode, usize> = coverage(&roster, date!(2025 - 01 - 01));

    assert_eq!(counts.get(&ShiftCode::new("M8")), Some(&1));
    assert_eq!(counts.get(&ShiftCode::new("P")), Some(&1));
    assert_eq!(counts.values().sum::<usize>(), 2);
}
