// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_operator;
use crate::{
    ActiveRotation, Contract, DomainError, LegacyAssignment, MatrixAssignment, MatrixId, Operator,
};
use time::macros::date;

#[test]
fn test_add_contract_rejects_overlap() {
    let mut operator: Operator = create_test_operator();

    let result: Result<(), DomainError> =
        operator.add_contract(Contract::new("c-2", date!(2025 - 06 - 01), None));

    assert!(matches!(
        result,
        Err(DomainError::OverlappingContract { .. })
    ));
    assert_eq!(operator.contracts.len(), 1);
}

#[test]
fn test_add_contract_rejects_inverted_range() {
    let mut operator: Operator = Operator::new("op-2", "Bea");

    let result: Result<(), DomainError> = operator.add_contract(Contract::new(
        "c-1",
        date!(2025 - 06 - 01),
        Some(date!(2025 - 05 - 01)),
    ));

    assert!(matches!(result, Err(DomainError::MalformedInterval { .. })));
}

#[test]
fn test_add_contract_keeps_contracts_ordered() {
    let mut operator: Operator = Operator::new("op-2", "Bea");
    operator
        .add_contract(Contract::new("late", date!(2025 - 01 - 01), None))
        .unwrap();
    operator
        .add_contract(Contract::new(
            "early",
            date!(2023 - 01 - 01),
            Some(date!(2023 - 12 - 31)),
        ))
        .unwrap();

    let ids: Vec<&str> = operator.contracts.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["early", "late"]);
}

#[test]
fn test_remove_missing_contract_is_error() {
    let mut operator: Operator = create_test_operator();

    assert!(matches!(
        operator.remove_contract("nope"),
        Err(DomainError::ContractNotFound { .. })
    ));
    assert!(operator.remove_contract("c-1").is_ok());
    assert!(operator.contracts.is_empty());
}

#[test]
fn test_remove_assignment() {
    let mut operator: Operator = create_test_operator();

    assert!(matches!(
        operator.remove_assignment("nope"),
        Err(DomainError::AssignmentNotFound { .. })
    ));
    assert!(operator.remove_assignment("a-1").is_ok());
    assert!(operator.active_rotation(date!(2025 - 02 - 01)).is_none());
}

#[test]
fn test_assign_matrix_closes_current_assignment() {
    let mut operator: Operator = create_test_operator();
    operator
        .assign_matrix(MatrixAssignment::new("a-2", "LONG", date!(2025 - 04 - 01)))
        .unwrap();

    assert_eq!(operator.matrix_history[0].id, "a-2");
    assert_eq!(
        operator.matrix_history[1].end_date,
        Some(date!(2025 - 03 - 31))
    );
}

#[test]
fn test_migrate_legacy_assignment_fills_span_before_history() {
    let mut operator: Operator = create_test_operator();
    operator.legacy_assignment = Some(LegacyAssignment {
        matrix_id: MatrixId::new("LONG"),
        start_date: date!(2024 - 06 - 01),
    });

    operator.migrate_legacy_assignment().unwrap();

    assert!(operator.legacy_assignment.is_none());
    assert_eq!(operator.matrix_history.len(), 2);
    let migrated: &MatrixAssignment = &operator.matrix_history[1];
    assert_eq!(migrated.matrix_id, MatrixId::new("LONG"));
    assert_eq!(migrated.start_date, date!(2024 - 06 - 01));
    assert_eq!(migrated.end_date, Some(date!(2024 - 12 - 31)));
    assert!(matches!(
        operator.active_rotation(date!(2024 - 07 - 01)),
        Some(ActiveRotation::History(_))
    ));
}

#[test]
fn test_migrate_legacy_assignment_drops_shadowed_record() {
    let mut operator: Operator = create_test_operator();
    operator.legacy_assignment = Some(LegacyAssignment {
        matrix_id: MatrixId::new("LONG"),
        start_date: date!(2025 - 02 - 01),
    });

    operator.migrate_legacy_assignment().unwrap();

    assert!(operator.legacy_assignment.is_none());
    assert_eq!(operator.matrix_history.len(), 1);
}

#[test]
fn test_migrate_legacy_assignment_without_history() {
    let mut operator: Operator = Operator::new("op-2", "Bea");
    operator.legacy_assignment = Some(LegacyAssignment {
        matrix_id: MatrixId::new("ROT6"),
        start_date: date!(2024 - 06 - 01),
    });

    operator.migrate_legacy_assignment().unwrap();

    assert_eq!(operator.matrix_history.len(), 1);
    assert_eq!(operator.matrix_history[0].end_date, None);
}

#[test]
fn test_migrate_legacy_assignment_fills_every_gap() {
    let mut operator: Operator = create_test_operator();
    let mut first: MatrixAssignment =
        MatrixAssignment::new("a", "ROT6", date!(2024 - 01 - 01));
    first.end_date = Some(date!(2024 - 06 - 30));
    let mut second: MatrixAssignment =
        MatrixAssignment::new("b", "ROT6", date!(2024 - 10 - 01));
    second.end_date = Some(date!(2024 - 12 - 31));
    operator.matrix_history = vec![second, first];
    operator.legacy_assignment = Some(LegacyAssignment {
        matrix_id: MatrixId::new("LONG"),
        start_date: date!(2024 - 03 - 01),
    });

    operator.migrate_legacy_assignment().unwrap();

    let history: &Vec<MatrixAssignment> = &operator.matrix_history;
    assert_eq!(history.len(), 4);

    let open: &MatrixAssignment = &history[0];
    assert_eq!(open.id, "legacy-op-1-2");
    assert_eq!(open.start_date, date!(2025 - 01 - 01));
    assert_eq!(open.end_date, None);
    assert_eq!(open.anchor(), date!(2024 - 03 - 01));

    let gap: &MatrixAssignment = &history[2];
    assert_eq!(gap.id, "legacy-op-1");
    assert_eq!(gap.matrix_id, MatrixId::new("LONG"));
    assert_eq!(gap.start_date, date!(2024 - 07 - 01));
    assert_eq!(gap.end_date, Some(date!(2024 - 09 - 30)));
    assert_eq!(gap.anchor(), date!(2024 - 03 - 01));
}
