// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, RuleConfig, ShiftType, validate_shift_type};
use time::macros::date;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::MalformedInterval {
        start: date!(2025 - 06 - 01),
        end: date!(2025 - 05 - 01),
    };
    assert_eq!(
        format!("{err}"),
        "Interval starting 2025-06-01 ends before it starts (2025-05-01)"
    );

    let err: DomainError = DomainError::EmptyMatrix {
        matrix_id: String::from("ROT6"),
    };
    assert_eq!(
        format!("{err}"),
        "Matrix 'ROT6' must contain at least one shift code"
    );

    let err: DomainError = DomainError::OperatorNotFound(String::from("op-1"));
    assert_eq!(format!("{err}"), "Operator 'op-1' not found");

    let err: DomainError = DomainError::ContractNotFound {
        operator: String::from("op-1"),
        contract: String::from("c-9"),
    };
    assert_eq!(
        format!("{err}"),
        "Contract 'c-9' not found for operator 'op-1'"
    );
}

#[test]
fn test_rule_config_rejects_zero_max_days() {
    assert!(matches!(
        RuleConfig::new(11, 0),
        Err(DomainError::InvalidRuleConfig(_))
    ));
    assert!(matches!(
        RuleConfig::new(25, 6),
        Err(DomainError::InvalidRuleConfig(_))
    ));
    assert!(RuleConfig::new(11, 6).is_ok());
}

#[test]
fn test_shift_type_validation() {
    assert!(validate_shift_type(&ShiftType::new("M8", "Morning", 8.0)).is_ok());
    assert!(matches!(
        validate_shift_type(&ShiftType::new("  ", "Blank", 8.0)),
        Err(DomainError::InvalidShiftCode(_))
    ));
    assert!(matches!(
        validate_shift_type(&ShiftType::new("X", "Negative", -1.0)),
        Err(DomainError::InvalidDuration { .. })
    ));
}
