// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Contract, Matrix, MatrixAssignment, Operator, OperatorId, PlannerEntry, Roster, ShiftType,
};
use time::Date;
use time::macros::date;

pub const ROTATION_START: Date = date!(2025 - 01 - 01);

pub fn create_test_shift_types() -> Vec<ShiftType> {
    let mut night: ShiftType = ShiftType::new("N", "Night", 9.0);
    night.is_night = true;

    let mut vacation: ShiftType = ShiftType::new("FE", "Vacation", 0.0);
    vacation.inherits_hours = true;

    let mut sick: ShiftType = ShiftType::new("MAL", "Sick leave", 0.0);
    sick.inherits_hours = true;

    vec![
        ShiftType::new("M8", "Morning 8h", 8.0),
        ShiftType::new("M6", "Morning 6h", 6.0),
        ShiftType::new("P", "Afternoon", 7.0),
        night,
        ShiftType::new("R", "Rest", 0.0),
        vacation,
        sick,
    ]
}

/// `[M8, M8, P, P, R, R]`
pub fn create_test_matrix() -> Matrix {
    Matrix::new("ROT6", "Six day rotation", &["M8", "M8", "P", "P", "R", "R"]).unwrap()
}

/// Seven working days in a row, then rest.
pub fn create_test_long_matrix() -> Matrix {
    Matrix::new(
        "LONG",
        "Long streak",
        &["M8", "M8", "M8", "M8", "M8", "M8", "M8", "R"],
    )
    .unwrap()
}

pub fn create_test_operator() -> Operator {
    let mut operator: Operator = Operator::new("op-1", "Ada Rossi");
    operator
        .add_contract(Contract::new("c-1", date!(2024 - 01 - 01), None))
        .unwrap();
    operator
        .assign_matrix(MatrixAssignment::new("a-1", "ROT6", ROTATION_START))
        .unwrap();
    operator
}

pub fn create_test_roster() -> Roster {
    let mut roster: Roster = Roster::new();
    roster.shift_types = create_test_shift_types();
    roster.matrices = vec![create_test_matrix(), create_test_long_matrix()];
    roster.operators = vec![create_test_operator()];
    roster
}

pub fn operator_id() -> OperatorId {
    OperatorId::new("op-1")
}

pub fn set_entry(roster: &mut Roster, date: Date, code: &str) {
    roster
        .entries
        .insert(PlannerEntry::new(&operator_id(), date, code));
}
