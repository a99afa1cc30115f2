// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Command;
use shift_roster_domain::{
    Contract, Matrix, MatrixAssignment, Operator, OperatorId, Roster, ShiftCode, ShiftType,
};
use time::Date;
use time::macros::date;

pub const ROTATION_START: Date = date!(2025 - 01 - 01);

pub fn create_test_shift_types() -> Vec<ShiftType> {
    let mut night: ShiftType = ShiftType::new("N", "Night", 9.0);
    night.is_night = true;

    let mut vacation: ShiftType = ShiftType::new("FE", "Vacation", 0.0);
    vacation.inherits_hours = true;

    vec![
        ShiftType::new("M8", "Morning 8h", 8.0),
        ShiftType::new("P", "Afternoon", 7.0),
        night,
        ShiftType::new("R", "Rest", 0.0),
        vacation,
    ]
}

/// `[M8, M8, P, P, R, R]`
pub fn create_test_matrix() -> Matrix {
    Matrix::new("ROT6", "Six day rotation", &["M8", "M8", "P", "P", "R", "R"]).unwrap()
}

pub fn create_test_operator(id: &str, name: &str) -> Operator {
    let mut operator: Operator = Operator::new(id, name);
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
    roster.matrices = vec![create_test_matrix()];
    roster.operators = vec![create_test_operator("op-1", "Ada Rossi")];
    roster
}

pub fn operator_id() -> OperatorId {
    OperatorId::new("op-1")
}

pub fn assign(date: Date, code: &str) -> Command {
    Command::AssignShift {
        operator_id: operator_id(),
        date,
        code: ShiftCode::new(code),
        note: None,
    }
}
