// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_roster_domain::{
    Contract, Matrix, MatrixAssignment, MatrixId, Operator, OperatorId, PlannerEntry, Roster,
    RuleConfig, ShiftCode, ShiftType,
};
use time::Date;

/// A command represents an edit to the roster as data only.
///
/// Commands are the only way to request changes to the dataset held by a
/// [`History`](crate::History).
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a new operator.
    AddOperator {
        /// The operator, with any contracts and assignments already attached.
        operator: Operator,
    },
    /// Edit an operator's profile fields.
    UpdateOperator {
        /// The operator to edit.
        operator_id: OperatorId,
        /// The new display name.
        name: String,
        /// The new scheduling visibility flag.
        is_active: bool,
    },
    /// Remove an operator and every planner entry that belongs to them.
    DeleteOperator {
        /// The operator to remove.
        operator_id: OperatorId,
    },
    /// Add an employment period to an operator.
    AddContract {
        /// The operator.
        operator_id: OperatorId,
        /// The new contract.
        contract: Contract,
    },
    /// Remove an employment period.
    RemoveContract {
        /// The operator.
        operator_id: OperatorId,
        /// The contract identifier.
        contract_id: String,
    },
    /// Insert a matrix assignment into an operator's history.
    AssignMatrix {
        /// The operator.
        operator_id: OperatorId,
        /// The new assignment.
        assignment: MatrixAssignment,
    },
    /// Remove a matrix assignment from an operator's history.
    RemoveMatrixAssignment {
        /// The operator.
        operator_id: OperatorId,
        /// The assignment identifier.
        assignment_id: String,
    },
    /// Fold an operator's legacy single assignment into their history.
    MigrateLegacyAssignment {
        /// The operator.
        operator_id: OperatorId,
    },
    /// Create a shift type, or replace the one with the same code.
    UpsertShiftType {
        /// The shift type.
        shift_type: ShiftType,
    },
    /// Remove a shift type. Entries using its code become unknown codes.
    DeleteShiftType {
        /// The shift code.
        code: ShiftCode,
    },
    /// Create a matrix, or replace the one with the same identifier.
    UpsertMatrix {
        /// The matrix.
        matrix: Matrix,
    },
    /// Remove a matrix. Assignments referencing it stop producing shifts.
    DeleteMatrix {
        /// The matrix identifier.
        matrix_id: MatrixId,
    },
    /// Store a planner entry verbatim.
    SetEntry {
        /// The entry.
        entry: PlannerEntry,
    },
    /// Assign a shift, recording any rule violation on the new entry.
    AssignShift {
        /// The operator.
        operator_id: OperatorId,
        /// The date.
        date: Date,
        /// The shift code. An empty code marks an explicit day off.
        code: ShiftCode,
        /// Optional note.
        note: Option<String>,
    },
    /// Delete a planner entry so the rotation applies again.
    ClearEntry {
        /// The operator.
        operator_id: OperatorId,
        /// The date.
        date: Date,
    },
    /// Apply several commands as one edit.
    ///
    /// Only recorded edits may appear inside; navigation and restore
    /// commands are rejected.
    Batch(Vec<Self>),
    /// Replace the workplace rule configuration.
    UpdateRules {
        /// The new rules.
        rules: RuleConfig,
    },
    /// Move the focused date. Not recorded in history.
    SetViewDate {
        /// The new focus date.
        date: Option<Date>,
    },
    /// Change the selected operator. Not recorded in history.
    SelectOperator {
        /// The operator, or `None` to clear the selection.
        operator_id: Option<OperatorId>,
    },
    /// Replace the whole dataset and start a new history baseline.
    Restore {
        /// The dataset to load.
        roster: Box<Roster>,
    },
}

impl Command {
    /// Returns whether applying this command records a history entry.
    #[must_use]
    pub const fn is_tracked(&self) -> bool {
        !matches!(
            self,
            Self::SetViewDate { .. } | Self::SelectOperator { .. } | Self::Restore { .. }
        )
    }

    /// A stable name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddOperator { .. } => "AddOperator",
            Self::UpdateOperator { .. } => "UpdateOperator",
            Self::DeleteOperator { .. } => "DeleteOperator",
            Self::AddContract { .. } => "AddContract",
            Self::RemoveContract { .. } => "RemoveContract",
            Self::AssignMatrix { .. } => "AssignMatrix",
            Self::RemoveMatrixAssignment { .. } => "RemoveMatrixAssignment",
            Self::MigrateLegacyAssignment { .. } => "MigrateLegacyAssignment",
            Self::UpsertShiftType { .. } => "UpsertShiftType",
            Self::DeleteShiftType { .. } => "DeleteShiftType",
            Self::UpsertMatrix { .. } => "UpsertMatrix",
            Self::DeleteMatrix { .. } => "DeleteMatrix",
            Self::SetEntry { .. } => "SetEntry",
            Self::AssignShift { .. } => "AssignShift",
            Self::ClearEntry { .. } => "ClearEntry",
            Self::Batch(_) => "Batch",
            Self::UpdateRules { .. } => "UpdateRules",
            Self::SetViewDate { .. } => "SetViewDate",
            Self::SelectOperator { .. } => "SelectOperator",
            Self::Restore { .. } => "Restore",
        }
    }
}
