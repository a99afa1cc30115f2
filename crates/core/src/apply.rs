// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use shift_roster_domain::{
    DomainError, Matrix, OperatorId, PlannerEntry, Roster, ShiftType, Violation, validate,
    validate_matrix, validate_rule_config, validate_shift_type,
};
use tracing::warn;

/// Applies a command to a roster, producing the next roster.
///
/// The input is never modified. A failed command leaves no trace: for a
/// batch, either every sub-command applies or none does.
///
/// # Arguments
///
/// * `roster` - The current roster (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(Roster)` with the command applied
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The command references an operator, matrix, shift type, contract or
///   assignment that does not exist
/// - An operator with the same identifier already exists
/// - A contract overlaps an existing one or an interval is malformed
/// - A shift type, matrix or rule configuration fails validation
/// - A batch contains a navigation or restore command
pub fn apply(roster: &Roster, command: Command) -> Result<Roster, CoreError> {
    let name: &'static str = command.name();
    let mut next: Roster = roster.clone();

    match apply_in_place(&mut next, command) {
        Ok(()) => Ok(next),
        Err(err) => {
            warn!(command = name, error = %err, "Command rejected");
            Err(err)
        }
    }
}

#[allow(clippy::too_many_lines)]
fn apply_in_place(roster: &mut Roster, command: Command) -> Result<(), CoreError> {
    match command {
        Command::AddOperator { operator } => {
            if roster.operator(&operator.id).is_some() {
                return Err(DomainError::DuplicateOperator(operator.id.value().to_string()).into());
            }
            roster.operators.push(operator);
        }
        Command::UpdateOperator {
            operator_id,
            name,
            is_active,
        } => {
            let operator = roster.operator_mut(&operator_id)?;
            operator.name = name;
            operator.is_active = is_active;
        }
        Command::DeleteOperator { operator_id } => {
            let before: usize = roster.operators.len();
            roster.operators.retain(|operator| operator.id != operator_id);
            if roster.operators.len() == before {
                return Err(operator_not_found(&operator_id));
            }
            roster.entries.remove_operator(&operator_id);
            if roster.view.selected_operator.as_ref() == Some(&operator_id) {
                roster.view.selected_operator = None;
            }
        }
        Command::AddContract {
            operator_id,
            contract,
        } => {
            roster.operator_mut(&operator_id)?.add_contract(contract)?;
        }
        Command::RemoveContract {
            operator_id,
            contract_id,
        } => {
            roster
                .operator_mut(&operator_id)?
                .remove_contract(&contract_id)?;
        }
        Command::AssignMatrix {
            operator_id,
            assignment,
        } => {
            if roster.matrix(&assignment.matrix_id).is_none() {
                return Err(
                    DomainError::MatrixNotFound(assignment.matrix_id.value().to_string()).into(),
                );
            }
            roster.operator_mut(&operator_id)?.assign_matrix(assignment)?;
        }
        Command::RemoveMatrixAssignment {
            operator_id,
            assignment_id,
        } => {
            roster
                .operator_mut(&operator_id)?
                .remove_assignment(&assignment_id)?;
        }
        Command::MigrateLegacyAssignment { operator_id } => {
            roster
                .operator_mut(&operator_id)?
                .migrate_legacy_assignment()?;
        }
        Command::UpsertShiftType { shift_type } => {
            validate_shift_type(&shift_type)?;
            upsert_shift_type(roster, shift_type);
        }
        Command::DeleteShiftType { code } => {
            let before: usize = roster.shift_types.len();
            roster.shift_types.retain(|shift_type| shift_type.code != code);
            if roster.shift_types.len() == before {
                return Err(DomainError::ShiftTypeNotFound(code.value().to_string()).into());
            }
        }
        Command::UpsertMatrix { matrix } => {
            validate_matrix(&matrix)?;
            upsert_matrix(roster, matrix);
        }
        Command::DeleteMatrix { matrix_id } => {
            let before: usize = roster.matrices.len();
            roster.matrices.retain(|matrix| matrix.id != matrix_id);
            if roster.matrices.len() == before {
                return Err(DomainError::MatrixNotFound(matrix_id.value().to_string()).into());
            }
        }
        Command::SetEntry { entry } => {
            if roster.operator(&entry.operator_id).is_none() {
                return Err(operator_not_found(&entry.operator_id));
            }
            roster.entries.insert(entry);
        }
        Command::AssignShift {
            operator_id,
            date,
            code,
            note,
        } => {
            if roster.operator(&operator_id).is_none() {
                return Err(operator_not_found(&operator_id));
            }
            let violation: Option<Violation> = validate(roster, &operator_id, date, &code);

            let mut entry: PlannerEntry = PlannerEntry::new(&operator_id, date, code.value());
            entry.note = note;
            entry.violation = violation;
            roster.entries.insert(entry);
        }
        Command::ClearEntry { operator_id, date } => {
            roster.entries.remove(&operator_id, date);
        }
        Command::Batch(commands) => {
            for (index, sub_command) in commands.into_iter().enumerate() {
                let result: Result<(), CoreError> = if sub_command.is_tracked() {
                    apply_in_place(roster, sub_command)
                } else {
                    Err(CoreError::NotBatchable {
                        command: sub_command.name(),
                    })
                };
                result.map_err(|err| CoreError::BatchRejected {
                    index,
                    source: Box::new(err),
                })?;
            }
        }
        Command::UpdateRules { rules } => {
            validate_rule_config(&rules)?;
            roster.rules = rules;
        }
        Command::SetViewDate { date } => {
            roster.view.focus_date = date;
        }
        Command::SelectOperator { operator_id } => {
            if let Some(id) = operator_id
                .as_ref()
                .filter(|id| roster.operator(id).is_none())
            {
                return Err(operator_not_found(id));
            }
            roster.view.selected_operator = operator_id;
        }
        Command::Restore { roster: restored } => {
            *roster = *restored;
        }
    }

    Ok(())
}

fn upsert_shift_type(roster: &mut Roster, shift_type: ShiftType) {
    match roster
        .shift_types
        .iter_mut()
        .find(|existing| existing.code == shift_type.code)
    {
        Some(existing) => *existing = shift_type,
        None => roster.shift_types.push(shift_type),
    }
}

fn upsert_matrix(roster: &mut Roster, matrix: Matrix) {
    match roster
        .matrices
        .iter_mut()
        .find(|existing| existing.id == matrix.id)
    {
        Some(existing) => *existing = matrix,
        None => roster.matrices.push(matrix),
    }
}

fn operator_not_found(operator_id: &OperatorId) -> CoreError {
    DomainError::OperatorNotFound(operator_id.value().to_string()).into()
}
