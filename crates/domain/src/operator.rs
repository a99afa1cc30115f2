// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::interval::{DateInterval, IntervalIndex, insert_interval, overlaps};
use crate::types::{MatrixId, OperatorId};
use serde::{Deserialize, Serialize};
use time::Date;

/// A period of employment eligibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// The contract identifier.
    pub id: String,
    /// First day of employment under this contract.
    #[serde(with = "crate::iso_date")]
    pub start_date: Date,
    /// Last day of employment, or `None` when open-ended.
    #[serde(default, with = "crate::iso_date::option")]
    pub end_date: Option<Date>,
}

impl Contract {
    /// Creates a new `Contract`.
    #[must_use]
    pub fn new(id: &str, start_date: Date, end_date: Option<Date>) -> Self {
        Self {
            id: id.to_string(),
            start_date,
            end_date,
        }
    }
}

impl DateInterval for Contract {
    fn start(&self) -> Date {
        self.start_date
    }

    fn end(&self) -> Option<Date> {
        self.end_date
    }

    fn set_end(&mut self, end: Option<Date>) {
        self.end_date = end;
    }
}

/// A dated period during which a matrix applies to an operator.
///
/// The start date anchors the rotation (day zero of the cycle) unless an
/// explicit anchor is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixAssignment {
    /// The assignment identifier.
    pub id: String,
    /// The assigned matrix.
    pub matrix_id: MatrixId,
    /// First day of the assignment.
    #[serde(with = "crate::iso_date")]
    pub start_date: Date,
    /// Last day of the assignment, or `None` for the current assignment.
    #[serde(default, with = "crate::iso_date::option")]
    pub end_date: Option<Date>,
    /// Day zero of the rotation when it differs from `start_date`.
    #[serde(
        default,
        with = "crate::iso_date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub anchor_date: Option<Date>,
}

impl MatrixAssignment {
    /// Creates a new open-ended `MatrixAssignment`.
    #[must_use]
    pub fn new(id: &str, matrix_id: &str, start_date: Date) -> Self {
        Self {
            id: id.to_string(),
            matrix_id: MatrixId::new(matrix_id),
            start_date,
            end_date: None,
            anchor_date: None,
        }
    }

    /// Day zero of the rotation.
    #[must_use]
    pub fn anchor(&self) -> Date {
        self.anchor_date.unwrap_or(self.start_date)
    }
}

impl DateInterval for MatrixAssignment {
    fn start(&self) -> Date {
        self.start_date
    }

    fn end(&self) -> Option<Date> {
        self.end_date
    }

    fn set_end(&mut self, end: Option<Date>) {
        self.end_date = end;
    }
}

/// The single matrix assignment stored by records that predate assignment
/// history. It has no end date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyAssignment {
    /// The assigned matrix.
    pub matrix_id: MatrixId,
    /// Rotation anchor.
    #[serde(with = "crate::iso_date")]
    pub start_date: Date,
}

/// The rotation source that applies on a particular date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveRotation<'a> {
    /// An entry of the operator's assignment history.
    History(&'a MatrixAssignment),
    /// The legacy single assignment.
    LegacySingle(&'a LegacyAssignment),
}

impl ActiveRotation<'_> {
    /// The matrix this rotation uses.
    #[must_use]
    pub const fn matrix_id(&self) -> &MatrixId {
        match self {
            Self::History(assignment) => &assignment.matrix_id,
            Self::LegacySingle(legacy) => &legacy.matrix_id,
        }
    }

    /// The day-zero anchor of the rotation.
    #[must_use]
    pub fn anchor(&self) -> Date {
        match self {
            Self::History(assignment) => assignment.anchor(),
            Self::LegacySingle(legacy) => legacy.start_date,
        }
    }
}

/// A schedulable employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    /// The operator identifier.
    pub id: OperatorId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Scheduling visibility flag. Does not affect resolution.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Employment contracts.
    #[serde(default)]
    pub contracts: Vec<Contract>,
    /// Matrix assignment history, most recent first.
    #[serde(default)]
    pub matrix_history: Vec<MatrixAssignment>,
    /// Legacy single assignment, consulted when no history entry applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_assignment: Option<LegacyAssignment>,
}

const fn default_active() -> bool {
    true
}

impl Operator {
    /// Creates a new active `Operator` with no contracts and no assignments.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: OperatorId::new(id),
            name: name.to_string(),
            is_active: true,
            contracts: Vec::new(),
            matrix_history: Vec::new(),
            legacy_assignment: None,
        }
    }

    /// Returns whether the operator is employed on `date`.
    ///
    /// Operators without any contract on record predate contract tracking
    /// and are treated as employed on every date.
    #[must_use]
    pub fn is_employed_on(&self, date: Date) -> bool {
        self.contracts.is_empty() || self.contracts.active_at(date).is_some()
    }

    /// Returns the rotation source for `date`.
    ///
    /// The assignment history takes precedence; the legacy single assignment
    /// applies only when no history entry covers the date and the date is not
    /// before its anchor.
    #[must_use]
    pub fn active_rotation(&self, date: Date) -> Option<ActiveRotation<'_>> {
        if let Some(assignment) = self.matrix_history.active_at(date) {
            return Some(ActiveRotation::History(assignment));
        }
        self.legacy_assignment
            .as_ref()
            .filter(|legacy| legacy.start_date <= date)
            .map(ActiveRotation::LegacySingle)
    }

    /// Adds a matrix assignment using the history insertion rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the assignment is malformed or its start date has
    /// no representable previous day. The history is unchanged on error.
    pub fn assign_matrix(&mut self, assignment: MatrixAssignment) -> Result<(), DomainError> {
        self.matrix_history = insert_interval(&self.matrix_history, assignment)?;
        Ok(())
    }

    /// Folds the legacy single assignment into the assignment history.
    ///
    /// The legacy record applies on every date from its anchor that no
    /// history entry covers. Each such span becomes one assignment of the
    /// legacy matrix, anchored at the legacy start date, so every date
    /// resolves the same before and after migration. Does nothing when there
    /// is no legacy assignment.
    ///
    /// # Errors
    ///
    /// Returns an error if a span boundary cannot be represented; the
    /// operator is unchanged.
    pub fn migrate_legacy_assignment(&mut self) -> Result<(), DomainError> {
        let Some(legacy) = self.legacy_assignment.clone() else {
            return Ok(());
        };

        let spans: Vec<(Date, Option<Date>)> =
            uncovered_spans(&self.matrix_history, legacy.start_date)?;

        let mut history: Vec<MatrixAssignment> = self.matrix_history.clone();
        for (index, (start_date, end_date)) in spans.into_iter().enumerate() {
            let id: String = if index == 0 {
                format!("legacy-{}", self.id)
            } else {
                format!("legacy-{}-{}", self.id, index + 1)
            };
            history.push(MatrixAssignment {
                id,
                matrix_id: legacy.matrix_id.clone(),
                start_date,
                end_date,
                anchor_date: (start_date != legacy.start_date).then_some(legacy.start_date),
            });
        }
        crate::interval::sort_most_recent_first(&mut history);

        self.matrix_history = history;
        self.legacy_assignment = None;
        Ok(())
    }

    /// Adds a contract, rejecting overlaps with existing contracts.
    ///
    /// # Errors
    ///
    /// Returns an error if the contract is malformed or overlaps an existing
    /// contract.
    pub fn add_contract(&mut self, contract: Contract) -> Result<(), DomainError> {
        if let Some(end) = contract.end_date.filter(|end| *end < contract.start_date) {
            return Err(DomainError::MalformedInterval {
                start: contract.start_date,
                end,
            });
        }

        if self
            .contracts
            .iter()
            .any(|existing| existing.id == contract.id || overlaps(existing, &contract))
        {
            return Err(DomainError::OverlappingContract {
                operator: self.id.value().to_string(),
                contract: contract.id,
            });
        }

        self.contracts.push(contract);
        self.contracts.sort_by_key(|c| c.start_date);
        Ok(())
    }

    /// Removes a contract by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if no contract has that identifier.
    pub fn remove_contract(&mut self, contract_id: &str) -> Result<(), DomainError> {
        let before: usize = self.contracts.len();
        self.contracts.retain(|c| c.id != contract_id);
        if self.contracts.len() == before {
            return Err(DomainError::ContractNotFound {
                operator: self.id.value().to_string(),
                contract: contract_id.to_string(),
            });
        }
        Ok(())
    }

    /// Removes a matrix assignment by identifier.
    ///
    /// Neighboring assignments are left as they are; the removed span falls
    /// back to the legacy assignment or to no rotation.
    ///
    /// # Errors
    ///
    /// Returns an error if no assignment has that identifier.
    pub fn remove_assignment(&mut self, assignment_id: &str) -> Result<(), DomainError> {
        let before: usize = self.matrix_history.len();
        self.matrix_history.retain(|a| a.id != assignment_id);
        if self.matrix_history.len() == before {
            return Err(DomainError::AssignmentNotFound {
                operator: self.id.value().to_string(),
                assignment: assignment_id.to_string(),
            });
        }
        Ok(())
    }
}

/// Returns the spans from `from` onwards that no well-formed interval covers.
///
/// The last span is open-ended unless some interval runs forever.
fn uncovered_spans<T: DateInterval>(
    intervals: &[T],
    from: Date,
) -> Result<Vec<(Date, Option<Date>)>, DomainError> {
    let mut covered: Vec<&T> = intervals
        .iter()
        .filter(|interval| interval.is_well_formed())
        .collect();
    covered.sort_by_key(|interval| interval.start());

    let mut spans: Vec<(Date, Option<Date>)> = Vec::new();
    let mut cursor: Date = from;

    for interval in covered {
        if interval.end().is_some_and(|end| end < cursor) {
            continue;
        }
        if interval.start() > cursor {
            let gap_end: Date = interval.start().previous_day().ok_or_else(|| {
                DomainError::DateArithmeticOverflow {
                    operation: format!("closing legacy span before {}", interval.start()),
                }
            })?;
            spans.push((cursor, Some(gap_end)));
        }
        let Some(end) = interval.end() else {
            return Ok(spans);
        };
        match end.next_day() {
            Some(next) => cursor = next,
            None => return Ok(spans),
        }
    }

    spans.push((cursor, None));
    Ok(spans)
}
