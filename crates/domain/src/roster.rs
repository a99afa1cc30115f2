// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The complete scheduling dataset.
//!
//! A `Roster` is the unit of snapshotting: every read goes through one, and
//! every edit produces a new one.

use crate::error::DomainError;
use crate::operator::Operator;
use crate::planner::{PlannerEntries, PlannerEntry};
use crate::types::{Matrix, MatrixId, OperatorId, ShiftCode, ShiftType};
use serde::{Deserialize, Serialize};
use time::Date;

/// Default minimum rest between two shifts, in hours.
pub const DEFAULT_MIN_REST_HOURS: u8 = 11;

/// Default maximum number of consecutive working days.
pub const DEFAULT_MAX_CONSECUTIVE_DAYS: u8 = 6;

/// Workplace rule parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Minimum hours between the end of one shift and the start of the next.
    pub min_rest_hours: u8,
    /// Maximum number of consecutive working days.
    pub max_consecutive_days: u8,
}

impl RuleConfig {
    /// Creates a new `RuleConfig`.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_consecutive_days` is zero or
    /// `min_rest_hours` exceeds a full day.
    pub fn new(min_rest_hours: u8, max_consecutive_days: u8) -> Result<Self, DomainError> {
        let config: Self = Self {
            min_rest_hours,
            max_consecutive_days,
        };
        validate_rule_config(&config)?;
        Ok(config)
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            min_rest_hours: DEFAULT_MIN_REST_HOURS,
            max_consecutive_days: DEFAULT_MAX_CONSECUTIVE_DAYS,
        }
    }
}

/// Validates rule configuration values.
///
/// # Errors
///
/// Returns an error if:
/// - `max_consecutive_days` is zero
/// - `min_rest_hours` is greater than 24
pub fn validate_rule_config(config: &RuleConfig) -> Result<(), DomainError> {
    if config.max_consecutive_days == 0 {
        return Err(DomainError::InvalidRuleConfig(String::from(
            "Maximum consecutive days must be at least 1",
        )));
    }
    if config.min_rest_hours > 24 {
        return Err(DomainError::InvalidRuleConfig(format!(
            "Minimum rest must be at most 24 hours, got {}",
            config.min_rest_hours
        )));
    }
    Ok(())
}

/// Navigation and session state. Changes to it are never recorded in the
/// edit history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    /// Date the calendar is focused on.
    #[serde(with = "crate::iso_date::option")]
    pub focus_date: Option<Date>,
    /// Operator currently selected.
    pub selected_operator: Option<OperatorId>,
}

/// The entire mutable scheduling dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roster {
    /// All operators.
    pub operators: Vec<Operator>,
    /// Configured shift types.
    pub shift_types: Vec<ShiftType>,
    /// Rotation matrices.
    pub matrices: Vec<Matrix>,
    /// Manual overrides.
    pub entries: PlannerEntries,
    /// Workplace rules.
    pub rules: RuleConfig,
    /// Navigation state.
    pub view: ViewState,
}

impl Roster {
    /// Creates an empty roster with default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the operator with the given identifier.
    #[must_use]
    pub fn operator(&self, id: &OperatorId) -> Option<&Operator> {
        self.operators.iter().find(|operator| &operator.id == id)
    }

    /// Returns a mutable reference to the operator with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the operator does not exist.
    pub fn operator_mut(&mut self, id: &OperatorId) -> Result<&mut Operator, DomainError> {
        self.operators
            .iter_mut()
            .find(|operator| &operator.id == id)
            .ok_or_else(|| DomainError::OperatorNotFound(id.value().to_string()))
    }

    /// Returns the shift type with the given code.
    #[must_use]
    pub fn shift_type(&self, code: &ShiftCode) -> Option<&ShiftType> {
        self.shift_types
            .iter()
            .find(|shift_type| &shift_type.code == code)
    }

    /// Returns the matrix with the given identifier.
    #[must_use]
    pub fn matrix(&self, id: &MatrixId) -> Option<&Matrix> {
        self.matrices.iter().find(|matrix| &matrix.id == id)
    }

    /// Returns the planner entry for an operator and date.
    #[must_use]
    pub fn entry(&self, operator_id: &OperatorId, date: Date) -> Option<&PlannerEntry> {
        self.entries.get(operator_id, date)
    }

    /// Returns the nominal duration of a code, or zero for unknown codes.
    #[must_use]
    pub fn nominal_hours(&self, code: &ShiftCode) -> f64 {
        self.shift_type(code)
            .map_or(0.0, |shift_type| shift_type.duration_hours)
    }
}
