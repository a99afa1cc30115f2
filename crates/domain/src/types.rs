// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::shift_window::ShiftWindow;
use serde::{Deserialize, Serialize};

/// Identifies an operator (a schedulable employee).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorId(String);

impl OperatorId {
    /// Creates a new `OperatorId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OperatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a rotation matrix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatrixId(String);

impl MatrixId {
    /// Creates a new `MatrixId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MatrixId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A short shift code such as `M8`, `P` or `R`.
///
/// Codes are trimmed and normalized to uppercase so lookups are
/// case-insensitive. An empty code is a valid value on a planner entry and
/// means an explicit day with no shift.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ShiftCode(String);

impl ShiftCode {
    /// Creates a new normalized `ShiftCode`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_uppercase())
    }

    /// The empty code.
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Returns the code value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns whether this is the empty code.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for ShiftCode {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<ShiftCode> for String {
    fn from(code: ShiftCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A configured kind of shift, referenced from schedules by its code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftType {
    /// Unique short code.
    pub code: ShiftCode,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Display color (e.g. `#ffcc00`).
    #[serde(default)]
    pub color: String,
    /// Nominal duration in hours.
    #[serde(default)]
    pub duration_hours: f64,
    /// Whether this is a night shift.
    #[serde(default)]
    pub is_night: bool,
    /// Whether this shift counts as weekend work.
    #[serde(default)]
    pub is_weekend: bool,
    /// Whether the effective duration is taken from the rotation-derived
    /// shift of the same day rather than `duration_hours`.
    ///
    /// Used by absence codes (vacation, leave, sick) that must carry the hours
    /// the operator would have worked.
    #[serde(default)]
    pub inherits_hours: bool,
    /// Explicit clock window. When absent the built-in table by code family
    /// applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<ShiftWindow>,
}

impl ShiftType {
    /// Creates a new `ShiftType` with no flags and no explicit window.
    ///
    /// # Arguments
    ///
    /// * `code` - The shift code
    /// * `name` - The display name
    /// * `duration_hours` - The nominal duration
    #[must_use]
    pub fn new(code: &str, name: &str, duration_hours: f64) -> Self {
        Self {
            code: ShiftCode::new(code),
            name: name.to_string(),
            color: String::new(),
            duration_hours,
            is_night: false,
            is_weekend: false,
            inherits_hours: false,
            window: None,
        }
    }

    /// Returns whether the nominal duration is positive, i.e. whether the
    /// shift counts as a working day.
    #[must_use]
    pub fn is_working(&self) -> bool {
        self.duration_hours > 0.0
    }
}

/// Validates the constraints on a shift type definition.
///
/// # Errors
///
/// Returns an error if:
/// - The code is empty
/// - The duration is negative or not finite
pub fn validate_shift_type(shift_type: &ShiftType) -> Result<(), DomainError> {
    if shift_type.code.is_empty() {
        return Err(DomainError::InvalidShiftCode(String::from(
            "Shift type code cannot be empty",
        )));
    }

    if !shift_type.duration_hours.is_finite() || shift_type.duration_hours < 0.0 {
        return Err(DomainError::InvalidDuration {
            code: shift_type.code.value().to_string(),
            hours: shift_type.duration_hours,
        });
    }

    Ok(())
}

/// A rotation pattern: one full cycle of shift codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix {
    /// The matrix identifier.
    pub id: MatrixId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Shift codes for consecutive days of one cycle.
    #[serde(default)]
    pub sequence: Vec<ShiftCode>,
}

impl Matrix {
    /// Creates a new `Matrix`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence is empty.
    pub fn new(id: &str, name: &str, sequence: &[&str]) -> Result<Self, DomainError> {
        let matrix: Self = Self {
            id: MatrixId::new(id),
            name: name.to_string(),
            sequence: sequence.iter().map(|code| ShiftCode::new(code)).collect(),
        };
        validate_matrix(&matrix)?;
        Ok(matrix)
    }

    /// Returns the cycle length in days.
    #[must_use]
    pub const fn cycle_length(&self) -> usize {
        self.sequence.len()
    }
}

/// Validates that a matrix has a non-empty rotation.
///
/// # Errors
///
/// Returns an error if the sequence is empty.
pub fn validate_matrix(matrix: &Matrix) -> Result<(), DomainError> {
    if matrix.sequence.is_empty() {
        return Err(DomainError::EmptyMatrix {
            matrix_id: matrix.id.value().to_string(),
        });
    }
    Ok(())
}
