// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur while editing roster data.
///
/// Resolution and validation never produce these; they are total over any
/// structurally valid roster. Only mutating operations can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// An interval ends before it starts.
    MalformedInterval {
        /// The interval start date.
        start: Date,
        /// The interval end date.
        end: Date,
    },
    /// A matrix has no shift codes in its rotation.
    EmptyMatrix {
        /// The matrix identifier.
        matrix_id: String,
    },
    /// A shift code is empty or invalid.
    InvalidShiftCode(String),
    /// A shift type has an invalid nominal duration.
    InvalidDuration {
        /// The shift code.
        code: String,
        /// The rejected duration in hours.
        hours: f64,
    },
    /// Rule configuration values are out of range.
    InvalidRuleConfig(String),
    /// Operator does not exist.
    OperatorNotFound(String),
    /// Operator already exists.
    DuplicateOperator(String),
    /// Matrix does not exist.
    MatrixNotFound(String),
    /// Shift type does not exist.
    ShiftTypeNotFound(String),
    /// Contract does not exist for the operator.
    ContractNotFound {
        /// The operator identifier.
        operator: String,
        /// The contract identifier.
        contract: String,
    },
    /// A new contract overlaps an existing one.
    OverlappingContract {
        /// The operator identifier.
        operator: String,
        /// The contract identifier that was rejected.
        contract: String,
    },
    /// Matrix assignment does not exist for the operator.
    AssignmentNotFound {
        /// The operator identifier.
        operator: String,
        /// The assignment identifier.
        assignment: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::MalformedInterval { start, end } => {
                write!(f, "Interval starting {start} ends before it starts ({end})")
            }
            Self::EmptyMatrix { matrix_id } => {
                write!(f, "Matrix '{matrix_id}' must contain at least one shift code")
            }
            Self::InvalidShiftCode(msg) => write!(f, "Invalid shift code: {msg}"),
            Self::InvalidDuration { code, hours } => {
                write!(f, "Invalid duration {hours}h for shift '{code}'")
            }
            Self::InvalidRuleConfig(msg) => write!(f, "Invalid rule configuration: {msg}"),
            Self::OperatorNotFound(id) => write!(f, "Operator '{id}' not found"),
            Self::DuplicateOperator(id) => write!(f, "Operator '{id}' already exists"),
            Self::MatrixNotFound(id) => write!(f, "Matrix '{id}' not found"),
            Self::ShiftTypeNotFound(code) => write!(f, "Shift type '{code}' not found"),
            Self::ContractNotFound { operator, contract } => {
                write!(
                    f,
                    "Contract '{contract}' not found for operator '{operator}'"
                )
            }
            Self::OverlappingContract { operator, contract } => {
                write!(
                    f,
                    "Contract '{contract}' overlaps an existing contract of operator '{operator}'"
                )
            }
            Self::AssignmentNotFound {
                operator,
                assignment,
            } => {
                write!(
                    f,
                    "Matrix assignment '{assignment}' not found for operator '{operator}'"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
