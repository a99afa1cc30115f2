// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_roster_domain::DomainError;

/// Errors that can occur while applying a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The command cannot be part of a batch because it is not recorded
    /// as an ordinary edit.
    NotBatchable {
        /// The command name.
        command: &'static str,
    },
    /// A batch sub-command failed; the batch was not applied.
    BatchRejected {
        /// Zero-based position of the failing sub-command.
        index: usize,
        /// The underlying failure.
        source: Box<Self>,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::NotBatchable { command } => {
                write!(f, "{command} cannot be applied inside a batch")
            }
            Self::BatchRejected { index, source } => {
                write!(f, "Batch command {index} rejected: {source}")
            }
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DomainViolation(err) => Some(err),
            Self::NotBatchable { .. } => None,
            Self::BatchRejected { source, .. } => Some(source.as_ref()),
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
