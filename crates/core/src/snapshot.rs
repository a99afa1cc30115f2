// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON snapshots of the whole dataset.
//!
//! Only the structure is checked on load. Missing collections load empty and
//! missing rule settings take their defaults; references between entities
//! are not verified.

use shift_roster_domain::Roster;
use thiserror::Error;

/// Snapshot encoding errors.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The roster could not be encoded.
    #[error("Failed to serialize roster snapshot: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The input is not a structurally valid roster snapshot.
    #[error("Failed to parse roster snapshot: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Encodes a roster as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if encoding fails.
pub fn serialize(roster: &Roster) -> Result<String, SnapshotError> {
    serde_json::to_string_pretty(roster).map_err(SnapshotError::Serialize)
}

/// Decodes a roster from JSON.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON or does not have the
/// shape of a roster snapshot.
pub fn deserialize(input: &str) -> Result<Roster, SnapshotError> {
    serde_json::from_str(input).map_err(SnapshotError::Deserialize)
}
