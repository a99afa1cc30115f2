// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{OperatorId, ShiftCode};
use crate::validation::Violation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;

/// How a special event adjusts the hours of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialEventMode {
    /// Adds hours (e.g. overtime).
    Additive,
    /// Removes hours (e.g. an early leave). The total never drops below zero.
    Subtractive,
    /// Replaces the running total.
    Substitutive,
}

/// A supplementary hour adjustment attached to a planner entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialEvent {
    /// How the hours are applied.
    pub mode: SpecialEventMode,
    /// Hours added, removed or substituted.
    pub hours: f64,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

impl SpecialEvent {
    /// Creates a new `SpecialEvent`.
    #[must_use]
    pub fn new(mode: SpecialEventMode, hours: f64, description: &str) -> Self {
        Self {
            mode,
            hours,
            description: description.to_string(),
        }
    }

    /// Applies this adjustment to a running total.
    #[must_use]
    pub fn apply_to(&self, hours: f64) -> f64 {
        match self.mode {
            SpecialEventMode::Additive => hours + self.hours,
            SpecialEventMode::Subtractive => (hours - self.hours).max(0.0),
            SpecialEventMode::Substitutive => self.hours,
        }
    }
}

/// A manual override for one operator on one date.
///
/// Its presence makes the stored code authoritative for that day, even when
/// the code is empty. Removing the entry restores rotation behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerEntry {
    /// The operator this entry belongs to.
    pub operator_id: OperatorId,
    /// The date this entry applies to.
    #[serde(with = "crate::iso_date")]
    pub date: Date,
    /// The explicit shift code. Empty means an explicit day with no shift.
    #[serde(default = "ShiftCode::empty")]
    pub code: ShiftCode,
    /// Custom duration in hours; takes precedence over every other rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_hours: Option<f64>,
    /// Free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Whether the entry was set by hand rather than generated.
    #[serde(default)]
    pub manual: bool,
    /// Advisory rule violation recorded when the entry was written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violation: Option<Violation>,
    /// Hour adjustments applied on top of the resolved hours, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_events: Vec<SpecialEvent>,
}

impl PlannerEntry {
    /// Creates a new manual entry with only a code.
    #[must_use]
    pub fn new(operator_id: &OperatorId, date: Date, code: &str) -> Self {
        Self {
            operator_id: operator_id.clone(),
            date,
            code: ShiftCode::new(code),
            custom_hours: None,
            note: None,
            manual: true,
            violation: None,
            special_events: Vec::new(),
        }
    }

    /// The key this entry is stored under.
    #[must_use]
    pub fn key(&self) -> (OperatorId, Date) {
        (self.operator_id.clone(), self.date)
    }
}

/// All planner entries, keyed by `(operator, date)`.
///
/// Serialized as a flat list of entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<PlannerEntry>", into = "Vec<PlannerEntry>")]
pub struct PlannerEntries {
    entries: BTreeMap<(OperatorId, Date), PlannerEntry>,
}

impl PlannerEntries {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the entry for an operator and date.
    #[must_use]
    pub fn get(&self, operator_id: &OperatorId, date: Date) -> Option<&PlannerEntry> {
        self.entries.get(&(operator_id.clone(), date))
    }

    /// Inserts or replaces an entry, returning the previous one.
    pub fn insert(&mut self, entry: PlannerEntry) -> Option<PlannerEntry> {
        self.entries.insert(entry.key(), entry)
    }

    /// Removes the entry for an operator and date, returning it.
    pub fn remove(&mut self, operator_id: &OperatorId, date: Date) -> Option<PlannerEntry> {
        self.entries.remove(&(operator_id.clone(), date))
    }

    /// Removes every entry of an operator.
    pub fn remove_operator(&mut self, operator_id: &OperatorId) {
        self.entries.retain(|(owner, _), _| owner != operator_id);
    }

    /// Iterates over all entries in `(operator, date)` order.
    pub fn iter(&self) -> impl Iterator<Item = &PlannerEntry> {
        self.entries.values()
    }

    /// Iterates over one operator's entries in date order.
    pub fn for_operator<'a>(
        &'a self,
        operator_id: &'a OperatorId,
    ) -> impl Iterator<Item = &'a PlannerEntry> + 'a {
        self.entries
            .values()
            .filter(move |entry| &entry.operator_id == operator_id)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<PlannerEntry>> for PlannerEntries {
    fn from(list: Vec<PlannerEntry>) -> Self {
        // Later duplicates of a key replace earlier ones.
        let entries: BTreeMap<(OperatorId, Date), PlannerEntry> =
            list.into_iter().map(|entry| (entry.key(), entry)).collect();
        Self { entries }
    }
}

impl From<PlannerEntries> for Vec<PlannerEntry> {
    fn from(entries: PlannerEntries) -> Self {
        entries.entries.into_values().collect()
    }
}
