// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Effective shift resolution.
//!
//! The effective shift of an operator on a date is decided by an ordered
//! chain of strategies. Each strategy either settles the answer or defers to
//! the next one:
//!
//! 1. Employment: a date outside every contract resolves to `NotEmployed`
//! 2. Planner entry: a manual override is authoritative, even when empty
//! 3. Rotation: the active matrix assignment (or legacy assignment) applies
//!
//! When no strategy applies, the day is `Empty`.

use crate::hours::{entry_hours, nominal_or_zero};
use crate::operator::{ActiveRotation, Operator};
use crate::planner::SpecialEvent;
use crate::roster::Roster;
use crate::rotation::rotation_shift;
use crate::types::{OperatorId, ShiftCode};
use crate::validation::Violation;
use time::Date;

/// The single effective shift of an operator on a date.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedShift {
    /// The operator is not employed on this date.
    NotEmployed,
    /// A planner entry overrides the rotation.
    Override {
        /// The stored code. Empty means an explicit day with no shift.
        code: ShiftCode,
        /// Effective hours after the hour-resolution rule.
        hours: f64,
        /// The entry note.
        note: Option<String>,
        /// The advisory violation stored with the entry.
        violation: Option<Violation>,
        /// Hour adjustments stored with the entry.
        special_events: Vec<SpecialEvent>,
    },
    /// The rotation assigns this shift.
    Rotation {
        /// The rotation code.
        code: ShiftCode,
        /// Nominal hours of the code, zero if unknown.
        hours: f64,
    },
    /// No override and no rotation applies.
    Empty,
}

impl ResolvedShift {
    /// Returns the effective code, if any. Empty override codes yield `None`.
    #[must_use]
    pub fn code(&self) -> Option<&ShiftCode> {
        match self {
            Self::Override { code, .. } | Self::Rotation { code, .. } if !code.is_empty() => {
                Some(code)
            }
            _ => None,
        }
    }

    /// Returns the effective hours before special events.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        match self {
            Self::Override { hours, .. } | Self::Rotation { hours, .. } => *hours,
            Self::NotEmployed | Self::Empty => 0.0,
        }
    }

    /// Returns the effective hours with special events applied in order.
    #[must_use]
    pub fn day_hours(&self) -> f64 {
        match self {
            Self::Override {
                hours,
                special_events,
                ..
            } => special_events
                .iter()
                .fold(*hours, |total, event| event.apply_to(total)),
            _ => self.hours(),
        }
    }

    /// Returns whether the operator is employed on this date.
    #[must_use]
    pub const fn is_employed(&self) -> bool {
        !matches!(self, Self::NotEmployed)
    }
}

/// Inputs shared by every resolution strategy.
struct ResolutionContext<'a> {
    roster: &'a Roster,
    operator: &'a Operator,
    date: Date,
}

type Strategy = fn(&ResolutionContext<'_>) -> Option<ResolvedShift>;

/// Resolution strategies in priority order.
const STRATEGIES: [Strategy; 3] = [employment_gate, planner_override, matrix_rotation];

/// Resolves the effective shift of an operator on a date.
///
/// Total over any structurally valid roster: dangling codes resolve with zero
/// hours, unknown matrices contribute no rotation, malformed intervals never
/// match.
#[must_use]
pub fn resolve(roster: &Roster, operator: &Operator, date: Date) -> ResolvedShift {
    let context: ResolutionContext<'_> = ResolutionContext {
        roster,
        operator,
        date,
    };

    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(&context))
        .unwrap_or(ResolvedShift::Empty)
}

/// Resolves by operator identifier. Unknown operators are not employed.
#[must_use]
pub fn resolve_by_id(roster: &Roster, operator_id: &OperatorId, date: Date) -> ResolvedShift {
    roster
        .operator(operator_id)
        .map_or(ResolvedShift::NotEmployed, |operator| {
            resolve(roster, operator, date)
        })
}

/// Returns the code the rotation assigns on `date`, ignoring overrides and
/// employment.
#[must_use]
pub fn rotation_code<'a>(
    roster: &'a Roster,
    operator: &Operator,
    date: Date,
) -> Option<&'a ShiftCode> {
    let rotation: ActiveRotation<'_> = operator.active_rotation(date)?;
    let matrix = roster.matrix(rotation.matrix_id())?;
    rotation_shift(matrix, rotation.anchor(), date)
}

fn employment_gate(context: &ResolutionContext<'_>) -> Option<ResolvedShift> {
    if context.operator.is_employed_on(context.date) {
        None
    } else {
        Some(ResolvedShift::NotEmployed)
    }
}

fn planner_override(context: &ResolutionContext<'_>) -> Option<ResolvedShift> {
    let entry = context.roster.entry(&context.operator.id, context.date)?;
    let hours: f64 = entry_hours(context.roster, context.operator, entry);

    Some(ResolvedShift::Override {
        code: entry.code.clone(),
        hours,
        note: entry.note.clone(),
        violation: entry.violation.clone(),
        special_events: entry.special_events.clone(),
    })
}

fn matrix_rotation(context: &ResolutionContext<'_>) -> Option<ResolvedShift> {
    let code: &ShiftCode = rotation_code(context.roster, context.operator, context.date)?;

    Some(ResolvedShift::Rotation {
        code: code.clone(),
        hours: nominal_or_zero(context.roster, code),
    })
}
