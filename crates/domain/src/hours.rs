// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hour resolution for planner entries.
//!
//! Precedence:
//! 1. A custom duration on the entry is used verbatim
//! 2. A shift type that inherits hours takes the nominal duration of the
//!    shift the rotation assigns on the same date
//! 3. Otherwise the shift type's own nominal duration applies
//!
//! Unknown codes have zero hours.

use crate::operator::Operator;
use crate::planner::PlannerEntry;
use crate::resolve::rotation_code;
use crate::roster::Roster;
use crate::types::{ShiftCode, ShiftType};
use time::Date;

/// Returns the nominal duration of a code, or zero for unknown codes.
#[must_use]
pub fn nominal_or_zero(roster: &Roster, code: &ShiftCode) -> f64 {
    roster.nominal_hours(code)
}

/// Resolves the effective hours of a code worked by an operator on a date.
///
/// # Arguments
///
/// * `roster` - The dataset
/// * `operator` - The operator, used to recompute the rotation shift
/// * `date` - The date
/// * `code` - The effective code
/// * `custom_hours` - A custom duration stored with the entry, if any
#[must_use]
pub fn effective_hours(
    roster: &Roster,
    operator: &Operator,
    date: Date,
    code: &ShiftCode,
    custom_hours: Option<f64>,
) -> f64 {
    if let Some(hours) = custom_hours {
        return hours;
    }

    let Some(shift_type) = roster.shift_type(code) else {
        return 0.0;
    };

    if shift_type.inherits_hours {
        return inherited_hours(roster, operator, date, shift_type);
    }

    shift_type.duration_hours
}

/// Resolves the effective hours of a planner entry.
#[must_use]
pub fn entry_hours(roster: &Roster, operator: &Operator, entry: &PlannerEntry) -> f64 {
    effective_hours(roster, operator, entry.date, &entry.code, entry.custom_hours)
}

/// Hours of the rotation-derived shift on `date`.
///
/// Falls back to the inheriting type's own duration when no rotation applies.
/// A rotation code that itself inherits hours contributes its nominal
/// duration, so the lookup never recurses.
fn inherited_hours(
    roster: &Roster,
    operator: &Operator,
    date: Date,
    inheriting: &ShiftType,
) -> f64 {
    rotation_code(roster, operator, date).map_or(inheriting.duration_hours, |code| {
        nominal_or_zero(roster, code)
    })
}
