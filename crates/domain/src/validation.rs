// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Workplace rule validation for proposed assignments.
//!
//! Two rules are evaluated, in priority order:
//!
//! - Rest: the gap between the previous day's shift and the proposed shift
//!   must be at least `min_rest_hours`
//! - Consecutive days: a proposed working shift must not extend a streak of
//!   working days beyond `max_consecutive_days`
//!
//! Validation is advisory. At most one violation is returned; callers store
//! it alongside the entry and the write always proceeds.

use crate::operator::Operator;
use crate::resolve::{ResolvedShift, resolve};
use crate::roster::Roster;
use crate::shift_window::{ShiftFamily, ShiftWindow, rest_between, window_for};
use crate::types::{OperatorId, ShiftCode};
use serde::{Deserialize, Serialize};
use time::{Date, Duration};
use tracing::debug;

/// The rule a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// Not enough rest after the previous shift.
    Rest,
    /// Too many consecutive working days.
    ConsecutiveDays,
}

impl ViolationKind {
    /// A stable tag for styling.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::ConsecutiveDays => "consecutive-days",
        }
    }
}

/// An advisory descriptor of a broken rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The rule that is broken.
    pub kind: ViolationKind,
    /// Human-readable explanation.
    pub message: String,
}

impl Violation {
    /// Creates a new `Violation`.
    #[must_use]
    pub const fn new(kind: ViolationKind, message: String) -> Self {
        Self { kind, message }
    }

    /// A stable tag for styling.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        self.kind.category()
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a proposed shift for an operator on a date.
///
/// # Arguments
///
/// * `roster` - The dataset the proposal is evaluated against
/// * `operator_id` - The operator
/// * `date` - The date of the proposed shift
/// * `proposed` - The proposed shift code
///
/// # Returns
///
/// * `None` if no rule is broken, the operator is unknown, or the operator
///   is not employed on `date`
/// * `Some(Violation)` for the highest-priority broken rule
#[must_use]
pub fn validate(
    roster: &Roster,
    operator_id: &OperatorId,
    date: Date,
    proposed: &ShiftCode,
) -> Option<Violation> {
    let operator: &Operator = roster.operator(operator_id)?;
    if !operator.is_employed_on(date) {
        return None;
    }

    let violation: Option<Violation> = check_rest(roster, operator, date, proposed)
        .or_else(|| check_consecutive_days(roster, operator, date, proposed));

    if let Some(found) = &violation {
        debug!(
            operator = %operator_id,
            %date,
            code = %proposed,
            category = found.category(),
            "Proposed shift breaks a rule"
        );
    }

    violation
}

/// Checks the minimum rest between the previous day's shift and the
/// proposed one.
///
/// Codes without a clock window never take part in this rule.
fn check_rest(
    roster: &Roster,
    operator: &Operator,
    date: Date,
    proposed: &ShiftCode,
) -> Option<Violation> {
    let next_window: ShiftWindow = window_for(roster, proposed)?;
    let previous_day: Date = date.previous_day()?;
    let previous_shift: ResolvedShift = resolve(roster, operator, previous_day);
    let previous_code: &ShiftCode = previous_shift.code()?;
    let previous_window: ShiftWindow = window_for(roster, previous_code)?;

    let rest: Duration = rest_between(previous_window, next_window);
    let min_rest_hours: u8 = roster.rules.min_rest_hours;
    if rest >= Duration::hours(i64::from(min_rest_hours)) {
        return None;
    }

    let message: String = if ShiftFamily::of(previous_code) == Some(ShiftFamily::Afternoon)
        && ShiftFamily::of(proposed) == Some(ShiftFamily::Morning)
    {
        format!(
            "{proposed} after {previous_code} leaves only {} of rest (minimum {min_rest_hours}h): \
             schedule a later start or a rest day after an afternoon shift",
            format_rest(rest)
        )
    } else {
        format!(
            "Only {} of rest between {previous_code} on {previous_day} and {proposed} \
             (minimum {min_rest_hours}h)",
            format_rest(rest)
        )
    };

    Some(Violation::new(ViolationKind::Rest, message))
}

/// Checks that a proposed working shift does not extend a streak of working
/// days beyond the configured maximum.
///
/// Walks backwards from the previous day, at most `max_consecutive_days`
/// steps, and stops at the first day whose shift has no positive nominal
/// duration or that resolves to nothing.
fn check_consecutive_days(
    roster: &Roster,
    operator: &Operator,
    date: Date,
    proposed: &ShiftCode,
) -> Option<Violation> {
    if roster.nominal_hours(proposed) <= 0.0 {
        return None;
    }

    let max_days: u8 = roster.rules.max_consecutive_days;
    let mut streak: u8 = 0;
    let mut day: Date = date;

    while streak < max_days {
        let Some(previous) = day.previous_day() else {
            break;
        };
        day = previous;

        let is_working: bool = resolve(roster, operator, day)
            .code()
            .is_some_and(|code| roster.nominal_hours(code) > 0.0);
        if !is_working {
            break;
        }
        streak += 1;
    }

    // The proposed day is itself a working day.
    if streak < max_days {
        return None;
    }

    Some(Violation::new(
        ViolationKind::ConsecutiveDays,
        format!(
            "{proposed} on {date} would be working day {} in a row (maximum {max_days})",
            u16::from(streak) + 1
        ),
    ))
}

fn format_rest(rest: Duration) -> String {
    let minutes: i64 = rest.whole_minutes().max(0);
    let (hours, remainder) = (minutes / 60, minutes % 60);
    if remainder == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h{remainder:02}m")
    }
}
