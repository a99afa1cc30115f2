// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aggregates over resolved shifts: per-operator hour summaries and per-day
//! coverage counts.

use crate::operator::Operator;
use crate::resolve::{ResolvedShift, resolve};
use crate::roster::Roster;
use crate::types::{ShiftCode, ShiftType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::{Date, Weekday};

/// Totals for one operator over an inclusive date range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatorSummary {
    /// Effective hours with special events applied.
    pub total_hours: f64,
    /// Days whose shift has a positive nominal duration.
    pub working_days: u32,
    /// Working days on a night shift.
    pub night_shifts: u32,
    /// Working days on a weekend shift, or on a Saturday or Sunday.
    pub weekend_shifts: u32,
    /// Days on a known code with no nominal duration (rest, leave, ...).
    pub absence_days: u32,
    /// Days outside every contract.
    pub not_employed_days: u32,
    /// Days whose code matches no shift type.
    pub unknown_code_days: u32,
}

/// Summarizes an operator's resolved shifts from `from` to `to`, inclusive.
///
/// Returns an empty summary when `to` precedes `from`.
#[must_use]
pub fn operator_summary(roster: &Roster, operator: &Operator, from: Date, to: Date) -> OperatorSummary {
    let mut summary: OperatorSummary = OperatorSummary::default();
    let mut day: Date = from;

    while day <= to {
        let resolved: ResolvedShift = resolve(roster, operator, day);
        tally(roster, &mut summary, &resolved, day);

        match day.next_day() {
            Some(next) => day = next,
            None => break,
        }
    }

    summary
}

fn tally(roster: &Roster, summary: &mut OperatorSummary, resolved: &ResolvedShift, day: Date) {
    if !resolved.is_employed() {
        summary.not_employed_days += 1;
        return;
    }

    summary.total_hours += resolved.day_hours();

    let Some(code) = resolved.code() else {
        return;
    };

    let Some(shift_type) = roster.shift_type(code) else {
        summary.unknown_code_days += 1;
        return;
    };

    if !shift_type.is_working() {
        summary.absence_days += 1;
        return;
    }

    summary.working_days += 1;
    if shift_type.is_night {
        summary.night_shifts += 1;
    }
    if is_weekend_work(shift_type, day) {
        summary.weekend_shifts += 1;
    }
}

fn is_weekend_work(shift_type: &ShiftType, day: Date) -> bool {
    shift_type.is_weekend || matches!(day.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Counts, per shift code, the operators working it on `date`.
///
/// Operators not employed on `date` and inactive operators are excluded.
/// Days with no effective code are not counted.
#[must_use]
pub fn coverage(roster: &Roster, date: Date) -> BTreeMap<ShiftCode, usize> {
    let mut counts: BTreeMap<ShiftCode, usize> = BTreeMap::new();

    for operator in roster.operators.iter().filter(|operator| operator.is_active) {
        let resolved: ResolvedShift = resolve(roster, operator, date);
        if let Some(code) = resolved.code() {
            *counts.entry(code.clone()).or_insert(0) += 1;
        }
    }

    counts
}
