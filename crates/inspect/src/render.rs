// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text report formatting.

use shift_roster_domain::{
    Operator, OperatorSummary, ResolvedShift, Roster, ShiftCode, Violation, coverage,
    operator_summary, resolve, validate,
};
use std::collections::BTreeMap;
use time::Date;

/// One line per day with the resolved code, hours and any violation.
///
/// Overrides show the violation stored with the entry. Rotation days are
/// checked against the rules on the fly.
pub fn grid(roster: &Roster, operator: &Operator, from: Date, to: Date) -> String {
    let mut out: String = format!("{} ({})\n", operator.name, operator.id);

    for day in days(from, to) {
        let resolved: ResolvedShift = resolve(roster, operator, day);
        let violation: Option<Violation> = match &resolved {
            ResolvedShift::Override { violation, .. } => violation.clone(),
            ResolvedShift::Rotation { code, .. } => validate(roster, &operator.id, day, code),
            ResolvedShift::NotEmployed | ResolvedShift::Empty => None,
        };

        out.push_str(&format!(
            "  {day} {:<9} {:<6} {:>5.1}h {:<8}",
            day.weekday().to_string(),
            label(&resolved),
            resolved.day_hours(),
            source(&resolved),
        ));
        if let Some(violation) = violation {
            out.push_str(&format!(" [{}] {violation}", violation.category()));
        }
        out.push('\n');
    }

    out
}

/// Totals for one operator over the range.
pub fn summary(roster: &Roster, operator: &Operator, from: Date, to: Date) -> String {
    let totals: OperatorSummary = operator_summary(roster, operator, from, to);

    format!(
        "{} ({}) {from}..{to}: {:.1}h over {} working days, {} nights, {} weekend, \
         {} absent, {} not employed, {} unknown codes",
        operator.name,
        operator.id,
        totals.total_hours,
        totals.working_days,
        totals.night_shifts,
        totals.weekend_shifts,
        totals.absence_days,
        totals.not_employed_days,
        totals.unknown_code_days,
    )
}

/// One line per day listing `code=count` pairs in code order.
pub fn coverage_report(roster: &Roster, from: Date, to: Date) -> String {
    let mut out: String = String::new();

    for day in days(from, to) {
        let counts: BTreeMap<ShiftCode, usize> = coverage(roster, day);
        let cells: Vec<String> = counts
            .iter()
            .map(|(code, count)| format!("{code}={count}"))
            .collect();
        out.push_str(&format!("{day} {}\n", cells.join(" ")));
    }

    out
}

fn label(resolved: &ResolvedShift) -> String {
    match resolved {
        ResolvedShift::NotEmployed => String::from("-"),
        ResolvedShift::Empty => String::from("."),
        _ => resolved
            .code()
            .map_or_else(|| String::from("."), ToString::to_string),
    }
}

const fn source(resolved: &ResolvedShift) -> &'static str {
    match resolved {
        ResolvedShift::NotEmployed => "contract",
        ResolvedShift::Override { .. } => "manual",
        ResolvedShift::Rotation { .. } => "rotation",
        ResolvedShift::Empty => "",
    }
}

fn days(from: Date, to: Date) -> impl Iterator<Item = Date> {
    std::iter::successors(Some(from), |day| day.next_day()).take_while(move |day| *day <= to)
}
