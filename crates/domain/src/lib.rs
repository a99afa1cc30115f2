// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod hours;
mod interval;
mod operator;
mod planner;
mod resolve;
mod roster;
mod rotation;
mod shift_window;
mod stats;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Snapshot dates are plain `YYYY-MM-DD` strings and clock times `HH:MM`.
time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");
time::serde::format_description!(clock_time, Time, "[hour]:[minute]");

pub use error::DomainError;
pub use hours::{effective_hours, entry_hours, nominal_or_zero};
pub use interval::{DateInterval, IntervalIndex, insert_interval, overlaps, sort_most_recent_first};
pub use operator::{ActiveRotation, Contract, LegacyAssignment, MatrixAssignment, Operator};
pub use planner::{PlannerEntries, PlannerEntry, SpecialEvent, SpecialEventMode};
pub use resolve::{ResolvedShift, resolve, resolve_by_id, rotation_code};
pub use roster::{
    DEFAULT_MAX_CONSECUTIVE_DAYS, DEFAULT_MIN_REST_HOURS, Roster, RuleConfig, ViewState,
    validate_rule_config,
};
pub use rotation::{days_between, rotation_shift};
pub use shift_window::{ShiftFamily, ShiftWindow, default_window, rest_between, window_for};
pub use stats::{OperatorSummary, coverage, operator_summary};
pub use types::{
    Matrix, MatrixId, OperatorId, ShiftCode, ShiftType, validate_matrix, validate_shift_type,
};
pub use validation::{Violation, ViolationKind, validate};
