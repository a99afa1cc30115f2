// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Nominal clock windows of shifts and rest-time arithmetic.
//!
//! Rest rules only make sense for shifts with a known start and end time.
//! Shift types may declare a window explicitly; otherwise the fixed table
//! below applies by code. Day-off, absence and unknown codes have no window
//! and never take part in rest checks.

use crate::roster::Roster;
use crate::types::ShiftCode;
use serde::{Deserialize, Serialize};
use time::macros::time;
use time::{Duration, Time};

/// Broad family a shift code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftFamily {
    /// Early shifts (`M`, `M6`, `M7`, `M8`, ...).
    Morning,
    /// Afternoon shifts (`P`, ...).
    Afternoon,
    /// Regular daytime shifts (`D`, `G`).
    Day,
    /// Overnight shifts (`N`).
    Night,
}

impl ShiftFamily {
    /// Classifies a code by its leading letter.
    #[must_use]
    pub fn of(code: &ShiftCode) -> Option<Self> {
        match code.value().chars().next()? {
            'M' => Some(Self::Morning),
            'P' => Some(Self::Afternoon),
            'D' | 'G' => Some(Self::Day),
            'N' => Some(Self::Night),
            _ => None,
        }
    }
}

/// Nominal start and end clock times of a shift.
///
/// A window whose end is earlier than its start wraps midnight and ends on
/// the following morning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    /// Clock time the shift starts.
    #[serde(with = "crate::clock_time")]
    pub start: Time,
    /// Clock time the shift ends.
    #[serde(with = "crate::clock_time")]
    pub end: Time,
}

impl ShiftWindow {
    /// Creates a new `ShiftWindow`.
    #[must_use]
    pub const fn new(start: Time, end: Time) -> Self {
        Self { start, end }
    }

    /// Returns whether the shift ends on the day after it starts.
    #[must_use]
    pub fn wraps_midnight(&self) -> bool {
        self.end < self.start
    }
}

/// Built-in windows by exact code.
const DEFAULT_WINDOWS: &[(&str, ShiftWindow)] = &[
    ("M", ShiftWindow::new(time!(06:00), time!(14:00))),
    ("M8", ShiftWindow::new(time!(06:00), time!(14:00))),
    ("M7", ShiftWindow::new(time!(07:00), time!(14:00))),
    ("M6", ShiftWindow::new(time!(08:00), time!(14:00))),
    ("P", ShiftWindow::new(time!(14:00), time!(21:00))),
    ("D", ShiftWindow::new(time!(08:00), time!(17:00))),
    ("G", ShiftWindow::new(time!(08:00), time!(17:00))),
    ("N", ShiftWindow::new(time!(21:00), time!(06:00))),
];

/// Returns the built-in window for a code, if the code is in the table.
#[must_use]
pub fn default_window(code: &ShiftCode) -> Option<ShiftWindow> {
    DEFAULT_WINDOWS
        .iter()
        .find(|(known, _)| *known == code.value())
        .map(|(_, window)| *window)
}

/// Returns the window used for rest checks: the shift type's explicit window
/// when configured, otherwise the built-in table.
#[must_use]
pub fn window_for(roster: &Roster, code: &ShiftCode) -> Option<ShiftWindow> {
    if code.is_empty() {
        return None;
    }
    roster
        .shift_type(code)
        .and_then(|shift_type| shift_type.window)
        .or_else(|| default_window(code))
}

/// Computes the rest between a shift worked on the previous day and a shift
/// starting on the next day.
///
/// When the previous shift wraps midnight both clock times are on the same
/// reference day, so the result may be negative if the windows overlap.
#[must_use]
pub fn rest_between(previous: ShiftWindow, next: ShiftWindow) -> Duration {
    let previous_end: Duration = since_midnight(previous.end);
    let next_start: Duration = since_midnight(next.start);

    if previous.wraps_midnight() {
        next_start - previous_end
    } else {
        (Duration::DAY - previous_end) + next_start
    }
}

fn since_midnight(clock: Time) -> Duration {
    clock - Time::MIDNIGHT
}
