// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Temporal interval lookup over dated records.
//!
//! Employment contracts and matrix assignments are both lists of
//! `(start, optional end)` intervals. This module answers "which record is
//! active on date D" and implements the insertion rule that keeps a history
//! free of overlapping ranges.
//!
//! ## Invariants
//!
//! - Both bounds are inclusive; a missing end means open-ended
//! - Intervals whose end precedes their start never match any date
//! - When several intervals match, the latest start wins
//! - Insertion never leaves two open-ended intervals behind

use crate::error::DomainError;
use std::cmp::Ordering;
use time::Date;

/// A record that is active over an inclusive date range.
pub trait DateInterval {
    /// First day the record applies.
    fn start(&self) -> Date;

    /// Last day the record applies, or `None` when open-ended.
    fn end(&self) -> Option<Date>;

    /// Replaces the end bound.
    fn set_end(&mut self, end: Option<Date>);

    /// Returns whether the end bound does not precede the start bound.
    fn is_well_formed(&self) -> bool {
        self.end().is_none_or(|end| end >= self.start())
    }

    /// Returns whether `date` falls inside this interval.
    ///
    /// Malformed intervals never contain any date.
    fn contains(&self, date: Date) -> bool {
        self.is_well_formed() && self.start() <= date && self.end().is_none_or(|end| date <= end)
    }
}

/// Lookup of the interval active on a given date.
///
/// Call sites depend only on this trait so the linear scan over slices can be
/// replaced by an ordered index without touching them.
pub trait IntervalIndex<T> {
    /// Returns the interval active on `date`, if any.
    fn active_at(&self, date: Date) -> Option<&T>;
}

impl<T: DateInterval> IntervalIndex<T> for [T] {
    fn active_at(&self, date: Date) -> Option<&T> {
        self.iter()
            .filter(|interval| interval.contains(date))
            .max_by(|a, b| compare_precedence(*a, *b))
    }
}

/// Orders two matching intervals so the one that should win compares greater.
///
/// Later start wins; on equal starts an open-ended interval beats a closed
/// one, and a later end beats an earlier end.
fn compare_precedence<T: DateInterval>(a: &T, b: &T) -> Ordering {
    a.start().cmp(&b.start()).then_with(|| match (a.end(), b.end()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a_end), Some(b_end)) => a_end.cmp(&b_end),
    })
}

/// Inserts a new interval into a history, closing or superseding the
/// intervals it replaces.
///
/// Given a new interval starting at `S`:
/// - every existing interval with `start < S` that is open-ended or still
///   running on `S` is closed on `S - 1 day`
/// - every existing interval with `start >= S` is removed
///
/// The result is sorted by start date, most recent first. The input slice is
/// never modified, so a failure leaves the caller's history untouched.
///
/// # Errors
///
/// Returns an error if:
/// - The new interval ends before it starts
/// - The day before the new start cannot be represented
pub fn insert_interval<T: DateInterval + Clone>(
    intervals: &[T],
    new_interval: T,
) -> Result<Vec<T>, DomainError> {
    let start: Date = new_interval.start();

    if let Some(end) = new_interval.end().filter(|end| *end < start) {
        return Err(DomainError::MalformedInterval { start, end });
    }

    let close_on: Date = start
        .previous_day()
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("closing intervals before {start}"),
        })?;

    let mut next: Vec<T> = intervals
        .iter()
        .filter(|interval| interval.start() < start)
        .cloned()
        .map(|mut interval| {
            if interval.end().is_none_or(|end| end >= start) {
                interval.set_end(Some(close_on));
            }
            interval
        })
        .collect();

    next.push(new_interval);
    sort_most_recent_first(&mut next);
    Ok(next)
}

/// Returns whether two well-formed intervals share at least one day.
#[must_use]
pub fn overlaps<A: DateInterval, B: DateInterval>(a: &A, b: &B) -> bool {
    let a_before_b_ends: bool = b.end().is_none_or(|b_end| a.start() <= b_end);
    let b_before_a_ends: bool = a.end().is_none_or(|a_end| b.start() <= a_end);
    a_before_b_ends && b_before_a_ends
}

/// Sorts intervals by start date, most recent first.
pub fn sort_most_recent_first<T: DateInterval>(intervals: &mut [T]) {
    intervals.sort_by(|a, b| b.start().cmp(&a.start()));
}
