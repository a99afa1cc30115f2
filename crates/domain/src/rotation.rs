// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Matrix rotation arithmetic.
//!
//! A matrix is one cycle of shift codes. Anchored at a start date, day `n`
//! of the rotation uses `sequence[n mod len]`. Dates carry no time component,
//! so day counts are exact whole calendar days.

use crate::types::{Matrix, ShiftCode};
use time::Date;

/// Returns the number of whole calendar days from `from` to `to`.
///
/// Negative when `to` precedes `from`.
#[must_use]
pub fn days_between(from: Date, to: Date) -> i64 {
    (to - from).whole_days()
}

/// Computes the shift code a matrix assigns to `target`.
///
/// # Arguments
///
/// * `matrix` - The rotation matrix
/// * `anchor` - Day zero of the rotation
/// * `target` - The date to compute
///
/// # Returns
///
/// * `Some(code)` for dates on or after the anchor
/// * `None` if `target` precedes `anchor` or the sequence is empty
#[must_use]
pub fn rotation_shift(matrix: &Matrix, anchor: Date, target: Date) -> Option<&ShiftCode> {
    if target < anchor || matrix.sequence.is_empty() {
        return None;
    }

    let offset: usize = usize::try_from(days_between(anchor, target)).ok()?;
    matrix.sequence.get(offset % matrix.sequence.len())
}
