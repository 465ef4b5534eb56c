// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bounded search for the solar terms around a day.
//!
//! Solar terms are never more than 16 days apart, so a 30-day search in each
//! direction always finds one inside the supported calendar range. The bound
//! is still enforced so every search terminates.

use crate::bridge::CalendarDay;
use crate::error::{ChartError, OracleError, SearchDirection};
use bazi_domain::{SolarTerm, SolarTermWindow, TermBoundary};
use tracing::debug;

/// Default number of days examined by one search.
pub const DEFAULT_MAX_SEARCH_DAYS: u32 = 30;

/// Finds the nearest day carrying a solar term.
///
/// The start day is examined first (distance 0), then one day at a time in
/// `direction`. At most `max_days` days are examined.
///
/// # Arguments
///
/// * `start` - The day the search begins on
/// * `direction` - The direction to step in
/// * `max_days` - The number of days to examine
///
/// # Returns
///
/// * `Ok(Some(boundary))` with the term and its distance in days
/// * `Ok(None)` if no examined day carries a term
///
/// # Errors
///
/// Returns an error if the oracle fails while stepping.
pub fn search_term(
    start: &CalendarDay<'_>,
    direction: SearchDirection,
    max_days: u32,
) -> Result<Option<TermBoundary>, OracleError> {
    let mut day: CalendarDay<'_> = start.clone();

    for offset in 0..max_days {
        if let Some(term) = day.solar_term() {
            return Ok(Some(TermBoundary::new(term, offset)));
        }
        if offset + 1 < max_days {
            day = day.step_days(direction.step())?;
        }
    }

    Ok(None)
}

/// Like [`search_term`], but a missing term is an error.
///
/// # Errors
///
/// Returns [`ChartError::TermNotFound`] if no term lies within `max_days`,
/// or the oracle's error if stepping fails.
pub fn require_term(
    start: &CalendarDay<'_>,
    direction: SearchDirection,
    max_days: u32,
) -> Result<TermBoundary, ChartError> {
    search_term(start, direction, max_days)?.ok_or(ChartError::TermNotFound {
        direction,
        max_days,
    })
}

/// Locates the solar terms on either side of a day.
///
/// # Errors
///
/// Returns an error if either search comes up empty or the oracle fails.
pub fn locate_window(day: &CalendarDay<'_>, max_days: u32) -> Result<SolarTermWindow, ChartError> {
    let previous: TermBoundary = require_term(day, SearchDirection::Backward, max_days)?;
    let next: TermBoundary = require_term(day, SearchDirection::Forward, max_days)?;

    let previous_term: SolarTerm = previous.term;
    let next_term: SolarTerm = next.term;
    debug!(
        date = %day.solar_date(),
        previous = %previous_term,
        days_since = previous.days,
        next = %next_term,
        days_until = next.days,
        "Located solar term window"
    );

    Ok(SolarTermWindow { previous, next })
}
