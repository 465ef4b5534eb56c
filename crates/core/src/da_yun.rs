// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::bridge::CalendarDay;
use crate::error::{ChartError, SearchDirection};
use crate::term_search::require_term;
use bazi_domain::{DaYunDirection, DaYunPeriod, FourPillars, Gender, TermBoundary, da_yun_direction};
use tracing::debug;

/// Calculates the luck cycle of a chart.
///
/// The distance is measured to the nearest term in the cycle's own direction,
/// with a fresh search rather than the surrounding-term window.
///
/// # Arguments
///
/// * `day` - The calendar day of birth
/// * `pillars` - The chart's pillars
/// * `gender` - Gender of the chart
/// * `max_days` - Search bound in days
/// * `pillar_count` - Number of luck pillars to produce
///
/// # Errors
///
/// Returns an error if no term lies within the bound or the oracle fails.
pub fn calculate_da_yun(
    day: &CalendarDay<'_>,
    pillars: &FourPillars,
    gender: Gender,
    max_days: u32,
    pillar_count: usize,
) -> Result<DaYunPeriod, ChartError> {
    let year_stem: u8 = pillars.year.stem();
    let search: SearchDirection = match da_yun_direction(year_stem, gender) {
        DaYunDirection::Forward => SearchDirection::Forward,
        DaYunDirection::Backward => SearchDirection::Backward,
    };

    let boundary: TermBoundary = require_term(day, search, max_days)?;
    let period: DaYunPeriod =
        DaYunPeriod::new(year_stem, gender, boundary, pillars.month, pillar_count);

    debug!(
        direction = %period.direction,
        days = boundary.days,
        start_years = period.start_years,
        start_months = period.start_months,
        start_age = period.start_age,
        "Calculated da yun"
    );

    Ok(period)
}
