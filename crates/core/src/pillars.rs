// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::bridge::CalendarDay;
use bazi_domain::{FourPillars, StemBranch, hour_pillar};

/// Assembles the four pillars of a day and an hour.
///
/// Year, month and day pillars come from the calendar. The hour pillar is
/// derived from the day stem by the five-rat rule.
///
/// # Arguments
///
/// * `day` - The calendar day of birth
/// * `hour` - The true solar hour of birth (0-23)
#[must_use]
pub fn build_pillars(day: &CalendarDay<'_>, hour: u8) -> FourPillars {
    let day_pillar: StemBranch = day.day_stem_branch();

    FourPillars {
        year: day.year_stem_branch(),
        month: day.month_stem_branch(),
        day: day_pillar,
        hour: hour_pillar(day_pillar.stem(), hour),
    }
}
