// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sexagenary year, month and day pillars of a civil day.

use crate::sun::month_sector;
use bazi_domain::StemBranch;
use time::{Date, Month};

/// Offset that aligns the Julian day number with the sexagenary day cycle
/// (2000-01-01, JDN 2451545, is 戊午).
const DAY_CYCLE_OFFSET: i64 = 49;

/// Cycle index of the 寅 month pillar for each year stem modulo 5 (the
/// five-tiger rule): 丙寅, 戊寅, 庚寅, 壬寅, 甲寅.
pub const FIVE_TIGER_START: [u8; 5] = [2, 14, 26, 38, 50];

/// Month sectors of 子 and 丑, which close the solar year.
const WINTER_SECTORS: u8 = 10;

/// Returns the day pillar of `date`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn day_pillar(date: Date) -> StemBranch {
    let index: i64 = (i64::from(date.to_julian_day()) + DAY_CYCLE_OFFSET).rem_euclid(60);
    StemBranch::from_index(index as u8)
}

/// Returns the year and month pillars in force on `date`.
///
/// Both change on the day of the 节 term that opens the month, so the year
/// pillar turns over on the day of 立春 rather than at the lunar new year.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn year_and_month_pillars(date: Date) -> (StemBranch, StemBranch) {
    let sector: u8 = month_sector(date);

    let mut solar_year: i32 = date.year();
    if matches!(date.month(), Month::January | Month::February) && sector >= WINTER_SECTORS {
        solar_year -= 1;
    }

    let year: StemBranch = StemBranch::from_index((solar_year - 4).rem_euclid(60) as u8);
    let first_month: StemBranch =
        StemBranch::from_index(FIVE_TIGER_START[usize::from(year.stem() % 5)]);

    (year, first_month.offset(i32::from(sector)))
}
