// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::lunar::{ChineseDate, chinese_from_solar, solar_from_chinese};
use crate::pillars::{day_pillar, year_and_month_pillars};
use crate::sun::term_on;
use bazi::{LunarDate, LunisolarOracle, OracleError};
use bazi_domain::StemBranch;
use std::ops::RangeInclusive;
use time::Date;
use tracing::debug;

/// Earliest Gregorian year the almanac converts.
///
/// One year of margin on each side of the birth-year range keeps the solar
/// term searches of any valid birth date inside the calendar.
pub const MIN_SUPPORTED_YEAR: i32 = 1899;

/// Latest Gregorian year the almanac converts.
pub const MAX_SUPPORTED_YEAR: i32 = 2101;

const SUPPORTED_YEARS: RangeInclusive<i32> = MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR;

/// The Chinese calendar computed from astronomical models.
///
/// Stateless; a single instance can be shared by every thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Almanac;

impl Almanac {
    /// Creates a new `Almanac`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    const fn check_year(year: i32) -> Result<(), OracleError> {
        if year < MIN_SUPPORTED_YEAR || year > MAX_SUPPORTED_YEAR {
            return Err(OracleError::UnsupportedYear {
                year,
                min: MIN_SUPPORTED_YEAR,
                max: MAX_SUPPORTED_YEAR,
            });
        }
        Ok(())
    }

    fn describe(date: Date, lunar: ChineseDate) -> LunarDate {
        let (year_pillar, month_pillar): (StemBranch, StemBranch) = year_and_month_pillars(date);

        LunarDate {
            solar: date,
            lunar_year: lunar.year,
            lunar_month: lunar.month,
            lunar_day: lunar.day,
            is_leap_month: lunar.is_leap_month,
            year_pillar,
            month_pillar,
            day_pillar: day_pillar(date),
            solar_term: term_on(date),
        }
    }

    /// Returns the range of Gregorian years the almanac converts.
    #[must_use]
    pub const fn supported_years() -> RangeInclusive<i32> {
        SUPPORTED_YEARS
    }
}

impl LunisolarOracle for Almanac {
    fn convert_solar(&self, date: Date) -> Result<LunarDate, OracleError> {
        Self::check_year(date.year())?;
        let lunar: ChineseDate = chinese_from_solar(date)?;
        Ok(Self::describe(date, lunar))
    }

    fn convert_lunar(
        &self,
        year: i32,
        month: u8,
        day: u8,
        is_leap_month: bool,
    ) -> Result<LunarDate, OracleError> {
        Self::check_year(year)?;
        let lunar: ChineseDate = ChineseDate {
            year,
            month,
            day,
            is_leap_month,
        };
        let date: Date = solar_from_chinese(lunar)?;
        debug!(year, month, day, is_leap_month, %date, "Converted lunar date");
        Ok(Self::describe(date, lunar))
    }
}
