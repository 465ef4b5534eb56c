// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Chinese lunisolar dates.
//!
//! Lunations and leap months come from `calendrical_calculations`, which
//! counts months of a lunar year by ordinal (1-13). Ordinals are mapped to
//! the traditional numbering where a leap month repeats the number of the
//! month before it.

use bazi::OracleError;
use calendrical_calculations::chinese_based::{
    Chinese, ChineseFromFixedResult, YearBounds, chinese_based_date_from_fixed,
    month_structure_for_year,
};
use calendrical_calculations::gregorian::fixed_from_gregorian;
use calendrical_calculations::rata_die::RataDie;
use std::num::NonZeroU8;
use time::Date;

/// Julian day number of rata die 0.
const RATA_DIE_JULIAN_OFFSET: i64 = 1_721_425;

/// Days in a long (大) lunar month.
const LONG_MONTH_DAYS: u8 = 30;

/// Days in a short (小) lunar month.
const SHORT_MONTH_DAYS: u8 = 29;

/// A date in the Chinese calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChineseDate {
    /// Gregorian year in which the lunar year begins.
    pub year: i32,
    /// Month number (1-12).
    pub month: u8,
    /// Day of month (1-30).
    pub day: u8,
    /// Whether the month is the leap month of the year.
    pub is_leap_month: bool,
}

/// Converts a Gregorian date to a rata die.
pub fn to_rata_die(date: Date) -> RataDie {
    RataDie::new(i64::from(date.to_julian_day()) - RATA_DIE_JULIAN_OFFSET)
}

/// Converts a rata die to a Gregorian date.
///
/// # Errors
///
/// Returns an error if the day is outside the range of [`Date`].
pub fn from_rata_die(rata_die: RataDie) -> Result<Date, OracleError> {
    let julian_day: i32 = i32::try_from(rata_die.to_i64_date() + RATA_DIE_JULIAN_OFFSET)
        .map_err(|e| OracleError::Conversion(e.to_string()))?;
    Date::from_julian_day(julian_day).map_err(|e| OracleError::Conversion(e.to_string()))
}

/// Returns the ordinal of the leap month of the lunar year starting at `new_year`.
fn leap_ordinal(new_year: RataDie) -> Option<u8> {
    chinese_based_date_from_fixed::<Chinese>(new_year)
        .leap_month
        .map(NonZeroU8::get)
}

/// Maps a month ordinal to its number and leap flag.
const fn month_number(ordinal: u8, leap_ordinal: Option<u8>) -> (u8, bool) {
    match leap_ordinal {
        Some(leap) if ordinal == leap => (ordinal - 1, true),
        Some(leap) if ordinal > leap => (ordinal - 1, false),
        _ => (ordinal, false),
    }
}

/// Converts a Gregorian date to a Chinese date.
///
/// # Errors
///
/// Returns an error if the start of the lunar year cannot be represented.
pub fn chinese_from_solar(date: Date) -> Result<ChineseDate, OracleError> {
    let result: ChineseFromFixedResult = chinese_based_date_from_fixed::<Chinese>(to_rata_die(date));
    let new_year: Date = from_rata_die(result.year_bounds.new_year)?;
    let (month, is_leap_month): (u8, bool) =
        month_number(result.month, result.leap_month.map(NonZeroU8::get));

    Ok(ChineseDate {
        year: new_year.year(),
        month,
        day: result.day,
        is_leap_month,
    })
}

/// Converts a Chinese date to a Gregorian date.
///
/// # Errors
///
/// Returns an error if:
/// - The month is not 1-12
/// - A leap month is requested that the year does not have
/// - The day is beyond the end of the month
pub fn solar_from_chinese(lunar: ChineseDate) -> Result<Date, OracleError> {
    let ChineseDate {
        year,
        month,
        day,
        is_leap_month,
    } = lunar;
    if !(1..=12).contains(&month) || day == 0 {
        return Err(OracleError::NoSuchLunarDate { year, month, day });
    }

    // Midsummer always lies inside the lunar year that began in the same Gregorian year.
    let bounds: YearBounds = YearBounds::compute::<Chinese>(fixed_from_gregorian(year, 7, 1));
    let leap: Option<u8> = leap_ordinal(bounds.new_year);
    let (long_months, _): ([bool; 13], Option<u8>) =
        month_structure_for_year::<Chinese>(bounds.new_year, bounds.next_new_year);

    let ordinal: u8 = if is_leap_month {
        if leap != Some(month + 1) {
            return Err(OracleError::NoSuchLeapMonth { year, month });
        }
        month + 1
    } else {
        match leap {
            Some(leap) if month >= leap => month + 1,
            _ => month,
        }
    };

    let month_length = |index: usize| -> u8 {
        if long_months.get(index).copied().unwrap_or(false) {
            LONG_MONTH_DAYS
        } else {
            SHORT_MONTH_DAYS
        }
    };

    let index: usize = usize::from(ordinal - 1);
    if day > month_length(index) {
        return Err(OracleError::NoSuchLunarDate { year, month, day });
    }

    let days_before_month: i64 = (0..index).map(|i| i64::from(month_length(i))).sum();
    from_rata_die(bounds.new_year + days_before_month + i64::from(day - 1))
}
