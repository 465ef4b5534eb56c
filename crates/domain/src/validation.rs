// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{BirthRequest, CalendarKind};
use time::{Date, Month, Time};

/// Earliest supported birth year.
pub const MIN_YEAR: i32 = 1900;

/// Latest supported birth year.
pub const MAX_YEAR: i32 = 2100;

/// Longest Gregorian month.
const MAX_SOLAR_DAY: u8 = 31;

/// Longest lunar month.
const MAX_LUNAR_DAY: u8 = 30;

/// Validates a birth request before any calendar work is done.
///
/// Lunar dates are only range-checked here; whether the day exists in that
/// lunar month is decided by the calendar oracle.
///
/// # Arguments
///
/// * `request` - The request to validate
///
/// # Returns
///
/// * `Ok(())` if every field is in range
/// * `Err(DomainError)` describing the first violated rule
///
/// # Errors
///
/// Returns an error if:
/// - The year is outside 1900-2100
/// - The month is outside 1-12
/// - The day is outside the month (Gregorian) or outside 1-30 (lunar)
/// - The hour or minute is out of range
/// - A leap month is requested for a solar date
pub fn validate_birth_request(request: &BirthRequest) -> Result<(), DomainError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&request.year) {
        return Err(DomainError::InvalidYear { year: request.year });
    }

    if !(1..=12).contains(&request.month) {
        return Err(DomainError::InvalidMonth {
            month: request.month,
        });
    }

    match request.calendar_kind {
        CalendarKind::Solar => {
            if request.is_leap_month {
                return Err(DomainError::LeapMonthOnSolarDate);
            }
            if !(1..=MAX_SOLAR_DAY).contains(&request.day) {
                return Err(DomainError::InvalidDay {
                    day: request.day,
                    max: MAX_SOLAR_DAY,
                });
            }
            solar_date(request.year, request.month, request.day)?;
        }
        CalendarKind::Lunar => {
            if !(1..=MAX_LUNAR_DAY).contains(&request.day) {
                return Err(DomainError::InvalidDay {
                    day: request.day,
                    max: MAX_LUNAR_DAY,
                });
            }
        }
    }

    if request.hour > 23 {
        return Err(DomainError::InvalidHour { hour: request.hour });
    }

    if request.minute > 59 {
        return Err(DomainError::InvalidMinute {
            minute: request.minute,
        });
    }

    Ok(())
}

/// Builds a Gregorian date.
///
/// # Errors
///
/// Returns an error if the date does not exist, e.g. 2023-02-29.
pub fn solar_date(year: i32, month: u8, day: u8) -> Result<Date, DomainError> {
    let nonexistent = || DomainError::NonexistentSolarDate { year, month, day };
    let month_value: Month = Month::try_from(month).map_err(|_| nonexistent())?;
    Date::from_calendar_date(year, month_value, day).map_err(|_| nonexistent())
}

/// Builds the civil time of day of a request.
///
/// # Errors
///
/// Returns an error if the hour or minute is out of range.
pub fn civil_time(hour: u8, minute: u8) -> Result<Time, DomainError> {
    if hour > 23 {
        return Err(DomainError::InvalidHour { hour });
    }
    Time::from_hms(hour, minute, 0).map_err(|_| DomainError::InvalidMinute { minute })
}
