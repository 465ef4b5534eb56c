// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Adapter between the chart engine and a [`LunisolarOracle`].

use crate::error::{ChartError, OracleError};
use crate::oracle::{LunarDate, LunisolarOracle};
use bazi_domain::{DomainError, SolarTerm, StemBranch};
use time::{Date, Duration};

/// Entry point for reading calendar days from an oracle.
#[derive(Clone, Copy)]
pub struct CalendarBridge<'a> {
    oracle: &'a dyn LunisolarOracle,
}

impl std::fmt::Debug for CalendarBridge<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarBridge").finish_non_exhaustive()
    }
}

impl<'a> CalendarBridge<'a> {
    /// Creates a bridge over an oracle.
    #[must_use]
    pub const fn new(oracle: &'a dyn LunisolarOracle) -> Self {
        Self { oracle }
    }

    /// Returns the calendar day of a Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns an error if the oracle cannot convert the date.
    pub fn solar_day(&self, date: Date) -> Result<CalendarDay<'a>, OracleError> {
        let lunar: LunarDate = self.oracle.convert_solar(date)?;
        Ok(CalendarDay::new(self.oracle, lunar))
    }

    /// Returns the calendar day of a lunar date.
    ///
    /// A lunar date the calendar does not contain is the caller's mistake and
    /// is reported as a validation error.
    ///
    /// # Errors
    ///
    /// Returns an error if the date does not exist or the year is unsupported.
    pub fn lunar_day(
        &self,
        year: i32,
        month: u8,
        day: u8,
        is_leap_month: bool,
    ) -> Result<CalendarDay<'a>, ChartError> {
        match self.oracle.convert_lunar(year, month, day, is_leap_month) {
            Ok(lunar) => Ok(CalendarDay::new(self.oracle, lunar)),
            Err(OracleError::NoSuchLunarDate { .. } | OracleError::NoSuchLeapMonth { .. }) => {
                Err(ChartError::Validation(DomainError::NonexistentLunarDate {
                    year,
                    month,
                    day,
                    leap: is_leap_month,
                }))
            }
            Err(err) => Err(ChartError::Oracle(err)),
        }
    }
}

/// One civil day as reported by the oracle.
#[derive(Clone)]
pub struct CalendarDay<'a> {
    oracle: &'a dyn LunisolarOracle,
    lunar: LunarDate,
}

impl std::fmt::Debug for CalendarDay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarDay")
            .field("lunar", &self.lunar)
            .finish_non_exhaustive()
    }
}

impl<'a> CalendarDay<'a> {
    const fn new(oracle: &'a dyn LunisolarOracle, lunar: LunarDate) -> Self {
        Self { oracle, lunar }
    }

    /// Returns the day `days` after this one (before it when negative).
    ///
    /// # Errors
    ///
    /// Returns an error if the new date cannot be represented or converted.
    pub fn step_days(&self, days: i64) -> Result<Self, OracleError> {
        let date: Date = self
            .lunar
            .solar
            .checked_add(Duration::days(days))
            .ok_or(OracleError::DateOutOfRange { days })?;
        let lunar: LunarDate = self.oracle.convert_solar(date)?;
        Ok(Self::new(self.oracle, lunar))
    }

    /// Returns the Gregorian date.
    #[must_use]
    pub const fn solar_date(&self) -> Date {
        self.lunar.solar
    }

    /// Returns the year pillar.
    #[must_use]
    pub const fn year_stem_branch(&self) -> StemBranch {
        self.lunar.year_pillar
    }

    /// Returns the month pillar.
    #[must_use]
    pub const fn month_stem_branch(&self) -> StemBranch {
        self.lunar.month_pillar
    }

    /// Returns the day pillar.
    #[must_use]
    pub const fn day_stem_branch(&self) -> StemBranch {
        self.lunar.day_pillar
    }

    /// Whether a solar term falls on this day.
    #[must_use]
    pub const fn has_solar_term(&self) -> bool {
        self.lunar.solar_term.is_some()
    }

    /// Returns the solar term falling on this day.
    #[must_use]
    pub const fn solar_term(&self) -> Option<SolarTerm> {
        self.lunar.solar_term
    }

    /// Returns the oracle's full record of this day.
    #[must_use]
    pub const fn lunar_date(&self) -> &LunarDate {
        &self.lunar
    }

    /// Consumes the day and returns the oracle's record.
    #[must_use]
    pub fn into_lunar_date(self) -> LunarDate {
        self.lunar
    }
}
