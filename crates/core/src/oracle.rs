// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The lunisolar calendar seam.
//!
//! Everything astronomical (lunations, solar term instants, sexagenary day
//! counting) lives behind [`LunisolarOracle`]. The engine only steps through
//! calendar days and reads what the oracle reports for each one.

use crate::error::OracleError;
use bazi_domain::{SolarTerm, StemBranch};
use serde::Serialize;
use time::Date;

/// Everything the calendar knows about one civil day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LunarDate {
    /// Gregorian date of the day.
    pub solar: Date,
    /// Lunar year (the Gregorian year in which it begins).
    pub lunar_year: i32,
    /// Lunar month number (1-12).
    pub lunar_month: u8,
    /// Lunar day (1-30).
    pub lunar_day: u8,
    /// Whether the lunar month is a leap month.
    pub is_leap_month: bool,
    /// Year pillar, changing at 立春.
    pub year_pillar: StemBranch,
    /// Month pillar, changing at each 节 term.
    pub month_pillar: StemBranch,
    /// Day pillar.
    pub day_pillar: StemBranch,
    /// The solar term falling on this day, if any.
    pub solar_term: Option<SolarTerm>,
}

/// A provider of Chinese calendar data.
///
/// Implementations must be deterministic and safe to share between threads.
pub trait LunisolarOracle: Send + Sync {
    /// Returns the calendar data of a Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is outside the supported range.
    fn convert_solar(&self, date: Date) -> Result<LunarDate, OracleError>;

    /// Returns the calendar data of a lunar date.
    ///
    /// # Arguments
    ///
    /// * `year` - Lunar year
    /// * `month` - Lunar month number (1-12)
    /// * `day` - Lunar day (1-30)
    /// * `is_leap_month` - Selects the leap month numbered `month`
    ///
    /// # Errors
    ///
    /// Returns an error if the year is unsupported or the date does not exist.
    fn convert_lunar(
        &self,
        year: i32,
        month: u8,
        day: u8,
        is_leap_month: bool,
    ) -> Result<LunarDate, OracleError>;
}
