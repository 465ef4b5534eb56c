// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! True solar time correction.
//!
//! China Standard Time is the mean solar time of the 120°E meridian. Every
//! degree of longitude away from it shifts local solar time by four minutes:
//!
//! ```text
//! offset_minutes = (longitude - 120) * 4
//! ```

use serde::Serialize;
use time::{Date, Duration, PrimitiveDateTime, Time};

/// Reference meridian of China Standard Time, degrees east.
pub const REFERENCE_LONGITUDE: f64 = 120.0;

/// Minutes of solar time per degree of longitude.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// A civil date-time shifted to true solar time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarInstant {
    /// The civil (clock) date-time that was corrected.
    pub civil: PrimitiveDateTime,
    /// The true solar date-time.
    pub corrected: PrimitiveDateTime,
    /// Longitude used for the correction, degrees east.
    pub longitude: f64,
    /// Applied offset in minutes (negative west of 120°E).
    pub offset_minutes: f64,
}

impl SolarInstant {
    /// Returns the corrected date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.corrected.date()
    }

    /// Returns the corrected hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.corrected.hour()
    }

    /// Returns the corrected minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.corrected.minute()
    }
}

/// Returns the solar time offset in minutes for a longitude.
#[must_use]
pub fn offset_minutes(longitude: f64) -> f64 {
    (longitude - REFERENCE_LONGITUDE) * MINUTES_PER_DEGREE
}

fn offset_duration(longitude: f64) -> Duration {
    Duration::checked_seconds_f64(offset_minutes(longitude) * 60.0).unwrap_or(Duration::ZERO)
}

/// Corrects a civil date-time to true solar time.
///
/// The date moves with the time when the offset crosses midnight.
///
/// # Arguments
///
/// * `civil` - The clock date-time at the place of birth
/// * `longitude` - Degrees east of the place of birth
#[must_use]
pub fn correct(civil: PrimitiveDateTime, longitude: f64) -> SolarInstant {
    SolarInstant {
        civil,
        corrected: civil.saturating_add(offset_duration(longitude)),
        longitude,
        offset_minutes: offset_minutes(longitude),
    }
}

/// Corrects only the time of day, wrapping around midnight.
///
/// Lunar input only knows its Gregorian date after calendar conversion, so
/// the date part is taken as given and never shifted.
///
/// # Arguments
///
/// * `date` - The Gregorian date reported for the lunar birth date
/// * `civil_time` - The clock time at the place of birth
/// * `longitude` - Degrees east of the place of birth
#[must_use]
pub fn correct_time_of_day(date: Date, civil_time: Time, longitude: f64) -> SolarInstant {
    let civil: PrimitiveDateTime = PrimitiveDateTime::new(date, civil_time);
    SolarInstant {
        civil,
        corrected: PrimitiveDateTime::new(date, civil_time + offset_duration(longitude)),
        longitude,
        offset_minutes: offset_minutes(longitude),
    }
}
