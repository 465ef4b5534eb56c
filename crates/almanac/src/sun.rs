// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Apparent solar longitude and solar term detection.
//!
//! Uses the low-precision solar theory from Meeus, *Astronomical Algorithms*
//! (2nd ed.), Chapter 25: mean longitude, equation of the center, and the
//! nutation and aberration corrections. Accuracy is about 0.01 degrees, which
//! places a term instant within roughly a quarter of an hour.
//!
//! Solar terms are attributed to civil days in China Standard Time (UTC+8).

use bazi_domain::SolarTerm;
use time::Date;

/// Julian date of J2000.0.
const J2000: f64 = 2_451_545.0;

/// Days in a Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Offset of China Standard Time from UTC, in days.
const CST_OFFSET_DAYS: f64 = 8.0 / 24.0;

/// Degrees of solar longitude between consecutive solar terms.
pub const DEGREES_PER_TERM: f64 = 15.0;

/// Solar longitude at which 立春 begins, and with it the 寅 month.
pub const SPRING_BEGINS_LONGITUDE: f64 = 315.0;

/// Returns the Sun's apparent geocentric longitude in degrees [0, 360).
///
/// # Arguments
///
/// * `jd` - Julian date
#[must_use]
pub fn apparent_longitude(jd: f64) -> f64 {
    let t: f64 = (jd - J2000) / DAYS_PER_CENTURY;

    let mean_longitude: f64 =
        0.000_303_2_f64.mul_add(t * t, 36_000.769_83_f64.mul_add(t, 280.466_46));
    let mean_anomaly: f64 = (-0.000_153_7_f64)
        .mul_add(t * t, 35_999.050_29_f64.mul_add(t, 357.529_11))
        .to_radians();

    // Equation of the center.
    let c1: f64 = (-0.000_014_f64).mul_add(t * t, (-0.004_817_f64).mul_add(t, 1.914_602));
    let c2: f64 = (-0.000_101_f64).mul_add(t, 0.019_993);
    let c3: f64 = 0.000_289;
    let center: f64 = c3.mul_add(
        (3.0 * mean_anomaly).sin(),
        c1.mul_add(mean_anomaly.sin(), c2 * (2.0 * mean_anomaly).sin()),
    );

    let omega: f64 = (-1_934.136_f64).mul_add(t, 125.04).to_radians();
    let true_longitude: f64 = mean_longitude + center;

    (-0.004_78_f64)
        .mul_add(omega.sin(), true_longitude - 0.005_69)
        .rem_euclid(360.0)
}

/// Returns the Julian date of 00:00 China Standard Time on `date`.
#[must_use]
pub fn day_start_jd(date: Date) -> f64 {
    f64::from(date.to_julian_day()) - 0.5 - CST_OFFSET_DAYS
}

/// Returns the solar longitude at the end of `date` (00:00 CST of the next day).
#[must_use]
pub fn day_end_longitude(date: Date) -> f64 {
    apparent_longitude(day_start_jd(date) + 1.0)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn term_sector(longitude: f64) -> u8 {
    (longitude / DEGREES_PER_TERM).floor() as u8 % 24
}

/// Returns the solar term whose instant falls on `date`, if any.
///
/// Term ids count from 冬至 (270 degrees).
#[must_use]
pub fn term_on(date: Date) -> Option<SolarTerm> {
    let start: u8 = term_sector(apparent_longitude(day_start_jd(date)));
    let end: u8 = term_sector(day_end_longitude(date));

    if start == end {
        return None;
    }
    SolarTerm::new((end + 6) % 24).ok()
}

/// Returns the solar month sector (0 = 寅 month, 11 = 丑 month) in force at
/// the end of `date`.
///
/// A day on which a 节 term falls already belongs to the new month.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn month_sector(date: Date) -> u8 {
    let from_spring: f64 = (day_end_longitude(date) - SPRING_BEGINS_LONGITUDE).rem_euclid(360.0);
    (from_spring / 30.0).floor() as u8 % 12
}
