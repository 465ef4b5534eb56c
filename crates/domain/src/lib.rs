// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod da_yun;
mod error;
mod pillars;
mod region;
mod sexagenary;
mod solar_time;
mod term_window;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use da_yun::{
    DAYS_PER_YEAR, DaYunDirection, DaYunPeriod, LuckPillar, MONTHS_PER_DAY, YEARS_PER_PILLAR,
    direction as da_yun_direction, luck_pillars, qi_yun_years,
};
pub use pillars::{FIVE_RAT_START, hour_branch, hour_pillar, hour_stem};
pub use region::{Center, LongitudeResult, RegionIndex, RegionLevel, RegionMatch, RegionNode};
pub use solar_time::{
    MINUTES_PER_DEGREE, REFERENCE_LONGITUDE, SolarInstant, correct as correct_solar_time,
    correct_time_of_day, offset_minutes,
};
pub use term_window::{SolarTermWindow, TermBoundary};

// Re-export public types
pub use error::DomainError;
pub use sexagenary::{
    BRANCH_NAMES, FourPillars, SOLAR_TERM_NAMES, STEM_NAMES, SolarTerm, StemBranch, ZODIAC_NAMES,
    stem_polarity,
};
pub use types::{BirthRequest, CalendarKind, Gender, Polarity};
pub use validation::{MAX_YEAR, MIN_YEAR, civil_time, solar_date, validate_birth_request};
