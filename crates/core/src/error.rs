// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for chart calculation.

use bazi_domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Direction of a day-by-day calendar search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SearchDirection {
    /// Towards earlier days.
    Backward,
    /// Towards later days.
    Forward,
}

impl SearchDirection {
    /// Returns the signed day step of this direction.
    #[must_use]
    pub const fn step(&self) -> i64 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

impl std::fmt::Display for SearchDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backward => write!(f, "backward"),
            Self::Forward => write!(f, "forward"),
        }
    }
}

/// Errors reported by a lunisolar calendar oracle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// The year is outside the range the oracle can convert.
    #[error("Year {year} is outside the supported range {min}-{max}")]
    UnsupportedYear { year: i32, min: i32, max: i32 },

    /// The lunar month has fewer days than requested.
    #[error("Lunar year {year} month {month} has no day {day}")]
    NoSuchLunarDate { year: i32, month: u8, day: u8 },

    /// The lunar year has no leap month with that number.
    #[error("Lunar year {year} has no leap month {month}")]
    NoSuchLeapMonth { year: i32, month: u8 },

    /// Stepping the calendar left the representable date range.
    #[error("Date arithmetic overflowed stepping {days} days")]
    DateOutOfRange { days: i64 },

    /// A date could not be converted between calendar representations.
    #[error("Calendar conversion failed: {0}")]
    Conversion(String),
}

/// Errors that can occur while calculating a chart.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// The birth data is invalid.
    #[error("Invalid birth data: {0}")]
    Validation(#[from] DomainError),

    /// The calendar oracle failed.
    #[error("Calendar error: {0}")]
    Oracle(#[from] OracleError),

    /// No solar term lies within the search bound.
    #[error("No solar term found searching {direction} within {max_days} days")]
    TermNotFound {
        direction: SearchDirection,
        max_days: u32,
    },
}
