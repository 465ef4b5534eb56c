// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Birth year is outside the supported range.
    InvalidYear {
        /// The rejected year.
        year: i32,
    },
    /// Month is outside 1-12.
    InvalidMonth {
        /// The rejected month.
        month: u8,
    },
    /// Day is outside the range allowed for the calendar kind.
    InvalidDay {
        /// The rejected day.
        day: u8,
        /// The largest day the calendar kind allows.
        max: u8,
    },
    /// Hour is outside 0-23.
    InvalidHour {
        /// The rejected hour.
        hour: u8,
    },
    /// Minute is outside 0-59.
    InvalidMinute {
        /// The rejected minute.
        minute: u8,
    },
    /// The Gregorian date does not exist (e.g. February 30).
    NonexistentSolarDate {
        /// The year.
        year: i32,
        /// The month.
        month: u8,
        /// The day.
        day: u8,
    },
    /// The lunar date does not exist in that lunar year.
    NonexistentLunarDate {
        /// The lunar year.
        year: i32,
        /// The lunar month.
        month: u8,
        /// The lunar day.
        day: u8,
        /// Whether the leap month was requested.
        leap: bool,
    },
    /// A leap month was requested for a solar date.
    LeapMonthOnSolarDate,
    /// Gender label could not be parsed.
    InvalidGender(String),
    /// Calendar kind label could not be parsed.
    InvalidCalendarKind(String),
    /// Stem and branch indices do not form a sexagenary pair.
    InvalidStemBranch {
        /// The stem index.
        stem: u8,
        /// The branch index.
        branch: u8,
    },
    /// Solar term identifier is outside 0-23.
    InvalidSolarTerm(u8),
    /// The region dataset could not be read.
    InvalidRegionData {
        /// Description of the parsing error.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidYear { year } => {
                write!(f, "Invalid year: {year}. Must be between 1900 and 2100")
            }
            Self::InvalidMonth { month } => {
                write!(f, "Invalid month: {month}. Must be between 1 and 12")
            }
            Self::InvalidDay { day, max } => {
                write!(f, "Invalid day: {day}. Must be between 1 and {max}")
            }
            Self::InvalidHour { hour } => {
                write!(f, "Invalid hour: {hour}. Must be between 0 and 23")
            }
            Self::InvalidMinute { minute } => {
                write!(f, "Invalid minute: {minute}. Must be between 0 and 59")
            }
            Self::NonexistentSolarDate { year, month, day } => {
                write!(f, "Date {year:04}-{month:02}-{day:02} does not exist")
            }
            Self::NonexistentLunarDate {
                year,
                month,
                day,
                leap,
            } => {
                let leap_text: &str = if *leap { "leap " } else { "" };
                write!(
                    f,
                    "Lunar date {year} {leap_text}month {month} day {day} does not exist"
                )
            }
            Self::LeapMonthOnSolarDate => {
                write!(f, "Leap month can only be requested for lunar dates")
            }
            Self::InvalidGender(value) => write!(f, "Invalid gender: {value}"),
            Self::InvalidCalendarKind(value) => write!(f, "Invalid calendar kind: {value}"),
            Self::InvalidStemBranch { stem, branch } => {
                write!(
                    f,
                    "Stem {stem} and branch {branch} do not form a sexagenary pair"
                )
            }
            Self::InvalidSolarTerm(id) => {
                write!(f, "Invalid solar term: {id}. Must be between 0 and 23")
            }
            Self::InvalidRegionData { reason } => {
                write!(f, "Invalid region data: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
