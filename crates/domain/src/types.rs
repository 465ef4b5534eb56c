// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Gender of the person the chart is cast for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// 男 (乾造).
    Male,
    /// 女 (坤造).
    Female,
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "男" | "male" | "Male" | "M" | "m" => Ok(Self::Male),
            "女" | "female" | "Female" | "F" | "f" => Ok(Self::Female),
            other => Err(DomainError::InvalidGender(other.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Gender {
    /// Converts this gender to its English label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Returns the Chinese label (男 / 女).
    #[must_use]
    pub const fn chinese(&self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }

    /// Returns the chart designation shown next to the gender (乾造 / 坤造).
    #[must_use]
    pub const fn chart_designation(&self) -> &'static str {
        match self {
            Self::Male => "乾造",
            Self::Female => "坤造",
        }
    }
}

/// Calendar in which the birth date was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CalendarKind {
    /// Gregorian calendar (公历).
    #[default]
    Solar,
    /// Chinese lunisolar calendar (农历).
    Lunar,
}

impl FromStr for CalendarKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "公历" | "阳历" | "solar" | "Solar" | "gregorian" => Ok(Self::Solar),
            "农历" | "阴历" | "lunar" | "Lunar" => Ok(Self::Lunar),
            other => Err(DomainError::InvalidCalendarKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl CalendarKind {
    /// Converts this calendar kind to its English label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Solar => "solar",
            Self::Lunar => "lunar",
        }
    }

    /// Returns the Chinese label (公历 / 农历).
    #[must_use]
    pub const fn chinese(&self) -> &'static str {
        match self {
            Self::Solar => "公历",
            Self::Lunar => "农历",
        }
    }
}

/// Yin/yang polarity of a celestial stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// 阳.
    Yang,
    /// 阴.
    Yin,
}

impl Polarity {
    /// Returns the English label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yang => "yang",
            Self::Yin => "yin",
        }
    }

    /// Returns the Chinese label (阳 / 阴).
    #[must_use]
    pub const fn chinese(&self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }
}

/// Birth data a chart is calculated from.
///
/// `year`/`month`/`day` are interpreted in `calendar_kind`. For lunar input,
/// `is_leap_month` selects the leap month of that number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthRequest {
    /// Optional display name.
    pub name: Option<String>,
    /// Gender.
    pub gender: Gender,
    /// Calendar the date is expressed in.
    pub calendar_kind: CalendarKind,
    /// Year.
    pub year: i32,
    /// Month (1-12).
    pub month: u8,
    /// Day of month.
    pub day: u8,
    /// Whether the lunar month is the leap month.
    #[serde(default)]
    pub is_leap_month: bool,
    /// Civil hour (0-23).
    pub hour: u8,
    /// Civil minute (0-59).
    pub minute: u8,
    /// City of birth, used for the longitude lookup.
    pub birth_city: String,
    /// Current city of residence, display only.
    pub current_city: Option<String>,
}

impl BirthRequest {
    /// Creates a new `BirthRequest` for a non-leap date without name or current city.
    ///
    /// # Arguments
    ///
    /// * `gender` - The gender
    /// * `calendar_kind` - The calendar of `year`/`month`/`day`
    /// * `(year, month, day)` - The birth date
    /// * `(hour, minute)` - The civil birth time
    /// * `birth_city` - The city of birth
    #[must_use]
    pub fn new(
        gender: Gender,
        calendar_kind: CalendarKind,
        (year, month, day): (i32, u8, u8),
        (hour, minute): (u8, u8),
        birth_city: &str,
    ) -> Self {
        Self {
            name: None,
            gender,
            calendar_kind,
            year,
            month,
            day,
            is_leap_month: false,
            hour,
            minute,
            birth_city: birth_city.to_string(),
            current_city: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Sets the current city.
    #[must_use]
    pub fn with_current_city(mut self, city: &str) -> Self {
        self.current_city = Some(city.to_string());
        self
    }

    /// Marks the lunar month as the leap month.
    #[must_use]
    pub const fn with_leap_month(mut self, is_leap_month: bool) -> Self {
        self.is_leap_month = is_leap_month;
        self
    }

    /// Returns the name if one was given and it is not blank.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
