// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Da Yun (大运) arithmetic.
//!
//! The luck cycle runs forward for a yang-stem male or a yin-stem female and
//! backward otherwise. Its starting age comes from the number of days between
//! birth and the nearest solar term in that direction: three days count as one
//! year, so one leftover day is four months.
//!
//! ## Invariants
//!
//! - `start_months` is always one of 0, 4 or 8
//! - `start_age` is the day count divided by three, rounded up

use crate::sexagenary::{StemBranch, stem_polarity};
use crate::term_window::TermBoundary;
use crate::types::{Gender, Polarity};
use serde::Serialize;

/// Days of term distance that make up one year of the luck cycle.
pub const DAYS_PER_YEAR: u32 = 3;

/// Months of the luck cycle contributed by one leftover day.
pub const MONTHS_PER_DAY: u32 = 4;

/// Years covered by one luck pillar.
pub const YEARS_PER_PILLAR: u32 = 10;

/// Direction in which the luck cycle runs through the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DaYunDirection {
    /// 顺排: towards the next solar term.
    Forward,
    /// 逆排: towards the previous solar term.
    Backward,
}

impl DaYunDirection {
    /// Returns the English label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }

    /// Returns the Chinese label (顺排 / 逆排).
    #[must_use]
    pub const fn chinese(&self) -> &'static str {
        match self {
            Self::Forward => "顺排",
            Self::Backward => "逆排",
        }
    }

    /// Returns the step through the sexagenary cycle per luck pillar.
    #[must_use]
    pub const fn step(&self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

impl std::fmt::Display for DaYunDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Determines the luck cycle direction.
///
/// # Arguments
///
/// * `year_stem` - Stem index of the year pillar
/// * `gender` - Gender of the chart
#[must_use]
pub const fn direction(year_stem: u8, gender: Gender) -> DaYunDirection {
    match (stem_polarity(year_stem), gender) {
        (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female) => {
            DaYunDirection::Forward
        }
        (Polarity::Yang, Gender::Female) | (Polarity::Yin, Gender::Male) => {
            DaYunDirection::Backward
        }
    }
}

/// Returns the fractional starting age for a term distance in days.
#[must_use]
pub fn qi_yun_years(days_to_term: u32) -> f64 {
    f64::from(days_to_term) / f64::from(DAYS_PER_YEAR)
}

/// One decade of the luck cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LuckPillar {
    /// The pillar governing the decade.
    pub pillar: StemBranch,
    /// Age at which the decade begins.
    pub start_age: u32,
}

/// Builds the luck pillars that follow the month pillar.
///
/// The first pillar is one step away from the month pillar in `direction`,
/// each later pillar one further step.
///
/// # Arguments
///
/// * `month_pillar` - The month pillar of the chart
/// * `direction` - The luck cycle direction
/// * `start_age` - Age at which the first decade begins
/// * `count` - Number of decades to produce
#[must_use]
pub fn luck_pillars(
    month_pillar: StemBranch,
    direction: DaYunDirection,
    start_age: u32,
    count: usize,
) -> Vec<LuckPillar> {
    (1..=count)
        .scan(
            (month_pillar, start_age),
            |(pillar, age): &mut (StemBranch, u32), _| {
                *pillar = pillar.offset(direction.step());
                let current: LuckPillar = LuckPillar {
                    pillar: *pillar,
                    start_age: *age,
                };
                *age = age.saturating_add(YEARS_PER_PILLAR);
                Some(current)
            },
        )
        .collect()
}

/// The luck cycle of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaYunPeriod {
    /// Direction of the cycle.
    pub direction: DaYunDirection,
    /// The solar term the distance was measured to.
    pub boundary: TermBoundary,
    /// Whole years before the cycle starts.
    pub start_years: u32,
    /// Remaining months before the cycle starts (0-11).
    pub start_months: u32,
    /// Age at which the cycle starts.
    pub start_age: u32,
    /// Polarity of the year stem.
    pub polarity: Polarity,
    /// Gender of the chart.
    pub gender: Gender,
    /// Decade pillars of the cycle.
    pub luck_pillars: Vec<LuckPillar>,
}

impl DaYunPeriod {
    /// Computes the luck cycle from the distance to the boundary term.
    ///
    /// # Arguments
    ///
    /// * `year_stem` - Stem index of the year pillar
    /// * `gender` - Gender of the chart
    /// * `boundary` - The term found in the cycle's direction and its distance
    /// * `month_pillar` - The month pillar the luck pillars step from
    /// * `pillar_count` - Number of luck pillars to produce
    #[must_use]
    pub fn new(
        year_stem: u8,
        gender: Gender,
        boundary: TermBoundary,
        month_pillar: StemBranch,
        pillar_count: usize,
    ) -> Self {
        let direction: DaYunDirection = direction(year_stem, gender);
        let days: u32 = boundary.days;
        let start_age: u32 = days.div_ceil(DAYS_PER_YEAR);

        Self {
            direction,
            boundary,
            start_years: days / DAYS_PER_YEAR,
            start_months: (days % DAYS_PER_YEAR) * MONTHS_PER_DAY,
            start_age,
            polarity: stem_polarity(year_stem),
            gender,
            luck_pillars: luck_pillars(month_pillar, direction, start_age, pillar_count),
        }
    }

    /// Returns the number of days between birth and the boundary term.
    #[must_use]
    pub const fn days_to_term(&self) -> u32 {
        self.boundary.days
    }

    /// Returns the fractional starting age.
    #[must_use]
    pub fn qi_yun_years(&self) -> f64 {
        qi_yun_years(self.boundary.days)
    }

    /// Returns the polarity and gender label, e.g. `"yin male"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.polarity.as_str(), self.gender.as_str())
    }

    /// Returns the Chinese polarity and gender label, e.g. `"阴男"`.
    #[must_use]
    pub fn chinese_label(&self) -> String {
        format!("{}{}", self.polarity.chinese(), self.gender.chinese())
    }
}
