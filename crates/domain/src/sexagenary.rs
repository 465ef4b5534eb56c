// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sexagenary (stem-branch) labels and the 24 solar terms.
//!
//! ## Invariants
//!
//! - A `StemBranch` always pairs a stem and a branch of the same parity, so
//!   it is one of the 60 pairs of the sexagenary cycle
//! - Index 0 of the cycle is 甲子, index 59 is 癸亥
//! - Solar term ids follow the 冬至-first order used by the calendar oracle

use crate::error::DomainError;
use crate::types::Polarity;
use serde::Serialize;

/// The 10 celestial stems.
pub const STEM_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// The 12 terrestrial branches.
pub const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Zodiac animals, indexed by branch.
pub const ZODIAC_NAMES: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// The 24 solar terms, starting from the winter solstice.
pub const SOLAR_TERM_NAMES: [&str; 24] = [
    "冬至", "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种",
    "夏至", "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪",
];

/// One of the 60 stem-branch pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StemBranch {
    /// Stem index (0-9).
    stem: u8,
    /// Branch index (0-11).
    branch: u8,
}

impl StemBranch {
    /// Creates a `StemBranch` from stem and branch indices.
    ///
    /// # Arguments
    ///
    /// * `stem` - Stem index (0-9)
    /// * `branch` - Branch index (0-11)
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of range or the two indices
    /// have different parity (such pairs never occur in the cycle).
    pub const fn new(stem: u8, branch: u8) -> Result<Self, DomainError> {
        if stem >= 10 || branch >= 12 || stem % 2 != branch % 2 {
            return Err(DomainError::InvalidStemBranch { stem, branch });
        }
        Ok(Self { stem, branch })
    }

    /// Creates the pair at position `index` of the sexagenary cycle.
    ///
    /// The index is reduced modulo 60.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        let index: u8 = index % 60;
        Self {
            stem: index % 10,
            branch: index % 12,
        }
    }

    /// Returns the position of this pair in the sexagenary cycle (0-59).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn index(&self) -> u8 {
        // Chinese remainder: i ≡ stem (mod 10), i ≡ branch (mod 12).
        let raw: i16 = 6 * self.stem as i16 - 5 * self.branch as i16;
        raw.rem_euclid(60) as u8
    }

    /// Returns the pair `steps` positions later (negative: earlier) in the cycle.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn offset(&self, steps: i32) -> Self {
        let index: i32 = (self.index() as i32 + steps).rem_euclid(60);
        Self::from_index(index as u8)
    }

    /// Returns the stem index.
    #[must_use]
    pub const fn stem(&self) -> u8 {
        self.stem
    }

    /// Returns the branch index.
    #[must_use]
    pub const fn branch(&self) -> u8 {
        self.branch
    }

    /// Returns the stem name.
    #[must_use]
    pub const fn stem_name(&self) -> &'static str {
        STEM_NAMES[self.stem as usize]
    }

    /// Returns the branch name.
    #[must_use]
    pub const fn branch_name(&self) -> &'static str {
        BRANCH_NAMES[self.branch as usize]
    }

    /// Returns the zodiac animal of the branch.
    #[must_use]
    pub const fn zodiac(&self) -> &'static str {
        ZODIAC_NAMES[self.branch as usize]
    }

    /// Returns the polarity of the stem. Even stems (甲丙戊庚壬) are yang.
    #[must_use]
    pub const fn polarity(&self) -> Polarity {
        stem_polarity(self.stem)
    }
}

impl std::fmt::Display for StemBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem_name(), self.branch_name())
    }
}

/// Returns the polarity of a stem index.
#[must_use]
pub const fn stem_polarity(stem: u8) -> Polarity {
    if stem % 2 == 0 {
        Polarity::Yang
    } else {
        Polarity::Yin
    }
}

/// The four pillars of a birth chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillars {
    /// Year pillar.
    pub year: StemBranch,
    /// Month pillar.
    pub month: StemBranch,
    /// Day pillar.
    pub day: StemBranch,
    /// Hour pillar.
    pub hour: StemBranch,
}

impl FourPillars {
    /// Returns the pillars in chart order.
    #[must_use]
    pub const fn as_array(&self) -> [StemBranch; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// One of the 24 solar terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SolarTerm(u8);

impl SolarTerm {
    /// Creates a `SolarTerm` from its id.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not in 0-23.
    pub const fn new(id: u8) -> Result<Self, DomainError> {
        if id >= 24 {
            return Err(DomainError::InvalidSolarTerm(id));
        }
        Ok(Self(id))
    }

    /// Returns the term id (0 = 冬至).
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.0
    }

    /// Returns the Chinese name of the term.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        SOLAR_TERM_NAMES[self.0 as usize]
    }

    /// Whether this term is a 节 (month-opening term) rather than a 中气.
    #[must_use]
    pub const fn is_jie(&self) -> bool {
        self.0 % 2 == 1
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
