// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hour pillar (时柱) derivation.
//!
//! The day is divided into twelve two-hour branches starting at 23:00 (子).
//! The stem of the 子 hour is fixed by the day stem (the five-rat rule) and
//! advances by one for each later branch.

use crate::sexagenary::StemBranch;

/// Stem of the 子 hour for each day stem (甲己→甲, 乙庚→丙, 丙辛→戊, 丁壬→庚, 戊癸→壬).
pub const FIVE_RAT_START: [u8; 10] = [0, 2, 4, 6, 8, 0, 2, 4, 6, 8];

/// Number of two-hour steps from the day's 子 hour to `hour`.
///
/// 23:00-23:59 is step 12: the late 子 hour that opens the next cycle.
const fn hour_step(hour: u8) -> u8 {
    (hour % 24 + 1) / 2
}

/// Returns the branch index of the two-hour period containing `hour`.
///
/// 23:00 and 00:59 map to 子 (0); 01:00 maps to 丑 (1).
#[must_use]
pub const fn hour_branch(hour: u8) -> u8 {
    hour_step(hour) % 12
}

/// Returns the hour stem for a day stem and an hour.
///
/// # Arguments
///
/// * `day_stem` - Stem index of the day pillar (0-9)
/// * `hour` - Corrected hour (0-23)
#[must_use]
pub const fn hour_stem(day_stem: u8, hour: u8) -> u8 {
    (FIVE_RAT_START[(day_stem % 10) as usize] + hour_step(hour)) % 10
}

/// Returns the hour pillar for a day stem and an hour.
///
/// The late 子 hour (23:00-23:59) keeps the sexagenary cycle continuous and
/// takes the stem that follows the day's 亥 hour.
#[must_use]
pub fn hour_pillar(day_stem: u8, hour: u8) -> StemBranch {
    // A stem paired with 子 sits at six times the stem in the cycle.
    let rat_hour: StemBranch =
        StemBranch::from_index(FIVE_RAT_START[usize::from(day_stem % 10)] * 6);
    rat_hour.offset(i32::from(hour_step(hour)))
}
