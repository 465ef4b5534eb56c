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

mod almanac;
mod lunar;
mod pillars;
mod sun;

#[cfg(test)]
mod tests;

pub use almanac::{Almanac, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR};
pub use lunar::{ChineseDate, chinese_from_solar, solar_from_chinese};
pub use pillars::{FIVE_TIGER_START, day_pillar, year_and_month_pillars};
pub use sun::{apparent_longitude, day_start_jd, month_sector, term_on};
