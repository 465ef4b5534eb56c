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

mod bridge;
mod chart;
mod config;
mod da_yun;
mod error;
mod format;
mod oracle;
mod pillars;
mod term_search;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use bridge::{CalendarBridge, CalendarDay};
pub use chart::{BaziChart, ChartEngine, calculate_chart, calculate_chart_with_config};
pub use config::{ChartConfig, DEFAULT_LUCK_PILLAR_COUNT};
pub use da_yun::calculate_da_yun;
pub use error::{ChartError, OracleError, SearchDirection};
pub use format::{
    ProfileRecord, format_da_yun_info, format_degrees, format_summary, format_term_info,
};
pub use oracle::{LunarDate, LunisolarOracle};
pub use pillars::build_pillars;
pub use term_search::{DEFAULT_MAX_SEARCH_DAYS, locate_window, require_term, search_term};
