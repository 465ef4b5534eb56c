// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::term_search::DEFAULT_MAX_SEARCH_DAYS;
use serde::{Deserialize, Serialize};

/// Default number of luck pillars in a chart.
pub const DEFAULT_LUCK_PILLAR_COUNT: usize = 8;

/// Tunable parameters of chart calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Days examined by each solar term search.
    pub max_search_days: u32,
    /// Number of luck pillars to produce.
    pub luck_pillar_count: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            max_search_days: DEFAULT_MAX_SEARCH_DAYS,
            luck_pillar_count: DEFAULT_LUCK_PILLAR_COUNT,
        }
    }
}
