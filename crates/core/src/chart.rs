// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Chart assembly.
//!
//! ## Pipeline
//!
//! 1. Validate the request
//! 2. Resolve the birth city to a longitude
//! 3. Correct the civil time to true solar time
//! 4. Read the birth day from the calendar oracle
//! 5. Build the four pillars
//! 6. Locate the surrounding solar terms
//! 7. Calculate the luck cycle
//! 8. Render the text summary
//!
//! Solar input is corrected first and the corrected date is looked up, so a
//! correction across midnight moves the day pillar. Lunar input is looked up
//! first and only the time of day is corrected.

use crate::bridge::{CalendarBridge, CalendarDay};
use crate::config::ChartConfig;
use crate::da_yun::calculate_da_yun;
use crate::error::ChartError;
use crate::format::{ProfileRecord, format_da_yun_info, format_summary, format_term_info};
use crate::oracle::{LunarDate, LunisolarOracle};
use crate::pillars::build_pillars;
use crate::term_search::locate_window;
use bazi_domain::{
    BirthRequest, CalendarKind, DaYunPeriod, FourPillars, LongitudeResult, RegionIndex,
    SolarInstant, SolarTermWindow, civil_time, correct_solar_time, correct_time_of_day,
    solar_date, validate_birth_request,
};
use serde::Serialize;
use std::sync::Arc;
use time::{Date, PrimitiveDateTime, Time};
use tracing::{debug, info};

/// A calculated birth chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaziChart {
    /// The request the chart was calculated from.
    pub request: BirthRequest,
    /// Longitude of the birth city.
    pub birth_longitude: LongitudeResult,
    /// Birth time corrected to true solar time.
    pub solar_instant: SolarInstant,
    /// Calendar data of the birth day.
    pub lunar_date: LunarDate,
    /// The four pillars.
    pub pillars: FourPillars,
    /// Solar terms around the birth day.
    pub term_window: SolarTermWindow,
    /// The luck cycle.
    pub da_yun: DaYunPeriod,
    /// Human-readable summary.
    pub summary: String,
}

impl BaziChart {
    /// Returns the pillars as text, e.g. `"癸酉 辛酉 癸卯 乙卯"`.
    #[must_use]
    pub fn bazi(&self) -> String {
        self.pillars.to_string()
    }

    /// Returns the solar term description.
    #[must_use]
    pub fn term_info(&self) -> String {
        format_term_info(&self.term_window)
    }

    /// Returns the luck cycle description.
    #[must_use]
    pub fn da_yun_info(&self) -> String {
        format_da_yun_info(&self.da_yun)
    }

    /// Returns the flat record stored alongside a user profile.
    #[must_use]
    pub fn profile_record(&self) -> ProfileRecord {
        ProfileRecord {
            bazi: self.bazi(),
            jieqi_info: self.term_info(),
            dayun_info: self.da_yun_info(),
            formatted_output: self.summary.clone(),
        }
    }
}

/// Calculates a chart with the default configuration.
///
/// # Arguments
///
/// * `request` - The birth data
/// * `regions` - The region index used for the longitude lookup
/// * `oracle` - The lunisolar calendar
///
/// # Errors
///
/// Returns an error if:
/// - The request fails validation
/// - A lunar date does not exist
/// - The oracle cannot convert a date
/// - No solar term lies within the search bound
pub fn calculate_chart(
    request: &BirthRequest,
    regions: &RegionIndex,
    oracle: &dyn LunisolarOracle,
) -> Result<BaziChart, ChartError> {
    calculate_chart_with_config(request, regions, oracle, &ChartConfig::default())
}

/// Calculates a chart.
///
/// # Errors
///
/// See [`calculate_chart`].
pub fn calculate_chart_with_config(
    request: &BirthRequest,
    regions: &RegionIndex,
    oracle: &dyn LunisolarOracle,
    config: &ChartConfig,
) -> Result<BaziChart, ChartError> {
    validate_birth_request(request)?;

    let birth_longitude: LongitudeResult = regions.resolve(&request.birth_city);
    let time_of_day: Time = civil_time(request.hour, request.minute)?;
    let bridge: CalendarBridge<'_> = CalendarBridge::new(oracle);

    let (solar_instant, day): (SolarInstant, CalendarDay<'_>) = match request.calendar_kind {
        CalendarKind::Solar => {
            let date: Date = solar_date(request.year, request.month, request.day)?;
            let instant: SolarInstant = correct_solar_time(
                PrimitiveDateTime::new(date, time_of_day),
                birth_longitude.longitude,
            );
            let day: CalendarDay<'_> = bridge.solar_day(instant.date())?;
            (instant, day)
        }
        CalendarKind::Lunar => {
            let day: CalendarDay<'_> = bridge.lunar_day(
                request.year,
                request.month,
                request.day,
                request.is_leap_month,
            )?;
            let instant: SolarInstant =
                correct_time_of_day(day.solar_date(), time_of_day, birth_longitude.longitude);
            (instant, day)
        }
    };

    debug!(
        longitude = birth_longitude.longitude,
        offset_minutes = solar_instant.offset_minutes,
        corrected = %solar_instant.corrected,
        "Corrected to true solar time"
    );

    let pillars: FourPillars = build_pillars(&day, solar_instant.hour());
    let term_window: SolarTermWindow = locate_window(&day, config.max_search_days)?;
    let da_yun: DaYunPeriod = calculate_da_yun(
        &day,
        &pillars,
        request.gender,
        config.max_search_days,
        config.luck_pillar_count,
    )?;

    let mut chart: BaziChart = BaziChart {
        request: request.clone(),
        birth_longitude,
        solar_instant,
        lunar_date: day.into_lunar_date(),
        pillars,
        term_window,
        da_yun,
        summary: String::new(),
    };
    chart.summary = format_summary(&chart);

    info!(
        calendar = request.calendar_kind.as_str(),
        pillars = %chart.pillars,
        start_age = chart.da_yun.start_age,
        "Calculated chart"
    );

    Ok(chart)
}

/// A chart calculator holding shared read-only resources.
///
/// Cloning is cheap; clones share the region index and the oracle, and may be
/// used from any number of threads at once.
#[derive(Clone)]
pub struct ChartEngine {
    regions: Arc<RegionIndex>,
    oracle: Arc<dyn LunisolarOracle>,
    config: ChartConfig,
}

impl std::fmt::Debug for ChartEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartEngine")
            .field("regions", &self.regions.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ChartEngine {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new(regions: Arc<RegionIndex>, oracle: Arc<dyn LunisolarOracle>) -> Self {
        Self::with_config(regions, oracle, ChartConfig::default())
    }

    /// Creates an engine with an explicit configuration.
    #[must_use]
    pub const fn with_config(
        regions: Arc<RegionIndex>,
        oracle: Arc<dyn LunisolarOracle>,
        config: ChartConfig,
    ) -> Self {
        Self {
            regions,
            oracle,
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Returns the region index.
    #[must_use]
    pub fn regions(&self) -> &RegionIndex {
        &self.regions
    }

    /// Resolves a city name to a longitude.
    #[must_use]
    pub fn resolve_longitude(&self, city_name: &str) -> f64 {
        self.regions.resolve_longitude(city_name)
    }

    /// Calculates a chart.
    ///
    /// # Errors
    ///
    /// See [`calculate_chart`].
    pub fn calculate(&self, request: &BirthRequest) -> Result<BaziChart, ChartError> {
        calculate_chart_with_config(request, &self.regions, self.oracle.as_ref(), &self.config)
    }
}
