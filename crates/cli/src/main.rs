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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use bazi::{BaziChart, ChartConfig, ChartEngine, ProfileRecord};
use bazi_almanac::Almanac;
use bazi_domain::{BirthRequest, CalendarKind, Gender, RegionIndex};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// BaZi - Four Pillars birth chart calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name printed at the top of the summary
    #[arg(short, long)]
    name: Option<String>,

    /// Gender of the chart (male / female, 男 / 女)
    #[arg(short, long)]
    gender: Gender,

    /// Calendar the birth date is given in (solar / lunar)
    #[arg(short, long, default_value = "solar")]
    calendar: CalendarKind,

    /// Birth date as YYYY-MM-DD
    #[arg(short, long, value_parser = parse_date)]
    date: (i32, u8, u8),

    /// Civil birth time as HH:MM
    #[arg(short, long, value_parser = parse_time)]
    time: (u8, u8),

    /// Birth city, used for the true solar time correction
    #[arg(short, long)]
    birth_city: String,

    /// Current city of residence
    #[arg(long)]
    current_city: Option<String>,

    /// The lunar date is in a leap month
    #[arg(long)]
    leap_month: bool,

    /// Path to the administrative region JSON file. Without it every city
    /// resolves to 120°E.
    #[arg(short, long, env = "BAZI_REGIONS")]
    regions: Option<PathBuf>,

    /// Number of luck pillars to list
    #[arg(long, default_value_t = bazi::DEFAULT_LUCK_PILLAR_COUNT)]
    luck_pillars: usize,

    /// Print the chart as JSON instead of the text summary
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn request(&self) -> BirthRequest {
        let mut request: BirthRequest = BirthRequest::new(
            self.gender,
            self.calendar,
            self.date,
            self.time,
            &self.birth_city,
        )
        .with_leap_month(self.leap_month);

        if let Some(name) = &self.name {
            request = request.with_name(name);
        }
        if let Some(city) = &self.current_city {
            request = request.with_current_city(city);
        }
        request
    }

    fn config(&self) -> ChartConfig {
        ChartConfig {
            luck_pillar_count: self.luck_pillars,
            ..ChartConfig::default()
        }
    }
}

/// JSON output: the chart plus its flat profile record.
#[derive(Debug, Serialize)]
struct ChartOutput<'a> {
    chart: &'a BaziChart,
    profile: ProfileRecord,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let regions: RegionIndex = load_regions(args.regions.as_deref())?;
    let engine: ChartEngine =
        ChartEngine::with_config(Arc::new(regions), Arc::new(Almanac::new()), args.config());

    let chart: BaziChart = engine
        .calculate(&args.request())
        .wrap_err("Failed to calculate chart")?;

    if args.json {
        let output: ChartOutput<'_> = ChartOutput {
            chart: &chart,
            profile: chart.profile_record(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", chart.summary);
        for luck in &chart.da_yun.luck_pillars {
            println!("  {}岁 {}", luck.start_age, luck.pillar);
        }
    }

    Ok(())
}

fn load_regions(path: Option<&Path>) -> Result<RegionIndex> {
    let Some(path) = path else {
        warn!("No region file given; every city resolves to the reference meridian");
        return Ok(RegionIndex::from_nodes(Vec::new()));
    };

    let file: File =
        File::open(path).wrap_err_with(|| format!("Failed to open {}", path.display()))?;
    let regions: RegionIndex = RegionIndex::from_reader(BufReader::new(file))
        .wrap_err_with(|| format!("Failed to load regions from {}", path.display()))?;
    info!(path = %path.display(), regions = regions.len(), "Loaded regions");
    Ok(regions)
}

fn parse_date(value: &str) -> Result<(i32, u8, u8), String> {
    let parts: Vec<&str> = value.trim().split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(format!("expected YYYY-MM-DD, got '{value}'"));
    };
    let invalid = |e: std::num::ParseIntError| format!("invalid date '{value}': {e}");
    Ok((
        year.parse().map_err(invalid)?,
        month.parse().map_err(invalid)?,
        day.parse().map_err(invalid)?,
    ))
}

fn parse_time(value: &str) -> Result<(u8, u8), String> {
    let Some((hour, minute)) = value.trim().split_once(':') else {
        return Err(format!("expected HH:MM, got '{value}'"));
    };
    let invalid = |e: std::num::ParseIntError| format!("invalid time '{value}': {e}");
    Ok((hour.parse().map_err(invalid)?, minute.parse().map_err(invalid)?))
}
