// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Chinese text rendering of a chart.

use crate::chart::BaziChart;
use bazi_domain::{BirthRequest, CalendarKind, DaYunPeriod, SolarInstant, SolarTermWindow};
use serde::{Deserialize, Serialize};
use time::Date;

/// The flat text record kept with a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// The four pillars, space separated.
    pub bazi: String,
    /// The solar term description.
    pub jieqi_info: String,
    /// The luck cycle description.
    pub dayun_info: String,
    /// The full text summary.
    pub formatted_output: String,
}

/// Describes the terms around the birth day.
///
/// e.g. `生于白露节气后12天，秋分节气前4天`
#[must_use]
pub fn format_term_info(window: &SolarTermWindow) -> String {
    format!(
        "生于{}节气后{}天，{}节气前{}天",
        window.previous.term, window.previous.days, window.next.term, window.next.days
    )
}

/// Describes the luck cycle.
///
/// e.g. `阴男，逆排，起运时间4年0月，4岁起运`
#[must_use]
pub fn format_da_yun_info(period: &DaYunPeriod) -> String {
    format!(
        "{}，{}，起运时间{}年{}月，{}岁起运",
        period.chinese_label(),
        period.direction.chinese(),
        period.start_years,
        period.start_months,
        period.start_age
    )
}

/// Renders degrees with at least one decimal place, e.g. `120.0` or `114.057868`.
#[must_use]
pub fn format_degrees(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn clock(instant: &SolarInstant) -> String {
    format!("{:02}:{:02}", instant.hour(), instant.minute())
}

fn solar_line(instant: &SolarInstant) -> String {
    let date: Date = instant.date();
    format!(
        "  公历：{}年{}月{}日{}",
        date.year(),
        u8::from(date.month()),
        date.day(),
        clock(instant)
    )
}

fn lunar_line(chart: &BaziChart) -> String {
    let leap: &str = if chart.lunar_date.is_leap_month {
        "(闰月)"
    } else {
        "(非闰月)"
    };
    format!(
        "  农历：{}年{}月{}日{} {leap}",
        chart.lunar_date.lunar_year,
        chart.lunar_date.lunar_month,
        chart.lunar_date.lunar_day,
        clock(&chart.solar_instant)
    )
}

/// Renders the full text summary of a chart.
///
/// Times are true solar time. The date line of the calendar the request was
/// given in comes first.
#[must_use]
pub fn format_summary(chart: &BaziChart) -> String {
    let request: &BirthRequest = &chart.request;
    let mut lines: Vec<String> = Vec::new();

    if let Some(name) = request.display_name() {
        lines.push(format!("姓名：{name}"));
    }
    lines.push(format!(
        "性别：{} ({})",
        request.gender.chinese(),
        request.gender.chart_designation()
    ));
    lines.push(String::from("出生时间："));

    match request.calendar_kind {
        CalendarKind::Solar => {
            lines.push(solar_line(&chart.solar_instant));
            lines.push(lunar_line(chart));
        }
        CalendarKind::Lunar => {
            lines.push(lunar_line(chart));
            lines.push(solar_line(&chart.solar_instant));
        }
    }

    lines.push(format!(
        "出生城市：{}({}°E)",
        request.birth_city,
        format_degrees(chart.birth_longitude.longitude)
    ));
    if let Some(city) = request
        .current_city
        .as_deref()
        .filter(|city| !city.trim().is_empty())
    {
        lines.push(format!("现居城市：{city}"));
    }
    lines.push(format!("八字信息：{}", chart.pillars));
    lines.push(format!("节气信息：{}", format_term_info(&chart.term_window)));
    lines.push(format!("大运信息：{}", format_da_yun_info(&chart.da_yun)));

    let mut summary: String = lines.join("\n");
    summary.push('\n');
    summary
}
