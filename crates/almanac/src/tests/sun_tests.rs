// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::days_between;
use crate::{MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR, apparent_longitude, month_sector, term_on};
use bazi_domain::SolarTerm;
use time::macros::date;
use time::{Date, Month};

#[test]
fn test_apparent_longitude_at_j2000() {
    // Meeus: about 280.37 degrees at 2000-01-01 12:00 TT.
    let longitude: f64 = apparent_longitude(2_451_545.0);
    assert!((longitude - 280.37).abs() < 0.05, "{longitude}");
}

#[test]
fn test_apparent_longitude_stays_in_range() {
    for step in 0..2_000 {
        let jd: f64 = 2_400_000.0 + f64::from(step) * 37.3;
        let longitude: f64 = apparent_longitude(jd);
        assert!((0.0..360.0).contains(&longitude), "{jd}: {longitude}");
    }
}

#[test]
fn test_known_term_days() {
    let cases: [(Date, &str); 8] = [
        (date!(2024 - 02 - 04), "立春"),
        (date!(2024 - 04 - 04), "清明"),
        (date!(2024 - 12 - 21), "冬至"),
        (date!(2023 - 03 - 06), "惊蛰"),
        (date!(1993 - 09 - 07), "白露"),
        (date!(1993 - 09 - 23), "秋分"),
        (date!(2000 - 06 - 21), "夏至"),
        (date!(1984 - 02 - 04), "立春"),
    ];

    for (day, name) in cases {
        assert_eq!(term_on(day).map(|term| term.name()), Some(name), "{day}");
    }
}

#[test]
fn test_days_between_terms_carry_none() {
    assert_eq!(term_on(date!(1993 - 09 - 19)), None);
    assert_eq!(term_on(date!(2024 - 02 - 03)), None);
    assert_eq!(term_on(date!(2024 - 02 - 05)), None);
}

#[test]
fn test_each_year_has_twenty_four_terms_in_order() {
    for year in [1900, 1950, 1993, 2024, 2076, 2100] {
        let terms: Vec<SolarTerm> = days_between(
            Date::from_calendar_date(year, Month::January, 1).unwrap(),
            Date::from_calendar_date(year, Month::December, 31).unwrap(),
        )
        .filter_map(term_on)
        .collect();

        assert_eq!(terms.len(), 24, "year {year}");
        // January opens with 小寒 and the year closes with 冬至.
        assert_eq!(terms[0].name(), "小寒", "year {year}");
        assert_eq!(terms[23].name(), "冬至", "year {year}");
        for pair in terms.windows(2) {
            assert_eq!((pair[0].id() + 1) % 24, pair[1].id(), "year {year}");
        }
    }
}

#[test]
fn test_terms_are_never_more_than_thirty_days_apart() {
    let first: Date = Date::from_calendar_date(MIN_SUPPORTED_YEAR, Month::January, 1).unwrap();
    let last: Date = Date::from_calendar_date(MAX_SUPPORTED_YEAR, Month::December, 31).unwrap();

    let term_days: Vec<Date> = days_between(first, last)
        .filter(|day| term_on(*day).is_some())
        .collect();

    let widest: i64 = term_days
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).whole_days())
        .max()
        .unwrap();
    assert!(widest <= 16, "widest gap {widest}");
    assert!(widest <= 30);
}

#[test]
fn test_month_sector_changes_on_jie_day() {
    // 立春 2024-02-04 opens the 寅 month (sector 0).
    assert_eq!(month_sector(date!(2024 - 02 - 03)), 11);
    assert_eq!(month_sector(date!(2024 - 02 - 04)), 0);
    // 白露 1993-09-07 opens the 酉 month (sector 7).
    assert_eq!(month_sector(date!(1993 - 09 - 06)), 6);
    assert_eq!(month_sector(date!(1993 - 09 - 07)), 7);
}
