// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{LunarDate, LunisolarOracle, OracleError};
use bazi_domain::{BirthRequest, CalendarKind, Gender, RegionIndex, SolarTerm, StemBranch};
use time::macros::date;
use time::{Date, Duration};

/// First day of the eighth lunar month of 1993.
const LUNAR_MONTH_ANCHOR: Date = date!(1993 - 09 - 16);

/// A calendar oracle scripted for 1993 around the golden birth date.
///
/// Day pillars are counted from the Julian day number, month pillars switch
/// at 白露 and 寒露, and lunar dates count 30-day months from the eighth
/// month. Only dates in 1993 are supported.
pub struct ScriptedOracle {
    terms: Vec<(Date, SolarTerm)>,
}

impl ScriptedOracle {
    pub fn new() -> Self {
        Self {
            terms: vec![
                (date!(1993 - 08 - 07), SolarTerm::new(15).unwrap()),
                (date!(1993 - 08 - 23), SolarTerm::new(16).unwrap()),
                (date!(1993 - 09 - 07), SolarTerm::new(17).unwrap()),
                (date!(1993 - 09 - 23), SolarTerm::new(18).unwrap()),
                (date!(1993 - 10 - 08), SolarTerm::new(19).unwrap()),
                (date!(1993 - 10 - 23), SolarTerm::new(20).unwrap()),
            ],
        }
    }

    /// An oracle whose calendar has no solar terms at all.
    pub fn without_terms() -> Self {
        Self { terms: Vec::new() }
    }

    fn month_pillar(date: Date) -> StemBranch {
        if date < date!(1993 - 09 - 07) {
            // 庚申
            StemBranch::from_index(56)
        } else if date < date!(1993 - 10 - 08) {
            // 辛酉
            StemBranch::from_index(57)
        } else {
            // 壬戌
            StemBranch::from_index(58)
        }
    }
}

impl LunisolarOracle for ScriptedOracle {
    fn convert_solar(&self, date: Date) -> Result<LunarDate, OracleError> {
        if date.year() != 1993 {
            return Err(OracleError::UnsupportedYear {
                year: date.year(),
                min: 1993,
                max: 1993,
            });
        }

        let offset: i64 = (date - LUNAR_MONTH_ANCHOR).whole_days();
        let day_index: i64 = (i64::from(date.to_julian_day()) + 49).rem_euclid(60);

        Ok(LunarDate {
            solar: date,
            lunar_year: 1993,
            lunar_month: u8::try_from(8 + offset.div_euclid(30)).unwrap(),
            lunar_day: u8::try_from(offset.rem_euclid(30) + 1).unwrap(),
            is_leap_month: false,
            year_pillar: StemBranch::from_index(9),
            month_pillar: Self::month_pillar(date),
            day_pillar: StemBranch::from_index(u8::try_from(day_index).unwrap()),
            solar_term: self
                .terms
                .iter()
                .find(|(term_date, _)| *term_date == date)
                .map(|(_, term)| *term),
        })
    }

    fn convert_lunar(
        &self,
        year: i32,
        month: u8,
        day: u8,
        is_leap_month: bool,
    ) -> Result<LunarDate, OracleError> {
        if year != 1993 {
            return Err(OracleError::UnsupportedYear {
                year,
                min: 1993,
                max: 1993,
            });
        }
        if is_leap_month {
            return Err(OracleError::NoSuchLeapMonth { year, month });
        }
        if month != 8 || day == 0 || day > 29 {
            return Err(OracleError::NoSuchLunarDate { year, month, day });
        }
        self.convert_solar(LUNAR_MONTH_ANCHOR + Duration::days(i64::from(day) - 1))
    }
}

pub const TEST_REGIONS_JSON: &str = r#"[
    {
        "name": "广东省",
        "level": "province",
        "center": { "longitude": 113.26641, "latitude": 23.132324 },
        "districts": [
            {
                "name": "深圳市",
                "level": "city",
                "center": { "longitude": 114.057868, "latitude": 22.543099 }
            },
            {
                "name": "惠州市",
                "level": "city",
                "center": { "longitude": 114.416196, "latitude": 23.111847 }
            }
        ]
    }
]"#;

pub fn create_test_regions() -> RegionIndex {
    RegionIndex::from_json_str(TEST_REGIONS_JSON).unwrap()
}

pub fn create_test_request() -> BirthRequest {
    BirthRequest::new(
        Gender::Male,
        CalendarKind::Solar,
        (1993, 9, 19),
        (5, 45),
        "深圳",
    )
    .with_name("张三")
    .with_current_city("惠州")
}

pub fn create_test_lunar_request() -> BirthRequest {
    BirthRequest::new(
        Gender::Male,
        CalendarKind::Lunar,
        (1993, 8, 4),
        (5, 45),
        "深圳",
    )
    .with_name("张三")
    .with_current_city("惠州")
}
