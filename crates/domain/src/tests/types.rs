// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_request;
use crate::{BirthRequest, CalendarKind, DomainError, Gender, Polarity};
use std::str::FromStr;

#[test]
fn test_gender_parses_chinese_and_english_labels() {
    assert_eq!(Gender::from_str("男").unwrap(), Gender::Male);
    assert_eq!(Gender::from_str("male").unwrap(), Gender::Male);
    assert_eq!(Gender::from_str(" M ").unwrap(), Gender::Male);
    assert_eq!(Gender::from_str("女").unwrap(), Gender::Female);
    assert_eq!(Gender::from_str("Female").unwrap(), Gender::Female);
}

#[test]
fn test_gender_rejects_unknown_label() {
    let result: Result<Gender, DomainError> = Gender::from_str("other");
    assert_eq!(result, Err(DomainError::InvalidGender(String::from("other"))));
}

#[test]
fn test_gender_labels() {
    assert_eq!(Gender::Male.chinese(), "男");
    assert_eq!(Gender::Female.chart_designation(), "坤造");
    assert_eq!(Gender::Male.to_string(), "male");
}

#[test]
fn test_calendar_kind_parses_labels() {
    assert_eq!(CalendarKind::from_str("公历").unwrap(), CalendarKind::Solar);
    assert_eq!(CalendarKind::from_str("solar").unwrap(), CalendarKind::Solar);
    assert_eq!(CalendarKind::from_str("农历").unwrap(), CalendarKind::Lunar);
    assert_eq!(CalendarKind::from_str("Lunar").unwrap(), CalendarKind::Lunar);
    assert!(matches!(
        CalendarKind::from_str("julian"),
        Err(DomainError::InvalidCalendarKind(_))
    ));
}

#[test]
fn test_calendar_kind_defaults_to_solar() {
    assert_eq!(CalendarKind::default(), CalendarKind::Solar);
}

#[test]
fn test_polarity_labels() {
    assert_eq!(Polarity::Yang.as_str(), "yang");
    assert_eq!(Polarity::Yin.chinese(), "阴");
}

#[test]
fn test_birth_request_builders() {
    let request: BirthRequest = create_test_request()
        .with_current_city("北京")
        .with_leap_month(false);

    assert_eq!(request.display_name(), Some("张三"));
    assert_eq!(request.current_city.as_deref(), Some("北京"));
    assert_eq!(request.birth_city, "深圳");
    assert!(!request.is_leap_month);
}

#[test]
fn test_birth_request_blank_name_is_not_displayed() {
    let request: BirthRequest = create_test_request().with_name("   ");
    assert_eq!(request.display_name(), None);
}

#[test]
fn test_birth_request_deserializes_without_leap_flag() {
    let json: &str = r#"{
        "name": null,
        "gender": "Female",
        "calendar_kind": "Lunar",
        "year": 1993,
        "month": 8,
        "day": 4,
        "hour": 5,
        "minute": 45,
        "birth_city": "深圳",
        "current_city": null
    }"#;

    let request: BirthRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.gender, Gender::Female);
    assert_eq!(request.calendar_kind, CalendarKind::Lunar);
    assert!(!request.is_leap_month);
}
