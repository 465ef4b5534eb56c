// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DaYunDirection, DaYunPeriod, Gender, LuckPillar, SolarTerm, StemBranch, TermBoundary,
    da_yun_direction, luck_pillars, qi_yun_years,
};

fn create_test_boundary(days: u32) -> TermBoundary {
    TermBoundary::new(SolarTerm::new(17).unwrap(), days)
}

#[test]
fn test_direction_rules() {
    assert_eq!(da_yun_direction(0, Gender::Male), DaYunDirection::Forward);
    assert_eq!(da_yun_direction(0, Gender::Female), DaYunDirection::Backward);
    assert_eq!(da_yun_direction(1, Gender::Male), DaYunDirection::Backward);
    assert_eq!(da_yun_direction(1, Gender::Female), DaYunDirection::Forward);
}

#[test]
fn test_direction_labels() {
    assert_eq!(DaYunDirection::Forward.chinese(), "顺排");
    assert_eq!(DaYunDirection::Backward.chinese(), "逆排");
    assert_eq!(DaYunDirection::Backward.to_string(), "backward");
}

#[test]
fn test_ten_days_start_arithmetic() {
    let period: DaYunPeriod = DaYunPeriod::new(
        0,
        Gender::Male,
        create_test_boundary(10),
        StemBranch::from_index(0),
        8,
    );

    assert!((period.qi_yun_years() - 10.0 / 3.0).abs() < 1e-12);
    assert_eq!(period.start_years, 3);
    assert_eq!(period.start_months, 4);
    assert_eq!(period.start_age, 4);
    assert_eq!(period.days_to_term(), 10);
}

#[test]
fn test_start_arithmetic_for_each_remainder() {
    let cases: [(u32, u32, u32, u32); 5] = [
        (0, 0, 0, 0),
        (1, 0, 4, 1),
        (2, 0, 8, 1),
        (12, 4, 0, 4),
        (29, 9, 8, 10),
    ];

    for (days, years, months, age) in cases {
        let period: DaYunPeriod = DaYunPeriod::new(
            9,
            Gender::Male,
            create_test_boundary(days),
            StemBranch::from_index(0),
            0,
        );
        assert_eq!(period.start_years, years, "days {days}");
        assert_eq!(period.start_months, months, "days {days}");
        assert_eq!(period.start_age, age, "days {days}");
    }
}

#[test]
fn test_qi_yun_years_fraction() {
    assert!((qi_yun_years(12) - 4.0).abs() < f64::EPSILON);
    assert!((qi_yun_years(1) - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_labels_for_yin_male() {
    let period: DaYunPeriod = DaYunPeriod::new(
        9,
        Gender::Male,
        create_test_boundary(12),
        StemBranch::new(7, 9).unwrap(),
        8,
    );

    assert_eq!(period.direction, DaYunDirection::Backward);
    assert_eq!(period.label(), "yin male");
    assert_eq!(period.chinese_label(), "阴男");
}

#[test]
fn test_labels_for_yang_female() {
    let period: DaYunPeriod = DaYunPeriod::new(
        6,
        Gender::Female,
        create_test_boundary(3),
        StemBranch::from_index(0),
        0,
    );

    assert_eq!(period.direction, DaYunDirection::Backward);
    assert_eq!(period.chinese_label(), "阳女");
    assert!(period.luck_pillars.is_empty());
}

#[test]
fn test_luck_pillars_step_backward_from_month_pillar() {
    // 辛酉 month, backward: 庚申, 己未, 戊午 ...
    let pillars: Vec<LuckPillar> =
        luck_pillars(StemBranch::new(7, 9).unwrap(), DaYunDirection::Backward, 4, 8);

    assert_eq!(pillars.len(), 8);
    assert_eq!(pillars[0].pillar.to_string(), "庚申");
    assert_eq!(pillars[0].start_age, 4);
    assert_eq!(pillars[1].pillar.to_string(), "己未");
    assert_eq!(pillars[1].start_age, 14);
    assert_eq!(pillars[7].pillar.to_string(), "癸丑");
    assert_eq!(pillars[7].start_age, 74);
}

#[test]
fn test_luck_pillars_step_forward_across_cycle_end() {
    let pillars: Vec<LuckPillar> =
        luck_pillars(StemBranch::from_index(58), DaYunDirection::Forward, 2, 3);

    let names: Vec<String> = pillars.iter().map(|p| p.pillar.to_string()).collect();
    assert_eq!(names, vec!["癸亥", "甲子", "乙丑"]);
}
