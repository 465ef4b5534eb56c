// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, FourPillars, Polarity, SolarTerm, StemBranch};

#[test]
fn test_stem_branch_rejects_mixed_parity() {
    assert_eq!(
        StemBranch::new(0, 1),
        Err(DomainError::InvalidStemBranch { stem: 0, branch: 1 })
    );
    assert!(StemBranch::new(10, 0).is_err());
    assert!(StemBranch::new(0, 12).is_err());
}

#[test]
fn test_stem_branch_index_round_trip() {
    for index in 0..60 {
        let pillar: StemBranch = StemBranch::from_index(index);
        assert_eq!(pillar.index(), index);
        assert_eq!(StemBranch::new(pillar.stem(), pillar.branch()), Ok(pillar));
    }
}

#[test]
fn test_stem_branch_names() {
    assert_eq!(StemBranch::from_index(0).to_string(), "甲子");
    assert_eq!(StemBranch::from_index(59).to_string(), "癸亥");
    let pillar: StemBranch = StemBranch::new(9, 9).unwrap();
    assert_eq!(pillar.to_string(), "癸酉");
    assert_eq!(pillar.zodiac(), "鸡");
    assert_eq!(pillar.polarity(), Polarity::Yin);
}

#[test]
fn test_stem_branch_offset_wraps() {
    let first: StemBranch = StemBranch::from_index(0);
    assert_eq!(first.offset(-1).to_string(), "癸亥");
    assert_eq!(first.offset(60), first);
    assert_eq!(first.offset(61).to_string(), "乙丑");
}

#[test]
fn test_four_pillars_display() {
    let pillars: FourPillars = FourPillars {
        year: StemBranch::new(9, 9).unwrap(),
        month: StemBranch::new(7, 9).unwrap(),
        day: StemBranch::new(9, 3).unwrap(),
        hour: StemBranch::new(1, 3).unwrap(),
    };
    assert_eq!(pillars.to_string(), "癸酉 辛酉 癸卯 乙卯");
    assert_eq!(pillars.as_array()[2].to_string(), "癸卯");
}

#[test]
fn test_solar_term_names_and_kinds() {
    let winter_solstice: SolarTerm = SolarTerm::new(0).unwrap();
    assert_eq!(winter_solstice.name(), "冬至");
    assert!(!winter_solstice.is_jie());

    let white_dew: SolarTerm = SolarTerm::new(17).unwrap();
    assert_eq!(white_dew.to_string(), "白露");
    assert!(white_dew.is_jie());

    assert_eq!(SolarTerm::new(24), Err(DomainError::InvalidSolarTerm(24)));
}
