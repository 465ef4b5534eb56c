// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BirthRequest, CalendarKind, Gender, RegionIndex};

/// A small region tree in which both a province and a city contain "深圳"-like
/// names, so lookups exercise the city-before-province preference.
pub const TEST_REGIONS_JSON: &str = r#"{
    "districts": [
        {
            "name": "中华人民共和国",
            "level": "country",
            "center": { "longitude": 116.3683244, "latitude": 39.915085 },
            "districts": [
                {
                    "name": "广东省",
                    "level": "province",
                    "center": { "longitude": 113.26641, "latitude": 23.132324 },
                    "districts": [
                        {
                            "name": "广州市",
                            "level": "city",
                            "center": { "longitude": 113.264499, "latitude": 23.130061 },
                            "districts": []
                        },
                        {
                            "name": "深圳市",
                            "level": "city",
                            "center": { "longitude": "114.057868", "latitude": "22.543099" },
                            "districts": [
                                {
                                    "name": "南山区",
                                    "level": "district",
                                    "center": { "longitude": 113.930413, "latitude": 22.533287 }
                                }
                            ]
                        }
                    ]
                },
                {
                    "name": "深圳省",
                    "level": "province",
                    "center": { "longitude": 100.0, "latitude": 20.0 },
                    "districts": []
                },
                {
                    "name": "新疆维吾尔自治区",
                    "level": "province",
                    "center": { "longitude": 87.627704, "latitude": 43.793026 },
                    "districts": [
                        {
                            "name": "南山牧场",
                            "level": "district",
                            "center": { "longitude": 87.3, "latitude": 43.5 }
                        }
                    ]
                }
            ]
        }
    ]
}"#;

pub fn create_test_region_index() -> RegionIndex {
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
}
