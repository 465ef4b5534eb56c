// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bazi_domain::{BirthRequest, CalendarKind, Gender, RegionIndex};
use time::{Date, Duration};

pub fn create_test_regions() -> RegionIndex {
    RegionIndex::from_json_str(
        r#"[
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
        ]"#,
    )
    .unwrap()
}

pub fn create_golden_request() -> BirthRequest {
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

/// Every day from `first` to `last`, inclusive.
pub fn days_between(first: Date, last: Date) -> impl Iterator<Item = Date> {
    let count: i64 = (last - first).whole_days();
    (0..=count).map(move |offset| first + Duration::days(offset))
}
