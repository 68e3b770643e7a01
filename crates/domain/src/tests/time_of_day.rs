// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Meridiem, TimeOfDay, TimeOfDayError};
use time::macros::time;

#[test]
fn test_default_is_eight_am() {
    assert_eq!(TimeOfDay::default().to_string(), "08:00 AM");
}

#[test]
fn test_parse_afternoon_converts_to_24_hour() {
    let parsed: TimeOfDay = "02:15 PM".parse().unwrap();

    assert_eq!(parsed.hour(), 2);
    assert_eq!(parsed.minute(), 15);
    assert_eq!(parsed.meridiem(), Meridiem::Pm);
    assert_eq!(parsed.to_time(), time!(14:15));
}

#[test]
fn test_midnight_and_noon_conversions() {
    let midnight: TimeOfDay = "12:00 AM".parse().unwrap();
    let noon: TimeOfDay = "12:00 PM".parse().unwrap();
    let morning: TimeOfDay = "11:59 AM".parse().unwrap();

    assert_eq!(midnight.hour24(), 0);
    assert_eq!(noon.hour24(), 12);
    assert_eq!(morning.to_time(), time!(11:59));
}

#[test]
fn test_from_time_uses_twelve_for_hour_zero() {
    assert_eq!(TimeOfDay::from_time(time!(0:05)).to_string(), "12:05 AM");
    assert_eq!(TimeOfDay::from_time(time!(12:30)).to_string(), "12:30 PM");
    assert_eq!(TimeOfDay::from_time(time!(23:45:59)).to_string(), "11:45 PM");
}

#[test]
fn test_display_round_trips_through_parse() {
    let original: TimeOfDay = TimeOfDay::new(9, 5, Meridiem::Am).unwrap();
    let reparsed: TimeOfDay = original.to_string().parse().unwrap();

    assert_eq!(original.to_string(), "09:05 AM");
    assert_eq!(reparsed, original);
}

#[test]
fn test_out_of_range_components_are_rejected() {
    assert_eq!(
        TimeOfDay::new(0, 0, Meridiem::Am),
        Err(TimeOfDayError::HourOutOfRange(0))
    );
    assert_eq!(
        TimeOfDay::new(13, 0, Meridiem::Pm),
        Err(TimeOfDayError::HourOutOfRange(13))
    );
    assert_eq!(
        TimeOfDay::new(10, 60, Meridiem::Pm),
        Err(TimeOfDayError::MinuteOutOfRange(60))
    );
}

#[test]
fn test_malformed_strings_are_rejected() {
    for input in ["2:15 PM", "02:15PM", "02-15 PM", "", "14:15", "02:15 pm"] {
        let result: Result<TimeOfDay, DomainError> = input.parse();
        assert!(
            matches!(result, Err(DomainError::InvalidTimeOfDay { .. })),
            "{input:?} should be rejected"
        );
    }
}

#[test]
fn test_parse_error_reports_reason() {
    let err: DomainError = "13:00 PM".parse::<TimeOfDay>().unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid time of day '13:00 PM': hour must be between 01 and 12 (found 13)"
    );
}
