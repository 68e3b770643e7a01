// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_clock, create_test_details, create_test_order, create_test_session,
};
use crate::{Command, CoreError, SchedulingSession, apply_all, checkout};
use cafe_order_domain::{DomainError, OrderDetails, RepeatMode, ScheduledOccurrence, TimeOfDay};
use rust_decimal::Decimal;
use time::macros::{date, datetime};

fn weekly_session() -> SchedulingSession {
    let (session, _notices) = apply_all(
        &create_test_session(),
        [
            Command::ToggleDay { day: 25 },
            Command::SetRepeat {
                mode: RepeatMode::Weekly,
            },
            Command::SetTime {
                time: "12:30 PM".parse().unwrap(),
            },
        ],
        &create_test_clock(),
    )
    .unwrap();
    session
}

#[test]
fn test_checkout_prices_every_occurrence() {
    let details: OrderDetails = create_test_details();

    let priced: OrderDetails = checkout(&weekly_session(), &details).unwrap();

    assert_eq!(priced.total, Decimal::new(42400, 2));
    assert_eq!(priced.subtotal, details.subtotal);
    assert_eq!(priced.convenience_fee, details.convenience_fee);
    assert_eq!(priced.items, details.items);
    assert_eq!(priced.order_count(), 4);
}

#[test]
fn test_checkout_builds_one_occurrence_per_date() {
    let priced: OrderDetails = checkout(&weekly_session(), &create_test_details()).unwrap();
    let schedules: Vec<ScheduledOccurrence> = priced.schedules.unwrap();
    let time: TimeOfDay = "12:30 PM".parse().unwrap();

    assert_eq!(schedules.len(), 4);
    assert!(schedules.iter().all(|occurrence| occurrence.time == time));
    assert_eq!(schedules[0].date, date!(2024 - 06 - 25));
    assert_eq!(schedules[0].id, 1_719_273_600_000);
    assert_eq!(schedules[3].due(), datetime!(2024-07-16 12:30));
}

#[test]
fn test_checkout_without_dates_fails_and_leaves_session_unchanged() {
    let session: SchedulingSession = create_test_session();
    let before: SchedulingSession = session.clone();
    let details: OrderDetails = create_test_details();

    let result: Result<OrderDetails, CoreError> = checkout(&session, &details);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::NoDatesSelected))
    );
    assert_eq!(session, before);
    assert!(details.schedules.is_none());
}

#[test]
fn test_checkout_after_repeat_without_anchor_fails() {
    let (session, _notices) = apply_all(
        &create_test_session(),
        [Command::SetRepeat {
            mode: RepeatMode::Weekly,
        }],
        &create_test_clock(),
    )
    .unwrap();

    let result: Result<OrderDetails, CoreError> = checkout(&session, &create_test_details());

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::NoDatesSelected))
    );
}

#[test]
fn test_checkout_is_refused_in_edit_mode() {
    let session: SchedulingSession = SchedulingSession::edit(create_test_order());

    let result: Result<OrderDetails, CoreError> = checkout(&session, &create_test_details());

    assert_eq!(
        result,
        Err(CoreError::ModeMismatch {
            operation: "check out",
            mode: "edit",
        })
    );
}

#[test]
fn test_mode_mismatch_message() {
    let error: CoreError = CoreError::ModeMismatch {
        operation: "check out",
        mode: "edit",
    };

    assert_eq!(
        error.to_string(),
        "Cannot check out while the session is in edit mode"
    );
}
