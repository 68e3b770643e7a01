// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_order, create_test_session, run};
use crate::{Command, CoreError, SchedulingSession, SessionMode, TransitionResult, update_order};
use cafe_order_domain::{AnchorSet, CalendarMonth, DomainError, Order, RepeatMode, TimeOfDay};
use time::macros::{date, datetime};

#[test]
fn test_edit_session_is_preseeded_from_order() {
    let order: Order = create_test_order();

    let session: SchedulingSession = SchedulingSession::edit(order.clone());

    assert!(session.is_edit());
    assert_eq!(session.mode(), &SessionMode::Edit(order));
    assert_eq!(session.scheduled(), &[date!(2024 - 06 - 20)]);
    assert_eq!(session.time().to_string(), "12:30 PM");
    assert_eq!(
        session.displayed_month(),
        CalendarMonth::new(2024, 6).unwrap()
    );
}

#[test]
fn test_edit_click_replaces_selection() {
    let session: SchedulingSession = SchedulingSession::edit(create_test_order());

    let result: TransitionResult = run(&session, Command::ToggleDay { day: 27 });

    assert_eq!(result.new_session.scheduled(), &[date!(2024 - 06 - 27)]);
}

#[test]
fn test_edit_click_on_past_date_is_noop() {
    let session: SchedulingSession = SchedulingSession::edit(create_test_order());

    let result: TransitionResult = run(&session, Command::ToggleDay { day: 3 });

    assert_eq!(result.new_session, session);
}

#[test]
fn test_edit_ignores_repeat_and_clear() {
    let session: SchedulingSession = SchedulingSession::edit(create_test_order());

    let repeated: TransitionResult = run(
        &session,
        Command::SetRepeat {
            mode: RepeatMode::Weekly,
        },
    );
    assert_eq!(repeated.new_session, session);
    assert_eq!(repeated.notice, None);

    let cleared: TransitionResult = run(&session, Command::ClearSelection);
    assert_eq!(cleared.new_session, session);
}

#[test]
fn test_update_order_applies_new_date_and_time_only() {
    let order: Order = create_test_order();
    let session: SchedulingSession = SchedulingSession::edit(order.clone());
    let picked: TransitionResult = run(&session, Command::ToggleDay { day: 27 });
    let timed: TransitionResult = run(
        &picked.new_session,
        Command::SetTime {
            time: "02:15 PM".parse().unwrap(),
        },
    );

    let updated: Order = update_order(&timed.new_session).unwrap();

    assert_eq!(updated.date, datetime!(2024-06-27 14:15:00));
    assert_eq!(updated.id, order.id);
    assert_eq!(updated.cafe, order.cafe);
    assert_eq!(updated.items, order.items);
    assert_eq!(updated.total, order.total);
    assert_eq!(updated.status, order.status);
    assert_eq!(updated.placed_at, order.placed_at);
}

#[test]
fn test_update_order_at_midnight_and_noon() {
    let session: SchedulingSession = SchedulingSession::edit(create_test_order());

    let midnight: TransitionResult = run(
        &session,
        Command::SetTime {
            time: "12:00 AM".parse::<TimeOfDay>().unwrap(),
        },
    );
    assert_eq!(
        update_order(&midnight.new_session).unwrap().date,
        datetime!(2024-06-20 0:00)
    );

    let noon: TransitionResult = run(
        &session,
        Command::SetTime {
            time: "12:00 PM".parse::<TimeOfDay>().unwrap(),
        },
    );
    assert_eq!(
        update_order(&noon.new_session).unwrap().date,
        datetime!(2024-06-20 12:00)
    );
}

#[test]
fn test_update_order_requires_exactly_one_date() {
    let mut session: SchedulingSession = SchedulingSession::edit(create_test_order());
    session.anchors = AnchorSet::new();
    session.scheduled = Vec::new();

    let result: Result<Order, CoreError> = update_order(&session);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::EditModeRequiresSingleDate { selected: 0 }
        ))
    );
}

#[test]
fn test_update_order_is_refused_in_create_mode() {
    let session: SchedulingSession = create_test_session();

    let result: Result<Order, CoreError> = update_order(&session);

    assert_eq!(
        result,
        Err(CoreError::ModeMismatch {
            operation: "update an order",
            mode: "create",
        })
    );
}

#[test]
fn test_edit_session_serializes_mode_with_order() {
    let session: SchedulingSession = SchedulingSession::edit(create_test_order());

    let json: serde_json::Value = serde_json::to_value(&session).unwrap();

    assert_eq!(json["mode"]["mode"], "edit");
    assert_eq!(json["mode"]["order"]["id"], "ORD-000042");
    assert_eq!(json["time"], "12:30 PM");
    assert_eq!(json["scheduled"][0], "2024-06-20");
}
