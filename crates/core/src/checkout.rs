// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Turning a session into something payable.
//!
//! Both operations borrow the session immutably; a refused checkout leaves
//! everything as it was.

use crate::error::CoreError;
use crate::state::{SchedulingSession, SessionMode};
use cafe_order_domain::{DomainError, Order, OrderDetails, ScheduledOccurrence, checkout_total};
use rust_decimal::Decimal;
use time::{Date, PrimitiveDateTime};
use tracing::{info, warn};

/// Prices the scheduled dates of a create session.
///
/// Returns a copy of `details` with one occurrence per scheduled date at the
/// session's time and `total = (subtotal + fee) × occurrences`.
///
/// # Errors
///
/// Returns an error if:
/// - The session is in edit mode
/// - No date is scheduled
pub fn checkout(
    session: &SchedulingSession,
    details: &OrderDetails,
) -> Result<OrderDetails, CoreError> {
    if session.is_edit() {
        warn!("Checkout refused in edit mode");
        return Err(CoreError::ModeMismatch {
            operation: "check out",
            mode: session.mode.name(),
        });
    }
    if session.scheduled.is_empty() {
        warn!("Checkout refused without any scheduled date");
        return Err(DomainError::NoDatesSelected.into());
    }

    let schedules: Vec<ScheduledOccurrence> = session.occurrences();
    let total: Decimal = checkout_total(details.subtotal, details.convenience_fee, schedules.len());

    info!(
        occurrences = schedules.len(),
        time = %session.time,
        %total,
        "Scheduled checkout priced"
    );

    Ok(OrderDetails {
        schedules: Some(schedules),
        total,
        ..details.clone()
    })
}

/// Applies the selected date and time to the order being edited.
///
/// Only the order's date changes; id, items, total, cafe, status and
/// placement time are kept.
///
/// # Errors
///
/// Returns an error if:
/// - The session is in create mode
/// - The selection does not hold exactly one date
pub fn update_order(session: &SchedulingSession) -> Result<Order, CoreError> {
    let SessionMode::Edit(order) = &session.mode else {
        warn!("Order update refused in create mode");
        return Err(CoreError::ModeMismatch {
            operation: "update an order",
            mode: session.mode.name(),
        });
    };

    let date: Date = match session.scheduled.as_slice() {
        [date] => *date,
        selected => {
            warn!(selected = selected.len(), "Order update needs exactly one date");
            return Err(DomainError::EditModeRequiresSingleDate {
                selected: selected.len(),
            }
            .into());
        }
    };

    let due: PrimitiveDateTime = PrimitiveDateTime::new(date, session.time.to_time());
    info!(order_id = %order.id, from = %order.date, to = %due, "Order rescheduled");

    Ok(Order {
        date: due,
        ..order.clone()
    })
}
