// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and rules for scheduling cafeteria orders.
//!
//! Everything here is pure: "now" is always supplied through a [`Clock`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod calendar;
mod cart;
mod clock;
mod error;
mod order;
mod pricing;
mod recurrence;
mod selection;
mod time_of_day;

#[cfg(test)]
mod tests;

pub use calendar::{
    CalendarCell, CalendarMonth, DAYS_PER_WEEK, WEEKDAY_HEADINGS, build_calendar_grid,
    days_in_month,
};
pub use cart::{Cart, CartLine, Category, LineRequest, MenuItem, build_cart};
pub use clock::{Clock, FixedClock, SystemClock, ZonedClock};
pub use error::DomainError;
pub use order::{
    CANCELLATION_WINDOW, OUT_FOR_DELIVERY_AFTER, Order, OrderDetails, OrderStatus, OrderTab,
    PREPARING_AFTER, READY_AFTER, ScheduledOccurrence,
};
pub use pricing::{CONVENIENCE_FEE, checkout_total, order_total};
#[cfg(feature = "monthly-repeat")]
pub use recurrence::{MONTHLY_EXTRA_MONTHS, nth_weekday_of_month};
pub use recurrence::{Expansion, ExpansionOutcome, RepeatMode, WEEKLY_EXTRA_WEEKS, expand};
pub use selection::{AnchorSet, summarize_dates};
pub use time_of_day::{Meridiem, TimeOfDay, TimeOfDayError};
