// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Orders, checkout payloads, and the order lifecycle.
//!
//! ## Lifecycle
//!
//! Immediate orders start as `Accepted` and advance on elapsed time since
//! they were placed:
//!
//! - `Accepted` → `Preparing` after 1 minute
//! - `Preparing` → `Ready for Pickup` after 3 minutes
//! - `Ready for Pickup` → `Out for Delivery` after 5 minutes
//!
//! Scheduled orders start as `Scheduled` and are not advanced by time.

use crate::cart::{Cart, CartLine};
use crate::error::DomainError;
use crate::pricing::order_total;
use crate::time_of_day::TimeOfDay;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Duration, PrimitiveDateTime};

/// Elapsed time after which an accepted order is being prepared.
pub const PREPARING_AFTER: Duration = Duration::minutes(1);
/// Elapsed time after which a prepared order is ready for pickup.
pub const READY_AFTER: Duration = Duration::minutes(3);
/// Elapsed time after which a ready order is out for delivery.
pub const OUT_FOR_DELIVERY_AFTER: Duration = Duration::minutes(5);
/// Orders can be cancelled only within this long of being placed.
pub const CANCELLATION_WINDOW: Duration = Duration::minutes(5);

/// Where an order is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Placed for a future date.
    Scheduled,
    /// Accepted by the cafe.
    Accepted,
    /// Being prepared.
    Preparing,
    /// Ready to collect.
    #[serde(rename = "Ready for Pickup")]
    ReadyForPickup,
    /// On its way.
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    /// Handed over.
    Delivered,
    /// Cancelled by the user.
    Cancelled,
    /// Refused by the cafe.
    Rejected,
}

impl OrderStatus {
    /// Returns the display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Accepted => "Accepted",
            Self::Preparing => "Preparing",
            Self::ReadyForPickup => "Ready for Pickup",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Rejected => "Rejected",
        }
    }

    /// Returns the tab this status is listed under.
    #[must_use]
    pub const fn tab(&self) -> OrderTab {
        match self {
            Self::Scheduled => OrderTab::Scheduled,
            Self::Accepted | Self::Preparing | Self::ReadyForPickup | Self::OutForDelivery => {
                OrderTab::Ongoing
            }
            Self::Delivered | Self::Cancelled | Self::Rejected => OrderTab::Past,
        }
    }

    /// Returns whether a user may still cancel an order in this status.
    #[must_use]
    pub const fn allows_cancellation(&self) -> bool {
        matches!(self, Self::Scheduled | Self::Accepted | Self::Preparing)
    }

    /// Returns the next status once `elapsed` has passed since placement.
    ///
    /// Returns `None` when no time-driven step applies.
    #[must_use]
    pub fn next_after(&self, elapsed: Duration) -> Option<Self> {
        match self {
            Self::Accepted if elapsed > PREPARING_AFTER => Some(Self::Preparing),
            Self::Preparing if elapsed > READY_AFTER => Some(Self::ReadyForPickup),
            Self::ReadyForPickup if elapsed > OUT_FOR_DELIVERY_AFTER => Some(Self::OutForDelivery),
            _ => None,
        }
    }

    /// Returns the furthest status reachable once `elapsed` has passed.
    #[must_use]
    pub fn settled_after(&self, elapsed: Duration) -> Self {
        let mut status: Self = *self;
        while let Some(next) = status.next_after(elapsed) {
            status = next;
        }
        status
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Scheduled" => Ok(Self::Scheduled),
            "Accepted" => Ok(Self::Accepted),
            "Preparing" => Ok(Self::Preparing),
            "Ready for Pickup" => Ok(Self::ReadyForPickup),
            "Out for Delivery" => Ok(Self::OutForDelivery),
            "Delivered" => Ok(Self::Delivered),
            "Cancelled" => Ok(Self::Cancelled),
            "Rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidOrderStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Order list tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderTab {
    /// Future orders.
    Scheduled,
    /// Orders in progress.
    Ongoing,
    /// Finished orders.
    Past,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier.
    pub id: String,
    /// Cafe fulfilling the order.
    pub cafe: String,
    /// When the order is due.
    pub date: PrimitiveDateTime,
    /// Ordered lines.
    pub items: Vec<CartLine>,
    /// Amount charged for this order.
    pub total: Decimal,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// When the order was placed.
    pub placed_at: PrimitiveDateTime,
}

impl Order {
    /// Checks whether the user may cancel this order at `now`.
    #[must_use]
    pub fn is_cancellable(&self, now: PrimitiveDateTime) -> bool {
        self.status.allows_cancellation() && now - self.placed_at < CANCELLATION_WINDOW
    }

    /// Total number of units ordered.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Returns the last five characters of the id, as shown in headings.
    #[must_use]
    pub fn short_id(&self) -> &str {
        let start: usize = self
            .id
            .char_indices()
            .rev()
            .nth(4)
            .map_or(0, |(index, _)| index);
        &self.id[start..]
    }
}

/// One concrete scheduled order instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduledOccurrence {
    /// Milliseconds since the Unix epoch of `date` at midnight UTC.
    pub id: i64,
    /// The day the order is due.
    pub date: Date,
    /// The time of day the order is due.
    pub time: TimeOfDay,
}

impl ScheduledOccurrence {
    /// Creates an occurrence for `date` at `time`.
    #[must_use]
    pub const fn new(date: Date, time: TimeOfDay) -> Self {
        Self {
            id: date.midnight().assume_utc().unix_timestamp() * 1000,
            date,
            time,
        }
    }

    /// Returns the date and time the order is due.
    #[must_use]
    pub fn due(&self) -> PrimitiveDateTime {
        PrimitiveDateTime::new(self.date, self.time.to_time())
    }
}

/// Checkout payload handed to payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    /// Ordered lines.
    pub items: Vec<CartLine>,
    /// Sum of line totals for one order.
    pub subtotal: Decimal,
    /// Fee charged per order.
    pub convenience_fee: Decimal,
    /// Amount to charge.
    pub total: Decimal,
    /// Scheduled occurrences, when the checkout is scheduled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedules: Option<Vec<ScheduledOccurrence>>,
    /// Chosen payment method, filled in by payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

impl OrderDetails {
    /// Creates an unscheduled payload from a cart.
    #[must_use]
    pub fn from_cart(cart: &Cart, convenience_fee: Decimal) -> Self {
        let subtotal: Decimal = cart.subtotal();
        Self {
            items: cart.lines().to_vec(),
            subtotal,
            convenience_fee,
            total: order_total(subtotal, convenience_fee),
            schedules: None,
            payment_method: None,
        }
    }

    /// Number of orders this payload will create.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.schedules.as_ref().map_or(1, Vec::len)
    }
}
