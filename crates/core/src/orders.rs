// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use cafe_order_domain::{
    DomainError, Order, OrderDetails, OrderStatus, OrderTab, ScheduledOccurrence, order_total,
};
use rust_decimal::Decimal;
use time::{Duration, PrimitiveDateTime};
use tracing::{debug, info, warn};

/// The in-memory list of placed orders.
///
/// Orders keep their placement order. Ids are sequential (`ORD-000001`, ...)
/// and never reused within a book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    orders: Vec<Order>,
    last_sequence: u32,
}

impl OrderBook {
    /// Creates an empty order book.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            orders: Vec::new(),
            last_sequence: 0,
        }
    }

    /// Places one `Scheduled` order per occurrence in `details`.
    ///
    /// Each order is charged `subtotal + fee` and is due at its occurrence's
    /// date and time.
    ///
    /// # Errors
    ///
    /// Returns an error if `details` carries no scheduled occurrence.
    pub fn place_scheduled(
        &mut self,
        details: &OrderDetails,
        cafe: &str,
        placed_at: PrimitiveDateTime,
    ) -> Result<Vec<Order>, CoreError> {
        let schedules: &[ScheduledOccurrence] = match details.schedules.as_deref() {
            Some(schedules) if !schedules.is_empty() => schedules,
            _ => {
                warn!("Refusing to place scheduled orders without occurrences");
                return Err(DomainError::NoDatesSelected.into());
            }
        };

        let total: Decimal = order_total(details.subtotal, details.convenience_fee);
        let placed: Vec<Order> = schedules
            .iter()
            .map(|occurrence| Order {
                id: self.next_id(),
                cafe: cafe.to_string(),
                date: occurrence.due(),
                items: details.items.clone(),
                total,
                status: OrderStatus::Scheduled,
                placed_at,
            })
            .collect();

        info!(count = placed.len(), cafe, "Scheduled orders placed");
        self.orders.extend(placed.iter().cloned());
        Ok(placed)
    }

    /// Places a single order for immediate preparation.
    ///
    /// The order starts as `Accepted` and is dated `placed_at`.
    pub fn place_now(
        &mut self,
        details: &OrderDetails,
        cafe: &str,
        placed_at: PrimitiveDateTime,
    ) -> Order {
        let order: Order = Order {
            id: self.next_id(),
            cafe: cafe.to_string(),
            date: placed_at,
            items: details.items.clone(),
            total: order_total(details.subtotal, details.convenience_fee),
            status: OrderStatus::Accepted,
            placed_at,
        };
        info!(order_id = %order.id, cafe, "Order placed");
        self.orders.push(order.clone());
        order
    }

    /// Swaps in an edited order with the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if no order has that id.
    pub fn replace(&mut self, order: Order) -> Result<(), CoreError> {
        let slot: &mut Order = self
            .orders
            .iter_mut()
            .find(|existing| existing.id == order.id)
            .ok_or_else(|| DomainError::OrderNotFound(order.id.clone()))?;
        debug!(order_id = %order.id, "Order replaced");
        *slot = order;
        Ok(())
    }

    /// Cancels an order.
    ///
    /// Only `Scheduled`, `Accepted` and `Preparing` orders placed less than
    /// five minutes before `now` can be cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No order has that id
    /// - The order's status or age no longer allows cancellation
    pub fn cancel(&mut self, id: &str, now: PrimitiveDateTime) -> Result<Order, CoreError> {
        let order: &mut Order = self
            .orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or_else(|| DomainError::OrderNotFound(id.to_string()))?;

        if !order.is_cancellable(now) {
            warn!(order_id = id, status = %order.status, "Cancellation refused");
            return Err(DomainError::OrderNotCancellable {
                id: id.to_string(),
                status: order.status,
            }
            .into());
        }

        order.status = OrderStatus::Cancelled;
        info!(order_id = id, "Order cancelled");
        Ok(order.clone())
    }

    /// Moves ongoing orders along their lifecycle based on time since placement.
    ///
    /// # Returns
    ///
    /// The number of orders whose status changed.
    pub fn advance(&mut self, now: PrimitiveDateTime) -> usize {
        let mut changed: usize = 0;
        for order in &mut self.orders {
            let elapsed: Duration = now - order.placed_at;
            let settled: OrderStatus = order.status.settled_after(elapsed);
            if settled != order.status {
                debug!(order_id = %order.id, from = %order.status, to = %settled, "Order advanced");
                order.status = settled;
                changed += 1;
            }
        }
        changed
    }

    /// Returns the orders listed under `tab`, in placement order.
    #[must_use]
    pub fn in_tab(&self, tab: OrderTab) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| order.status.tab() == tab)
            .collect()
    }

    /// Looks up an order by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Returns every order in placement order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Number of orders in the book.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Checks whether the book is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn next_id(&mut self) -> String {
        self.last_sequence += 1;
        format!("ORD-{:06}", self.last_sequence)
    }
}
