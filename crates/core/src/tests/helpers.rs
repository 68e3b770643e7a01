// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, SchedulingSession, TransitionResult, apply};
use cafe_order_domain::{
    CONVENIENCE_FEE, Cart, Category, FixedClock, MenuItem, Order, OrderDetails, OrderStatus,
};
use rust_decimal::Decimal;
use time::macros::{date, datetime};

pub fn create_test_clock() -> FixedClock {
    FixedClock::at_midnight(date!(2024 - 06 - 20))
}

pub fn create_test_menu_item() -> MenuItem {
    MenuItem::new(
        1,
        "Chicken Tikka Fry",
        Decimal::new(100, 0),
        "Cozy Corner",
        false,
        Category::Appetizers,
    )
}

/// Order details for one unit priced 100 plus the 6.00 fee.
pub fn create_test_details() -> OrderDetails {
    let mut cart: Cart = Cart::new();
    cart.add_item(create_test_menu_item());
    OrderDetails::from_cart(&cart, CONVENIENCE_FEE)
}

pub fn create_test_order() -> Order {
    Order {
        id: String::from("ORD-000042"),
        cafe: String::from("Cozy Corner"),
        date: datetime!(2024-06-20 12:30),
        items: create_test_details().items,
        total: Decimal::new(10600, 2),
        status: OrderStatus::Scheduled,
        placed_at: datetime!(2024-06-18 9:15),
    }
}

pub fn create_test_session() -> SchedulingSession {
    SchedulingSession::create(&create_test_clock())
}

/// Applies a command with the test clock, panicking on error.
pub fn run(session: &SchedulingSession, command: Command) -> TransitionResult {
    apply(session, command, &create_test_clock()).unwrap()
}
