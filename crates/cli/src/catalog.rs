// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Built-in demo menu.

use cafe_order_domain::{Category, MenuItem};
use rust_decimal::Decimal;

/// Returns the demo menu served by the office cafes.
#[must_use]
pub fn menu() -> Vec<MenuItem> {
    vec![
        item(1, "Chicken Tikka Fry", 199, "Cozy Corner", false, Category::Appetizers),
        item(2, "Egg Rice", 59, "Cozy Corner", false, Category::MainCourse),
        item(3, "Hot Coffee", 40, "Urban Roast", true, Category::Beverages),
        item(4, "Green Salad", 179, "Fresh Bites", true, Category::Appetizers),
        item(5, "Chicken Noodles", 210, "Cozy Corner", false, Category::MainCourse),
        item(6, "Masala Dosa", 30, "Urban Roast", true, Category::Snacks),
        item(7, "Idly", 25, "Urban Roast", true, Category::Snacks),
        item(8, "South Meals", 130, "Fresh Bites", true, Category::MainCourse),
        item(9, "Paneer Biryani", 199, "Cozy Corner", true, Category::MainCourse),
        item(10, "Chicken Burger", 99, "Caffeine Fix", false, Category::Snacks),
    ]
}

fn item(id: u32, name: &str, price: i64, cafe: &str, is_veg: bool, category: Category) -> MenuItem {
    MenuItem::new(id, name, Decimal::new(price, 0), cafe, is_veg, category)
}
