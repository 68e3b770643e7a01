// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Menu section an item is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Starters.
    Appetizers,
    /// Mains.
    #[serde(rename = "Main Course")]
    MainCourse,
    /// Sweets.
    Desserts,
    /// Drinks.
    Beverages,
    /// Light bites.
    Snacks,
}

impl Category {
    /// Returns the display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Appetizers => "Appetizers",
            Self::MainCourse => "Main Course",
            Self::Desserts => "Desserts",
            Self::Beverages => "Beverages",
            Self::Snacks => "Snacks",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A dish offered by a cafe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItem {
    /// Catalog identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Name of the cafe serving the item.
    pub cafe: String,
    /// Whether the dish is vegetarian.
    pub is_veg: bool,
    /// Menu section.
    pub category: Category,
}

impl MenuItem {
    /// Creates a new `MenuItem`.
    #[must_use]
    pub fn new(
        id: u32,
        name: &str,
        price: Decimal,
        cafe: &str,
        is_veg: bool,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            cafe: cafe.to_string(),
            is_veg,
            category,
        }
    }
}

/// A menu item and how many of it were ordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartLine {
    /// The ordered item.
    pub item: MenuItem,
    /// Units ordered (always at least 1 while in a cart).
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line (`price × quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}

/// The user's basket before checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Adds one unit of `item`, appending a new line if it is not in the cart.
    ///
    /// The quantity of an existing line stops at `u32::MAX`.
    pub fn add_item(&mut self, item: MenuItem) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.item.id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }
        self.lines.push(CartLine { item, quantity: 1 });
    }

    /// Sets the quantity of an item already in the cart.
    ///
    /// A quantity of zero removes the line. Unknown ids are ignored.
    pub fn update_quantity(&mut self, item_id: u32, quantity: u32) {
        if quantity == 0 {
            self.lines.retain(|line| line.item.id != item_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.item.id == item_id) {
            line.quantity = quantity;
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Checks whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Units of `item_id` in the cart (zero when absent).
    #[must_use]
    pub fn quantity_of(&self, item_id: u32) -> u32 {
        self.lines
            .iter()
            .find(|line| line.item.id == item_id)
            .map_or(0, |line| line.quantity)
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

/// A requested cart line, `ID` or `ID:QTY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRequest {
    /// Catalog identifier.
    pub item_id: u32,
    /// Units requested.
    pub quantity: u32,
}

impl FromStr for LineRequest {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidLineRequest(s.to_string());
        let (id, quantity) = match s.split_once(':') {
            Some((id, quantity)) => (id, quantity.trim().parse().map_err(|_| invalid())?),
            None => (s, 1),
        };
        let item_id: u32 = id.trim().parse().map_err(|_| invalid())?;
        if quantity == 0 {
            return Err(invalid());
        }
        Ok(Self { item_id, quantity })
    }
}

/// Builds a cart from line requests against a menu.
///
/// # Errors
///
/// Returns an error if:
/// - A requested id is not on the menu
/// - The merged quantity of an item does not fit in a `u32`
pub fn build_cart(menu: &[MenuItem], requests: &[LineRequest]) -> Result<Cart, DomainError> {
    let mut cart: Cart = Cart::new();
    for request in requests {
        let item: &MenuItem = menu
            .iter()
            .find(|item| item.id == request.item_id)
            .ok_or(DomainError::UnknownMenuItem(request.item_id))?;
        let existing: u32 = cart.quantity_of(item.id);
        if existing == 0 {
            cart.add_item(item.clone());
        }
        let quantity: u32 = existing.checked_add(request.quantity).ok_or_else(|| {
            DomainError::InvalidLineRequest(format!("{}:{}", request.item_id, request.quantity))
        })?;
        cart.update_quantity(item.id, quantity);
    }
    Ok(cart)
}
