// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;

/// Flat convenience fee charged once per order (6.00).
pub const CONVENIENCE_FEE: Decimal = Decimal::from_parts(600, 0, 0, false, 2);

/// Price of a single order: `subtotal + fee`.
#[must_use]
pub fn order_total(subtotal: Decimal, fee: Decimal) -> Decimal {
    subtotal + fee
}

/// Price of a scheduled checkout: `(subtotal + fee) × occurrences`.
///
/// Every occurrence becomes its own order and pays its own fee.
#[must_use]
pub fn checkout_total(subtotal: Decimal, fee: Decimal, occurrences: usize) -> Decimal {
    order_total(subtotal, fee) * Decimal::from(occurrences)
}
