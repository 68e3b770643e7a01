// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::order::OrderStatus;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Checkout or update was requested with no dates selected.
    NoDatesSelected,
    /// Edit mode requires exactly one selected date.
    EditModeRequiresSingleDate {
        /// How many dates were selected.
        selected: usize,
    },
    /// A time-of-day string could not be parsed.
    InvalidTimeOfDay {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
    /// Month number outside `1..=12`.
    InvalidMonth(u8),
    /// Unknown repeat mode name.
    InvalidRepeatMode(String),
    /// Unknown order status name.
    InvalidOrderStatus(String),
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// The menu has no item with this id.
    UnknownMenuItem(u32),
    /// A cart line request is not `ID` or `ID:QTY` with a positive quantity.
    InvalidLineRequest(String),
    /// No order with this id exists.
    OrderNotFound(String),
    /// The order can no longer be cancelled.
    OrderNotCancellable {
        /// The order id.
        id: String,
        /// The status the order is in.
        status: OrderStatus,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDatesSelected => write!(f, "Please select at least one date."),
            Self::EditModeRequiresSingleDate { selected } => {
                write!(
                    f,
                    "Please select one date for the order ({selected} selected)."
                )
            }
            Self::InvalidTimeOfDay { input, reason } => {
                write!(f, "Invalid time of day '{input}': {reason}")
            }
            Self::InvalidMonth(month) => {
                write!(f, "Invalid month: {month}. Must be between 1 and 12")
            }
            Self::InvalidRepeatMode(name) => write!(f, "Invalid repeat mode: {name}"),
            Self::InvalidOrderStatus(name) => write!(f, "Invalid order status: {name}"),
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::UnknownMenuItem(id) => write!(f, "Menu item {id} not found"),
            Self::InvalidLineRequest(input) => {
                write!(f, "Invalid cart line '{input}': expected ID or ID:QTY")
            }
            Self::OrderNotFound(id) => write!(f, "Order '{id}' not found"),
            Self::OrderNotCancellable { id, status } => {
                write!(f, "Order '{id}' cannot be cancelled while {status}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
