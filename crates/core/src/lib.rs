// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The scheduling session state machine.
//!
//! A [`SchedulingSession`] changes only through [`apply`], which takes a
//! [`Command`] and returns a new session. [`checkout`] and [`update_order`]
//! turn a finished session into priced order details or a rescheduled order,
//! and [`OrderBook`] keeps the orders that result.

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

mod apply;
mod checkout;
mod command;
mod error;
mod orders;
mod state;

#[cfg(test)]
mod tests;

pub use apply::apply;
pub use checkout::{checkout, update_order};
pub use command::Command;
pub use error::CoreError;
pub use orders::OrderBook;
pub use state::{SchedulingSession, SessionMode, TransitionResult};

use cafe_order_domain::Clock;
use cafe_order_notice::Notice;

/// Applies a sequence of commands, returning the final session and every notice raised.
///
/// # Errors
///
/// Returns the first error produced by [`apply`]; earlier commands are
/// discarded along with it.
pub fn apply_all<I>(
    session: &SchedulingSession,
    commands: I,
    clock: &dyn Clock,
) -> Result<(SchedulingSession, Vec<Notice>), CoreError>
where
    I: IntoIterator<Item = Command>,
{
    let mut current: SchedulingSession = session.clone();
    let mut notices: Vec<Notice> = Vec::new();
    for command in commands {
        let result: TransitionResult = apply(&current, command, clock)?;
        current = result.new_session;
        notices.extend(result.notice);
    }
    Ok((current, notices))
}
