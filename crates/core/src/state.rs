// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cafe_order_domain::{
    AnchorSet, CalendarMonth, Clock, Order, RepeatMode, ScheduledOccurrence, TimeOfDay,
    summarize_dates,
};
use cafe_order_notice::Notice;
use serde::Serialize;
use time::Date;

/// What a scheduling session is for.
///
/// There is no transition from `Edit` back to `Create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "order", rename_all = "lowercase")]
pub enum SessionMode {
    /// Scheduling new orders from the cart.
    Create,
    /// Rescheduling one existing order.
    Edit(Order),
}

impl SessionMode {
    /// Returns the mode name used in logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Edit(_) => "edit",
        }
    }
}

/// The state of one scheduling screen.
///
/// A session is an immutable value: [`crate::apply`] returns a new session and
/// never modifies its input. `scheduled` is derived from the anchors, repeat
/// mode and today's date, and is rebuilt on every transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchedulingSession {
    pub(crate) anchors: AnchorSet,
    pub(crate) repeat: RepeatMode,
    pub(crate) time: TimeOfDay,
    pub(crate) mode: SessionMode,
    pub(crate) displayed_month: CalendarMonth,
    pub(crate) scheduled: Vec<Date>,
}

impl SchedulingSession {
    /// Starts a session for new orders.
    ///
    /// Nothing is selected, the repeat mode is `none`, the time is the default
    /// `08:00 AM`, and the month containing today is displayed.
    #[must_use]
    pub fn create(clock: &dyn Clock) -> Self {
        Self {
            anchors: AnchorSet::new(),
            repeat: RepeatMode::None,
            time: TimeOfDay::default(),
            mode: SessionMode::Create,
            displayed_month: CalendarMonth::containing(clock.today()),
            scheduled: Vec::new(),
        }
    }

    /// Starts a session that reschedules `order`.
    ///
    /// The order's date is pre-selected, its time of day is pre-filled, and
    /// its month is displayed.
    #[must_use]
    pub fn edit(order: Order) -> Self {
        let date: Date = order.date.date();
        Self {
            anchors: AnchorSet::single(date),
            repeat: RepeatMode::None,
            time: TimeOfDay::from_time(order.date.time()),
            mode: SessionMode::Edit(order),
            displayed_month: CalendarMonth::containing(date),
            scheduled: vec![date],
        }
    }

    /// Returns the dates the user picked explicitly.
    #[must_use]
    pub const fn anchors(&self) -> &AnchorSet {
        &self.anchors
    }

    /// Returns the repeat mode.
    #[must_use]
    pub const fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// Returns the time of day applied to every occurrence.
    #[must_use]
    pub const fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Returns the session mode.
    #[must_use]
    pub const fn mode(&self) -> &SessionMode {
        &self.mode
    }

    /// Checks whether the session reschedules an existing order.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        matches!(self.mode, SessionMode::Edit(_))
    }

    /// Returns the month shown in the calendar.
    #[must_use]
    pub const fn displayed_month(&self) -> CalendarMonth {
        self.displayed_month
    }

    /// Returns the scheduled dates, unique and ascending.
    #[must_use]
    pub fn scheduled(&self) -> &[Date] {
        &self.scheduled
    }

    /// Returns one occurrence per scheduled date at the session's time.
    #[must_use]
    pub fn occurrences(&self) -> Vec<ScheduledOccurrence> {
        self.scheduled
            .iter()
            .map(|date| ScheduledOccurrence::new(*date, self.time))
            .collect()
    }

    /// Returns the selection banner text, e.g. `"25 Jun, 2 Jul"`.
    #[must_use]
    pub fn summary(&self) -> String {
        summarize_dates(&self.scheduled)
    }
}

/// The result of a successful session transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionResult {
    /// The session after the transition.
    pub new_session: SchedulingSession,
    /// A notice for the user, if the transition produced one.
    pub notice: Option<Notice>,
}
