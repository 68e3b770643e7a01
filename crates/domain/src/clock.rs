// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wall-clock capability.
//!
//! Every "is this date in the past" decision goes through a [`Clock`], so
//! scheduling rules can be exercised against a pinned date.

use chrono::{Local, Offset, Utc};
use chrono_tz::Tz;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Source of the current wall-clock time.
pub trait Clock {
    /// Returns the current local date and time.
    fn now(&self) -> PrimitiveDateTime;

    /// Returns the current date, truncated to midnight.
    fn today(&self) -> Date {
        self.now().date()
    }
}

/// A clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: PrimitiveDateTime,
}

impl FixedClock {
    /// Creates a clock that always reports `now`.
    #[must_use]
    pub const fn new(now: PrimitiveDateTime) -> Self {
        Self { now }
    }

    /// Creates a clock pinned to midnight at the start of `date`.
    #[must_use]
    pub const fn at_midnight(date: Date) -> Self {
        Self {
            now: date.midnight(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> PrimitiveDateTime {
        self.now
    }
}

/// The machine's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> PrimitiveDateTime {
        wall_clock(Local::now().offset().local_minus_utc())
    }
}

/// The clock of a named time zone, independent of the machine's setting.
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    tz: Tz,
}

impl ZonedClock {
    /// Creates a clock reporting wall time in `tz`.
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Returns the configured time zone.
    #[must_use]
    pub const fn tz(&self) -> Tz {
        self.tz
    }
}

impl Clock for ZonedClock {
    fn now(&self) -> PrimitiveDateTime {
        let offset_seconds: i32 = Utc::now()
            .with_timezone(&self.tz)
            .offset()
            .fix()
            .local_minus_utc();
        wall_clock(offset_seconds)
    }
}

fn wall_clock(offset_seconds: i32) -> PrimitiveDateTime {
    let offset: UtcOffset = UtcOffset::from_whole_seconds(offset_seconds).unwrap_or(UtcOffset::UTC);
    let now: OffsetDateTime = OffsetDateTime::now_utc().to_offset(offset);
    PrimitiveDateTime::new(now.date(), now.time())
}
