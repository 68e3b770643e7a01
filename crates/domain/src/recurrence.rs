// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recurrence expansion of anchor dates.
//!
//! ## Invariants
//!
//! - Every anchor is part of the output (anchors are never in the past)
//! - Generated dates before `today` are dropped
//! - Output is deduplicated by calendar day and sorted ascending
//! - With [`RepeatMode::None`] the output equals the anchors

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use time::{Date, Duration};

/// Weeks generated after each anchor for [`RepeatMode::Weekly`].
pub const WEEKLY_EXTRA_WEEKS: u8 = 3;

/// Months generated after each anchor for `RepeatMode::Monthly`.
#[cfg(feature = "monthly-repeat")]
pub const MONTHLY_EXTRA_MONTHS: u8 = 2;

/// How anchor dates repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Only the anchors themselves.
    #[default]
    None,
    /// Each anchor plus the same weekday in the following three weeks.
    Weekly,
    /// Each anchor plus the same ordinal weekday (e.g. 3rd Tuesday) in the
    /// following two months.
    #[cfg(feature = "monthly-repeat")]
    Monthly,
}

impl RepeatMode {
    /// Returns the lower-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Weekly => "weekly",
            #[cfg(feature = "monthly-repeat")]
            Self::Monthly => "monthly",
        }
    }

    /// Total occurrences produced per anchor, ignoring past-date pruning.
    #[must_use]
    pub const fn occurrences_per_anchor(&self) -> u8 {
        match self {
            Self::None => 1,
            Self::Weekly => WEEKLY_EXTRA_WEEKS + 1,
            #[cfg(feature = "monthly-repeat")]
            Self::Monthly => MONTHLY_EXTRA_MONTHS + 1,
        }
    }
}

impl FromStr for RepeatMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "weekly" => Ok(Self::Weekly),
            #[cfg(feature = "monthly-repeat")]
            "monthly" => Ok(Self::Monthly),
            _ => Err(DomainError::InvalidRepeatMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What an expansion did, for user feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionOutcome {
    /// No repetition was requested.
    Unchanged,
    /// Repetition was requested but there are no anchors to repeat.
    NoAnchors,
    /// Repetition was applied to at least one anchor.
    Applied(RepeatMode),
}

/// Result of expanding anchors under a repeat mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Scheduled dates, unique and ascending.
    pub dates: Vec<Date>,
    /// What happened.
    pub outcome: ExpansionOutcome,
}

/// Expands anchors into the full set of scheduled dates.
///
/// # Arguments
///
/// * `anchors` - User-picked dates (any order, duplicates tolerated)
/// * `mode` - The repeat rule
/// * `today` - Generated dates before this day are dropped
///
/// # Errors
///
/// Returns an error if date arithmetic overflows.
///
/// # Example
///
/// ```text
/// anchors = [2024-06-25 (Tue)], mode = Weekly, today = 2024-06-20
///
/// 2024-06-25, 2024-07-02, 2024-07-09, 2024-07-16
/// ```
pub fn expand(anchors: &[Date], mode: RepeatMode, today: Date) -> Result<Expansion, DomainError> {
    let mut dates: BTreeSet<Date> = anchors.iter().copied().collect();

    let outcome: ExpansionOutcome = match mode {
        RepeatMode::None => ExpansionOutcome::Unchanged,
        _ if anchors.is_empty() => ExpansionOutcome::NoAnchors,
        RepeatMode::Weekly => {
            for anchor in anchors {
                dates.extend(weekly_repeats(*anchor, today)?);
            }
            ExpansionOutcome::Applied(mode)
        }
        #[cfg(feature = "monthly-repeat")]
        RepeatMode::Monthly => {
            for anchor in anchors {
                dates.extend(monthly_repeats(*anchor, today)?);
            }
            ExpansionOutcome::Applied(mode)
        }
    };

    Ok(Expansion {
        dates: dates.into_iter().collect(),
        outcome,
    })
}

fn weekly_repeats(anchor: Date, today: Date) -> Result<Vec<Date>, DomainError> {
    let mut repeats: Vec<Date> = Vec::with_capacity(usize::from(WEEKLY_EXTRA_WEEKS));
    for week in 1..=WEEKLY_EXTRA_WEEKS {
        let date: Date = anchor
            .checked_add(Duration::weeks(i64::from(week)))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("repeating {anchor} by {week} week(s)"),
            })?;
        if date >= today {
            repeats.push(date);
        }
    }
    Ok(repeats)
}

#[cfg(feature = "monthly-repeat")]
fn monthly_repeats(anchor: Date, today: Date) -> Result<Vec<Date>, DomainError> {
    use crate::calendar::CalendarMonth;

    let ordinal: u8 = (anchor.day() - 1) / 7 + 1;
    let mut month: CalendarMonth = CalendarMonth::containing(anchor);
    let mut repeats: Vec<Date> = Vec::with_capacity(usize::from(MONTHLY_EXTRA_MONTHS));
    for _ in 0..MONTHLY_EXTRA_MONTHS {
        month = month.next()?;
        if let Some(date) = nth_weekday_of_month(month, anchor.weekday(), ordinal)
            && date >= today
        {
            repeats.push(date);
        }
    }
    Ok(repeats)
}

/// Finds the `ordinal`-th (1-based) `weekday` in `month`, if the month has one.
#[cfg(feature = "monthly-repeat")]
#[must_use]
pub fn nth_weekday_of_month(
    month: crate::calendar::CalendarMonth,
    weekday: time::Weekday,
    ordinal: u8,
) -> Option<Date> {
    if ordinal == 0 || ordinal > 5 {
        return None;
    }
    let first: Date = month.first_day();
    let lead: u8 =
        (7 + weekday.number_days_from_sunday() - first.weekday().number_days_from_sunday()) % 7;
    let day: u8 = 1 + lead + (ordinal - 1) * 7;
    month.date_of(day)
}
