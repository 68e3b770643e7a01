// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The set of dates a user picked explicitly.

use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// Summaries longer than this are shortened.
const SUMMARY_FULL_LIMIT: usize = 5;
/// Number of dates kept when a summary is shortened.
const SUMMARY_SHORT_KEEP: usize = 4;

/// User-picked anchor dates, unique and sorted ascending.
///
/// Anchors are the canonical selection; repeated dates are always derived
/// from them and never stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnchorSet {
    dates: Vec<Date>,
}

impl AnchorSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { dates: Vec::new() }
    }

    /// Creates a set holding exactly `date`.
    #[must_use]
    pub fn single(date: Date) -> Self {
        Self { dates: vec![date] }
    }

    /// Flips membership of `date`.
    ///
    /// Dates before `today` are ignored.
    ///
    /// # Returns
    ///
    /// `true` if the set changed.
    pub fn toggle(&mut self, date: Date, today: Date) -> bool {
        if date < today {
            return false;
        }
        match self.dates.binary_search(&date) {
            Ok(index) => {
                self.dates.remove(index);
            }
            Err(index) => self.dates.insert(index, date),
        }
        true
    }

    /// Replaces the whole set with `date`.
    ///
    /// Dates before `today` are ignored.
    ///
    /// # Returns
    ///
    /// `true` if the set changed.
    pub fn replace(&mut self, date: Date, today: Date) -> bool {
        if date < today {
            return false;
        }
        let changed: bool = self.dates.as_slice() != [date];
        self.dates.clear();
        self.dates.push(date);
        changed
    }

    /// Removes every date.
    pub fn clear(&mut self) {
        self.dates.clear();
    }

    /// Checks whether `date` is selected.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    /// Number of selected dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Checks whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the dates in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[Date] {
        &self.dates
    }
}

/// Formats dates for the selection banner, e.g. `"25 Jun, 2 Jul"`.
///
/// More than five dates are shortened to the first four followed by
/// `",... +N"`. An empty list reads `"None"`.
#[must_use]
pub fn summarize_dates(dates: &[Date]) -> String {
    if dates.is_empty() {
        return String::from("None");
    }
    if dates.len() <= SUMMARY_FULL_LIMIT {
        return join_short(dates);
    }
    let (shown, rest) = dates.split_at(SUMMARY_SHORT_KEEP);
    format!("{},... +{}", join_short(shown), rest.len())
}

fn join_short(dates: &[Date]) -> String {
    dates
        .iter()
        .map(|date| format!("{} {}", date.day(), short_month(date.month())))
        .collect::<Vec<String>>()
        .join(", ")
}

const fn short_month(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
