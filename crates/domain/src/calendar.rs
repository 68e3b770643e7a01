// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Month grid layout for the date picker.
//!
//! A grid always starts on Sunday. Cells before the 1st and after the last
//! day of the month are empty, so the grid is a whole number of weeks.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// Number of columns in a calendar week row.
pub const DAYS_PER_WEEK: usize = 7;

/// Column headings, Sunday first.
pub const WEEKDAY_HEADINGS: [&str; DAYS_PER_WEEK] =
    ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarCell {
    /// Padding outside the month.
    Empty,
    /// A day of the month (1-based).
    Day(u8),
}

impl CalendarCell {
    /// Returns the day number, if this cell holds one.
    #[must_use]
    pub const fn day(self) -> Option<u8> {
        match self {
            Self::Empty => None,
            Self::Day(day) => Some(day),
        }
    }
}

/// A displayed calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarMonth {
    /// The first day of the month.
    first_day: Date,
}

impl CalendarMonth {
    /// Creates a calendar month from a year and a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is not in `1..=12` or the year is
    /// outside the supported date range.
    pub fn new(year: i32, month: u8) -> Result<Self, DomainError> {
        let month: Month = Month::try_from(month).map_err(|_| DomainError::InvalidMonth(month))?;
        let first_day: Date = Date::from_calendar_date(year, month, 1).map_err(|_| {
            DomainError::DateArithmeticOverflow {
                operation: format!("constructing {month} {year}"),
            }
        })?;
        Ok(Self { first_day })
    }

    /// Returns the month containing `date`.
    #[must_use]
    pub fn containing(date: Date) -> Self {
        // Day 1 exists in every month.
        Self {
            first_day: date.replace_day(1).unwrap_or(date),
        }
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// Returns the month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.first_day.month()
    }

    /// Returns the first day of the month.
    #[must_use]
    pub const fn first_day(&self) -> Date {
        self.first_day
    }

    /// Number of empty cells before the 1st (0 = the 1st is a Sunday).
    #[must_use]
    pub const fn first_weekday_offset(&self) -> usize {
        self.first_day.weekday().number_days_from_sunday() as usize
    }

    /// Number of days in the month.
    #[must_use]
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    /// Resolves a clicked day number to a date in this month.
    #[must_use]
    pub fn date_of(&self, day: u8) -> Option<Date> {
        if day == 0 || day > self.days_in_month() {
            return None;
        }
        self.first_day.replace_day(day).ok()
    }

    /// Checks whether `date` falls in this month.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Returns the preceding month.
    ///
    /// # Errors
    ///
    /// Returns an error at the lower bound of the supported date range.
    pub fn previous(&self) -> Result<Self, DomainError> {
        let (year, month) = match self.month() {
            Month::January => (self.year() - 1, Month::December),
            other => (self.year(), other.previous()),
        };
        Self::new(year, u8::from(month))
    }

    /// Returns the following month.
    ///
    /// # Errors
    ///
    /// Returns an error at the upper bound of the supported date range.
    pub fn next(&self) -> Result<Self, DomainError> {
        let (year, month) = match self.month() {
            Month::December => (self.year() + 1, Month::January),
            other => (self.year(), other.next()),
        };
        Self::new(year, u8::from(month))
    }

    /// Builds the grid of cells for this month.
    #[must_use]
    pub fn grid(&self) -> Vec<CalendarCell> {
        let leading: usize = self.first_weekday_offset();
        let days: usize = usize::from(self.days_in_month());
        let total: usize = (leading + days).div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;

        let mut cells: Vec<CalendarCell> = Vec::with_capacity(total);
        cells.extend(std::iter::repeat_n(CalendarCell::Empty, leading));
        cells.extend((1..=self.days_in_month()).map(CalendarCell::Day));
        cells.resize(total, CalendarCell::Empty);
        cells
    }

    /// Builds the grid split into week rows.
    #[must_use]
    pub fn weeks(&self) -> Vec<Vec<CalendarCell>> {
        self.grid()
            .chunks(DAYS_PER_WEEK)
            .map(<[CalendarCell]>::to_vec)
            .collect()
    }
}

impl std::fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month(), self.year())
    }
}

/// Builds the grid of cells for a month.
///
/// # Arguments
///
/// * `year` - The calendar year
/// * `month` - The 1-based month number
///
/// # Errors
///
/// Returns an error if the month is not in `1..=12`.
pub fn build_calendar_grid(year: i32, month: u8) -> Result<Vec<CalendarCell>, DomainError> {
    Ok(CalendarMonth::new(year, month)?.grid())
}

/// Number of days in `month` of `year`, leap years included.
#[must_use]
pub const fn days_in_month(year: i32, month: Month) -> u8 {
    month.length(year)
}
