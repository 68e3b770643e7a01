// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CalendarCell, CalendarMonth, DAYS_PER_WEEK, DomainError, build_calendar_grid, days_in_month,
};
use time::Month;
use time::macros::date;

fn count_leading_empty(grid: &[CalendarCell]) -> usize {
    grid.iter()
        .take_while(|cell| **cell == CalendarCell::Empty)
        .count()
}

fn count_days(grid: &[CalendarCell]) -> usize {
    grid.iter().filter(|cell| cell.day().is_some()).count()
}

#[test]
fn test_grid_for_june_2024_has_six_leading_blanks() {
    let grid: Vec<CalendarCell> = build_calendar_grid(2024, 6).unwrap();

    assert_eq!(count_leading_empty(&grid), 6);
    assert_eq!(count_days(&grid), 30);
    assert_eq!(grid.len(), 42);
    assert_eq!(grid[6], CalendarCell::Day(1));
    assert_eq!(grid[35], CalendarCell::Day(30));
    assert_eq!(grid[36], CalendarCell::Empty);
}

#[test]
fn test_grid_for_leap_february() {
    let grid: Vec<CalendarCell> = build_calendar_grid(2024, 2).unwrap();

    assert_eq!(count_leading_empty(&grid), 4);
    assert_eq!(count_days(&grid), 29);
    assert_eq!(grid.len(), 35);
}

#[test]
fn test_grid_for_common_february() {
    let grid: Vec<CalendarCell> = build_calendar_grid(2023, 2).unwrap();

    assert_eq!(count_leading_empty(&grid), 3);
    assert_eq!(count_days(&grid), 28);
}

#[test]
fn test_grid_starting_on_sunday_has_no_leading_blanks() {
    let grid: Vec<CalendarCell> = build_calendar_grid(2024, 9).unwrap();

    assert_eq!(grid[0], CalendarCell::Day(1));
    assert_eq!(count_days(&grid), 30);
}

#[test]
fn test_february_2026_fills_exactly_four_weeks() {
    let grid: Vec<CalendarCell> = build_calendar_grid(2026, 2).unwrap();

    assert_eq!(grid.len(), 28);
    assert_eq!(grid[27], CalendarCell::Day(28));
}

#[test]
fn test_every_month_fills_whole_weeks() {
    for year in [1900, 2000, 2023, 2024, 2100] {
        for month in 1..=12u8 {
            let cal: CalendarMonth = CalendarMonth::new(year, month).unwrap();
            let grid: Vec<CalendarCell> = cal.grid();

            assert_eq!(count_leading_empty(&grid), cal.first_weekday_offset());
            assert_eq!(count_days(&grid), usize::from(cal.days_in_month()));
            assert_eq!(grid.len() % DAYS_PER_WEEK, 0);
            assert!(grid.len() - count_days(&grid) - cal.first_weekday_offset() < DAYS_PER_WEEK);
        }
    }
}

#[test]
fn test_days_in_month_handles_century_leap_rules() {
    assert_eq!(days_in_month(1900, Month::February), 28);
    assert_eq!(days_in_month(2000, Month::February), 29);
    assert_eq!(days_in_month(2024, Month::April), 30);
    assert_eq!(days_in_month(2024, Month::December), 31);
}

#[test]
fn test_invalid_month_is_rejected() {
    assert_eq!(build_calendar_grid(2024, 0), Err(DomainError::InvalidMonth(0)));
    assert_eq!(build_calendar_grid(2024, 13), Err(DomainError::InvalidMonth(13)));
}

#[test]
fn test_navigation_rolls_over_year_boundaries() {
    let december: CalendarMonth = CalendarMonth::new(2024, 12).unwrap();
    let january: CalendarMonth = december.next().unwrap();

    assert_eq!(january.year(), 2025);
    assert_eq!(january.month(), Month::January);
    assert_eq!(january.previous().unwrap(), december);
}

#[test]
fn test_date_of_resolves_clicked_day() {
    let june: CalendarMonth = CalendarMonth::new(2024, 6).unwrap();

    assert_eq!(june.date_of(25), Some(date!(2024 - 06 - 25)));
    assert_eq!(june.date_of(0), None);
    assert_eq!(june.date_of(31), None);
}

#[test]
fn test_containing_and_contains() {
    let june: CalendarMonth = CalendarMonth::containing(date!(2024 - 06 - 25));

    assert_eq!(june.first_day(), date!(2024 - 06 - 01));
    assert!(june.contains(date!(2024 - 06 - 30)));
    assert!(!june.contains(date!(2024 - 07 - 01)));
    assert_eq!(june.to_string(), "June 2024");
}

#[test]
fn test_weeks_are_rows_of_seven() {
    let june: CalendarMonth = CalendarMonth::new(2024, 6).unwrap();
    let weeks: Vec<Vec<CalendarCell>> = june.weeks();

    assert_eq!(weeks.len(), 6);
    assert!(weeks.iter().all(|week| week.len() == DAYS_PER_WEEK));
    assert_eq!(weeks[0][6], CalendarCell::Day(1));
}
