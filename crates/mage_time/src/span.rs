//! Day deltas and calendar stepping.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, Timelike};
use tracing::warn;

use crate::error::TimeError;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Whole days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Fractional days from `from` to `to` with millisecond resolution.
pub fn fractional_days(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    to.signed_duration_since(from).num_milliseconds() as f64 / (SECONDS_PER_DAY * 1000.0)
}

/// Continuous day count of a wall-clock instant: days since 0001-01-01
/// (which is day 1) plus the fraction of the day elapsed.
pub fn day_number(instant: NaiveDateTime) -> f64 {
    f64::from(instant.date().num_days_from_ce())
        + f64::from(instant.time().num_seconds_from_midnight()) / SECONDS_PER_DAY
}

/// `date + days`.
pub fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate, TimeError> {
    date.checked_add_days(Days::new(days))
        .ok_or(TimeError::OutOfRange("day offset"))
}

/// `date + months`, clamping the day to the end of a shorter target month
/// (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate, TimeError> {
    date.checked_add_months(Months::new(months))
        .ok_or(TimeError::OutOfRange("month offset"))
}

/// The same month and day in `year`.
///
/// Feb 29 in a non-leap year rolls over to Mar 1.
pub fn anniversary(date: NaiveDate, year: i32) -> Result<NaiveDate, TimeError> {
    if let Some(d) = date.with_year(year) {
        return Ok(d);
    }
    let shifted = NaiveDate::from_ymd_opt(year, 3, 1).ok_or(TimeError::OutOfRange("year"))?;
    warn!(%date, year, "leap-day anniversary moved to {shifted}");
    Ok(shifted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn days_between_signs() {
        assert_eq!(days_between(d(2024, 1, 1), d(2024, 1, 24)), 23);
        assert_eq!(days_between(d(2024, 1, 24), d(2024, 1, 1)), -23);
        assert_eq!(days_between(d(2023, 3, 1), d(2024, 3, 1)), 366);
    }

    #[test]
    fn fractional_days_half() {
        let a = d(2000, 1, 1).and_hms_opt(0, 0, 0).unwrap();
        let b = d(2000, 1, 2).and_hms_opt(12, 0, 0).unwrap();
        assert!((fractional_days(a, b) - 1.5).abs() < 1e-12);
        assert!((fractional_days(b, a) + 1.5).abs() < 1e-12);
    }

    #[test]
    fn day_number_of_y2k() {
        let y2k = d(2000, 1, 1).and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(day_number(y2k), 730_120.0);
        let noon = d(2000, 1, 1).and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(day_number(noon), 730_120.5);
    }

    #[test]
    fn add_months_clamps() {
        assert_eq!(add_months(d(2024, 1, 31), 1).unwrap(), d(2024, 2, 29));
        assert_eq!(add_months(d(2023, 11, 15), 3).unwrap(), d(2024, 2, 15));
    }

    #[test]
    fn add_days_crosses_year() {
        assert_eq!(add_days(d(2023, 12, 20), 14).unwrap(), d(2024, 1, 3));
    }

    #[test]
    fn leap_day_anniversary_rolls_forward() {
        assert_eq!(anniversary(d(2020, 2, 29), 2021).unwrap(), d(2021, 3, 1));
        assert_eq!(anniversary(d(2020, 2, 29), 2024).unwrap(), d(2024, 2, 29));
        assert_eq!(anniversary(d(2020, 7, 4), 2022).unwrap(), d(2022, 7, 4));
    }
}
