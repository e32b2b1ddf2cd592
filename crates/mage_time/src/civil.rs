//! Parsing and validation of civil (wall-clock) dates and times.
//!
//! All values are naive: they carry no time zone, matching how the
//! calculators treat user-entered birth data as local wall-clock time.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::TimeError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Parse a `YYYY-MM-DD` date. Surrounding whitespace is ignored.
pub fn parse_date(input: &str) -> Result<NaiveDate, TimeError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(TimeError::Missing("date"));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| TimeError::InvalidDate(s.to_string()))
}

/// Parse an `HH:MM` wall-clock time. `HH:MM:SS` is accepted too.
pub fn parse_time(input: &str) -> Result<NaiveTime, TimeError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(TimeError::Missing("time"));
    }
    NaiveTime::parse_from_str(s, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| TimeError::InvalidTime(s.to_string()))
}

/// Parse a date and a time and join them into one naive datetime.
pub fn parse_date_time(date: &str, time: &str) -> Result<NaiveDateTime, TimeError> {
    let d = parse_date(date)?;
    let t = parse_time(time)?;
    Ok(d.and_time(t))
}

/// Reject dates after `today`. `today` itself is allowed.
pub fn ensure_not_future(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate, TimeError> {
    if date > today {
        Err(TimeError::FutureDate { date, today })
    } else {
        Ok(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date() {
        let d = parse_date(" 1990-06-15 ").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
    }

    #[test]
    fn rejects_empty_date() {
        assert_eq!(parse_date("   "), Err(TimeError::Missing("date")));
    }

    #[test]
    fn rejects_impossible_date() {
        assert!(matches!(parse_date("2023-02-29"), Err(TimeError::InvalidDate(_))));
        assert!(matches!(parse_date("15/06/1990"), Err(TimeError::InvalidDate(_))));
    }

    #[test]
    fn parses_time_with_and_without_seconds() {
        assert_eq!(parse_time("14:30").unwrap(), NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        assert_eq!(parse_time("06:05:09").unwrap(), NaiveTime::from_hms_opt(6, 5, 9).unwrap());
        assert!(matches!(parse_time("25:00"), Err(TimeError::InvalidTime(_))));
    }

    #[test]
    fn date_time_join() {
        let dt = parse_date_time("2000-01-01", "00:00").unwrap();
        assert_eq!(dt.to_string(), "2000-01-01 00:00:00");
    }

    #[test]
    fn today_is_not_future() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(ensure_not_future(today, today), Ok(today));
        let tomorrow = today.succ_opt().unwrap();
        assert!(matches!(
            ensure_not_future(tomorrow, today),
            Err(TimeError::FutureDate { .. })
        ));
    }
}
