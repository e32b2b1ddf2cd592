//! Error types for civil date handling.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors from date parsing, validation and calendar stepping.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Input was empty or whitespace.
    #[error("missing {0}")]
    Missing(&'static str),
    /// Date string is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
    /// Time string is not a valid `HH:MM` wall-clock time.
    #[error("invalid time '{0}': expected HH:MM")]
    InvalidTime(String),
    /// Date lies after the reference day it must not exceed.
    #[error("date {date} is in the future (today is {today})")]
    FutureDate { date: NaiveDate, today: NaiveDate },
    /// Calendar arithmetic left the representable range.
    #[error("date out of range: {0}")]
    OutOfRange(&'static str),
}
