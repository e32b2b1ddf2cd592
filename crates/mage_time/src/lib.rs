//! Civil date handling for the astromage calculators.
//!
//! This crate provides:
//! - `YYYY-MM-DD` / `HH:MM` parsing into naive chrono values
//! - Future-date validation against a caller-supplied "today"
//! - Whole and fractional day deltas
//! - Calendar stepping (days, months, anniversaries)

pub mod civil;
pub mod error;
pub mod span;

pub use civil::{ensure_not_future, parse_date, parse_date_time, parse_time};
pub use error::TimeError;
pub use span::{
    SECONDS_PER_DAY, add_days, add_months, anniversary, day_number, days_between, fractional_days,
};

// Re-export the chrono types that appear in this crate's API.
pub use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
