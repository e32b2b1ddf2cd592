//! Error types for the calculators.
//!
//! The numeric cores are total over validated input; only the entry points
//! that accept user input return these.

use mage_time::TimeError;
use thiserror::Error;

/// Errors from calculator input validation and location lookup.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum MageError {
    /// Date/time parsing or validation failed.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// A required text input was empty.
    #[error("missing input: {0}")]
    MissingInput(&'static str),
    /// Unknown zodiac sign name or index.
    #[error("invalid zodiac sign: {0}")]
    InvalidSign(String),
    /// Unknown compatibility category name.
    #[error("invalid category '{0}' (love, friendship, work)")]
    InvalidCategory(String),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// A location search returned no candidates.
    #[error("no location found for '{0}'")]
    LocationNotFound(String),
    /// The location lookup collaborator failed.
    #[error("location lookup failed: {0}")]
    LocationLookup(String),
}
