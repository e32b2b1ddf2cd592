use chrono::{Local, NaiveDate, NaiveDateTime, Utc};
use mage_base::{
    BiorhythmReading, CompatibilityMatrix, CompatibilityScores, LuckyNumbers, MoonPhase,
    TimelineEntry, TimelineStats, ZodiacSign,
};

use crate::error::AstromageError;
use crate::global::matrix;

/// Modulus of the matrix generator; seeds are reduced into its range.
const SEED_MODULUS: u64 = 233_280;

/// Local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current UTC wall-clock instant.
pub fn now_utc() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// A seed derived from the current time, for an unseeded matrix.
pub fn clock_seed() -> u64 {
    Utc::now().timestamp_millis().unsigned_abs() % SEED_MODULUS
}

/// Scores for a pair from the global matrix.
pub fn compatibility(a: ZodiacSign, b: ZodiacSign) -> Result<CompatibilityScores, AstromageError> {
    Ok(matrix()?.get(a, b))
}

/// The whole global matrix.
pub fn compatibility_matrix() -> Result<&'static CompatibilityMatrix, AstromageError> {
    matrix()
}

/// Biorhythm for `birth` as of the local date.
pub fn biorhythm_today(birth: NaiveDate) -> Result<BiorhythmReading, AstromageError> {
    Ok(mage_base::biorhythm(birth, today())?)
}

/// Lucky numbers for `sign` on the local date.
pub fn lucky_numbers_today(sign: ZodiacSign) -> LuckyNumbers {
    mage_base::lucky_numbers(today(), sign)
}

/// Moon phase at the current UTC instant.
pub fn moon_phase_now() -> MoonPhase {
    mage_base::moon_phase(now_utc())
}

/// Timeline from `start` with "today" at the local date.
pub fn timeline_until_now(start: NaiveDate) -> Result<Vec<TimelineEntry>, AstromageError> {
    Ok(mage_base::timeline(start, today())?)
}

/// Counters from `start` up to the local wall clock.
pub fn timeline_stats_now(start: NaiveDate) -> TimelineStats {
    mage_base::timeline_stats(start, Local::now().naive_local())
}
