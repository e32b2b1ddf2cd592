//! Biorhythm cycles.
//!
//! Three fixed-period sine waves driven by whole days elapsed since birth:
//! `value = sin(2π · days / L)`, `percentage = round((value + 1) / 2 · 100)`.

use std::f64::consts::TAU;

use chrono::NaiveDate;
use mage_time::{days_between, ensure_not_future};
use tracing::debug;

use crate::error::MageError;
use crate::util::round_half_up;

/// Days shown before the as-of date in a [`wave`].
pub const WAVE_DAYS_BEFORE: i64 = 15;
/// Total samples in a [`wave`] (15 past, today, 14 future).
pub const WAVE_SAMPLES: usize = 30;

/// The three biorhythm cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cycle {
    Physical,
    Emotional,
    Intellectual,
}

/// All cycles in display order.
pub const ALL_CYCLES: [Cycle; 3] = [Cycle::Physical, Cycle::Emotional, Cycle::Intellectual];

impl Cycle {
    /// Cycle length in days.
    pub const fn period_days(self) -> u32 {
        match self {
            Self::Physical => 23,
            Self::Emotional => 28,
            Self::Intellectual => 33,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Emotional => "emotional",
            Self::Intellectual => "intellectual",
        }
    }

    /// Fixed advice text for this cycle at a level.
    pub const fn description(self, level: CycleLevel) -> &'static str {
        match (self, level) {
            (Self::Physical, CycleLevel::High) => {
                "Your physical energy is at its peak! Great day for sports, workouts, and physical challenges."
            }
            (Self::Physical, CycleLevel::Good) => {
                "Above average physical energy. Good time for moderate physical activities."
            }
            (Self::Physical, CycleLevel::Neutral) => {
                "Transitioning phase. Balance activity with rest as your body adjusts."
            }
            (Self::Physical, CycleLevel::Low) => {
                "Recharging phase. Focus on rest, recovery, and gentle activities. Listen to your body."
            }
            (Self::Emotional, CycleLevel::High) => {
                "Emotional peak! Your mood is uplifted, creativity flows, and relationships thrive."
            }
            (Self::Emotional, CycleLevel::Good) => {
                "Positive emotional state. Good time for social connections and creative work."
            }
            (Self::Emotional, CycleLevel::Neutral) => {
                "Emotional balance. Take time to process feelings and maintain equilibrium."
            }
            (Self::Emotional, CycleLevel::Low) => {
                "Recharging emotionally. Practice self-care, introspection, and gentle self-compassion."
            }
            (Self::Intellectual, CycleLevel::High) => {
                "Mental clarity at maximum! Perfect for learning, problem-solving, and analytical tasks."
            }
            (Self::Intellectual, CycleLevel::Good) => {
                "Sharp thinking and good concentration. Ideal for mental work and study."
            }
            (Self::Intellectual, CycleLevel::Neutral) => {
                "Mental transition. Mix challenging tasks with lighter activities."
            }
            (Self::Intellectual, CycleLevel::Low) => {
                "Mental recharge phase. Avoid major decisions. Focus on routine tasks and rest your mind."
            }
        }
    }
}

/// Coarse classification of a cycle percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleLevel {
    High,
    Good,
    Neutral,
    Low,
}

impl CycleLevel {
    /// `>=75` High, `>=50` Good, `>=25` Neutral, else Low.
    pub const fn from_percentage(percentage: u8) -> Self {
        if percentage >= 75 {
            Self::High
        } else if percentage >= 50 {
            Self::Good
        } else if percentage >= 25 {
            Self::Neutral
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Good => "GOOD",
            Self::Neutral => "NEUTRAL",
            Self::Low => "LOW",
        }
    }
}

/// One cycle evaluated at one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleResult {
    /// Raw sine value in [-1, 1].
    pub value: f64,
    /// `round((value + 1) / 2 · 100)`, in [0, 100].
    pub percentage: u8,
}

impl CycleResult {
    pub const fn level(&self) -> CycleLevel {
        CycleLevel::from_percentage(self.percentage)
    }
}

/// All three cycles for one birth date and as-of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiorhythmReading {
    pub birth: NaiveDate,
    pub as_of: NaiveDate,
    pub days_alive: i64,
    pub physical: CycleResult,
    pub emotional: CycleResult,
    pub intellectual: CycleResult,
}

impl BiorhythmReading {
    pub const fn cycle(&self, cycle: Cycle) -> CycleResult {
        match cycle {
            Cycle::Physical => self.physical,
            Cycle::Emotional => self.emotional,
            Cycle::Intellectual => self.intellectual,
        }
    }
}

/// One sample of a plotted cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavePoint {
    /// Day offset from the as-of date.
    pub offset: i64,
    pub value: f64,
}

/// Evaluate one cycle of length `period_days` at `days_alive`.
pub fn cycle_value(days_alive: i64, period_days: u32) -> CycleResult {
    let value = (TAU * days_alive as f64 / f64::from(period_days)).sin();
    let percentage = round_half_up((value + 1.0) / 2.0 * 100.0).clamp(0.0, 100.0) as u8;
    CycleResult { value, percentage }
}

/// Evaluate all cycles for a known day count.
pub fn reading_for_days(birth: NaiveDate, as_of: NaiveDate, days_alive: i64) -> BiorhythmReading {
    BiorhythmReading {
        birth,
        as_of,
        days_alive,
        physical: cycle_value(days_alive, Cycle::Physical.period_days()),
        emotional: cycle_value(days_alive, Cycle::Emotional.period_days()),
        intellectual: cycle_value(days_alive, Cycle::Intellectual.period_days()),
    }
}

/// Compute the biorhythm for `birth` as of `as_of`.
///
/// A birth date after `as_of` is rejected.
pub fn biorhythm(birth: NaiveDate, as_of: NaiveDate) -> Result<BiorhythmReading, MageError> {
    ensure_not_future(birth, as_of)?;
    let days_alive = days_between(birth, as_of);
    debug!(%birth, %as_of, days_alive, "biorhythm");
    Ok(reading_for_days(birth, as_of, days_alive))
}

/// Sample one cycle over the 30 days around the reading's as-of date.
pub fn wave(reading: &BiorhythmReading, cycle: Cycle) -> Vec<WavePoint> {
    (0..WAVE_SAMPLES as i64)
        .map(|i| {
            let offset = i - WAVE_DAYS_BEFORE;
            WavePoint {
                offset,
                value: cycle_value(reading.days_alive + offset, cycle.period_days()).value,
            }
        })
        .collect()
}
