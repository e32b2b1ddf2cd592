//! Moon phase from lunar age.
//!
//! The lunar age is the time since a reference new moon (2000-01-06T18:14 UTC)
//! modulo the mean synodic month. Illumination follows
//! `round((1 - cos(2π · age / synodic)) · 50)`.

use std::f64::consts::TAU;
use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use mage_time::day_number;
use tracing::debug;

use crate::moon_phase_data::{PHASE_PROFILES, SIGN_INSIGHTS};
use crate::util::round_half_up;
use crate::zodiac::ZodiacSign;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_67;

/// Day number of the reference new moon, 2000-01-06T18:14.
pub const REFERENCE_NEW_MOON_DAY: f64 = 730_125.0 + (18.0 * 60.0 + 14.0) / 1440.0;

/// Upper lunar-age bound (exclusive) of each phase except the last.
const PHASE_BREAKPOINTS: [f64; 7] = [
    1.84566, 7.38264, 9.22830, 14.76528, 16.61094, 22.14792, 23.99358,
];

/// The 8 named phases in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All phases in cycle order.
pub const ALL_PHASES: [MoonPhaseName; 8] = [
    MoonPhaseName::NewMoon,
    MoonPhaseName::WaxingCrescent,
    MoonPhaseName::FirstQuarter,
    MoonPhaseName::WaxingGibbous,
    MoonPhaseName::FullMoon,
    MoonPhaseName::WaningGibbous,
    MoonPhaseName::LastQuarter,
    MoonPhaseName::WaningCrescent,
];

impl MoonPhaseName {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// 0-based position in the cycle (New Moon = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn description(self) -> &'static str {
        PHASE_PROFILES[self.index() as usize].0
    }

    pub const fn energy(self) -> &'static str {
        PHASE_PROFILES[self.index() as usize].1
    }
}

impl Display for MoonPhaseName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Advice for one sign under one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoonInsight {
    pub advice: &'static str,
    pub focus: &'static str,
}

/// Look up the advice/focus pair for `sign` during `phase`.
pub const fn moon_insight(sign: ZodiacSign, phase: MoonPhaseName) -> MoonInsight {
    let (advice, focus) = SIGN_INSIGHTS[sign.index() as usize][phase.index() as usize];
    MoonInsight { advice, focus }
}

/// Phase state at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPhase {
    pub phase: MoonPhaseName,
    /// Days since the last new moon, in [0, synodic month).
    pub age_days: f64,
    /// Lit fraction of the disc, 0..=100.
    pub illumination_percent: u8,
    /// `ceil(age_days)`.
    pub lunar_day: u32,
}

impl MoonPhase {
    /// Age rounded to one decimal place, for display.
    pub fn age_rounded(&self) -> f64 {
        round_half_up(self.age_days * 10.0) / 10.0
    }
}

/// Lunar age in days at `instant`, normalised to [0, synodic month).
pub fn lunar_age(instant: NaiveDateTime) -> f64 {
    let days = day_number(instant) - REFERENCE_NEW_MOON_DAY;
    days.rem_euclid(SYNODIC_MONTH_DAYS)
}

/// Illumination percentage for a lunar age.
pub fn illumination(age_days: f64) -> u8 {
    let lit = (1.0 - (TAU * age_days / SYNODIC_MONTH_DAYS).cos()) * 50.0;
    round_half_up(lit).clamp(0.0, 100.0) as u8
}

/// Phase name for a lunar age (a step function over the cycle).
pub fn phase_from_age(age_days: f64) -> MoonPhaseName {
    PHASE_BREAKPOINTS
        .iter()
        .position(|bound| age_days < *bound)
        .map(|i| ALL_PHASES[i])
        .unwrap_or(MoonPhaseName::WaningCrescent)
}

/// Phase state from a lunar age.
pub fn phase_for_age(age_days: f64) -> MoonPhase {
    MoonPhase {
        phase: phase_from_age(age_days),
        age_days,
        illumination_percent: illumination(age_days),
        lunar_day: age_days.ceil() as u32,
    }
}

/// Phase state at `instant` (UTC wall clock).
pub fn moon_phase(instant: NaiveDateTime) -> MoonPhase {
    let age = lunar_age(instant);
    let phase = phase_for_age(age);
    debug!(%instant, age, phase = phase.phase.name(), "moon phase");
    phase
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn reference_instant_is_new() {
        let t = NaiveDate::from_ymd_opt(2000, 1, 6)
            .unwrap()
            .and_hms_opt(18, 14, 0)
            .unwrap();
        let p = moon_phase(t);
        assert!(p.age_days.abs() < 1e-6 || (SYNODIC_MONTH_DAYS - p.age_days) < 1e-6);
        assert_eq!(p.illumination_percent, 0);
    }

    #[test]
    fn illumination_extremes() {
        assert_eq!(illumination(0.0), 0);
        assert_eq!(illumination(SYNODIC_MONTH_DAYS / 2.0), 100);
        assert_eq!(illumination(SYNODIC_MONTH_DAYS / 4.0), 50);
    }

    #[test]
    fn phases_step_in_order() {
        let mut seen = Vec::new();
        let mut age = 0.0;
        while age < SYNODIC_MONTH_DAYS {
            let p = phase_from_age(age);
            if seen.last() != Some(&p) {
                seen.push(p);
            }
            age += 0.01;
        }
        assert_eq!(seen, ALL_PHASES.to_vec());
    }

    #[test]
    fn breakpoints_are_exclusive_upper_bounds() {
        assert_eq!(phase_from_age(1.84565), MoonPhaseName::NewMoon);
        assert_eq!(phase_from_age(1.84566), MoonPhaseName::WaxingCrescent);
        assert_eq!(phase_from_age(23.99358), MoonPhaseName::WaningCrescent);
    }

    #[test]
    fn age_before_reference_is_non_negative() {
        let t = NaiveDate::from_ymd_opt(1999, 12, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let age = lunar_age(t);
        assert!((0.0..SYNODIC_MONTH_DAYS).contains(&age));
    }

    #[test]
    fn profile_and_insight_lookup() {
        assert_eq!(MoonPhaseName::FullMoon.energy(), "Culmination, Clarity, Release");
        let i = moon_insight(ZodiacSign::Aries, MoonPhaseName::NewMoon);
        assert_eq!(i.focus, "Courage, Initiative, Self-Discovery");
    }
}
