//! Daily lucky numbers from a date-seeded generator.
//!
//! The generator is a small linear congruential generator:
//! `state = (state · 9301 + 49297) mod 233280`, `value = state / 233280`.
//! It carries its state by value, so identical seeds always replay the same
//! sequence and nothing is shared between callers.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::zodiac::ZodiacSign;

const LCG_MULTIPLIER: u64 = 9301;
const LCG_INCREMENT: u64 = 49297;
const LCG_MODULUS: u64 = 233_280;

/// Per-sign seed offset.
const SIGN_SEED_STRIDE: u64 = 777;

/// Number of general lucky numbers drawn.
pub const GENERAL_COUNT: usize = 5;
/// Inclusive upper bound of a general lucky number.
pub const GENERAL_MAX: u32 = 50;
/// Inclusive upper bound of the power number.
pub const POWER_MAX: u32 = 100;

/// Value-carrying linear congruential generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    /// Seeds are reduced modulo 233280; every seed in a residue class
    /// yields the same sequence.
    pub const fn new(seed: u64) -> Self {
        Self {
            state: seed % LCG_MODULUS,
        }
    }

    pub const fn state(self) -> u64 {
        self.state
    }

    /// Next value in [0, 1) and the advanced generator.
    pub const fn next(self) -> (f64, Self) {
        let state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        (state as f64 / LCG_MODULUS as f64, Self { state })
    }

    /// Next integer in `[min, max]` and the advanced generator.
    pub fn next_int(self, min: u32, max: u32) -> (u32, Self) {
        let (v, rng) = self.next();
        let span = f64::from(max - min + 1);
        ((v * span).floor() as u32 + min, rng)
    }
}

/// Whether a lucky hour falls before or after noon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

/// A one-hour lucky window, e.g. `3:00 PM - 3:59 PM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuckyWindow {
    /// Clock hour, 1..=12.
    pub hour: u8,
    pub meridiem: Meridiem,
}

impl Display for LuckyWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let m = self.meridiem.label();
        write!(f, "{h}:00 {m} - {h}:59 {m}", h = self.hour)
    }
}

/// One day's numbers for one sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuckyNumbers {
    pub date: NaiveDate,
    pub sign: ZodiacSign,
    /// Five distinct numbers in [1, 50], ascending.
    pub general: [u8; GENERAL_COUNT],
    /// Power number in [1, 100].
    pub power: u8,
    pub window: LuckyWindow,
}

/// `year·10000 + month·100 + day + signIndex·777`.
pub fn lucky_seed(date: NaiveDate, sign: ZodiacSign) -> u64 {
    let ymd = date.year() as i64 * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day());
    ymd.unsigned_abs() + u64::from(sign.index()) * SIGN_SEED_STRIDE
}

/// Generate the lucky numbers for `sign` on `date`.
pub fn lucky_numbers(date: NaiveDate, sign: ZodiacSign) -> LuckyNumbers {
    let seed = lucky_seed(date, sign);
    let mut rng = SeededRandom::new(seed);

    let mut general = Vec::with_capacity(GENERAL_COUNT);
    while general.len() < GENERAL_COUNT {
        let (n, next) = rng.next_int(1, GENERAL_MAX);
        rng = next;
        if !general.contains(&n) {
            general.push(n);
        }
    }
    general.sort_unstable();

    let (power, rng) = rng.next_int(1, POWER_MAX);
    let (hour, rng) = rng.next_int(1, 12);
    let (half, _) = rng.next_int(0, 1);
    let meridiem = if half == 0 { Meridiem::Am } else { Meridiem::Pm };

    debug!(%date, sign = sign.name(), seed, ?general, power, "lucky numbers");

    let mut picked = [0u8; GENERAL_COUNT];
    for (slot, n) in picked.iter_mut().zip(&general) {
        *slot = *n as u8;
    }
    LuckyNumbers {
        date,
        sign,
        general: picked,
        power: power as u8,
        window: LuckyWindow {
            hour: hour as u8,
            meridiem,
        },
    }
}
