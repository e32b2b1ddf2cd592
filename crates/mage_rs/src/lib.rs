//! Convenience wrapper for the astromage calculators.
//!
//! Provides a global compatibility matrix and "today"-based functions that
//! read the clock for you, so callers only pass the inputs a person would
//! type in.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use mage_rs::*;
//!
//! init(42).expect("matrix init");
//! let scores = compatibility(ZodiacSign::Leo, ZodiacSign::Aries).unwrap();
//! println!("love {}", scores.love);
//!
//! let moon = moon_phase_now();
//! println!("{} ({}% lit)", moon.phase, moon.illumination_percent);
//! ```

pub mod convenience;
pub mod error;
pub mod global;

pub use convenience::{
    biorhythm_today, clock_seed, compatibility, compatibility_matrix, lucky_numbers_today,
    moon_phase_now, now_utc, timeline_stats_now, timeline_until_now, today,
};
pub use error::AstromageError;
pub use global::{init, is_initialized};

// Re-export the calculator types so callers only need `use mage_rs::*`.
pub use mage_base::{
    BiorhythmReading, Category, CompatibilityMatrix, CompatibilityScores, Cycle, CycleLevel,
    GeoLocation, LoveVariant, LuckyNumbers, MageError, MoonPhase, MoonPhaseName, TimelineEntry,
    TimelineStats, ZodiacSign,
};
