//! Lighthearted astrology calculators over plain date and text inputs.
//!
//! This crate provides:
//! - Biorhythm cycles (physical 23, emotional 28, intellectual 33 days)
//! - Sun/Moon/Rising approximations and their interpretations
//! - A seeded 12×12 sign compatibility matrix (love, friendship, work)
//! - Two name-based love-score formulas
//! - Date-seeded lucky numbers from a value-carrying LCG
//! - Moon phase, illumination and per-sign phase insights
//! - Relationship timeline milestones and life-path numerology
//!
//! Every calculator is a pure function of its inputs. "Today" is always a
//! parameter; see the `mage_rs` crate for clock-reading wrappers.

pub mod biorhythm;
pub mod birth_chart;
mod birth_chart_data;
pub mod compatibility;
pub mod error;
pub mod location;
pub mod love_score;
pub mod lucky;
pub mod moon_phase;
mod moon_phase_data;
pub mod numerology;
mod numerology_data;
pub mod timeline;
pub mod util;
pub mod zodiac;

pub use biorhythm::{
    ALL_CYCLES, BiorhythmReading, Cycle, CycleLevel, CycleResult, WavePoint, biorhythm,
    cycle_value, reading_for_days, wave,
};
pub use birth_chart::{
    BirthChart, Placement, birth_chart, birth_chart_from_input, moon_sign, rising_sign, sun_sign,
    sun_sign_for,
};
pub use compatibility::{
    ALL_CATEGORIES, Category, CompatibilityMatrix, CompatibilityScores, SELF_SCORES, ScoreClass,
    combined_reading, friendship_verdict,
};
pub use error::MageError;
pub use location::{
    GeoLocation, LocationCandidate, LocationLookup, StaticGazetteer, resolve_location, suggest,
};
pub use love_score::{LoveVariant, crush_score, crush_tip, love_calculator_score};
pub use lucky::{LuckyNumbers, LuckyWindow, Meridiem, SeededRandom, lucky_numbers, lucky_seed};
pub use moon_phase::{
    ALL_PHASES, MoonInsight, MoonPhase, MoonPhaseName, SYNODIC_MONTH_DAYS, illumination,
    lunar_age, moon_insight, moon_phase, phase_for_age, phase_from_age,
};
pub use numerology::{DayMeaning, NumerologyProfile, life_path_number, lucky_day, profile};
pub use timeline::{
    Milestone, MilestoneKind, TimelineEntry, TimelineStats, milestones, ordinal_suffix, timeline,
    timeline_stats,
};
pub use zodiac::{
    ALL_SIGNS, Dms, Element, ZodiacPosition, ZodiacSign, deg_to_dms, position_from_longitude,
    wheel_distance,
};
