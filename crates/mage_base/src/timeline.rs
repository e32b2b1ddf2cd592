//! Relationship timeline: recurring milestones projected from a start date.
//!
//! The horizon is two years past "today". Milestones are generated in a fixed
//! order and then stably sorted by date, so ties keep generation order.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use mage_time::{add_days, add_months, anniversary, ensure_not_future, fractional_days};
use tracing::debug;

use crate::error::MageError;

/// Years past today that milestones are projected.
pub const HORIZON_YEARS: u32 = 2;
/// First Mercury milestone, months after the start.
pub const MERCURY_FIRST_MONTHS: u32 = 3;
/// Months between Mercury milestones.
pub const MERCURY_STEP_MONTHS: u32 = 4;
/// Days between Venus returns.
pub const VENUS_STEP_DAYS: u64 = 225;

const FULL_MOON_DAYS: u64 = 14;
const HUNDRED_DAYS: u64 = 100;
const THOUSAND_DAYS: u64 = 1000;

/// What a milestone commemorates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MilestoneKind {
    Beginning,
    SolarReturn(u32),
    MercuryRetrograde(u32),
    VenusReturn(u32),
    ThousandDays,
    FirstFullMoon,
    HundredDays,
}

impl MilestoneKind {
    pub fn title(self) -> String {
        match self {
            Self::Beginning => "The Beginning ✨".to_string(),
            Self::SolarReturn(n) => format!("{} Solar Return ☀️", ordinal(n)),
            Self::MercuryRetrograde(n) => format!("{} Mercury Retrograde Survival ☿️", ordinal(n)),
            Self::VenusReturn(n) => format!("{} Venus Return ♀️", ordinal(n)),
            Self::ThousandDays => "1000 Days of Love 🪐".to_string(),
            Self::FirstFullMoon => "First Full Moon Together 🌕".to_string(),
            Self::HundredDays => "100 Days Together 💯".to_string(),
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Beginning => "The stars aligned and your journey began.",
            Self::SolarReturn(_) => {
                "Your relationship completes another orbit around the Sun. A time for renewal and celebration."
            }
            Self::MercuryRetrograde(_) => {
                "Communication might have been tricky, but you made it through!"
            }
            Self::VenusReturn(_) => {
                "A renewed cycle of love and affection. A great time for romance."
            }
            Self::ThousandDays => "A significant milestone of durability and commitment.",
            Self::FirstFullMoon => "The first peak of emotional energy in your relationship.",
            Self::HundredDays => "Your first triple-digit milestone!",
        }
    }
}

/// One dated milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub date: NaiveDate,
    pub kind: MilestoneKind,
}

impl Milestone {
    pub fn title(&self) -> String {
        self.kind.title()
    }

    pub const fn description(&self) -> &'static str {
        self.kind.description()
    }
}

/// A row of the rendered timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineEntry {
    Milestone { milestone: Milestone, future: bool },
    Today,
}

/// English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st...
pub const fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (1, k) if k != 11 => "st",
        (2, k) if k != 12 => "nd",
        (3, k) if k != 13 => "rd",
        _ => "th",
    }
}

fn ordinal(n: u32) -> String {
    format!("{n}{}", ordinal_suffix(n))
}

/// All milestones for a start date, sorted by date.
///
/// Solar returns cover every year up to the horizon's year; the recurring
/// Mercury and Venus milestones and the 1000-day mark run through the
/// horizon day itself.
pub fn milestones(start: NaiveDate, today: NaiveDate) -> Result<Vec<Milestone>, MageError> {
    let horizon = anniversary(today, today.year() + HORIZON_YEARS as i32)?;
    let mut out = vec![Milestone {
        date: start,
        kind: MilestoneKind::Beginning,
    }];

    for year in start.year() + 1..=horizon.year() {
        let count = (year - start.year()) as u32;
        out.push(Milestone {
            date: anniversary(start, year)?,
            kind: MilestoneKind::SolarReturn(count),
        });
    }

    for count in 1.. {
        let months = MERCURY_FIRST_MONTHS + MERCURY_STEP_MONTHS * (count - 1);
        let date = add_months(start, months)?;
        if date > horizon {
            break;
        }
        out.push(Milestone {
            date,
            kind: MilestoneKind::MercuryRetrograde(count),
        });
    }

    for count in 1.. {
        let date = add_days(start, VENUS_STEP_DAYS * u64::from(count))?;
        if date > horizon {
            break;
        }
        out.push(Milestone {
            date,
            kind: MilestoneKind::VenusReturn(count),
        });
    }

    let thousand = add_days(start, THOUSAND_DAYS)?;
    if thousand <= horizon {
        out.push(Milestone {
            date: thousand,
            kind: MilestoneKind::ThousandDays,
        });
    }

    out.push(Milestone {
        date: add_days(start, FULL_MOON_DAYS)?,
        kind: MilestoneKind::FirstFullMoon,
    });
    out.push(Milestone {
        date: add_days(start, HUNDRED_DAYS)?,
        kind: MilestoneKind::HundredDays,
    });

    out.sort_by_key(|m| m.date);
    debug!(%start, %horizon, count = out.len(), "timeline milestones");
    Ok(out)
}

/// Sorted milestones with the `Today` marker placed before the first
/// future milestone, or last when everything is past.
///
/// Rejects a start date after `today`.
pub fn timeline(start: NaiveDate, today: NaiveDate) -> Result<Vec<TimelineEntry>, MageError> {
    ensure_not_future(start, today)?;
    let all = milestones(start, today)?;
    let mut entries = Vec::with_capacity(all.len() + 1);
    let mut marked = false;
    for milestone in all {
        let future = milestone.date > today;
        if future && !marked {
            entries.push(TimelineEntry::Today);
            marked = true;
        }
        entries.push(TimelineEntry::Milestone { milestone, future });
    }
    if !marked {
        entries.push(TimelineEntry::Today);
    }
    Ok(entries)
}

/// Headline counters for a relationship's age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineStats {
    pub days: u64,
    pub moons: u64,
    pub seasons: u64,
    pub retrogrades: u64,
}

impl Display for TimelineStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} days, {} moons, {} zodiac seasons, {} retrogrades",
            self.days, self.moons, self.seasons, self.retrogrades
        )
    }
}

/// `days = ceil(|now - start|)`; the rest are approximate cycle counts.
pub fn timeline_stats(start: NaiveDate, now: NaiveDateTime) -> TimelineStats {
    let start = start.and_time(chrono::NaiveTime::MIN);
    let days = fractional_days(start, now).abs().ceil() as u64;
    TimelineStats {
        days,
        moons: (days as f64 / 29.5).floor() as u64,
        seasons: (days as f64 / 30.4).floor() as u64,
        retrogrades: days / 120,
    }
}
