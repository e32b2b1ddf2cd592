//! Sun, Moon and Rising sign approximation.
//!
//! These are deliberately simple heuristics, not an ephemeris:
//! - Sun: calendar date ranges of the tropical signs.
//! - Moon: linear motion of 360/27.3 deg/day from 330 deg at 2000-01-01T00:00.
//! - Rising: wall-clock hour shifted by longitude and stretched by latitude.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use mage_time::{day_number, days_between, parse_date_time};
use tracing::debug;

use crate::birth_chart_data::{MOON_READINGS, RISING_READINGS, SUN_READINGS};
use crate::error::MageError;
use crate::location::GeoLocation;
use crate::util::normalize_360;
use crate::zodiac::{ZodiacPosition, ZodiacSign, position_from_longitude};

/// Moon longitude at the reference instant, degrees.
pub const MOON_REFERENCE_LONGITUDE: f64 = 330.0;
/// Day number of 2000-01-01T00:00 (see [`mage_time::day_number`]).
pub const MOON_REFERENCE_DAY: f64 = 730_120.0;
/// Sidereal month used for the linear moon model, days.
pub const MOON_PERIOD_DAYS: f64 = 27.3;

/// A sign's calendar range as ((start month, start day), (end month, end day)).
type DateRange = ((u32, u32), (u32, u32));

/// Sun sign date ranges, Capricorn first because it spans the year boundary.
const SUN_RANGES: [(ZodiacSign, DateRange); 12] = [
    (ZodiacSign::Capricorn, ((12, 22), (1, 19))),
    (ZodiacSign::Aquarius, ((1, 20), (2, 18))),
    (ZodiacSign::Pisces, ((2, 19), (3, 20))),
    (ZodiacSign::Aries, ((3, 21), (4, 19))),
    (ZodiacSign::Taurus, ((4, 20), (5, 20))),
    (ZodiacSign::Gemini, ((5, 21), (6, 20))),
    (ZodiacSign::Cancer, ((6, 21), (7, 22))),
    (ZodiacSign::Leo, ((7, 23), (8, 22))),
    (ZodiacSign::Virgo, ((8, 23), (9, 22))),
    (ZodiacSign::Libra, ((9, 23), (10, 22))),
    (ZodiacSign::Scorpio, ((10, 23), (11, 21))),
    (ZodiacSign::Sagittarius, ((11, 22), (12, 21))),
];

/// Which chart point a reading belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    Sun,
    Moon,
    Rising,
}

impl Placement {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Rising => "Rising",
        }
    }

    /// Interpretation text for a sign in this placement.
    pub const fn reading(self, sign: ZodiacSign) -> &'static str {
        let i = sign.index() as usize;
        match self {
            Self::Sun => SUN_READINGS[i],
            Self::Moon => MOON_READINGS[i],
            Self::Rising => RISING_READINGS[i],
        }
    }
}

/// The three computed chart points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthChart {
    pub sun: ZodiacPosition,
    pub moon: ZodiacPosition,
    pub rising: ZodiacPosition,
}

impl BirthChart {
    pub const fn placement(&self, placement: Placement) -> ZodiacPosition {
        match placement {
            Placement::Sun => self.sun,
            Placement::Moon => self.moon,
            Placement::Rising => self.rising,
        }
    }
}

fn range_matches(month: u32, day: u32, range: DateRange) -> bool {
    let ((sm, sd), (em, ed)) = range;
    let at_start = month == sm && day >= sd;
    let at_end = month == em && day <= ed;
    if sm > em {
        // Year-boundary range: anything after the start month or before the end month.
        at_start || at_end || month > sm || month < em
    } else {
        at_start || at_end || (month > sm && month < em)
    }
}

/// Sun sign for a calendar month and day.
pub fn sun_sign_for(month: u32, day: u32) -> ZodiacSign {
    SUN_RANGES
        .iter()
        .find(|(_, range)| range_matches(month, day, *range))
        .map(|(sign, _)| *sign)
        .unwrap_or(ZodiacSign::Aries)
}

/// Concrete start and end dates of the range containing `date`.
fn range_bounds(date: NaiveDate, range: DateRange) -> Option<(NaiveDate, NaiveDate)> {
    let ((sm, sd), (em, ed)) = range;
    let year = date.year();
    let (start_year, end_year) = match (sm > em, date.month() == sm) {
        (false, _) => (year, year),
        (true, true) => (year, year + 1),
        (true, false) => (year - 1, year),
    };
    Some((
        NaiveDate::from_ymd_opt(start_year, sm, sd)?,
        NaiveDate::from_ymd_opt(end_year, em, ed)?,
    ))
}

/// Sun position for a birth date.
///
/// The degree within the sign is the fraction of the sign's date range
/// already elapsed on `date`, scaled to 30 degrees.
pub fn sun_sign(date: NaiveDate) -> ZodiacPosition {
    let (sign, range) = SUN_RANGES
        .iter()
        .copied()
        .find(|(_, range)| range_matches(date.month(), date.day(), *range))
        .unwrap_or(SUN_RANGES[3]);
    let degree = range_bounds(date, range)
        .map(|(start, end)| {
            let span = (days_between(start, end) + 1) as f64;
            days_between(start, date) as f64 / span * 30.0
        })
        .unwrap_or(15.0);
    ZodiacPosition {
        sign,
        longitude: f64::from(sign.index()) * 30.0 + degree,
        degree_in_sign: degree,
    }
}

/// Moon position from the linear lunar-longitude model.
pub fn moon_sign(moment: NaiveDateTime) -> ZodiacPosition {
    let days_since = day_number(moment) - MOON_REFERENCE_DAY;
    let longitude =
        normalize_360(MOON_REFERENCE_LONGITUDE + days_since * (360.0 / MOON_PERIOD_DAYS));
    position_from_longitude(longitude)
}

/// Rising sign from wall-clock time and location.
///
/// `adjusted = (hours + lon/15) mod 24`, `factor = 1 + |lat|/180`,
/// `position = (adjusted · factor · 15) mod 360`.
pub fn rising_sign(moment: NaiveDateTime, location: &GeoLocation) -> ZodiacPosition {
    let time_in_hours = f64::from(moment.hour()) + f64::from(moment.minute()) / 60.0;
    let adjusted = (time_in_hours + location.longitude_deg / 15.0).rem_euclid(24.0);
    let factor = 1.0 + location.latitude_deg.abs() / 180.0;
    position_from_longitude(adjusted * factor * 15.0)
}

/// Compute the full chart for a birth moment and place.
pub fn birth_chart(moment: NaiveDateTime, location: &GeoLocation) -> BirthChart {
    let chart = BirthChart {
        sun: sun_sign(moment.date()),
        moon: moon_sign(moment),
        rising: rising_sign(moment, location),
    };
    debug!(
        %moment,
        sun = chart.sun.sign.name(),
        moon = chart.moon.sign.name(),
        rising = chart.rising.sign.name(),
        "birth chart"
    );
    chart
}

/// Validate raw form input and compute the chart.
///
/// Date and time are both required, and a location must have been chosen.
pub fn birth_chart_from_input(
    date: &str,
    time: &str,
    location: Option<&GeoLocation>,
) -> Result<BirthChart, MageError> {
    let location = location.ok_or(MageError::MissingInput("birth location"))?;
    let moment = parse_date_time(date, time)?;
    Ok(birth_chart(moment, location))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn sun_sign_cusps() {
        assert_eq!(sun_sign_for(3, 20), ZodiacSign::Pisces);
        assert_eq!(sun_sign_for(3, 21), ZodiacSign::Aries);
        assert_eq!(sun_sign_for(12, 21), ZodiacSign::Sagittarius);
        assert_eq!(sun_sign_for(12, 22), ZodiacSign::Capricorn);
        assert_eq!(sun_sign_for(1, 19), ZodiacSign::Capricorn);
        assert_eq!(sun_sign_for(1, 20), ZodiacSign::Aquarius);
    }

    #[test]
    fn every_day_of_leap_year_has_a_sign() {
        let mut date = d(2024, 1, 1);
        while date.year() == 2024 {
            let pos = sun_sign(date);
            assert_eq!(pos.sign, sun_sign_for(date.month(), date.day()));
            assert!((0.0..30.0).contains(&pos.degree_in_sign), "{date}");
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn sun_degree_is_deterministic_and_starts_at_zero() {
        let first = sun_sign(d(1990, 3, 21));
        assert_eq!(first.sign, ZodiacSign::Aries);
        assert_eq!(first.degree_in_sign, 0.0);
        assert_eq!(first.longitude, 0.0);
        assert_eq!(sun_sign(d(1990, 6, 15)), sun_sign(d(1990, 6, 15)));
    }

    #[test]
    fn capricorn_degree_spans_new_year() {
        let dec = sun_sign(d(2023, 12, 31));
        let jan = sun_sign(d(2024, 1, 1));
        assert_eq!(dec.sign, ZodiacSign::Capricorn);
        assert_eq!(jan.sign, ZodiacSign::Capricorn);
        assert!(jan.degree_in_sign > dec.degree_in_sign);
    }

    #[test]
    fn moon_at_reference_is_pisces_330() {
        let m = moon_sign(d(2000, 1, 1).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(m.sign, ZodiacSign::Pisces);
        assert!((m.longitude - 330.0).abs() < 1e-9);
    }

    #[test]
    fn moon_before_reference_normalises() {
        let m = moon_sign(d(1999, 12, 31).and_hms_opt(0, 0, 0).unwrap());
        let expected = 330.0 - 360.0 / 27.3;
        assert!((m.longitude - expected).abs() < 1e-9);
        assert_eq!(m.sign, ZodiacSign::Aquarius);
    }

    #[test]
    fn rising_at_greenwich_equator() {
        let loc = GeoLocation::new(0.0, 0.0).unwrap();
        let r = rising_sign(d(1990, 6, 15).and_hms_opt(6, 0, 0).unwrap(), &loc);
        assert!((r.longitude - 90.0).abs() < 1e-9);
        assert_eq!(r.sign, ZodiacSign::Cancer);
    }

    #[test]
    fn rising_wraps_negative_longitude() {
        let loc = GeoLocation::new(51.5, -120.0).unwrap();
        let r = rising_sign(d(1990, 6, 15).and_hms_opt(1, 0, 0).unwrap(), &loc);
        assert!((r.longitude - 327.958_333_333).abs() < 1e-6);
        assert_eq!(r.sign, ZodiacSign::Aquarius);
    }

    #[test]
    fn input_requires_location() {
        assert_eq!(
            birth_chart_from_input("1990-06-15", "14:30", None),
            Err(MageError::MissingInput("birth location"))
        );
    }

    #[test]
    fn input_requires_time() {
        let loc = GeoLocation::new(0.0, 0.0).unwrap();
        assert!(matches!(
            birth_chart_from_input("1990-06-15", "", Some(&loc)),
            Err(MageError::Time(_))
        ));
    }

    #[test]
    fn readings_per_placement() {
        assert_eq!(
            Placement::Sun.reading(ZodiacSign::Leo),
            "You are creative, passionate, and love the spotlight."
        );
        assert_eq!(
            Placement::Rising.reading(ZodiacSign::Pisces),
            "You seem gentle, dreamy, and adaptable."
        );
    }
}
