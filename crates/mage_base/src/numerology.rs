//! Life-path numerology.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::numerology_data::{DAY_MEANINGS, PROFILES};

/// Numbers that are never reduced further.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Interpretation of one life-path number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumerologyProfile {
    pub number: u32,
    pub title: &'static str,
    pub keywords: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub career: &'static str,
    pub lucky_color: &'static str,
    pub lucky_gem: &'static str,
    pub is_master: bool,
}

/// A weekday with its ruling planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMeaning {
    pub name: &'static str,
    pub ruling_planet: &'static str,
    pub energy: &'static str,
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Sum the digits of `YYYYMMDD`, then keep summing while above 9 unless a
/// master number is reached.
pub fn life_path_number(date: NaiveDate) -> u32 {
    let mut n = digit_sum(date.year().unsigned_abs())
        + digit_sum(date.month())
        + digit_sum(date.day());
    while n > 9 && !MASTER_NUMBERS.contains(&n) {
        n = digit_sum(n);
    }
    n
}

pub fn profile(number: u32) -> Option<&'static NumerologyProfile> {
    PROFILES.iter().find(|p| p.number == number)
}

/// Lucky weekday for a life-path number.
pub fn lucky_day(number: u32) -> Option<(Weekday, &'static DayMeaning)> {
    let day = match number {
        1 => Weekday::Sun,
        2 | 7 | 11 => Weekday::Mon,
        9 => Weekday::Tue,
        3 => Weekday::Wed,
        4 | 22 => Weekday::Thu,
        5 | 6 | 33 => Weekday::Fri,
        8 => Weekday::Sat,
        _ => return None,
    };
    Some((day, &DAY_MEANINGS[day.num_days_from_sunday() as usize]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn reduces_to_single_digit() {
        assert_eq!(life_path_number(d(1990, 6, 15)), 4);
        assert_eq!(life_path_number(d(2000, 2, 29)), 6);
    }

    #[test]
    fn keeps_master_numbers() {
        assert_eq!(life_path_number(d(2009, 9, 9)), 11);
        assert!(profile(11).unwrap().is_master);
    }

    #[test]
    fn every_number_has_profile_and_day() {
        for n in (1..=9).chain(MASTER_NUMBERS) {
            assert_eq!(profile(n).unwrap().number, n);
            assert!(lucky_day(n).is_some(), "{n}");
        }
        assert!(profile(10).is_none());
    }

    #[test]
    fn lucky_day_meaning() {
        let (day, meaning) = lucky_day(8).unwrap();
        assert_eq!(day, Weekday::Sat);
        assert_eq!(meaning.ruling_planet, "Saturn");
        assert_eq!(lucky_day(6).unwrap().1.name, "Friday");
    }
}
