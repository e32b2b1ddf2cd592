//! Golden values for the three biorhythm cycles.

use chrono::NaiveDate;
use mage_base::{ALL_CYCLES, Cycle, CycleLevel, MageError, biorhythm, wave};
use rstest::rstest;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[rstest]
#[case(6, 100, 99, 95)]
#[case(7, 97, 100, 99)]
#[case(23, 50, 5, 3)]
fn percentages_by_days_alive(
    #[case] days: u64,
    #[case] physical: u8,
    #[case] emotional: u8,
    #[case] intellectual: u8,
) {
    let as_of = d(2024, 3, 1);
    let birth = as_of - chrono::Days::new(days);
    let r = biorhythm(birth, as_of).unwrap();
    assert_eq!(r.days_alive, days as i64);
    assert_eq!(r.physical.percentage, physical);
    assert_eq!(r.emotional.percentage, emotional);
    assert_eq!(r.intellectual.percentage, intellectual);
}

#[test]
fn born_today_is_midline_everywhere() {
    let r = biorhythm(d(2024, 3, 1), d(2024, 3, 1)).unwrap();
    for c in ALL_CYCLES {
        assert_eq!(r.cycle(c).percentage, 50);
        assert_eq!(r.cycle(c).level(), CycleLevel::Good);
    }
}

#[test]
fn future_birth_rejected() {
    assert!(matches!(
        biorhythm(d(2024, 3, 2), d(2024, 3, 1)),
        Err(MageError::Time(_))
    ));
}

#[test]
fn wave_is_centred_on_as_of() {
    let r = biorhythm(d(1990, 6, 15), d(2024, 3, 1)).unwrap();
    let w = wave(&r, Cycle::Emotional);
    assert_eq!(w.len(), 30);
    assert_eq!(w.first().unwrap().offset, -15);
    assert_eq!(w.last().unwrap().offset, 14);
    let today = w.iter().find(|p| p.offset == 0).unwrap();
    assert_eq!(today.value, r.emotional.value);
}

#[test]
fn descriptions_cover_every_level() {
    for c in ALL_CYCLES {
        for l in [CycleLevel::High, CycleLevel::Good, CycleLevel::Neutral, CycleLevel::Low] {
            assert!(!c.description(l).is_empty());
        }
    }
}
