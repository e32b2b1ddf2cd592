//! Relationship timeline ordering and milestone coverage.

use chrono::NaiveDate;
use mage_base::{MilestoneKind, TimelineEntry, milestones, timeline, timeline_stats};
use pretty_assertions::assert_eq;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn titles(start: NaiveDate, today: NaiveDate, pick: fn(MilestoneKind) -> bool) -> Vec<String> {
    milestones(start, today)
        .unwrap()
        .into_iter()
        .filter(|m| pick(m.kind))
        .map(|m| m.title())
        .collect()
}

#[test]
fn one_solar_return_per_year_to_horizon() {
    let got = titles(d(2022, 5, 10), d(2024, 1, 15), |k| {
        matches!(k, MilestoneKind::SolarReturn(_))
    });
    assert_eq!(
        got,
        [
            "1st Solar Return ☀️",
            "2nd Solar Return ☀️",
            "3rd Solar Return ☀️",
            "4th Solar Return ☀️",
        ]
    );
}

#[test]
fn ordinals_reach_eleventh_and_twenty_first() {
    let got = titles(d(2003, 2, 1), d(2024, 1, 15), |k| {
        matches!(k, MilestoneKind::SolarReturn(11 | 21))
    });
    assert_eq!(got, ["11th Solar Return ☀️", "21st Solar Return ☀️"]);
}

#[test]
fn mercury_every_four_months_from_three() {
    let ms = milestones(d(2025, 1, 31), d(2025, 2, 1)).unwrap();
    let dates: Vec<_> = ms
        .iter()
        .filter(|m| matches!(m.kind, MilestoneKind::MercuryRetrograde(_)))
        .map(|m| m.date)
        .take(3)
        .collect();
    assert_eq!(dates, [d(2025, 4, 30), d(2025, 8, 31), d(2025, 12, 31)]);
}

#[test]
fn thousand_days_only_within_horizon() {
    let has_thousand = |today| {
        milestones(d(2024, 1, 1), today)
            .unwrap()
            .iter()
            .any(|m| m.kind == MilestoneKind::ThousandDays)
    };
    // Day 1000 is 2026-09-27; the horizon is two years past today.
    assert!(!has_thousand(d(2024, 1, 1)));
    assert!(!has_thousand(d(2024, 9, 26)));
    assert!(has_thousand(d(2024, 9, 28)));
}

#[test]
fn milestone_on_horizon_day_is_kept() {
    let ms = milestones(d(2024, 1, 1), d(2024, 9, 27)).unwrap();
    let last = ms.last().unwrap();
    assert_eq!(last.kind, MilestoneKind::ThousandDays);
    assert_eq!(last.date, d(2026, 9, 27));
}

#[test]
fn milestones_sorted_and_today_between_past_and_future() {
    let today = d(2024, 1, 15);
    let entries = timeline(d(2022, 5, 10), today).unwrap();
    let today_at = entries
        .iter()
        .position(|e| *e == TimelineEntry::Today)
        .unwrap();
    assert_eq!(entries.iter().filter(|e| **e == TimelineEntry::Today).count(), 1);

    let dates: Vec<_> = entries
        .iter()
        .filter_map(|e| match e {
            TimelineEntry::Milestone { milestone, .. } => Some(milestone.date),
            TimelineEntry::Today => None,
        })
        .collect();
    assert!(dates.windows(2).all(|w| w[0] <= w[1]));

    for (i, e) in entries.iter().enumerate() {
        if let TimelineEntry::Milestone { milestone, future } = e {
            assert_eq!(*future, milestone.date > today);
            assert_eq!(*future, i > today_at, "{:?}", milestone);
        }
    }
}

#[test]
fn stats_for_known_span() {
    let s = timeline_stats(d(2022, 5, 10), d(2024, 5, 10).and_hms_opt(0, 0, 0).unwrap());
    assert_eq!(s.days, 731);
    assert_eq!(s.moons, 24);
    assert_eq!(s.seasons, 24);
    assert_eq!(s.retrogrades, 6);
}
