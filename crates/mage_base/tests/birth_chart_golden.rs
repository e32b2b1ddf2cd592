//! Golden values for the Sun/Moon/Rising approximations.

use chrono::NaiveDate;
use mage_base::{
    GeoLocation, LocationCandidate, MageError, Placement, StaticGazetteer, ZodiacSign,
    birth_chart, birth_chart_from_input, resolve_location,
};
use pretty_assertions::assert_eq;

fn new_york() -> GeoLocation {
    GeoLocation::new(40.7128, -74.006).unwrap()
}

#[test]
fn new_york_june_1990() {
    let moment = NaiveDate::from_ymd_opt(1990, 6, 15)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();
    let chart = birth_chart(moment, &new_york());

    assert_eq!(chart.sun.sign, ZodiacSign::Gemini);
    assert!((chart.sun.longitude - (60.0 + 25.0 / 31.0 * 30.0)).abs() < 1e-9);

    assert_eq!(chart.moon.sign, ZodiacSign::Gemini);
    assert!((chart.moon.longitude - 75.549_450_5).abs() < 1e-4);

    assert_eq!(chart.rising.sign, ZodiacSign::Virgo);
    assert!((chart.rising.longitude - 175.949_791_8).abs() < 1e-4);
}

#[test]
fn chart_from_text_input() {
    let chart = birth_chart_from_input("1990-06-15", "14:30", Some(&new_york())).unwrap();
    assert_eq!(chart.placement(Placement::Rising).sign, ZodiacSign::Virgo);
    assert_eq!(
        Placement::Moon.reading(chart.moon.sign),
        "You process emotions intellectually and verbally."
    );
}

#[test]
fn unparseable_date_rejected() {
    let err = birth_chart_from_input("15/06/1990", "14:30", Some(&new_york())).unwrap_err();
    assert!(matches!(err, MageError::Time(_)));
}

#[test]
fn gazetteer_feeds_the_chart() {
    let places = StaticGazetteer::new(vec![
        LocationCandidate {
            display_name: "London, United Kingdom".into(),
            location: GeoLocation::new(51.5074, -0.1278).unwrap(),
        },
        LocationCandidate {
            display_name: "New York, United States".into(),
            location: new_york(),
        },
    ]);
    let found = resolve_location(&places, "new york").unwrap();
    let chart = birth_chart_from_input("1990-06-15", "14:30", Some(&found.location)).unwrap();
    assert_eq!(chart.rising.sign, ZodiacSign::Virgo);

    assert_eq!(
        resolve_location(&places, "Paris"),
        Err(MageError::LocationNotFound("Paris".into()))
    );
    assert!(matches!(
        resolve_location(&places, "NY"),
        Err(MageError::MissingInput(_))
    ));
}
