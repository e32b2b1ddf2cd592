//! Integration tests for civil date parsing and stepping.

use mage_time::{
    NaiveDate, TimeError, add_days, add_months, anniversary, days_between, ensure_not_future,
    parse_date,
};
use rstest::rstest;

#[rstest]
#[case("2024-02-29", 2024, 2, 29)]
#[case("1999-12-31", 1999, 12, 31)]
#[case("0001-01-01", 1, 1, 1)]
fn accepts_valid_dates(#[case] input: &str, #[case] y: i32, #[case] m: u32, #[case] d: u32) {
    assert_eq!(parse_date(input).unwrap(), NaiveDate::from_ymd_opt(y, m, d).unwrap());
}

#[rstest]
#[case("2024-13-01")]
#[case("2024-00-10")]
#[case("2021-02-29")]
#[case("yesterday")]
fn rejects_invalid_dates(#[case] input: &str) {
    assert!(matches!(parse_date(input), Err(TimeError::InvalidDate(_))));
}

#[test]
fn future_birth_date_error_names_both_days() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let birth = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let err = ensure_not_future(birth, today).unwrap_err();
    assert_eq!(err.to_string(), "date 2024-06-01 is in the future (today is 2024-01-01)");
}

#[test]
fn stepping_is_consistent_with_deltas() {
    let start = NaiveDate::from_ymd_opt(2022, 5, 10).unwrap();
    let later = add_days(start, 225).unwrap();
    assert_eq!(days_between(start, later), 225);

    let quarter = add_months(start, 3).unwrap();
    assert_eq!(quarter, NaiveDate::from_ymd_opt(2022, 8, 10).unwrap());

    let second = anniversary(start, 2024).unwrap();
    assert_eq!(days_between(start, second), 731);
}
