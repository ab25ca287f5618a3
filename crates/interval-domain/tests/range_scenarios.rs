//! Integration tests for interval-domain
//!
//! These tests exercise the public API with endpoint types other than integers.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use interval_domain::{BoundType, Range, RangeError};
use std::str::FromStr;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn decimal(literal: &str) -> BigDecimal {
    BigDecimal::from_str(literal).unwrap()
}

#[test]
fn test_closed_date_range_display() {
    let within_2020 = Range::closed(date(2020, 1, 1), date(2020, 12, 31)).unwrap();
    assert_eq!(within_2020.to_string(), "[2020-01-01,2020-12-31]");
}

#[test]
fn test_closed_date_range_membership() {
    let season = Range::closed(date(2016, 9, 11), date(2017, 6, 30)).unwrap();
    assert!(season.contains(&date(2016, 11, 11)));
    assert!(season.contains(&date(2017, 6, 30)));
    assert!(!season.contains(&date(2017, 7, 1)));
}

#[test]
fn test_greater_than_date() {
    let after_1900 = Range::greater_than(date(1900, 1, 1));
    assert!(after_1900.contains(&date(2016, 7, 28)));
    assert!(!after_1900.contains(&date(1750, 1, 1)));
    assert_eq!(after_1900.to_string(), "(1900-01-01,+∞)");
}

#[test]
fn test_open_string_range() {
    let text = Range::open("abc".to_string(), "xyz".to_string()).unwrap();
    assert!(text.contains(&"abd".to_string()));
    assert!(!text.contains(&"aaa".to_string()));
    assert_eq!(text.to_string(), "(abc,xyz)");
}

#[test]
fn test_open_decimal_range_uses_exact_comparison() {
    let decimals = Range::open(decimal("1.32432"), decimal("1.324323423423423423423")).unwrap();
    assert!(decimals.contains(&decimal("1.324323423423")));
    assert!(!decimals.contains(&decimal("1.3243234234234234234239999")));
}

#[test]
fn test_decimal_endpoints_equal_after_scaling_are_rejected() {
    let result = Range::closed(decimal("1.50"), decimal("1.5"));
    assert_eq!(result.unwrap_err(), RangeError::InvalidBounds);
}

#[test]
fn test_inverted_date_range_rejected() {
    let result = Range::closed_open(date(2021, 1, 1), date(2020, 1, 1));
    let err = result.unwrap_err();
    assert!(err.to_string().contains("lowerbound > upperbound"));
}

#[test]
fn test_independently_built_ranges_behave_identically() {
    let a = Range::at_most(decimal("2.5"));
    let b = Range::at_most(decimal("2.5"));
    assert_eq!(a, b);
    for probe in ["2.4", "2.5", "2.50", "2.51"] {
        assert_eq!(a.contains(&decimal(probe)), b.contains(&decimal(probe)));
    }
    assert_eq!(a.bound_type(), BoundType::AtMost);
}

#[test]
fn test_ranges_are_shareable_across_threads() {
    let range = std::sync::Arc::new(Range::closed(0, 100).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let range = std::sync::Arc::clone(&range);
            std::thread::spawn(move || range.contains(&(i * 40)))
        })
        .collect();
    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, true, true, false]);
}
