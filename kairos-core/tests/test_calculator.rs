use std::cmp::Ordering;

use kairos_core::{Duration, Kairos, KairosError, Lexicon, TimeValue};

fn fmt(kairos: &Kairos, d: &Duration) -> String {
    kairos.format(d, None, false)
}

// ============================================================================
// Calculator operations on default-pattern expressions
// ============================================================================

#[test]
fn plus_two_expressions() {
    let kairos = Kairos::default();
    let total = kairos.plus("01:00:00.000", "01:30:35.100", None).unwrap();
    assert_eq!(fmt(&kairos, &total), "+02:30:35.100");
}

#[test]
fn minus_two_expressions() {
    let kairos = Kairos::default();
    let rest = kairos.minus("01:30:35.100", "01:15:00.000", None).unwrap();
    assert_eq!(fmt(&kairos, &rest), "+00:15:35.100");
}

#[test]
fn minus_below_zero() {
    let kairos = Kairos::default();
    let rest = kairos.minus("01:00:00.000", "01:30:00.000", None).unwrap();
    assert_eq!(fmt(&kairos, &rest), "-00:30:00.000");
}

#[test]
fn multiply_by_two() {
    let kairos = Kairos::default();
    let product = kairos.multiply("01:30:35.100", 2.0, None).unwrap();
    assert_eq!(fmt(&kairos, &product), "+03:01:10.200");
}

#[test]
fn divide_by_two() {
    let kairos = Kairos::default();
    let quotient = kairos.divide("01:30:35.100", 2.0, None).unwrap();
    assert_eq!(fmt(&kairos, &quotient), "+00:45:17.550");
}

#[test]
fn divide_by_zero_errors() {
    let kairos = Kairos::default();
    assert_eq!(
        kairos.divide("01:30:35.100", 0.0, None).unwrap_err(),
        KairosError::DivisionByZero
    );
}

#[test]
fn fraction_two_thirds() {
    let kairos = Kairos::default();
    let part = kairos.fraction("01:00:00.000", 2.0, 3.0, None).unwrap();
    assert_eq!(fmt(&kairos, &part), "+00:40:00.000");
}

#[test]
fn improper_fraction_errors() {
    let kairos = Kairos::default();
    let err = kairos.fraction("01:00:00.000", 3.0, 2.0, None).unwrap_err();
    assert!(matches!(err, KairosError::ImproperFraction { .. }));
}

#[test]
fn improper_fraction_checked_before_parsing() {
    let kairos = Kairos::default();
    let err = kairos.fraction("not a time", 3.0, 2.0, None).unwrap_err();
    assert!(matches!(err, KairosError::ImproperFraction { .. }));
}

#[test]
fn interval_between_times() {
    let kairos = Kairos::default();
    let span = kairos.interval("01:00", "02:30", Some("hh:mm")).unwrap();
    assert_eq!(kairos.format(&span, Some("hh:mm"), false), "01:30");
}

#[test]
fn interval_reversed_errors() {
    let kairos = Kairos::default();
    let err = kairos.interval("02:00", "01:00", Some("hh:mm")).unwrap_err();
    assert!(matches!(err, KairosError::IntervalOrdering { .. }));
}

#[test]
fn interval_of_equal_times_is_zero() {
    let kairos = Kairos::default();
    assert_eq!(
        kairos.interval(1000, 1000, None).unwrap(),
        Duration::ZERO
    );
}

#[test]
fn conversions() {
    let kairos = Kairos::default();
    let t = "01:30:35.100";
    assert_eq!(kairos.to_milliseconds(t, None).unwrap(), 5_435_100);
    assert!((kairos.to_seconds(t, None).unwrap() - 5435.1).abs() < 1e-9);
    assert!((kairos.to_minutes(t, None).unwrap() - 90.585).abs() < 1e-9);
    assert!((kairos.to_hours(t, None).unwrap() - 1.509_75).abs() < 1e-9);
}

#[test]
fn compare_orders_by_total() {
    let kairos = Kairos::default();
    assert_eq!(
        kairos.compare("01:00:00.000", "02:00:00.000", None).unwrap(),
        Ordering::Less
    );
    assert_eq!(
        kairos.compare("01:00:00.000", "01:00:00.000", None).unwrap(),
        Ordering::Equal
    );
    assert_eq!(
        kairos.compare("02:00:00.000", "01:00:00.000", None).unwrap(),
        Ordering::Greater
    );
}

#[test]
fn min_with_explicit_pattern() {
    let kairos = Kairos::default();
    let smallest = kairos
        .min(["01:00", "05:00", "00:30", "00:40"], Some("hh:mm"))
        .unwrap();
    assert_eq!(kairos.format(&smallest, Some("hh:mm"), false), "00:30");
}

#[test]
fn max_with_explicit_pattern() {
    let kairos = Kairos::default();
    let largest = kairos
        .max(["01:00", "05:00", "00:30", "00:40"], Some("hh:mm"))
        .unwrap();
    assert_eq!(kairos.format(&largest, Some("hh:mm"), false), "05:00");
}

#[test]
fn min_of_mixed_values() {
    let kairos = Kairos::default();
    let values = vec![
        TimeValue::from("00:00:01.000"),
        TimeValue::from(500_i64),
        TimeValue::from(Duration::from_millis(700)),
    ];
    assert_eq!(kairos.min(values, None).unwrap().to_milliseconds(), 500);
}

#[test]
fn min_of_single_value() {
    let kairos = Kairos::default();
    let only = kairos.min(["01:00"], Some("hh:mm")).unwrap();
    assert_eq!(kairos.format(&only, Some("hh:mm"), false), "01:00");
}

#[test]
fn wrap_bad_expression_errors() {
    let kairos = Kairos::default();
    assert!(matches!(
        kairos.plus("01:00", "01:00:00.000", None),
        Err(KairosError::Parse { .. })
    ));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn changing_default_pattern_changes_parsing() {
    let mut kairos = Kairos::default();
    assert_eq!(kairos.default_pattern(), "#hh:mm:ss.SSS");
    kairos.set_default_pattern("hh:mm").unwrap();
    let total = kairos.plus("01:00", "00:45", None).unwrap();
    assert_eq!(kairos.format(&total, None, false), "01:45");
}

#[test]
fn auto_parse_infers_each_expression() {
    let mut kairos = Kairos::default();
    kairos.set_auto_parse(true);
    let total = kairos.plus("01:00", "00:00:30", None).unwrap();
    assert_eq!(total, Duration::from_hms(1, 0, 30, 0));
}

#[test]
fn lexicon_is_shared_by_calculator() {
    let kairos = Kairos::new(Lexicon::default(), false);
    assert!(kairos.validate("10:00:30.000", None).unwrap());
    assert!(!kairos.validate("10:00:30", None).unwrap());
}
