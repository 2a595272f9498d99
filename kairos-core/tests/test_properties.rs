use kairos_core::{Duration, HOUR, Kairos, KairosError, Lexicon, MINUTE, SECOND};
use proptest::prelude::*;

/// Spans that fit the two hour digits of the default pattern.
fn two_digit_hours() -> impl Strategy<Value = i64> {
    -(100 * HOUR - 1)..(100 * HOUR)
}

proptest! {
    #[test]
    fn default_pattern_round_trip(millis in two_digit_hours()) {
        let lexicon = Lexicon::default();
        let d = Duration::from_millis(millis);
        let text = lexicon.format(&d, None, false);
        prop_assert_eq!(lexicon.parse(&text, None).unwrap(), d);
    }

    #[test]
    fn negation_only_flips_the_sign(millis in 1..(100 * HOUR)) {
        let lexicon = Lexicon::default();
        let positive = lexicon.format(&Duration::from_millis(millis), None, false);
        let negative = lexicon.format(&Duration::from_millis(-millis), None, false);
        prop_assert!(positive.starts_with('+'));
        prop_assert!(negative.starts_with('-'));
        prop_assert_eq!(&positive[1..], &negative[1..]);
    }

    #[test]
    fn fields_recompose_to_total(millis in -1_000_000_000_000_i64..1_000_000_000_000) {
        let d = Duration::from_millis(millis);
        let total = d.hours() * HOUR + d.minutes() * MINUTE + d.seconds() * SECOND + d.milliseconds();
        prop_assert_eq!(total, millis);
        prop_assert!(d.minutes().abs() < 60);
        prop_assert!(d.seconds().abs() < 60);
        prop_assert!(d.milliseconds().abs() < 1000);
    }

    #[test]
    fn plus_matches_integer_addition(a in two_digit_hours(), b in two_digit_hours()) {
        let kairos = Kairos::default();
        let ab = kairos.plus(a, b, None).unwrap();
        let ba = kairos.plus(b, a, None).unwrap();
        prop_assert_eq!(ab, ba);
        prop_assert_eq!(ab.to_milliseconds(), a + b);
    }

    #[test]
    fn minus_undoes_plus(a in two_digit_hours(), b in two_digit_hours()) {
        let kairos = Kairos::default();
        let sum = kairos.plus(a, b, None).unwrap();
        prop_assert_eq!(kairos.minus(sum, b, None).unwrap().to_milliseconds(), a);
    }

    #[test]
    fn improper_fractions_always_rejected(den in 1.0_f64..1000.0, extra in 0.001_f64..1000.0) {
        let kairos = Kairos::default();
        let result = kairos.fraction(HOUR, den + extra, den, None);
        let is_improper = matches!(result, Err(KairosError::ImproperFraction { .. }));
        prop_assert!(is_improper);
    }

    #[test]
    fn proper_fraction_never_grows(millis in 0..(100 * HOUR), num in 0_u32..100, extra in 0_u32..100) {
        let kairos = Kairos::default();
        let den = f64::from(num + extra + 1);
        let part = kairos.fraction(millis, f64::from(num), den, None).unwrap();
        prop_assert!(part.to_milliseconds() <= millis);
        prop_assert!(part.to_milliseconds() >= 0);
    }

    #[test]
    fn inferred_pattern_reads_formatted_text(millis in two_digit_hours()) {
        let lexicon = Lexicon::default();
        let d = Duration::from_millis(millis);
        let text = lexicon.format(&d, None, false);
        let pattern = lexicon.find_pattern(&text);
        prop_assert_eq!(pattern.as_str(), "#hh:mm:ss.SSS");
        prop_assert_eq!(lexicon.parse(&text, Some(&pattern)).unwrap(), d);
    }

    #[test]
    fn validator_accepts_every_formatted_value(millis in two_digit_hours()) {
        let lexicon = Lexicon::default();
        let text = lexicon.format(&Duration::from_millis(millis), None, false);
        prop_assert!(lexicon.validate(&text, None).unwrap());
    }
}
