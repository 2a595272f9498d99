//! Duration engine
//!
//! A [`Duration`] wraps a signed millisecond count. Hours, minutes, seconds
//! and milliseconds are views computed from that count, never stored.
//!
//! Two families of readers exist and must not be confused:
//! - field getters ([`Duration::hours`], [`Duration::minutes`], ...) divide
//!   and **truncate toward zero** at every step, so a negative span reports
//!   negative fields (`-01:30` is `-1` hour and `-30` minutes);
//! - totals ([`Duration::to_hours`], [`Duration::to_minutes`], ...) return
//!   the continuous magnitude as `f64`, without truncation.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::{KairosError, Result};
use crate::lexicon::{self, DEFAULT_PATTERN, Syntax};

/// Milliseconds in one second.
pub const SECOND: i64 = 1_000;

/// Milliseconds in one minute.
pub const MINUTE: i64 = 60 * SECOND;

/// Milliseconds in one hour.
pub const HOUR: i64 = 60 * MINUTE;

/// A component of a duration, from largest to smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Whole hours
    Hours,
    /// Minutes within the hour
    Minutes,
    /// Seconds within the minute
    Seconds,
    /// Milliseconds within the second
    Milliseconds,
}

impl Field {
    /// All fields, largest first.
    pub const ALL: [Self; 4] = [Self::Hours, Self::Minutes, Self::Seconds, Self::Milliseconds];

    /// Size of one unit of this field in milliseconds.
    #[must_use]
    pub const fn unit(self) -> i64 {
        match self {
            Self::Hours => HOUR,
            Self::Minutes => MINUTE,
            Self::Seconds => SECOND,
            Self::Milliseconds => 1,
        }
    }

    /// The next smaller field, or `None` after milliseconds.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Hours => Some(Self::Minutes),
            Self::Minutes => Some(Self::Seconds),
            Self::Seconds => Some(Self::Milliseconds),
            Self::Milliseconds => None,
        }
    }

    /// Position in [`Field::ALL`].
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Hours => 0,
            Self::Minutes => 1,
            Self::Seconds => 2,
            Self::Milliseconds => 3,
        }
    }

    /// Modulus that isolates this field from the larger ones.
    const fn span(self) -> Option<i64> {
        match self {
            Self::Hours => None,
            Self::Minutes => Some(HOUR),
            Self::Seconds => Some(MINUTE),
            Self::Milliseconds => Some(SECOND),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Milliseconds => "milliseconds",
        };
        f.write_str(name)
    }
}

/// A signed span of time stored as whole milliseconds.
///
/// `Duration` is a `Copy` value: wrapping or passing one around never
/// aliases. Mutators work in place and return `&mut Self` so calls chain:
///
/// ```
/// use kairos_core::Duration;
///
/// let mut d = Duration::ZERO;
/// d.add_hours(1).add_minutes(30);
/// assert_eq!(d.to_minutes(), 90.0);
/// ```
///
/// Integer arithmetic saturates at the `i64` bounds. Scaling by a real
/// factor truncates the result toward zero.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    millis: i64,
}

impl Duration {
    /// The empty span.
    pub const ZERO: Self = Self { millis: 0 };

    /// Creates a duration from a signed millisecond count.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Creates a positive duration from its field values.
    #[must_use]
    pub fn from_hms(hours: i64, minutes: i64, seconds: i64, milliseconds: i64) -> Self {
        let mut d = Self::ZERO;
        d.add_hours(hours)
            .add_minutes(minutes)
            .add_seconds(seconds)
            .add_milliseconds(milliseconds);
        d
    }

    // ------------------------------------------------------------------
    // Field views (truncated toward zero)
    // ------------------------------------------------------------------

    /// Value of one field, truncated toward zero.
    #[must_use]
    pub const fn field(&self, field: Field) -> i64 {
        let rest = match field.span() {
            Some(span) => self.millis % span,
            None => self.millis,
        };
        rest / field.unit()
    }

    /// Whole hours.
    #[must_use]
    pub const fn hours(&self) -> i64 {
        self.field(Field::Hours)
    }

    /// Minutes left after removing whole hours.
    #[must_use]
    pub const fn minutes(&self) -> i64 {
        self.field(Field::Minutes)
    }

    /// Seconds left after removing whole minutes.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.field(Field::Seconds)
    }

    /// Milliseconds left after removing whole seconds.
    #[must_use]
    pub const fn milliseconds(&self) -> i64 {
        self.field(Field::Milliseconds)
    }

    // ------------------------------------------------------------------
    // Field mutators
    // ------------------------------------------------------------------

    /// Adds `amount` units of `field`.
    pub const fn add_field(&mut self, field: Field, amount: i64) -> &mut Self {
        self.millis = self.millis.saturating_add(amount.saturating_mul(field.unit()));
        self
    }

    /// Removes `amount` units of `field`.
    pub const fn remove_field(&mut self, field: Field, amount: i64) -> &mut Self {
        self.millis = self.millis.saturating_sub(amount.saturating_mul(field.unit()));
        self
    }

    /// Replaces the contribution of `field`, keeping every other field.
    pub const fn set_field(&mut self, field: Field, value: i64) -> &mut Self {
        let current = self.field(field);
        self.remove_field(field, current).add_field(field, value)
    }

    /// Replaces the hours field.
    pub const fn set_hours(&mut self, hours: i64) -> &mut Self {
        self.set_field(Field::Hours, hours)
    }

    /// Replaces the minutes field.
    pub const fn set_minutes(&mut self, minutes: i64) -> &mut Self {
        self.set_field(Field::Minutes, minutes)
    }

    /// Replaces the seconds field.
    pub const fn set_seconds(&mut self, seconds: i64) -> &mut Self {
        self.set_field(Field::Seconds, seconds)
    }

    /// Replaces the milliseconds field.
    pub const fn set_milliseconds(&mut self, milliseconds: i64) -> &mut Self {
        self.set_field(Field::Milliseconds, milliseconds)
    }

    /// Adds whole hours.
    pub const fn add_hours(&mut self, hours: i64) -> &mut Self {
        self.add_field(Field::Hours, hours)
    }

    /// Adds whole minutes.
    pub const fn add_minutes(&mut self, minutes: i64) -> &mut Self {
        self.add_field(Field::Minutes, minutes)
    }

    /// Adds whole seconds.
    pub const fn add_seconds(&mut self, seconds: i64) -> &mut Self {
        self.add_field(Field::Seconds, seconds)
    }

    /// Adds milliseconds.
    pub const fn add_milliseconds(&mut self, milliseconds: i64) -> &mut Self {
        self.add_field(Field::Milliseconds, milliseconds)
    }

    /// Removes whole hours.
    pub const fn remove_hours(&mut self, hours: i64) -> &mut Self {
        self.remove_field(Field::Hours, hours)
    }

    /// Removes whole minutes.
    pub const fn remove_minutes(&mut self, minutes: i64) -> &mut Self {
        self.remove_field(Field::Minutes, minutes)
    }

    /// Removes whole seconds.
    pub const fn remove_seconds(&mut self, seconds: i64) -> &mut Self {
        self.remove_field(Field::Seconds, seconds)
    }

    /// Removes milliseconds.
    pub const fn remove_milliseconds(&mut self, milliseconds: i64) -> &mut Self {
        self.remove_field(Field::Milliseconds, milliseconds)
    }

    // ------------------------------------------------------------------
    // Totals (continuous)
    // ------------------------------------------------------------------

    /// Total span in hours, fractional part included.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_hours(&self) -> f64 {
        self.millis as f64 / HOUR as f64
    }

    /// Total span in minutes, fractional part included.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_minutes(&self) -> f64 {
        self.millis as f64 / MINUTE as f64
    }

    /// Total span in seconds, fractional part included.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_seconds(&self) -> f64 {
        self.millis as f64 / SECOND as f64
    }

    /// Total span in milliseconds.
    #[must_use]
    pub const fn to_milliseconds(&self) -> i64 {
        self.millis
    }

    /// Returns `true` for spans below zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.millis < 0
    }

    /// `-1`, `0` or `1` following the sign of the span.
    #[must_use]
    pub const fn signum(&self) -> i64 {
        self.millis.signum()
    }

    // ------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------

    /// Drops the sign.
    pub const fn to_absolute(&mut self) -> &mut Self {
        self.millis = self.millis.saturating_abs();
        self
    }

    /// Adds another span.
    pub fn plus(&mut self, addend: impl Into<Self>) -> &mut Self {
        self.millis = self.millis.saturating_add(addend.into().millis);
        self
    }

    /// Subtracts another span.
    pub fn minus(&mut self, subtrahend: impl Into<Self>) -> &mut Self {
        self.millis = self.millis.saturating_sub(subtrahend.into().millis);
        self
    }

    /// Scales the span by `factor`, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::InvalidArgument`] when `factor` is NaN or
    /// infinite.
    pub fn multiply(&mut self, factor: f64) -> Result<&mut Self> {
        let factor = check_finite("factor", factor)?;
        self.millis = scale(self.millis, factor, 1.0);
        Ok(self)
    }

    /// Divides the span by `divisor`, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::InvalidArgument`] when `divisor` is NaN or
    /// infinite and [`KairosError::DivisionByZero`] when it is zero.
    pub fn divide(&mut self, divisor: f64) -> Result<&mut Self> {
        let divisor = check_finite("divisor", divisor)?;
        if divisor == 0.0 {
            return Err(KairosError::DivisionByZero);
        }
        self.millis = scale(self.millis, 1.0, divisor);
        Ok(self)
    }

    /// Scales the span by `numerator / denominator` in a single step,
    /// truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::InvalidArgument`] when either operand is NaN
    /// or infinite and [`KairosError::DivisionByZero`] when `denominator`
    /// is zero.
    pub fn scale_by(&mut self, numerator: f64, denominator: f64) -> Result<&mut Self> {
        let numerator = check_finite("numerator", numerator)?;
        let denominator = check_finite("denominator", denominator)?;
        if denominator == 0.0 {
            return Err(KairosError::DivisionByZero);
        }
        self.millis = scale(self.millis, numerator, denominator);
        Ok(self)
    }

    /// Compares total milliseconds with another span.
    #[must_use]
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.millis.cmp(&other.millis)
    }

    /// Renders the span with `pattern` using the default reserved characters.
    ///
    /// When `allow_overflow` is set, hours wider than the pattern's hour
    /// field are printed in full instead of being cut to their last digits.
    ///
    /// A custom [`Syntax`] is never consulted here, nor by `Display` or the
    /// error messages built on it; use [`Lexicon::format`](crate::Lexicon::format)
    /// to render with one.
    #[must_use]
    pub fn to_pattern_string(&self, pattern: &str, allow_overflow: bool) -> String {
        lexicon::render(&Syntax::default(), pattern, self, allow_overflow)
    }
}

/// Largest magnitude an `f64` holds with every integer below it exact.
const EXACT_F64_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Rejects NaN and infinite scalars.
pub(crate) fn check_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(KairosError::InvalidArgument(format!(
            "{name} must be a finite number, got {value}"
        )))
    }
}

/// `millis * numerator / denominator`, truncated toward zero and saturated
/// at the `i64` bounds.
///
/// Integral operands stay in integer arithmetic so totals above 2^53 ms
/// keep every digit. Other operands go through `f64`, which is exact only
/// up to 2^53 ms (about 285 000 years).
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn scale(millis: i64, numerator: f64, denominator: f64) -> i64 {
    if let (Some(n), Some(d)) = (integral(numerator), integral(denominator)) {
        let exact = i128::from(millis) * i128::from(n) / i128::from(d);
        return i64::try_from(exact).unwrap_or(if exact < 0 { i64::MIN } else { i64::MAX });
    }
    (millis as f64 * numerator / denominator).trunc() as i64
}

/// `value` as an integer when it is one and converts without loss.
#[allow(clippy::cast_possible_truncation)]
fn integral(value: f64) -> Option<i64> {
    (value.fract() == 0.0 && value.abs() <= EXACT_F64_LIMIT).then(|| value as i64)
}

impl From<i64> for Duration {
    fn from(millis: i64) -> Self {
        Self::from_millis(millis)
    }
}

impl From<&Duration> for Duration {
    fn from(duration: &Duration) -> Self {
        *duration
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.plus(rhs);
        self
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self.minus(rhs);
        self
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        self.plus(rhs);
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Self) {
        self.minus(rhs);
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_millis(self.millis.saturating_neg())
    }
}

impl fmt::Display for Duration {
    /// Default pattern and default reserved characters, with overflowing
    /// hours kept so nothing is lost. A [`Lexicon`](crate::Lexicon) with a
    /// custom syntax does not affect this output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pattern_string(DEFAULT_PATTERN, true))
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({self}, {}ms)", self.millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Duration {
        Duration::from_hms(1, 30, 30, 123)
    }

    #[test]
    fn test_field_getters() {
        let d = sample();
        assert_eq!(d.hours(), 1);
        assert_eq!(d.minutes(), 30);
        assert_eq!(d.seconds(), 30);
        assert_eq!(d.milliseconds(), 123);
        assert_eq!(d.to_milliseconds(), 5_430_123);
    }

    #[test]
    fn test_totals_are_continuous() {
        let d = sample();
        assert!((d.to_seconds() - 5430.123).abs() < 1e-9);
        assert!((d.to_minutes() - 90.502_05).abs() < 1e-9);
        assert!((d.to_hours() - 1.508_367_5).abs() < 1e-9);
    }

    #[test]
    fn test_negative_fields_truncate_toward_zero() {
        let d = Duration::from_millis(-(HOUR + 30 * MINUTE + 5 * SECOND + 7));
        assert_eq!(d.hours(), -1);
        assert_eq!(d.minutes(), -30);
        assert_eq!(d.seconds(), -5);
        assert_eq!(d.milliseconds(), -7);
    }

    #[test]
    fn test_add_carries_into_larger_fields() {
        let mut d = sample();
        d.add_milliseconds(900);
        assert_eq!(d.milliseconds(), 23);
        assert_eq!(d.seconds(), 31);

        let mut d = sample();
        d.add_minutes(31);
        assert_eq!(d.minutes(), 1);
        assert_eq!(d.hours(), 2);
    }

    #[test]
    fn test_remove_borrows_from_larger_fields() {
        let mut d = sample();
        d.remove_milliseconds(900);
        assert_eq!(d.milliseconds(), 223);
        assert_eq!(d.seconds(), 29);

        let mut d = sample();
        d.remove_minutes(31);
        assert_eq!(d.seconds(), 30);
        assert_eq!(d.minutes(), 59);
        assert_eq!(d.hours(), 0);
    }

    #[test]
    fn test_setters_replace_one_field() {
        let mut d = sample();
        d.set_minutes(45);
        assert_eq!(d.hours(), 1);
        assert_eq!(d.minutes(), 45);
        assert_eq!(d.seconds(), 30);
        assert_eq!(d.milliseconds(), 123);

        d.set_hours(5).set_seconds(0).set_milliseconds(321);
        assert_eq!(d, Duration::from_hms(5, 45, 0, 321));
    }

    #[test]
    fn test_to_absolute() {
        let mut d = Duration::from_millis(-1500);
        d.to_absolute();
        assert_eq!(d.to_milliseconds(), 1500);

        let mut d = Duration::from_millis(i64::MIN);
        d.to_absolute();
        assert_eq!(d.to_milliseconds(), i64::MAX);
    }

    #[test]
    fn test_multiply_and_divide_truncate() {
        let mut d = sample();
        d.multiply(2.0).unwrap();
        assert_eq!(d, Duration::from_hms(3, 1, 0, 246));

        let mut d = sample();
        d.multiply(-0.5).unwrap();
        assert_eq!(d.to_milliseconds(), -2_715_061);

        let mut d = sample();
        d.divide(2.0).unwrap();
        assert_eq!(d.to_milliseconds(), 2_715_061);
    }

    #[test]
    fn test_scale_by_thirds_is_exact() {
        let mut d = Duration::from_hms(1, 0, 0, 0);
        d.scale_by(2.0, 3.0).unwrap();
        assert_eq!(d, Duration::from_hms(0, 40, 0, 0));
    }

    #[test]
    fn test_divide_by_zero_is_rejected() {
        let mut d = sample();
        assert_eq!(d.divide(0.0).unwrap_err(), KairosError::DivisionByZero);
        assert_eq!(d, sample());
    }

    #[test]
    fn test_non_finite_scalars_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut d = sample();
            assert!(matches!(d.multiply(bad), Err(KairosError::InvalidArgument(_))));
            assert!(matches!(d.divide(bad), Err(KairosError::InvalidArgument(_))));
            assert!(matches!(d.scale_by(bad, 2.0), Err(KairosError::InvalidArgument(_))));
            assert!(matches!(d.scale_by(1.0, bad), Err(KairosError::InvalidArgument(_))));
            assert_eq!(d, sample());
        }
    }

    #[test]
    fn test_integral_scaling_keeps_large_totals_exact() {
        let big = 9_007_199_254_740_993;
        let mut d = Duration::from_millis(big);
        d.multiply(1.0).unwrap();
        assert_eq!(d.to_milliseconds(), big);

        d.divide(1.0).unwrap();
        assert_eq!(d.to_milliseconds(), big);

        d.scale_by(3.0, 3.0).unwrap();
        assert_eq!(d.to_milliseconds(), big);

        let mut d = Duration::from_millis(i64::MAX);
        d.multiply(2.0).unwrap();
        assert_eq!(d.to_milliseconds(), i64::MAX);
        d.multiply(-1.0).unwrap().multiply(2.0).unwrap();
        assert_eq!(d.to_milliseconds(), i64::MIN);
    }

    #[test]
    fn test_pattern_string_uses_default_syntax() {
        let d = Duration::from_hms(10, 30, 0, 0);
        assert_eq!(d.to_pattern_string("HH'MM", false), "HH'MM");
        assert_eq!(d.to_pattern_string("hh'mm", false), "10'30");
    }

    #[test]
    fn test_plus_minus_accept_millis() {
        let mut d = Duration::ZERO;
        d.plus(1000).minus(250);
        assert_eq!(d.to_milliseconds(), 750);
        d.minus(sample());
        assert_eq!(d.to_milliseconds(), 750 - 5_430_123);
    }

    #[test]
    fn test_compare_to() {
        let a = Duration::from_millis(1);
        let b = Duration::from_millis(2);
        assert_eq!(a.compare_to(&b), Ordering::Less);
        assert_eq!(b.compare_to(&a), Ordering::Greater);
        assert_eq!(a.compare_to(&a), Ordering::Equal);
    }

    #[test]
    fn test_operators() {
        let a = Duration::from_millis(1500);
        let b = Duration::from_millis(500);
        assert_eq!((a + b).to_milliseconds(), 2000);
        assert_eq!((a - b).to_milliseconds(), 1000);
        assert_eq!((-a).to_milliseconds(), -1500);

        let mut c = a;
        c += b;
        c -= Duration::from_millis(2000);
        assert_eq!(c, Duration::ZERO);
    }

    #[test]
    fn test_saturation() {
        let mut d = Duration::from_millis(i64::MAX);
        d.add_hours(1);
        assert_eq!(d.to_milliseconds(), i64::MAX);
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(sample().to_string(), "+01:30:30.123");
        assert_eq!(Duration::from_millis(-1).to_string(), "-00:00:00.001");
        assert_eq!(
            format!("{:?}", Duration::from_millis(1)),
            "Duration(+00:00:00.001, 1ms)"
        );
    }

    #[test]
    fn test_field_order() {
        assert_eq!(Field::Hours.next(), Some(Field::Minutes));
        assert_eq!(Field::Milliseconds.next(), None);
        assert_eq!(Field::ALL.iter().map(|f| f.unit()).sum::<i64>(), HOUR + MINUTE + SECOND + 1);
    }
}
