//! Calculator facade.
//!
//! [`Kairos`] holds the configuration that the historical API kept in
//! module-level globals (default pattern, cached validator, auto-parse) and
//! exposes every operation on raw inputs. Each operation coerces its inputs
//! with [`Kairos::wrap`] and returns a [`Duration`]; format it explicitly
//! with [`Kairos::format`].

use std::cmp::Ordering;

use crate::duration::{Duration, check_finite};
use crate::error::{KairosError, Result};
use crate::lexicon::{Lexicon, Validator};
use crate::settings::Settings;
use crate::value::TimeValue;

/// Context object for parsing, formatting and duration arithmetic.
#[derive(Debug, Clone, Default)]
pub struct Kairos {
    lexicon: Lexicon,
    auto_parse: bool,
}

impl Kairos {
    /// Creates a context around an existing lexicon.
    #[must_use]
    pub const fn new(lexicon: Lexicon, auto_parse: bool) -> Self {
        Self {
            lexicon,
            auto_parse,
        }
    }

    /// Builds a context from settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings do not validate.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let lexicon = Lexicon::new(settings.syntax, &settings.pattern)?;
        Ok(Self::new(lexicon, settings.auto_parse))
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// The underlying lexicon.
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Pattern used when a call names none.
    #[must_use]
    pub fn default_pattern(&self) -> &str {
        self.lexicon.default_pattern()
    }

    /// Replaces the default pattern.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::InvalidPattern`] for an empty or uncompilable pattern.
    pub fn set_default_pattern(&mut self, pattern: &str) -> Result<()> {
        self.lexicon.set_default_pattern(pattern)
    }

    /// Whether string inputs without an explicit pattern have their
    /// pattern inferred.
    #[must_use]
    pub const fn auto_parse(&self) -> bool {
        self.auto_parse
    }

    /// Turns pattern inference for string inputs on or off.
    pub fn set_auto_parse(&mut self, enabled: bool) {
        self.auto_parse = enabled;
        tracing::info!(enabled, "auto-parse changed");
    }

    /// Current settings, suitable for serialization.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings {
            pattern: self.default_pattern().to_string(),
            auto_parse: self.auto_parse,
            syntax: *self.lexicon.syntax(),
        }
    }

    // ------------------------------------------------------------------
    // Lexicon shortcuts
    // ------------------------------------------------------------------

    /// See [`Lexicon::validator`].
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::InvalidPattern`] if compilation fails.
    pub fn validator(&self, pattern: Option<&str>) -> Result<std::borrow::Cow<'_, Validator>> {
        self.lexicon.validator(pattern)
    }

    /// See [`Lexicon::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::InvalidPattern`] if compilation fails.
    pub fn validate(&self, expression: &str, pattern: Option<&str>) -> Result<bool> {
        self.lexicon.validate(expression, pattern)
    }

    /// See [`Lexicon::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::Parse`] if the expression does not fit.
    pub fn parse(&self, expression: &str, pattern: Option<&str>) -> Result<Duration> {
        self.lexicon.parse(expression, pattern)
    }

    /// See [`Lexicon::format`].
    #[must_use]
    pub fn format(&self, duration: &Duration, pattern: Option<&str>, allow_overflow: bool) -> String {
        self.lexicon.format(duration, pattern, allow_overflow)
    }

    /// See [`Lexicon::find_pattern`].
    #[must_use]
    pub fn find_pattern(&self, expression: &str) -> String {
        self.lexicon.find_pattern(expression)
    }

    // ------------------------------------------------------------------
    // Coercion
    // ------------------------------------------------------------------

    /// Turns any accepted input into a [`Duration`].
    ///
    /// Strings are read with `pattern` when given. Otherwise, with
    /// auto-parse on, the pattern is inferred from the string itself, and
    /// with it off the default pattern is used. An empty string is zero.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::Parse`] if a string does not fit its pattern.
    pub fn wrap(&self, value: impl Into<TimeValue>, pattern: Option<&str>) -> Result<Duration> {
        match value.into() {
            TimeValue::Millis(millis) => Ok(Duration::from_millis(millis)),
            TimeValue::Duration(duration) => Ok(duration),
            TimeValue::Expression(expression) if expression.is_empty() => Ok(Duration::ZERO),
            TimeValue::Expression(expression) => match pattern.filter(|p| !p.is_empty()) {
                Some(pattern) => self.parse(&expression, Some(pattern)),
                None if self.auto_parse => {
                    let inferred = self.find_pattern(&expression);
                    self.parse(&expression, Some(&inferred))
                }
                None => self.parse(&expression, None),
            },
        }
    }

    // ------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------

    /// `augend + addend`.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::Parse`] if an input cannot be read.
    pub fn plus(
        &self,
        augend: impl Into<TimeValue>,
        addend: impl Into<TimeValue>,
        pattern: Option<&str>,
    ) -> Result<Duration> {
        let mut total = self.wrap(augend, pattern)?;
        total.plus(self.wrap(addend, pattern)?);
        Ok(total)
    }

    /// `minuend - subtrahend`.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::Parse`] if an input cannot be read.
    pub fn minus(
        &self,
        minuend: impl Into<TimeValue>,
        subtrahend: impl Into<TimeValue>,
        pattern: Option<&str>,
    ) -> Result<Duration> {
        let mut rest = self.wrap(minuend, pattern)?;
        rest.minus(self.wrap(subtrahend, pattern)?);
        Ok(rest)
    }

    /// `time * factor`, truncated toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::InvalidArgument`] for a NaN or infinite
    /// factor and [`KairosError::Parse`] if the input cannot be read.
    pub fn multiply(&self, time: impl Into<TimeValue>, factor: f64, pattern: Option<&str>) -> Result<Duration> {
        let mut product = self.wrap(time, pattern)?;
        product.multiply(factor)?;
        Ok(product)
    }

    /// `time / divisor`, truncated toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::DivisionByZero`] for a zero divisor,
    /// [`KairosError::InvalidArgument`] for a NaN or infinite one and
    /// [`KairosError::Parse`] if the input cannot be read.
    pub fn divide(&self, time: impl Into<TimeValue>, divisor: f64, pattern: Option<&str>) -> Result<Duration> {
        let mut quotient = self.wrap(time, pattern)?;
        quotient.divide(divisor)?;
        Ok(quotient)
    }

    /// `time * numerator / denominator` for a proper fraction.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::InvalidArgument`] when either operand is NaN
    /// or infinite and [`KairosError::ImproperFraction`] when `numerator`
    /// exceeds `denominator`, both checked before anything is parsed;
    /// [`KairosError::DivisionByZero`] for a zero denominator and
    /// [`KairosError::Parse`] if the input cannot be read.
    pub fn fraction(
        &self,
        time: impl Into<TimeValue>,
        numerator: f64,
        denominator: f64,
        pattern: Option<&str>,
    ) -> Result<Duration> {
        let numerator = check_finite("numerator", numerator)?;
        let denominator = check_finite("denominator", denominator)?;
        if numerator > denominator {
            return Err(KairosError::ImproperFraction {
                numerator,
                denominator,
            });
        }
        let mut part = self.wrap(time, pattern)?;
        part.scale_by(numerator, denominator)?;
        Ok(part)
    }

    /// Time elapsed from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::IntervalOrdering`] when `start` comes after
    /// `end` and [`KairosError::Parse`] if an input cannot be read.
    pub fn interval(
        &self,
        start: impl Into<TimeValue>,
        end: impl Into<TimeValue>,
        pattern: Option<&str>,
    ) -> Result<Duration> {
        let start = self.wrap(start, pattern)?;
        let mut end = self.wrap(end, pattern)?;
        if start > end {
            return Err(KairosError::IntervalOrdering { start, end });
        }
        end.minus(start);
        Ok(end)
    }

    /// Total milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::Parse`] if the input cannot be read.
    pub fn to_milliseconds(&self, time: impl Into<TimeValue>, pattern: Option<&str>) -> Result<i64> {
        Ok(self.wrap(time, pattern)?.to_milliseconds())
    }

    /// Total seconds, fractional part included.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::Parse`] if the input cannot be read.
    pub fn to_seconds(&self, time: impl Into<TimeValue>, pattern: Option<&str>) -> Result<f64> {
        Ok(self.wrap(time, pattern)?.to_seconds())
    }

    /// Total minutes, fractional part included.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::Parse`] if the input cannot be read.
    pub fn to_minutes(&self, time: impl Into<TimeValue>, pattern: Option<&str>) -> Result<f64> {
        Ok(self.wrap(time, pattern)?.to_minutes())
    }

    /// Total hours, fractional part included.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::Parse`] if the input cannot be read.
    pub fn to_hours(&self, time: impl Into<TimeValue>, pattern: Option<&str>) -> Result<f64> {
        Ok(self.wrap(time, pattern)?.to_hours())
    }

    /// Orders two times by their total milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::Parse`] if an input cannot be read.
    pub fn compare(
        &self,
        a: impl Into<TimeValue>,
        b: impl Into<TimeValue>,
        pattern: Option<&str>,
    ) -> Result<Ordering> {
        let a = self.wrap(a, pattern)?;
        let b = self.wrap(b, pattern)?;
        Ok(a.compare_to(&b))
    }

    /// Smallest of `values`.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::InvalidArgument`] for an empty list and
    /// [`KairosError::Parse`] if an input cannot be read.
    pub fn min<I>(&self, values: I, pattern: Option<&str>) -> Result<Duration>
    where
        I: IntoIterator,
        I::Item: Into<TimeValue>,
    {
        self.pick(values, pattern, |best, candidate| candidate <= best)
    }

    /// Largest of `values`.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::InvalidArgument`] for an empty list and
    /// [`KairosError::Parse`] if an input cannot be read.
    pub fn max<I>(&self, values: I, pattern: Option<&str>) -> Result<Duration>
    where
        I: IntoIterator,
        I::Item: Into<TimeValue>,
    {
        self.pick(values, pattern, |best, candidate| candidate >= best)
    }

    /// Folds `values`, replacing the running pick whenever `replace` holds.
    fn pick<I>(
        &self,
        values: I,
        pattern: Option<&str>,
        replace: impl Fn(&Duration, &Duration) -> bool,
    ) -> Result<Duration>
    where
        I: IntoIterator,
        I::Item: Into<TimeValue>,
    {
        let mut best: Option<Duration> = None;
        for value in values {
            let candidate = self.wrap(value, pattern)?;
            best = match best {
                Some(current) if !replace(&current, &candidate) => Some(current),
                _ => Some(candidate),
            };
        }
        best.ok_or_else(|| KairosError::InvalidArgument("at least one value is required".to_string()))
    }
}
