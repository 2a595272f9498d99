//! The `Kairos` lexicon: patterns, validation, parsing and formatting
//!
//! A pattern is a template in which reserved characters stand for parts of
//! a duration:
//!
//! | char | meaning                   |
//! |------|---------------------------|
//! | `#`  | optional sign (`+`/`-`)   |
//! | `h`  | hour digit                |
//! | `m`  | minute digit              |
//! | `s`  | second digit              |
//! | `S`  | millisecond digit         |
//! | `\`  | next character is literal (formatting only) |
//!
//! Everything else is literal. Repeating a field character sets its width:
//! `hh` reads exactly two hour digits and prints at least two.
//!
//! A [`Lexicon`] owns the default pattern together with the validator
//! compiled for it, so unqualified calls never recompile.

mod formatter;
mod infer;
mod parser;
pub mod syntax;
pub mod validator;

use std::borrow::Cow;

pub use syntax::{Element, Syntax};
pub use validator::Validator;

pub(crate) use formatter::render;

use crate::duration::Duration;
use crate::error::{KairosError, Result};

/// Pattern used when none is configured.
pub const DEFAULT_PATTERN: &str = "#hh:mm:ss.SSS";

/// Pattern context: reserved characters, default pattern and its validator.
#[derive(Debug, Clone)]
pub struct Lexicon {
    syntax: Syntax,
    validator: Validator,
}

impl Default for Lexicon {
    fn default() -> Self {
        let syntax = Syntax::default();
        let validator =
            Validator::compile(&syntax, DEFAULT_PATTERN).expect("default pattern compiles");
        Self { syntax, validator }
    }
}

impl Lexicon {
    /// Creates a lexicon with `pattern` as its default.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::InvalidSyntax`] for clashing reserved
    /// characters and [`KairosError::InvalidPattern`] for an empty or
    /// uncompilable pattern.
    pub fn new(syntax: Syntax, pattern: &str) -> Result<Self> {
        syntax.validate()?;
        let validator = compile_default(&syntax, pattern)?;
        Ok(Self { syntax, validator })
    }

    /// Reserved characters in use.
    #[must_use]
    pub const fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// Pattern used when a call does not name one.
    #[must_use]
    pub fn default_pattern(&self) -> &str {
        self.validator.pattern()
    }

    /// Replaces the default pattern and recompiles its validator.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::InvalidPattern`] for an empty or uncompilable
    /// pattern; the previous default stays in place.
    pub fn set_default_pattern(&mut self, pattern: &str) -> Result<()> {
        self.validator = compile_default(&self.syntax, pattern)?;
        tracing::info!(pattern, "default pattern changed");
        Ok(())
    }

    /// Resolves an optional pattern; `None` and `""` mean the default.
    #[must_use]
    pub fn resolve<'a>(&'a self, pattern: Option<&'a str>) -> &'a str {
        pattern
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| self.default_pattern())
    }

    /// Validator for `pattern`: the cached one for the default pattern,
    /// a freshly compiled one otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::InvalidPattern`] if compilation fails.
    pub fn validator(&self, pattern: Option<&str>) -> Result<Cow<'_, Validator>> {
        let pattern = self.resolve(pattern);
        if pattern == self.default_pattern() {
            Ok(Cow::Borrowed(&self.validator))
        } else {
            Validator::compile(&self.syntax, pattern).map(Cow::Owned)
        }
    }

    /// Tests whether `expression` has the shape of `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::InvalidPattern`] if the pattern cannot be compiled.
    pub fn validate(&self, expression: &str, pattern: Option<&str>) -> Result<bool> {
        Ok(self.validator(pattern)?.is_match(expression))
    }

    /// Parses `expression` with `pattern` (or the default).
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::Parse`] if the expression does not validate or
    /// one of its fields cannot be read.
    pub fn parse(&self, expression: &str, pattern: Option<&str>) -> Result<Duration> {
        let pattern = self.resolve(pattern);
        if !self.validate(expression, Some(pattern))? {
            return Err(KairosError::parse(
                expression,
                pattern,
                "expression does not match the pattern",
            ));
        }
        parser::read(&self.syntax, expression, pattern)
    }

    /// Formats `duration` with `pattern` (or the default).
    ///
    /// Hours wider than the pattern's hour field are printed in full when
    /// `allow_overflow` is set and cut to their last digits otherwise.
    #[must_use]
    pub fn format(&self, duration: &Duration, pattern: Option<&str>, allow_overflow: bool) -> String {
        render(&self.syntax, self.resolve(pattern), duration, allow_overflow)
    }

    /// Infers a pattern from the shape of `expression`.
    ///
    /// ```
    /// use kairos_core::Lexicon;
    ///
    /// assert_eq!(Lexicon::default().find_pattern("+10:05:30.123"), "#hh:mm:ss.SSS");
    /// ```
    #[must_use]
    pub fn find_pattern(&self, expression: &str) -> String {
        infer::find_pattern(&self.syntax, expression)
    }
}

fn compile_default(syntax: &Syntax, pattern: &str) -> Result<Validator> {
    if pattern.is_empty() {
        return Err(KairosError::InvalidPattern {
            pattern: String::new(),
            message: "the default pattern cannot be empty".to_string(),
        });
    }
    Validator::compile(syntax, pattern)
}
