//! Core error types for `Kairos`
//!
//! Every fallible library operation returns [`KairosError`]. Nothing is
//! recovered internally: a string that does not fit its pattern, an
//! improper fraction or a reversed interval is always reported to the caller.

use thiserror::Error;

use crate::duration::Duration;

/// Errors raised by the duration engine, the lexicon and the calculator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KairosError {
    /// The expression could not be read with the resolved pattern.
    #[error("cannot parse '{expression}' with pattern '{pattern}': {reason}")]
    Parse {
        /// The rejected time expression
        expression: String,
        /// The pattern it was read against
        pattern: String,
        /// What went wrong
        reason: String,
    },

    /// The pattern could not be compiled into a validator.
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Compiler message
        message: String,
    },

    /// The reserved character set is unusable.
    #[error("invalid syntax: {0}")]
    InvalidSyntax(String),

    /// `fraction` was asked for a numerator larger than its denominator.
    #[error("improper fraction: {numerator}/{denominator}")]
    ImproperFraction {
        /// Fraction numerator
        numerator: f64,
        /// Fraction denominator
        denominator: f64,
    },

    /// `interval` was given a start that comes after its end.
    ///
    /// Both ends are printed with `Duration`'s `Display`, which always uses
    /// the default syntax.
    #[error("interval start {start} is after its end {end}")]
    IntervalOrdering {
        /// Interval start
        start: Duration,
        /// Interval end
        end: Duration,
    },

    /// A duration was divided by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An argument has no meaningful interpretation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl KairosError {
    pub(crate) fn parse(
        expression: &str,
        pattern: &str,
        reason: impl Into<String>,
    ) -> Self {
        Self::Parse {
            expression: expression.to_string(),
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for `Kairos` operations.
pub type Result<T> = std::result::Result<T, KairosError>;
