//! Inputs accepted wherever a time is expected.

use crate::duration::Duration;

/// A time given as milliseconds, as an expression to parse, or as a
/// ready-made [`Duration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeValue {
    /// Signed millisecond count
    Millis(i64),
    /// Text to read with a pattern
    Expression(String),
    /// Existing span, copied
    Duration(Duration),
}

impl From<i64> for TimeValue {
    fn from(millis: i64) -> Self {
        Self::Millis(millis)
    }
}

impl From<i32> for TimeValue {
    fn from(millis: i32) -> Self {
        Self::Millis(i64::from(millis))
    }
}

impl From<u32> for TimeValue {
    fn from(millis: u32) -> Self {
        Self::Millis(i64::from(millis))
    }
}

impl From<&str> for TimeValue {
    fn from(expression: &str) -> Self {
        Self::Expression(expression.to_string())
    }
}

impl From<String> for TimeValue {
    fn from(expression: String) -> Self {
        Self::Expression(expression)
    }
}

impl From<&String> for TimeValue {
    fn from(expression: &String) -> Self {
        Self::Expression(expression.clone())
    }
}

impl From<Duration> for TimeValue {
    fn from(duration: Duration) -> Self {
        Self::Duration(duration)
    }
}

impl From<&Duration> for TimeValue {
    fn from(duration: &Duration) -> Self {
        Self::Duration(*duration)
    }
}
