//! Pattern-to-regex compilation.

use regex::Regex;

use super::syntax::{Element, Syntax};
use crate::error::{KairosError, Result};

/// A pattern compiled into a regular expression that checks the shape of
/// time expressions.
///
/// The sign token becomes `^[+-]?`, so the expression is anchored on the
/// left only when the pattern carries a sign. There is never an end anchor:
/// trailing characters after a match are accepted.
#[derive(Debug, Clone)]
pub struct Validator {
    pattern: String,
    regex: Regex,
}

impl Validator {
    /// Compiles `pattern` under `syntax`.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::InvalidPattern`] if the generated expression
    /// is rejected by the regex engine.
    pub fn compile(syntax: &Syntax, pattern: &str) -> Result<Self> {
        let source = to_regex_source(syntax, pattern);
        let regex = Regex::new(&source).map_err(|e| KairosError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(pattern, regex = %source, "compiled pattern validator");
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Returns `true` if `expression` has the shape of the pattern.
    #[must_use]
    pub fn is_match(&self, expression: &str) -> bool {
        self.regex.is_match(expression)
    }

    /// The pattern this validator was compiled from.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The generated regular expression.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

fn to_regex_source(syntax: &Syntax, pattern: &str) -> String {
    let mut source = String::with_capacity(pattern.len() * 5);
    for element in syntax.elements(pattern) {
        match element {
            Element::Sign => source.push_str("^[+-]?"),
            Element::Field(_) => source.push_str("[0-9]"),
            Element::Literal(c) => source.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    source
}
