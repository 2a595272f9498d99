//! Serializable configuration for a [`Kairos`](crate::Kairos) context.

use serde::{Deserialize, Serialize};

use crate::error::{KairosError, Result};
use crate::lexicon::{DEFAULT_PATTERN, Syntax};

/// Default pattern, auto-parse flag and reserved characters.
///
/// Every field is optional when deserializing; missing ones take the
/// defaults (`#hh:mm:ss.SSS`, auto-parse off, default syntax).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Pattern used when a call names none
    pub pattern: String,

    /// Infer the pattern of string inputs instead of using the default
    pub auto_parse: bool,

    /// Reserved characters
    pub syntax: Syntax,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            auto_parse: false,
            syntax: Syntax::default(),
        }
    }
}

impl Settings {
    /// Checks the settings without building a context.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::InvalidPattern`] for an empty pattern and
    /// [`KairosError::InvalidSyntax`] for clashing reserved characters.
    pub fn validate(&self) -> Result<()> {
        if self.pattern.is_empty() {
            return Err(KairosError::InvalidPattern {
                pattern: String::new(),
                message: "the default pattern cannot be empty".to_string(),
            });
        }
        self.syntax.validate()
    }
}
