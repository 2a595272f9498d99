//! Reserved characters and pattern tokenization.

use serde::{Deserialize, Serialize};

use crate::duration::Field;
use crate::error::{KairosError, Result};

/// One position of a tokenized pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Optional `+`/`-` marker
    Sign,
    /// One digit of a duration field
    Field(Field),
    /// Character copied verbatim
    Literal(char),
}

/// The reserved characters of the pattern grammar.
///
/// Defaults: `#` sign, `h` hours, `m` minutes, `s` seconds,
/// `S` milliseconds and `\` as the escape character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Syntax {
    /// Optional sign marker
    pub sign: char,
    /// Hour digit
    pub hours: char,
    /// Minute digit
    pub minutes: char,
    /// Second digit
    pub seconds: char,
    /// Millisecond digit
    pub milliseconds: char,
    /// Forces the next character to be literal when formatting
    pub escape: char,
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            sign: '#',
            hours: 'h',
            minutes: 'm',
            seconds: 's',
            milliseconds: 'S',
            escape: '\\',
        }
    }
}

impl Syntax {
    /// Checks that the six reserved characters are pairwise distinct.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::InvalidSyntax`] naming the first clash.
    pub fn validate(&self) -> Result<()> {
        let reserved = [
            ("sign", self.sign),
            ("hours", self.hours),
            ("minutes", self.minutes),
            ("seconds", self.seconds),
            ("milliseconds", self.milliseconds),
            ("escape", self.escape),
        ];
        for (i, (name, c)) in reserved.iter().enumerate() {
            if let Some((other, _)) = reserved[i + 1..].iter().find(|(_, d)| d == c) {
                return Err(KairosError::InvalidSyntax(format!(
                    "'{c}' is used for both {name} and {other}"
                )));
            }
        }
        Ok(())
    }

    /// Pattern character standing for `field`.
    #[must_use]
    pub const fn token(&self, field: Field) -> char {
        match field {
            Field::Hours => self.hours,
            Field::Minutes => self.minutes,
            Field::Seconds => self.seconds,
            Field::Milliseconds => self.milliseconds,
        }
    }

    /// Classifies a single pattern character, ignoring escapes.
    #[must_use]
    pub fn classify(&self, c: char) -> Element {
        if c == self.sign {
            Element::Sign
        } else if let Some(field) = Field::ALL.into_iter().find(|f| self.token(*f) == c) {
            Element::Field(field)
        } else {
            Element::Literal(c)
        }
    }

    /// Tokenizes `pattern` character by character. Escapes are not
    /// interpreted; validation and parsing read patterns this way.
    #[must_use]
    pub fn elements(&self, pattern: &str) -> Vec<Element> {
        pattern.chars().map(|c| self.classify(c)).collect()
    }

    /// Tokenizes `pattern` for formatting, turning every escaped character
    /// into a literal.
    ///
    /// Escapes pair up from the right end of the pattern: in `\\h` the
    /// second backslash escapes the `h` and the first one stays literal.
    /// A lone escape is itself a literal.
    #[must_use]
    pub fn format_elements(&self, pattern: &str) -> Vec<Element> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut elements = Vec::with_capacity(chars.len());
        let mut i = chars.len();
        while i > 0 {
            i -= 1;
            let c = chars[i];
            if i > 0 && chars[i - 1] == self.escape {
                elements.push(Element::Literal(c));
                i -= 1;
            } else {
                elements.push(self.classify(c));
            }
        }
        elements.reverse();
        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_syntax_is_valid() {
        assert!(Syntax::default().validate().is_ok());
    }

    #[test]
    fn test_duplicate_characters_rejected() {
        let syntax = Syntax {
            minutes: 'h',
            ..Syntax::default()
        };
        let err = syntax.validate().unwrap_err();
        assert!(err.to_string().contains("hours and minutes"));
    }

    #[test]
    fn test_elements() {
        let syntax = Syntax::default();
        assert_eq!(
            syntax.elements("#h:S"),
            vec![
                Element::Sign,
                Element::Field(Field::Hours),
                Element::Literal(':'),
                Element::Field(Field::Milliseconds),
            ]
        );
    }

    #[test]
    fn test_elements_ignore_escapes() {
        let syntax = Syntax::default();
        assert_eq!(
            syntax.elements("\\h"),
            vec![Element::Literal('\\'), Element::Field(Field::Hours)]
        );
    }

    #[test]
    fn test_format_elements_escape() {
        let syntax = Syntax::default();
        assert_eq!(
            syntax.format_elements("h\\h"),
            vec![Element::Field(Field::Hours), Element::Literal('h')]
        );
    }

    #[test]
    fn test_format_elements_pair_from_right() {
        let syntax = Syntax::default();
        assert_eq!(
            syntax.format_elements("\\\\h"),
            vec![Element::Literal('\\'), Element::Literal('h')]
        );
        assert_eq!(
            syntax.format_elements("h\\"),
            vec![Element::Field(Field::Hours), Element::Literal('\\')]
        );
    }

    #[test]
    fn test_custom_syntax_classification() {
        let syntax = Syntax {
            hours: 'H',
            sign: '~',
            ..Syntax::default()
        };
        assert_eq!(syntax.classify('H'), Element::Field(Field::Hours));
        assert_eq!(syntax.classify('h'), Element::Literal('h'));
        assert_eq!(syntax.classify('~'), Element::Sign);
    }

    #[test]
    fn test_deserialize_partial() {
        let syntax: Syntax = serde_json::from_str(r#"{"escape": "!"}"#).unwrap();
        assert_eq!(syntax.escape, '!');
        assert_eq!(syntax.hours, 'h');
    }
}
