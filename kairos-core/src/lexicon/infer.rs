//! Pattern inference from sample expressions.

use super::syntax::Syntax;
use crate::duration::Field;

/// Guesses the pattern of `expression` in a single left-to-right scan.
///
/// `+`/`-` become the sign token and digits become the token of the current
/// field. Any other character is copied as a literal and moves the cursor
/// to the next field (hours, minutes, seconds, milliseconds). Once past
/// milliseconds, digits are copied as literals too.
pub(crate) fn find_pattern(syntax: &Syntax, expression: &str) -> String {
    let mut cursor = Some(Field::Hours);
    let mut pattern = String::with_capacity(expression.len());

    for c in expression.chars() {
        match c {
            '+' | '-' => pattern.push(syntax.sign),
            d if d.is_ascii_digit() => pattern.push(cursor.map_or(d, |f| syntax.token(f))),
            literal => {
                pattern.push(literal);
                cursor = cursor.and_then(Field::next);
            }
        }
    }

    tracing::trace!(expression, pattern = %pattern, "inferred pattern");
    pattern
}
