//! Pattern-driven reading of time expressions.

use super::syntax::{Element, Syntax};
use crate::duration::{Duration, Field};
use crate::error::{KairosError, Result};

/// Reads `expression` against `pattern`, position by position.
///
/// Callers validate the expression first, but the validator is anchored only
/// for signed patterns, so an unsigned pattern may have matched further into
/// the expression. Reading always starts at the first character. Each field
/// position appends one character to that field's digit buffer; literal
/// positions consume one character without comparing it, so a mismatched
/// separator is read through. The sign token consumes a character only when
/// it is `+` or `-`; otherwise it is skipped and the same expression
/// character is read by the next pattern position.
///
/// Fields are combined with checked arithmetic and a total beyond the `i64`
/// millisecond range is a parse error.
pub(crate) fn read(syntax: &Syntax, expression: &str, pattern: &str) -> Result<Duration> {
    let chars: Vec<char> = expression.chars().collect();
    let mut cursor = 0;
    let mut negative = false;
    let mut digits: [String; 4] = Default::default();

    for element in syntax.elements(pattern) {
        match element {
            Element::Sign => {
                if let Some(&c @ ('+' | '-')) = chars.get(cursor) {
                    negative = c == '-';
                    cursor += 1;
                }
            }
            Element::Field(field) => {
                let c = chars.get(cursor).ok_or_else(|| {
                    KairosError::parse(
                        expression,
                        pattern,
                        format!("expression ends inside the {field} field"),
                    )
                })?;
                digits[field.index()].push(*c);
                cursor += 1;
            }
            Element::Literal(_) => cursor += 1,
        }
    }

    let mut total: i64 = 0;
    for field in Field::ALL {
        let amount = field_value(&digits[field.index()], field)
            .map_err(|reason| KairosError::parse(expression, pattern, reason))?;
        total = amount
            .checked_mul(field.unit())
            .and_then(|millis| total.checked_add(millis))
            .ok_or_else(|| {
                KairosError::parse(expression, pattern, format!("{field} value is out of range"))
            })?;
    }
    let mut duration = Duration::from_millis(total);
    if negative {
        duration = -duration;
    }

    tracing::debug!(expression, pattern, millis = duration.to_milliseconds(), "parsed expression");
    Ok(duration)
}

/// Integer value of a digit buffer; an empty buffer is zero.
fn field_value(digits: &str, field: Field) -> std::result::Result<i64, String> {
    if digits.is_empty() {
        return Ok(0);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("'{digits}' is not a valid {field} value"));
    }
    digits
        .parse()
        .map_err(|_| format!("{field} value '{digits}' is out of range"))
}
