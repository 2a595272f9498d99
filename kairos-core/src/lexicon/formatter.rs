//! Pattern-driven rendering of durations.
//!
//! Rendering happens in two passes. The pattern is first tokenized into
//! [`Element`]s, then every field's digits are split into one slot per
//! field token before the elements are written out left to right.

use std::iter;

use super::syntax::{Element, Syntax};
use crate::duration::{Duration, Field};

/// Renders `duration` with `pattern`.
///
/// Fields print their absolute value; the sign token prints `+` for zero
/// and above, `-` below. A field with fewer digits than tokens is padded
/// with zeros on the left, one with more digits keeps only its last digits
/// unless it is the hour field and `allow_overflow` is set, in which case
/// the leftmost hour token receives all the extra digits.
pub(crate) fn render(
    syntax: &Syntax,
    pattern: &str,
    duration: &Duration,
    allow_overflow: bool,
) -> String {
    let elements = syntax.format_elements(pattern);

    let mut widths = [0_usize; 4];
    for element in &elements {
        if let Element::Field(field) = element {
            widths[field.index()] += 1;
        }
    }

    let mut slots = Field::ALL.map(|field| {
        let digits = duration.field(field).unsigned_abs().to_string();
        let overflow = allow_overflow && field == Field::Hours;
        split_slots(&digits, widths[field.index()], overflow).into_iter()
    });

    let mut out = String::with_capacity(pattern.len() + 4);
    for element in elements {
        match element {
            Element::Sign => out.push(if duration.is_negative() { '-' } else { '+' }),
            Element::Field(field) => {
                if let Some(slot) = slots[field.index()].next() {
                    out.push_str(&slot);
                }
            }
            Element::Literal(c) => out.push(c),
        }
    }

    tracing::trace!(pattern, millis = duration.to_milliseconds(), rendered = %out, "formatted duration");
    out
}

/// Splits `digits` into `width` slots, one per field token, left to right.
fn split_slots(digits: &str, width: usize, overflow: bool) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let len = digits.len();
    if len <= width {
        return iter::repeat_n(String::from("0"), width - len)
            .chain(digits.chars().map(String::from))
            .collect();
    }

    let cut = len - width;
    let mut slots: Vec<String> = digits[cut..].chars().map(String::from).collect();
    if overflow {
        slots[0] = digits[..=cut].to_string();
    }
    slots
}
