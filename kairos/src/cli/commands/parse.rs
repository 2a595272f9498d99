//! `parse` command
//!
//! Reads an expression and prints its total milliseconds.

use kairos_core::{Duration, Kairos};
use serde::Serialize;

use crate::cli::args::{OutputFormat, ParseArgs};
use crate::error::KairosCliError;

/// Machine-readable result of `parse --format json`.
#[derive(Debug, Serialize)]
struct ParseReport<'a> {
    expression: &'a str,
    pattern: &'a str,
    milliseconds: i64,
    negative: bool,
    hours: i64,
    minutes: i64,
    seconds: i64,
    millis_of_second: i64,
}

impl<'a> ParseReport<'a> {
    const fn new(expression: &'a str, pattern: &'a str, duration: &Duration) -> Self {
        Self {
            expression,
            pattern,
            milliseconds: duration.to_milliseconds(),
            negative: duration.is_negative(),
            hours: duration.hours(),
            minutes: duration.minutes(),
            seconds: duration.seconds(),
            millis_of_second: duration.milliseconds(),
        }
    }
}

/// Parse the expression with the default pattern, or the inferred one when
/// auto-parse is on.
///
/// # Errors
///
/// Returns an error if the expression does not fit the pattern.
pub fn run(kairos: &Kairos, args: &ParseArgs) -> Result<(), KairosCliError> {
    let pattern = if kairos.auto_parse() {
        kairos.find_pattern(&args.expression)
    } else {
        kairos.default_pattern().to_string()
    };
    let duration = kairos.parse(&args.expression, Some(&pattern))?;

    match args.format {
        OutputFormat::Human => println!("{}", duration.to_milliseconds()),
        OutputFormat::Json => {
            let report = ParseReport::new(&args.expression, &pattern, &duration);
            println!("{}", serde_json::to_string(&report)?);
        }
    }
    Ok(())
}
