//! `calc` command
//!
//! Duration arithmetic on time arguments. Duration results are printed with
//! `--output`, or the default pattern, never truncating hours.

use std::cmp::Ordering;

use kairos_core::{Duration, Field, Kairos};

use crate::cli::args::{CalcCommand, CalcOperation};
use crate::cli::commands::time_arg;
use crate::error::KairosCliError;

/// What a calc operation produced.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Outcome {
    Span(Duration),
    Order(Ordering),
    Millis(i64),
    Total(f64),
}

/// Run a calc operation and print its result.
///
/// # Errors
///
/// Returns an error if an operand cannot be read or the operation rejects
/// its operands.
pub fn run(kairos: &Kairos, cmd: &CalcCommand) -> Result<(), KairosCliError> {
    let outcome = evaluate(kairos, &cmd.operation)?;
    tracing::debug!(?outcome, "calc finished");
    println!("{}", render(kairos, cmd.output.as_deref(), outcome));
    Ok(())
}

fn evaluate(kairos: &Kairos, operation: &CalcOperation) -> Result<Outcome, KairosCliError> {
    let outcome = match operation {
        CalcOperation::Plus(args) => Outcome::Span(kairos.plus(
            time_arg(&args.first),
            time_arg(&args.second),
            None,
        )?),
        CalcOperation::Minus(args) => Outcome::Span(kairos.minus(
            time_arg(&args.first),
            time_arg(&args.second),
            None,
        )?),
        CalcOperation::Multiply(args) => {
            Outcome::Span(kairos.multiply(time_arg(&args.time), args.scalar, None)?)
        }
        CalcOperation::Divide(args) => {
            Outcome::Span(kairos.divide(time_arg(&args.time), args.scalar, None)?)
        }
        CalcOperation::Fraction(args) => Outcome::Span(kairos.fraction(
            time_arg(&args.time),
            args.numerator,
            args.denominator,
            None,
        )?),
        CalcOperation::Interval(args) => Outcome::Span(kairos.interval(
            time_arg(&args.start),
            time_arg(&args.end),
            None,
        )?),
        CalcOperation::Compare(args) => Outcome::Order(kairos.compare(
            time_arg(&args.first),
            time_arg(&args.second),
            None,
        )?),
        CalcOperation::Min(args) => {
            Outcome::Span(kairos.min(args.values.iter().map(|v| time_arg(v)), None)?)
        }
        CalcOperation::Max(args) => {
            Outcome::Span(kairos.max(args.values.iter().map(|v| time_arg(v)), None)?)
        }
        CalcOperation::Convert(args) => {
            let time = time_arg(&args.time);
            match args.unit {
                Field::Hours => Outcome::Total(kairos.to_hours(time, None)?),
                Field::Minutes => Outcome::Total(kairos.to_minutes(time, None)?),
                Field::Seconds => Outcome::Total(kairos.to_seconds(time, None)?),
                Field::Milliseconds => Outcome::Millis(kairos.to_milliseconds(time, None)?),
            }
        }
    };
    Ok(outcome)
}

fn render(kairos: &Kairos, output: Option<&str>, outcome: Outcome) -> String {
    match outcome {
        Outcome::Span(duration) => kairos.format(&duration, output, true),
        Outcome::Order(Ordering::Less) => "-1".to_string(),
        Outcome::Order(Ordering::Equal) => "0".to_string(),
        Outcome::Order(Ordering::Greater) => "1".to_string(),
        Outcome::Millis(millis) => millis.to_string(),
        Outcome::Total(total) => total.to_string(),
    }
}
