//! `format` command
//!
//! Renders a time with a pattern.

use kairos_core::Kairos;

use crate::cli::args::FormatArgs;
use crate::cli::commands::time_arg;
use crate::error::KairosCliError;

/// Print the value rendered with `--output`, or the default pattern.
///
/// # Errors
///
/// Returns an error if the value is an expression that does not fit the
/// default pattern.
pub fn run(kairos: &Kairos, args: &FormatArgs) -> Result<(), KairosCliError> {
    let duration = kairos.wrap(time_arg(&args.value), None)?;
    println!(
        "{}",
        kairos.format(&duration, args.output.as_deref(), !args.no_overflow)
    );
    Ok(())
}
