//! `validate` command

use kairos_core::{Kairos, KairosError};

use crate::cli::args::ValidateArgs;
use crate::error::KairosCliError;

/// Print `valid` or `invalid`; an invalid expression is also reported as a
/// parse error.
///
/// # Errors
///
/// Returns [`KairosError::Parse`] when the expression does not match the
/// default pattern.
pub fn run(kairos: &Kairos, args: &ValidateArgs) -> Result<(), KairosCliError> {
    if kairos.validate(&args.expression, None)? {
        println!("valid");
        return Ok(());
    }
    println!("invalid");
    Err(KairosError::Parse {
        expression: args.expression.clone(),
        pattern: kairos.default_pattern().to_string(),
        reason: "expression does not match the pattern".to_string(),
    }
    .into())
}
