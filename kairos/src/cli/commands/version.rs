//! Version information display
//!
//! Prints version and default settings in human or JSON format.

use kairos_core::DEFAULT_PATTERN;
use serde_json::json;

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::error::KairosCliError;

/// Print version information.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(args: &VersionArgs) -> Result<(), KairosCliError> {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    match args.format {
        OutputFormat::Human => {
            println!("{name} {version}");
        }
        OutputFormat::Json => {
            let info = json!({
                "name": name,
                "version": version,
                "default_pattern": DEFAULT_PATTERN,
            });
            println!("{}", serde_json::to_string(&info)?);
        }
    }
    Ok(())
}
