//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod calc;
pub mod completions;
pub mod format;
pub mod infer;
pub mod parse;
pub mod validate;
pub mod version;

use kairos_core::{Kairos, Settings, TimeValue};

use crate::cli::args::{Cli, Commands};
use crate::config::ConfigLoader;
use crate::error::KairosCliError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the settings cannot be loaded or the command fails.
pub fn dispatch(cli: Cli) -> Result<(), KairosCliError> {
    match &cli.command {
        Commands::Completions(args) => {
            completions::run(args);
            Ok(())
        }
        Commands::Version(args) => version::run(args),
        Commands::Parse(args) => parse::run(&build_context(&cli)?, args),
        Commands::Format(args) => format::run(&build_context(&cli)?, args),
        Commands::Validate(args) => validate::run(&build_context(&cli)?, args),
        Commands::Infer(args) => {
            infer::run(&build_context(&cli)?, args);
            Ok(())
        }
        Commands::Calc(cmd) => calc::run(&build_context(&cli)?, cmd),
    }
}

/// Resolves settings from defaults, the settings file and CLI flags, in
/// increasing precedence.
///
/// # Errors
///
/// Returns an error if the settings file cannot be loaded or the merged
/// settings are rejected.
pub fn resolve_settings(cli: &Cli) -> Result<Settings, KairosCliError> {
    let mut settings = match &cli.config {
        Some(path) => ConfigLoader::with_defaults().load(path)?,
        None => Settings::default(),
    };
    if let Some(pattern) = &cli.pattern {
        settings.pattern.clone_from(pattern);
    }
    if cli.auto_parse {
        settings.auto_parse = true;
    }
    Ok(settings)
}

/// Builds the calculator context for a command.
///
/// # Errors
///
/// See [`resolve_settings`]; also fails if the default pattern is unusable.
pub fn build_context(cli: &Cli) -> Result<Kairos, KairosCliError> {
    let settings = resolve_settings(cli)?;
    tracing::debug!(
        pattern = %settings.pattern,
        auto_parse = settings.auto_parse,
        "resolved settings"
    );
    Ok(Kairos::from_settings(&settings)?)
}

/// Interprets a time argument: `<integer>ms` is a millisecond count,
/// anything else an expression.
#[must_use]
pub fn time_arg(raw: &str) -> TimeValue {
    raw.strip_suffix("ms")
        .and_then(|digits| digits.parse::<i64>().ok())
        .map_or_else(|| TimeValue::from(raw), TimeValue::Millis)
}
