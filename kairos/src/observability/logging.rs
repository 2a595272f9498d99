//! Diagnostics on stderr.
//!
//! Results go to stdout, so every log line is written to stderr where it
//! cannot mix with a printed duration. `-v` flags pick the level unless
//! `KAIROS_LOG_LEVEL` holds a filter of its own.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Environment variable read as an `EnvFilter` directive.
pub const LOG_LEVEL_ENV: &str = "KAIROS_LOG_LEVEL";

/// Shape of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Plain text, colored when the terminal allows it.
    #[default]
    Human,
    /// One JSON object per line.
    Json,
}

/// Level for a `-v` count. Counts past three stay at `trace`.
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Whether log lines get ANSI colors.
///
/// `auto` colors only a terminal, and never when `NO_COLOR` is set.
#[must_use]
pub const fn ansi_enabled(color: ColorChoice, stderr_is_terminal: bool, no_color: bool) -> bool {
    match color {
        ColorChoice::Auto => stderr_is_terminal && !no_color,
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

fn level_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)))
}

/// Installs the global subscriber for one `kairos` run.
///
/// Module targets are shown from `-vv` on. A subscriber that is already
/// installed is left in place.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let filter = level_filter(verbosity);
    let with_target = verbosity >= 2;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(with_target)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Human => {
            let ansi = ansi_enabled(
                color,
                std::io::stderr().is_terminal(),
                std::env::var_os("NO_COLOR").is_some(),
            );
            builder.with_ansi(ansi).try_init()
        }
        LogFormat::Json => builder.json().try_init(),
    };
    if installed.is_ok() {
        tracing::trace!(?format, verbosity, "logging ready");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_is_the_default_format() {
        assert_eq!(LogFormat::default(), LogFormat::Human);
    }

    #[test]
    fn second_init_keeps_first_subscriber() {
        init_logging(LogFormat::Human, 0, ColorChoice::Auto);
        init_logging(LogFormat::Json, 3, ColorChoice::Never);
    }

    #[test]
    fn verbose_count_to_level() {
        let levels: Vec<_> = (0..=4).map(verbosity_to_directive).collect();
        assert_eq!(levels, ["warn", "info", "debug", "trace", "trace"]);
        assert_eq!(verbosity_to_directive(u8::MAX), "trace");
    }

    #[test]
    fn auto_color_needs_terminal_without_no_color() {
        assert!(ansi_enabled(ColorChoice::Auto, true, false));
        assert!(!ansi_enabled(ColorChoice::Auto, true, true));
        assert!(!ansi_enabled(ColorChoice::Auto, false, false));
    }

    #[test]
    fn explicit_color_choice_wins() {
        assert!(ansi_enabled(ColorChoice::Always, false, true));
        assert!(!ansi_enabled(ColorChoice::Never, true, false));
    }
}
