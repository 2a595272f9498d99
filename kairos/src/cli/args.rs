//! CLI argument definitions
//!
//! All Clap derive structs for `kairos` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use kairos_core::Field;

use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Calculator for non-calendar time spans.
#[derive(Parser, Debug)]
#[command(name = "kairos", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "KAIROS_COLOR")]
    pub color: ColorChoice,

    /// Log line format.
    #[arg(long, default_value = "human", global = true, env = "KAIROS_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Path to a YAML settings file.
    #[arg(short, long, global = true, env = "KAIROS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Default pattern, overriding the settings file.
    #[arg(short, long, global = true, env = "KAIROS_PATTERN")]
    pub pattern: Option<String>,

    /// Infer the pattern of every expression instead of using the default.
    #[arg(long, global = true, env = "KAIROS_AUTO_PARSE")]
    pub auto_parse: bool,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read an expression and print its total milliseconds.
    Parse(ParseArgs),

    /// Render a time with a pattern.
    Format(FormatArgs),

    /// Check whether an expression fits the pattern.
    Validate(ValidateArgs),

    /// Guess the pattern an expression was written in.
    Infer(InferArgs),

    /// Duration arithmetic.
    Calc(CalcCommand),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Lexicon Commands
// ============================================================================

/// Arguments for `parse`.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Expression to read.
    #[arg(allow_hyphen_values = true)]
    pub expression: String,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `format`.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Time to render: an expression, or milliseconds with an `ms` suffix.
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Pattern to render with (defaults to the default pattern).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Keep only the last digits of hours that do not fit the pattern.
    #[arg(long)]
    pub no_overflow: bool,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Expression to check.
    #[arg(allow_hyphen_values = true)]
    pub expression: String,
}

/// Arguments for `infer`.
#[derive(Args, Debug)]
pub struct InferArgs {
    /// Expression to inspect.
    #[arg(allow_hyphen_values = true)]
    pub expression: String,
}

// ============================================================================
// Calc Command
// ============================================================================

/// Duration arithmetic.
///
/// Time arguments are expressions, or milliseconds with an `ms` suffix
/// (`5400000ms`, `-250ms`).
#[derive(Args, Debug)]
pub struct CalcCommand {
    /// Calc operation.
    #[command(subcommand)]
    pub operation: CalcOperation,

    /// Pattern used to print duration results.
    #[arg(short, long, global = true)]
    pub output: Option<String>,
}

/// Calc operations.
#[derive(Subcommand, Debug)]
pub enum CalcOperation {
    /// Sum of two times.
    Plus(PairArgs),

    /// First time minus the second.
    Minus(PairArgs),

    /// Time multiplied by a factor.
    Multiply(ScaleArgs),

    /// Time divided by a divisor.
    Divide(ScaleArgs),

    /// Proper fraction of a time.
    Fraction(FractionArgs),

    /// Time elapsed from start to end.
    Interval(IntervalArgs),

    /// Print -1, 0 or 1 as the first time is smaller, equal or larger.
    Compare(PairArgs),

    /// Smallest of the given times.
    Min(ListArgs),

    /// Largest of the given times.
    Max(ListArgs),

    /// Total of a time in one unit.
    Convert(ConvertArgs),
}

/// Two time operands.
#[derive(Args, Debug)]
pub struct PairArgs {
    /// First operand.
    #[arg(allow_hyphen_values = true)]
    pub first: String,

    /// Second operand.
    #[arg(allow_hyphen_values = true)]
    pub second: String,
}

/// A time and a scalar.
#[derive(Args, Debug)]
pub struct ScaleArgs {
    /// Time operand.
    #[arg(allow_hyphen_values = true)]
    pub time: String,

    /// Scalar operand.
    #[arg(allow_hyphen_values = true)]
    pub scalar: f64,
}

/// Arguments for `calc fraction`.
#[derive(Args, Debug)]
pub struct FractionArgs {
    /// Time operand.
    #[arg(allow_hyphen_values = true)]
    pub time: String,

    /// Numerator, at most the denominator.
    #[arg(allow_hyphen_values = true)]
    pub numerator: f64,

    /// Denominator.
    #[arg(allow_hyphen_values = true)]
    pub denominator: f64,
}

/// Arguments for `calc interval`.
#[derive(Args, Debug)]
pub struct IntervalArgs {
    /// Start time.
    #[arg(allow_hyphen_values = true)]
    pub start: String,

    /// End time, not before the start.
    #[arg(allow_hyphen_values = true)]
    pub end: String,
}

/// One or more times.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Times to choose from.
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub values: Vec<String>,
}

/// Arguments for `calc convert`.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Time to convert.
    #[arg(allow_hyphen_values = true)]
    pub time: String,

    /// Target unit.
    #[arg(short, long, default_value = "milliseconds")]
    pub unit: Field,
}

// ============================================================================
// Utility Commands
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
