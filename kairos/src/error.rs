//! Error types for the `kairos` command-line tool
//!
//! Wraps library errors and configuration failures, and maps each of them
//! to a process exit code.

use std::path::PathBuf;

use kairos_core::KairosError;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `kairos` invocations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, bad pattern or syntax)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Expression did not fit its pattern
    pub const PARSE_ERROR: i32 = 4;

    /// Arithmetic rejected its operands (improper fraction, zero divisor,
    /// reversed interval)
    pub const ARITHMETIC_ERROR: i32 = 5;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `kairos` commands.
#[derive(Debug, Error)]
pub enum KairosCliError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Parsing, pattern or arithmetic error from the library
    #[error(transparent)]
    Kairos(#[from] KairosError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Arguments that parse but make no sense together
    #[error("usage error: {0}")]
    Usage(String),
}

impl KairosCliError {
    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Kairos(err) => match err {
                KairosError::Parse { .. } => ExitCode::PARSE_ERROR,
                KairosError::InvalidPattern { .. } | KairosError::InvalidSyntax(_) => {
                    ExitCode::CONFIG_ERROR
                }
                KairosError::ImproperFraction { .. }
                | KairosError::IntervalOrdering { .. }
                | KairosError::DivisionByZero => ExitCode::ARITHMETIC_ERROR,
                KairosError::InvalidArgument(_) => ExitCode::USAGE_ERROR,
            },
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Settings file loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing or deserialization failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Settings parsed but are unusable
    #[error("validation failed for {path}: {source}")]
    ValidationError {
        /// Path to the configuration file
        path: PathBuf,
        /// What the library rejected
        source: KairosError,
    },

    /// Configuration file not found or unreadable
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Configuration file exceeds the size limit
    #[error("{path} is {size} bytes, at most {limit} bytes are allowed")]
    TooLarge {
        /// Path to the configuration file
        path: PathBuf,
        /// Actual size in bytes
        size: u64,
        /// Maximum accepted size in bytes
        limit: u64,
    },
}
