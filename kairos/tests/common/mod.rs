//! Shared integration-test harness for running the `kairos` binary.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Runs `kairos` with `args` and collects its output.
///
/// Settings-related environment variables are cleared so the host
/// environment cannot leak into assertions.
#[allow(clippy::missing_panics_doc)]
pub fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kairos"))
        .args(args)
        .env_remove("KAIROS_CONFIG")
        .env_remove("KAIROS_PATTERN")
        .env_remove("KAIROS_AUTO_PARSE")
        .env_remove("KAIROS_LOG_LEVEL")
        .env("KAIROS_COLOR", "never")
        .output()
        .expect("failed to spawn kairos")
}

/// Trimmed stdout of a finished run.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Trimmed stderr of a finished run.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

/// Path to a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}
