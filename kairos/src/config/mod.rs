//! Settings file support
//!
//! Loads the YAML file named by `--config` / `KAIROS_CONFIG` into
//! [`kairos_core::Settings`].

pub mod loader;

pub use loader::{ConfigLoader, DEFAULT_MAX_CONFIG_SIZE};
