//! Settings file loader
//!
//! Loading pipeline:
//! 1. Size check against the configured limit
//! 2. UTF-8 BOM removal
//! 3. YAML parsing
//! 4. Deserialization into [`Settings`]
//! 5. Validation (non-empty pattern, distinct reserved characters)

use std::path::Path;

use kairos_core::Settings;
use serde_yaml::Value;

use crate::error::ConfigError;

/// Default maximum settings file size (1 MiB).
pub const DEFAULT_MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Name shown in errors for settings that did not come from a file.
const INLINE_SOURCE: &str = "<inline>";

/// Settings file loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    max_config_size: u64,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ConfigLoader {
    /// Creates a loader that rejects files larger than `max_config_size` bytes.
    #[must_use]
    pub const fn new(max_config_size: u64) -> Self {
        Self { max_config_size }
    }

    /// Creates a loader with the default size limit, overridable through
    /// `KAIROS_MAX_CONFIG_SIZE`.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(env_or("KAIROS_MAX_CONFIG_SIZE", DEFAULT_MAX_CONFIG_SIZE))
    }

    /// Loads and validates a settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file exceeds the size limit
    /// - YAML parsing or deserialization fails
    /// - Validation fails
    pub fn load(&self, path: &Path) -> Result<Settings, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;

        if metadata.len() > self.max_config_size {
            return Err(ConfigError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit: self.max_config_size,
            });
        }

        let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;

        let settings = self.parse(&raw, path)?;
        tracing::debug!(path = %path.display(), pattern = %settings.pattern, "loaded settings");
        Ok(settings)
    }

    /// Parses and validates settings held in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is too large, is not valid YAML, does
    /// not describe [`Settings`], or fails validation.
    pub fn load_from_str(&self, raw: &str) -> Result<Settings, ConfigError> {
        let path = Path::new(INLINE_SOURCE);
        let size = u64::try_from(raw.len()).unwrap_or(u64::MAX);
        if size > self.max_config_size {
            return Err(ConfigError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit: self.max_config_size,
            });
        }
        self.parse(raw, path)
    }

    #[allow(clippy::unused_self)]
    fn parse(&self, raw: &str, path: &Path) -> Result<Settings, ConfigError> {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

        let root: Value = serde_yaml::from_str(raw).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })?;

        if root.is_null() {
            return Err(ConfigError::ParseError {
                path: path.to_path_buf(),
                line: None,
                message: "configuration file is empty".to_string(),
            });
        }

        let settings: Settings =
            serde_yaml::from_value(root).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                line: None,
                message: format!("failed to deserialize settings: {e}"),
            })?;

        settings
            .validate()
            .map_err(|source| ConfigError::ValidationError {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(settings)
    }
}

/// Parses an environment variable with a default value.
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
