//! File-based configuration loading.

use std::path::Path;

use super::{BuilderConfig, ConfigValue, ConfigWarning};
use crate::error::{BuilderError, Result};

/// Configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format.
    Toml,
    /// JSON format.
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from path.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Parse config content into raw options.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<ConfigValue> {
    match format {
        ConfigFormat::Toml => {
            let table: toml::Table =
                toml::from_str(content).map_err(|e| BuilderError::config(e.to_string()))?;
            Ok(ConfigValue::from(toml::Value::Table(table)))
        }
        ConfigFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(content).map_err(|e| BuilderError::config(e.to_string()))?;
            Ok(ConfigValue::from(value))
        }
    }
}

impl BuilderConfig {
    /// Load a configuration from TOML or JSON text.
    ///
    /// Malformed text is an error; well-formed text with unusable options
    /// loads like any other raw options and reports warnings.
    pub fn from_str_with_format(
        content: &str,
        format: ConfigFormat,
    ) -> Result<(Self, Vec<ConfigWarning>)> {
        let raw = parse_config(content, format)?;
        Ok(Self::load(Some(&raw)))
    }

    /// Load a configuration file, detecting its format from the extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<(Self, Vec<ConfigWarning>)> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            BuilderError::config(format!("unknown config format: {}", path.display()))
        })?;
        let content = std::fs::read_to_string(path)?;

        tracing::debug!(path = %path.display(), ?format, "Loading builder configuration");
        Self::from_str_with_format(&content, format)
    }
}
