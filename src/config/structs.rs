//! Configuration struct definitions.

use crate::output::DEFAULT_TIMESTAMP_FORMAT;
use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Global threshold.
    pub level: String,
    /// Color mode (always, never, auto).
    pub colors: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "verbose".to_string(),
            colors: "always".to_string(),
        }
    }
}

/// Stderr sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Prefix each line with a local timestamp.
    pub timestamp: bool,
    /// strftime pattern for the prefix.
    pub timestamp_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            timestamp: true,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}
