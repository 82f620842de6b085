//! Injector configuration
//!
//! Loaded from TOML at startup, falls back to defaults if no config file
//! exists or it fails to parse.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level injector configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InjectorConfig {
    /// Background integrity monitoring.
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MonitoringConfig {
    /// Interval between integrity checks in milliseconds.
    pub frequency_ms: u64,
    /// Degradation above this value triggers a corrective injection.
    pub degradation_threshold: f64,
    /// Inject automatically on degradation. When off, degradation is only reported.
    pub auto_correction: bool,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            frequency_ms: 30_000,
            degradation_threshold: 0.5,
            auto_correction: true,
        }
    }
}

impl MonitoringConfig {
    /// Tick interval. Never zero.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.frequency_ms.max(1))
    }
}

impl InjectorConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Render the config as TOML (for generating a default config file).
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
