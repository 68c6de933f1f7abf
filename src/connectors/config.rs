use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the data and delivery collaborators
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectorConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// YAML catalog snapshot. The built-in seed data is used when unset.
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Delay of the simulated submission call, in milliseconds
    pub simulated_latency_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 1000,
        }
    }
}
