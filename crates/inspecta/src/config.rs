//! Configuration management for inspecta.
//!
//! Configuration lives in a single YAML file (`inspecta.yaml` by default).
//! Every field has a default, and a missing file means "all defaults", so
//! a fresh checkout works without any setup.

use crate::error::{Error, Result};
use crate::seed::{DEFAULT_RECORD_COUNT, SeedConfig};
use crate::store::StoreOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;

/// Default name of the configuration file
pub const CONFIG_FILE_NAME: &str = "inspecta.yaml";

/// Default simulated latency in milliseconds
pub const DEFAULT_LATENCY_MS: u64 = 200;

/// Configuration file structure for inspecta
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct InspectaConfig {
    /// Seed for the deterministic dataset generator
    pub seed: u64,

    /// Number of records to seed the store with
    pub record_count: usize,

    /// Artificial latency applied to every store operation, in milliseconds
    pub latency_ms: u64,
}

impl Default for InspectaConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            record_count: DEFAULT_RECORD_COUNT,
            latency_ms: DEFAULT_LATENCY_MS,
        }
    }
}

impl InspectaConfig {
    /// Load configuration from a file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist.
    pub async fn load_or_default(path: &Path) -> Result<Self> {
        match fs::read_to_string(path).await {
            Ok(content) => serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Save configuration to a file
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {}", e)))?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Store options described by this configuration
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            seed: SeedConfig {
                seed: self.seed,
                count: self.record_count,
            },
            latency: Duration::from_millis(self.latency_ms),
        }
    }
}
