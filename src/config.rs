use crate::error::{RepzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_MAX_REPORTS: usize = 1000;
const DEFAULT_AUTOSAVE_DELAY_MS: u64 = 2000;

/// Configuration for repz, stored as config.json beside the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepzConfig {
    /// Capacity of the report collection; creation beyond it is rejected.
    #[serde(default = "default_max_reports")]
    pub max_reports: usize,

    /// Delay between the last content edit and the deferred autosave.
    #[serde(default = "default_autosave_delay_ms")]
    pub autosave_delay_ms: u64,
}

fn default_max_reports() -> usize {
    DEFAULT_MAX_REPORTS
}

fn default_autosave_delay_ms() -> u64 {
    DEFAULT_AUTOSAVE_DELAY_MS
}

impl Default for RepzConfig {
    fn default() -> Self {
        Self {
            max_reports: DEFAULT_MAX_REPORTS,
            autosave_delay_ms: DEFAULT_AUTOSAVE_DELAY_MS,
        }
    }
}

impl RepzConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| RepzError::Persistence(format!("read {}: {}", config_path.display(), e)))?;
        let config: RepzConfig = serde_json::from_str(&content)
            .map_err(|e| RepzError::Persistence(format!("parse {}: {}", config_path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)
                .map_err(|e| RepzError::Persistence(format!("create {}: {}", config_dir.display(), e)))?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| RepzError::Persistence(format!("serialize config: {}", e)))?;
        fs::write(&config_path, content)
            .map_err(|e| RepzError::Persistence(format!("write {}: {}", config_path.display(), e)))?;
        Ok(())
    }
}
