use crate::commands::filter::NoMatchPolicy;
use crate::error::{Result, TraitzError};
use crate::model::DEFAULT_SENTINEL_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "traitz.json";
const DEFAULT_RECORD_COUNT: usize = 1600;
const DEFAULT_COMBINED_FILE: &str = "combined.json";

/// Configuration for traitz, stored in `<data dir>/traitz.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraitzConfig {
    /// What to show when nothing is checked or nothing matches
    #[serde(default)]
    pub policy: NoMatchPolicy,

    /// Name of the placeholder record used by the sentinel policy
    #[serde(default = "default_sentinel_name")]
    pub sentinel_name: String,

    /// Highest numbered record file to read (`1.json` ..= `N.json`)
    #[serde(default = "default_record_count")]
    pub record_count: usize,

    /// File name of the pre-joined collection
    #[serde(default = "default_combined_file")]
    pub combined_file: String,
}

fn default_sentinel_name() -> String {
    DEFAULT_SENTINEL_NAME.to_string()
}

fn default_record_count() -> usize {
    DEFAULT_RECORD_COUNT
}

fn default_combined_file() -> String {
    DEFAULT_COMBINED_FILE.to_string()
}

impl Default for TraitzConfig {
    fn default() -> Self {
        Self {
            policy: NoMatchPolicy::default(),
            sentinel_name: default_sentinel_name(),
            record_count: DEFAULT_RECORD_COUNT,
            combined_file: default_combined_file(),
        }
    }
}

impl TraitzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TraitzConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Read a setting by its command-line key.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "policy" => Ok(self.policy.to_string()),
            "sentinel-name" => Ok(self.sentinel_name.clone()),
            "record-count" => Ok(self.record_count.to_string()),
            "combined-file" => Ok(self.combined_file.clone()),
            other => Err(TraitzError::Config(format!("Unknown config key: {}", other))),
        }
    }

    /// Update a setting by its command-line key, validating the value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "policy" => self.policy = value.parse()?,
            "sentinel-name" => self.sentinel_name = value.to_string(),
            "record-count" => {
                self.record_count = value.parse().map_err(|_| {
                    TraitzError::Config(format!("record-count must be a number, got {}", value))
                })?
            }
            "combined-file" => {
                if value.is_empty() {
                    return Err(TraitzError::Config("combined-file cannot be empty".into()));
                }
                self.combined_file = value.to_string()
            }
            other => return Err(TraitzError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["policy", "sentinel-name", "record-count", "combined-file"]
    }
}
