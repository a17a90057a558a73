//! Engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for a [`SearchEngine`](crate::engine::SearchEngine).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Proximity-credit radius for best-match tallies.
    #[serde(default = "default_blur_radius")]
    pub blur_radius: u32,

    /// How many verse read failures an index build tolerates before it
    /// gives up.
    #[serde(default = "default_read_error_budget")]
    pub read_error_budget: u32,

    /// Name of the directory file (`word:offset:length` lines).
    #[serde(default = "default_directory_file")]
    pub directory_file: String,

    /// Name of the blob file (serialized verse-set records).
    #[serde(default = "default_blob_file")]
    pub blob_file: String,
}

fn default_blur_radius() -> u32 {
    2
}

fn default_read_error_budget() -> u32 {
    256
}

fn default_directory_file() -> String {
    "words.idx".to_string()
}

fn default_blob_file() -> String {
    "words.dat".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            blur_radius: default_blur_radius(),
            read_error_budget: default_read_error_budget(),
            directory_file: default_directory_file(),
            blob_file: default_blob_file(),
        }
    }
}

impl EngineConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save this configuration to a JSON file.
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
