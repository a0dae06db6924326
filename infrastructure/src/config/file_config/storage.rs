//! Progress storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Path of the JSON progress file (platform data dir when unset)
    pub path: Option<PathBuf>,
    /// Keep progress in memory only; nothing is written to disk
    pub in_memory: bool,
}

impl FileStorageConfig {
    /// Effective progress file path
    ///
    /// Falls back to `<data_dir>/mock-interview/progress.json`, then to
    /// `./progress.json` when the platform has no data directory.
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("mock-interview").join("progress.json"))
                .unwrap_or_else(|| PathBuf::from("progress.json"))
        })
    }
}
