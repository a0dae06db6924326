//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily-rotated log files; console only when unset
    pub dir: Option<PathBuf>,
    /// Default filter directive when neither `-v` nor `RUST_LOG` is given
    pub level: Option<String>,
}
