//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod output;
mod scoring;
mod server;
mod storage;

pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use scoring::FileScoringConfig;
pub use server::FileServerConfig;
pub use storage::FileStorageConfig;

use interview_domain::scoring::MAX_KEYWORD_SCORE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("server.port cannot be 0")]
    InvalidPort,

    #[error("scoring.good_keyword_threshold must be between 0 and 10, got {0}")]
    InvalidThreshold(f64),

    #[error("scoring.feedback_delimiter cannot be empty")]
    EmptyDelimiter,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Progress storage settings
    pub storage: FileStorageConfig,
    /// Feedback settings
    pub scoring: FileScoringConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every detected issue
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.server.port == 0 {
            issues.push(ConfigValidationError::InvalidPort);
        }

        let threshold = self.scoring.good_keyword_threshold;
        if !(0.0..=MAX_KEYWORD_SCORE).contains(&threshold) {
            issues.push(ConfigValidationError::InvalidThreshold(threshold));
        }

        if self.scoring.feedback_delimiter.is_empty() {
            issues.push(ConfigValidationError::EmptyDelimiter);
        }

        issues
    }
}
