//! Configuration file loading for mock-interview
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `INTERVIEW_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./interview.toml` or `./.interview.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/mock-interview/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileScoringConfig, FileServerConfig, FileStorageConfig,
};
pub use loader::ConfigLoader;
