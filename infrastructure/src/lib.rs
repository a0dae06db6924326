//! Infrastructure layer for mock-interview
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod sentiment;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileScoringConfig, FileServerConfig, FileStorageConfig,
};
pub use sentiment::VaderSentimentAnalyzer;
pub use storage::{JsonFileProgressStore, StoreError};
