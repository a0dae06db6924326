//! Presentation layer for mock-interview
//!
//! This crate contains CLI definitions, console formatters
//! and the HTTP API.

pub mod cli;
pub mod http;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use http::{ApiError, AppState, router, serve};
pub use output::console::ConsoleFormatter;
