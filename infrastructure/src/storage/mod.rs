//! Progress storage adapters.
//!
//! Provides [`JsonFileProgressStore`], a JSON document store that implements
//! the [`ProgressRepository`](interview_application::ProgressRepository) port.

mod json_file;

pub use json_file::{JsonFileProgressStore, StoreError};
