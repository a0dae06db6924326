//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: an interview question and its expected keywords
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
