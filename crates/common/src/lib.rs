//! Blogkit Common Utilities
//!
//! Shared infrastructure for all Blogkit crates:
//! - Error types and result aliases
//! - Tracing/logging initialization
//! - Configuration loading (config file plus environment overrides)

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
