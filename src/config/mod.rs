//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, key space, batching, cache layout)
//! - The immutable fetcher configuration
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, FetcherConfig, LogFormat, LogLevel, Opt};
