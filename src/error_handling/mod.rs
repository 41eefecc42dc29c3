//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for fetching, parsing, and storage
//! - Processing statistics tracking (errors and info metrics)
//! - Error categorization for the end-of-run summary

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_fetch_error, categorize_reqwest_error, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{
    ErrorType, FetchError, InfoType, InitializationError, LabelError, RowError, StorageError,
};
