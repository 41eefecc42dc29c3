//! postal_codes library: Spanish postal codes per province
//!
//! This library enumerates the postal-code candidates of a province, queries
//! the Correos suggestions service for each candidate in concurrent batches,
//! normalizes the free-text suggestions into records, and caches the result
//! as a semicolon-delimited CSV file per province.
//!
//! # Example
//!
//! ```no_run
//! use postal_codes::{load_or_fetch, FetcherConfig, PostalCodeFetcher, RegionCache};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = PostalCodeFetcher::new(FetcherConfig::default())?;
//! let cache = RegionCache::new("./output");
//!
//! let (records, source) = load_or_fetch(&fetcher, &cache, 1, false).await?;
//! println!("{} records for Araba/Álava ({:?})", records.len(), source);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Fetching requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod error_handling;
mod fetch;
pub mod initialization;
mod models;
pub mod parse;
mod run;
pub mod storage;

// Re-export public API
pub use config::{Config, FetcherConfig, LogFormat, LogLevel};
pub use error_handling::{FetchError, LabelError, ProcessingStats, RowError, StorageError};
pub use fetch::PostalCodeFetcher;
pub use models::{Record, RegionId, Suggestion};
pub use run::{load_or_fetch, run_regions, RecordSource, RegionOutcome, RunReport};
pub use storage::{RecordStore, RegionCache, RowReader};
