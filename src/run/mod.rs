//! Multi-province run loop.
//!
//! Processes the configured provinces one after another, each through
//! [`load_or_fetch`]. A failed province is logged and recorded in the report;
//! the run carries on with the next one.

mod region;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{error, info};

use crate::app::{print_error_statistics, print_run_summary};
use crate::config::Config;
use crate::error_handling::ProcessingStats;
use crate::fetch::PostalCodeFetcher;
use crate::storage::RegionCache;

pub use region::{load_or_fetch, RecordSource};

/// Outcome of one province in a run.
#[derive(Debug, Clone)]
pub struct RegionOutcome {
    /// Requested province id
    pub region_id: i64,
    /// Record count and origin, or the error message
    pub result: Result<(usize, RecordSource), String>,
}

/// Results of a run over several provinces.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// One entry per requested province, in request order
    pub outcomes: Vec<RegionOutcome>,
    /// Directory holding the cache files
    pub output_dir: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl RunReport {
    /// Provinces served from cache files.
    pub fn from_cache(&self) -> usize {
        self.count(|source| matches!(source, RecordSource::Cache))
    }

    /// Provinces fetched from the service.
    pub fn fetched(&self) -> usize {
        self.count(|source| matches!(source, RecordSource::Network { .. }))
    }

    /// Provinces that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    /// Records across all successful provinces.
    pub fn total_records(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .map(|(count, _)| count)
            .sum()
    }

    fn count(&self, predicate: impl Fn(&RecordSource) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(&o.result, Ok((_, source)) if predicate(source)))
            .count()
    }
}

/// Runs the configured provinces.
///
/// # Errors
///
/// Returns an error only when the HTTP client cannot be created. Per-province
/// failures are reported in [`RunReport::outcomes`].
pub async fn run_regions(config: Config) -> Result<RunReport> {
    let start_time = Instant::now();
    let stats = Arc::new(ProcessingStats::new());
    let fetcher = PostalCodeFetcher::new(config.fetcher.clone())
        .context("Failed to initialize HTTP client")?
        .with_stats(Arc::clone(&stats));
    let cache = RegionCache::new(&config.output_dir);

    info!(
        "Processing {} province(s), cache directory {}",
        config.regions.len(),
        cache.dir().display()
    );

    let mut outcomes = Vec::with_capacity(config.regions.len());
    for &region_id in &config.regions {
        let result = match load_or_fetch(&fetcher, &cache, region_id, config.refresh).await {
            Ok((records, source)) => Ok((records.len(), source)),
            Err(e) => {
                error!("Province {}: {}", region_id, e);
                Err(e.to_string())
            }
        };
        outcomes.push(RegionOutcome { region_id, result });
    }

    let report = RunReport {
        outcomes,
        output_dir: config.output_dir.clone(),
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    };

    print_error_statistics(&stats);
    print_run_summary(&report);

    Ok(report)
}
