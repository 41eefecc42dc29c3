//! Province fetch engine.
//!
//! `PostalCodeFetcher::fetch_region` validates a province id, walks the
//! candidate key space in fixed-size batches, and normalizes every suggestion
//! into a [`Record`]. Batches run one after another; the requests inside a
//! batch run concurrently. Any failed request aborts the whole province.

mod batch;
mod request;

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};

use crate::app::log_progress;
use crate::config::FetcherConfig;
use crate::error_handling::{
    update_error_stats, FetchError, InfoType, InitializationError, ProcessingStats,
};
use crate::initialization::init_client;
use crate::models::{Record, RegionId};
use crate::parse::parse_suggestions;

use batch::fetch_batch;

/// Fetches and normalizes the postal codes of one province at a time.
///
/// # Example
///
/// ```no_run
/// use postal_codes::{FetcherConfig, PostalCodeFetcher};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = PostalCodeFetcher::new(FetcherConfig::default())?;
/// let records = fetcher.fetch_region(51).await?;
/// println!("Ceuta has {} postal codes", records.len());
/// # Ok(())
/// # }
/// ```
pub struct PostalCodeFetcher {
    config: FetcherConfig,
    client: reqwest::Client,
    stats: Arc<ProcessingStats>,
}

impl PostalCodeFetcher {
    /// Creates a fetcher with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(config: FetcherConfig) -> Result<Self, InitializationError> {
        let client = init_client(&config)?;
        Ok(Self::with_client(config, client))
    }

    /// Creates a fetcher around an existing client.
    pub fn with_client(config: FetcherConfig, client: reqwest::Client) -> Self {
        Self {
            config,
            client,
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    /// Shares a statistics tracker with the caller.
    pub fn with_stats(mut self, stats: Arc<ProcessingStats>) -> Self {
        self.stats = stats;
        self
    }

    /// Configuration in use.
    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Request and parse counters.
    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }

    /// Checks `region_id` against the configured province range.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidRegion`.
    pub fn validate_region(&self, region_id: i64) -> Result<RegionId, FetchError> {
        RegionId::new(
            region_id,
            *self.config.regions.start(),
            *self.config.regions.end(),
        )
    }

    /// Fetches every postal code of a province.
    ///
    /// Records come back batch by batch, and within a batch in the order the
    /// requests were issued, so two calls against a stable service return
    /// identical results.
    ///
    /// # Errors
    ///
    /// - `FetchError::InvalidRegion` before any request when the id is out of range
    /// - `FetchError::FetchFailed` / `TaskAborted` when any request fails
    /// - `FetchError::MalformedResponse` / `MalformedLabel` when a suggestion
    ///   cannot be decoded or tokenized
    ///
    /// No partial result is returned on error.
    pub async fn fetch_region(&self, region_id: i64) -> Result<Vec<Record>, FetchError> {
        let region = self.validate_region(region_id)?;

        let result = self.fetch_validated(region).await;
        if let Err(ref e) = result {
            update_error_stats(&self.stats, e);
        }
        result
    }

    async fn fetch_validated(&self, region: RegionId) -> Result<Vec<Record>, FetchError> {
        let keys: Vec<u16> = self.config.keys.clone().collect();
        let batch_size = self.config.batch_size.max(1);
        let total_batches = keys.len().div_ceil(batch_size);
        let start_time = Instant::now();

        info!(
            "Fetching province {} ({}): {} candidates in {} batches",
            region,
            region.name().unwrap_or("unknown"),
            keys.len(),
            total_batches
        );

        let mut records = Vec::new();
        for (index, batch) in keys.chunks(batch_size).enumerate() {
            let responses =
                fetch_batch(&self.client, &self.config, region, batch, &self.stats).await?;

            for response in responses {
                records.extend(self.records_from_body(&response.code, &response.body)?);
            }

            log_progress(region, index + 1, total_batches, records.len(), start_time);
        }

        info!(
            "Province {} done: {} records in {:.1}s",
            region,
            records.len(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(records)
    }

    fn records_from_body(&self, code: &str, body: &str) -> Result<Vec<Record>, FetchError> {
        let suggestions =
            parse_suggestions(body).map_err(|source| FetchError::MalformedResponse {
                code: code.to_string(),
                source,
            })?;

        let Some(suggestions) = suggestions else {
            debug!("No suggestions for {code}");
            self.stats.increment_info(InfoType::EmptyResponse);
            return Ok(Vec::new());
        };

        let records = suggestions
            .iter()
            .map(Record::from_suggestion)
            .collect::<Result<Vec<_>, _>>()?;
        self.stats
            .add_info(InfoType::SuggestionParsed, records.len());
        Ok(records)
    }
}
