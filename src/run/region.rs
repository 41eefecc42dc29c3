//! Cache-or-fetch for a single province.

use log::{info, warn};

use crate::error_handling::{FetchError, InfoType};
use crate::fetch::PostalCodeFetcher;
use crate::models::Record;
use crate::storage::RegionCache;

/// Where a province's records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    /// Read from the province's cache file
    Cache,
    /// Fetched from the suggestions service
    Network {
        /// Whether the fresh records were written to the cache file
        cached: bool,
    },
}

/// Returns the records of `region_id`, reading the cache file when one exists.
///
/// Without a usable cache file (or with `refresh`), the province is fetched
/// and the result written back to the cache. A cache file that cannot be read
/// is logged and replaced by a fresh fetch; a failed cache write is logged and
/// otherwise ignored.
///
/// # Errors
///
/// Returns the fetcher's error; an invalid id is rejected before the cache is
/// touched.
pub async fn load_or_fetch(
    fetcher: &PostalCodeFetcher,
    cache: &RegionCache,
    region_id: i64,
    refresh: bool,
) -> Result<(Vec<Record>, RecordSource), FetchError> {
    let region = fetcher.validate_region(region_id)?;
    let stats = fetcher.stats();

    if !refresh {
        match cache.load(region) {
            Ok(Some(records)) => {
                info!(
                    "Province {}: {} records from {}",
                    region,
                    records.len(),
                    cache.path_for(region).display()
                );
                stats.increment_info(InfoType::CacheHit);
                return Ok((records, RecordSource::Cache));
            }
            Ok(None) => {}
            Err(e) => warn!("Ignoring unreadable cache for province {}: {}", region, e),
        }
    }

    stats.increment_info(InfoType::CacheMiss);
    let records = fetcher.fetch_region(region_id).await?;

    let cached = cache.store(region, &records);
    if !cached {
        stats.increment_info(InfoType::CacheWriteFailed);
    }

    Ok((records, RecordSource::Network { cached }))
}
