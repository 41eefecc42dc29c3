//! Progress logging utilities.

use log::debug;
use std::time::Instant;

use crate::models::RegionId;

/// Logs progress after a batch of a province fetch has been merged.
///
/// # Arguments
///
/// * `region` - Province being fetched
/// * `batches_done` - Batches completed so far (1-based)
/// * `total_batches` - Batches in this province
/// * `records` - Records accumulated so far
/// * `start_time` - When the province fetch started
pub fn log_progress(
    region: RegionId,
    batches_done: usize,
    total_batches: usize,
    records: usize,
    start_time: Instant,
) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        batches_done as f64 / elapsed_secs
    } else {
        0.0
    };
    debug!(
        "Province {}: batch {}/{} done, {} records so far ({:.2}s, ~{:.2} batches/sec)",
        region, batches_done, total_batches, records, elapsed_secs, rate
    );
}
