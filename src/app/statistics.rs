//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats};
use crate::run::RunReport;

/// Prints error and info statistics to the log.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    let total_info = error_stats.total_info();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = error_stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Info Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = error_stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}

/// Prints a one-line summary of a run.
pub fn print_run_summary(report: &RunReport) {
    info!(
        "Processed {} province{} ({} from cache, {} fetched, {} failed), {} records in {:.1}s",
        report.outcomes.len(),
        if report.outcomes.len() == 1 { "" } else { "s" },
        report.from_cache(),
        report.fetched(),
        report.failed(),
        report.total_records(),
        report.elapsed_seconds
    );
}
