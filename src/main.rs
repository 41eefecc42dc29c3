//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `postal_codes` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use postal_codes::config::Opt;
use postal_codes::initialization::init_logger_with;
use postal_codes::{run_regions, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // .env may set POSTAL_CODES_BASE_URL / POSTAL_CODES_OUTPUT_DIR
    let _ = dotenvy::dotenv();

    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_regions(config).await {
        Ok(report) => {
            for outcome in &report.outcomes {
                match &outcome.result {
                    Ok((count, source)) => println!(
                        "province {:>2}: {:>4} records ({:?})",
                        outcome.region_id, count, source
                    ),
                    Err(e) => println!("province {:>2}: failed: {}", outcome.region_id, e),
                }
            }
            println!(
                "Processed {} province{} ({} failed) in {:.1}s - files in {}",
                report.outcomes.len(),
                if report.outcomes.len() == 1 { "" } else { "s" },
                report.failed(),
                report.elapsed_seconds,
                report.output_dir.display()
            );
            if report.failed() > 0 {
                process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("postal_codes error: {:#}", e);
            process::exit(1);
        }
    }
}
