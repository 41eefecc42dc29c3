//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    BATCH_SIZE, DEFAULT_BASE_URL, DEFAULT_ENDPOINT, DEFAULT_OUTPUT_DIR, DEFAULT_USER_AGENT,
    KEY_MAX, KEY_MIN, REGION_MAX, REGION_MIN, REQUEST_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Immutable settings for [`PostalCodeFetcher`](crate::PostalCodeFetcher).
///
/// Everything the fetcher needs to know about the remote service and the key
/// space lives here, so tests can point it at a mock server.
///
/// # Examples
///
/// ```no_run
/// use postal_codes::FetcherConfig;
///
/// let config = FetcherConfig {
///     base_url: "http://127.0.0.1:8080".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(config.batch_size, 50);
/// ```
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Scheme and host of the suggestions service, without trailing slash
    pub base_url: String,

    /// Path and query template; `{code}` is replaced with the candidate code
    pub endpoint: String,

    /// Valid province ids
    pub regions: RangeInclusive<i64>,

    /// Candidate suffixes probed per province
    pub keys: RangeInclusive<u16>,

    /// Requests in flight per batch
    pub batch_size: usize,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            regions: REGION_MIN..=REGION_MAX,
            keys: KEY_MIN..=KEY_MAX,
            batch_size: BATCH_SIZE,
            timeout_seconds: REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Library configuration for a multi-province run (no CLI dependencies).
#[derive(Debug, Clone)]
pub struct Config {
    /// Province ids to process, in order
    pub regions: Vec<i64>,

    /// Directory holding the `province-NN.csv` cache files
    pub output_dir: PathBuf,

    /// Ignore existing cache files and always fetch
    pub refresh: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Fetcher settings
    pub fetcher: FetcherConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            regions: (REGION_MIN..=REGION_MAX).collect(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            refresh: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            fetcher: FetcherConfig::default(),
        }
    }
}

/// Command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "postal_codes",
    about = "Fetches Spanish postal codes per province and caches them as CSV"
)]
pub struct Opt {
    /// Province ids to process (1-52)
    #[arg(value_name = "PROVINCE", required_unless_present = "all")]
    pub regions: Vec<i64>,

    /// Process every province
    #[arg(long, conflicts_with = "regions")]
    pub all: bool,

    /// Directory for the per-province CSV files
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR, env = "POSTAL_CODES_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Ignore cached files and fetch again
    #[arg(long)]
    pub refresh: bool,

    /// Suggestions service base URL
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "POSTAL_CODES_BASE_URL")]
    pub base_url: String,

    /// Requests in flight per batch
    #[arg(long, default_value_t = BATCH_SIZE)]
    pub batch_size: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        let regions = if opt.all {
            (REGION_MIN..=REGION_MAX).collect()
        } else {
            opt.regions
        };

        Self {
            regions,
            output_dir: opt.output_dir,
            refresh: opt.refresh,
            log_level: opt.log_level,
            log_format: opt.log_format,
            fetcher: FetcherConfig {
                base_url: opt.base_url.trim_end_matches('/').to_string(),
                batch_size: opt.batch_size.max(1),
                timeout_seconds: opt.timeout_seconds,
                ..FetcherConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_fetcher_config_default() {
        let config = FetcherConfig::default();
        assert_eq!(config.base_url, "https://api1.correos.es");
        assert_eq!(config.regions, 1..=52);
        assert_eq!(config.keys, 0..=999);
        assert_eq!(config.batch_size, 50);
        assert_eq!(config.timeout_seconds, 10);
        assert!(config.endpoint.contains("{code}"));
    }

    #[test]
    fn test_config_default_covers_every_province() {
        let config = Config::default();
        assert_eq!(config.regions.len(), 52);
        assert_eq!(config.regions.first(), Some(&1));
        assert_eq!(config.regions.last(), Some(&52));
        assert!(!config.refresh);
        assert_eq!(config.output_dir, PathBuf::from("./output"));
    }

    #[test]
    fn test_opt_parses_explicit_regions() {
        let opt = Opt::try_parse_from(["postal_codes", "1", "51", "--refresh"])
            .expect("valid arguments should parse");
        let config = Config::from(opt);
        assert_eq!(config.regions, vec![1, 51]);
        assert!(config.refresh);
    }

    #[test]
    fn test_opt_all_expands_to_every_province() {
        let opt = Opt::try_parse_from(["postal_codes", "--all"]).expect("--all should parse");
        let config = Config::from(opt);
        assert_eq!(config.regions.len(), 52);
    }

    #[test]
    fn test_opt_requires_regions_or_all() {
        assert!(Opt::try_parse_from(["postal_codes"]).is_err());
    }

    #[test]
    fn test_opt_trims_trailing_slash_and_zero_batch() {
        let opt = Opt::try_parse_from([
            "postal_codes",
            "2",
            "--base-url",
            "http://localhost:9000/",
            "--batch-size",
            "0",
        ])
        .expect("valid arguments should parse");
        let config = Config::from(opt);
        assert_eq!(config.fetcher.base_url, "http://localhost:9000");
        assert_eq!(config.fetcher.batch_size, 1);
    }
}
