//! Configuration constants.
//!
//! This module defines the production defaults for the suggestions service,
//! the candidate key space, batching, and the on-disk cache layout.

/// Base URL of the Correos API host.
pub const DEFAULT_BASE_URL: &str = "https://api1.correos.es";

/// Suggestions endpoint path. `{code}` is replaced with the 5-digit candidate code.
pub const DEFAULT_ENDPOINT: &str = "/digital-services/searchengines/api/v1/suggestions?text={code}";

/// Placeholder substituted in [`DEFAULT_ENDPOINT`].
pub const CODE_PLACEHOLDER: &str = "{code}";

/// First valid province id.
pub const REGION_MIN: i64 = 1;
/// Last valid province id (Melilla).
pub const REGION_MAX: i64 = 52;

/// First candidate suffix probed per province.
pub const KEY_MIN: u16 = 0;
/// Last candidate suffix probed per province.
pub const KEY_MAX: u16 = 999;

/// Number of requests in flight per batch.
/// 1000 candidates / 50 = 20 batches per province.
pub const BATCH_SIZE: usize = 50;

/// Per-request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("postal_codes/", env!("CARGO_PKG_VERSION"));

// Cache layout
/// Default directory for per-province CSV files.
pub const DEFAULT_OUTPUT_DIR: &str = "./output";
/// Cache file name prefix; the full name is `province-NN.csv`.
pub const CACHE_FILE_PREFIX: &str = "province-";
/// Cache file extension.
pub const CACHE_FILE_EXTENSION: &str = "csv";
/// Field delimiter for cache files.
pub const CSV_DELIMITER: u8 = b';';

/// Header row written at the top of every cache file.
pub const CSV_HEADER: [&str; 7] = [
    "Country",
    "Postal Code",
    "City",
    "Province",
    "Region",
    "Latitude",
    "Longitude",
];

// Suggestion label format
/// Separator between components of a suggestion label.
pub const LABEL_SEPARATOR: &str = ", ";
/// Separator used when re-joining the city components.
pub const CITY_SEPARATOR: &str = ". ";
/// Minimum number of components in a label: postal code, province, region, country.
pub const LABEL_MIN_COMPONENTS: usize = 4;

// HTTP status codes
/// 429 Too Many Requests
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
