//! Tests for the cache-first flow: a province is fetched once, written to its
//! cache file, and served from that file afterwards.

use postal_codes::error_handling::InfoType;
use postal_codes::{
    load_or_fetch, run_regions, Config, FetchError, FetcherConfig, PostalCodeFetcher,
    RecordSource, RegionCache,
};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SUGGESTIONS_PATH: &str = "/digital-services/searchengines/api/v1/suggestions";

fn fetcher_config(server: &MockServer) -> FetcherConfig {
    FetcherConfig {
        base_url: server.uri(),
        keys: 0..=9,
        batch_size: 5,
        timeout_seconds: 5,
        ..Default::default()
    }
}

/// Melilla-like province: six postal codes behind two candidates.
async fn start_melilla_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SUGGESTIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .with_priority(10)
        .mount(&server)
        .await;

    for (code, first) in [("52000", 1), ("52005", 4)] {
        let suggestions: Vec<_> = (first..first + 3)
            .map(|n| {
                json!({
                    "text": format!("5200{n}, Melilla, Melilla, Melilla, ESP"),
                    "latitude": 35.29 + f64::from(n) / 1000.0,
                    "longitude": -2.94
                })
            })
            .collect();
        Mock::given(method("GET"))
            .and(path(SUGGESTIONS_PATH))
            .and(query_param("text", code))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "suggestions": suggestions })),
            )
            .with_priority(1)
            .mount(&server)
            .await;
    }
    server
}

#[tokio::test]
async fn test_second_call_reads_cache_instead_of_fetching() {
    let server = start_melilla_server().await;
    let dir = TempDir::new().expect("Failed to create temp directory");
    let cache = RegionCache::new(dir.path().join("output"));
    let fetcher = PostalCodeFetcher::new(fetcher_config(&server)).expect("client should build");

    let (fetched, source) = load_or_fetch(&fetcher, &cache, 52, false)
        .await
        .expect("first call should fetch");
    assert_eq!(source, RecordSource::Network { cached: true });
    assert_eq!(fetched.len(), 6);
    assert!(dir.path().join("output").join("province-52.csv").is_file());

    let requests_after_fetch = server.received_requests().await.expect("recording").len();
    assert_eq!(requests_after_fetch, 10);

    let (cached, source) = load_or_fetch(&fetcher, &cache, 52, false)
        .await
        .expect("second call should hit the cache");
    assert_eq!(source, RecordSource::Cache);
    assert_eq!(cached, fetched);
    assert_eq!(
        server.received_requests().await.expect("recording").len(),
        requests_after_fetch
    );

    let stats = fetcher.stats();
    assert_eq!(stats.get_info_count(InfoType::CacheMiss), 1);
    assert_eq!(stats.get_info_count(InfoType::CacheHit), 1);
}

#[tokio::test]
async fn test_refresh_ignores_cache() {
    let server = start_melilla_server().await;
    let dir = TempDir::new().expect("Failed to create temp directory");
    let cache = RegionCache::new(dir.path());
    let fetcher = PostalCodeFetcher::new(fetcher_config(&server)).expect("client should build");

    load_or_fetch(&fetcher, &cache, 52, false)
        .await
        .expect("first call should fetch");
    let (_, source) = load_or_fetch(&fetcher, &cache, 52, true)
        .await
        .expect("refresh should fetch");

    assert_eq!(source, RecordSource::Network { cached: true });
    assert_eq!(server.received_requests().await.expect("recording").len(), 20);
}

#[tokio::test]
async fn test_unreadable_cache_falls_back_to_fetch() {
    let server = start_melilla_server().await;
    let dir = TempDir::new().expect("Failed to create temp directory");
    let cache = RegionCache::new(dir.path());
    let fetcher = PostalCodeFetcher::new(fetcher_config(&server)).expect("client should build");

    let region = fetcher.validate_region(52).expect("valid province");
    std::fs::write(cache.path_for(region), "Country;Postal Code\nESP\n")
        .expect("fixture should be written");

    let (records, source) = load_or_fetch(&fetcher, &cache, 52, false)
        .await
        .expect("corrupt cache should be replaced");
    assert_eq!(source, RecordSource::Network { cached: true });
    assert_eq!(records.len(), 6);
    assert_eq!(cache.load(region).expect("rewritten cache"), Some(records));
}

#[tokio::test]
async fn test_failed_fetch_writes_no_cache_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let dir = TempDir::new().expect("Failed to create temp directory");
    let cache = RegionCache::new(dir.path());
    let fetcher = PostalCodeFetcher::new(fetcher_config(&server)).expect("client should build");

    let err = load_or_fetch(&fetcher, &cache, 7, false).await.unwrap_err();
    assert!(matches!(err, FetchError::FetchFailed { .. }));
    assert!(!dir.path().join("province-07.csv").exists());
}

#[tokio::test]
async fn test_invalid_region_does_not_touch_cache() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("Failed to create temp directory");
    let cache = RegionCache::new(dir.path());
    let fetcher = PostalCodeFetcher::new(fetcher_config(&server)).expect("client should build");

    let err = load_or_fetch(&fetcher, &cache, 99, false).await.unwrap_err();
    assert_eq!(err.to_string(), "Province [ 99 ] must be in range 1..52");
    assert_eq!(
        std::fs::read_dir(dir.path()).expect("temp dir").count(),
        0
    );
}

#[tokio::test]
async fn test_run_regions_reports_each_province() {
    let server = start_melilla_server().await;
    let dir = TempDir::new().expect("Failed to create temp directory");
    let config = Config {
        regions: vec![52, 0, 52],
        output_dir: dir.path().to_path_buf(),
        fetcher: fetcher_config(&server),
        ..Default::default()
    };

    let report = run_regions(config).await.expect("run should complete");

    assert_eq!(report.outcomes.len(), 3);
    assert_eq!(report.fetched(), 1);
    assert_eq!(report.from_cache(), 1);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.total_records(), 12);
    assert_eq!(report.outcomes[1].region_id, 0);
    assert!(report.outcomes[1]
        .result
        .as_ref()
        .unwrap_err()
        .contains("must be in range 1..52"));
}
