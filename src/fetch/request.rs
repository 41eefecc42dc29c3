//! Single suggestions request.

use log::trace;

use crate::config::{FetcherConfig, CODE_PLACEHOLDER};

/// Builds the request URL for one candidate code.
///
/// The endpoint template's `{code}` placeholder is replaced; the result is
/// appended to the base URL.
pub(crate) fn request_url(config: &FetcherConfig, code: &str) -> String {
    format!(
        "{}{}",
        config.base_url.trim_end_matches('/'),
        config.endpoint.replace(CODE_PLACEHOLDER, code)
    )
}

/// Issues the GET for one candidate and returns the response body.
///
/// Non-2xx statuses are turned into errors so that every failure mode
/// (timeout, transport, status) surfaces as a single `reqwest::Error`.
pub(crate) async fn fetch_candidate(
    client: &reqwest::Client,
    url: &str,
) -> Result<String, reqwest::Error> {
    trace!("GET {url}");
    let response = client.get(url).send().await?.error_for_status()?;
    response.text().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_default_endpoint() {
        let config = FetcherConfig::default();
        assert_eq!(
            request_url(&config, "01001"),
            "https://api1.correos.es/digital-services/searchengines/api/v1/suggestions?text=01001"
        );
    }

    #[test]
    fn test_request_url_custom_base() {
        let config = FetcherConfig {
            base_url: "http://127.0.0.1:4000/".to_string(),
            endpoint: "/lookup/{code}".to_string(),
            ..Default::default()
        };
        assert_eq!(
            request_url(&config, "52999"),
            "http://127.0.0.1:4000/lookup/52999"
        );
    }
}
