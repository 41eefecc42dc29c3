//! Error categorization.
//!
//! Maps fetch failures onto the `ErrorType` counters kept in `ProcessingStats`.

use super::stats::ProcessingStats;
use super::types::{ErrorType, FetchError};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// HTTP status is checked first so that a 429 or 5xx is reported as such even
/// though reqwest also flags it as a status error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        if status.as_u16() == crate::config::HTTP_STATUS_TOO_MANY_REQUESTS {
            return ErrorType::HttpRequestTooManyRequests;
        }
        if status.is_server_error() {
            return ErrorType::HttpRequestServerError;
        }
        return ErrorType::HttpRequestStatusError;
    }

    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_body() || error.is_decode() {
        ErrorType::HttpRequestBodyError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Categorizes a `FetchError`. Returns `None` for errors raised before any request.
pub fn categorize_fetch_error(error: &FetchError) -> Option<ErrorType> {
    match error {
        FetchError::InvalidRegion { .. } => None,
        FetchError::FetchFailed { source, .. } => Some(categorize_reqwest_error(source)),
        FetchError::TaskAborted { .. } => Some(ErrorType::RequestTaskAborted),
        FetchError::MalformedResponse { .. } => Some(ErrorType::MalformedSuggestions),
        FetchError::MalformedLabel(_) => Some(ErrorType::MalformedLabel),
    }
}

/// Updates processing statistics based on a `FetchError`.
pub fn update_error_stats(stats: &ProcessingStats, error: &FetchError) {
    if let Some(error_type) = categorize_fetch_error(error) {
        stats.increment_error(error_type);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::LabelError;

    #[test]
    fn test_invalid_region_is_not_counted() {
        let stats = ProcessingStats::new();
        let err = FetchError::InvalidRegion {
            id: 0,
            min: 1,
            max: 52,
        };
        assert_eq!(categorize_fetch_error(&err), None);
        update_error_stats(&stats, &err);
        assert_eq!(stats.total_errors(), 0);
    }

    #[test]
    fn test_malformed_label_is_counted() {
        let stats = ProcessingStats::new();
        let err = FetchError::MalformedLabel(LabelError::TooFewComponents {
            label: "ESP".to_string(),
            found: 1,
            expected: 4,
        });
        update_error_stats(&stats, &err);
        assert_eq!(stats.get_error_count(ErrorType::MalformedLabel), 1);
    }

    #[test]
    fn test_malformed_response_is_counted() {
        let source = serde_json::from_str::<u8>("not json").unwrap_err();
        let err = FetchError::MalformedResponse {
            code: "01001".to_string(),
            source,
        };
        assert_eq!(
            categorize_fetch_error(&err),
            Some(ErrorType::MalformedSuggestions)
        );
    }

    #[tokio::test]
    async fn test_builder_error_category() {
        let client = reqwest::Client::new();
        let err = client
            .get("not a url")
            .send()
            .await
            .expect_err("invalid URL should fail");
        assert_eq!(
            categorize_reqwest_error(&err),
            ErrorType::HttpRequestBuilderError
        );
    }

    // Status-code categories need a live response; they are exercised against
    // wiremock in tests/fetch_region.rs.
}
