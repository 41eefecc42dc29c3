//! Error type definitions.
//!
//! This module defines all error and info types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors produced while fetching a province.
///
/// Any of these aborts the whole `fetch_region` call; no partial result is
/// returned alongside them.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The province id is outside the configured range. Raised before any I/O.
    #[error("Province [ {id} ] must be in range {min}..{max}")]
    InvalidRegion {
        /// Rejected id
        id: i64,
        /// Lower bound (inclusive)
        min: i64,
        /// Upper bound (inclusive)
        max: i64,
    },

    /// A request in the batch failed (transport error, timeout, or non-2xx status).
    #[error("Request for postal code {code} failed: {source}")]
    FetchFailed {
        /// Candidate code of the failed request
        code: String,
        /// Underlying HTTP error
        #[source]
        source: ReqwestError,
    },

    /// The task issuing a request panicked or was cancelled.
    #[error("Request task for postal code {code} did not complete: {source}")]
    TaskAborted {
        /// Candidate code of the aborted request
        code: String,
        /// Join failure reported by the runtime
        #[source]
        source: tokio::task::JoinError,
    },

    /// The body carried a `suggestions` array whose elements could not be decoded.
    #[error("Malformed suggestions for postal code {code}: {source}")]
    MalformedResponse {
        /// Candidate code of the offending response
        code: String,
        /// Decoding error
        #[source]
        source: serde_json::Error,
    },

    /// A suggestion label did not follow the expected component layout.
    #[error("Malformed suggestion label: {0}")]
    MalformedLabel(#[from] LabelError),
}

/// Errors from tokenizing a suggestion label.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// Fewer comma-separated components than postal code, province, region and country.
    #[error("label {label:?} has {found} components, expected at least {expected}")]
    TooFewComponents {
        /// The offending label
        label: String,
        /// Number of components found
        found: usize,
        /// Minimum required
        expected: usize,
    },
}

/// Errors from converting a stored row back into a record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    /// The row does not have exactly seven fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Required field count
        expected: usize,
        /// Actual field count
        found: usize,
    },

    /// A coordinate field is not a number.
    #[error("invalid {field} {value:?}: {source}")]
    Coordinate {
        /// Field name
        field: &'static str,
        /// Raw value
        value: String,
        /// Parse failure
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Errors from the CSV record store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The file could not be opened.
    #[error("Storage unavailable at {}: {source}", path.display())]
    Unavailable {
        /// File path
        path: PathBuf,
        /// Open failure
        #[source]
        source: csv::Error,
    },

    /// A row could not be read or decoded.
    #[error("Corrupt row in {}: {reason}", path.display())]
    Corrupt {
        /// File path
        path: PathBuf,
        /// What went wrong
        reason: String,
    },
}

/// Types of request failures tracked during a fetch.
///
/// These mirror the `reqwest::Error` categories so that the end-of-run summary
/// shows why a province failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// Request could not be built
    HttpRequestBuilderError,
    /// Request timed out
    HttpRequestTimeoutError,
    /// Connection failed
    HttpRequestConnectError,
    /// Non-success status other than 429 or 5xx
    HttpRequestStatusError,
    /// 429 Too Many Requests
    HttpRequestTooManyRequests,
    /// 5xx status
    HttpRequestServerError,
    /// Body could not be read
    HttpRequestBodyError,
    /// Any other transport error
    HttpRequestOtherError,
    /// Request task panicked or was cancelled
    RequestTaskAborted,
    /// Suggestions array could not be decoded
    MalformedSuggestions,
    /// Suggestion label had too few components
    MalformedLabel,
}

/// Informational counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// A request was issued
    RequestSent,
    /// A response had no `suggestions` field
    EmptyResponse,
    /// A suggestion was normalized into a record
    SuggestionParsed,
    /// A province was served from its cache file
    CacheHit,
    /// A province had no usable cache file
    CacheMiss,
    /// A cache file could not be written
    CacheWriteFailed,
}

impl ErrorType {
    /// Returns a human-readable label for this error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout",
            ErrorType::HttpRequestConnectError => "HTTP connect error",
            ErrorType::HttpRequestStatusError => "HTTP non-success status",
            ErrorType::HttpRequestTooManyRequests => "Too many requests (429)",
            ErrorType::HttpRequestServerError => "HTTP server error (5xx)",
            ErrorType::HttpRequestBodyError => "HTTP body read error",
            ErrorType::HttpRequestOtherError => "HTTP other error",
            ErrorType::RequestTaskAborted => "Request task aborted",
            ErrorType::MalformedSuggestions => "Malformed suggestions payload",
            ErrorType::MalformedLabel => "Malformed suggestion label",
        }
    }
}

impl InfoType {
    /// Returns a human-readable label for this info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::RequestSent => "Requests sent",
            InfoType::EmptyResponse => "Responses without suggestions",
            InfoType::SuggestionParsed => "Suggestions parsed",
            InfoType::CacheHit => "Provinces read from cache",
            InfoType::CacheMiss => "Provinces fetched",
            InfoType::CacheWriteFailed => "Cache writes failed",
        }
    }
}
