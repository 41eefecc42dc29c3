//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - HTTP client (timeout, default headers)
//! - Logger
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
