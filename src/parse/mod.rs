//! Response parsing and normalization.
//!
//! This module turns suggestions responses into records:
//! - Decoding the optional `suggestions` array from a response body
//! - Tokenizing each positional suggestion label into its fields

mod label;
mod response;

// Re-export public API
pub use label::SuggestionLabel;
pub use response::parse_suggestions;
