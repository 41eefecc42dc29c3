//! CSV persistence.
//!
//! The generic row store and the per-province cache files built on top of it.

pub mod cache;
pub mod store;

// Re-export commonly used items
pub use cache::RegionCache;
pub use store::{RecordStore, RowReader};
