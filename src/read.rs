//! Read operations fetching every item they select.
//!
//! This module provides reads that hide DynamoDB's per-call limits:
//! - Queries and scans following continuation keys until exhausted
//! - Batch gets chunking keys and resubmitting unprocessed ones

/// Batch get operation reading any number of keys.
pub mod batch_get_item;

/// Common types for read operations.
pub mod common;

/// Paginated read loop shared by queries and scans.
pub mod paginate;

/// Query operation fetching every page.
pub mod query;

/// Scan operation fetching every page.
pub mod scan;
