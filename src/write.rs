//! Write operations for writing any number of items.
//!
//! This module provides batch writes that hide DynamoDB's per-call limits:
//! - Putting items 25 at a time
//! - Deleting items by key 25 at a time
//! - Resubmitting unprocessed requests before moving on

/// Batch delete operation removing items by key.
pub mod batch_delete;

/// Batch put operation creating or replacing items.
pub mod batch_put;

/// Chunked batch write loop shared by puts and deletes.
pub mod batch_write_item;

/// Common types and request builders for batch writes.
pub mod common;
