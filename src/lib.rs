#![deny(missing_docs)]
#![deny(warnings)]

//! # DynamoDB Batch
//!
//! Helpers that hide DynamoDB's per-call limits behind single operations.
//!
//! ## Overview
//!
//! A single DynamoDB call reads at most one page and writes at most 25 items.
//! This library provides operations that:
//! - Follow continuation keys until a query or scan has returned every page
//! - Split batch writes into chunks of 25 and batch gets into chunks of 100
//! - Resubmit whatever the store reports as unprocessed before moving on
//! - Report a running [`Summary`](common::summary::Summary) after every call
//!
//! Every operation runs against a [`DocumentStore`](store::DocumentStore),
//! which is implemented for [`aws_sdk_dynamodb::Client`].
//!
//! ## Quick Example
//!
//! ```no_run
//! use aws_sdk_dynamodb::Client;
//! use dynamodb_batch::{read, write};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = Client::from_conf(aws_sdk_dynamodb::config::Config::builder().build());
//! // 60 items become three batch write calls, plus one per unprocessed remainder
//! let batch_put = write::batch_put::BatchPut {
//!     items: (0..60).map(|id| json!({"id": id.to_string(), "status": "new"})).collect(),
//!     table_name: "users".to_string(),
//!     ..Default::default()
//! };
//! let summary = batch_put.send(&client).await?;
//! assert_eq!(summary.in_item_count, 60);
//!
//! // Every page of the scan, however many there are
//! let scan = read::scan::Scan::<serde_json::Value> {
//!     read_args: read::common::ReadArgs {
//!         table_name: "users".to_string(),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! let items = scan
//!     .send_with_progress(&client, |page, summary| {
//!         println!("{} items after {} calls", page.items.len(), summary.api_call_count);
//!         Ok(())
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit spans for every operation and events for every call
//!
//! ## Modules
//!
//! - [`mod@common`] - Chunking, retry policy and the running summary
//! - [`mod@error`] - The error type shared by every operation
//! - [`mod@read`] - Paginated Query and Scan, chunked BatchGetItem
//! - [`mod@store`] - The store trait the operations run against
//! - [`mod@write`] - Chunked BatchPut and BatchDelete

/// Common utilities for chunking, retrying and summarizing operations.
pub mod common;

/// Error type returned by every operation.
pub mod error;

/// Read operations for retrieving data from DynamoDB tables.
///
/// This module provides operations for:
/// - Querying items with key conditions, across every page
/// - Scanning entire tables, across every page
/// - Batch retrieving any number of items
pub mod read;

/// The document store the operations run against.
pub mod store;

/// Write operations for writing data to DynamoDB tables.
///
/// This module provides operations for:
/// - Putting any number of items
/// - Deleting any number of items by key
pub mod write;
