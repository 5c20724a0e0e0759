//! The document store the operations run against.
//!
//! [`DocumentStore`] is the whole surface the paginated reader and the chunked
//! batch operations need. It is implemented for [`aws_sdk_dynamodb::Client`].

mod client;
#[cfg(test)]
pub(crate) mod mock;

use crate::{read, write};

use async_trait::async_trait;
use aws_sdk_dynamodb::operation;
use std::error;

/// A DynamoDB-like store exposing single-page reads and batch calls.
///
/// Every method issues exactly one call to the store. Continuation and
/// resubmission of unprocessed requests are driven by the caller.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Error returned when a call fails.
    type Error: error::Error + Send + Sync + 'static;

    /// Fetch a single page of a query.
    async fn query(&self, input: read::common::ReadInput) -> Result<read::common::ReadPage, Self::Error>;

    /// Fetch a single page of a scan.
    async fn scan(&self, input: read::common::ReadInput) -> Result<read::common::ReadPage, Self::Error>;

    /// Issue a single batch write call.
    async fn batch_write(
        &self,
        input: write::common::BatchWriteInput,
    ) -> Result<operation::batch_write_item::BatchWriteItemOutput, Self::Error>;

    /// Issue a single batch get call.
    async fn batch_get(
        &self,
        input: read::batch_get_item::BatchGetInput,
    ) -> Result<operation::batch_get_item::BatchGetItemOutput, Self::Error>;
}
