//! Error type shared by every operation of the crate.

use crate::common;

use aws_sdk_dynamodb::error;

/// Errors returned by paginated reads and chunked batch operations.
///
/// `E` is the error type of the [`DocumentStore`](crate::store::DocumentStore)
/// the operation runs against. Store failures are passed through unmodified.
/// Items already written before a failure stay written.
#[derive(Debug, thiserror::Error)]
pub enum Error<E> {
    /// A request could not be built from the given items or remainder.
    #[error("failed to build request")]
    Build(#[from] error::BuildError),
    /// The pagination guard was reached before the store stopped returning a
    /// continuation key.
    #[error("reading table `{table_name}` did not finish within {max_pages} pages")]
    PageLimitExceeded {
        /// The table being read.
        table_name: String,
        /// The configured page limit.
        max_pages: usize,
    },
    /// The progress callback failed. Later pages or chunks are not processed.
    #[error("progress callback failed")]
    Progress(#[source] common::BoxError),
    /// The store kept reporting unprocessed requests for a chunk after the
    /// configured number of retries.
    #[error("table `{table_name}` still has unprocessed requests after {retries} retries")]
    RetriesExhausted {
        /// The configured retry limit.
        retries: usize,
        /// The table being written to or read from.
        table_name: String,
    },
    /// A caller value could not be converted into a DynamoDB item.
    #[error("failed to serialize item")]
    Serialization(#[from] serde_dynamo::Error),
    /// The underlying store call failed.
    #[error("document store call failed")]
    Store(#[source] E),
}

/// Result type of the crate's operations, for a store failing with `E`.
pub type Result<T, E> = std::result::Result<T, Error<E>>;
