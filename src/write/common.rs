use crate::common;

use aws_sdk_dynamodb::{error, types};
use std::collections;

/// Maximum number of requests in a single batch write call (DynamoDB limit).
pub const BATCH_WRITE_MAX_ITEMS: usize = 25;

/// Write requests of a batch write call, by table name.
///
/// This is both what a request builder produces for a fresh chunk and what the
/// store reports back as unprocessed, so a remainder is resubmitted verbatim.
pub type RequestItems = collections::HashMap<String, Vec<types::WriteRequest>>;

/// Arguments common to every call of a batch write operation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchWriteArgs {
    /// Whether to return the consumed capacity information.
    ///
    /// Required for [`Summary::consumed_capacity`](crate::common::summary::Summary::consumed_capacity)
    /// to be anything but zero.
    pub return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
    /// Whether to return item collection metrics.
    pub return_item_collection_metrics: Option<types::ReturnItemCollectionMetrics>,
}

/// Request sent to the store for a single batch write call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchWriteInput {
    /// Write requests by table name.
    pub request_items: RequestItems,
    /// Whether to return consumed capacity.
    pub return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
    /// Whether to return item collection metrics.
    pub return_item_collection_metrics: Option<types::ReturnItemCollectionMetrics>,
}

impl BatchWriteInput {
    pub(crate) fn new(request_items: RequestItems, args: &BatchWriteArgs) -> Self {
        Self {
            request_items,
            return_consumed_capacity: args.return_consumed_capacity.clone(),
            return_item_collection_metrics: args.return_item_collection_metrics.clone(),
        }
    }
}

/// Build the put requests of a batch write call, one per item.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use dynamodb_batch::write;
/// use std::collections::HashMap;
///
/// let item = HashMap::from([("id".to_string(), AttributeValue::S("1".to_string()))]);
/// let request_items = write::common::build_put_params("users", &[item])?;
/// assert_eq!(request_items["users"].len(), 1);
/// # Ok::<(), aws_sdk_dynamodb::error::BuildError>(())
/// ```
pub fn build_put_params(
    table_name: &str,
    items: &[common::Item],
) -> Result<RequestItems, error::BuildError> {
    let mut requests = Vec::with_capacity(items.len());
    for item in items {
        let put_request = types::PutRequest::builder()
            .set_item(Some(item.clone()))
            .build()?;
        requests.push(
            types::WriteRequest::builder()
                .put_request(put_request)
                .build(),
        );
    }
    Ok(RequestItems::from([(table_name.to_string(), requests)]))
}

/// Build the delete requests of a batch write call, one per key.
pub fn build_delete_params(
    table_name: &str,
    keys: &[common::Item],
) -> Result<RequestItems, error::BuildError> {
    let mut requests = Vec::with_capacity(keys.len());
    for key in keys {
        let delete_request = types::DeleteRequest::builder()
            .set_key(Some(key.clone()))
            .build()?;
        requests.push(
            types::WriteRequest::builder()
                .delete_request(delete_request)
                .build(),
        );
    }
    Ok(RequestItems::from([(table_name.to_string(), requests)]))
}

pub(crate) fn unprocessed_count(request_items: &RequestItems) -> usize {
    request_items.values().map(Vec::len).sum()
}
