//! Chunked batch gets resubmitting unprocessed keys.

use crate::{common, error, store};

use aws_sdk_dynamodb::{operation, types};
use serde::Serialize;
use std::collections;

/// Maximum number of keys in a single batch get call (DynamoDB limit).
pub const BATCH_GET_MAX_KEYS: usize = 100;

/// Keys to read in a batch get call, by table name.
///
/// Both what [`build_get_params`] produces and what the store reports back as
/// unprocessed.
pub type RequestKeys = collections::HashMap<String, types::KeysAndAttributes>;

/// Arguments applied to every key chunk of a batch get operation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchGetArgs {
    /// Whether to use a strongly consistent read.
    pub consistent_read: Option<bool>,
    /// Substitution tokens for attribute names used in `projection_expression`.
    pub expression_attribute_names: Option<collections::HashMap<String, String>>,
    /// Attributes to retrieve. If `None`, all attributes are retrieved.
    pub projection_expression: Option<String>,
    /// Whether to return the consumed capacity information.
    pub return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
}

/// Request sent to the store for a single batch get call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchGetInput {
    /// Keys to read by table name.
    pub request_items: RequestKeys,
    /// Whether to return consumed capacity.
    pub return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
}

/// Build the keys of a batch get call for a single table.
pub fn build_get_params(
    table_name: &str,
    keys: &[common::Item],
    args: &BatchGetArgs,
) -> Result<RequestKeys, aws_sdk_dynamodb::error::BuildError> {
    let keys_and_attributes = types::KeysAndAttributes::builder()
        .set_consistent_read(args.consistent_read)
        .set_expression_attribute_names(args.expression_attribute_names.clone())
        .set_keys(Some(keys.to_vec()))
        .set_projection_expression(args.projection_expression.clone())
        .build()?;
    Ok(RequestKeys::from([(table_name.to_string(), keys_and_attributes)]))
}

fn unprocessed_count(request_keys: &RequestKeys) -> usize {
    request_keys
        .values()
        .map(|keys_and_attributes| keys_and_attributes.keys().len())
        .sum()
}

/// Read the items of `keys` from `table_name` in chunks of at most [`BATCH_GET_MAX_KEYS`].
///
/// Chunks are read one after the other. While the store reports unprocessed
/// keys for a chunk, they are resubmitted as they are before moving on. Items
/// are returned in the order the store returned them.
pub async fn run<S, B, F>(
    store: &S,
    table_name: &str,
    keys: &[common::Item],
    build: B,
    args: &BatchGetArgs,
    retry_options: &common::retry::RetryOptions,
    mut progress: F,
) -> error::Result<Vec<common::Item>, S::Error>
where
    S: store::DocumentStore + ?Sized,
    B: Fn(&str, &[common::Item]) -> Result<RequestKeys, aws_sdk_dynamodb::error::BuildError>,
    F: FnMut(
        &operation::batch_get_item::BatchGetItemOutput,
        &common::summary::Summary,
    ) -> Result<(), common::BoxError>,
{
    let mut summary = common::summary::Summary::new(table_name, keys.len());
    let mut items = Vec::new();
    for chunk in common::chunk::chunk(keys, BATCH_GET_MAX_KEYS) {
        let mut request_items = build(table_name, chunk)?;
        let mut retries = 0;
        loop {
            let input = BatchGetInput {
                request_items,
                return_consumed_capacity: args.return_consumed_capacity.clone(),
            };
            let output = store.batch_get(input).await.map_err(error::Error::Store)?;
            let response_count = output
                .responses
                .as_ref()
                .and_then(|responses| responses.get(table_name))
                .map_or(0, Vec::len);
            summary.record_call(
                common::total_capacity_units(output.consumed_capacity.as_deref()),
                response_count,
            );
            progress(&output, &summary).map_err(error::Error::Progress)?;
            if let Some(mut responses) = output.responses {
                items.extend(responses.remove(table_name).unwrap_or_default());
            }
            let unprocessed_keys = output.unprocessed_keys.unwrap_or_default();
            let unprocessed_count = unprocessed_count(&unprocessed_keys);
            #[cfg(feature = "tracing")]
            tracing::debug!(
                table_name,
                api_call_count = summary.api_call_count,
                chunk_key_count = chunk.len(),
                unprocessed_count,
                "batch get"
            );
            if unprocessed_count == 0 {
                break;
            }
            if let Some(max_retries) = retry_options.max_retries {
                if retries >= max_retries {
                    return Err(error::Error::RetriesExhausted {
                        retries,
                        table_name: table_name.to_string(),
                    });
                }
            }
            retries += 1;
            #[cfg(feature = "tracing")]
            tracing::warn!(table_name, retries, unprocessed_count, "resubmitting unprocessed keys");
            retry_options.policy.wait(retries).await;
            request_items = unprocessed_keys;
        }
    }
    Ok(items)
}

/// Batch get operation reading any number of items of a table by key.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_batch::read;
/// use serde_json::json;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let batch_get = read::batch_get_item::BatchGet {
///     keys: vec![json!({"id": "1"}), json!({"id": "2"})],
///     table_name: "users".to_string(),
///     ..Default::default()
/// };
/// let items = batch_get.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct BatchGet<T> {
    /// Arguments applied to every batch get call.
    pub batch_get_args: BatchGetArgs,
    /// The primary keys of the items to read.
    pub keys: Vec<T>,
    /// How unprocessed keys are resubmitted.
    pub retry_options: common::retry::RetryOptions,
    /// The name of the table to read from.
    pub table_name: String,
}

impl<T: Serialize> BatchGet<T> {
    /// Execute the batch get operation.
    pub async fn send<S>(self, store: &S) -> error::Result<Vec<common::Item>, S::Error>
    where
        S: store::DocumentStore + ?Sized,
    {
        self.send_with_progress(store, |_, _| Ok(())).await
    }

    /// Execute the batch get operation, calling `progress` after every batch get call.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_batch.batch_get",
            skip_all,
            fields(table_name = %self.table_name, key_count = self.keys.len()),
            err
        )
    )]
    pub async fn send_with_progress<S, F>(
        self,
        store: &S,
        progress: F,
    ) -> error::Result<Vec<common::Item>, S::Error>
    where
        S: store::DocumentStore + ?Sized,
        F: FnMut(
            &operation::batch_get_item::BatchGetItemOutput,
            &common::summary::Summary,
        ) -> Result<(), common::BoxError>,
    {
        let keys = common::to_items(self.keys)?;
        let batch_get_args = self.batch_get_args;
        run(
            store,
            &self.table_name,
            &keys,
            |table_name, keys| build_get_params(table_name, keys, &batch_get_args),
            &batch_get_args,
            &self.retry_options,
            progress,
        )
        .await
    }
}
