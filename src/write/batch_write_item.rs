//! Chunked batch writes resubmitting unprocessed remainders.

use crate::{
    common::{self, retry::RetryOptions, summary::Summary},
    error::{Error, Result},
    store::DocumentStore,
    write::common::{
        BATCH_WRITE_MAX_ITEMS, BatchWriteArgs, BatchWriteInput, RequestItems, unprocessed_count,
    },
};

use aws_sdk_dynamodb::{error, operation};

/// Write `items` to `table_name` in chunks of at most [`BATCH_WRITE_MAX_ITEMS`].
///
/// Chunks are written strictly one after the other. Each chunk is turned into
/// a request by `build` and sent; while the store reports unprocessed requests,
/// they are resubmitted as they are (after the delay of `retry_options`) before
/// moving on to the next chunk. An empty `items` list issues no call at all.
///
/// After every call `progress` is called with the raw output and the running
/// summary. A failing call or callback aborts the whole write; chunks written
/// before the failure stay written.
pub async fn run<S, B, F>(
    store: &S,
    table_name: &str,
    items: &[common::Item],
    build: B,
    args: &BatchWriteArgs,
    retry_options: &RetryOptions,
    mut progress: F,
) -> Result<Summary, S::Error>
where
    S: DocumentStore + ?Sized,
    B: Fn(&str, &[common::Item]) -> std::result::Result<RequestItems, error::BuildError>,
    F: FnMut(
        &operation::batch_write_item::BatchWriteItemOutput,
        &Summary,
    ) -> std::result::Result<(), common::BoxError>,
{
    let mut summary = Summary::new(table_name, items.len());
    for chunk in common::chunk::chunk(items, BATCH_WRITE_MAX_ITEMS) {
        let mut request_items = build(table_name, chunk)?;
        let mut retries = 0;
        loop {
            let output = store
                .batch_write(BatchWriteInput::new(request_items, args))
                .await
                .map_err(Error::Store)?;
            summary.record_call(
                common::total_capacity_units(output.consumed_capacity.as_deref()),
                0,
            );
            progress(&output, &summary).map_err(Error::Progress)?;
            let unprocessed_items = output.unprocessed_items.unwrap_or_default();
            let unprocessed_count = unprocessed_count(&unprocessed_items);
            #[cfg(feature = "tracing")]
            tracing::debug!(
                table_name,
                api_call_count = summary.api_call_count,
                chunk_item_count = chunk.len(),
                unprocessed_count,
                "batch write"
            );
            if unprocessed_count == 0 {
                break;
            }
            if let Some(max_retries) = retry_options.max_retries {
                if retries >= max_retries {
                    return Err(Error::RetriesExhausted {
                        retries,
                        table_name: table_name.to_string(),
                    });
                }
            }
            retries += 1;
            #[cfg(feature = "tracing")]
            tracing::warn!(table_name, retries, unprocessed_count, "resubmitting unprocessed items");
            retry_options.policy.wait(retries).await;
            request_items = unprocessed_items;
        }
    }
    Ok(summary)
}
