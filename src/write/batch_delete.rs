use crate::{common, error, store, write};

use aws_sdk_dynamodb::operation;
use serde::Serialize;

/// Batch delete operation removing any number of items from a table by key.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_batch::write;
/// use serde_json::json;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let batch_delete = write::batch_delete::BatchDelete {
///     keys: (0..100).map(|id| json!({"id": id.to_string()})).collect(),
///     table_name: "users".to_string(),
///     ..Default::default()
/// };
/// let summary = batch_delete
///     .send_with_progress(client, |_, summary| {
///         println!("{} calls so far", summary.api_call_count);
///         Ok(())
///     })
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct BatchDelete<T> {
    /// Arguments applied to every batch write call.
    pub batch_write_args: write::common::BatchWriteArgs,
    /// The primary keys of the items to delete.
    pub keys: Vec<T>,
    /// How unprocessed deletions are resubmitted.
    pub retry_options: common::retry::RetryOptions,
    /// The name of the table to delete from.
    pub table_name: String,
}

impl<T: Serialize> BatchDelete<T> {
    /// Execute the batch delete operation.
    pub async fn send<S>(self, store: &S) -> error::Result<common::summary::Summary, S::Error>
    where
        S: store::DocumentStore + ?Sized,
    {
        self.send_with_progress(store, |_, _| Ok(())).await
    }

    /// Execute the batch delete operation, calling `progress` after every batch write call.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_batch.batch_delete",
            skip_all,
            fields(table_name = %self.table_name, key_count = self.keys.len()),
            err
        )
    )]
    pub async fn send_with_progress<S, F>(
        self,
        store: &S,
        progress: F,
    ) -> error::Result<common::summary::Summary, S::Error>
    where
        S: store::DocumentStore + ?Sized,
        F: FnMut(
            &operation::batch_write_item::BatchWriteItemOutput,
            &common::summary::Summary,
        ) -> std::result::Result<(), common::BoxError>,
    {
        let keys = common::to_items(self.keys)?;
        write::batch_write_item::run(
            store,
            &self.table_name,
            &keys,
            write::common::build_delete_params,
            &self.batch_write_args,
            &self.retry_options,
            progress,
        )
        .await
    }
}
