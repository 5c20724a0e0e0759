use crate::{common, error, store, write};

use aws_sdk_dynamodb::operation;
use serde::Serialize;

/// Batch put operation writing any number of items to a table.
///
/// Items are written 25 at a time, resubmitting whatever the store reports as
/// unprocessed before moving on.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_batch::write;
/// use serde_json::json;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let batch_put = write::batch_put::BatchPut {
///     items: vec![
///         json!({"id": "1", "name": "John"}),
///         json!({"id": "2", "name": "Jane"}),
///     ],
///     table_name: "users".to_string(),
///     ..Default::default()
/// };
/// let summary = batch_put.send(client).await?;
/// assert_eq!(summary.in_item_count, 2);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct BatchPut<T> {
    /// Arguments applied to every batch write call.
    pub batch_write_args: write::common::BatchWriteArgs,
    /// The items to put into the table.
    pub items: Vec<T>,
    /// How unprocessed items are resubmitted.
    pub retry_options: common::retry::RetryOptions,
    /// The name of the table to write to.
    pub table_name: String,
}

impl<T: Serialize> BatchPut<T> {
    /// Execute the batch put operation.
    pub async fn send<S>(self, store: &S) -> error::Result<common::summary::Summary, S::Error>
    where
        S: store::DocumentStore + ?Sized,
    {
        self.send_with_progress(store, |_, _| Ok(())).await
    }

    /// Execute the batch put operation, calling `progress` after every batch write call.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_batch.batch_put",
            skip_all,
            fields(table_name = %self.table_name, item_count = self.items.len()),
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
        let items = common::to_items(self.items)?;
        write::batch_write_item::run(
            store,
            &self.table_name,
            &items,
            write::common::build_put_params,
            &self.batch_write_args,
            &self.retry_options,
            progress,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock::MockStore;

    use aws_sdk_dynamodb::types;
    use serde_json::{Value, json};
    use std::collections;

    fn input_set() -> Vec<Value> {
        vec![
            json!({"f1": 11, "f2": 21}),
            json!({"f1": 12, "f2": 22}),
            json!({"f1": 13, "f2": 23}),
            json!({"f1": 14, "f2": 24}),
            json!({"f1": 15, "f2": 25}),
        ]
    }

    fn items(values: &[Value]) -> Vec<common::Item> {
        common::to_items(values.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_batch_put_calls_batch_write_with_put_requests() {
        let input_set = input_set();
        let remainder = write::common::build_put_params("table1", &items(&input_set[2..])).unwrap();
        let store = MockStore::with_batch_writes([
            Ok(operation::batch_write_item::BatchWriteItemOutput::builder()
                .set_unprocessed_items(Some(remainder.clone()))
                .build()),
            Ok(operation::batch_write_item::BatchWriteItemOutput::builder()
                .set_unprocessed_items(Some(collections::HashMap::new()))
                .build()),
        ]);
        let batch_put = BatchPut {
            items: input_set.clone(),
            table_name: "table1".to_string(),
            ..Default::default()
        };
        let mut last_summary = common::summary::Summary::default();
        let summary = batch_put
            .send_with_progress(&store, |_, summary| {
                last_summary = summary.clone();
                Ok(())
            })
            .await
            .unwrap();
        let calls = store.batch_write_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0].request_items,
            write::common::build_put_params("table1", &items(&input_set)).unwrap()
        );
        assert_eq!(calls[1].request_items, remainder);
        assert_eq!(summary.in_item_count, input_set.len());
        assert_eq!(last_summary.api_call_count, 2);
        assert_eq!(summary, last_summary);
    }

    #[tokio::test]
    async fn test_batch_put_serializes_items() {
        let store = MockStore::default();
        let batch_put = BatchPut {
            items: vec![json!({"a": "b"})],
            table_name: "c".to_string(),
            ..Default::default()
        };
        batch_put.send(&store).await.unwrap();
        let put_request = types::PutRequest::builder()
            .set_item(Some(collections::HashMap::from([(
                "a".to_string(),
                types::AttributeValue::S("b".to_string()),
            )])))
            .build()
            .unwrap();
        assert_eq!(
            store.batch_write_calls()[0].request_items,
            collections::HashMap::from([(
                "c".to_string(),
                vec![types::WriteRequest::builder().put_request(put_request).build()],
            )])
        );
    }

    #[tokio::test]
    async fn test_batch_put_rejects_unserializable_items_before_writing() {
        let store = MockStore::default();
        let batch_put = BatchPut {
            items: vec![json!({"a": "b"}), json!("c")],
            table_name: "d".to_string(),
            ..Default::default()
        };
        let result = batch_put.send(&store).await;
        assert!(matches!(result, Err(error::Error::Serialization(_))));
        assert!(store.batch_write_calls().is_empty());
    }
}
