use crate::{common, error, read, store};

use serde::Serialize;
use serde_dynamo::{Error, Result};

/// Query operation fetching every page.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_batch::read;
/// use serde_json::Value;
/// use std::collections::HashMap;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let query = read::query::Query {
///     key_condition_expression: "#id = :id".to_string(),
///     read_args: read::common::ReadArgs {
///         expression_attribute_names: Some(HashMap::from([("#id".to_string(), "id".to_string())])),
///         expression_attribute_values: Some(HashMap::from([(":id".to_string(), Value::from("1"))])),
///         table_name: "users".to_string(),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// let items = query.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query<T> {
    /// Key condition selecting the partition (and optionally a sort key range).
    pub key_condition_expression: String,
    /// Additional read arguments (table name, filter, projection, etc.).
    pub read_args: read::common::ReadArgs<T>,
    /// Pagination options.
    pub read_options: read::common::ReadOptions,
    /// Whether to traverse the index forward (ascending) or backward (descending).
    pub scan_index_forward: Option<bool>,
}

impl<T: Serialize> TryFrom<Query<T>> for read::common::ReadInput {
    type Error = Error;

    fn try_from(query: Query<T>) -> Result<Self> {
        let read_input: read::common::ReadInput = query.read_args.try_into()?;
        let input = Self {
            key_condition_expression: Some(query.key_condition_expression),
            scan_index_forward: query.scan_index_forward,
            ..read_input
        };
        Ok(input)
    }
}

impl<T: Serialize> Query<T> {
    /// Execute the query, following continuation keys until every page is read.
    pub async fn send<S>(self, store: &S) -> error::Result<Vec<common::Item>, S::Error>
    where
        S: store::DocumentStore + ?Sized,
    {
        self.send_with_progress(store, |_, _| Ok(())).await
    }

    /// Execute the query, calling `progress` after every page.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_batch.query",
            skip_all,
            fields(table_name = %self.read_args.table_name),
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
            &read::common::ReadPage,
            &common::summary::Summary,
        ) -> std::result::Result<(), common::BoxError>,
    {
        let read_options = self.read_options;
        let input: read::common::ReadInput = self.try_into()?;
        read::paginate::run(
            store,
            read::common::ReadKind::Query,
            &input,
            &read_options,
            progress,
        )
        .await
    }
}
