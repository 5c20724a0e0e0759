use crate::{common, error, read, store};

use serde::Serialize;
use serde_dynamo::{Error, Result};

/// Scan operation fetching every page.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_batch::read;
/// use serde_json::Value;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let scan: read::scan::Scan<Value> = read::scan::Scan {
///     read_args: read::common::ReadArgs {
///         table_name: "users".to_string(),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// let items = scan
///     .send_with_progress(client, |page, summary| {
///         println!("{} items so far, {} in this page", summary.out_item_count, page.items.len());
///         Ok(())
///     })
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scan<T> {
    /// Additional read arguments (table name, filter, projection, etc.).
    pub read_args: read::common::ReadArgs<T>,
    /// Pagination options.
    pub read_options: read::common::ReadOptions,
    /// The segment number for parallel scans (0-indexed).
    pub segment: Option<i32>,
    /// The total number of segments for parallel scans.
    pub total_segments: Option<i32>,
}

impl<T: Serialize> TryFrom<Scan<T>> for read::common::ReadInput {
    type Error = Error;

    fn try_from(scan: Scan<T>) -> Result<Self> {
        let read_input: read::common::ReadInput = scan.read_args.try_into()?;
        let input = Self {
            segment: scan.segment,
            total_segments: scan.total_segments,
            ..read_input
        };
        Ok(input)
    }
}

impl<T: Serialize> Scan<T> {
    /// Execute the scan, following continuation keys until every page is read.
    pub async fn send<S>(self, store: &S) -> error::Result<Vec<common::Item>, S::Error>
    where
        S: store::DocumentStore + ?Sized,
    {
        self.send_with_progress(store, |_, _| Ok(())).await
    }

    /// Execute the scan, calling `progress` after every page.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_batch.scan",
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
            read::common::ReadKind::Scan,
            &input,
            &read_options,
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
    use rstest::rstest;
    use serde_json::Value;
    use std::collections;

    #[rstest]
    #[case::empty(
        Scan {
            read_args: read::common::ReadArgs {
                table_name: "a".to_string(),
                ..Default::default()
            },
            ..Default::default()
        },
        read::common::ReadInput {
            table_name: "a".to_string(),
            ..Default::default()
        }
    )]
    #[case::full(
        Scan {
            read_args: read::common::ReadArgs {
                consistent_read: Some(false),
                exclusive_start_key: Some(
                    collections::HashMap::from(
                        [
                            (
                                "b".to_string(),
                                Value::String(
                                    "c".to_string()
                                )
                            ),
                        ]
                    )
                ),
                filter_expression: Some("attribute_exists(d)".to_string()),
                table_name: "e".to_string(),
                ..Default::default()
            },
            segment: Some(1),
            total_segments: Some(10),
            ..Default::default()
        },
        read::common::ReadInput {
            consistent_read: Some(false),
            exclusive_start_key: Some(
                collections::HashMap::from(
                    [
                        (
                            "b".to_string(),
                            types::AttributeValue::S(
                                "c".to_string()
                            )
                        ),
                    ]
                )
            ),
            filter_expression: Some("attribute_exists(d)".to_string()),
            segment: Some(1),
            table_name: "e".to_string(),
            total_segments: Some(10),
            ..Default::default()
        }
    )]
    fn test_scan(#[case] args: Scan<Value>, #[case] expected: read::common::ReadInput) {
        let actual: read::common::ReadInput = args.try_into().unwrap();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_scan_send_with_progress_returns_all_items() {
        let key = |value: &str| {
            collections::HashMap::from([("a".to_string(), types::AttributeValue::S(value.to_string()))])
        };
        let store = MockStore::with_pages([
            Ok(read::common::ReadPage {
                items: vec![key("1"), key("2"), key("3")],
                last_evaluated_key: Some(key("3")),
                ..Default::default()
            }),
            Ok(read::common::ReadPage {
                items: vec![key("4"), key("5")],
                ..Default::default()
            }),
        ]);
        let scan: Scan<Value> = Scan {
            read_args: read::common::ReadArgs {
                table_name: "table1".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut summary = common::summary::Summary::default();
        let items = scan
            .send_with_progress(&store, |_, current| {
                summary = current.clone();
                Ok(())
            })
            .await
            .unwrap();
        assert_eq!(items, vec![key("1"), key("2"), key("3"), key("4"), key("5")]);
        assert_eq!(summary.api_call_count, 2);
        assert_eq!(summary.out_item_count, 5);
        let calls = store.read_calls();
        assert!(calls.iter().all(|(kind, _)| *kind == read::common::ReadKind::Scan));
        assert_eq!(calls[1].1.exclusive_start_key, Some(key("3")));
    }
}
