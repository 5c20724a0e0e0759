use crate::common;

use aws_sdk_dynamodb::{operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};
use std::{collections, fmt};

/// Default page limit of a paginated read.
pub const DEFAULT_MAX_PAGES: usize = 10_000;

/// The read operation a paginated read drives.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ReadKind {
    /// `Query`: items sharing a partition key.
    Query,
    /// `Scan`: every item of a table or index.
    Scan,
}

impl fmt::Display for ReadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.write_str("query"),
            Self::Scan => f.write_str("scan"),
        }
    }
}

/// Options of a paginated read.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReadOptions {
    /// Maximum number of pages to fetch.
    ///
    /// Reaching the limit while the store still returns a continuation key fails
    /// the read with [`Error::PageLimitExceeded`](crate::error::Error::PageLimitExceeded).
    /// `None` follows continuation keys without limit.
    pub max_pages: Option<usize>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            max_pages: Some(DEFAULT_MAX_PAGES),
        }
    }
}

/// Request sent to the store for a single page of a query or scan.
///
/// A paginated read builds a fresh value per page from the caller's request,
/// with `exclusive_start_key` set to the key returned by the previous page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadInput {
    /// Whether to use a strongly consistent read.
    pub consistent_read: Option<bool>,
    /// Key of the item after which the page starts.
    pub exclusive_start_key: Option<common::Item>,
    /// Substitution tokens for attribute names.
    pub expression_attribute_names: Option<collections::HashMap<String, String>>,
    /// Substitution tokens for attribute values.
    pub expression_attribute_values: Option<collections::HashMap<String, types::AttributeValue>>,
    /// Filter applied to the items read.
    pub filter_expression: Option<String>,
    /// Secondary index to read instead of the table.
    pub index_name: Option<String>,
    /// Key condition of a query. Ignored by scans.
    pub key_condition_expression: Option<String>,
    /// Maximum number of items evaluated per page.
    pub limit: Option<i32>,
    /// Attributes to retrieve.
    pub projection_expression: Option<String>,
    /// Whether to return consumed capacity.
    pub return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
    /// Index traversal order of a query. Ignored by scans.
    pub scan_index_forward: Option<bool>,
    /// Segment of a parallel scan. Ignored by queries.
    pub segment: Option<i32>,
    /// Attributes to return.
    pub select: Option<types::Select>,
    /// The table to read from.
    pub table_name: String,
    /// Number of segments of a parallel scan. Ignored by queries.
    pub total_segments: Option<i32>,
}

/// Arguments common to queries and scans.
///
/// Attribute values are any serializable value and are converted with
/// `serde_dynamo` when the operation is sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadArgs<T> {
    /// Whether to use a consistent read.
    ///
    /// `true` for strongly consistent reads, `false` or `None` for eventually consistent reads.
    pub consistent_read: Option<bool>,
    /// Key to start the first page after.
    ///
    /// Following pages start after the key returned by the previous page.
    pub exclusive_start_key: Option<collections::HashMap<String, T>>,
    /// Substitution tokens for attribute names, such as `#name`.
    pub expression_attribute_names: Option<collections::HashMap<String, String>>,
    /// Substitution tokens for attribute values, such as `:value`.
    pub expression_attribute_values: Option<collections::HashMap<String, T>>,
    /// Filter applied to the items read, before they are returned.
    pub filter_expression: Option<String>,
    /// The name of a global or local secondary index to read instead of the table.
    pub index_name: Option<String>,
    /// The maximum number of items to evaluate per page.
    ///
    /// This bounds the page size, not the number of items returned overall.
    pub limit: Option<i32>,
    /// Attributes to retrieve. If `None`, all attributes are retrieved.
    pub projection_expression: Option<String>,
    /// Whether to return the consumed capacity of every page.
    ///
    /// Required for [`Summary::consumed_capacity`](crate::common::summary::Summary::consumed_capacity)
    /// to be anything but zero.
    pub return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
    /// Which attributes to return.
    pub select: Option<types::Select>,
    /// The name of the table to read from.
    pub table_name: String,
}

pub(crate) fn to_attribute_map<T: Serialize>(
    values: collections::HashMap<String, T>,
) -> Result<collections::HashMap<String, types::AttributeValue>> {
    let mut serialized_values = collections::HashMap::with_capacity(values.len());
    for (key, value) in values {
        let value = to_attribute_value(value)?;
        serialized_values.insert(key, value);
    }
    Ok(serialized_values)
}

impl<T: Serialize> TryFrom<ReadArgs<T>> for ReadInput {
    type Error = Error;

    fn try_from(read_args: ReadArgs<T>) -> Result<Self> {
        let exclusive_start_key = read_args
            .exclusive_start_key
            .map(to_attribute_map)
            .transpose()?;
        let expression_attribute_values = read_args
            .expression_attribute_values
            .map(to_attribute_map)
            .transpose()?;
        let input = Self {
            consistent_read: read_args.consistent_read,
            exclusive_start_key,
            expression_attribute_names: read_args.expression_attribute_names,
            expression_attribute_values,
            filter_expression: read_args.filter_expression,
            index_name: read_args.index_name,
            limit: read_args.limit,
            projection_expression: read_args.projection_expression,
            return_consumed_capacity: read_args.return_consumed_capacity,
            select: read_args.select,
            table_name: read_args.table_name,
            ..Default::default()
        };
        Ok(input)
    }
}

/// A single page returned by a query or scan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadPage {
    /// Capacity consumed by the page, when requested.
    pub consumed_capacity: Option<types::ConsumedCapacity>,
    /// Number of items in the page, after filtering.
    pub count: i32,
    /// Items of the page, in store order.
    pub items: Vec<common::Item>,
    /// Key to continue from. `None` when the read is complete.
    pub last_evaluated_key: Option<common::Item>,
    /// Number of items evaluated, before filtering.
    pub scanned_count: i32,
}

macro_rules! impl_read_page_from {
    ($output_type:ty) => {
        impl From<$output_type> for ReadPage {
            fn from(output: $output_type) -> Self {
                Self {
                    consumed_capacity: output.consumed_capacity,
                    count: output.count,
                    items: output.items.unwrap_or_default(),
                    last_evaluated_key: output.last_evaluated_key.filter(|key| !key.is_empty()),
                    scanned_count: output.scanned_count,
                }
            }
        }
    };
}

impl_read_page_from!(operation::query::QueryOutput);
impl_read_page_from!(operation::scan::ScanOutput);

/// apply common read input settings to a query or scan builder
#[macro_export]
macro_rules! apply_read_input {
    ($builder:expr, $read_input:expr) => {
        $builder
            .set_consistent_read($read_input.consistent_read)
            .set_exclusive_start_key($read_input.exclusive_start_key)
            .set_expression_attribute_names($read_input.expression_attribute_names)
            .set_expression_attribute_values($read_input.expression_attribute_values)
            .set_filter_expression($read_input.filter_expression)
            .set_index_name($read_input.index_name)
            .set_limit($read_input.limit)
            .set_projection_expression($read_input.projection_expression)
            .set_return_consumed_capacity($read_input.return_consumed_capacity)
            .set_select($read_input.select)
            .table_name($read_input.table_name)
    };
}
