//! Common utilities for DynamoDB batch and pagination helpers.
//!
//! This module provides shared types used across read and write operations,
//! including chunking, the running summary and the retry policy applied to
//! unprocessed batch remainders.

/// Splitting item lists into fixed-size chunks.
pub mod chunk;

/// Retry policy for unprocessed batch remainders.
pub mod retry;

/// Running summary of a multi-call operation.
pub mod summary;

use aws_sdk_dynamodb::types;
use serde::Serialize;
use serde_dynamo::to_item;
use std::{collections, error};

/// A DynamoDB item (or key) in its attribute value representation.
pub type Item = collections::HashMap<String, types::AttributeValue>;

/// Error returned by a progress callback.
pub type BoxError = Box<dyn error::Error + Send + Sync>;

pub(crate) fn to_items<T: Serialize>(values: Vec<T>) -> serde_dynamo::Result<Vec<Item>> {
    let mut items = Vec::with_capacity(values.len());
    for value in values {
        let item: Item = to_item(value)?;
        items.push(item);
    }
    Ok(items)
}

pub(crate) fn capacity_units(capacity: Option<&types::ConsumedCapacity>) -> f64 {
    capacity
        .and_then(|capacity| capacity.capacity_units)
        .unwrap_or(0.0)
}

pub(crate) fn total_capacity_units(capacities: Option<&[types::ConsumedCapacity]>) -> f64 {
    capacities
        .unwrap_or_default()
        .iter()
        .map(|capacity| capacity_units(Some(capacity)))
        .sum()
}
