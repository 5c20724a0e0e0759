use crate::{read, store, write};

use async_trait::async_trait;
use aws_sdk_dynamodb::operation;
use std::{collections, sync};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("mock store failure: {0}")]
pub(crate) struct MockError(pub(crate) String);

/// Scripted in-memory store recording every request it receives.
///
/// Responses are served in order. Once a script is exhausted, reads return an
/// empty last page and batch calls report everything as processed.
#[derive(Debug, Default)]
pub(crate) struct MockStore {
    batch_get_calls: sync::Mutex<Vec<read::batch_get_item::BatchGetInput>>,
    batch_gets: sync::Mutex<
        collections::VecDeque<Result<operation::batch_get_item::BatchGetItemOutput, MockError>>,
    >,
    batch_write_calls: sync::Mutex<Vec<write::common::BatchWriteInput>>,
    batch_writes: sync::Mutex<
        collections::VecDeque<Result<operation::batch_write_item::BatchWriteItemOutput, MockError>>,
    >,
    pages: sync::Mutex<collections::VecDeque<Result<read::common::ReadPage, MockError>>>,
    read_calls: sync::Mutex<Vec<(read::common::ReadKind, read::common::ReadInput)>>,
}

impl MockStore {
    pub(crate) fn with_pages(
        pages: impl IntoIterator<Item = Result<read::common::ReadPage, MockError>>,
    ) -> Self {
        Self {
            pages: sync::Mutex::new(pages.into_iter().collect()),
            ..Default::default()
        }
    }

    pub(crate) fn with_batch_writes(
        outputs: impl IntoIterator<
            Item = Result<operation::batch_write_item::BatchWriteItemOutput, MockError>,
        >,
    ) -> Self {
        Self {
            batch_writes: sync::Mutex::new(outputs.into_iter().collect()),
            ..Default::default()
        }
    }

    pub(crate) fn with_batch_gets(
        outputs: impl IntoIterator<
            Item = Result<operation::batch_get_item::BatchGetItemOutput, MockError>,
        >,
    ) -> Self {
        Self {
            batch_gets: sync::Mutex::new(outputs.into_iter().collect()),
            ..Default::default()
        }
    }

    pub(crate) fn read_calls(&self) -> Vec<(read::common::ReadKind, read::common::ReadInput)> {
        self.read_calls.lock().unwrap().clone()
    }

    pub(crate) fn batch_write_calls(&self) -> Vec<write::common::BatchWriteInput> {
        self.batch_write_calls.lock().unwrap().clone()
    }

    pub(crate) fn batch_get_calls(&self) -> Vec<read::batch_get_item::BatchGetInput> {
        self.batch_get_calls.lock().unwrap().clone()
    }

    fn read(
        &self,
        kind: read::common::ReadKind,
        input: read::common::ReadInput,
    ) -> Result<read::common::ReadPage, MockError> {
        self.read_calls.lock().unwrap().push((kind, input));
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(read::common::ReadPage::default()))
    }
}

#[async_trait]
impl store::DocumentStore for MockStore {
    type Error = MockError;

    async fn query(
        &self,
        input: read::common::ReadInput,
    ) -> Result<read::common::ReadPage, MockError> {
        self.read(read::common::ReadKind::Query, input)
    }

    async fn scan(
        &self,
        input: read::common::ReadInput,
    ) -> Result<read::common::ReadPage, MockError> {
        self.read(read::common::ReadKind::Scan, input)
    }

    async fn batch_write(
        &self,
        input: write::common::BatchWriteInput,
    ) -> Result<operation::batch_write_item::BatchWriteItemOutput, MockError> {
        self.batch_write_calls.lock().unwrap().push(input);
        self.batch_writes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(operation::batch_write_item::BatchWriteItemOutput::builder().build()))
    }

    async fn batch_get(
        &self,
        input: read::batch_get_item::BatchGetInput,
    ) -> Result<operation::batch_get_item::BatchGetItemOutput, MockError> {
        self.batch_get_calls.lock().unwrap().push(input);
        self.batch_gets
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(operation::batch_get_item::BatchGetItemOutput::builder().build()))
    }
}
