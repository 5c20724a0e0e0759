use crate::{read, store, write};

use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, Error, operation};

#[async_trait]
impl store::DocumentStore for Client {
    type Error = Error;

    async fn query(&self, input: read::common::ReadInput) -> Result<read::common::ReadPage, Error> {
        let builder = self
            .query()
            .set_key_condition_expression(input.key_condition_expression)
            .set_scan_index_forward(input.scan_index_forward);
        let output = crate::apply_read_input!(builder, input).send().await?;
        Ok(output.into())
    }

    async fn scan(&self, input: read::common::ReadInput) -> Result<read::common::ReadPage, Error> {
        let builder = self
            .scan()
            .set_segment(input.segment)
            .set_total_segments(input.total_segments);
        let output = crate::apply_read_input!(builder, input).send().await?;
        Ok(output.into())
    }

    async fn batch_write(
        &self,
        input: write::common::BatchWriteInput,
    ) -> Result<operation::batch_write_item::BatchWriteItemOutput, Error> {
        let output = self
            .batch_write_item()
            .set_request_items(Some(input.request_items))
            .set_return_consumed_capacity(input.return_consumed_capacity)
            .set_return_item_collection_metrics(input.return_item_collection_metrics)
            .send()
            .await?;
        Ok(output)
    }

    async fn batch_get(
        &self,
        input: read::batch_get_item::BatchGetInput,
    ) -> Result<operation::batch_get_item::BatchGetItemOutput, Error> {
        let output = self
            .batch_get_item()
            .set_request_items(Some(input.request_items))
            .set_return_consumed_capacity(input.return_consumed_capacity)
            .send()
            .await?;
        Ok(output)
    }
}
