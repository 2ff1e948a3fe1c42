use crate::core::{ParsedItem, RecordStore};
use async_trait::async_trait;
use aws_sdk_dynamodb::{types::AttributeValue, Client};
use std::collections::HashMap;

#[derive(Debug)]
pub struct DynamoDbRecordStore {
    table_name: String,
    dynamodb_client: Client,
}

impl DynamoDbRecordStore {
    pub fn new(table_name: String, dynamodb_client: Client) -> Self {
        Self {
            table_name,
            dynamodb_client,
        }
    }
}

fn to_dynamodb_item(item: &ParsedItem) -> Result<HashMap<String, AttributeValue>, String> {
    serde_dynamo::aws_sdk_dynamodb_1::to_item(item)
        .map_err(|e| format!("Error converting item: {:?}", e))
}

#[async_trait]
impl RecordStore for DynamoDbRecordStore {
    async fn put_item(&self, item: ParsedItem) -> Result<(), String> {
        let item = to_dynamodb_item(&item)?;

        // No condition expression: same-key retries overwrite the item. The
        // table's own key schema rejects items missing a key attribute.
        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map(|_| ())
            .map_err(|e| format!("Error adding item: {:?}", e))
    }
}
