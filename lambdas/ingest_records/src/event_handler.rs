use base64::{engine::general_purpose::STANDARD, Engine};
use lambda_runtime::{tracing, Error, LambdaEvent};
use serde::Deserialize;
use shared::core::{FailurePolicy, IngestError, ParsedItem, RecordStore};

/// One invocation's batch, as delivered by the Kinesis event source mapping.
///
/// The payload stays base64-encoded until the loop reaches the record, so a
/// corrupt payload at index k only surfaces after records before k have been
/// fully processed.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecordIngestEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<InboundRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InboundRecord {
    pub kinesis: KinesisPayload,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KinesisPayload {
    /// Base64-encoded record payload.
    pub data: String,
    #[serde(rename = "sequenceNumber", default)]
    pub sequence_number: String,
}

pub(crate) struct HandlerDeps<S: RecordStore> {
    pub record_store: S,
    pub failure_policy: FailurePolicy,
}

pub(crate) async fn function_handler<S: RecordStore>(
    deps: &HandlerDeps<S>,
    event: LambdaEvent<RecordIngestEvent>,
) -> Result<String, Error> {
    let records = event.payload.records;
    let record_count = records.len();

    for record in records {
        if let Err(e) = process_record(&deps.record_store, &record).await {
            match deps.failure_policy {
                FailurePolicy::Abort => return Err(e.into()),
                FailurePolicy::Continue => {
                    tracing::error!(
                        "Failed to process record {}: {}",
                        record.kinesis.sequence_number,
                        e
                    );
                }
            }
        }
    }

    // The summary counts records seen, not records stored.
    Ok(format!("Successfully processed {} records.", record_count))
}

async fn process_record<S: RecordStore>(
    record_store: &S,
    record: &InboundRecord,
) -> Result<(), IngestError> {
    let payload = STANDARD.decode(&record.kinesis.data)?;
    let item: ParsedItem = serde_json::from_slice(&payload)?;

    if item.contains_key("time") {
        record_store
            .put_item(item)
            .await
            .map_err(IngestError::StoreWrite)?;
    } else {
        tracing::warn!(
            "The record has no time field: {}",
            serde_json::Value::Object(item)
        );
    }

    Ok(())
}
