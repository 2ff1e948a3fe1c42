use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

#[cfg(any(test, feature = "mocks"))]
use mockall::{automock, predicate::*};

/// A decoded record payload: a schema-less JSON object. Values keep JSON's
/// dynamic typing (null/bool/number/string/array/object).
pub type ParsedItem = serde_json::Map<String, serde_json::Value>;

/// Write-only seam in front of the key-value store. `put_item` has overwrite
/// semantics: re-sending an item with the same key attributes replaces it.
#[cfg_attr(any(test, feature = "mocks"), automock)]
#[async_trait]
pub trait RecordStore: Debug {
    async fn put_item(&self, item: ParsedItem) -> Result<(), String>;
}

/// Ways a single record can fail. A missing `time` field is not one of them;
/// that is a normal branch, logged and skipped by the handler.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("record payload is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("record payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("store rejected write: {0}")]
    StoreWrite(String),
}

/// What to do when a record fails. `Abort` stops the batch at the first
/// error (the platform then re-delivers the whole batch); `Continue` logs
/// the failure and keeps going.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    #[default]
    Abort,
    Continue,
}
