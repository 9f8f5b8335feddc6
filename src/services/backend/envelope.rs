use crate::core::errors::{Error, Result};
use crate::models::DirectoryEntry;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
    #[serde(other)]
    Unknown,
}

/// `{"status": ..., "data": ..., "message": ...}` as returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T: Default> ApiResponse<T> {
    pub fn into_result(self) -> Result<T> {
        match self.status {
            ResponseStatus::Success => Ok(self.data.unwrap_or_default()),
            ResponseStatus::Error => Err(Error::Backend {
                message: self.message.unwrap_or_else(|| "Unknown error".to_string()),
            }),
            ResponseStatus::Unknown => Err(Error::UnexpectedResponse),
        }
    }
}

/// Unwraps a response envelope. A success without `data` yields `T::default()`.
pub fn decode_response<T: DeserializeOwned + Default>(body: &str) -> Result<T> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() || value.get("status").is_none() {
        tracing::warn!("unexpected response format");
        return Err(Error::UnexpectedResponse);
    }
    let response: ApiResponse<T> = serde_json::from_value(value)?;
    response.into_result()
}

/// Reads an entry list from either a bare JSON array or a response envelope.
pub fn decode_entries(body: &str) -> Result<Vec<DirectoryEntry>> {
    let value: Value = serde_json::from_str(body)?;
    if value.is_array() {
        return Ok(serde_json::from_value(value)?);
    }
    decode_response(body)
}
