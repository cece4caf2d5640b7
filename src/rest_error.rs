//! The `RestError` value returned across service boundaries

use crate::error::{RestErrorsError, RestErrorsResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Structured API error: HTTP status, machine-readable code, message and causes.
///
/// Values are immutable once built. The JSON form uses the field names
/// `message`, `status`, `error` and `causes`, and `causes` is always
/// written as a list (possibly empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestError {
    /// Human-readable description
    message: String,

    /// HTTP status code, not range-checked
    status: u16,

    /// Short machine-readable identifier such as `not_found`
    error: String,

    /// Stringified underlying causes, in insertion order
    #[serde(deserialize_with = "deserialize_causes")]
    causes: Vec<String>,
}

impl RestError {
    /// Create a rest error with an arbitrary status and error code.
    ///
    /// Each cause is stored as its `Display` rendering.
    pub fn new<I>(
        message: impl Into<String>,
        status: u16,
        error: impl Into<String>,
        causes: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        Self {
            message: message.into(),
            status,
            error: error.into(),
            causes: causes.into_iter().map(|cause| cause.to_string()).collect(),
        }
    }

    /// 400 `bad_request`
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::without_causes(message, 400, "bad_request")
    }

    /// 404 `not_found`
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::without_causes(message, 404, "not_found")
    }

    /// 401 `unauthorized`
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::without_causes(message, 401, "unauthorized")
    }

    /// 500 `internal_server_error`, carrying `err` as the single cause when present
    pub fn internal_server_error(
        message: impl Into<String>,
        err: Option<&dyn fmt::Display>,
    ) -> Self {
        Self::new(message, 500, "internal_server_error", err)
    }

    /// Decode a rest error from its JSON representation.
    ///
    /// Any decoding failure, including empty input, is reported as
    /// [`RestErrorsError::InvalidJson`].
    pub fn from_bytes(bytes: &[u8]) -> RestErrorsResult<Self> {
        serde_json::from_slice(bytes).map_err(|source| {
            tracing::debug!(
                "Failed to decode rest error from {} bytes: {}",
                bytes.len(),
                source
            );
            RestErrorsError::InvalidJson { source }
        })
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error_code(&self) -> &str {
        &self.error
    }

    pub fn causes(&self) -> &[String] {
        &self.causes
    }

    fn without_causes(message: impl Into<String>, status: u16, error: &str) -> Self {
        Self {
            message: message.into(),
            status,
            error: error.to_string(),
            causes: Vec::new(),
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "message: {} - status: {} - error: {} - causes: [{}]",
            self.message,
            self.status,
            self.error,
            self.causes.join(", ")
        )
    }
}

impl std::error::Error for RestError {}

/// Accepts a missing or `null` list, and keeps non-string entries as their JSON text.
fn deserialize_causes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|cause| match cause {
            Value::String(text) => text,
            other => other.to_string(),
        })
        .collect())
}
