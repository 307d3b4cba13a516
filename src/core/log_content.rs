//! Per-call log record assembled by the logger and consumed by every
//! formatter/writer pair.

use super::log_level::LogLevel;
use serde::Serialize;
use std::collections::BTreeMap;

/// Supplementary payload attached to every record emitted by a logger whose
/// configuration declares an extended-payload factory. All fields optional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtendedPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ExtendedPayload {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    #[must_use]
    pub fn with_context_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.error.is_none() && self.context.is_none() && self.data.is_none()
    }
}

/// One log record. Built fresh for every accepted `log` call and never
/// mutated afterwards; the same instance is handed to the formatter and the
/// writer of every pair in the fan-out list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogContent {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
    /// Direct payload supplied by the caller of `log`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Payload produced by the owning config's extended-payload factory.
    pub extended_data: ExtendedPayload,
}

impl LogContent {
    pub fn new(
        timestamp: String,
        level: LogLevel,
        message: String,
        data: Option<serde_json::Value>,
        extended_data: ExtendedPayload,
    ) -> Self {
        Self {
            timestamp,
            level,
            message,
            data,
            extended_data,
        }
    }
}
