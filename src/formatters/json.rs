//! JSON formatter for structured output

use super::LogFormatter;
use crate::core::{LogContent, Result};

/// Renders the whole record as one compact JSON object (JSONL-friendly),
/// with camelCase field names and the level as its lowercase name.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl LogFormatter for JsonFormatter {
    fn format_log(&self, content: &LogContent) -> Result<String> {
        Ok(serde_json::to_string(content)?)
    }
}
