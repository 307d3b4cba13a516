//! Pipe-delimited plain text formatter

use super::LogFormatter;
use crate::core::{LogContent, Result};
use std::fmt::Write;

/// The built-in default formatter. Renders a record as a single
/// pipe-delimited line:
///
/// ```text
/// 2021-10-12T00:00:00.000Z | level: warn | message: "M" | context.k: "v" |
/// ```
///
/// Context entries come first (in map order), then the error, the direct
/// payload and the extended structured data, each section present only when
/// set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl DefaultFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl LogFormatter for DefaultFormatter {
    fn format_log(&self, content: &LogContent) -> Result<String> {
        let mut out = format!(
            "{} | level: {} | message: \"{}\"",
            content.timestamp,
            content.level.name(),
            content.message
        );

        let extended = &content.extended_data;
        if let Some(context) = &extended.context {
            for (key, value) in context {
                // write! into a String cannot fail
                let _ = write!(out, " | context.{}: \"{}\"", key, value);
            }
        }
        if let Some(error) = &extended.error {
            let _ = write!(out, " | error: \"{}\"", error);
        }
        if let Some(data) = &content.data {
            let _ = write!(out, " | data: {}", data);
        }
        if let Some(data) = &extended.data {
            let _ = write!(out, " | extdata: {}", data);
        }

        out.push_str(" |");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ExtendedPayload, LogContent, LogLevel};
    use serde_json::json;

    fn content(level: LogLevel, message: &str) -> LogContent {
        LogContent::new(
            "2021-10-12T00:00:00.000Z".to_string(),
            level,
            message.to_string(),
            None,
            ExtendedPayload::new(),
        )
    }

    #[test]
    fn test_minimal_record() {
        let formatted = DefaultFormatter::new()
            .format_log(&content(LogLevel::Warn, "M"))
            .unwrap();
        assert_eq!(
            formatted,
            "2021-10-12T00:00:00.000Z | level: warn | message: \"M\" |"
        );
    }

    #[test]
    fn test_context_entries_rendered_in_order() {
        let mut record = content(LogLevel::Info, "hello");
        record.extended_data = ExtendedPayload::new()
            .with_context_entry("b", "2")
            .with_context_entry("a", "1");

        let formatted = DefaultFormatter::new().format_log(&record).unwrap();
        // BTreeMap keeps keys sorted
        assert!(formatted.contains("| context.a: \"1\" | context.b: \"2\" |"));
    }

    #[test]
    fn test_error_and_payloads() {
        let mut record = content(LogLevel::Error, "failed");
        record.data = Some(json!({"attempt": 3}));
        record.extended_data = ExtendedPayload::new()
            .with_error("socket closed")
            .with_data(json!({"host": "db1"}));

        let formatted = DefaultFormatter::new().format_log(&record).unwrap();
        assert!(formatted.contains(" | error: \"socket closed\""));
        assert!(formatted.contains(" | data: {\"attempt\":3}"));
        assert!(formatted.contains(" | extdata: {\"host\":\"db1\"}"));
        assert!(formatted.ends_with(" |"));
    }
}
