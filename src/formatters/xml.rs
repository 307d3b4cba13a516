//! XML formatter

use super::LogFormatter;
use crate::core::{LogContent, Result};
use std::fmt::Write;

/// Renders a record as a `<log>` element, one child per field. Context
/// entries are nested under `<context>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlFormatter;

impl XmlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl LogFormatter for XmlFormatter {
    fn format_log(&self, content: &LogContent) -> Result<String> {
        let mut xml = format!(
            "<log>\n<level>{}</level>\n<message>{}</message>\n<timestamp>{}</timestamp>\n",
            content.level.name(),
            content.message,
            content.timestamp
        );

        let extended = &content.extended_data;
        if let Some(error) = &extended.error {
            let _ = write!(xml, "<error>{}</error>\n", error);
        }
        if let Some(context) = &extended.context {
            xml.push_str("<context>\n");
            for (key, value) in context {
                let _ = write!(xml, "<{}>{}</{}>\n", key, value, key);
            }
            xml.push_str("</context>\n");
        }
        if let Some(data) = &content.data {
            let _ = write!(xml, "<data>{}</data>\n", data);
        }
        if let Some(data) = &extended.data {
            let _ = write!(xml, "<extdata>{}</extdata>\n", data);
        }

        xml.push_str("</log>");
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ExtendedPayload, LogContent, LogLevel};

    #[test]
    fn test_basic_element_structure() {
        let content = LogContent::new(
            "2021-10-12T00:00:00.000Z".to_string(),
            LogLevel::Fatal,
            "X".to_string(),
            None,
            ExtendedPayload::new(),
        );

        let xml = XmlFormatter::new().format_log(&content).unwrap();
        assert!(xml.starts_with("<log>\n<level>fatal</level>\n<message>X</message>\n"));
        assert!(xml.contains("<timestamp>2021-10-12T00:00:00.000Z</timestamp>"));
        assert!(xml.ends_with("</log>"));
    }

    #[test]
    fn test_nested_context() {
        let content = LogContent::new(
            "t".to_string(),
            LogLevel::Info,
            "m".to_string(),
            None,
            ExtendedPayload::new()
                .with_error("oops")
                .with_context_entry("k", "v"),
        );

        let xml = XmlFormatter::new().format_log(&content).unwrap();
        assert!(xml.contains("<error>oops</error>"));
        assert!(xml.contains("<context>\n<k>v</k>\n</context>"));
    }
}
