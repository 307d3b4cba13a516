//! Formatter capability and built-in implementations

pub mod default;
pub mod json;
pub mod xml;

pub use default::DefaultFormatter;
pub use json::JsonFormatter;
pub use xml::XmlFormatter;

use crate::core::{LogContent, Result};

/// Renders one log record to a string suitable for the paired writer.
///
/// Implementations should be pure functions of the record; the logger calls
/// `format_log` once per pair per accepted log call.
pub trait LogFormatter: Send + Sync {
    fn format_log(&self, content: &LogContent) -> Result<String>;
}
