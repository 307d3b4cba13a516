//! Logger implementation: threshold check and ordered fan-out

use super::config::ExtendedPayloadFactory;
use super::error::{LoggerError, Result};
use super::log_content::{ExtendedPayload, LogContent};
use super::log_level::LogLevel;
use super::timestamp::TimestampSource;
use crate::formatters::LogFormatter;
use crate::writers::LogWriter;
use parking_lot::RwLock;

/// Resolved runtime pairing of one formatter and one writer. Built once by
/// the registry; the list order on the owning logger determines emission
/// order and is never changed afterwards.
pub struct FormatterWriterPair {
    formatter: Box<dyn LogFormatter>,
    writer: Box<dyn LogWriter>,
    name: Option<String>,
}

impl FormatterWriterPair {
    pub fn new(
        formatter: Box<dyn LogFormatter>,
        writer: Box<dyn LogWriter>,
        name: Option<String>,
    ) -> Self {
        Self {
            formatter,
            writer,
            name,
        }
    }

    pub fn formatter(&self) -> &dyn LogFormatter {
        self.formatter.as_ref()
    }

    pub fn writer(&self) -> &dyn LogWriter {
        self.writer.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A named logger with a mutable severity threshold and an ordered
/// formatter/writer fan-out list.
///
/// The threshold lives behind an `RwLock` so that registry-wide level
/// updates can run against loggers that are concurrently logging.
pub struct Logger {
    name: String,
    level: RwLock<LogLevel>,
    timestamp: TimestampSource,
    extended_payload: Option<ExtendedPayloadFactory>,
    pairs: Vec<FormatterWriterPair>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// The name carried by the unnamed logger.
    pub const DEFAULT_NAME: &'static str = "default";

    pub(crate) fn new(
        name: Option<String>,
        level: LogLevel,
        timestamp: TimestampSource,
        extended_payload: Option<ExtendedPayloadFactory>,
        pairs: Vec<FormatterWriterPair>,
    ) -> Self {
        Self {
            name: name.unwrap_or_else(|| Self::DEFAULT_NAME.to_string()),
            level: RwLock::new(level),
            timestamp,
            extended_payload,
            pairs,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current severity threshold.
    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    /// Replace the threshold, effective for all subsequent calls.
    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Pair at the given position, for introspection and tests.
    pub fn pair_at(&self, position: usize) -> Result<&FormatterWriterPair> {
        self.pairs
            .get(position)
            .ok_or_else(|| LoggerError::pair_out_of_range(position, self.pairs.len()))
    }

    pub fn formatter_at(&self, position: usize) -> Result<&dyn LogFormatter> {
        Ok(self.pair_at(position)?.formatter())
    }

    pub fn writer_at(&self, position: usize) -> Result<&dyn LogWriter> {
        Ok(self.pair_at(position)?.writer())
    }

    /// Log a record at the given level.
    ///
    /// Strictly below the threshold the call is a no-op: no timestamp, no
    /// payload factory, no formatting. At or above it, one [`LogContent`] is
    /// assembled and every pair receives it in list order. A failing
    /// formatter or writer propagates immediately, aborting the remaining
    /// pairs of this call.
    pub fn log(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        payload: Option<serde_json::Value>,
    ) -> Result<()> {
        if level < *self.level.read() {
            return Ok(());
        }

        let timestamp = (self.timestamp)();
        let extended_data = self
            .extended_payload
            .as_ref()
            .map(|factory| factory())
            .unwrap_or_else(ExtendedPayload::new);

        let content = LogContent::new(timestamp, level, message.into(), payload, extended_data);

        for pair in &self.pairs {
            let formatted = pair.formatter.format_log(&content)?;
            pair.writer.write(&formatted, &content)?;
        }
        Ok(())
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Trace, message, None)
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Debug, message, None)
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Info, message, None)
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Warn, message, None)
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Error, message, None)
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Fatal, message, None)
    }
}
