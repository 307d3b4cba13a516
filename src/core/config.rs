//! Declarative logger configuration
//!
//! `LoggerOptions` is the single nested structure handed to
//! [`LoggerRegistry::build`](crate::core::registry::LoggerRegistry::build).
//! Formatter and writer slots are declared either as a built-in tag or as a
//! zero-argument factory producing a custom implementation; unset slots are
//! filled with the built-in defaults during resolution.

use super::log_content::ExtendedPayload;
use super::log_level::LogLevel;
use super::timestamp::TimestampSource;
use crate::formatters::LogFormatter;
use crate::writers::LogWriter;
use std::collections::HashMap;
use std::sync::Arc;

/// Zero-argument constructor for a custom formatter.
pub type FormatterFactory = Arc<dyn Fn() -> Box<dyn LogFormatter> + Send + Sync>;

/// Zero-argument constructor for a custom writer.
pub type WriterFactory = Arc<dyn Fn() -> Box<dyn LogWriter> + Send + Sync>;

/// Zero-argument producer of the supplementary payload attached to every
/// record emitted by loggers built from the owning config.
pub type ExtendedPayloadFactory = Arc<dyn Fn() -> ExtendedPayload + Send + Sync>;

/// Built-in formatter tags, resolved through a fixed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuiltinFormatter {
    #[default]
    Default,
    Json,
    Xml,
}

/// Built-in writer tags, resolved through a fixed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuiltinWriter {
    #[default]
    Default,
}

/// A formatter slot: either a built-in tag or a custom factory.
#[derive(Clone)]
pub enum FormatterSpec {
    Builtin(BuiltinFormatter),
    Custom(FormatterFactory),
}

impl FormatterSpec {
    /// Convenience for wrapping a plain closure as a custom spec.
    pub fn custom<F, T>(factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: LogFormatter + 'static,
    {
        FormatterSpec::Custom(Arc::new(move || Box::new(factory())))
    }
}

/// A writer slot: either a built-in tag or a custom factory.
#[derive(Clone)]
pub enum WriterSpec {
    Builtin(BuiltinWriter),
    Custom(WriterFactory),
}

impl WriterSpec {
    pub fn custom<F, T>(factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: LogWriter + 'static,
    {
        WriterSpec::Custom(Arc::new(move || Box::new(factory())))
    }
}

/// Declaration of one formatter/writer pair. Slots left as `None` are filled
/// with the built-in defaults during resolution; the optional name is kept on
/// the runtime pair for diagnostics.
#[derive(Clone, Default)]
pub struct PairSpec {
    pub name: Option<String>,
    pub formatter: Option<FormatterSpec>,
    pub writer: Option<WriterSpec>,
}

impl PairSpec {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn formatter(mut self, spec: FormatterSpec) -> Self {
        self.formatter = Some(spec);
        self
    }

    #[must_use]
    pub fn writer(mut self, spec: WriterSpec) -> Self {
        self.writer = Some(spec);
        self
    }
}

/// Configuration of a single logger: threshold, ordered pair declarations and
/// an optional extended-payload factory.
#[derive(Clone, Default)]
pub struct LoggerConfig {
    pub default_level: Option<LogLevel>,
    pub pairs: Vec<PairSpec>,
    pub extended_payload: Option<ExtendedPayloadFactory>,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.default_level = Some(level);
        self
    }

    #[must_use]
    pub fn pair(mut self, pair: PairSpec) -> Self {
        self.pairs.push(pair);
        self
    }

    #[must_use]
    pub fn extended_payload<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> ExtendedPayload + Send + Sync + 'static,
    {
        self.extended_payload = Some(Arc::new(factory));
        self
    }
}

/// Top-level configuration: one mandatory default config, optional named
/// configs and an optional shared timestamp source.
#[derive(Clone, Default)]
pub struct LoggerOptions {
    pub default: LoggerConfig,
    pub timestamp: Option<TimestampSource>,
    pub named_loggers: HashMap<String, LoggerConfig>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn default_config(mut self, config: LoggerConfig) -> Self {
        self.default = config;
        self
    }

    #[must_use]
    pub fn timestamp(mut self, source: TimestampSource) -> Self {
        self.timestamp = Some(source);
        self
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>, config: LoggerConfig) -> Self {
        self.named_loggers.insert(name.into(), config);
        self
    }
}
