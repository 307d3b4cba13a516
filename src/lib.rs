//! # Fanout Logger
//!
//! A pluggable logging facade with named loggers and ordered formatter/writer
//! fan-out chains.
//!
//! ## Features
//!
//! - **Named Loggers**: One registry resolves a declarative configuration
//!   into a default logger plus any number of named loggers
//! - **Fan-Out Chains**: Each logger emits through an ordered list of
//!   formatter/writer pairs
//! - **Pluggable**: Built-in text/JSON/XML formatters and console/HTTP
//!   writers, or any custom implementation via a zero-argument factory
//! - **Deterministic Defaults**: Unset thresholds, pairs, formatters and
//!   writers are filled in once, at build time
//!
//! ## Example
//!
//! ```
//! use fanout_logger::prelude::*;
//!
//! let mut registry = LoggerRegistry::new();
//! registry.build(
//!     LoggerOptions::new()
//!         .default_config(LoggerConfig::new().level(LogLevel::Warn))
//!         .named("store", LoggerConfig::new().level(LogLevel::Trace)),
//! );
//!
//! let logger = registry.logger(Some("store")).unwrap();
//! logger.info("store initialized").unwrap();
//! ```

pub mod core;
pub mod formatters;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        BuiltinFormatter, BuiltinWriter, ExtendedPayload, FormatterSpec, FormatterWriterPair,
        LogContent, LogLevel, Logger, LoggerConfig, LoggerError, LoggerOptions, LoggerRegistry,
        PairSpec, Result, TimestampSource, WriterSpec,
    };
    pub use crate::formatters::{DefaultFormatter, JsonFormatter, LogFormatter, XmlFormatter};
    pub use crate::writers::{ConsoleWriter, LogWriter};

    #[cfg(feature = "http")]
    pub use crate::writers::HttpWriter;
}

pub use crate::core::{
    default_timestamp, default_timestamp_source, fixed_timestamp_source, is_valid_timestamp,
    BuiltinFormatter, BuiltinWriter, ExtendedPayload, ExtendedPayloadFactory, FormatterFactory,
    FormatterSpec, FormatterWriterPair, LogContent, LogLevel, Logger, LoggerConfig, LoggerError,
    LoggerOptions, LoggerRegistry, PairSpec, Result, TimestampSource, WriterFactory, WriterSpec,
};
pub use crate::formatters::{DefaultFormatter, JsonFormatter, LogFormatter, XmlFormatter};
pub use crate::writers::{ConsoleWriter, LogWriter};

#[cfg(feature = "http")]
pub use crate::writers::HttpWriter;
