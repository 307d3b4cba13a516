//! Core logger types and traits

pub mod config;
pub mod error;
pub mod log_content;
pub mod log_level;
pub mod logger;
pub mod registry;
pub mod timestamp;

pub use config::{
    BuiltinFormatter, BuiltinWriter, ExtendedPayloadFactory, FormatterFactory, FormatterSpec,
    LoggerConfig, LoggerOptions, PairSpec, WriterFactory, WriterSpec,
};
pub use error::{LoggerError, Result};
pub use log_content::{ExtendedPayload, LogContent};
pub use log_level::LogLevel;
pub use logger::{FormatterWriterPair, Logger};
pub use registry::LoggerRegistry;
pub use timestamp::{
    default_timestamp, default_timestamp_source, fixed_timestamp_source, is_valid_timestamp,
    TimestampSource,
};
