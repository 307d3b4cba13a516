//! Timestamp source and helpers
//!
//! Every logger resolves its timestamp through a `TimestampSource`, a plain
//! zero-argument function returning a string. Configurations that do not
//! supply one get the wall-clock default.

use chrono::Utc;
use std::sync::Arc;

/// Zero-argument timestamp producer shared by all loggers of a generation.
pub type TimestampSource = Arc<dyn Fn() -> String + Send + Sync>;

/// Current UTC time as ISO 8601 with millisecond precision and a trailing
/// `Z`, e.g. `2025-01-08T10:30:45.123Z`.
#[must_use]
pub fn default_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// The default wall-clock source used when a configuration leaves the
/// timestamp unset.
#[must_use]
pub fn default_timestamp_source() -> TimestampSource {
    Arc::new(default_timestamp)
}

/// A source that always returns the same string. Useful for deterministic
/// formatter output in tests and replay scenarios.
#[must_use]
pub fn fixed_timestamp_source(timestamp: impl Into<String>) -> TimestampSource {
    let timestamp = timestamp.into();
    Arc::new(move || timestamp.clone())
}

/// Check that a string parses as an RFC 3339 timestamp.
#[must_use]
pub fn is_valid_timestamp(s: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(s).is_ok()
}
