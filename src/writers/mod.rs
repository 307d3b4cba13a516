//! Writer capability and built-in implementations

pub mod console;

#[cfg(feature = "http")]
pub mod http;

pub use console::ConsoleWriter;

#[cfg(feature = "http")]
pub use http::HttpWriter;

use crate::core::{LogContent, Result};

/// Sends one rendered record to a destination.
///
/// The writer receives both the formatted string produced by its paired
/// formatter and the original record, so it can apply level-dependent
/// routing without re-parsing the string. A writer may be asynchronous
/// internally; the logger never waits on anything beyond the `write` call
/// itself.
pub trait LogWriter: Send + Sync {
    fn write(&self, formatted: &str, content: &LogContent) -> Result<()>;
}
