//! Console writer implementation

use super::LogWriter;
use crate::core::{LogContent, LogLevel, Result};
use colored::Colorize;

/// The built-in default writer. Error and Fatal records go to stderr, all
/// other levels to stdout; the line is colored by level unless colors are
/// disabled.
pub struct ConsoleWriter {
    use_colors: bool,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWriter for ConsoleWriter {
    fn write(&self, formatted: &str, content: &LogContent) -> Result<()> {
        let line = if self.use_colors {
            formatted.color(content.level.color_code()).to_string()
        } else {
            formatted.to_string()
        };

        match content.level {
            LogLevel::Error | LogLevel::Fatal => eprintln!("{}", line),
            _ => println!("{}", line),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ExtendedPayload;

    #[test]
    fn test_write_does_not_fail() {
        let writer = ConsoleWriter::with_colors(false);
        for level in LogLevel::ALL {
            let content = LogContent::new(
                "2021-10-12T00:00:00.000Z".to_string(),
                level,
                "console test".to_string(),
                None,
                ExtendedPayload::new(),
            );
            assert!(writer.write("console test line", &content).is_ok());
        }
    }
}
