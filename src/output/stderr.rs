//! The process log sink: stderr, one timestamp-prefixed line per record.

use super::Output;
use chrono::Local;
use std::io::{self, Write};

/// Default prefix layout, `2024/01/31 14:05:09`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct StderrOutput {
    /// `None` writes lines without a prefix.
    timestamp_format: Option<String>,
}

impl Default for StderrOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl StderrOutput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            timestamp_format: Some(DEFAULT_TIMESTAMP_FORMAT.to_string()),
        }
    }

    /// Turns the timestamp prefix on or off, keeping the current format.
    #[must_use]
    pub fn timestamps(mut self, enabled: bool) -> Self {
        self.timestamp_format = if enabled {
            self.timestamp_format
                .or_else(|| Some(DEFAULT_TIMESTAMP_FORMAT.to_string()))
        } else {
            None
        };
        self
    }

    /// `chrono` strftime pattern used for the prefix.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = Some(format.into());
        self
    }

    /// Prefix and line terminator applied to `line`.
    fn format_line(&self, line: &str) -> String {
        let mut out = self.timestamp_format.as_ref().map_or_else(String::new, |format| {
            format!("{} ", Local::now().format(format))
        });
        out.push_str(line);
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

impl Output for StderrOutput {
    fn write(&self, line: &str) -> Result<(), crate::Error> {
        let formatted = self.format_line(line);
        // One locked write keeps concurrent lines from interleaving.
        io::stderr().lock().write_all(formatted.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stderr().flush()?;
        Ok(())
    }
}
