//! Plain text renderer for file-style output

use std::io::Write;

use crate::core::{LogEntry, Render, Result};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders one entry per line with a full date-time stamp and no colors:
///
/// ```text
/// 2026-08-08 14:03:21 ERROR src/main.rs:42 connection refused machine=HOSTNAME-01
/// ```
///
/// The line is written in a single call and flushed immediately; durability
/// of log output wins over write throughput.
pub struct PlainRender;

impl PlainRender {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainRender {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for PlainRender {
    fn render(&self, entry: &LogEntry, out: &mut dyn Write) -> Result<()> {
        let mut line = format!(
            "{} {:5} {}:{} {}",
            entry.timestamp.format(TIMESTAMP_FORMAT),
            entry.level.as_str(),
            entry.file,
            entry.line,
            entry.message,
        );

        for attr in &entry.attrs {
            if attr.is_blank() {
                continue;
            }
            line.push_str(&format!(" {}={}", attr.key, attr.value));
        }

        line.push('\n');
        out.write_all(line.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "plain"
    }
}
