//! Terminal renderer with colored output

use std::io::Write;

use colored::Colorize;

use crate::core::{LogEntry, Render, Result};

const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Renders one entry per line with a time-only stamp, meant for a terminal:
///
/// ```text
/// 14:03:21 ERROR src/main.rs:42 connection refused machine=HOSTNAME-01
/// ```
///
/// With colors enabled (the default) the level token is colored by severity
/// and the call site and attribute pairs are dimmed. Each line is written in
/// a single call and flushed immediately.
pub struct TermRender {
    use_colors: bool,
}

impl TermRender {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for TermRender {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for TermRender {
    fn render(&self, entry: &LogEntry, out: &mut dyn Write) -> Result<()> {
        let level = if self.use_colors {
            format!("{:5}", entry.level.as_str())
                .color(entry.level.color())
                .to_string()
        } else {
            format!("{:5}", entry.level.as_str())
        };

        let site = if self.use_colors {
            format!("{}:{}", entry.file, entry.line)
                .bright_black()
                .to_string()
        } else {
            format!("{}:{}", entry.file, entry.line)
        };

        let mut line = format!(
            "{} {} {} {}",
            entry.timestamp.format(TIMESTAMP_FORMAT),
            level,
            site,
            entry.message,
        );

        for attr in &entry.attrs {
            if attr.is_blank() {
                continue;
            }
            let pair = format!("{}={}", attr.key, attr.value);
            if self.use_colors {
                line.push_str(&format!(" {}", pair.bright_black()));
            } else {
                line.push_str(&format!(" {}", pair));
            }
        }

        line.push('\n');
        out.write_all(line.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "term"
    }
}
