//! Log entry structure

use super::attrs::AttrSet;
use super::level::Level;
use chrono::{DateTime, Local};

/// The record built for a single log call.
///
/// An entry is created fresh inside each dispatch call and handed to every
/// sink that accepts its level, so all sinks observe the same timestamp,
/// message, and attribute snapshot. It is never stored or shared across
/// calls.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub file: &'static str,
    pub line: u32,
    pub attrs: AttrSet,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so a crafted message cannot forge additional log lines.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(
        level: Level,
        file: &'static str,
        line: u32,
        message: String,
        attrs: AttrSet,
    ) -> Self {
        Self {
            level,
            message: Self::sanitize_message(&message),
            timestamp: Local::now(),
            file,
            line,
            attrs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_sanitized() {
        let entry = LogEntry::new(
            Level::Info,
            file!(),
            line!(),
            "one\ntwo\r\tthree".to_string(),
            AttrSet::new(),
        );
        assert_eq!(entry.message, "one\\ntwo\\r\\tthree");
    }

    #[test]
    fn test_entry_carries_attrs() {
        let mut attrs = AttrSet::new();
        attrs.push(crate::Attr::new("machine", "HOSTNAME-01"));

        let entry = LogEntry::new(Level::Error, file!(), line!(), "boom".to_string(), attrs.clone());
        assert_eq!(entry.attrs, attrs);
    }
}
