//! Logger construction and the dispatch engine

use std::fs::OpenOptions;
use std::panic::Location;

use super::attrs::{AttrSet, CapacityPolicy};
use super::config::LogConfig;
use super::entry::LogEntry;
use super::error::{LoggerError, Result};
use super::level::Level;
use super::sink::{Render, Sink, Target, DEFAULT_MAX_SINKS};
use crate::render::{PlainRender, TermRender};

/// A logger that fans each event out to its registered sinks.
///
/// A `Logger` owns a severity floor, an [`AttrSet`], and an ordered sink
/// list. It is immutable after construction except for [`add_sink`]. The
/// floor only seeds the implicit sinks' thresholds; dispatch is gated by the
/// per-sink thresholds alone.
///
/// `Logger` is `Send + Sync`: share it across threads by reference.
/// Concurrent dispatch is allowed, but writes from different threads may
/// interleave between sinks; callers needing a total order across sinks must
/// synchronize around the logging calls themselves.
///
/// # Example
///
/// ```
/// use fanlog::{info, Logger};
///
/// let logger = Logger::new();
/// info!(logger, "listening on port {}", 8080);
/// ```
///
/// [`add_sink`]: Logger::add_sink
pub struct Logger {
    level: Level,
    attrs: AttrSet,
    sinks: Vec<Sink>,
    max_sinks: usize,
}

impl Logger {
    /// Create a logger with the default setup: floor [`Level::Debug`] and a
    /// single terminal sink on stdout accepting everything.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::Debug,
            attrs: AttrSet::new(),
            sinks: vec![Sink::new(
                Box::new(TermRender::new()),
                Level::Debug,
                Target::Stdout,
            )],
            max_sinks: DEFAULT_MAX_SINKS,
        }
    }

    /// Build a logger from a [`LogConfig`].
    ///
    /// Sink order is always: file sink (if a filename is configured), then
    /// the terminal sink (unless quiet), then the custom sinks in config
    /// order. Callers registering several sinks against a shared handle can
    /// rely on that order for interleaved writes.
    ///
    /// # Errors
    ///
    /// Fails with [`LoggerError::FileSink`] when the configured log file
    /// cannot be opened for append, and with the capacity errors when the
    /// config overflows under [`CapacityPolicy::Reject`]. No partially
    /// constructed logger is ever returned.
    pub fn from_config(config: LogConfig) -> Result<Self> {
        let LogConfig {
            level,
            attrs,
            sinks: custom,
            filename,
            quiet,
            max_attrs,
            max_sinks,
            capacity_policy,
        } = config;

        let attrs = AttrSet::from_config(attrs, max_attrs, capacity_policy)?;
        let mut sinks = Vec::new();

        if let Some(path) = filename {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|source| LoggerError::file_sink(path.display().to_string(), source))?;
            sinks.push(Sink::new(Box::new(PlainRender::new()), level, Target::File(file)));
        }

        if !quiet {
            sinks.push(Sink::new(Box::new(TermRender::new()), level, Target::Stdout));
        }

        for sink in custom {
            if sinks.len() >= max_sinks {
                match capacity_policy {
                    CapacityPolicy::Discard => break,
                    CapacityPolicy::Reject => return Err(LoggerError::sink_capacity(max_sinks)),
                }
            }
            sinks.push(Sink::new(sink.renderer, sink.level, sink.target));
        }

        Ok(Self {
            level,
            attrs,
            sinks,
            max_sinks,
        })
    }

    /// The severity floor this logger was constructed with.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The attributes attached to every entry.
    pub fn attrs(&self) -> &AttrSet {
        &self.attrs
    }

    /// Number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Append a sink. Silently a no-op when the sink list is full.
    pub fn add_sink(&mut self, renderer: impl Render + 'static, min_level: Level, target: Target) {
        let _ = self.try_add_sink(renderer, min_level, target);
    }

    /// Append a sink, surfacing [`LoggerError::SinkCapacity`] when the list
    /// is full.
    pub fn try_add_sink(
        &mut self,
        renderer: impl Render + 'static,
        min_level: Level,
        target: Target,
    ) -> Result<()> {
        if self.sinks.len() >= self.max_sinks {
            return Err(LoggerError::sink_capacity(self.max_sinks));
        }
        self.sinks.push(Sink::new(Box::new(renderer), min_level, target));
        Ok(())
    }

    /// Dispatch one event to every sink whose threshold accepts `level`.
    ///
    /// The timestamp is captured once and the attribute set cloned once, so
    /// all sinks observe the same entry. Sinks run in registration order; a
    /// failing sink is reported on stderr and never prevents later sinks
    /// from running. Logging never returns a failure to the caller.
    pub fn log(&self, level: Level, file: &'static str, line: u32, message: impl Into<String>) {
        if !self.sinks.iter().any(|sink| sink.accepts(level)) {
            return;
        }

        let entry = LogEntry::new(level, file, line, message.into(), self.attrs.clone());

        for sink in &self.sinks {
            if !sink.accepts(entry.level) {
                continue;
            }
            if let Err(err) = sink.render(&entry) {
                // Report through a non-recursive channel; other sinks still run.
                eprintln!("[LOGGER ERROR] sink '{}' failed: {}", sink.name(), err);
            }
        }
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        let loc = Location::caller();
        self.log(Level::Debug, loc.file(), loc.line(), message);
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        let loc = Location::caller();
        self.log(Level::Info, loc.file(), loc.line(), message);
    }

    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        let loc = Location::caller();
        self.log(Level::Warning, loc.file(), loc.line(), message);
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        let loc = Location::caller();
        self.log(Level::Error, loc.file(), loc.line(), message);
    }

    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) {
        let loc = Location::caller();
        self.log(Level::Fatal, loc.file(), loc.line(), message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("sinks", &self.sinks.len())
            .field("max_sinks", &self.max_sinks)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::io::{self, Write};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct TagRender(&'static str);

    impl Render for TagRender {
        fn render(&self, _entry: &LogEntry, out: &mut dyn Write) -> Result<()> {
            out.write_all(self.0.as_bytes())?;
            Ok(())
        }

        fn name(&self) -> &str {
            self.0
        }
    }

    struct FailingRender;

    impl Render for FailingRender {
        fn render(&self, _entry: &LogEntry, _out: &mut dyn Write) -> Result<()> {
            Err(LoggerError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "gone",
            )))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_default_logger_shape() {
        let logger = Logger::new();
        assert_eq!(logger.level(), Level::Debug);
        assert!(logger.attrs().is_empty());
        assert_eq!(logger.sink_count(), 1);
    }

    #[test]
    fn test_floor_only_seeds_implicit_thresholds() {
        // A custom sink below the logger floor still fires: the floor never
        // gates dispatch on its own.
        let capture = Capture::default();
        let config = LogConfig::new()
            .with_level(Level::Error)
            .with_quiet(true)
            .with_sink(TagRender("fired"), Level::Debug, Target::shared(capture.clone()));
        let logger = Logger::from_config(config).unwrap();

        logger.debug("below the floor");
        assert_eq!(capture.contents(), "fired");
    }

    #[test]
    fn test_sinks_run_in_registration_order() {
        let capture = Capture::default();
        let config = LogConfig::new()
            .with_quiet(true)
            .with_sink(TagRender("a"), Level::Debug, Target::shared(capture.clone()))
            .with_sink(TagRender("b"), Level::Debug, Target::shared(capture.clone()))
            .with_sink(TagRender("c"), Level::Debug, Target::shared(capture.clone()));
        let logger = Logger::from_config(config).unwrap();

        logger.info("ordered");
        assert_eq!(capture.contents(), "abc");
    }

    #[test]
    fn test_failing_sink_does_not_stop_later_sinks() {
        let capture = Capture::default();
        let config = LogConfig::new()
            .with_quiet(true)
            .with_sink(FailingRender, Level::Debug, Target::shared(Vec::<u8>::new()))
            .with_sink(TagRender("alive"), Level::Debug, Target::shared(capture.clone()));
        let logger = Logger::from_config(config).unwrap();

        logger.warn("still delivered");
        assert_eq!(capture.contents(), "alive");
    }

    #[test]
    fn test_add_sink_silently_capped() {
        let config = LogConfig::new().with_quiet(true).with_max_sinks(1);
        let mut logger = Logger::from_config(config).unwrap();

        logger.add_sink(TagRender("one"), Level::Debug, Target::shared(Vec::<u8>::new()));
        assert_eq!(logger.sink_count(), 1);

        logger.add_sink(TagRender("two"), Level::Debug, Target::shared(Vec::<u8>::new()));
        assert_eq!(logger.sink_count(), 1);

        let err = logger
            .try_add_sink(TagRender("three"), Level::Debug, Target::shared(Vec::<u8>::new()))
            .unwrap_err();
        assert!(matches!(err, LoggerError::SinkCapacity { capacity: 1 }));
    }

    #[test]
    fn test_custom_sink_overflow_discarded() {
        let capture = Capture::default();
        let config = LogConfig::new()
            .with_quiet(true)
            .with_max_sinks(2)
            .with_sink(TagRender("a"), Level::Debug, Target::shared(capture.clone()))
            .with_sink(TagRender("b"), Level::Debug, Target::shared(capture.clone()))
            .with_sink(TagRender("c"), Level::Debug, Target::shared(capture.clone()));
        let logger = Logger::from_config(config).unwrap();

        assert_eq!(logger.sink_count(), 2);
        logger.info("capped");
        assert_eq!(capture.contents(), "ab");
    }

    #[test]
    fn test_custom_sink_overflow_rejected() {
        let config = LogConfig::new()
            .with_quiet(true)
            .with_max_sinks(1)
            .with_capacity_policy(CapacityPolicy::Reject)
            .with_sink(TagRender("a"), Level::Debug, Target::shared(Vec::<u8>::new()))
            .with_sink(TagRender("b"), Level::Debug, Target::shared(Vec::<u8>::new()));

        let err = Logger::from_config(config).unwrap_err();
        assert!(matches!(err, LoggerError::SinkCapacity { capacity: 1 }));
    }

    #[test]
    fn test_no_sink_accepts_no_entry_built() {
        // Nothing observable happens when every threshold excludes the event.
        let capture = Capture::default();
        let config = LogConfig::new()
            .with_quiet(true)
            .with_sink(TagRender("x"), Level::Error, Target::shared(capture.clone()));
        let logger = Logger::from_config(config).unwrap();

        logger.debug("suppressed");
        logger.info("suppressed");
        logger.warn("suppressed");
        assert_eq!(capture.contents(), "");
    }

    #[test]
    fn test_attrs_survive_dispatch() {
        let config = LogConfig::new()
            .with_quiet(true)
            .with_attr("machine", "HOSTNAME-01")
            .with_sink(TagRender("z"), Level::Debug, Target::shared(Vec::<u8>::new()));
        let logger = Logger::from_config(config).unwrap();
        let before = logger.attrs().clone();

        for i in 0..5 {
            logger.info(format!("call {}", i));
        }

        assert_eq!(logger.attrs(), &before);
    }
}
