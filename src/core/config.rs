//! Construction-time logger configuration

use std::path::PathBuf;

use super::attrs::{Attr, CapacityPolicy, DEFAULT_MAX_ATTRS};
use super::level::Level;
use super::sink::{Render, Target, DEFAULT_MAX_SINKS};

/// A custom sink descriptor: renderer, minimum severity, output handle.
pub struct SinkConfig {
    pub renderer: Box<dyn Render>,
    pub level: Level,
    pub target: Target,
}

impl SinkConfig {
    pub fn new(renderer: impl Render + 'static, level: Level, target: Target) -> Self {
        Self {
            renderer: Box::new(renderer),
            level,
            target,
        }
    }
}

/// Declarative configuration consumed once by [`Logger::from_config`].
///
/// The severity floor becomes the threshold of the implicit file and terminal
/// sinks; custom sinks carry their own thresholds and targets.
///
/// # Example
///
/// ```no_run
/// use fanlog::{Level, LogConfig, Logger};
///
/// let config = LogConfig::new()
///     .with_level(Level::Warning)
///     .with_filename("logs.log")
///     .with_attr("machine", "HOSTNAME-01");
///
/// let logger = Logger::from_config(config).expect("open log file");
/// ```
///
/// [`Logger::from_config`]: crate::Logger::from_config
pub struct LogConfig {
    /// Severity floor, used as the implicit sinks' threshold.
    pub level: Level,
    /// Attributes attached to every entry, in order.
    pub attrs: Vec<Attr>,
    /// Custom sinks, appended after the implicit ones in this order.
    pub sinks: Vec<SinkConfig>,
    /// Log file opened for append; opening it is a hard requirement.
    pub filename: Option<PathBuf>,
    /// Suppress the implicit terminal sink.
    pub quiet: bool,
    /// Maximum attribute count.
    pub max_attrs: usize,
    /// Maximum sink count, implicit sinks included.
    pub max_sinks: usize,
    /// Overflow behavior for attributes and sinks at construction time.
    pub capacity_policy: CapacityPolicy,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::default(),
            attrs: Vec::new(),
            sinks: Vec::new(),
            filename: None,
            quiet: false,
            max_attrs: DEFAULT_MAX_ATTRS,
            max_sinks: DEFAULT_MAX_SINKS,
            capacity_policy: CapacityPolicy::default(),
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the severity floor
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Attach an attribute to every entry this logger emits
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(Attr::new(key, value));
        self
    }

    /// Register a custom sink
    #[must_use]
    pub fn with_sink(
        mut self,
        renderer: impl Render + 'static,
        level: Level,
        target: Target,
    ) -> Self {
        self.sinks.push(SinkConfig::new(renderer, level, target));
        self
    }

    /// Write all entries at or above the floor to this file
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Suppress the implicit terminal sink
    #[must_use]
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Override the attribute capacity
    #[must_use]
    pub fn with_max_attrs(mut self, max_attrs: usize) -> Self {
        self.max_attrs = max_attrs;
        self
    }

    /// Override the sink capacity
    #[must_use]
    pub fn with_max_sinks(mut self, max_sinks: usize) -> Self {
        self.max_sinks = max_sinks;
        self
    }

    /// Choose between silently dropping and rejecting overflow
    #[must_use]
    pub fn with_capacity_policy(mut self, policy: CapacityPolicy) -> Self {
        self.capacity_policy = policy;
        self
    }
}
