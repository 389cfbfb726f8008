//! # Fanlog
//!
//! A lightweight, embeddable structured logging facade. Each logger fans its
//! events out to independently configured sinks, every one with its own
//! severity floor, output target, and renderer.
//!
//! ## Features
//!
//! - **Multiple Sinks**: terminal, file, and custom render targets per logger
//! - **Per-Sink Filtering**: every sink applies its own minimum severity
//! - **Contextual Attributes**: key/value pairs stamped onto every entry
//! - **Pluggable Renderers**: one trait to implement for custom output
//!
//! ## Quick start
//!
//! ```
//! use fanlog::{info, Logger};
//!
//! let logger = Logger::new();
//! info!(logger, "Server listening on port {}", 8080);
//! ```
//!
//! Configuration-driven setup with a log file, an attribute on every line,
//! and a custom sink for errors:
//!
//! ```no_run
//! use fanlog::{error, Level, LogConfig, Logger, Target, TermRender};
//!
//! let config = LogConfig::new()
//!     .with_level(Level::Warning)
//!     .with_filename("logs.log")
//!     .with_attr("machine", "HOSTNAME-01")
//!     .with_sink(TermRender::new(), Level::Error, Target::Stderr);
//!
//! let logger = Logger::from_config(config).expect("open log file");
//! error!(logger, "disk usage at {}%", 93);
//! ```

pub mod core;
pub mod macros;
pub mod render;

pub mod prelude {
    pub use crate::core::{
        Attr, AttrSet, CapacityPolicy, Level, LogConfig, LogEntry, Logger, LoggerError, Render,
        Result, SharedWriter, Sink, SinkConfig, Target,
    };
    pub use crate::render::{PlainRender, TermRender};
}

pub use crate::core::{
    Attr, AttrSet, CapacityPolicy, Level, LogConfig, LogEntry, Logger, LoggerError, Render, Result,
    SharedWriter, Sink, SinkConfig, Target, DEFAULT_MAX_ATTRS, DEFAULT_MAX_SINKS,
};
pub use crate::render::{PlainRender, TermRender};
