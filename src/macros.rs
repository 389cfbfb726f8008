//! Logging macros for ergonomic log message formatting.
//!
//! These macros capture the caller's source file and line and format the
//! message with `format!` semantics. The message is materialized exactly
//! once per call, no matter how many sinks end up rendering it.
//!
//! # Examples
//!
//! ```
//! use fanlog::prelude::*;
//! use fanlog::info;
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let logger = Logger::new();
/// use fanlog::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, file!(), line!(), format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let logger = Logger::new();
/// use fanlog::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let logger = Logger::new();
/// use fanlog::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let logger = Logger::new();
/// use fanlog::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let logger = Logger::new();
/// use fanlog::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let logger = Logger::new();
/// use fanlog::fatal;
/// fatal!(logger, "Critical system failure");
/// fatal!(logger, "Unable to recover: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Fatal, $($arg)+)
    };
}
