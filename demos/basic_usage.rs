//! Default logger walkthrough: one colored terminal sink on stdout,
//! accepting every level.

use fanlog::{debug, error, fatal, info, warn, Logger};

fn main() {
    let logger = Logger::new();

    debug!(logger, "Debug log");
    info!(logger, "Info log");
    warn!(logger, "Warn log");
    error!(logger, "Error log");
    fatal!(logger, "Fatal log");
}
