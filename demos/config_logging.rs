//! Configuration-driven setup: a log file, a terminal sink, an attribute on
//! every line, and a custom error sink on stderr.

use std::fs::OpenOptions;

use fanlog::{debug, error, fatal, info, warn, Level, LogConfig, Logger, PlainRender, Target, TermRender};

fn main() -> fanlog::Result<()> {
    let config = LogConfig::new()
        .with_level(Level::Debug)
        // all logs also land in this file
        .with_filename("logs.log")
        // errors additionally go to stderr
        .with_sink(TermRender::new(), Level::Error, Target::Stderr)
        // stamped onto every line, from every sink
        .with_attr("machine", "HOSTNAME-01");

    let mut logger = Logger::from_config(config)?;

    // sinks can still be appended after construction
    let errors = OpenOptions::new().create(true).append(true).open("errors.log")?;
    logger.add_sink(PlainRender::new(), Level::Error, Target::File(errors));

    debug!(logger, "Debug log");
    info!(logger, "Info log");
    warn!(logger, "Warn log");
    error!(logger, "Error log");
    fatal!(logger, "Fatal log");

    Ok(())
}
