//! Sink registration and the render plug-in contract

use std::fs::File;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use super::entry::LogEntry;
use super::error::Result;
use super::level::Level;

/// Default maximum number of sinks per logger: two implicit slots (file and
/// terminal) plus eight custom slots.
pub const DEFAULT_MAX_SINKS: usize = 10;

/// The render plug-in contract, the system's only extension point.
///
/// A renderer consumes one [`LogEntry`] and writes a formatted representation
/// to the output handle bound to its sink for this invocation.
pub trait Render: Send + Sync {
    fn render(&self, entry: &LogEntry, out: &mut dyn Write) -> Result<()>;
    fn name(&self) -> &str;
}

/// A caller-supplied writer that may back more than one sink.
pub type SharedWriter = Arc<Mutex<dyn Write + Send>>;

/// An output handle a sink writes to.
pub enum Target {
    Stdout,
    Stderr,
    /// A file opened for append.
    File(File),
    /// A lock-guarded writer shared with the surrounding program or with
    /// other sinks.
    Shared(SharedWriter),
}

impl Target {
    /// Wrap an arbitrary writer in a [`SharedWriter`] target.
    pub fn shared<W: Write + Send + 'static>(writer: W) -> Self {
        Target::Shared(Arc::new(Mutex::new(writer)))
    }

    pub(crate) fn with_writer<R>(&self, f: impl FnOnce(&mut dyn Write) -> R) -> R {
        match self {
            Target::Stdout => f(&mut io::stdout().lock()),
            Target::Stderr => f(&mut io::stderr().lock()),
            Target::File(file) => {
                let mut handle: &File = file;
                f(&mut handle)
            }
            Target::Shared(writer) => f(&mut *writer.lock()),
        }
    }
}

/// A registered sink: a renderer, a minimum severity, and an output handle.
///
/// Each sink independently decides whether to render a given entry; an entry
/// below the sink's floor is skipped with no side effect.
pub struct Sink {
    renderer: Box<dyn Render>,
    min_level: Level,
    target: Target,
}

impl Sink {
    pub fn new(renderer: Box<dyn Render>, min_level: Level, target: Target) -> Self {
        Self {
            renderer,
            min_level,
            target,
        }
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }

    pub fn name(&self) -> &str {
        self.renderer.name()
    }

    pub(crate) fn accepts(&self, level: Level) -> bool {
        level >= self.min_level
    }

    pub(crate) fn render(&self, entry: &LogEntry) -> Result<()> {
        self.target
            .with_writer(|out| self.renderer.render(entry, out))
    }
}
