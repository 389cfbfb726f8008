//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error, typically a renderer write failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured log file could not be opened; construction fails
    #[error("cannot open log file '{path}': {source}")]
    FileSink {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Sink list full under the rejecting capacity policy
    #[error("sink list full: capacity {capacity} reached")]
    SinkCapacity { capacity: usize },

    /// Attribute set full under the rejecting capacity policy
    #[error("attribute set full: capacity {capacity} reached")]
    AttrCapacity { capacity: usize },
}

impl LoggerError {
    /// Create a file sink construction error
    pub fn file_sink(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileSink {
            path: path.into(),
            source,
        }
    }

    /// Create a sink capacity error
    pub fn sink_capacity(capacity: usize) -> Self {
        LoggerError::SinkCapacity { capacity }
    }

    /// Create an attribute capacity error
    pub fn attr_capacity(capacity: usize) -> Self {
        LoggerError::AttrCapacity { capacity }
    }
}
