//! Error types for the logging facility

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (configuration) parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A caller passed an argument the API cannot accept
    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument { argument: String, message: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// A writer failed while receiving a flushed batch
    #[error("Writer #{index} '{writer}' failed: {source}")]
    BackendWrite {
        index: usize,
        writer: String,
        #[source]
        source: Box<LoggerError>,
    },

    /// One or more writers failed during a single flush
    #[error("Flush failed for {} writer(s): {}", failures.len(), join_failures(failures))]
    FlushFailed { failures: Vec<LoggerError> },

    /// Template could not be expanded
    #[error("Format error in template '{template}': {message}")]
    Format { template: String, message: String },

    /// Logger already stopped
    #[error("Logger already stopped")]
    LoggerStopped,

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

fn join_failures(failures: &[LoggerError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Wrap the failure of a single writer during a flush
    pub fn backend_write(index: usize, writer: impl Into<String>, source: LoggerError) -> Self {
        LoggerError::BackendWrite {
            index,
            writer: writer.into(),
            source: Box::new(source),
        }
    }

    /// Create a template formatting error
    pub fn format(template: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Format {
            template: template.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// Writer failures carried by this error, in writer registration order
    ///
    /// Returns a single-element slice for `BackendWrite` and an empty slice
    /// for errors that did not originate in a writer.
    pub fn writer_failures(&self) -> &[LoggerError] {
        match self {
            LoggerError::FlushFailed { failures } => failures,
            LoggerError::BackendWrite { .. } => std::slice::from_ref(self),
            _ => &[],
        }
    }
}
