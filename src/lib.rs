//! # EasyLog
//!
//! A lightweight, embeddable logging facility. Named clients submit
//! leveled messages into a shared logger, which filters them, queues them,
//! and flushes them in batches to any number of pluggable writers.
//!
//! ## Features
//!
//! - **Named Clients**: one handle per component, each with an optional level override
//! - **Batched Output**: entries are queued and flushed once a threshold is crossed
//! - **Multiple Writers**: file, stream, ring buffer, debug console, and custom writers
//! - **Thread Safe**: lock-free submission from any number of threads

pub mod core;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        DefaultFormatter, ErrorCallback, Formatter, Level, LogClient, LogEntry, LogWriter, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, TimestampFormat,
        DEFAULT_SHUTDOWN_TIMEOUT,
    };
    pub use crate::writers::{DebugWriter, FileWriter, RingBufferWriter, StreamWriter};
}

pub use crate::core::{
    should_emit, DefaultFormatter, EntryQueue, ErrorCallback, Formatter, Level, LogClient,
    LogEntry, LogWriter, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result,
    TimestampFormat, DEFAULT_FLUSH_THRESHOLD, DEFAULT_SHUTDOWN_TIMEOUT, FIELD_SEPARATOR,
};
pub use writers::{DebugWriter, FileWriter, RingBufferWriter, StreamWriter};
