//! Logger: client registry, entry queue and writer fan-out
//!
//! Clients submit entries into a shared lock-free queue. Once the queue
//! grows past the flush threshold, a single dedicated worker thread is
//! signalled to drain it and hand the rendered batch to every writer in
//! registration order. [`Logger::flush`] does the same synchronously on the
//! caller's thread.

use super::{
    client::LogClient,
    config::{validate_flush_threshold, LoggerConfig},
    diagnostics::{Diagnostics, ErrorCallback},
    entry::LogEntry,
    error::{LoggerError, Result},
    formatter::{DefaultFormatter, Formatter},
    level::{should_emit, Level},
    metrics::LoggerMetrics,
    queue::EntryQueue,
    timestamp::TimestampFormat,
    writer::LogWriter,
};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TrySendError};
use parking_lot::{Mutex, RwLock};
use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default shutdown timeout for logger cleanup (5 seconds)
///
/// This timeout is used when the logger is dropped without explicit shutdown.
/// For custom timeout control, use the `shutdown()` method instead.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// How often an idle flush worker re-checks for shutdown
const WORKER_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WorkerSignal {
    Flush,
    Shutdown,
}

/// State shared by the logger handle, its clients and the flush worker
pub(crate) struct LoggerShared {
    min_level: RwLock<Level>,
    flush_threshold: AtomicUsize,
    timestamp_format: TimestampFormat,
    queue: EntryQueue,
    clients: RwLock<HashMap<String, Arc<LogClient>>>,
    /// Also serializes flushes: held from drain until the last writer returns
    writers: Mutex<Vec<Box<dyn LogWriter>>>,
    formatter: Arc<dyn Formatter>,
    metrics: LoggerMetrics,
    diagnostics: Diagnostics,
    /// Single slot: a full channel means a flush is already pending
    signal: Sender<WorkerSignal>,
    stopped: AtomicBool,
    /// Set once the loss of the flush worker has been reported
    worker_lost: AtomicBool,
}

impl LoggerShared {
    pub(crate) fn formatter(&self) -> &dyn Formatter {
        self.formatter.as_ref()
    }

    pub(crate) fn effective_min_level(&self, client: &LogClient) -> Level {
        client.min_level().unwrap_or_else(|| *self.min_level.read())
    }

    /// Filter, enqueue and, past the threshold, schedule a background flush
    pub(crate) fn queue_write(&self, client: &LogClient, level: Level, message: String) -> Result<()> {
        if self.stopped.load(Ordering::Acquire) {
            return Err(LoggerError::LoggerStopped);
        }

        if !should_emit(level, self.effective_min_level(client)) {
            self.metrics.record_filtered();
            return Ok(());
        }

        self.queue
            .enqueue(LogEntry::new(client.name_arc(), level, message));
        self.metrics.record_enqueued();

        if self.queue.len() > self.flush_threshold.load(Ordering::Relaxed) {
            self.request_flush();
        }
        Ok(())
    }

    fn request_flush(&self) {
        match self.signal.try_send(WorkerSignal::Flush) {
            Ok(()) => {
                self.metrics.record_auto_flush_request();
            }
            Err(TrySendError::Full(_)) => {
                // A flush is already pending and will pick these entries up
            }
            Err(TrySendError::Disconnected(_)) => {
                if !self.worker_lost.swap(true, Ordering::AcqRel) {
                    self.diagnostics.report(LoggerError::other(
                        "flush worker is not running; entries wait for an explicit flush",
                    ));
                }
            }
        }
    }

    /// Drain the queue and hand the rendered batch to every writer
    ///
    /// Each writer is isolated: an error or panic in one does not keep the
    /// batch from the others. Returns the failures in registration order.
    fn write_queued_lines(&self) -> Vec<LoggerError> {
        let mut writers = self.writers.lock();

        let entries = self.queue.drain_all();
        if entries.is_empty() {
            return Vec::new();
        }

        let lines: Vec<String> = entries
            .iter()
            .map(|entry| entry.render(&self.timestamp_format))
            .collect();
        drop(entries);

        let mut failures = Vec::new();
        for (idx, writer) in writers.iter_mut().enumerate() {
            let write_result =
                panic::catch_unwind(AssertUnwindSafe(|| writer.write(&lines)));

            let cause = match write_result {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => e,
                Err(panic_info) => {
                    LoggerError::writer(format!("panicked: {}", panic_message(&*panic_info)))
                }
            };

            self.metrics.record_writer_failure();
            failures.push(LoggerError::backend_write(idx, writer.name(), cause));
        }

        self.metrics.record_flush(lines.len());
        failures
    }

    /// Flush on the worker thread; nothing that goes wrong here may end it
    fn flush_in_background(&self) {
        let outcome =
            panic::catch_unwind(AssertUnwindSafe(|| collect_failures(self.write_queued_lines())));
        let error = match outcome {
            Ok(Ok(())) => return,
            Ok(Err(e)) => e,
            Err(panic_info) => LoggerError::other(format!(
                "background flush panicked: {}",
                panic_message(&*panic_info)
            )),
        };
        self.diagnostics.report(error);
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn collect_failures(mut failures: Vec<LoggerError>) -> Result<()> {
    match failures.len() {
        0 => Ok(()),
        1 => Err(failures.remove(0)),
        _ => Err(LoggerError::FlushFailed { failures }),
    }
}

fn run_flush_worker(shared: Arc<LoggerShared>, signals: Receiver<WorkerSignal>) {
    loop {
        match signals.recv_timeout(WORKER_POLL_INTERVAL) {
            Ok(WorkerSignal::Flush) => {
                shared.flush_in_background();
                if shared.stopped.load(Ordering::Acquire) {
                    break;
                }
            }
            Ok(WorkerSignal::Shutdown) => break,
            Err(RecvTimeoutError::Timeout) => {
                if shared.stopped.load(Ordering::Acquire) {
                    break;
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

/// Owns the shared logger state and the background flush worker
///
/// # Example
///
/// ```
/// use easy_log::prelude::*;
///
/// let ring = RingBufferWriter::new();
/// let logger = Logger::builder()
///     .min_level(Level::Info)
///     .writer(ring.clone())
///     .build()
///     .unwrap();
///
/// logger.default_client().info("service started");
/// logger.client("db").debug("filtered out");
/// logger.flush().unwrap();
///
/// assert_eq!(ring.len(), 1);
/// ```
pub struct Logger {
    shared: Arc<LoggerShared>,
    worker: Mutex<Option<thread::JoinHandle<()>>>,
}

impl Logger {
    /// Create a logger with default settings and no writers
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    fn start(
        config: LoggerConfig,
        writers: Vec<Box<dyn LogWriter>>,
        formatter: Arc<dyn Formatter>,
        on_error: Option<ErrorCallback>,
    ) -> Result<Self> {
        config.validate()?;

        let (signal, signals) = bounded(1);
        let shared = Arc::new(LoggerShared {
            min_level: RwLock::new(config.min_level),
            flush_threshold: AtomicUsize::new(config.flush_threshold),
            timestamp_format: config.timestamp_format,
            queue: EntryQueue::new(),
            clients: RwLock::new(HashMap::new()),
            writers: Mutex::new(writers),
            formatter,
            metrics: LoggerMetrics::new(),
            diagnostics: Diagnostics::new(on_error),
            signal,
            stopped: AtomicBool::new(false),
            worker_lost: AtomicBool::new(false),
        });

        let worker_shared = Arc::clone(&shared);
        let handle = thread::Builder::new()
            .name("easy-log-flush".to_string())
            .spawn(move || run_flush_worker(worker_shared, signals))
            .map_err(|e| {
                LoggerError::io_operation("spawning flush worker", "thread creation failed", e)
            })?;

        Ok(Self {
            shared,
            worker: Mutex::new(Some(handle)),
        })
    }

    /// Get the client registered under `name`, creating it on first use
    ///
    /// Every call with the same name returns the same instance. A name that
    /// is empty or only whitespace refers to the default client.
    pub fn client(&self, name: &str) -> Arc<LogClient> {
        let name = if name.trim().is_empty() { "" } else { name };

        if let Some(client) = self.shared.clients.read().get(name) {
            return Arc::clone(client);
        }

        let mut clients = self.shared.clients.write();
        let client = clients.entry(name.to_string()).or_insert_with(|| {
            Arc::new(LogClient::new(name, Arc::downgrade(&self.shared)))
        });
        Arc::clone(client)
    }

    /// The unnamed client; its lines carry no client field
    pub fn default_client(&self) -> Arc<LogClient> {
        self.client("")
    }

    /// Names of all clients created so far, sorted
    pub fn client_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.shared.clients.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Attach a writer; it receives only batches flushed after this call
    pub fn add_writer(&self, writer: Box<dyn LogWriter>) -> Result<()> {
        if self.is_stopped() {
            return Err(LoggerError::LoggerStopped);
        }
        self.shared.writers.lock().push(writer);
        Ok(())
    }

    /// Writer names in registration order
    pub fn writer_names(&self) -> Vec<String> {
        self.shared
            .writers
            .lock()
            .iter()
            .map(|w| w.name().to_string())
            .collect()
    }

    pub fn min_level(&self) -> Level {
        *self.shared.min_level.read()
    }

    pub fn set_min_level(&self, level: Level) {
        *self.shared.min_level.write() = level;
    }

    pub fn flush_threshold(&self) -> usize {
        self.shared.flush_threshold.load(Ordering::Relaxed)
    }

    pub fn set_flush_threshold(&self, threshold: usize) -> Result<()> {
        validate_flush_threshold(threshold)?;
        self.shared.flush_threshold.store(threshold, Ordering::Relaxed);
        Ok(())
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.shared.timestamp_format
    }

    /// Approximate number of entries waiting for the next flush
    pub fn queued_len(&self) -> usize {
        self.shared.queue.len()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.shared.metrics
    }

    /// Take the most recent failure of a background flush, if any
    pub fn take_last_error(&self) -> Option<LoggerError> {
        self.shared.diagnostics.take_last_error()
    }

    pub fn is_stopped(&self) -> bool {
        self.shared.stopped.load(Ordering::Acquire)
    }

    /// Write every queued entry to every writer before returning
    ///
    /// All writers are attempted. A single failing writer is reported as
    /// [`LoggerError::BackendWrite`], several as [`LoggerError::FlushFailed`].
    /// Drained entries are not requeued on failure.
    pub fn flush(&self) -> Result<()> {
        collect_failures(self.shared.write_queued_lines())
    }

    /// Stop the flush worker and write out everything still queued
    ///
    /// Submissions made after this call fail with
    /// [`LoggerError::LoggerStopped`].
    ///
    /// # Returns
    ///
    /// `true` if the worker stopped within `timeout` and the final flush
    /// succeeded, `false` otherwise
    pub fn shutdown(&self, timeout: Duration) -> bool {
        if self.shared.stopped.swap(true, Ordering::AcqRel) {
            return true;
        }

        let mut clean = true;

        let worker = self.worker.lock().take();
        if let Some(handle) = worker {
            // A full slot means a pending flush; the worker exits after it
            let _ = self.shared.signal.try_send(WorkerSignal::Shutdown);

            let start = Instant::now();
            loop {
                if handle.is_finished() {
                    if let Err(e) = handle.join() {
                        eprintln!("[LOGGER ERROR] Flush worker panicked during shutdown: {:?}", e);
                        clean = false;
                    }
                    break;
                }

                if start.elapsed() >= timeout {
                    eprintln!(
                        "[LOGGER WARNING] Flush worker did not finish within {:?}.",
                        timeout
                    );
                    clean = false;
                    break;
                }

                thread::sleep(Duration::from_millis(10));
            }
        }

        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
            clean = false;
        }

        clean
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if !self.is_stopped() {
            self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use easy_log::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .min_level(Level::Info)
///     .flush_threshold(50)
///     .writer(RingBufferWriter::new())
///     .on_error(Arc::new(|err| eprintln!("log writer failed: {}", err)))
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    writers: Vec<Box<dyn LogWriter>>,
    formatter: Arc<dyn Formatter>,
    on_error: Option<ErrorCallback>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            writers: Vec::new(),
            formatter: Arc::new(DefaultFormatter),
            on_error: None,
        }
    }

    /// Replace all settings with `config`
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Level) -> Self {
        self.config.min_level = level;
        self
    }

    /// Queue size above which a background flush is scheduled
    #[must_use = "builder methods return a new value"]
    pub fn flush_threshold(mut self, threshold: usize) -> Self {
        self.config.flush_threshold = threshold;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.timestamp_format = format;
        self
    }

    /// Add a writer; writers receive batches in the order they were added
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: LogWriter + 'static>(mut self, writer: W) -> Self {
        self.writers.push(Box::new(writer));
        self
    }

    /// Use a custom template formatter for [`LogClient::submit`]
    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    /// Set a callback for failures of background flushes
    ///
    /// Without a callback these failures are written to stderr. They are
    /// retained for [`Logger::take_last_error`] in both cases.
    #[must_use = "builder methods return a new value"]
    pub fn on_error(mut self, callback: ErrorCallback) -> Self {
        self.on_error = Some(callback);
        self
    }

    /// Build the Logger
    ///
    /// Fails with [`LoggerError::InvalidArgument`] for a zero flush threshold
    /// and [`LoggerError::InvalidConfiguration`] for a custom timestamp
    /// pattern chrono cannot render.
    pub fn build(self) -> Result<Logger> {
        Logger::start(self.config, self.writers, self.formatter, self.on_error)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
