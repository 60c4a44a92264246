//! Logger metrics for observability
//!
//! Counters describing how entries move through the logger: accepted into
//! the queue, rejected by level filtering, delivered to writers, and how
//! often flushes ran or failed.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use easy_log::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_enqueued();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.entries_enqueued(), 1);
/// assert_eq!(metrics.entries_filtered(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Entries that passed the level filter and were queued
    entries_enqueued: AtomicU64,

    /// Entries rejected by the level filter
    entries_filtered: AtomicU64,

    /// Lines handed to writers (counted once per line, not per writer)
    lines_flushed: AtomicU64,

    /// Individual writer calls that returned an error or panicked
    writer_failures: AtomicU64,

    /// Flushes that drained at least one entry
    flushes: AtomicU64,

    /// Automatic flushes requested from the background worker
    auto_flushes_requested: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            entries_enqueued: AtomicU64::new(0),
            entries_filtered: AtomicU64::new(0),
            lines_flushed: AtomicU64::new(0),
            writer_failures: AtomicU64::new(0),
            flushes: AtomicU64::new(0),
            auto_flushes_requested: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn entries_enqueued(&self) -> u64 {
        self.entries_enqueued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn entries_filtered(&self) -> u64 {
        self.entries_filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn lines_flushed(&self) -> u64 {
        self.lines_flushed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn writer_failures(&self) -> u64 {
        self.writer_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn flushes(&self) -> u64 {
        self.flushes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn auto_flushes_requested(&self) -> u64 {
        self.auto_flushes_requested.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_enqueued(&self) -> u64 {
        self.entries_enqueued.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.entries_filtered.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a completed flush of `lines` lines
    #[inline]
    pub fn record_flush(&self, lines: usize) {
        self.flushes.fetch_add(1, Ordering::Relaxed);
        self.lines_flushed.fetch_add(lines as u64, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_writer_failure(&self) -> u64 {
        self.writer_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_auto_flush_request(&self) -> u64 {
        self.auto_flushes_requested.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of submissions rejected by level filtering (0.0 - 100.0)
    pub fn filter_rate(&self) -> f64 {
        let filtered = self.entries_filtered() as f64;
        let total = self.entries_enqueued() as f64 + filtered;
        if total == 0.0 {
            0.0
        } else {
            (filtered / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.entries_enqueued.store(0, Ordering::Relaxed);
        self.entries_filtered.store(0, Ordering::Relaxed);
        self.lines_flushed.store(0, Ordering::Relaxed);
        self.writer_failures.store(0, Ordering::Relaxed);
        self.flushes.store(0, Ordering::Relaxed);
        self.auto_flushes_requested.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            entries_enqueued: AtomicU64::new(self.entries_enqueued()),
            entries_filtered: AtomicU64::new(self.entries_filtered()),
            lines_flushed: AtomicU64::new(self.lines_flushed()),
            writer_failures: AtomicU64::new(self.writer_failures()),
            flushes: AtomicU64::new(self.flushes()),
            auto_flushes_requested: AtomicU64::new(self.auto_flushes_requested()),
        }
    }
}
