//! In-memory ring buffer writer
//!
//! Keeps only the most recent lines; nothing is persisted. Clones share the
//! same buffer, so a handle kept by the caller sees what the logger wrote
//! into a clone that was registered as a writer.

use crate::core::{LogWriter, LoggerError, Result};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Debug)]
struct Ring {
    capacity: usize,
    lines: VecDeque<String>,
}

impl Ring {
    fn push(&mut self, line: String) {
        self.lines.push_back(line);
        while self.lines.len() > self.capacity {
            self.lines.pop_front();
        }
    }
}

#[derive(Debug, Clone)]
pub struct RingBufferWriter {
    ring: Arc<Mutex<Ring>>,
}

impl RingBufferWriter {
    /// Capacity used by [`RingBufferWriter::new`]
    pub const DEFAULT_CAPACITY: usize = 50;

    pub fn new() -> Self {
        Self::from_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Fails with [`LoggerError::InvalidArgument`] when `capacity` is zero
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        validate_capacity(capacity)?;
        Ok(Self::from_capacity(capacity))
    }

    fn from_capacity(capacity: usize) -> Self {
        Self {
            ring: Arc::new(Mutex::new(Ring {
                capacity,
                lines: VecDeque::with_capacity(capacity),
            })),
        }
    }

    pub fn capacity(&self) -> usize {
        self.ring.lock().capacity
    }

    /// Change the capacity; shrinking discards the oldest lines
    pub fn set_capacity(&self, capacity: usize) -> Result<()> {
        validate_capacity(capacity)?;
        let mut ring = self.ring.lock();
        ring.capacity = capacity;
        while ring.lines.len() > capacity {
            ring.lines.pop_front();
        }
        ring.lines.shrink_to(capacity);
        Ok(())
    }

    /// Buffered lines, oldest first
    pub fn entries(&self) -> Vec<String> {
        self.ring.lock().lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.ring.lock().lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.lock().lines.is_empty()
    }

    pub fn clear(&self) {
        self.ring.lock().lines.clear();
    }
}

fn validate_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 {
        return Err(LoggerError::invalid_argument(
            "capacity",
            "ring buffer capacity must be at least 1",
        ));
    }
    Ok(())
}

impl Default for RingBufferWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWriter for RingBufferWriter {
    fn write(&mut self, lines: &[String]) -> Result<()> {
        let mut ring = self.ring.lock();
        for line in lines {
            ring.push(line.clone());
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "ring_buffer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(range: std::ops::Range<usize>) -> Vec<String> {
        range.map(|i| format!("line {}", i)).collect()
    }

    #[test]
    fn test_keeps_last_k_lines() {
        let mut writer = RingBufferWriter::with_capacity(3).unwrap();
        writer.write(&lines(0..5)).unwrap();
        assert_eq!(writer.entries(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_eviction_across_batches() {
        let mut writer = RingBufferWriter::with_capacity(4).unwrap();
        writer.write(&lines(0..3)).unwrap();
        writer.write(&lines(3..6)).unwrap();
        assert_eq!(writer.entries(), lines(2..6));
    }

    #[test]
    fn test_default_capacity() {
        let mut writer = RingBufferWriter::new();
        assert_eq!(writer.capacity(), 50);
        writer.write(&lines(0..60)).unwrap();
        assert_eq!(writer.len(), 50);
        assert_eq!(writer.entries()[0], "line 10");
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            RingBufferWriter::with_capacity(0),
            Err(LoggerError::InvalidArgument { .. })
        ));
        let writer = RingBufferWriter::new();
        assert!(writer.set_capacity(0).is_err());
        assert_eq!(writer.capacity(), 50);
    }

    #[test]
    fn test_shrinking_drops_oldest() {
        let mut writer = RingBufferWriter::with_capacity(5).unwrap();
        writer.write(&lines(0..5)).unwrap();
        writer.set_capacity(2).unwrap();
        assert_eq!(writer.entries(), vec!["line 3", "line 4"]);
    }

    #[test]
    fn test_clones_share_buffer() {
        let handle = RingBufferWriter::new();
        let mut registered = handle.clone();
        registered.write(&lines(0..2)).unwrap();
        assert_eq!(handle.len(), 2);
        handle.clear();
        assert!(registered.is_empty());
    }
}
