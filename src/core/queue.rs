//! Unbounded multi-producer entry queue
//!
//! Producers push without taking a lock; a single flusher at a time drains
//! everything that was queued when the drain started. There is no capacity
//! limit and therefore no backpressure: a producer that outpaces its
//! writers grows the queue without bound.

use super::entry::LogEntry;
use crossbeam_queue::SegQueue;

#[derive(Debug, Default)]
pub struct EntryQueue {
    entries: SegQueue<LogEntry>,
}

impl EntryQueue {
    pub fn new() -> Self {
        Self {
            entries: SegQueue::new(),
        }
    }

    /// Append an entry; never blocks
    #[inline]
    pub fn enqueue(&self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Approximate number of queued entries
    ///
    /// May lag behind concurrent producers.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and return the queued entries in FIFO order
    ///
    /// Takes at most as many entries as were observed at the start, so a
    /// drain terminates even under sustained production. Entries pushed
    /// meanwhile stay queued for the next drain. Callers must serialize
    /// drains to keep batches ordered relative to each other.
    pub fn drain_all(&self) -> Vec<LogEntry> {
        let observed = self.entries.len();
        let mut drained = Vec::with_capacity(observed);
        while drained.len() < observed {
            match self.entries.pop() {
                Some(entry) => drained.push(entry),
                None => break,
            }
        }
        drained
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::Level;
    use std::sync::Arc;
    use std::thread;

    fn entry(message: &str) -> LogEntry {
        LogEntry::new(Arc::from(""), Level::Info, message)
    }

    #[test]
    fn test_drain_preserves_fifo() {
        let queue = EntryQueue::new();
        for i in 0..5 {
            queue.enqueue(entry(&format!("m{}", i)));
        }

        let drained: Vec<String> = queue.drain_all().into_iter().map(|e| e.message).collect();
        assert_eq!(drained, vec!["m0", "m1", "m2", "m3", "m4"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drain_empty_queue() {
        let queue = EntryQueue::new();
        assert!(queue.drain_all().is_empty());
    }

    #[test]
    fn test_concurrent_producers_lose_nothing() {
        let queue = Arc::new(EntryQueue::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || {
                    for i in 0..250 {
                        queue.enqueue(entry(&format!("{}-{}", t, i)));
                    }
                })
            })
            .collect();

        let mut collected = Vec::new();
        for handle in handles {
            handle.join().unwrap();
        }
        collected.extend(queue.drain_all());
        collected.extend(queue.drain_all());

        assert_eq!(collected.len(), 1000);

        // Per-producer order survives interleaving
        for t in 0..4 {
            let prefix = format!("{}-", t);
            let seq: Vec<usize> = collected
                .iter()
                .filter_map(|e| e.message.strip_prefix(&prefix))
                .map(|n| n.parse().unwrap())
                .collect();
            assert_eq!(seq, (0..250).collect::<Vec<_>>());
        }
    }
}
