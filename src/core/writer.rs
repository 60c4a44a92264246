//! Writer trait for log output destinations

use super::error::Result;

/// Receives each flushed batch of rendered lines
///
/// Called once per flush with lines in enqueue order. Lines never contain a
/// trailing newline. Writers run on whichever thread performs the flush,
/// which is the background flush worker for automatic flushes.
pub trait LogWriter: Send {
    fn write(&mut self, lines: &[String]) -> Result<()>;
    fn name(&self) -> &str;
}
