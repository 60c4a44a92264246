//! Debug console writer
//!
//! Mirrors lines to stderr in debug builds only; release builds discard
//! them, so the writer can stay registered in production configurations.

use crate::core::{LogWriter, Result};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct DebugWriter {
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
}

impl DebugWriter {
    pub fn new() -> Self {
        Self {
            use_colors: cfg!(feature = "console"),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Whether lines are actually emitted in this build
    pub const fn is_active() -> bool {
        cfg!(debug_assertions)
    }

    fn decorate(&self, line: &str) -> String {
        #[cfg(feature = "console")]
        if self.use_colors {
            return line.dimmed().to_string();
        }
        line.to_string()
    }
}

impl Default for DebugWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWriter for DebugWriter {
    fn write(&mut self, lines: &[String]) -> Result<()> {
        if !Self::is_active() || lines.is_empty() {
            return Ok(());
        }

        let stderr = std::io::stderr();
        let mut handle = stderr.lock();
        for line in lines {
            writeln!(handle, "{}", self.decorate(line))?;
        }
        handle.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "debug"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines_are_unchanged() {
        let writer = DebugWriter::with_colors(false);
        assert_eq!(writer.decorate("2024 - Info - hi"), "2024 - Info - hi");
    }

    #[test]
    fn test_write_succeeds() {
        let mut writer = DebugWriter::with_colors(false);
        writer.write(&["debug writer smoke test".to_string()]).unwrap();
        writer.write(&[]).unwrap();
        assert_eq!(writer.name(), "debug");
    }
}
