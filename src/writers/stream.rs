//! Stream writer implementation

use crate::core::{LogWriter, Result};
use std::io::Write;

/// Writes each line, newline-terminated, to any `Write` stream
///
/// Each batch is assembled in memory and handed to the stream in one
/// `write_all`, then flushed. Nothing from a failed batch is carried over
/// into the next one.
pub struct StreamWriter<W: Write + Send> {
    stream: W,
    name: String,
}

impl<W: Write + Send> StreamWriter<W> {
    pub fn new(stream: W) -> Self {
        Self::with_name(stream, "stream")
    }

    /// Use a custom name in failure reports
    pub fn with_name(stream: W, name: impl Into<String>) -> Self {
        Self {
            stream,
            name: name.into(),
        }
    }

    /// Return the underlying stream
    pub fn into_inner(self) -> W {
        self.stream
    }
}

impl StreamWriter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::with_name(std::io::stdout(), "stdout")
    }
}

impl StreamWriter<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::with_name(std::io::stderr(), "stderr")
    }
}

impl<W: Write + Send> LogWriter for StreamWriter<W> {
    fn write(&mut self, lines: &[String]) -> Result<()> {
        if lines.is_empty() {
            return Ok(());
        }

        let size = lines.iter().map(|line| line.len() + 1).sum();
        let mut batch = Vec::with_capacity(size);
        for line in lines {
            batch.extend_from_slice(line.as_bytes());
            batch.push(b'\n');
        }

        self.stream.write_all(&batch)?;
        self.stream.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_writes_lines_with_newlines() {
        let mut writer = StreamWriter::new(Vec::new());
        writer
            .write(&["first".to_string(), "second".to_string()])
            .unwrap();
        writer.write(&["third".to_string()]).unwrap();

        let bytes = writer.into_inner();
        assert_eq!(String::from_utf8(bytes).unwrap(), "first\nsecond\nthird\n");
    }

    #[test]
    fn test_names() {
        assert_eq!(StreamWriter::new(Vec::new()).name(), "stream");
        assert_eq!(StreamWriter::with_name(Vec::new(), "audit").name(), "audit");
        assert_eq!(StreamWriter::stderr().name(), "stderr");
    }

    #[test]
    fn test_stream_errors_surface() {
        let mut writer = StreamWriter::new(BrokenPipe);
        let err = writer.write(&["lost".to_string()]).unwrap_err();
        assert!(matches!(err, LoggerError::IoError(_)));
    }

    /// Accepts `capacity` bytes, then fails until reopened
    struct ShortStream {
        written: Vec<u8>,
        capacity: usize,
        open: bool,
    }

    impl Write for ShortStream {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if !self.open {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            let n = buf.len().min(self.capacity - self.written.len());
            if n == 0 {
                self.open = false;
                return Err(io::Error::new(io::ErrorKind::WriteZero, "full"));
            }
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_batch_not_carried_into_next() {
        let mut writer = StreamWriter::new(ShortStream {
            written: Vec::new(),
            capacity: 4,
            open: true,
        });
        assert!(writer.write(&["first line".to_string()]).is_err());

        writer.stream.written.clear();
        writer.stream.capacity = 64;
        writer.stream.open = true;
        writer.write(&["second".to_string()]).unwrap();

        let stream = writer.into_inner();
        assert_eq!(String::from_utf8(stream.written).unwrap(), "second\n");
    }
}
