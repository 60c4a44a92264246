//! File writer implementation

use crate::core::{LogWriter, LoggerError, Result};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends each flushed batch to a file
///
/// The file is opened (and created if missing) for every batch and closed
/// again afterwards, so it can be moved or truncated between flushes. With
/// the `file` feature an exclusive advisory lock is held while appending.
#[derive(Debug, Clone)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, lines: &[String]) -> std::io::Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        #[cfg(feature = "file")]
        fs2::FileExt::lock_exclusive(&file)?;

        let mut writer = BufWriter::new(&file);
        for line in lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        drop(writer);

        #[cfg(feature = "file")]
        fs2::FileExt::unlock(&file)?;

        Ok(())
    }
}

impl LogWriter for FileWriter {
    fn write(&mut self, lines: &[String]) -> Result<()> {
        if lines.is_empty() {
            return Ok(());
        }
        self.append(lines).map_err(|e| {
            LoggerError::io_operation(
                "appending to log file",
                self.path.display().to_string(),
                e,
            )
        })
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_appends_across_batches() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("app.log");
        let mut writer = FileWriter::new(&path);

        writer.write(&["one".to_string()]).unwrap();
        writer.write(&["two".to_string(), "three".to_string()]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "one\ntwo\nthree\n");
    }

    #[test]
    fn test_empty_batch_does_not_create_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("untouched.log");
        let mut writer = FileWriter::new(&path);

        writer.write(&[]).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_unwritable_path_reports_context() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing_dir").join("app.log");
        let mut writer = FileWriter::new(&path);

        let err = writer.write(&["lost".to_string()]).unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("appending to log file"));
    }
}
