//! File sink implementation

use crate::core::{LoggerError, Result, Severity, Sink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes `<text>\n` per message to a file opened at construction.
pub struct FileSink {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl FileSink {
    /// Open `path`, truncating it when `truncate` is set and appending
    /// otherwise. The file is created if missing.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::ResourceUnavailable`] if the file cannot be
    /// opened.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chainlog::appenders::FileSink;
    ///
    /// let sink = FileSink::open("/var/log/app.log", false).unwrap();
    /// ```
    pub fn open(path: impl AsRef<Path>, truncate: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut options = OpenOptions::new();
        if truncate {
            options.write(true).create(true).truncate(true);
        } else {
            options.append(true).create(true);
        }

        let file = options
            .open(&path)
            .map_err(|e| LoggerError::resource_unavailable(path.display().to_string(), e))?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn append(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(path, false)
    }

    pub fn truncate(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(path, true)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&mut self, text: &str) -> std::io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

impl Sink for FileSink {
    fn write(&mut self, _severity: Severity, text: &str) -> Result<()> {
        self.write_line(text)
            .map_err(|e| LoggerError::write(self.path.display().to_string(), e))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_lines_written_immediately() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let mut sink = FileSink::truncate(&path).unwrap();

        sink.write(Severity::Info, "first").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\n");

        sink.write(Severity::Error, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_append_mode_keeps_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "existing\n").unwrap();

        let mut sink = FileSink::append(&path).unwrap();
        sink.write(Severity::Debug, "added").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\nadded\n");
    }

    #[test]
    fn test_truncate_mode_discards_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "stale\n").unwrap();

        let mut sink = FileSink::truncate(&path).unwrap();
        sink.write(Severity::Debug, "fresh").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_open_failure_is_resource_unavailable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("app.log");

        let result = FileSink::append(&path);
        assert!(matches!(result, Err(LoggerError::ResourceUnavailable { .. })));
    }
}
