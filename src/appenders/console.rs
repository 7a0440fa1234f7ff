//! Console sink implementation

use crate::core::{LoggerError, Result, Severity, Sink};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Writes each message as one line to stdout or stderr.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    stream: Stream,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }

    fn write_line(out: &mut impl Write, text: &str) -> io::Result<()> {
        out.write_all(text.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, _severity: Severity, text: &str) -> Result<()> {
        let result = match self.stream {
            Stream::Stdout => Self::write_line(&mut io::stdout().lock(), text),
            Stream::Stderr => Self::write_line(&mut io::stderr().lock(), text),
        };
        result.map_err(|e| LoggerError::write(self.name(), e))
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.stream {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        }
    }
}
