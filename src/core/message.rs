//! Per-call message assembly
//!
//! A [`MessageBuilder`] collects the fragments of one message on the calling
//! thread without touching the logger's lock. The finished text is handed to
//! the logger exactly once, either explicitly through
//! [`finish`](MessageBuilder::finish) or implicitly when the builder goes out
//! of scope.
//!
//! ```
//! use chainlog::prelude::*;
//!
//! let records = BufferSink::new();
//! let logger = Logger::with_chain(OutputChain::new().link(records.clone(), Severity::Debug, true));
//!
//! let disk_id = 3u8;
//! logger
//!     .message(Severity::Error)
//!     .append("disk ")
//!     .value(&disk_id)
//!     .append(" failed");
//!
//! assert_eq!(records.records(), vec![(Severity::Error, "disk 3 failed".to_string())]);
//! ```

use super::{error::Result, logger::Logger, severity::Severity, stringify::Stringify};
use std::fmt::{self, Write as _};

/// Accumulates one message and submits it to its [`Logger`] once.
///
/// Builders are not `Clone`. Moving a builder moves the pending text with
/// it, so only the final owner submits. A builder that never received any
/// text submits nothing.
pub struct MessageBuilder<'a> {
    logger: &'a Logger,
    severity: Severity,
    text: String,
    consumed: bool,
}

impl<'a> MessageBuilder<'a> {
    pub(crate) fn new(logger: &'a Logger, severity: Severity) -> Self {
        Self {
            logger,
            severity,
            text: String::new(),
            consumed: false,
        }
    }

    /// Append a text fragment
    pub fn append(mut self, fragment: &str) -> Self {
        self.push_str(fragment);
        self
    }

    /// Append a value rendered through its [`Stringify`] conversion
    pub fn value<T: Stringify + ?Sized>(mut self, value: &T) -> Self {
        self.push_value(value);
        self
    }

    /// Append a value rendered through its `Display` output
    pub fn display<T: fmt::Display + ?Sized>(mut self, value: &T) -> Self {
        // Writing into a String cannot fail.
        let _ = write!(self.text, "{}", value);
        self
    }

    pub fn push_str(&mut self, fragment: &str) -> &mut Self {
        self.text.push_str(fragment);
        self
    }

    pub fn push_value<T: Stringify + ?Sized>(&mut self, value: &T) -> &mut Self {
        self.text.push_str(&value.stringify());
        self
    }

    #[inline]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Submit the message now and report any delivery error.
    ///
    /// Messages submitted implicitly on drop can only report failures on
    /// stderr; use this when the caller needs to react to a failed write.
    pub fn finish(mut self) -> Result<()> {
        self.submit()
    }

    fn submit(&mut self) -> Result<()> {
        if self.consumed {
            return Ok(());
        }
        self.consumed = true;

        if self.text.is_empty() {
            return Ok(());
        }
        let text = std::mem::take(&mut self.text);
        self.logger.submit(self.severity, &text)
    }
}

impl fmt::Write for MessageBuilder<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}

impl fmt::Debug for MessageBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBuilder")
            .field("severity", &self.severity)
            .field("text", &self.text)
            .field("consumed", &self.consumed)
            .finish()
    }
}

impl Drop for MessageBuilder<'_> {
    fn drop(&mut self) {
        // Panicking here could abort the process during unwinding.
        if let Err(e) = self.submit() {
            eprintln!("[LOGGER ERROR] Failed to deliver {} message: {}", self.severity, e);
        }
    }
}
