//! Main logger implementation

use super::{
    chain::OutputChain, error::Result, message::MessageBuilder, metrics::LoggerMetrics,
    severity::Severity,
};
use parking_lot::Mutex;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Owns an [`OutputChain`] and serializes delivery through it.
///
/// Message assembly happens in [`MessageBuilder`]s without locking; only the
/// traversal of the chain for a finished message runs under the logger's
/// mutex, so two messages never interleave at a sink.
///
/// A process-wide instance is available through [`Logger::global`], but
/// independent loggers can be created freely, for example in tests.
///
/// # Example
///
/// ```
/// use chainlog::prelude::*;
///
/// let records = BufferSink::new();
/// let logger = Logger::new();
/// logger.set_chain(OutputChain::new().link(records.clone(), Severity::Info, true));
///
/// logger.message(Severity::Warning).append("cache miss rate ").value(&42u32);
/// logger.message(Severity::Debug).append("filtered out");
///
/// assert_eq!(records.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Logger {
    chain: Mutex<OutputChain>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger with an empty chain; messages go nowhere until a
    /// chain is installed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_chain(OutputChain::new())
    }

    #[must_use]
    pub fn with_chain(chain: OutputChain) -> Self {
        Self {
            chain: Mutex::new(chain),
            metrics: LoggerMetrics::new(),
        }
    }

    /// The process-wide default logger, created with an empty chain on
    /// first use.
    ///
    /// Statics are never dropped, so call [`shutdown`](Self::shutdown) on
    /// exit to flush and release the installed sinks.
    pub fn global() -> &'static Logger {
        GLOBAL.get_or_init(Logger::new)
    }

    /// Begin a message at the given severity. Takes no lock.
    #[inline]
    pub fn message(&self, severity: Severity) -> MessageBuilder<'_> {
        MessageBuilder::new(self, severity)
    }

    /// Submit preformatted text as a single message.
    pub fn log(&self, severity: Severity, text: impl AsRef<str>) -> Result<()> {
        self.message(severity).append(text.as_ref()).finish()
    }

    /// Install a new chain, dropping the previous one.
    ///
    /// The swap happens under the delivery lock, so a message is delivered
    /// either entirely through the old chain or entirely through the new
    /// one. The old chain is dropped after the lock is released.
    pub fn set_chain(&self, chain: OutputChain) {
        let old = std::mem::replace(&mut *self.chain.lock(), chain);
        drop(old);
    }

    /// Remove and return the installed chain, leaving an empty one.
    pub fn take_chain(&self) -> OutputChain {
        std::mem::take(&mut *self.chain.lock())
    }

    /// Run `f` against the installed chain under the delivery lock.
    ///
    /// ```
    /// use chainlog::prelude::*;
    ///
    /// let logger = Logger::with_chain(OutputChain::new().link(BufferSink::new(), Severity::Error, true));
    /// logger.update_chain(|chain| {
    ///     if let Some(link) = chain.get_mut(0) {
    ///         link.set_threshold(Severity::Debug);
    ///     }
    /// });
    /// ```
    pub fn update_chain<R>(&self, f: impl FnOnce(&mut OutputChain) -> R) -> R {
        f(&mut self.chain.lock())
    }

    /// Deliver one complete message through the chain.
    ///
    /// The lock guard is released on every exit path, including a sink
    /// that panics.
    pub(crate) fn submit(&self, severity: Severity, text: &str) -> Result<()> {
        let result = self.chain.lock().deliver(severity, text);
        match result {
            Ok(()) => {
                self.metrics.record_delivered();
            }
            Err(_) => {
                self.metrics.record_failed();
            }
        }
        result
    }

    pub fn flush(&self) -> Result<()> {
        self.chain.lock().flush()
    }

    /// Flush and drop the installed chain.
    ///
    /// Sinks release their resources when dropped (files are closed, the
    /// syslog connection is ended). The logger stays usable; later messages
    /// go nowhere until a new chain is installed.
    pub fn shutdown(&self) -> Result<()> {
        let mut chain = self.take_chain();
        chain.flush()
    }

    /// Delivery counters
    ///
    /// # Example
    ///
    /// ```
    /// use chainlog::Logger;
    ///
    /// let logger = Logger::new();
    /// let metrics = logger.metrics();
    /// println!("Delivered: {}", metrics.delivered_count());
    /// println!("Failure rate: {:.2}%", metrics.failure_rate());
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.chain.get_mut().flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}
