//! In-memory sink for inspecting logged messages

use crate::core::{Result, Severity, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

pub type Record = (Severity, String);

/// Keeps every message it receives.
///
/// Meant for tests: memory grows with every message until [`clear`] is
/// called. Clones share the same storage, so a test can keep one handle
/// while the other is installed in a logger.
///
/// [`clear`]: BufferSink::clear
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    records: Arc<Mutex<Vec<Record>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records since the last [`clear`](Self::clear)
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records.lock().iter().map(|(_, text)| text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Sink for BufferSink {
    fn write(&mut self, severity: Severity, text: &str) -> Result<()> {
        self.records.lock().push((severity, text.to_string()));
        Ok(())
    }

    fn name(&self) -> &str {
        "buffer"
    }
}
