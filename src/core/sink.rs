//! Sink trait for log output destinations

use super::{error::Result, severity::Severity};

/// The physical write capability of one chain link.
///
/// Filtering and propagation are handled by [`Link`](super::chain::Link);
/// a sink only writes what it is handed.
pub trait Sink: Send {
    fn write(&mut self, severity: Severity, text: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&mut self, severity: Severity, text: &str) -> Result<()> {
        (**self).write(severity, text)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
