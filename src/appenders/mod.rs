//! Sink implementations

pub mod buffer;
pub mod console;
pub mod file;

#[cfg(all(unix, feature = "syslog"))]
pub mod syslog;

pub use buffer::{BufferSink, Record};
pub use console::ConsoleSink;
pub use file::FileSink;

#[cfg(all(unix, feature = "syslog"))]
pub use syslog::SyslogSink;

pub use crate::core::Sink;
