//! # chainlog
//!
//! A lightweight, chainable logging facility.
//!
//! A [`Logger`] owns an [`OutputChain`]: an ordered list of sinks (console,
//! file, syslog, in-memory buffer), each with its own severity threshold and
//! its own decision whether to keep passing matched messages down the chain.
//!
//! Messages are assembled on the calling thread with a [`MessageBuilder`]
//! and delivered as one unit under a single lock acquisition.
//!
//! ```
//! use chainlog::prelude::*;
//!
//! let records = BufferSink::new();
//! let logger = Logger::new();
//! logger.set_chain(
//!     OutputChain::new()
//!         .link(ConsoleSink::stderr(), Severity::Critical, false)
//!         .link(records.clone(), Severity::Debug, true),
//! );
//!
//! logger.message(Severity::Error).append("disk ").value(&7u8).append(" failed");
//! assert_eq!(records.messages(), vec!["disk 7 failed"]);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{BufferSink, ConsoleSink, FileSink};
    #[cfg(all(unix, feature = "syslog"))]
    pub use crate::appenders::SyslogSink;
    pub use crate::core::{
        stringify, ChainConfig, Link, LinkConfig, Logger, LoggerError, LoggerMetrics,
        MessageBuilder, OutputChain, Result, Severity, Shown, Sink, SinkConfig, Stringify,
    };
}

pub use appenders::{BufferSink, ConsoleSink, FileSink};
#[cfg(all(unix, feature = "syslog"))]
pub use appenders::SyslogSink;
pub use crate::core::{
    stringify, ChainConfig, Link, LinkConfig, Logger, LoggerError, LoggerMetrics, MessageBuilder,
    OutputChain, Result, Severity, Shown, Sink, SinkConfig, Stringify,
};
