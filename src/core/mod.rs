//! Core logger types and traits

pub mod chain;
pub mod config;
pub mod error;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod severity;
pub mod sink;
pub mod stringify;

pub use chain::{Link, OutputChain};
pub use config::{ChainConfig, LinkConfig, SinkConfig};
pub use error::{LoggerError, Result};
pub use logger::Logger;
pub use message::MessageBuilder;
pub use metrics::LoggerMetrics;
pub use severity::Severity;
pub use sink::Sink;
pub use stringify::{stringify, Shown, Stringify};
